use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};
use crate::events;
use crate::proxy;
use crate::roles;
use crate::storage;
use crate::types::{LedgerError, LedgerEvent, SlotSpec};

//
// CONTRATO PRINCIPAL - SUPPLY TOKEN
// Toda chamada passa pelo proxy: a implementação atual executa contra o
// storage e o endereço deste contrato.
//

#[contract]
pub struct SupplyToken;

/// Publica os eventos de uma operação bem-sucedida e os devolve ao caller.
/// Em caso de erro nada é publicado.
fn commit(env: &Env, result: Result<Vec<LedgerEvent>, LedgerError>) -> Result<Vec<LedgerEvent>, LedgerError> {
    let emitted = result?;
    storage::bump_critical_storage(env);
    events::publish_all(env, &emitted);
    Ok(emitted)
}

#[contractimpl]
impl SupplyToken {

    //
    // PROXY
    //

    /// Liga o administrador de upgrade e a primeira versão da lógica.
    ///
    /// # Erros
    /// - `AlreadyDeployed`: Se o proxy já foi ligado
    /// - `UnknownImplementation`: Se `version` não existe neste binário
    ///
    /// Quem chamar primeiro vira administrador do proxy: `deploy` precisa ir
    /// na mesma transação que cria o contrato.
    pub fn deploy(env: Env, admin: Address, version: u32) -> Result<(), LedgerError> {
        admin.require_auth();
        proxy::deploy(&env, &admin, version)
    }

    /// Migra para a versão `version` da lógica (apenas administrador).
    pub fn upgrade(env: Env, admin: Address, version: u32) -> Result<Vec<LedgerEvent>, LedgerError> {
        admin.require_auth();
        commit(&env, proxy::upgrade(&env, &admin, version))
    }

    /// Substitui o WASM do contrato (apenas administrador).
    pub fn upgrade_code(env: Env, admin: Address, wasm_hash: BytesN<32>) -> Result<(), LedgerError> {
        admin.require_auth();
        proxy::upgrade_code(&env, &admin, wasm_hash)
    }

    pub fn implementation(env: Env) -> Option<u32> {
        proxy::implementation(&env)
    }

    pub fn proxy_admin(env: Env) -> Option<Address> {
        proxy::admin(&env)
    }

    pub fn storage_layout(env: Env) -> Vec<SlotSpec> {
        proxy::layout(&env)
    }

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa o ledger: o caller vira owner e supply controller.
    ///
    /// # Erros
    /// - `NotDeployed`: Se nenhuma implementação foi ligada ainda
    /// - `AlreadyInitialized`: Em qualquer segunda chamada, de qualquer caller
    pub fn initialize(env: Env, caller: Address) -> Result<(), LedgerError> {
        caller.require_auth();
        proxy::current(&env)?.initialize(&env, &caller)?;
        storage::bump_critical_storage(&env);
        Ok(())
    }

    //
    // LEITURAS
    // Sem autorização e sem efeitos.
    //

    pub fn owner(env: Env) -> Option<Address> {
        roles::owner(&env)
    }

    pub fn supply_controller(env: Env) -> Option<Address> {
        roles::supply_controller(&env)
    }

    pub fn total_supply(env: Env) -> u128 {
        storage::get_total_supply(&env)
    }

    pub fn balance_of(env: Env, account: Address) -> u128 {
        storage::get_balance(&env, &account)
    }

    pub fn is_paused(env: Env) -> bool {
        proxy::current(&env)
            .map(|logic| logic.is_paused(&env))
            .unwrap_or(false)
    }

    //
    // SUPPLY
    //

    /// Cria `amount` tokens na conta do supply controller.
    ///
    /// Eventos: `SupplyIncreased(caller, amount)`, `Transfer(Zero, caller, amount)`.
    pub fn increase_supply(env: Env, caller: Address, amount: u128) -> Result<Vec<LedgerEvent>, LedgerError> {
        caller.require_auth();
        let result = proxy::current(&env)?.increase_supply(&env, &caller, amount);
        commit(&env, result)
    }

    /// Destrói `amount` tokens da conta do supply controller.
    ///
    /// Eventos: `SupplyDecreased(caller, amount)`, `Transfer(caller, Zero, amount)`.
    pub fn decrease_supply(env: Env, caller: Address, amount: u128) -> Result<Vec<LedgerEvent>, LedgerError> {
        caller.require_auth();
        let result = proxy::current(&env)?.decrease_supply(&env, &caller, amount);
        commit(&env, result)
    }

    //
    // PAPÉIS
    //

    /// Troca o supply controller (apenas owner).
    pub fn set_supply_controller(
        env: Env,
        caller: Address,
        new_controller: Address,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        caller.require_auth();
        let result = proxy::current(&env)?.set_supply_controller(&env, &caller, &new_controller);
        commit(&env, result)
    }

    /// Transfere o papel de owner (apenas owner).
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        caller.require_auth();
        let result = proxy::current(&env)?.transfer_ownership(&env, &caller, &new_owner);
        commit(&env, result)
    }

    //
    // TRANSFERÊNCIA
    //

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        from.require_auth();
        let result = proxy::current(&env)?.transfer(&env, &from, &to, amount);
        commit(&env, result)
    }

    //
    // PAUSA (lógica v2)
    //

    pub fn pause(env: Env, caller: Address) -> Result<Vec<LedgerEvent>, LedgerError> {
        caller.require_auth();
        let result = proxy::current(&env)?.set_paused(&env, &caller, true);
        commit(&env, result)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<Vec<LedgerEvent>, LedgerError> {
        caller.require_auth();
        let result = proxy::current(&env)?.set_paused(&env, &caller, false);
        commit(&env, result)
    }
}
