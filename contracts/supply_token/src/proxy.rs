//! Proxy de upgrade.
//!
//! O endereço do contrato e todo o seu storage são fixos; o que muda é o
//! ponteiro para a versão da lógica que executa as chamadas. Os slots do
//! proxy usam a chave `ProxyKey`, um tipo distinto dos `Symbol` usados pela
//! lógica, então nenhum slot da lógica pode sombrear o ponteiro.

use soroban_sdk::{contracttype, log, vec, Address, BytesN, Env, Symbol, Vec};

use crate::logic::{self, TokenLogic};
use crate::storage;
use crate::types::{LedgerError, LedgerEvent, Migration, SlotDef, SlotSpec};

#[contracttype]
#[derive(Clone)]
pub enum ProxyKey {
    Admin,
    Implementation,
    Layout,
}

// ============================================================================
// LEITURAS
// ============================================================================

pub fn admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&ProxyKey::Admin)
}

pub fn implementation(env: &Env) -> Option<u32> {
    env.storage().instance().get(&ProxyKey::Implementation)
}

pub fn layout(env: &Env) -> Vec<SlotSpec> {
    env.storage()
        .instance()
        .get(&ProxyKey::Layout)
        .unwrap_or(Vec::new(env))
}

/// Implementação que atende a chamada atual.
pub fn current(env: &Env) -> Result<&'static dyn TokenLogic, LedgerError> {
    let version = implementation(env).ok_or(LedgerError::NotDeployed)?;
    logic::resolve(version).ok_or(LedgerError::UnknownImplementation)
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    match admin(env) {
        Some(admin) if &admin == caller => Ok(()),
        _ => Err(LedgerError::Unauthorized),
    }
}

fn to_specs(env: &Env, defs: &[SlotDef]) -> Vec<SlotSpec> {
    let mut specs = Vec::new(env);
    for def in defs {
        specs.push_back(def.to_spec(env));
    }
    specs
}

// ============================================================================
// DEPLOY E UPGRADE
// ============================================================================

/// Liga o administrador de deploy e a primeira implementação. Só uma vez.
pub fn deploy(env: &Env, admin: &Address, version: u32) -> Result<(), LedgerError> {
    if env.storage().instance().has(&ProxyKey::Implementation) {
        return Err(LedgerError::AlreadyDeployed);
    }
    let logic = logic::resolve(version).ok_or(LedgerError::UnknownImplementation)?;

    env.storage().instance().set(&ProxyKey::Admin, admin);
    env.storage().instance().set(&ProxyKey::Implementation, &version);
    env.storage()
        .instance()
        .set(&ProxyKey::Layout, &to_specs(env, logic.layout()));
    storage::bump_critical_storage(env);
    log!(env, "proxy deployed", admin, version);

    Ok(())
}

/// Verifica uma migração contra o layout gravado e devolve o novo layout.
///
/// Cada slot gravado precisa de exatamente um mapeamento, e o destino tem que
/// estar na mesma posição e com o mesmo tipo no layout alvo. Slots novos só
/// podem entrar no final.
pub fn check_migration(
    env: &Env,
    stored: &Vec<SlotSpec>,
    migration: &Migration,
    target: &[SlotDef],
) -> Result<Vec<SlotSpec>, LedgerError> {
    let stored_len = stored.len() as usize;
    if target.len() < stored_len || migration.mappings.len() != stored_len {
        return Err(LedgerError::LayoutMismatch);
    }

    for (index, old) in stored.iter().enumerate() {
        let mut mapped = migration
            .mappings
            .iter()
            .filter(|(from, _)| to_symbol(env, from) == old.name);

        let (_, to) = mapped.next().ok_or(LedgerError::LayoutMismatch)?;
        if mapped.next().is_some() {
            return Err(LedgerError::LayoutMismatch);
        }

        // Os dados ficam na chave do slot: destino com outro nome não tem valor
        let new = &target[index];
        let to = to_symbol(env, to);
        if to != old.name || to_symbol(env, new.name) != to || new.kind != old.kind {
            return Err(LedgerError::LayoutMismatch);
        }
    }

    Ok(to_specs(env, target))
}

fn to_symbol(env: &Env, name: &str) -> Symbol {
    Symbol::new(env, name)
}

/// Troca a implementação (apenas administrador), rodando a migração
/// declarada entre a versão atual e `target`.
pub fn upgrade(env: &Env, caller: &Address, target: u32) -> Result<Vec<LedgerEvent>, LedgerError> {
    // === CHECKS ===
    require_admin(env, caller)?;
    let from = implementation(env).ok_or(LedgerError::NotDeployed)?;
    if target <= from {
        return Err(LedgerError::InvalidVersion);
    }
    let migration = logic::migration(from, target)
        .filter(|m| m.from == from && m.to == target)
        .ok_or(LedgerError::InvalidVersion)?;
    let next = logic::resolve(target).ok_or(LedgerError::UnknownImplementation)?;
    let new_layout = check_migration(env, &layout(env), migration, next.layout())?;

    // === EFFECTS ===
    (migration.seed)(env);
    env.storage().instance().set(&ProxyKey::Layout, &new_layout);
    env.storage().instance().set(&ProxyKey::Implementation, &target);
    storage::bump_critical_storage(env);
    log!(env, "implementation upgraded", from, target);

    Ok(vec![env, LedgerEvent::Upgraded(from, target)])
}

/// Substitui o WASM do contrato mantendo endereço e storage.
pub fn upgrade_code(env: &Env, caller: &Address, wasm_hash: BytesN<32>) -> Result<(), LedgerError> {
    require_admin(env, caller)?;

    storage::bump_critical_storage(env);
    log!(env, "contract code replaced", caller);
    env.deployer().update_current_contract_wasm(wasm_hash);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{LogicV1, LogicV2};
    use crate::storage::{SLOT_BALANCE, SLOT_INITIALIZED, SLOT_OWNER, SLOT_PAUSED};
    use crate::storage::{SLOT_SUPPLY_CONTROLLER, SLOT_TOTAL_SUPPLY};
    use crate::types::SlotKind;

    fn no_seed(_env: &Env) {}

    const IDENTITY: &[(&str, &str)] = &[
        (SLOT_INITIALIZED, SLOT_INITIALIZED),
        (SLOT_OWNER, SLOT_OWNER),
        (SLOT_SUPPLY_CONTROLLER, SLOT_SUPPLY_CONTROLLER),
        (SLOT_TOTAL_SUPPLY, SLOT_TOTAL_SUPPLY),
        (SLOT_BALANCE, SLOT_BALANCE),
    ];

    fn v1_stored(env: &Env) -> Vec<SlotSpec> {
        to_specs(env, LogicV1.layout())
    }

    #[test]
    fn test_append_only_migration_is_accepted() {
        let env = Env::default();
        let m = Migration { from: 1, to: 2, mappings: IDENTITY, seed: no_seed };

        let layout = check_migration(&env, &v1_stored(&env), &m, LogicV2.layout()).unwrap();
        assert_eq!(layout.len(), 6);
        assert_eq!(layout.get(5).unwrap().name, Symbol::new(&env, SLOT_PAUSED));
    }

    #[test]
    fn test_reordered_layout_is_rejected() {
        let env = Env::default();
        let m = Migration { from: 1, to: 2, mappings: IDENTITY, seed: no_seed };
        let swapped: &[SlotDef] = &[
            SlotDef::new(SLOT_INITIALIZED, SlotKind::Flag),
            SlotDef::new(SLOT_SUPPLY_CONTROLLER, SlotKind::Account),
            SlotDef::new(SLOT_OWNER, SlotKind::Account),
            SlotDef::new(SLOT_TOTAL_SUPPLY, SlotKind::Amount),
            SlotDef::new(SLOT_BALANCE, SlotKind::BalanceTable),
        ];

        let res = check_migration(&env, &v1_stored(&env), &m, swapped);
        assert_eq!(res, Err(LedgerError::LayoutMismatch));
    }

    #[test]
    fn test_retyped_slot_is_rejected() {
        let env = Env::default();
        let m = Migration { from: 1, to: 2, mappings: IDENTITY, seed: no_seed };
        let retyped: &[SlotDef] = &[
            SlotDef::new(SLOT_INITIALIZED, SlotKind::Flag),
            SlotDef::new(SLOT_OWNER, SlotKind::Account),
            SlotDef::new(SLOT_SUPPLY_CONTROLLER, SlotKind::Account),
            SlotDef::new(SLOT_TOTAL_SUPPLY, SlotKind::Flag),
            SlotDef::new(SLOT_BALANCE, SlotKind::BalanceTable),
        ];

        let res = check_migration(&env, &v1_stored(&env), &m, retyped);
        assert_eq!(res, Err(LedgerError::LayoutMismatch));
    }

    #[test]
    fn test_missing_mapping_is_rejected() {
        let env = Env::default();
        let m = Migration { from: 1, to: 2, mappings: &IDENTITY[..4], seed: no_seed };

        let res = check_migration(&env, &v1_stored(&env), &m, LogicV2.layout());
        assert_eq!(res, Err(LedgerError::LayoutMismatch));
    }

    #[test]
    fn test_mapping_to_another_slot_is_rejected() {
        let env = Env::default();
        let crossed: &[(&str, &str)] = &[
            (SLOT_INITIALIZED, SLOT_INITIALIZED),
            (SLOT_OWNER, SLOT_SUPPLY_CONTROLLER),
            (SLOT_SUPPLY_CONTROLLER, SLOT_OWNER),
            (SLOT_TOTAL_SUPPLY, SLOT_TOTAL_SUPPLY),
            (SLOT_BALANCE, SLOT_BALANCE),
        ];
        let m = Migration { from: 1, to: 2, mappings: crossed, seed: no_seed };

        let res = check_migration(&env, &v1_stored(&env), &m, LogicV2.layout());
        assert_eq!(res, Err(LedgerError::LayoutMismatch));
    }

    #[test]
    fn test_shrinking_layout_is_rejected() {
        let env = Env::default();
        let m = Migration { from: 1, to: 2, mappings: IDENTITY, seed: no_seed };

        let res = check_migration(&env, &v1_stored(&env), &m, &LogicV1.layout()[..3]);
        assert_eq!(res, Err(LedgerError::LayoutMismatch));
    }
}
