use soroban_sdk::{log, vec, Address, Env, Vec};

use crate::storage;
use crate::types::{LedgerError, LedgerEvent};
use crate::validation;

// ============================================================================
// ROLE REGISTRY - OWNER E SUPPLY CONTROLLER
// ============================================================================

pub fn owner(env: &Env) -> Option<Address> {
    storage::get_owner(env)
}

pub fn supply_controller(env: &Env) -> Option<Address> {
    storage::get_supply_controller(env)
}

/// Primeira configuração dos papéis: o caller vira owner e supply controller.
pub fn initialize(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    validation::require_not_initialized(env)?;

    storage::set_owner(env, caller);
    storage::set_supply_controller(env, caller);
    storage::set_total_supply(env, 0);
    storage::set_initialized(env);
    log!(env, "ledger initialized", caller);

    Ok(())
}

/// Troca o supply controller (apenas owner). O controller anterior perde a
/// autoridade na hora, inclusive se ele mesmo for o caller.
pub fn set_supply_controller(
    env: &Env,
    caller: &Address,
    new_controller: &Address,
) -> Result<Vec<LedgerEvent>, LedgerError> {
    validation::require_owner(env, caller)?;

    // Inicializado implica controller definido
    let old = storage::get_supply_controller(env).ok_or(LedgerError::Unauthorized)?;
    storage::set_supply_controller(env, new_controller);
    log!(env, "supply controller set", old.clone(), new_controller);

    Ok(vec![
        env,
        LedgerEvent::SupplyControllerSet(old, new_controller.clone()),
    ])
}

/// Transfere o papel de owner (apenas owner).
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<Vec<LedgerEvent>, LedgerError> {
    let old = validation::require_owner(env, caller)?;

    storage::set_owner(env, new_owner);
    log!(env, "ownership transferred", old.clone(), new_owner);

    Ok(vec![
        env,
        LedgerEvent::OwnershipTransferred(old, new_owner.clone()),
    ])
}
