use soroban_sdk::{Address, Env};
use crate::storage;
use crate::types::LedgerError;

// ============================================================================
// VALIDAÇÕES
// Sempre lidas do storage no momento da chamada: uma troca de papel vale
// já para a próxima operação.
// ============================================================================

/// Valida se o caller é o owner
pub fn require_owner(env: &Env, caller: &Address) -> Result<Address, LedgerError> {
    match storage::get_owner(env) {
        Some(owner) if &owner == caller => Ok(owner),
        _ => Err(LedgerError::Unauthorized),
    }
}

/// Valida se o caller é o supply controller
pub fn require_supply_controller(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    match storage::get_supply_controller(env) {
        Some(controller) if &controller == caller => Ok(()),
        _ => Err(LedgerError::Unauthorized),
    }
}

/// Valida se a inicialização ainda não aconteceu
pub fn require_not_initialized(env: &Env) -> Result<(), LedgerError> {
    if storage::is_initialized(env) {
        return Err(LedgerError::AlreadyInitialized);
    }
    Ok(())
}

/// Valida se o contrato não está pausado
pub fn require_not_paused(env: &Env) -> Result<(), LedgerError> {
    if storage::is_paused(env) {
        return Err(LedgerError::Paused);
    }
    Ok(())
}

/// Valida se o balance é suficiente
pub fn require_sufficient_balance(env: &Env, addr: &Address, required: u128) -> Result<u128, LedgerError> {
    let balance = storage::get_balance(env, addr);
    if balance < required {
        return Err(LedgerError::InsufficientBalance);
    }
    Ok(balance)
}
