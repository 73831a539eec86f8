use soroban_sdk::{log, vec, Address, Env, Vec};

use crate::storage;
use crate::types::{LedgerError, LedgerEvent, Party};
use crate::validation;

// ============================================================================
// BALANCE LEDGER - CHECK THEN APPLY
// Todos os valores novos são calculados antes de qualquer escrita; um erro
// devolve a operação sem efeito parcial.
// ============================================================================

/// Credita `amount` em `account` e no supply total (mint).
///
/// Supply e balance são verificados de forma independente; qualquer um dos
/// dois estourando devolve `Overflow`.
pub fn increase_supply(
    env: &Env,
    account: &Address,
    amount: u128,
) -> Result<Vec<LedgerEvent>, LedgerError> {
    // === CHECKS ===
    let new_supply = storage::get_total_supply(env)
        .checked_add(amount)
        .ok_or(LedgerError::Overflow)?;
    let new_balance = storage::get_balance(env, account)
        .checked_add(amount)
        .ok_or(LedgerError::Overflow)?;

    // === EFFECTS ===
    storage::set_balance(env, account, new_balance);
    storage::set_total_supply(env, new_supply);
    log!(env, "supply increased", account, amount);

    Ok(vec![
        env,
        LedgerEvent::SupplyIncreased(account.clone(), amount),
        LedgerEvent::Transfer(Party::Zero, Party::Account(account.clone()), amount),
    ])
}

/// Debita `amount` de `account` e do supply total (burn).
pub fn decrease_supply(
    env: &Env,
    account: &Address,
    amount: u128,
) -> Result<Vec<LedgerEvent>, LedgerError> {
    // === CHECKS ===
    let balance = validation::require_sufficient_balance(env, account, amount)?;
    let new_balance = balance
        .checked_sub(amount)
        .ok_or(LedgerError::InsufficientBalance)?;
    // supply >= balance, só falha se o invariante já estiver quebrado
    let new_supply = storage::get_total_supply(env)
        .checked_sub(amount)
        .ok_or(LedgerError::InsufficientBalance)?;

    // === EFFECTS ===
    storage::set_balance(env, account, new_balance);
    storage::set_total_supply(env, new_supply);
    log!(env, "supply decreased", account, amount);

    Ok(vec![
        env,
        LedgerEvent::SupplyDecreased(account.clone(), amount),
        LedgerEvent::Transfer(Party::Account(account.clone()), Party::Zero, amount),
    ])
}

/// Move `amount` de `from` para `to` sem alterar o supply.
pub fn transfer(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: u128,
) -> Result<Vec<LedgerEvent>, LedgerError> {
    // === CHECKS ===
    let from_balance = validation::require_sufficient_balance(env, from, amount)?;

    // Para si mesmo ou valor zero: nada é gravado, só o evento
    if from != to && amount > 0 {
        let new_from = from_balance
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        let new_to = storage::get_balance(env, to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        // === EFFECTS ===
        storage::set_balance(env, from, new_from);
        storage::set_balance(env, to, new_to);
    }

    Ok(vec![
        env,
        LedgerEvent::Transfer(
            Party::Account(from.clone()),
            Party::Account(to.clone()),
            amount,
        ),
    ])
}
