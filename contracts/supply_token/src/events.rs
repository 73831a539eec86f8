use soroban_sdk::{symbol_short, Address, Env, Vec};

use crate::types::{LedgerEvent, Party};

//
// EVENTOS DO LEDGER
//

// Transferência (mint/burn usam Party::Zero de um dos lados)
pub fn emit_transfer(env: &Env, from: &Party, to: &Party, amount: u128) {
    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        amount,
    );
}

pub fn emit_supply_increased(env: &Env, to: &Address, amount: u128) {
    env.events().publish(
        (symbol_short!("sup_inc"), to),
        amount,
    );
}

pub fn emit_supply_decreased(env: &Env, from: &Address, amount: u128) {
    env.events().publish(
        (symbol_short!("sup_dec"), from),
        amount,
    );
}

pub fn emit_supply_controller_set(env: &Env, old: &Address, new: &Address) {
    env.events().publish(
        (symbol_short!("sup_ctl"), old, new),
        true,
    );
}

pub fn emit_ownership_transferred(env: &Env, old: &Address, new: &Address) {
    env.events().publish(
        (symbol_short!("own_xfer"), old, new),
        true,
    );
}

// Troca do ponteiro de implementação no proxy
pub fn emit_upgraded(env: &Env, from: u32, to: u32) {
    env.events().publish(
        (symbol_short!("upgraded"), from),
        to,
    );
}

pub fn emit_pause_set(env: &Env, paused: bool) {
    env.events().publish(
        (symbol_short!("paused"),),
        paused,
    );
}

/// Publica, na ordem, os eventos produzidos por uma operação já aplicada.
pub fn publish_all(env: &Env, events: &Vec<LedgerEvent>) {
    for event in events.iter() {
        match event {
            LedgerEvent::Transfer(from, to, amount) => emit_transfer(env, &from, &to, amount),
            LedgerEvent::SupplyIncreased(to, amount) => emit_supply_increased(env, &to, amount),
            LedgerEvent::SupplyDecreased(from, amount) => {
                emit_supply_decreased(env, &from, amount)
            }
            LedgerEvent::SupplyControllerSet(old, new) => {
                emit_supply_controller_set(env, &old, &new)
            }
            LedgerEvent::OwnershipTransferred(old, new) => {
                emit_ownership_transferred(env, &old, &new)
            }
            LedgerEvent::Upgraded(from, to) => emit_upgraded(env, from, to),
            LedgerEvent::PauseSet(paused) => emit_pause_set(env, paused),
        }
    }
}

//
// TESTES
//
