use soroban_sdk::{log, vec, Address, Env, Vec};

use crate::ledger;
use crate::roles;
use crate::storage::{self, SLOT_BALANCE, SLOT_INITIALIZED, SLOT_OWNER, SLOT_PAUSED};
use crate::storage::{SLOT_SUPPLY_CONTROLLER, SLOT_TOTAL_SUPPLY};
use crate::types::{LedgerError, LedgerEvent, Migration, SlotDef, SlotKind};
use crate::validation;

// ============================================================================
// VERSÕES DA LÓGICA
// ============================================================================

/// Versão mais recente da lógica conhecida por este binário.
pub const LATEST_VERSION: u32 = 2;

const LAYOUT_V1: &[SlotDef] = &[
    SlotDef::new(SLOT_INITIALIZED, SlotKind::Flag),
    SlotDef::new(SLOT_OWNER, SlotKind::Account),
    SlotDef::new(SLOT_SUPPLY_CONTROLLER, SlotKind::Account),
    SlotDef::new(SLOT_TOTAL_SUPPLY, SlotKind::Amount),
    SlotDef::new(SLOT_BALANCE, SlotKind::BalanceTable),
];

const LAYOUT_V2: &[SlotDef] = &[
    SlotDef::new(SLOT_INITIALIZED, SlotKind::Flag),
    SlotDef::new(SLOT_OWNER, SlotKind::Account),
    SlotDef::new(SLOT_SUPPLY_CONTROLLER, SlotKind::Account),
    SlotDef::new(SLOT_TOTAL_SUPPLY, SlotKind::Amount),
    SlotDef::new(SLOT_BALANCE, SlotKind::BalanceTable),
    SlotDef::new(SLOT_PAUSED, SlotKind::Flag),
];

const MIGRATION_V1_V2: Migration = Migration {
    from: 1,
    to: 2,
    mappings: &[
        (SLOT_INITIALIZED, SLOT_INITIALIZED),
        (SLOT_OWNER, SLOT_OWNER),
        (SLOT_SUPPLY_CONTROLLER, SLOT_SUPPLY_CONTROLLER),
        (SLOT_TOTAL_SUPPLY, SLOT_TOTAL_SUPPLY),
        (SLOT_BALANCE, SLOT_BALANCE),
    ],
    seed: seed_v2,
};

fn seed_v2(env: &Env) {
    storage::set_paused(env, false);
}

// ============================================================================
// TOKEN LOGIC
// Os métodos padrão são a semântica da versão 1; versões novas sobrescrevem
// só o que muda.
// ============================================================================

pub trait TokenLogic {
    fn version(&self) -> u32;

    fn layout(&self) -> &'static [SlotDef];

    fn initialize(&self, env: &Env, caller: &Address) -> Result<(), LedgerError> {
        roles::initialize(env, caller)
    }

    fn increase_supply(
        &self,
        env: &Env,
        caller: &Address,
        amount: u128,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        validation::require_supply_controller(env, caller)?;
        ledger::increase_supply(env, caller, amount)
    }

    fn decrease_supply(
        &self,
        env: &Env,
        caller: &Address,
        amount: u128,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        validation::require_supply_controller(env, caller)?;
        ledger::decrease_supply(env, caller, amount)
    }

    fn set_supply_controller(
        &self,
        env: &Env,
        caller: &Address,
        new_controller: &Address,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        roles::set_supply_controller(env, caller, new_controller)
    }

    fn transfer_ownership(
        &self,
        env: &Env,
        caller: &Address,
        new_owner: &Address,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        roles::transfer_ownership(env, caller, new_owner)
    }

    fn transfer(
        &self,
        env: &Env,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        ledger::transfer(env, from, to, amount)
    }

    fn set_paused(
        &self,
        _env: &Env,
        _caller: &Address,
        _paused: bool,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        Err(LedgerError::UnsupportedOperation)
    }

    fn is_paused(&self, _env: &Env) -> bool {
        false
    }
}

/// Lógica original: mint/burn pelo supply controller, papéis e transferência.
pub struct LogicV1;

impl TokenLogic for LogicV1 {
    fn version(&self) -> u32 {
        1
    }

    fn layout(&self) -> &'static [SlotDef] {
        LAYOUT_V1
    }
}

/// Versão 1 + pausa controlada pelo owner.
pub struct LogicV2;

impl TokenLogic for LogicV2 {
    fn version(&self) -> u32 {
        2
    }

    fn layout(&self) -> &'static [SlotDef] {
        LAYOUT_V2
    }

    fn increase_supply(
        &self,
        env: &Env,
        caller: &Address,
        amount: u128,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        validation::require_supply_controller(env, caller)?;
        validation::require_not_paused(env)?;
        ledger::increase_supply(env, caller, amount)
    }

    fn decrease_supply(
        &self,
        env: &Env,
        caller: &Address,
        amount: u128,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        validation::require_supply_controller(env, caller)?;
        validation::require_not_paused(env)?;
        ledger::decrease_supply(env, caller, amount)
    }

    fn transfer(
        &self,
        env: &Env,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        validation::require_not_paused(env)?;
        ledger::transfer(env, from, to, amount)
    }

    fn set_paused(
        &self,
        env: &Env,
        caller: &Address,
        paused: bool,
    ) -> Result<Vec<LedgerEvent>, LedgerError> {
        validation::require_owner(env, caller)?;

        storage::set_paused(env, paused);
        log!(env, "pause set", paused);

        Ok(vec![env, LedgerEvent::PauseSet(paused)])
    }

    fn is_paused(&self, env: &Env) -> bool {
        storage::is_paused(env)
    }
}

// ============================================================================
// REGISTRO
// ============================================================================

/// Resolve o número de versão gravado no proxy para a implementação.
pub fn resolve(version: u32) -> Option<&'static dyn TokenLogic> {
    match version {
        1 => Some(&LogicV1),
        LATEST_VERSION => Some(&LogicV2),
        _ => None,
    }
}

/// Migração declarada entre duas versões, se existir.
pub fn migration(from: u32, to: u32) -> Option<&'static Migration> {
    match (from, to) {
        (1, 2) => Some(&MIGRATION_V1_V2),
        _ => None,
    }
}
