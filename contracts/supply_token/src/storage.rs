use soroban_sdk::{symbol_short, Address, Env};

// ============================================================================
// CONSTANTES
// ============================================================================

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// SLOTS DA LÓGICA
// A ordem e o tipo destes slots fazem parte do layout persistido; o proxy
// recusa upgrades que os reordenem ou troquem de tipo.
// ============================================================================

pub const SLOT_INITIALIZED: &str = "init";
pub const SLOT_OWNER: &str = "owner";
pub const SLOT_SUPPLY_CONTROLLER: &str = "supp_ctl";
pub const SLOT_TOTAL_SUPPLY: &str = "supply";
pub const SLOT_BALANCE: &str = "balance";
pub const SLOT_PAUSED: &str = "paused";

// ============================================================================
// FUNÇÕES DE BUMP (TTL)
// ============================================================================

/// Faz bump do TTL de storage crítico (papéis, supply, ponteiro do proxy)
pub fn bump_critical_storage(env: &Env) {
    env.storage().instance().extend_ttl(
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

/// Faz bump do TTL de balance de um endereço
pub fn bump_balance(env: &Env, addr: &Address) {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().extend_ttl(
        &key,
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

// ============================================================================
// INITIALIZED
// ============================================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("init"))
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage()
        .instance()
        .set(&symbol_short!("init"), &true);
}

// ============================================================================
// PAPÉIS
// ============================================================================

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&symbol_short!("owner"))
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&symbol_short!("owner"), owner);
}

pub fn get_supply_controller(env: &Env) -> Option<Address> {
    env.storage()
        .instance()
        .get(&symbol_short!("supp_ctl"))
}

pub fn set_supply_controller(env: &Env, controller: &Address) {
    env.storage()
        .instance()
        .set(&symbol_short!("supp_ctl"), controller);
}

// ============================================================================
// TOTAL SUPPLY
// ============================================================================

pub fn get_total_supply(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&symbol_short!("supply"))
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: u128) {
    env.storage()
        .instance()
        .set(&symbol_short!("supply"), &amount);
}

// ============================================================================
// BALANCE
// ============================================================================

pub fn get_balance(env: &Env, addr: &Address) -> u128 {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, addr: &Address, amount: u128) {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().set(&key, &amount);
    bump_balance(env, addr);
}

// ============================================================================
// PAUSED (layout v2)
// ============================================================================

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("paused"))
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&symbol_short!("paused"), &paused);
}
