use soroban_sdk::{contracterror, contracttype, Address, Env, Symbol};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    InsufficientBalance = 3,
    Overflow = 4,

    // Proxy / upgrade
    NotDeployed = 5,
    AlreadyDeployed = 6,
    UnknownImplementation = 7,
    InvalidVersion = 8,
    LayoutMismatch = 9,

    // Só existem a partir da versão 2 da lógica
    Paused = 10,
    UnsupportedOperation = 11,
}

// ============================================================================
// CONTRAPARTES E EVENTOS
// ============================================================================

/// Lado de uma transferência. `Zero` é o sentinela de mint/burn.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Party {
    Zero,
    Account(Address),
}

/// Eventos de domínio, na ordem em que foram emitidos por uma operação.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LedgerEvent {
    Transfer(Party, Party, u128),
    SupplyIncreased(Address, u128),
    SupplyDecreased(Address, u128),
    SupplyControllerSet(Address, Address),
    OwnershipTransferred(Address, Address),
    Upgraded(u32, u32),
    PauseSet(bool),
}

// ============================================================================
// LAYOUT DE STORAGE
// ============================================================================

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SlotKind {
    Flag = 0,
    Account = 1,
    Amount = 2,
    BalanceTable = 3,
}

/// Slot persistido, como gravado no storage do proxy.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SlotSpec {
    pub name: Symbol,
    pub kind: SlotKind,
}

/// Slot declarado em código por uma versão da lógica.
#[derive(Copy, Clone, Debug)]
pub struct SlotDef {
    pub name: &'static str,
    pub kind: SlotKind,
}

impl SlotDef {
    pub const fn new(name: &'static str, kind: SlotKind) -> Self {
        Self { name, kind }
    }

    pub fn to_spec(&self, env: &Env) -> SlotSpec {
        SlotSpec {
            name: Symbol::new(env, self.name),
            kind: self.kind,
        }
    }
}

/// Migração declarada entre duas versões da lógica.
///
/// `mappings` liga cada slot antigo (nome) ao slot correspondente na nova
/// versão. `seed` grava os valores iniciais dos slots acrescentados.
pub struct Migration {
    pub from: u32,
    pub to: u32,
    pub mappings: &'static [(&'static str, &'static str)],
    pub seed: fn(&Env),
}
