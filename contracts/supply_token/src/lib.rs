#![no_std]

pub mod storage;
pub mod types;
pub mod validation;
pub mod events;
pub mod ledger;
pub mod roles;
pub mod logic;
pub mod proxy;
pub mod token;

// ============================================================================
// CONTRATO PRINCIPAL
// ============================================================================

pub use token::{SupplyToken, SupplyTokenClient};
pub use types::*;
