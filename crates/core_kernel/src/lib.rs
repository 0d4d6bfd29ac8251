//! Core Kernel - Foundational types for the extended warranty engine
//!
//! This crate provides the building blocks shared by the domain crates:
//! - Money types with precise decimal arithmetic
//! - Timezone handling for business calendar dates
//! - Typed identifiers
//! - Port infrastructure for swappable storage collaborators

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::{Money, Currency, MoneyError, Rate};
pub use temporal::{Timezone, TemporalError};
pub use identifiers::{ProductId, WarrantyId};
pub use error::CoreError;
pub use ports::{PortError, DomainPort};
