//! Ports and Adapters Infrastructure
//!
//! The warranty engine talks to its storage collaborators (product catalogue,
//! warranty store) only through port traits. This module provides the shared
//! error type and marker trait those ports build on.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │        WarrantySeller         │
//! └──────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────┐
//! │  ProductPort / WarrantyPort   │
//! └──────────────────────────────┘
//!        ▲                 ▲
//!        │                 │
//!  ┌─────┴──────┐   ┌──────┴───────┐
//!  │ In-memory  │   │  Database /  │
//!  │  adapter   │   │ external SOR │
//!  └────────────┘   └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! pub trait WarrantyPort: DomainPort {
//!     fn get_by_code(&self, code: &str) -> Result<Option<Warranty>, PortError>;
//!     fn add(&self, warranty: &Warranty) -> Result<(), PortError>;
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Failure reported by a storage collaborator
///
/// The domain passes these through unchanged; it never retries or
/// reinterprets them.
#[derive(Debug, Error)]
pub enum PortError {
    /// No record exists under the given key
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The write would break a uniqueness rule of the store
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// The store could not be reached
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The store failed in some other way
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// Returns true if this error indicates a uniqueness violation
    pub fn is_conflict(&self) -> bool {
        matches!(self, PortError::Conflict { .. })
    }
}

/// Marker trait for every port; services hold ports as `Arc<dyn _>`
pub trait DomainPort: Send + Sync + 'static {}
