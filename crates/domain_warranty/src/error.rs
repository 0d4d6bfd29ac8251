//! Warranty domain errors
//!
//! Business rejections and infrastructure failures are kept apart: a
//! `RejectionReason` means the request broke a sales rule, while a
//! `PortError` means a collaborator failed and is passed through untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::{CoreError, PortError};

/// Why a warranty request was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum RejectionReason {
    /// Product code or customer name is absent or empty
    #[error("Product code and customer name are required to generate a warranty")]
    MissingRequiredData,

    /// The product already carries an extended warranty
    #[error("The product already has an extended warranty")]
    AlreadyInsured,

    /// The product code has exactly three vowels
    #[error("This product is not eligible for an extended warranty")]
    NotEligible,
}

/// Errors that can occur in the warranty domain
#[derive(Debug, Error)]
pub enum WarrantyError {
    /// The request was rejected by a business rule
    #[error("{0}")]
    Rejected(RejectionReason),

    /// A storage collaborator failed
    #[error(transparent)]
    Port(#[from] PortError),

    /// Invalid domain data (e.g. a negative product price)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Date or price arithmetic could not be completed
    #[error("Calculation error: {0}")]
    Calculation(String),
}

impl WarrantyError {
    /// Creates a calculation error
    pub fn calculation(message: impl Into<String>) -> Self {
        WarrantyError::Calculation(message.into())
    }

    /// Returns the rejection reason, if this error is a business rejection
    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            WarrantyError::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl From<RejectionReason> for WarrantyError {
    fn from(reason: RejectionReason) -> Self {
        WarrantyError::Rejected(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_reason_message() {
        let error = WarrantyError::from(RejectionReason::AlreadyInsured);
        assert_eq!(error.to_string(), "The product already has an extended warranty");
        assert_eq!(error.rejection(), Some(RejectionReason::AlreadyInsured));
    }

    #[test]
    fn test_port_error_passes_through_unchanged() {
        let error = WarrantyError::from(PortError::connection("warranty store unreachable"));
        assert_eq!(error.to_string(), "Connection error: warranty store unreachable");
        assert_eq!(error.rejection(), None);
    }
}
