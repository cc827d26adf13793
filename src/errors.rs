//! Typed errors for the recommendation engine.
//!
//! The engine itself is total over well-formed input: empty collections
//! produce extremal-but-valid results rather than errors. The variants here
//! cover the two lookup failures a caller can actually cause (swap against
//! an unknown or mismatched item) plus the file and config boundaries the
//! CLI crosses.

use crate::core::GarmentType;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A referenced wardrobe item does not exist in the catalog handed to
    /// the operation. Replaces the silent no-op of naive implementations so
    /// callers can tell "nothing needed to change" from "bad reference".
    #[error("wardrobe item not found: {id}")]
    ItemNotFound { id: String },

    /// A swap tried to put an item of one garment type into a slot of
    /// another.
    #[error("cannot swap a {found} into a {expected} slot")]
    TypeMismatch {
        expected: GarmentType,
        found: GarmentType,
    },

    #[error("failed to read wardrobe file {path}")]
    WardrobeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse wardrobe file {path}")]
    WardrobeParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_not_found_names_the_id() {
        let err = EngineError::ItemNotFound {
            id: "item-42".to_string(),
        };
        assert_eq!(err.to_string(), "wardrobe item not found: item-42");
    }

    #[test]
    fn type_mismatch_names_both_types() {
        let err = EngineError::TypeMismatch {
            expected: GarmentType::Shoes,
            found: GarmentType::Outer,
        };
        assert!(err.to_string().contains("outer"));
        assert!(err.to_string().contains("shoes"));
    }
}
