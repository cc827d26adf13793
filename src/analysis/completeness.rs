//! Wardrobe completeness scoring.
//!
//! Completeness is coverage of a fixed type x occasion matrix: essential
//! types {top, bottom, shoes} against essential occasions {casual, smart,
//! formal}. A cell is satisfied when at least one available item of that
//! type lists that occasion. The score is the satisfied share of the nine
//! cells, rounded to the nearest integer percent. It deliberately ignores
//! color, brand, wear frequency, and season.

use crate::core::{GarmentType, Occasion, Score, WardrobeItem};
use serde::{Deserialize, Serialize};

pub const ESSENTIAL_TYPES: [GarmentType; 3] =
    [GarmentType::Top, GarmentType::Bottom, GarmentType::Shoes];

pub const ESSENTIAL_OCCASIONS: [Occasion; 3] =
    [Occasion::Casual, Occasion::Smart, Occasion::Formal];

/// Per-cell coverage of the essential type x occasion matrix.
///
/// Rows follow [`ESSENTIAL_TYPES`], columns follow [`ESSENTIAL_OCCASIONS`].
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoverageMatrix {
    cells: [[bool; 3]; 3],
}

impl CoverageMatrix {
    /// Build the matrix from an item collection, counting only available
    /// items.
    pub fn build(items: &[WardrobeItem]) -> Self {
        let mut cells = [[false; 3]; 3];
        for (row, kind) in ESSENTIAL_TYPES.iter().enumerate() {
            for (col, occasion) in ESSENTIAL_OCCASIONS.iter().enumerate() {
                cells[row][col] = items
                    .iter()
                    .any(|i| i.is_available() && i.kind == *kind && i.wears_for(*occasion));
            }
        }
        Self { cells }
    }

    pub fn is_covered(&self, kind: GarmentType, occasion: Occasion) -> bool {
        let row = ESSENTIAL_TYPES.iter().position(|t| *t == kind);
        let col = ESSENTIAL_OCCASIONS.iter().position(|o| *o == occasion);
        match (row, col) {
            (Some(r), Some(c)) => self.cells[r][c],
            _ => false,
        }
    }

    pub fn satisfied_cells(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|covered| **covered)
            .count()
    }

    pub const fn total_cells(&self) -> usize {
        9
    }

    pub fn completeness(&self) -> Score {
        Score::from_ratio(self.satisfied_cells() as f64 / self.total_cells() as f64)
    }
}

/// Wardrobe completeness as a 0-100 score. Empty collections score zero; a
/// wardrobe covering all nine essential cells scores 100.
pub fn calculate_completeness(items: &[WardrobeItem]) -> Score {
    CoverageMatrix::build(items).completeness()
}
