//! The two built-in decks.
//!
//! - [`workflow`]: 17 slides on a dark, neon theme
//! - [`ai_demo`]: 41 slides on a light, corporate theme

pub mod ai_demo;
pub mod workflow;

use crate::deck::TableCell;

/// Build table rows from string literals.
pub(crate) fn rows(cells: &[&[&str]]) -> Vec<Vec<TableCell>> {
    cells
        .iter()
        .map(|row| row.iter().map(|text| TableCell::new(text)).collect())
        .collect()
}
