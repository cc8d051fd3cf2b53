//! Data models for ascendant tables.
//!
//! This module contains the record types loaded from the dataset and the
//! static glyph table. Models are independent of UI and persistence.

pub mod record;
pub mod symbols;

// Re-export all model types
pub use record::{CategoryPack, Record};
pub use symbols::{category_label, glyph_for, FALLBACK_GLYPH};
