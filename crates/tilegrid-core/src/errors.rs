//! Error types for the tilegrid engine.
//!
//! Layout operations themselves never fail: unknown ids, degenerate spans and
//! rejected moves all resolve to a defined layout. These errors only surface
//! when a caller builds inputs that break an invariant.

use thiserror::Error;

/// Errors raised while constructing layouts or configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Duplicate layout item id: {id}")]
    DuplicateId { id: String },

    #[error("Column count must be at least 1, got {cols}")]
    InvalidColumns { cols: u32 },

    #[error("Row height must be a positive number of pixels, got {value}")]
    InvalidRowHeight { value: String },

    #[error("Invalid value for attribute '{name}' on item {id}: {value:?}")]
    InvalidAttribute {
        id: String,
        name: String,
        value: String,
    },
}
