//! Core types, configuration, and errors for the tilegrid layout engine.
//!
//! This crate provides the foundational types shared by the engine crates:
//! - Grid items and rectangles ([`LayoutItem`], [`GridRect`])
//! - The ordered, id-unique [`Layout`] collection
//! - Layout-wide configuration ([`GridConfig`], [`CompactType`])
//! - Descriptor ingestion for host-declared items
//! - Error types

pub mod config;
pub mod descriptor;
pub mod errors;
pub mod item;
pub mod layout;

pub use config::*;
pub use descriptor::*;
pub use errors::*;
pub use item::*;
pub use layout::*;
