//! Element descriptor tree for the goshape struct generator.
//!
//! This crate provides the unified type definitions shared between the
//! document sampler and the code generator.
//!
//! # Architecture
//!
//! ```text
//! sampled XML → sampler (external) → descriptors (JSON) → goshape-ir → codegen
//! ```
//!
//! The descriptor types are designed to be:
//! - Language-agnostic (no Go-specific concerns; those live in the codegen)
//! - Self-contained (serde for the sampler boundary, nothing else)
//! - Immutable once handed to the generator

mod element;
mod error;
mod forest;

pub use element::{ElementDescriptor, FieldKind};
pub use error::{Error, Result};
pub use forest::{from_json_str, from_path, validate};
