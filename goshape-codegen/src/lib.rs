//! Go struct generation from element descriptor trees.
//!
//! This crate is the emission half of goshape: given the descriptor forest
//! built by a document sampler (see `goshape-ir`), it renders one Go struct
//! definition per distinct element name, with fields tagged for round-trip
//! XML serialization.
//!
//! # Module Organization
//!
//! - [`naming`] - identifier normalization (hyphen merge, initialisms)
//! - [`templates`] - the four emission fragments, as pure functions
//! - [`Generator`] / [`EmittedRegistry`] - recursive driver and dedup state
//! - [`CodeBuilder`] - indentation-aware string builder
//! - [`GoTypeMapper`] - descriptor kinds to Go types

mod code_builder;
mod error;
mod generator;
mod type_mapper;

pub mod naming;
pub mod templates;

pub use code_builder::{CodeBuilder, Indent};
pub use error::{Error, Result};
pub use generator::{EmittedRegistry, Generator};
pub use type_mapper::GoTypeMapper;
