//! Recursive generation driver.
//!
//! Walks the descriptor forest in pre-order, renders one struct block per
//! distinct element name, and recurses into non-primitive children. All
//! dedup state lives in an [`EmittedRegistry`] owned by the caller, so a
//! run's output is a pure function of (forest, package, initial registry).

use std::io::Write;

use goshape_ir::ElementDescriptor;
use indexmap::IndexSet;

use crate::error::{Error, Result};
use crate::templates;

/// Set of element names already emitted in a generation run.
///
/// Deduplication keys on the raw descriptor name alone, never on shape:
/// when two differently-shaped descriptors share a name, the first one
/// encountered wins and later ones are silently skipped. That sharp edge is
/// kept for compatibility with the documents-to-structs contract; callers
/// who need both shapes must rename one of the elements.
///
/// Names iterate in emission order.
#[derive(Debug, Clone, Default)]
pub struct EmittedRegistry {
    names: IndexSet<String>,
}

impl EmittedRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a name has already been emitted.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Record a name as emitted. Returns false if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Number of emitted names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Emitted names, in emission order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Go struct generator.
///
/// Borrows the root descriptors and writes struct definitions to a caller-
/// supplied sink, one per distinct element name, in pre-order of first
/// encounter.
pub struct Generator<'a> {
    roots: &'a [ElementDescriptor],
    package: Option<String>,
}

impl<'a> Generator<'a> {
    pub fn new(roots: &'a [ElementDescriptor]) -> Self {
        Self {
            roots,
            package: None,
        }
    }

    /// Set the package name written ahead of the type definitions.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Write the package header (when configured) and every not-yet-emitted
    /// type in the forest to `out`.
    ///
    /// Names already present in `registry` are skipped without output or
    /// recursion. The first error aborts the run; whatever was written
    /// before it stays in the sink.
    pub fn generate<W: Write>(&self, out: &mut W, registry: &mut EmittedRegistry) -> Result<()> {
        if let Some(package) = self.package.as_deref().filter(|p| !p.is_empty()) {
            writeln!(out, "package {package}")?;
            writeln!(out)?;
        }

        for root in self.roots {
            self.emit(root, out, registry)?;
        }
        Ok(())
    }

    /// Generate into a fresh string with a fresh registry.
    pub fn generate_to_string(&self) -> Result<String> {
        let mut out = Vec::new();
        let mut registry = EmittedRegistry::new();
        self.generate(&mut out, &mut registry)?;
        // The sink only ever receives UTF-8 rendered above.
        Ok(String::from_utf8(out).expect("generated code is UTF-8"))
    }

    fn emit<W: Write>(
        &self,
        descriptor: &ElementDescriptor,
        out: &mut W,
        registry: &mut EmittedRegistry,
    ) -> Result<()> {
        if registry.contains(&descriptor.name) {
            return Ok(());
        }
        if descriptor.name.is_empty() {
            return Err(Error::EmptyName);
        }

        out.write_all(templates::element_block(descriptor).as_bytes())?;
        writeln!(out)?;
        registry.insert(descriptor.name.clone());

        for child in &descriptor.children {
            if !child.is_primitive() {
                self.emit(child, out, registry)?;
            }
        }
        Ok(())
    }
}
