//! Mapping from descriptor kinds to Go types.

use goshape_ir::{ElementDescriptor, FieldKind};

use crate::naming;

/// Go type mapper.
///
/// Maps the language-agnostic descriptor kinds to Go type syntax. Nested
/// shapes have no scalar mapping; their fields reference the struct type
/// the generator emits for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapper;

impl GoTypeMapper {
    /// Map a scalar kind to its Go type. Returns `None` for nested shapes.
    pub fn scalar(kind: FieldKind) -> Option<&'static str> {
        match kind {
            FieldKind::Bool => Some("bool"),
            FieldKind::String => Some("string"),
            FieldKind::Int => Some("int"),
            FieldKind::Float64 => Some("float64"),
            FieldKind::Timestamp => Some("time.Time"),
            FieldKind::Element => None,
        }
    }

    /// The Go type an inline field uses for this descriptor: the scalar type
    /// when the descriptor is primitive, otherwise the name of the struct
    /// the generator emits for it.
    pub fn field_type(descriptor: &ElementDescriptor) -> String {
        match (descriptor.is_primitive(), Self::scalar(descriptor.kind)) {
            (true, Some(ty)) => ty.to_string(),
            _ => naming::type_name(&descriptor.name),
        }
    }

    /// The Go type of a character-data field: the descriptor's scalar kind,
    /// or `string` when the element is a nested shape whose text was never
    /// narrowed further.
    pub fn chardata_type(descriptor: &ElementDescriptor) -> &'static str {
        Self::scalar(descriptor.kind).unwrap_or("string")
    }
}
