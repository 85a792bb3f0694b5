//! Element descriptor types.
//!
//! An [`ElementDescriptor`] captures one distinct element shape observed in
//! sampled documents. Descriptors form a tree: attributes and children are
//! themselves descriptors. The sampler constructs the tree; the generator
//! treats it as read-only input.

use serde::{Deserialize, Serialize};

/// Inferred value kind of an element or attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Bool,
    String,
    Int,
    Float64,
    Timestamp,
    /// A nested shape, described by the descriptor's own attributes and
    /// children rather than by a scalar value.
    Element,
}

impl FieldKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::String => "string",
            FieldKind::Int => "int",
            FieldKind::Float64 => "float64",
            FieldKind::Timestamp => "timestamp",
            FieldKind::Element => "element",
        }
    }

    /// Returns true for the five scalar kinds.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, FieldKind::Element)
    }
}

/// One distinct element shape found in sampled documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDescriptor {
    /// Raw element/attribute name as seen in source documents.
    pub name: String,
    /// Inferred value kind.
    pub kind: FieldKind,
    /// Whether the element may repeat under its parent.
    #[serde(default)]
    pub is_list: bool,
    /// Whether the element carries character-data content.
    #[serde(default)]
    pub has_cdata: bool,
    /// Attribute descriptors, in document order. Always primitive-typed.
    #[serde(default)]
    pub attributes: Vec<ElementDescriptor>,
    /// Nested element descriptors, in document order.
    #[serde(default)]
    pub children: Vec<ElementDescriptor>,
}

impl ElementDescriptor {
    /// Create a descriptor with the given name and kind.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_list: false,
            has_cdata: false,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a nested-element descriptor.
    pub fn element(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Element)
    }

    /// Mark the element as repeating.
    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    /// Mark the element as carrying character data.
    pub fn cdata(mut self) -> Self {
        self.has_cdata = true;
        self
    }

    /// Add an attribute descriptor.
    pub fn attribute(mut self, attr: ElementDescriptor) -> Self {
        self.attributes.push(attr);
        self
    }

    /// Add a child descriptor.
    pub fn child(mut self, child: ElementDescriptor) -> Self {
        self.children.push(child);
        self
    }

    /// A descriptor is primitive when it has no character data and its kind
    /// is scalar. Primitive descriptors are rendered inline as fields and
    /// never expanded into their own type definition.
    pub fn is_primitive(&self) -> bool {
        !self.has_cdata && self.kind.is_scalar()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_as_str() {
        assert_eq!(FieldKind::Bool.as_str(), "bool");
        assert_eq!(FieldKind::Float64.as_str(), "float64");
        assert_eq!(FieldKind::Element.as_str(), "element");
    }

    #[test]
    fn test_scalar_kinds() {
        assert!(FieldKind::String.is_scalar());
        assert!(FieldKind::Timestamp.is_scalar());
        assert!(!FieldKind::Element.is_scalar());
    }

    #[test]
    fn test_primitive_classification() {
        assert!(ElementDescriptor::new("note", FieldKind::String).is_primitive());
        assert!(!ElementDescriptor::element("order").is_primitive());
        // Character data makes any descriptor non-primitive, scalar or not.
        assert!(!ElementDescriptor::new("note", FieldKind::String).cdata().is_primitive());
    }

    #[test]
    fn test_builder() {
        let order = ElementDescriptor::element("order")
            .attribute(ElementDescriptor::new("id", FieldKind::Int))
            .child(ElementDescriptor::new("ship-date", FieldKind::Timestamp).list());

        assert_eq!(order.attributes.len(), 1);
        assert_eq!(order.children.len(), 1);
        assert!(order.children[0].is_list);
        assert!(!order.has_cdata);
    }

    #[test]
    fn test_descriptor_json_round_trip() {
        let json = r#"{
            "name": "order",
            "kind": "element",
            "attributes": [{ "name": "id", "kind": "int" }],
            "children": [{ "name": "ship-date", "kind": "timestamp", "isList": true }]
        }"#;

        let descriptor: ElementDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.name, "order");
        assert_eq!(descriptor.kind, FieldKind::Element);
        assert_eq!(descriptor.attributes[0].kind, FieldKind::Int);
        assert!(descriptor.children[0].is_list);

        let serialized = serde_json::to_string(&descriptor).unwrap();
        let back: ElementDescriptor = serde_json::from_str(&serialized).unwrap();
        assert_eq!(back, descriptor);
    }
}
