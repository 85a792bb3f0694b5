//! Loading and validation of descriptor forests.
//!
//! The sampler serializes its inferred forest as a JSON array of
//! descriptors. Invariants that the generator relies on are checked here,
//! up front, so generation itself never has to second-guess the tree.

use std::path::Path;

use crate::{ElementDescriptor, Error, Result};

/// Load a descriptor forest from a JSON file.
pub fn from_path(path: &Path) -> Result<Vec<ElementDescriptor>> {
    let src = std::fs::read_to_string(path).map_err(|source| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    })?;
    from_json_str(&src, path.to_string_lossy())
}

/// Parse a descriptor forest from JSON source.
///
/// `filename` is only used to label the source in diagnostics.
pub fn from_json_str(src: &str, filename: impl Into<String>) -> Result<Vec<ElementDescriptor>> {
    serde_json::from_str(src).map_err(|source| Error::parse(src, filename, source))
}

/// Check the invariants the generator relies on.
///
/// Rejects descriptors with empty names, and attributes that are anything
/// other than plain primitives (an attribute never carries attributes,
/// children, or character data).
pub fn validate(roots: &[ElementDescriptor]) -> Result<()> {
    for (i, root) in roots.iter().enumerate() {
        validate_descriptor(root, &format!("roots[{i}]"))?;
    }
    Ok(())
}

fn validate_descriptor(descriptor: &ElementDescriptor, path: &str) -> Result<()> {
    if descriptor.name.is_empty() {
        return Err(Error::validation("descriptor has an empty name", path));
    }

    for (i, attr) in descriptor.attributes.iter().enumerate() {
        let attr_path = subpath(path, "attributes", i);
        if attr.name.is_empty() {
            return Err(Error::validation("attribute has an empty name", attr_path));
        }
        if !attr.kind.is_scalar() {
            return Err(Error::validation(
                format!("attribute '{}' must have a scalar kind", attr.name),
                attr_path,
            ));
        }
        if attr.has_cdata || !attr.attributes.is_empty() || !attr.children.is_empty() {
            return Err(Error::validation(
                format!("attribute '{}' must be a plain primitive", attr.name),
                attr_path,
            ));
        }
    }

    for (i, child) in descriptor.children.iter().enumerate() {
        validate_descriptor(child, &subpath(path, "children", i))?;
    }

    Ok(())
}

fn subpath(path: &str, segment: &str, index: usize) -> String {
    format!("{path}.{segment}[{index}]")
}

#[cfg(test)]
mod tests {
    use crate::FieldKind;

    use super::*;

    #[test]
    fn test_from_json_str_parses_forest() {
        let roots = from_json_str(
            r#"[
                { "name": "order", "kind": "element",
                  "children": [{ "name": "note", "kind": "string" }] }
            ]"#,
            "test.json",
        )
        .unwrap();

        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].children[0].kind, FieldKind::String);
    }

    #[test]
    fn test_from_json_str_reports_parse_error() {
        let err = from_json_str("[{ \"name\": }]", "broken.json").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_validate_accepts_well_formed_forest() {
        let roots = vec![
            ElementDescriptor::element("order")
                .attribute(ElementDescriptor::new("id", FieldKind::Int))
                .child(ElementDescriptor::new("ship-date", FieldKind::Timestamp)),
        ];
        assert!(validate(&roots).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let roots = vec![ElementDescriptor::element("order").child(ElementDescriptor::element(""))];
        let err = validate(&roots).unwrap_err();
        match *err {
            Error::Validation { path, .. } => assert_eq!(path, "roots[0].children[0]"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_structured_attribute() {
        let bad = ElementDescriptor::element("order")
            .attribute(ElementDescriptor::element("id"));
        let err = validate(&[bad]).unwrap_err();
        match *err {
            Error::Validation { message, .. } => {
                assert!(message.contains("scalar kind"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_cdata_attribute() {
        let bad = ElementDescriptor::element("order")
            .attribute(ElementDescriptor::new("id", FieldKind::Int).cdata());
        assert!(validate(&[bad]).is_err());
    }
}
