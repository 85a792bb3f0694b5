//! The four emission fragments.
//!
//! Each fragment is a pure function from a descriptor to text; the struct
//! block composes the field fragments through the code builder. Rendering
//! never recurses into children and never touches the registry; both are
//! the generator's job.
//!
//! Struct tags always carry the raw source name, so generated code decodes
//! and re-encodes the documents it was inferred from.

use goshape_ir::ElementDescriptor;

use crate::code_builder::CodeBuilder;
use crate::naming;
use crate::type_mapper::GoTypeMapper;

/// Render an attribute field, e.g. ``ID int `xml:"id,attr"` ``.
pub fn attribute_field(attr: &ElementDescriptor) -> String {
    format!(
        "{} {} `xml:\"{},attr\"`",
        naming::field_name(&attr.name),
        GoTypeMapper::field_type(attr),
        attr.name,
    )
}

/// Render a child element field, e.g. ``Items []Item `xml:"item"` ``.
pub fn child_field(child: &ElementDescriptor) -> String {
    let slice = if child.is_list { "[]" } else { "" };
    format!(
        "{} {}{} `xml:\"{}\"`",
        naming::field_name(&child.name),
        slice,
        GoTypeMapper::field_type(child),
        child.name,
    )
}

/// Render the character-data field, e.g. ``Text string `xml:",chardata"` ``.
pub fn chardata_field(descriptor: &ElementDescriptor) -> String {
    format!("Text {} `xml:\",chardata\"`", GoTypeMapper::chardata_type(descriptor))
}

/// Render the full struct block for a descriptor: attribute fields, child
/// fields, then the character-data field when the element carries text.
pub fn element_block(descriptor: &ElementDescriptor) -> String {
    CodeBuilder::go()
        .line(&format!("type {} struct {{", naming::type_name(&descriptor.name)))
        .indent()
        .each(&descriptor.attributes, |b, attr| b.line(&attribute_field(attr)))
        .each(&descriptor.children, |b, child| b.line(&child_field(child)))
        .when(descriptor.has_cdata, |b| b.line(&chardata_field(descriptor)))
        .dedent()
        .line("}")
        .build()
}
