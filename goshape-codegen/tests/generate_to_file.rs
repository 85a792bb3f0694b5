//! Generation through a real file sink.

use std::fs;
use std::io::Write;

use goshape_codegen::{EmittedRegistry, Generator};
use goshape_ir::{ElementDescriptor, FieldKind};

#[test]
fn test_generate_into_file_sink() {
    let roots = vec![
        ElementDescriptor::element("Config")
            .attribute(ElementDescriptor::new("version", FieldKind::String))
            .child(ElementDescriptor::new("debug", FieldKind::Bool)),
    ];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.go");

    let mut file = fs::File::create(&path).unwrap();
    let mut registry = EmittedRegistry::new();
    Generator::new(&roots)
        .with_package("config")
        .generate(&mut file, &mut registry)
        .unwrap();
    file.flush().unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("package config\n\n"));
    assert!(written.contains("type Config struct {"));
    assert!(written.contains("Debug bool `xml:\"debug\"`"));
    assert_eq!(registry.len(), 1);
}
