use std::fs::File;
use std::io::Write;

use cvparse_ingest::{IngestError, extract_text};

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.txt");
    std::fs::write(&path, "plain text resume").unwrap();

    match extract_text(&path) {
        Err(IngestError::UnsupportedFormat(ext)) => assert_eq!(ext, "txt"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn missing_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume");
    std::fs::write(&path, "no extension").unwrap();

    assert!(matches!(
        extract_text(&path),
        Err(IngestError::UnsupportedFormat(ext)) if ext.is_empty()
    ));
}

#[test]
fn extension_match_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.DOCX");

    let file = File::create(&path).unwrap();
    let mut archive = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    archive.start_file("word/document.xml", options).unwrap();
    archive
        .write_all(
            br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p></w:body></w:document>"#,
        )
        .unwrap();
    archive.finish().unwrap();

    assert_eq!(extract_text(&path).unwrap(), "Jane Doe");
}

#[test]
fn corrupt_docx_surfaces_docx_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.docx");
    std::fs::write(&path, b"this is not a zip archive").unwrap();

    assert!(matches!(extract_text(&path), Err(IngestError::Docx(_))));
}
