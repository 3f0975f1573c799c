mod common;

use common::read_fixture_bytes;
use edinetkit::{EdinetError, FactTable, extract_instance, extract_instance_from_reader};
use std::fs::File;
use std::io::{BufReader, Cursor, Write};
use zip::write::SimpleFileOptions;

const PUBLIC_INSTANCE: &str =
    "XBRL/PublicDoc/jpcrp043000-q1r-001_E00001-000_2025-06-30_01_2025-07-15.xbrl";
const AUDIT_INSTANCE: &str =
    "XBRL/AuditDoc/jpaud-qrr-cc-001_E00001-000_2025-06-30_01_2025-07-15.xbrl";

fn edinet_archive(instance: &[u8]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    writer.start_file(AUDIT_INSTANCE, options).unwrap();
    writer.write_all(b"<xbrli:xbrl/>").unwrap();
    writer
        .start_file("XBRL/PublicDoc/0000000_header_ixbrl.htm", options)
        .unwrap();
    writer.write_all(b"<html></html>").unwrap();
    writer.start_file(PUBLIC_INSTANCE, options).unwrap();
    writer.write_all(instance).unwrap();

    writer.finish().unwrap().into_inner()
}

#[test]
fn extract_public_instance() {
    let instance = read_fixture_bytes("xbrl/quarterly.xbrl");
    let archive = edinet_archive(&instance);

    let extracted = extract_instance(&archive).unwrap();
    assert_eq!(extracted, instance);

    let table = FactTable::from_bytes(&extracted).unwrap();
    assert_eq!(table.period_dates().label().to_string(), "2025Q1");
}

#[test]
fn extract_from_archive_on_disk() {
    let instance = read_fixture_bytes("xbrl/annual.xbrl");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("S100W010.zip");
    std::fs::write(&path, edinet_archive(&instance)).unwrap();

    let file = File::open(&path).unwrap();
    let extracted = extract_instance_from_reader(BufReader::new(file)).unwrap();
    assert_eq!(extracted.len(), instance.len());
}

#[test]
fn archive_without_public_instance() {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("XBRL/AuditDoc/audit.xbrl", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"<xbrli:xbrl/>").unwrap();
    let archive = writer.finish().unwrap().into_inner();

    assert!(matches!(extract_instance(&archive), Err(EdinetError::NotFound)));
}

#[test]
fn error_body_is_not_an_archive() {
    let body = read_fixture_bytes("documents/error.json");
    assert!(matches!(
        extract_instance(&body),
        Err(EdinetError::ArchiveError(_))
    ));
}
