//! Locating the XBRL instance document inside an EDINET archive.
//!
//! An EDINET download (`type=1`) is a ZIP file laid out roughly like this:
//!
//! ```text
//! XBRL/
//!   PublicDoc/
//!     0000000_header_jpcrp043000-q1r-001_E00001-000_2025-06-30_01_2025-07-15_ixbrl.htm
//!     jpcrp043000-q1r-001_E00001-000_2025-06-30_01_2025-07-15.xbrl   <- instance
//!     jpcrp043000-q1r-001_E00001-000_2025-06-30_01_2025-07-15.xsd
//!   AuditDoc/
//!     jpaud-qrr-cc-001_E00001-000_2025-06-30_01_2025-07-15.xbrl
//! ```
//!
//! The instance of interest is the first `.xbrl` entry under `PublicDoc`; audit report
//! instances under `AuditDoc` are ignored.
use crate::error::{EdinetError, Result};
use std::io::{Cursor, Read, Seek};
use tracing::debug;
use zip::ZipArchive;

const PUBLIC_DOC: &str = "PublicDoc";
const INSTANCE_EXTENSION: &str = ".xbrl";
/// Upper bound on the preallocation taken from an entry's declared size.
const SIZE_HINT_LIMIT: u64 = 64 << 20;

/// Whether an archive entry name is a public XBRL instance document.
fn is_public_instance(name: &str) -> bool {
    name.contains(PUBLIC_DOC) && name.ends_with(INSTANCE_EXTENSION)
}

/// Extracts the public XBRL instance from in-memory ZIP bytes.
///
/// # Errors
///
/// * `EdinetError::ArchiveError` - The bytes are not a readable ZIP archive
/// * `EdinetError::NotFound` - No entry matches `PublicDoc/*.xbrl`
pub fn extract_instance(zip_bytes: &[u8]) -> Result<Vec<u8>> {
    extract_instance_from_reader(Cursor::new(zip_bytes))
}

/// Extracts the public XBRL instance from any seekable ZIP source, such as an open file.
pub fn extract_instance_from_reader<R: Read + Seek>(reader: R) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(reader)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if !is_public_instance(entry.name()) {
            continue;
        }
        debug!("Found instance document {} ({} bytes)", entry.name(), entry.size());

        let mut buf = Vec::with_capacity(entry.size().min(SIZE_HINT_LIMIT) as usize);
        entry
            .read_to_end(&mut buf)
            .map_err(|e| EdinetError::ArchiveError(format!("{}: {}", entry.name(), e)))?;
        return Ok(buf);
    }

    Err(EdinetError::NotFound)
}
