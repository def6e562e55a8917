//! Report directory persistence: write/read/verify a [`RunReportV1`] on disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   report.json         -- canonical JSON report (authoritative)
//!   transcript.txt      -- rendered transcript (derived from report.json)
//!   report_digest.txt   -- ASCII digest string, "sha256:<hex>"
//! ```
//!
//! The directory path is never part of any hash surface.
//!
//! # Fail-closed semantics
//!
//! - Missing file → error
//! - Extra file → error
//! - Non-canonical `report.json` → error
//! - Stored digest differs from the recomputed one → error
//! - Transcript differs from the one rendered from `report.json` → error

use std::collections::BTreeSet;
use std::path::Path;

use sift_kernel::proof::hash::ContentHash;

use crate::report::{report_digest, ReportError, RunReportV1};

const REPORT_FILENAME: &str = "report.json";
const TRANSCRIPT_FILENAME: &str = "transcript.txt";
const DIGEST_FILENAME: &str = "report_digest.txt";

const REPORT_DIR_FILENAMES: &[&str] = &[REPORT_FILENAME, TRANSCRIPT_FILENAME, DIGEST_FILENAME];

/// Error writing a report directory.
#[derive(Debug)]
pub enum ReportDirWriteError {
    /// I/O error during write.
    Io { detail: String },
    /// The report could not be serialized.
    Report(ReportError),
}

impl std::fmt::Display for ReportDirWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Report(e) => write!(f, "report error: {e}"),
        }
    }
}

impl std::error::Error for ReportDirWriteError {}

/// Error reading a report directory.
#[derive(Debug)]
pub enum ReportDirReadError {
    /// I/O error during read.
    Io { detail: String },
    /// A required file is missing.
    MissingFile { filename: String },
    /// A file outside the fixed layout exists in the directory.
    ExtraFile { name: String },
    /// `report.json` is malformed or not canonical.
    Report(ReportError),
    /// `report_digest.txt` does not match the digest of `report.json`.
    DigestMismatch { stored: String, recomputed: String },
    /// `transcript.txt` does not match the transcript rendered from `report.json`.
    TranscriptMismatch,
}

impl std::fmt::Display for ReportDirReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::MissingFile { filename } => write!(f, "missing file: {filename}"),
            Self::ExtraFile { name } => write!(f, "undeclared extra file: {name}"),
            Self::Report(e) => write!(f, "report error: {e}"),
            Self::DigestMismatch { stored, recomputed } => {
                write!(
                    f,
                    "digest mismatch: stored={stored}, recomputed={recomputed}"
                )
            }
            Self::TranscriptMismatch => write!(f, "transcript does not match report"),
        }
    }
}

impl std::error::Error for ReportDirReadError {}

/// A report directory that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedReportV1 {
    pub report: RunReportV1,
    pub transcript: String,
    pub digest: ContentHash,
}

/// Write `report` into `dir`, creating the directory if needed.
///
/// Returns the report digest written to `report_digest.txt`.
///
/// # Errors
///
/// Returns [`ReportDirWriteError`] on I/O failure or serialization error.
pub fn write_report_dir(
    report: &RunReportV1,
    dir: &Path,
) -> Result<ContentHash, ReportDirWriteError> {
    let bytes = report.canonical_bytes().map_err(ReportDirWriteError::Report)?;
    let digest = report_digest(&bytes);

    std::fs::create_dir_all(dir).map_err(|e| ReportDirWriteError::Io {
        detail: format!("create_dir_all: {e}"),
    })?;
    write_atomic(&dir.join(REPORT_FILENAME), &bytes)?;
    write_atomic(&dir.join(TRANSCRIPT_FILENAME), report.transcript().as_bytes())?;
    write_atomic(&dir.join(DIGEST_FILENAME), digest.as_str().as_bytes())?;
    Ok(digest)
}

/// Read and fully check a report directory.
///
/// # Errors
///
/// Returns [`ReportDirReadError`] on the first failed check.
pub fn read_report_dir(dir: &Path) -> Result<LoadedReportV1, ReportDirReadError> {
    let report_bytes = read_required(dir, REPORT_FILENAME)?;
    let transcript_bytes = read_required(dir, TRANSCRIPT_FILENAME)?;
    let digest_bytes = read_required(dir, DIGEST_FILENAME)?;

    for name in list_files(dir)? {
        if !REPORT_DIR_FILENAMES.contains(&name.as_str()) {
            return Err(ReportDirReadError::ExtraFile { name });
        }
    }

    let recomputed = report_digest(&report_bytes);
    let stored = String::from_utf8_lossy(&digest_bytes).trim().to_string();
    if recomputed.as_str() != stored {
        return Err(ReportDirReadError::DigestMismatch {
            stored,
            recomputed: recomputed.as_str().to_string(),
        });
    }

    let report =
        RunReportV1::from_canonical_bytes(&report_bytes).map_err(ReportDirReadError::Report)?;
    let transcript = report.transcript();
    if transcript.as_bytes() != transcript_bytes.as_slice() {
        return Err(ReportDirReadError::TranscriptMismatch);
    }

    Ok(LoadedReportV1 {
        report,
        transcript,
        digest: recomputed,
    })
}

/// Verify a report directory and return its digest.
///
/// # Errors
///
/// Returns [`ReportDirReadError`] on the first failed check.
pub fn verify_report_dir(dir: &Path) -> Result<ContentHash, ReportDirReadError> {
    read_report_dir(dir).map(|loaded| loaded.digest)
}

/// Prefix of the staging file each report file is written to before it is
/// renamed into place.
const STAGING_PREFIX: &str = ".tmp_";

/// Stage `content` next to `path`, then rename it over `path`.
///
/// A reader never sees a half-written `report.json`; a crash between the
/// two steps leaves only the staging file behind.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ReportDirWriteError> {
    let (Some(dir), Some(name)) = (path.parent(), path.file_name()) else {
        return Err(ReportDirWriteError::Io {
            detail: format!("{} has no parent directory", path.display()),
        });
    };
    let staged = dir.join(format!("{STAGING_PREFIX}{}", name.to_string_lossy()));
    std::fs::write(&staged, content).map_err(|e| ReportDirWriteError::Io {
        detail: format!("write {}: {e}", staged.display()),
    })?;
    std::fs::rename(&staged, path).map_err(|e| ReportDirWriteError::Io {
        detail: format!("rename {} to {}: {e}", staged.display(), path.display()),
    })
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportDirReadError> {
    std::fs::read(dir.join(filename)).map_err(|_| ReportDirReadError::MissingFile {
        filename: filename.to_string(),
    })
}

/// Names of the regular files in `dir`.
///
/// Staging files left by an interrupted [`write_atomic`] are skipped, so a
/// crashed rewrite of a valid report does not read back as
/// [`ReportDirReadError::ExtraFile`]. Subdirectories are ignored.
fn list_files(dir: &Path) -> Result<BTreeSet<String>, ReportDirReadError> {
    let io = |what: &str, e: std::io::Error| ReportDirReadError::Io {
        detail: format!("{what} {}: {e}", dir.display()),
    };
    let mut files = BTreeSet::new();
    for entry in std::fs::read_dir(dir).map_err(|e| io("read_dir", e))? {
        let entry = entry.map_err(|e| io("entry in", e))?;
        if !entry.file_type().map_err(|e| io("file_type in", e))?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) if name.starts_with(STAGING_PREFIX) => {}
            Ok(name) => {
                files.insert(name);
            }
            Err(raw) => {
                return Err(ReportDirReadError::ExtraFile {
                    name: raw.to_string_lossy().into_owned(),
                });
            }
        }
    }
    Ok(files)
}
