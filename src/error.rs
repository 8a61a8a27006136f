//! Error types for the Forge dependency extractor.
//!
//! Every failure in the extraction pipeline is fatal: errors propagate
//! unchanged to the binary boundary, where they are rendered to stderr and
//! terminate the run with a non-zero status. Each variant names the archive
//! entry, field, or path involved so diagnostics point at the actual problem.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting library descriptors.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// The installer archive could not be opened.
    #[error("cannot open installer archive {path}: {source}")]
    ArchiveOpen {
        /// Path of the archive that failed to open.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file exists but could not be read as a zip archive.
    #[error("{path} is not a valid installer archive: {source}")]
    InvalidArchive {
        /// Path of the file that is not a zip archive.
        path: Utf8PathBuf,
        /// The underlying zip format error.
        source: zip::result::ZipError,
    },

    /// A required JSON entry is not present inside the archive.
    #[error("entry {name} not found in installer archive")]
    EntryNotFound {
        /// Name of the missing archive entry.
        name: String,
    },

    /// An archive entry exists but could not be read.
    #[error("failed to read archive entry {name}: {source}")]
    EntryRead {
        /// Name of the unreadable archive entry.
        name: String,
        /// The underlying zip error.
        source: zip::result::ZipError,
    },

    /// A JSON document inside the archive is malformed or lacks a required
    /// field. The serde message names the offending field.
    #[error("invalid manifest in {entry}: {source}")]
    Manifest {
        /// Name of the archive entry holding the document.
        entry: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The descriptor list could not be encoded as JSON.
    #[error("failed to encode descriptor list: {source}")]
    Encode {
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The output destination could not be created or written.
    #[error("cannot write output {path}: {source}")]
    OutputWrite {
        /// Path of the output destination (`-` for stdout).
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`ExtractorError`].
pub type Result<T> = std::result::Result<T, ExtractorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_open_names_the_path() {
        let err = ExtractorError::ArchiveOpen {
            path: Utf8PathBuf::from("/tmp/missing-installer.jar"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing-installer.jar"));
    }

    #[test]
    fn entry_not_found_names_the_entry() {
        let err = ExtractorError::EntryNotFound {
            name: "version.json".to_owned(),
        };
        assert!(err.to_string().contains("version.json"));
    }

    #[test]
    fn manifest_error_names_entry_and_field() {
        let source = serde_json::from_str::<crate::manifest::InstallProfile>("{}")
            .expect_err("empty object should be missing required fields");
        let err = ExtractorError::Manifest {
            entry: "install_profile.json".to_owned(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("install_profile.json"));
        assert!(msg.contains("json"), "serde should name the missing field");
    }

    #[test]
    fn output_write_names_the_path() {
        let err = ExtractorError::OutputWrite {
            path: Utf8PathBuf::from("/no/such/dir/libraries.json"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/no/such/dir/libraries.json"));
    }
}
