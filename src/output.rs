//! JSON encoding and output writing for extracted descriptors.
//!
//! Writing is all-or-nothing: the descriptor list is encoded to a string
//! first, and the output file is created (truncating any previous contents)
//! only once encoding has succeeded. A failing run therefore never leaves a
//! partial or truncated output behind.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};

use crate::descriptor::LibraryDescriptor;
use crate::error::{ExtractorError, Result};

/// Encode descriptors as a JSON array of `{path, sha1, url}` objects.
///
/// Consumers must not depend on whitespace; `pretty` only changes the
/// formatting, never the content or order.
///
/// # Errors
///
/// Returns [`ExtractorError::Encode`] if serialisation fails.
///
/// # Examples
///
/// ```
/// use forge_deps::output::encode;
///
/// let empty = encode(&[], false).expect("encoding an empty list succeeds");
/// assert_eq!(empty, "[]");
/// ```
pub fn encode(descriptors: &[LibraryDescriptor], pretty: bool) -> Result<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(descriptors)
    } else {
        serde_json::to_string(descriptors)
    };
    encoded.map_err(|source| ExtractorError::Encode { source })
}

/// Where extraction output is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// The process standard output stream.
    Stdout,
    /// A file path, created or truncated on write.
    File(Utf8PathBuf),
}

impl OutputTarget {
    /// Interpret an output argument: `-` selects stdout, anything else is a
    /// file path.
    #[must_use]
    pub fn from_arg(arg: &Utf8Path) -> Self {
        if arg == "-" {
            Self::Stdout
        } else {
            Self::File(arg.to_owned())
        }
    }

    /// Write `payload` to the target.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::OutputWrite`] if the destination cannot be
    /// created or written.
    pub fn write(&self, payload: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(payload.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(|source| ExtractorError::OutputWrite {
                        path: Utf8PathBuf::from("-"),
                        source,
                    })
            }
            Self::File(path) => {
                std::fs::write(path, payload).map_err(|source| ExtractorError::OutputWrite {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}
