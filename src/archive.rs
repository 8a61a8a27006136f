//! Random-access reads of JSON entries inside an installer archive.
//!
//! The installer is a plain zip file. This module owns the open archive
//! handle and the entry-name normalisation: install profiles sometimes name
//! the version document with a leading `/`, which zip entry names never
//! carry, so leading separators are stripped before lookup.

use std::fs::File;

use camino::{Utf8Path, Utf8PathBuf};
use serde::de::DeserializeOwned;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{ExtractorError, Result};

/// An installer archive opened for random access to named entries.
#[derive(Debug)]
pub struct InstallerArchive {
    archive: ZipArchive<File>,
}

impl InstallerArchive {
    /// Open the archive at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::ArchiveOpen`] if the file cannot be opened
    /// and [`ExtractorError::InvalidArchive`] if it is not a valid zip.
    pub fn open(path: &Utf8Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| ExtractorError::ArchiveOpen {
            path: path.to_owned(),
            source,
        })?;
        let archive = ZipArchive::new(file).map_err(|source| ExtractorError::InvalidArchive {
            path: path.to_owned(),
            source,
        })?;
        Ok(Self { archive })
    }

    /// Parse the JSON document stored at `name` inside the archive.
    ///
    /// Leading `/` characters on `name` are stripped before lookup, so
    /// `/version.json` and `version.json` resolve to the same entry.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError::EntryNotFound`] if no entry has that name,
    /// [`ExtractorError::EntryRead`] if the entry cannot be read, and
    /// [`ExtractorError::Manifest`] if the document is malformed or lacks a
    /// required field.
    pub fn read_json<T: DeserializeOwned>(&mut self, name: &str) -> Result<T> {
        let entry_name = name.trim_start_matches('/');
        log::trace!("reading archive entry {entry_name}");
        let entry = match self.archive.by_name(entry_name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => {
                return Err(ExtractorError::EntryNotFound {
                    name: entry_name.to_owned(),
                });
            }
            Err(source) => {
                return Err(ExtractorError::EntryRead {
                    name: entry_name.to_owned(),
                    source,
                });
            }
        };
        serde_json::from_reader(entry).map_err(|source| ExtractorError::Manifest {
            entry: entry_name.to_owned(),
            source,
        })
    }
}

/// Convert a std path from `tempfile` and friends into a UTF-8 path.
#[cfg(test)]
pub(crate) fn utf8_path(path: &std::path::Path) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(path.to_path_buf()).expect("test paths are UTF-8")
}
