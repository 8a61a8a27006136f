//! Serde models for the manifests embedded in a Forge installer archive.
//!
//! The installer ships two JSON documents: `install_profile.json` at the
//! archive root, and a version document at the entry named by the profile's
//! `json` field. Both carry a `libraries` list of the same shape. The models
//! here are deliberately strict: every field the extractor consumes is
//! required, so a malformed library entry fails the whole parse rather than
//! being skipped. Unknown fields are ignored — the upstream format carries
//! plenty the extractor has no use for, and varies across installer releases.

use serde::Deserialize;

/// Subset of `install_profile.json` relevant to library extraction.
#[derive(Debug, Deserialize)]
pub struct InstallProfile {
    /// Archive-relative path of the version document. Some installer
    /// releases write it with a leading `/`.
    pub json: String,
    /// Libraries required by the installer itself.
    pub libraries: Vec<LibraryEntry>,
}

/// Subset of the version document referenced by the install profile.
#[derive(Debug, Deserialize)]
pub struct VersionManifest {
    /// Libraries required by the loader at runtime.
    pub libraries: Vec<LibraryEntry>,
}

/// One entry of a manifest `libraries` list.
#[derive(Debug, Deserialize)]
pub struct LibraryEntry {
    /// Download descriptors for this library.
    pub downloads: LibraryDownloads,
}

/// The `downloads` object of a library entry.
#[derive(Debug, Deserialize)]
pub struct LibraryDownloads {
    /// The primary artifact download.
    pub artifact: ArtifactDownload,
}

/// The `downloads.artifact` object describing one fetchable file.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactDownload {
    /// Repository-relative path of the artifact.
    pub path: String,
    /// Lowercase hex SHA-1 digest of the artifact.
    pub sha1: String,
    /// Download URL. Empty for artifacts distributed inside the installer
    /// rather than fetched from a repository.
    pub url: String,
}
