//! The extraction pipeline: installer archive in, library descriptors out.
//!
//! A single linear pass. The profile at [`INSTALL_PROFILE_ENTRY`] names the
//! version document; both carry a `libraries` list, and the descriptors from
//! the profile come first, in manifest order, followed by the version
//! document's. The loader's own jar is dropped from the result: it ships
//! inside the installer and, keeping with upstream's wishes, is never
//! downloaded.

use camino::Utf8Path;

use crate::archive::InstallerArchive;
use crate::descriptor::LibraryDescriptor;
use crate::error::Result;
use crate::manifest::{InstallProfile, VersionManifest};

/// Archive entry holding the install profile.
pub const INSTALL_PROFILE_ENTRY: &str = "install_profile.json";

/// Extract every library download descriptor from the installer at `path`.
///
/// # Errors
///
/// Returns an error if the archive cannot be opened, either manifest entry
/// is missing or malformed, or any library entry lacks a required field.
/// There is no per-entry recovery: one bad entry fails the whole run.
pub fn extract(path: &Utf8Path) -> Result<Vec<LibraryDescriptor>> {
    let mut archive = InstallerArchive::open(path)?;
    let profile: InstallProfile = archive.read_json(INSTALL_PROFILE_ENTRY)?;
    log::debug!("version document entry: {}", profile.json);
    let version: VersionManifest = archive.read_json(&profile.json)?;

    let descriptors: Vec<LibraryDescriptor> = profile
        .libraries
        .into_iter()
        .chain(version.libraries)
        .map(|entry| LibraryDescriptor::from(entry.downloads.artifact))
        .filter(|descriptor| !descriptor.is_loader_artifact())
        .collect();
    log::debug!("extracted {} library descriptors", descriptors.len());
    Ok(descriptors)
}
