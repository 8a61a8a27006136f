//! Library download descriptors and the loader-artifact filter.
//!
//! A [`LibraryDescriptor`] is the value an external package manager needs to
//! fetch one library: repository-relative path, SHA-1 digest, and URL. The
//! loader's own jar also appears in the manifests, but upstream policy
//! forbids redistributing it, so its descriptor (recognisable by basename,
//! and carrying an empty URL) is filtered out of the extractor's output.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::manifest::ArtifactDownload;

/// Matches the basename of the loader's own jar in recent installer
/// releases, e.g. `forge-1.20.1-47.2.0.jar` or
/// `forge-1.2.3-universal.jar`. The dots are deliberately loose (any
/// character) so the dash between the Minecraft and Forge version groups
/// still matches. Anchored at the basename start only. Much older
/// installers ship a separate `-server` jar instead and would need
/// different handling.
#[expect(clippy::expect_used, reason = "the pattern is a constant and compiles")]
static LOADER_JAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^forge-(\d+.)+\d+(-universal)?.jar").expect("loader jar pattern")
});

/// The data needed by a package manager to download one library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryDescriptor {
    /// Repository-relative path of the artifact.
    pub path: String,
    /// Lowercase hex SHA-1 digest of the artifact.
    pub sha1: String,
    /// Download URL. May be empty.
    pub url: String,
}

impl From<ArtifactDownload> for LibraryDescriptor {
    fn from(artifact: ArtifactDownload) -> Self {
        Self {
            path: artifact.path,
            sha1: artifact.sha1,
            url: artifact.url,
        }
    }
}

impl LibraryDescriptor {
    /// Return the final segment of the descriptor's `path`.
    ///
    /// Manifest paths always use `/` separators regardless of platform.
    ///
    /// # Examples
    ///
    /// ```
    /// use forge_deps::descriptor::LibraryDescriptor;
    ///
    /// let descriptor = LibraryDescriptor {
    ///     path: "net/minecraftforge/forge/forge-1.20.1-47.2.0.jar".to_owned(),
    ///     sha1: String::new(),
    ///     url: String::new(),
    /// };
    /// assert_eq!(descriptor.basename(), "forge-1.20.1-47.2.0.jar");
    /// ```
    #[must_use]
    pub fn basename(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Return true when this descriptor names the loader's own jar.
    ///
    /// # Examples
    ///
    /// ```
    /// use forge_deps::descriptor::LibraryDescriptor;
    ///
    /// let descriptor = LibraryDescriptor {
    ///     path: "forge-1.20.1-47.2.0-universal.jar".to_owned(),
    ///     sha1: String::new(),
    ///     url: String::new(),
    /// };
    /// assert!(descriptor.is_loader_artifact());
    /// ```
    #[must_use]
    pub fn is_loader_artifact(&self) -> bool {
        LOADER_JAR.is_match(self.basename())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn descriptor(path: &str) -> LibraryDescriptor {
        LibraryDescriptor {
            path: path.to_owned(),
            sha1: "da39a3ee5e6b4b0d3255bfef95601890afd80709".to_owned(),
            url: String::new(),
        }
    }

    #[rstest]
    #[case::universal("forge-1.20.1-47.2.0-universal.jar")]
    #[case::plain("forge-1.20.1-47.2.0.jar")]
    #[case::short_version("forge-1.2.3-universal.jar")]
    #[case::nested_path("net/minecraftforge/forge/1.20.1-47.2.0/forge-1.20.1-47.2.0.jar")]
    fn loader_jars_are_recognised(#[case] path: &str) {
        assert!(
            descriptor(path).is_loader_artifact(),
            "expected {path} to match the loader jar pattern"
        );
    }

    #[rstest]
    #[case::prefix_not_at_start("somelib-forge-1.0.jar")]
    #[case::unrelated("other-1.0.jar")]
    #[case::no_version("forge-client.jar")]
    #[case::nested_unrelated("org/ow2/asm/asm/9.5/asm-9.5.jar")]
    fn other_jars_are_kept(#[case] path: &str) {
        assert!(
            !descriptor(path).is_loader_artifact(),
            "expected {path} not to match the loader jar pattern"
        );
    }

    #[test]
    fn match_is_anchored_at_basename_start_not_full_path() {
        // The directory component contains the pattern, but only the
        // basename is consulted.
        let kept = descriptor("forge-1.2.3.jar-mirror/asm-9.5.jar");
        assert!(!kept.is_loader_artifact());
    }

    #[test]
    fn basename_of_bare_filename_is_the_filename() {
        assert_eq!(descriptor("a.jar").basename(), "a.jar");
    }

    #[test]
    fn serialises_with_exactly_three_keys() {
        let json = serde_json::to_value(descriptor("a/b.jar")).expect("serialise");
        let object = json.as_object().expect("descriptor serialises to an object");
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["path", "sha1", "url"]);
    }
}
