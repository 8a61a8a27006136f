//! CLI argument definitions for the extractor.
//!
//! This module defines the command-line interface using clap. It is
//! separated from the main entrypoint to keep the binary small and focused
//! on orchestration.

use camino::Utf8PathBuf;
use clap::Parser;

/// Extract library download descriptors from a Forge installer archive.
#[derive(Parser, Debug, Clone)]
#[command(name = "forge-deps")]
#[command(version, about)]
#[command(long_about = concat!(
    "Extract library download descriptors from a Forge installer archive.\n\n",
    "The Forge mod loader normally resolves its library dependencies at ",
    "install time through its own installer. This tool reads the manifests ",
    "embedded in the installer archive and writes the list of downloadable ",
    "libraries as a JSON array of {path, sha1, url} records, so an external ",
    "package manager can fetch them instead.\n\n",
    "Nothing is downloaded or installed. Forge itself is distributed with ",
    "the installer and, keeping with upstream's wishes, is excluded from ",
    "the output.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Write the descriptor list to a file:\n",
    "    $ forge-deps forge-1.20.1-47.2.0-installer.jar libraries.json\n\n",
    "  Pipe the descriptor list to another tool:\n",
    "    $ forge-deps forge-1.20.1-47.2.0-installer.jar - | jq length\n",
))]
pub struct Cli {
    /// Path to the Forge installer archive (a zip file).
    pub installer: Utf8PathBuf,

    /// Output file for the JSON descriptor array; `-` writes to stdout.
    pub output: Utf8PathBuf,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Suppress the progress summary (errors still shown).
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for Cli {
    /// Creates a `Cli` instance with empty paths and all flags disabled.
    ///
    /// This is useful for testing or programmatic construction where only
    /// specific fields need to be set.
    fn default() -> Self {
        Self {
            installer: Utf8PathBuf::new(),
            output: Utf8PathBuf::new(),
            pretty: false,
            quiet: false,
        }
    }
}
