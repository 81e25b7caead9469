// cli.rs — Command-line interface definitions (clap derive)
//
// Defines the top-level `helios` command:
//   helios hash <file>        — print the content hash of one memory object
//   helios verify <vectors>   — check a vectors file against its frozen hashes

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "helios")]
#[command(about = "Helios Core — deterministic content hashing for memory objects")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the content hash of a single memory object JSON file.
    Hash {
        /// Path to a JSON file containing one memory object document.
        file: PathBuf,
    },

    /// Check a vectors file's inputs against their frozen expected hashes.
    Verify {
        /// Path to a JSON file shaped `{"vectors": [...]}`.
        vectors: PathBuf,
    },
}
