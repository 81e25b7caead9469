// main.rs — Helios CLI entry point
//
// Two commands: `hash` computes a single memory object's content hash,
// `verify` runs a vectors file through the conformance harness. Both are
// thin adapters over `hasher`/`verify` — no canonicalization logic lives
// here, matching the teacher's separation between `main.rs` dispatch and
// the `vbw` module doing the actual work.

mod canon;
mod cli;
mod error;
mod hash;
mod hasher;
mod model;
mod verify;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hash { file } => cmd_hash(&file),
        Commands::Verify { vectors } => cmd_verify(&vectors),
    }
}

fn cmd_hash(file: &std::path::Path) -> Result<()> {
    eprintln!("[helios] hashing {}", file.display());

    let raw = fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", file.display()))?;

    canon::ingest::validate_document(&value)?;
    let obj: model::MemoryObject = serde_json::from_value(value)?;
    let digest = hasher::content_hash(&obj)?;

    println!("{}", digest);
    Ok(())
}

fn cmd_verify(vectors: &std::path::Path) -> Result<()> {
    eprintln!("[helios] verifying {}", vectors.display());

    let results = verify::run_verify(vectors)?;

    for r in &results {
        if r.pass {
            println!("  {}: PASS", r.name);
        } else {
            match &r.got {
                Some(got) => println!("  {}: FAIL (expected {}, got {})", r.name, r.expected, got),
                None => println!("  {}: FAIL (expected {}, got <error>)", r.name, r.expected),
            }
        }
    }

    let total = results.len();
    let passed = results.iter().filter(|r| r.pass).count();

    if passed == total {
        println!("All {} vectors: PASS", total);
        Ok(())
    } else {
        println!("{} of {} vectors: FAIL", total - passed, total);
        std::process::exit(1);
    }
}
