//! Command-line surface: the flat encode/decode flags plus a handful of
//! additive subcommands for stats, patching, and signature-only output.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "dedupe",
    about = "Content-defined deduplication codec for byte streams"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Number of trailing zero bits in the rolling hash that mark a cut point.
    #[arg(long, default_value_t = 16)]
    pub zerobits: u32,

    /// Rolling-hash window size in bytes (also the minimum segment length).
    #[arg(long, default_value_t = 64)]
    pub window: u64,

    /// Decode mode; default is encode.
    #[arg(short = 'd', long = "decompress")]
    pub decompress: bool,

    /// Write the result to standard output instead of an inferred file.
    #[arg(short = 'c', long = "stdout")]
    pub stdout: bool,

    /// Sample /proc/self/status before and after the run and report deltas.
    #[arg(long)]
    pub memprofile: bool,

    /// Input file. Reads standard input when absent.
    pub infile: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report segment-length distribution statistics for a file, without
    /// writing an encoded stream.
    Stats {
        infile: Option<PathBuf>,
        #[arg(long, default_value_t = 64)]
        window: u64,
        #[arg(long, default_value_t = 16)]
        zerobits: u32,
        /// Write the JSON report here instead of standard output.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Produce a patch from `old` to `new` by sharing one segment tracker
    /// across both passes.
    Patch {
        #[arg(long)]
        old: PathBuf,
        #[arg(long)]
        new: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 64)]
        window: u64,
        #[arg(long, default_value_t = 16)]
        zerobits: u32,
    },
    /// Reconstruct the `new` file from `old` plus a patch produced by `patch`.
    ApplyPatch {
        #[arg(long)]
        old: PathBuf,
        #[arg(long)]
        patch: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 64)]
        window: u64,
        #[arg(long, default_value_t = 16)]
        zerobits: u32,
    },
    /// Emit one strong digest per content-defined segment, with no tracker
    /// or wire protocol involved.
    Signature {
        infile: Option<PathBuf>,
        #[arg(long, default_value_t = 64)]
        window: u64,
        #[arg(long, default_value_t = 16)]
        zerobits: u32,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
