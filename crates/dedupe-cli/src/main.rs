mod cli;
mod config;
mod diagnostics;
mod error;
mod memprofile;
mod stats;

use std::path::PathBuf;

use clap::Parser;
use dedupe_codec::{DecodeSession, EncodeSession, SegmenterConfig, apply_patch, make_patch};

use cli::{Cli, Command};
use error::CliError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli)?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Some(Command::Stats {
            infile,
            window,
            zerobits,
            output,
        }) => run_stats(infile, window, zerobits, output),
        Some(Command::Patch {
            old,
            new,
            out,
            window,
            zerobits,
        }) => run_patch(old, new, out, window, zerobits),
        Some(Command::ApplyPatch {
            old,
            patch,
            out,
            window,
            zerobits,
        }) => run_apply_patch(old, patch, out, window, zerobits),
        Some(Command::Signature {
            infile,
            window,
            zerobits,
            output,
        }) => run_signature(infile, window, zerobits, output),
        None => run_core(cli),
    }
}

/// The default flat-flag invocation: encode or decode one stream, exactly
/// mirroring the original tool's single-binary contract.
fn run_core(cli: Cli) -> Result<(), CliError> {
    config::check_window_and_zerobits(cli.window, cli.zerobits)?;

    let stage = if cli.decompress { "decode" } else { "encode" };
    diagnostics::session_start(stage);
    let mem_before = cli.memprofile.then(memprofile::sample);

    let mut input = config::open_input(&cli.infile)?;
    let mut output = config::open_output(&cli.infile, cli.stdout, cli.decompress)?;

    let result = (|| -> Result<(), CliError> {
        if cli.decompress {
            let mut session = DecodeSession::new(&mut input);
            session.decode_to(&mut output)?;
        } else {
            let config = SegmenterConfig::from_zero_bits(cli.window, cli.zerobits);
            let mut session = EncodeSession::new(config, &mut output)?;
            session.encode(&mut input)?;
            let tracker = session.into_tracker();
            let report = stats::ParseStats::from_tracker(&tracker).report();
            eprintln!("{}", serde_json::to_string_pretty(&report)?);
        }
        Ok(())
    })();

    if let Some(before) = mem_before {
        let after = memprofile::sample();
        diagnostics::mem_delta(stage, &before, &after);
    }
    match &result {
        Ok(()) => diagnostics::session_end(stage, true),
        Err(err) => {
            diagnostics::error(err.stage(), &err.to_string());
            diagnostics::session_end(stage, false);
        }
    }
    result
}

fn run_stats(
    infile: Option<PathBuf>,
    window: u64,
    zerobits: u32,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    config::check_window_and_zerobits(window, zerobits)?;
    let mut input = config::open_input(&infile)?;
    let wire_config = SegmenterConfig::from_zero_bits(window, zerobits);

    let mut session = EncodeSession::new(wire_config, std::io::sink())?;
    session.encode(&mut input)?;
    let tracker = session.into_tracker();
    let report = stats::ParseStats::from_tracker(&tracker).report();
    let json = serde_json::to_string_pretty(&report)?;

    match output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn run_patch(
    old: PathBuf,
    new: PathBuf,
    out: PathBuf,
    window: u64,
    zerobits: u32,
) -> Result<(), CliError> {
    config::check_window_and_zerobits(window, zerobits)?;
    let config = SegmenterConfig::from_zero_bits(window, zerobits);
    let mut old_file = std::fs::File::open(&old)?;
    let mut new_file = std::fs::File::open(&new)?;
    let out_file = std::fs::File::create(&out)?;
    make_patch(config, &mut old_file, &mut new_file, out_file)?;
    Ok(())
}

fn run_apply_patch(
    old: PathBuf,
    patch: PathBuf,
    out: PathBuf,
    window: u64,
    zerobits: u32,
) -> Result<(), CliError> {
    config::check_window_and_zerobits(window, zerobits)?;
    let config = SegmenterConfig::from_zero_bits(window, zerobits);
    let mut old_file = std::fs::File::open(&old)?;
    let patch_file = std::fs::File::open(&patch)?;
    let mut out_file = std::fs::File::create(&out)?;
    apply_patch(config, &mut old_file, patch_file, &mut out_file)?;
    Ok(())
}

fn run_signature(
    infile: Option<PathBuf>,
    window: u64,
    zerobits: u32,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    use dedupe_core::{Segmenter, SegmenterConfig as CoreConfig, strong_digest};
    use std::io::Write;

    config::check_window_and_zerobits(window, zerobits)?;
    let mut input = config::open_input(&infile)?;
    let mut out = config::open_named_output(&output)?;

    let segmenter = Segmenter::new(CoreConfig::from_zero_bits(window, zerobits))?;
    segmenter.run(&mut input, |segment| {
        let digest = strong_digest(segment);
        out.write_all(digest.as_bytes())
            .map_err(|e| Box::new(e) as dedupe_core::HandlerError)
    })?;
    Ok(())
}
