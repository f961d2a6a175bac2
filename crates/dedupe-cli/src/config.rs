//! Input/output stream resolution, including the `.dd` suffix convention
//! ported from the original tool: encoding appends `.dd` to the input file
//! name, decoding requires it and strips it back off.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::error::CliError;

pub fn check_window_and_zerobits(window: u64, zerobits: u32) -> Result<(), CliError> {
    if window <= 1 {
        return Err(CliError::Config(format!(
            "window must be > 1, got {window}"
        )));
    }
    if zerobits <= 1 {
        return Err(CliError::Config(format!(
            "zerobits must be > 1, got {zerobits}"
        )));
    }
    Ok(())
}

/// Computes the default output path for `infile`: `name.dd` when encoding,
/// `name` with a trailing `.dd` stripped when decoding.
pub fn resolve_output_path(infile: &Path, decompress: bool) -> Result<PathBuf, CliError> {
    let name = infile.to_string_lossy();
    if decompress {
        name.strip_suffix(".dd").map(PathBuf::from).ok_or_else(|| {
            CliError::Config(format!("input file {name} does not end in .dd"))
        })
    } else {
        Ok(PathBuf::from(format!("{name}.dd")))
    }
}

pub fn open_input(infile: &Option<PathBuf>) -> Result<Box<dyn Read>, CliError> {
    match infile {
        Some(path) => Ok(Box::new(std::fs::File::open(path)?)),
        None => Ok(Box::new(std::io::stdin())),
    }
}

/// Resolves where encoded/decoded bytes go: `--stdout` or a missing input
/// file both mean standard output; otherwise the `.dd` convention applies.
pub fn open_output(
    infile: &Option<PathBuf>,
    stdout: bool,
    decompress: bool,
) -> Result<Box<dyn Write>, CliError> {
    match infile {
        Some(path) if !stdout => {
            let out_path = resolve_output_path(path, decompress)?;
            Ok(Box::new(std::fs::File::create(out_path)?))
        }
        _ => Ok(Box::new(std::io::stdout())),
    }
}

pub fn open_named_output(output: &Option<PathBuf>) -> Result<Box<dyn Write>, CliError> {
    match output {
        Some(path) => Ok(Box::new(std::fs::File::create(path)?)),
        None => Ok(Box::new(std::io::stdout())),
    }
}
