//! Output naming and writing for decoded scripts

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use super::config::OverwritePolicy;

/// Name used for output decoded from standard input
pub const STDIN_NAME: &str = "stdin";

const DECODED_SUFFIX: &str = ".decoded";

/// Where a decoded script goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Print to stdout
    Console,
    /// Write to this file
    File(PathBuf),
}

/// Result of writing a decoded script to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Skipped,
}

/// Derive the output file name from an encoded file name.
///
/// The name is cut at the first `.vbe` (or `.jse`) found past its first
/// character, so `a.vbe` and `a.vbe.bak` both give `a.vbs.decoded` and
/// `a.jse` gives `a.js.decoded`. Anything else keeps its name and gets
/// `.vbs.decoded` appended.
pub fn decoded_file_name(name: &str) -> String {
    let name = name.trim();
    let (stem, ext) = if let Some(stem) = cut_at_extension(name, ".vbe") {
        (stem, ".vbs")
    } else if let Some(stem) = cut_at_extension(name, ".jse") {
        (stem, ".js")
    } else {
        (name, ".vbs")
    };

    format!("{stem}{ext}{DECODED_SUFFIX}")
}

/// Case-insensitive cut at the first `ext`; never leaves an empty stem.
/// `ext` must be lowercase ASCII.
fn cut_at_extension<'a>(name: &'a str, ext: &str) -> Option<&'a str> {
    let split = name.to_ascii_lowercase().find(ext).filter(|&s| s > 0)?;
    name.get(..split)
}

/// Resolve where the decoded form of `file_name` should go.
///
/// An existing directory receives the file; any other path is used as a
/// prefix joined with `-`.
pub fn output_target(output: Option<&Path>, file_name: &str) -> OutputTarget {
    let Some(output) = output else {
        return OutputTarget::Console;
    };

    let decoded = decoded_file_name(file_name);
    if output.is_dir() {
        OutputTarget::File(output.join(decoded))
    } else {
        let mut prefixed = output.as_os_str().to_os_string();
        prefixed.push("-");
        prefixed.push(decoded);
        OutputTarget::File(PathBuf::from(prefixed))
    }
}

/// Print a decoded script, optionally preceded by a banner.
///
/// The banner lines start with `'` so the output stays valid VBScript.
pub fn write_console<W: Write>(
    out: &mut W,
    input_name: &str,
    script: &str,
    banner: bool,
) -> io::Result<()> {
    if banner {
        writeln!(out)?;
        writeln!(out, "'{}", "#".repeat(60))?;
        writeln!(out, "'# vbe-decoder {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "'# - Input File: {input_name}")?;
        writeln!(out)?;
    }
    writeln!(out, "{script}")
}

/// Write `script` to `path`, honouring `policy` when the file exists.
///
/// With [`OverwritePolicy::Prompt`] the question is written to `prompt_out`
/// and answers are read line by line from `prompt_in` until one starts with
/// `y`, `n` or `c`. End of input counts as cancel.
pub fn write_result<R: BufRead, W: Write>(
    script: &str,
    path: &Path,
    policy: OverwritePolicy,
    mut prompt_in: R,
    mut prompt_out: W,
) -> io::Result<WriteOutcome> {
    if path.exists() {
        let overwrite = match policy {
            OverwritePolicy::Always => true,
            OverwritePolicy::Never => false,
            OverwritePolicy::Prompt => confirm_overwrite(path, &mut prompt_in, &mut prompt_out)?,
        };
        if !overwrite {
            tracing::warn!("Kept existing {}", path.display());
            return Ok(WriteOutcome::Skipped);
        }
    }

    fs::write(path, script)?;
    tracing::debug!("Wrote {} bytes to {}", script.len(), path.display());
    Ok(WriteOutcome::Written)
}

fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    let mut line = String::new();
    loop {
        writeln!(
            output,
            "File '{}' already exists. Overwrite ? [Y] Yes / [N] No / [C] Cancel",
            path.display()
        )?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "Canceled.")?;
            return Ok(false);
        }

        match line.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('Y') => return Ok(true),
            Some('N') | Some('C') => {
                writeln!(output, "Canceled.")?;
                return Ok(false);
            },
            _ => {},
        }
    }
}
