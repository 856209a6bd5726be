//! Convert command - decode an image and write its C array literal
//!
//! Decoding and encoding both finish before the output file is touched, and
//! the header is staged in a temporary file, so a failed run never leaves a
//! half-written header behind or clobbers the previous one.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use img2h_core::{decode_file, encode, identifier_from_path, EncodedLiteral};
use tempfile::NamedTempFile;

/// Arguments for the convert command
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input image file
    pub input: PathBuf,

    /// Output header file (overwritten if it exists)
    pub output: PathBuf,

    /// Array name (defaults to the output file name without extension)
    pub name: Option<String>,
}

/// Execute the convert command
///
/// Returns the path of the written header on success.
pub fn execute(args: ConvertArgs) -> Result<PathBuf> {
    let name = match args.name {
        Some(name) => name,
        None => identifier_from_path(&args.output).with_context(|| {
            format!(
                "Cannot derive an array name from {}",
                args.output.display()
            )
        })?,
    };

    let decoded = decode_file(&args.input)
        .with_context(|| format!("Failed to decode {}", args.input.display()))?;

    let info = &decoded.info;
    log::info!(
        "mode {}, bands {:?}",
        info.source_color,
        info.layout.channel_names()
    );
    if info.narrowed {
        log::warn!(
            "{} samples narrowed to 8 bits per channel",
            info.source_color
        );
    }

    let literal = encode(&decoded.grid, &name)
        .with_context(|| format!("Failed to encode {}", args.input.display()))?;
    log::debug!(
        "Encoded {}x{} {} as '{}' ({} bytes of text)",
        info.width,
        info.height,
        info.layout,
        literal.name(),
        literal.as_str().len()
    );

    write_output(&args.output, &literal)?;
    Ok(args.output)
}

/// Write the literal to `path` through a temporary file in the same directory.
///
/// The temporary file replaces `path` only once it is fully written, so a
/// failed write leaves whatever was at `path` untouched.
fn write_output(path: &Path, literal: &EncodedLiteral) -> Result<()> {
    write_replacing(path, |file| literal.write_to(BufWriter::new(file)))
}

fn write_replacing<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::trace!("Staging output in {}", tmp.path().display());

    // Dropping `tmp` on the error path deletes the staging file.
    write(tmp.as_file_mut()).with_context(|| format!("Failed to write {}", path.display()))?;

    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
