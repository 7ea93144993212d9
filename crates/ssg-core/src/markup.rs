//! Markup processing: stream a markup file through the template resolver

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::diagnostics::ErrorLog;
use crate::error::{Result, SsgError};
use crate::template::{Resolution, TemplateResolver};

/// Render `src` into `dest`, replacing marker lines with template contents.
///
/// Open and I/O failures are recorded in `log` and stop processing of this
/// file only; the destination may be left partially written. Returns `true`
/// when the whole file was written.
pub fn process_markup(src: &Path, dest: &Path, log: &mut ErrorLog) -> bool {
    match try_process_markup(src, dest, log) {
        Ok(included) => {
            debug!(src = %src.display(), dest = %dest.display(), included, "rendered markup");
            true
        }
        Err(e) => {
            log.record(&e);
            false
        }
    }
}

/// Returns the number of markers that were replaced
fn try_process_markup(src: &Path, dest: &Path, log: &mut ErrorLog) -> Result<usize> {
    let input = File::open(src).map_err(|source| SsgError::InputOpen {
        path: src.to_path_buf(),
        source,
    })?;
    let output = File::create(dest).map_err(|source| SsgError::OutputOpen {
        path: dest.to_path_buf(),
        source,
    })?;

    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);
    let write_err = |source| SsgError::Write {
        path: dest.to_path_buf(),
        source,
    };

    let resolver = TemplateResolver::for_file(src);
    let mut line = Vec::new();
    let mut included = 0;
    let mut number = 0;
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| SsgError::Read {
                path: src.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break;
        }

        number += 1;
        let resolution = resolver.resolve_line_at(&line, number, log);
        if matches!(resolution, Resolution::Included { .. }) {
            included += 1;
        }
        writer.write_all(resolution.output()).map_err(write_err)?;
    }

    writer.flush().map_err(write_err)?;
    Ok(included)
}
