//! Byte-for-byte file copy

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::config::consts::limits::COPY_BUFFER_SIZE;
use crate::diagnostics::ErrorLog;
use crate::error::{Result, SsgError};

/// Copy `src` to `dest`, recording any failure in `log`.
///
/// Returns `true` when the whole file was copied. A failed copy may leave a
/// truncated destination behind.
pub fn copy_file(src: &Path, dest: &Path, log: &mut ErrorLog) -> bool {
    match try_copy_file(src, dest) {
        Ok(bytes) => {
            debug!(src = %src.display(), dest = %dest.display(), bytes, "copied");
            true
        }
        Err(e) => {
            log.record(&e);
            false
        }
    }
}

/// Copy in fixed-size chunks; returns the number of bytes copied
pub fn try_copy_file(src: &Path, dest: &Path) -> Result<u64> {
    let mut input = File::open(src).map_err(|source| SsgError::SourceOpen {
        path: src.to_path_buf(),
        source,
    })?;
    let mut output = open_destination(dest).map_err(|source| SsgError::DestinationOpen {
        path: dest.to_path_buf(),
        source,
    })?;

    copy_chunks(&mut input, &mut output, src, dest)
}

fn copy_chunks<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    src: &Path,
    dest: &Path,
) -> Result<u64> {
    let mut buffer = [0u8; COPY_BUFFER_SIZE];
    let mut total = 0u64;
    loop {
        let read = match input.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(SsgError::Read {
                    path: src.to_path_buf(),
                    source,
                })
            }
        };

        let written = output
            .write(&buffer[..read])
            .map_err(|source| SsgError::Write {
                path: dest.to_path_buf(),
                source,
            })?;
        if written != read {
            return Err(SsgError::PartialWrite {
                path: dest.to_path_buf(),
                read,
                written,
            });
        }
        total += read as u64;
    }
    Ok(total)
}

fn open_destination(dest: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(dest)
}
