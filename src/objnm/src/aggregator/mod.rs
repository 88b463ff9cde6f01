/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod nm_error;
mod run_status;

pub use nm_error::NmError;
pub use run_status::RunStatus;

use std::{
    io::{self, Write},
    path::Path,
};

use crate::{
    config::NmConfig,
    display::{write_symbols, LinePrefix, ANONYMOUS_ENTRY_NAME},
    reader::{Entry, ObjectReader},
    resolver::resolve_entry,
    sort::sort_symbols,
};

/// Result of listing a single file.
#[derive(Debug, Default)]
pub struct FileOutcome {
    errors: Vec<NmError>,
    symbols_written: usize,
}

impl FileOutcome {
    pub fn errors(&self) -> &[NmError] {
        &self.errors
    }

    pub fn symbols_written(&self) -> usize {
        self.symbols_written
    }

    pub fn failed(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lists every entry of the file at `path` into `out`.
///
/// Problems with the file are collected into the returned [`FileOutcome`] instead of stopping
/// early, only failing to write to `out` is an `Err`. The output of the whole file is buffered
/// and flushed once at the end.
pub fn nm_file<R, W>(
    reader: &R,
    path: &Path,
    config: &NmConfig,
    out: &mut W,
) -> io::Result<FileOutcome>
where
    R: ObjectReader + ?Sized,
    W: Write,
{
    let mut outcome = FileOutcome::default();

    let entries = match reader.open(path) {
        Ok(entries) => entries,
        Err(err) => {
            outcome.errors.push(err.into());
            return Ok(outcome);
        }
    };

    let file = path.display().to_string();
    let mut w = io::BufWriter::new(out);
    let mut found = false;

    for entry in &entries {
        let mut symbols = match resolve_entry(entry) {
            Ok(resolution) => {
                if resolution.is_fallback() {
                    log::debug!(
                        "{}({}): no symbol table, using the pc-line table",
                        file,
                        entry.name().unwrap_or(ANONYMOUS_ENTRY_NAME)
                    );
                }
                resolution.into_symbols()
            }
            Err(source) => {
                outcome.errors.push(NmError::Resolve {
                    file: file.clone(),
                    entry: entry.name().map(String::from),
                    source,
                });
                continue;
            }
        };
        if symbols.is_empty() {
            continue;
        }
        found = true;

        sort_symbols(&mut symbols, config.sort_order());

        let prefix = LinePrefix::select(&file, entries.len(), entry.name(), config.file_prefix());
        write_symbols(&mut w, &symbols, prefix, config.display_flags())?;
        outcome.symbols_written += symbols.len();
    }

    if !found {
        outcome.errors.push(NmError::NoSymbols { file });
    }

    w.flush()?;
    log::trace!(
        "{}: {} symbols written",
        path.display(),
        outcome.symbols_written
    );

    Ok(outcome)
}

/// Lists every file in order, reporting each problem to `err` as it happens.
///
/// A file failing does not stop the following ones from being listed, it is only reflected in the
/// returned [`RunStatus`].
pub fn run<R, P, W, E>(
    reader: &R,
    paths: &[P],
    config: &NmConfig,
    out: &mut W,
    err: &mut E,
) -> io::Result<RunStatus>
where
    R: ObjectReader + ?Sized,
    P: AsRef<Path>,
    W: Write,
    E: Write,
{
    let mut status = RunStatus::new();

    for path in paths {
        let outcome = nm_file(reader, path.as_ref(), config, out)?;

        for error in outcome.errors() {
            writeln!(err, "{}", error)?;
        }

        status = status.with_outcome(&outcome);
    }

    Ok(status)
}
