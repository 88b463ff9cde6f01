/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::{error, fmt};

use crate::{reader::OpenError, resolver::ResolveError};

/// Something that went wrong while listing a file. None of these stop the other files from being
/// listed.
#[derive(Debug)]
#[non_exhaustive]
pub enum NmError {
    Open(OpenError),
    Resolve {
        file: String,
        entry: Option<String>,
        source: ResolveError,
    },
    /// Not a single entry of the file produced a symbol.
    NoSymbols { file: String },
}

impl fmt::Display for NmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NmError::Open(x) => write!(f, "{}", x),
            NmError::Resolve {
                file,
                entry: Some(entry),
                source,
            } => write!(f, "reading {}({}): {}", file, entry, source),
            NmError::Resolve {
                file,
                entry: None,
                source,
            } => write!(f, "reading {}: {}", file, source),
            NmError::NoSymbols { file } => write!(f, "reading {}: no symbols", file),
        }
    }
}

impl error::Error for NmError {}

impl From<OpenError> for NmError {
    fn from(value: OpenError) -> Self {
        NmError::Open(value)
    }
}
