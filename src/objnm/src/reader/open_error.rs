/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::{error, fmt};
use std::{io, path::PathBuf};

#[derive(Debug)]
#[non_exhaustive]
pub enum OpenError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Parse {
        path: PathBuf,
        source: object::Error,
    },
    UnsupportedFormat {
        path: PathBuf,
        kind: object::FileKind,
    },
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::Io { path, source } => write!(f, "open {}: {}", path.display(), source),
            OpenError::Parse { path, source } => write!(f, "{}: {}", path.display(), source),
            OpenError::UnsupportedFormat { path, kind } => {
                write!(
                    f,
                    "{}: unrecognized object file format ({:?})",
                    path.display(),
                    kind
                )
            }
        }
    }
}

impl error::Error for OpenError {}
