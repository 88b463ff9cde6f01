/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::{error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LineTableError {
    /// The entry does not carry a pc-line table at all.
    Missing,
    Read(object::Error),
    BadHeader,
    UnknownMagic(u32),
    /// A table offset points outside of the table.
    Truncated {
        offset: usize,
    },
}

impl fmt::Display for LineTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineTableError::Missing => write!(f, "no pc-line table found"),
            LineTableError::Read(err) => write!(f, "{}", err),
            LineTableError::BadHeader => write!(f, "malformed pc-line table header"),
            LineTableError::UnknownMagic(magic) => {
                write!(f, "unknown pc-line table magic 0x{:08X}", magic)
            }
            LineTableError::Truncated { offset } => {
                write!(f, "truncated pc-line table at offset 0x{:X}", offset)
            }
        }
    }
}

impl error::Error for LineTableError {}

impl From<object::Error> for LineTableError {
    fn from(value: object::Error) -> Self {
        LineTableError::Read(value)
    }
}
