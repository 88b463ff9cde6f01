/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::{error, fmt};

use crate::{line_table::LineTableError, reader::SymbolsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveError {
    Symbols(SymbolsError),
    /// The native symbol table was missing and the pc-line table could not be used either.
    LineTable(LineTableError),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Symbols(x) => write!(f, "{}", x),
            ResolveError::LineTable(x) => write!(f, "{}", x),
        }
    }
}

impl error::Error for ResolveError {}

impl From<SymbolsError> for ResolveError {
    fn from(value: SymbolsError) -> Self {
        ResolveError::Symbols(value)
    }
}

impl From<LineTableError> for ResolveError {
    fn from(value: LineTableError) -> Self {
        ResolveError::LineTable(value)
    }
}
