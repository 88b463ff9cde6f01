/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::{error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SymbolsError {
    /// The entry has no native symbol table, it may have been stripped.
    NoSymbols,
    Read(object::Error),
}

impl fmt::Display for SymbolsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolsError::NoSymbols => write!(f, "no symbol section"),
            SymbolsError::Read(err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for SymbolsError {}

impl From<object::Error> for SymbolsError {
    fn from(value: object::Error) -> Self {
        SymbolsError::Read(value)
    }
}
