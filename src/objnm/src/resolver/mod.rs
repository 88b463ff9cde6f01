/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod resolve_error;

pub use resolve_error::ResolveError;

use crate::{
    line_table::LineTable,
    reader::{Entry, SymbolsError},
    symbol::Symbol,
};

/// Where the symbols of an entry came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Read from the entry's own symbol table.
    Native(Vec<Symbol>),
    /// The entry had no symbol table, so the symbols were rebuilt from its pc-line table.
    LineTable(Vec<Symbol>),
}

impl Resolution {
    #[must_use]
    pub fn into_symbols(self) -> Vec<Symbol> {
        match self {
            Resolution::Native(x) | Resolution::LineTable(x) => x,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::LineTable(_))
    }
}

/// Gets the symbols of an entry, preferring its native symbol table.
///
/// Only a missing symbol table triggers the pc-line table fallback. Any other failure is handed
/// back as is. An empty symbol table is a valid result.
pub fn resolve_entry<E>(entry: &E) -> Result<Resolution, ResolveError>
where
    E: Entry + ?Sized,
{
    match entry.symbols() {
        Ok(symbols) => Ok(Resolution::Native(symbols)),
        Err(SymbolsError::NoSymbols) => {
            let line_table = entry.line_table()?;
            Ok(Resolution::LineTable(symbols_from_line_table(&line_table)))
        }
        Err(err) => Err(err.into()),
    }
}

/// Turns every function of the table into a sizeless symbol.
#[must_use]
pub fn symbols_from_line_table(line_table: &LineTable) -> Vec<Symbol> {
    line_table
        .funcs()
        .iter()
        .map(|func| Symbol::new(func.value(), func.name(), 0, char::from(func.sym_type())))
        .collect()
}
