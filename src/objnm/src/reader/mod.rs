/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod object_file_reader;
mod open_error;
mod symbol_code;
mod symbols_error;

pub use object_file_reader::{ObjectEntry, ObjectFileReader};
pub use open_error::OpenError;
pub use symbols_error::SymbolsError;

use std::path::Path;

use crate::{
    line_table::{LineTable, LineTableError},
    symbol::Symbol,
};

/// One separately symbol-bearing unit of an object file, like an archive member.
pub trait Entry {
    /// `None` when the entry is the whole file.
    fn name(&self) -> Option<&str>;

    /// Reads the native symbol table.
    ///
    /// Must return [`SymbolsError::NoSymbols`] when the entry does not have one, so the caller
    /// can fall back to the [`line_table`](Entry::line_table).
    fn symbols(&self) -> Result<Vec<Symbol>, SymbolsError>;

    fn line_table(&self) -> Result<LineTable, LineTableError>;
}

impl<E: Entry + ?Sized> Entry for Box<E> {
    fn name(&self) -> Option<&str> {
        (**self).name()
    }
    fn symbols(&self) -> Result<Vec<Symbol>, SymbolsError> {
        (**self).symbols()
    }
    fn line_table(&self) -> Result<LineTable, LineTableError> {
        (**self).line_table()
    }
}

/// Opens object files and splits them into [`Entry`]s.
pub trait ObjectReader {
    type Entry: Entry;

    fn open(&self, path: &Path) -> Result<Vec<Self::Entry>, OpenError>;
}
