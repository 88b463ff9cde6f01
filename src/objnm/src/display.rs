/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use bitflags::bitflags;
use core::fmt;
use std::io;

use crate::symbol::Symbol;

/// Label used for unnamed entries of a file that has more than one entry.
pub const ANONYMOUS_ENTRY_NAME: &str = "_go_.o";

bitflags! {
    /// Optional columns of the symbol listing.
    #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
    pub struct SymbolDisplayFlags: u32 {
        /// Decimal size between the address and the code.
        const SIZE = 1 << 0;
        /// Type label after the name, if the symbol has one.
        const TYPE = 1 << 1;
    }
}

/// What gets printed in front of every line of an entry.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum LinePrefix<'a> {
    None,
    File(&'a str),
    Entry { file: &'a str, entry: &'a str },
}

impl<'a> LinePrefix<'a> {
    /// Entry provenance wins over the file name, which in turn is only used when listing
    /// more than one file.
    #[must_use]
    pub fn select(
        file: &'a str,
        entry_count: usize,
        entry_name: Option<&'a str>,
        file_prefix: bool,
    ) -> Self {
        if entry_count > 1 {
            let entry = match entry_name {
                Some(name) if !name.is_empty() => name,
                _ => ANONYMOUS_ENTRY_NAME,
            };
            LinePrefix::Entry { file, entry }
        } else if file_prefix {
            LinePrefix::File(file)
        } else {
            LinePrefix::None
        }
    }
}

impl fmt::Display for LinePrefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinePrefix::None => Ok(()),
            LinePrefix::File(file) => write!(f, "{}:\t", file),
            LinePrefix::Entry { file, entry } => write!(f, "{}({}):\t", file, entry),
        }
    }
}

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct SymbolDisplay<'sym, 'pfx> {
    sym: &'sym Symbol,
    prefix: LinePrefix<'pfx>,
    flags: SymbolDisplayFlags,
}

impl<'sym, 'pfx> SymbolDisplay<'sym, 'pfx> {
    #[must_use]
    pub fn new(sym: &'sym Symbol, prefix: LinePrefix<'pfx>, flags: SymbolDisplayFlags) -> Self {
        Self { sym, prefix, flags }
    }
}

impl fmt::Display for SymbolDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sym = self.sym;

        write!(f, "{}", self.prefix)?;

        if sym.is_undefined() {
            write!(f, "{:8}", "")?;
        } else {
            write!(f, "{:8x}", sym.address())?;
        }

        if self.flags.contains(SymbolDisplayFlags::SIZE) {
            write!(f, " {:10}", sym.size())?;
        }

        write!(f, " {} {}", sym.code(), sym.name())?;

        if self.flags.contains(SymbolDisplayFlags::TYPE) {
            if let Some(type_label) = sym.type_label().filter(|x| !x.is_empty()) {
                write!(f, " {}", type_label)?;
            }
        }

        writeln!(f)
    }
}

/// Writes one line per symbol, keeping the given order.
pub fn write_symbols<W>(
    w: &mut W,
    symbols: &[Symbol],
    prefix: LinePrefix<'_>,
    flags: SymbolDisplayFlags,
) -> io::Result<()>
where
    W: io::Write,
{
    for sym in symbols {
        write!(w, "{}", SymbolDisplay::new(sym, prefix, flags))?;
    }
    Ok(())
}
