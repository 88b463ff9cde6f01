/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod line_table_error;
mod pclntab;

pub use line_table_error::LineTableError;

use std::sync::Arc;

/// Type tag the Go toolchain gives to every function of its pc-line table.
pub const FUNC_SYM_TYPE: u8 = b'T';

/// One function described by a pc-line table.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FuncRecord {
    value: u64,
    name: Arc<str>,
    sym_type: u8,
}

impl FuncRecord {
    #[must_use]
    pub fn new<N>(value: u64, name: N, sym_type: u8) -> Self
    where
        N: Into<Arc<str>>,
    {
        Self {
            value,
            name: name.into(),
            sym_type,
        }
    }

    /// Entry address of the function.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }
    #[must_use]
    pub fn name(&self) -> Arc<str> {
        self.name.clone()
    }
    #[must_use]
    pub const fn sym_type(&self) -> u8 {
        self.sym_type
    }
}

/// Mapping from program counters to functions, used when an object has no symbol table.
///
/// Only the function boundaries are kept, there is no size or type information in it.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq)]
pub struct LineTable {
    funcs: Vec<FuncRecord>,
}

impl LineTable {
    #[must_use]
    pub fn new(funcs: Vec<FuncRecord>) -> Self {
        Self { funcs }
    }

    /// Decodes a Go `pclntab`. Go 1.2, 1.16, 1.18 and 1.20 layouts are understood.
    pub fn parse_pclntab(data: &[u8]) -> Result<Self, LineTableError> {
        pclntab::parse(data).map(Self::new)
    }

    #[must_use]
    pub fn funcs(&self) -> &[FuncRecord] {
        &self.funcs
    }
}
