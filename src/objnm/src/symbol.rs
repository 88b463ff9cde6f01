/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use std::sync::Arc;

/// Classification tag used for symbols without a resolved address.
pub const UNDEFINED_CODE: char = 'U';

/// A single row of the symbol listing.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Symbol {
    address: u64,
    name: Arc<str>,
    size: u64,
    code: char,
    type_label: Option<String>,
}

impl Symbol {
    /// `name` must not be empty.
    #[must_use]
    pub fn new<N>(address: u64, name: N, size: u64, code: char) -> Self
    where
        N: Into<Arc<str>>,
    {
        let name = name.into();
        debug_assert!(!name.is_empty(), "Symbols must have a name");

        Self {
            address,
            name,
            size,
            code,
            type_label: None,
        }
    }

    #[must_use]
    pub fn with_type_label(self, type_label: Option<String>) -> Self {
        Self { type_label, ..self }
    }
}

impl Symbol {
    #[must_use]
    pub const fn address(&self) -> u64 {
        self.address
    }
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }
    #[must_use]
    pub const fn code(&self) -> char {
        self.code
    }
    #[must_use]
    pub fn type_label(&self) -> Option<&str> {
        self.type_label.as_deref()
    }

    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        self.code == UNDEFINED_CODE
    }
}
