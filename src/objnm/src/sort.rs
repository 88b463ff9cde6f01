/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::{cmp, error, fmt, str::FromStr};

use crate::symbol::Symbol;

/// Order in which the symbols of a single entry are listed.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortOrder {
    /// Ascending numeric address.
    Address,
    /// Ascending lexicographic name.
    #[default]
    Name,
    /// Keep the order the symbols were read in.
    None,
    /// Descending size, largest first.
    Size,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Address,
        SortOrder::Name,
        SortOrder::None,
        SortOrder::Size,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Address => "address",
            SortOrder::Name => "name",
            SortOrder::None => "none",
            SortOrder::Size => "size",
        }
    }

    fn compare(&self, a: &Symbol, b: &Symbol) -> cmp::Ordering {
        match self {
            SortOrder::Address => a.address().cmp(&b.address()),
            SortOrder::Name => a.name().cmp(b.name()),
            SortOrder::None => cmp::Ordering::Equal,
            // Intentionally inverted.
            SortOrder::Size => b.size().cmp(&a.size()),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct ParseSortOrderError {
    value: String,
}

impl fmt::Display for ParseSortOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort order {:?}", self.value)
    }
}

impl error::Error for ParseSortOrderError {}

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|x| x.as_str() == s)
            .ok_or_else(|| ParseSortOrderError { value: s.into() })
    }
}

/// Sorts the symbols of one entry in place.
///
/// The sort is stable, symbols with equal keys keep the order they were read in.
pub fn sort_symbols(symbols: &mut [Symbol], order: SortOrder) {
    if order == SortOrder::None {
        return;
    }

    symbols.sort_by(|a, b| order.compare(a, b));
}
