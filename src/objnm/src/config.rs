/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use crate::{display::SymbolDisplayFlags, sort::SortOrder};

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct NmConfig {
    sort_order: SortOrder,
    display_flags: SymbolDisplayFlags,
    /// Prefix every line with the file name, used when listing more than one file.
    file_prefix: bool,
}

impl NmConfig {
    pub fn new() -> Self {
        Self {
            sort_order: SortOrder::Name,
            display_flags: SymbolDisplayFlags::empty(),
            file_prefix: false,
        }
    }

    /// `-n` style alias: when requested it overrides whatever sort order was selected with an
    /// address sort.
    #[must_use]
    pub fn with_numeric_alias(self, numeric: bool) -> Self {
        if numeric {
            self.with_sort_order(SortOrder::Address)
        } else {
            self
        }
    }
}

impl Default for NmConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl NmConfig {
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }
    pub fn sort_order_mut(&mut self) -> &mut SortOrder {
        &mut self.sort_order
    }
    pub fn with_sort_order(self, sort_order: SortOrder) -> Self {
        Self { sort_order, ..self }
    }

    pub const fn display_flags(&self) -> SymbolDisplayFlags {
        self.display_flags
    }
    pub fn display_flags_mut(&mut self) -> &mut SymbolDisplayFlags {
        &mut self.display_flags
    }
    pub fn with_display_flags(self, display_flags: SymbolDisplayFlags) -> Self {
        Self {
            display_flags,
            ..self
        }
    }

    pub const fn file_prefix(&self) -> bool {
        self.file_prefix
    }
    pub fn file_prefix_mut(&mut self) -> &mut bool {
        &mut self.file_prefix
    }
    pub fn with_file_prefix(self, file_prefix: bool) -> Self {
        Self {
            file_prefix,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn numeric_alias_forces_address_order() {
        let config = NmConfig::new()
            .with_sort_order(SortOrder::Size)
            .with_numeric_alias(true);
        assert_eq!(config.sort_order(), SortOrder::Address);

        let config = NmConfig::new()
            .with_sort_order(SortOrder::Size)
            .with_numeric_alias(false);
        assert_eq!(config.sort_order(), SortOrder::Size);
    }

    #[test]
    fn defaults() {
        let config = NmConfig::default();
        assert_eq!(config.sort_order(), SortOrder::Name);
        assert_eq!(config.display_flags(), SymbolDisplayFlags::empty());
        assert!(!config.file_prefix());
    }
}
