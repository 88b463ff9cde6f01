/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

pub mod aggregator;
pub mod config;
pub mod display;
mod endian;
pub mod line_table;
pub mod reader;
pub mod resolver;
pub mod sort;
pub mod symbol;

pub use aggregator::{nm_file, run, FileOutcome, NmError, RunStatus};
pub use config::NmConfig;
pub use display::SymbolDisplayFlags;
pub use reader::{Entry, ObjectFileReader, ObjectReader};
pub use sort::SortOrder;
pub use symbol::Symbol;
