/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use super::FileOutcome;

/// Running tally of a whole invocation, updated once per file.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct RunStatus {
    files: usize,
    failed_files: usize,
}

impl RunStatus {
    pub const fn new() -> Self {
        Self {
            files: 0,
            failed_files: 0,
        }
    }

    #[must_use]
    pub fn with_outcome(self, outcome: &FileOutcome) -> Self {
        Self {
            files: self.files + 1,
            failed_files: self.failed_files + usize::from(outcome.failed()),
        }
    }
}

impl RunStatus {
    pub const fn files(&self) -> usize {
        self.files
    }
    pub const fn failed_files(&self) -> usize {
        self.failed_files
    }

    pub const fn failed(&self) -> bool {
        self.failed_files != 0
    }

    /// `0` if every file was listed without problems, `1` otherwise.
    pub const fn exit_code(&self) -> i32 {
        if self.failed() {
            1
        } else {
            0
        }
    }
}
