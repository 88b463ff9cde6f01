/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Endian {
    Big,
    Little,
}

impl Endian {
    pub fn word_from_bytes(self, bytes: [u8; 4]) -> u32 {
        match self {
            Endian::Big => u32::from_be_bytes(bytes),
            Endian::Little => u32::from_le_bytes(bytes),
        }
    }
    pub fn dword_from_bytes(self, bytes: [u8; 8]) -> u64 {
        match self {
            Endian::Big => u64::from_be_bytes(bytes),
            Endian::Little => u64::from_le_bytes(bytes),
        }
    }

    #[cfg(test)]
    pub fn bytes_from_word(self, word: u32) -> [u8; 4] {
        match self {
            Endian::Big => word.to_be_bytes(),
            Endian::Little => word.to_le_bytes(),
        }
    }
    #[cfg(test)]
    pub fn bytes_from_dword(self, dword: u64) -> [u8; 8] {
        match self {
            Endian::Big => dword.to_be_bytes(),
            Endian::Little => dword.to_le_bytes(),
        }
    }
}
