/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use crate::endian::Endian;

use super::{FuncRecord, LineTableError, FUNC_SYM_TYPE};

const MAGIC_GO12: u32 = 0xFFFF_FFFB;
const MAGIC_GO116: u32 = 0xFFFF_FFFA;
const MAGIC_GO118: u32 = 0xFFFF_FFF0;
const MAGIC_GO120: u32 = 0xFFFF_FFF1;

const HEADER_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
enum PclntabVersion {
    Go12,
    Go116,
    Go118,
    Go120,
}

impl PclntabVersion {
    fn from_magic(magic: u32) -> Option<Self> {
        match magic {
            MAGIC_GO12 => Some(PclntabVersion::Go12),
            MAGIC_GO116 => Some(PclntabVersion::Go116),
            MAGIC_GO118 => Some(PclntabVersion::Go118),
            MAGIC_GO120 => Some(PclntabVersion::Go120),
            _ => None,
        }
    }

    /// Since 1.18 the function table stores 32 bits offsets from the start of the text instead
    /// of full pointers.
    fn has_text_relative_entries(self) -> bool {
        matches!(self, PclntabVersion::Go118 | PclntabVersion::Go120)
    }
}

/// Where each piece of the function table lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    nfunc: usize,
    text_start: u64,
    funcnametab: usize,
    functab: usize,
    funcdata: usize,
}

struct Pclntab<'a> {
    data: &'a [u8],
    endian: Endian,
    ptr_size: usize,
    version: PclntabVersion,
}

pub(super) fn parse(data: &[u8]) -> Result<Vec<FuncRecord>, LineTableError> {
    let header = data.get(..HEADER_SIZE).ok_or(LineTableError::BadHeader)?;
    let magic = [header[0], header[1], header[2], header[3]];

    let (version, endian) = [Endian::Little, Endian::Big]
        .into_iter()
        .find_map(|endian| {
            PclntabVersion::from_magic(endian.word_from_bytes(magic)).map(|v| (v, endian))
        })
        .ok_or(LineTableError::UnknownMagic(Endian::Little.word_from_bytes(magic)))?;

    let quantum = header[6];
    let ptr_size = header[7];
    if header[4] != 0 || header[5] != 0 {
        return Err(LineTableError::BadHeader);
    }
    if !matches!(quantum, 1 | 2 | 4) || !matches!(ptr_size, 4 | 8) {
        return Err(LineTableError::BadHeader);
    }

    let table = Pclntab {
        data,
        endian,
        ptr_size: ptr_size.into(),
        version,
    };
    table.funcs()
}

impl Pclntab<'_> {
    fn bytes<const N: usize>(&self, offset: usize) -> Result<[u8; N], LineTableError> {
        offset
            .checked_add(N)
            .and_then(|end| self.data.get(offset..end))
            .and_then(|x| x.try_into().ok())
            .ok_or(LineTableError::Truncated { offset })
    }

    fn word(&self, offset: usize) -> Result<u32, LineTableError> {
        Ok(self.endian.word_from_bytes(self.bytes(offset)?))
    }

    fn uintptr(&self, offset: usize) -> Result<u64, LineTableError> {
        if self.ptr_size == 4 {
            self.word(offset).map(u64::from)
        } else {
            Ok(self.endian.dword_from_bytes(self.bytes(offset)?))
        }
    }

    fn offset_at(&self, offset: usize) -> Result<usize, LineTableError> {
        let value = self.uintptr(offset)?;
        usize::try_from(value).map_err(|_| LineTableError::Truncated { offset })
    }

    /// Reads the `index`th pointer sized field that follows the fixed header.
    fn header_field(&self, index: usize) -> Result<usize, LineTableError> {
        self.offset_at(HEADER_SIZE + index * self.ptr_size)
    }

    fn layout(&self) -> Result<Layout, LineTableError> {
        let nfunc = self.header_field(0)?;

        let layout = match self.version {
            PclntabVersion::Go12 => Layout {
                nfunc,
                text_start: 0,
                funcnametab: 0,
                functab: HEADER_SIZE + self.ptr_size,
                funcdata: 0,
            },
            PclntabVersion::Go116 => {
                let pcln = self.header_field(6)?;
                Layout {
                    nfunc,
                    text_start: 0,
                    funcnametab: self.header_field(2)?,
                    functab: pcln,
                    funcdata: pcln,
                }
            }
            PclntabVersion::Go118 | PclntabVersion::Go120 => {
                let pcln = self.header_field(7)?;
                Layout {
                    nfunc,
                    text_start: self.uintptr(HEADER_SIZE + 2 * self.ptr_size)?,
                    funcnametab: self.header_field(3)?,
                    functab: pcln,
                    funcdata: pcln,
                }
            }
        };

        let functab_end = layout
            .nfunc
            .checked_mul(self.functab_entry_size())
            .and_then(|x| x.checked_add(layout.functab))
            .ok_or(LineTableError::Truncated {
                offset: layout.functab,
            })?;
        if functab_end > self.data.len() {
            return Err(LineTableError::Truncated {
                offset: functab_end,
            });
        }

        Ok(layout)
    }

    fn functab_entry_size(&self) -> usize {
        if self.version.has_text_relative_entries() {
            2 * 4
        } else {
            2 * self.ptr_size
        }
    }

    /// Returns the entry pc and the offset of the `_func` struct of the `index`th function.
    fn functab_entry(&self, layout: &Layout, index: usize) -> Result<(u64, usize), LineTableError> {
        let offset = layout.functab + index * self.functab_entry_size();

        if self.version.has_text_relative_entries() {
            let entry_off = self.word(offset)?;
            let func_off = self.word(offset + 4)?;
            Ok((
                layout.text_start.wrapping_add(entry_off.into()),
                func_off as usize,
            ))
        } else {
            let entry = self.uintptr(offset)?;
            let func_off = self.offset_at(offset + self.ptr_size)?;
            Ok((entry, func_off))
        }
    }

    fn name_offset(&self, layout: &Layout, func_off: usize) -> Result<usize, LineTableError> {
        // The `_func` struct starts with the entry, either a pointer or a 32 bits text offset.
        let entry_field_size = if self.version.has_text_relative_entries() {
            4
        } else {
            self.ptr_size
        };
        let offset = layout
            .funcdata
            .checked_add(func_off)
            .and_then(|x| x.checked_add(entry_field_size))
            .ok_or(LineTableError::Truncated { offset: func_off })?;

        let name_off = self.word(offset)? as i32;
        usize::try_from(name_off).map_err(|_| LineTableError::Truncated { offset })
    }

    fn c_str(&self, offset: usize) -> Result<&[u8], LineTableError> {
        let tail = self
            .data
            .get(offset..)
            .ok_or(LineTableError::Truncated { offset })?;
        let len = tail
            .iter()
            .position(|x| *x == 0)
            .ok_or(LineTableError::Truncated { offset })?;
        Ok(&tail[..len])
    }

    fn funcs(&self) -> Result<Vec<FuncRecord>, LineTableError> {
        let layout = self.layout()?;
        let mut funcs = Vec::with_capacity(layout.nfunc);

        for i in 0..layout.nfunc {
            let (entry, func_off) = self.functab_entry(&layout, i)?;
            let name_off = self.name_offset(&layout, func_off)?;
            let name_start = layout
                .funcnametab
                .checked_add(name_off)
                .ok_or(LineTableError::Truncated { offset: name_off })?;
            let raw_name = self.c_str(name_start)?;

            if raw_name.is_empty() {
                log::trace!("Skipping nameless function at 0x{:X}", entry);
                continue;
            }
            let name = String::from_utf8_lossy(raw_name);

            funcs.push(FuncRecord::new(entry, &*name, FUNC_SYM_TYPE));
        }

        Ok(funcs)
    }
}
