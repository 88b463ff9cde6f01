/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::ops::Range;
use std::{fs, path::Path, sync::Arc};

use object::{
    read::{
        archive::ArchiveFile,
        macho::{FatArch, MachOFatFile32, MachOFatFile64},
    },
    Architecture, BinaryFormat, FileKind, Object, ObjectSection, ObjectSymbol,
};

use crate::{
    line_table::{LineTable, LineTableError},
    symbol::Symbol,
};

use super::{symbol_code, Entry, ObjectReader, OpenError, SymbolsError};

/// Names the pc-line table section goes by, depending on the container format and whether the
/// binary is position independent.
const PCLNTAB_SECTION_NAMES: [&str; 3] = [".gopclntab", "__gopclntab", ".data.rel.ro.gopclntab"];

/// [`ObjectReader`] backed by the `object` crate.
///
/// Understands ELF, Mach-O (including universal binaries), PE/COFF and `ar` archives.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ObjectFileReader;

impl ObjectFileReader {
    pub fn new() -> Self {
        Self
    }

    /// Splits an in-memory file into its entries. `path` is only used for error reporting.
    pub fn entries_from_data(
        &self,
        path: &Path,
        data: Arc<[u8]>,
    ) -> Result<Vec<ObjectEntry>, OpenError> {
        let parse_error = |source| OpenError::Parse {
            path: path.to_path_buf(),
            source,
        };

        let kind = FileKind::parse(&*data).map_err(parse_error)?;

        match kind {
            FileKind::Archive => archive_entries(&data).map_err(parse_error),
            FileKind::MachOFat32 => {
                let fat = MachOFatFile32::parse(&*data).map_err(parse_error)?;
                Ok(fat_entries(&data, fat.arches()))
            }
            FileKind::MachOFat64 => {
                let fat = MachOFatFile64::parse(&*data).map_err(parse_error)?;
                Ok(fat_entries(&data, fat.arches()))
            }
            x if is_single_object(x) => {
                let range = 0..data.len();
                Ok(vec![ObjectEntry::new(None, data, range)])
            }
            x => Err(OpenError::UnsupportedFormat {
                path: path.to_path_buf(),
                kind: x,
            }),
        }
    }
}

impl ObjectReader for ObjectFileReader {
    type Entry = ObjectEntry;

    fn open(&self, path: &Path) -> Result<Vec<ObjectEntry>, OpenError> {
        let data = fs::read(path).map_err(|source| OpenError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let entries = self.entries_from_data(path, data.into())?;
        log::debug!("{}: {} entries", path.display(), entries.len());
        Ok(entries)
    }
}

fn is_single_object(kind: FileKind) -> bool {
    matches!(
        kind,
        FileKind::Elf32
            | FileKind::Elf64
            | FileKind::MachO32
            | FileKind::MachO64
            | FileKind::Pe32
            | FileKind::Pe64
            | FileKind::Coff
            | FileKind::CoffBig
    )
}

/// Every member that is an object file becomes an entry, named after the member. Anything else
/// (package metadata, nested archives, ...) is skipped.
fn archive_entries(data: &Arc<[u8]>) -> Result<Vec<ObjectEntry>, object::Error> {
    let archive = ArchiveFile::parse(&**data)?;
    let mut entries = Vec::new();

    for member in archive.members() {
        let member = member?;
        let name = String::from_utf8_lossy(member.name()).into_owned();
        let (offset, size) = member.file_range();

        let Some(range) = file_range(data, offset, size) else {
            log::debug!("Skipping out of bounds archive member {}", name);
            continue;
        };

        match FileKind::parse(&data[range.clone()]) {
            Ok(kind) if is_single_object(kind) => {
                entries.push(ObjectEntry::new(Some(name), data.clone(), range));
            }
            _ => log::debug!("Skipping non-object archive member {}", name),
        }
    }

    Ok(entries)
}

fn fat_entries<A>(data: &Arc<[u8]>, arches: &[A]) -> Vec<ObjectEntry>
where
    A: FatArch,
{
    arches
        .iter()
        .filter_map(|arch| {
            let (offset, size) = arch.file_range();
            let range = file_range(data, offset, size)?;
            let name = architecture_name(arch.architecture());
            Some(ObjectEntry::new(Some(name), data.clone(), range))
        })
        .collect()
}

/// Only ELF tells a missing symbol table apart from an empty one. The other formats always hand
/// out a table, which is empty when the binary was stripped.
fn has_symbol_table(file: &object::File<'_>) -> bool {
    match file.format() {
        BinaryFormat::Elf => file.symbol_table().is_some(),
        _ => file.symbols().next().is_some(),
    }
}

fn file_range(data: &[u8], offset: u64, size: u64) -> Option<Range<usize>> {
    let start = usize::try_from(offset).ok()?;
    let end = start.checked_add(usize::try_from(size).ok()?)?;

    if end <= data.len() {
        Some(start..end)
    } else {
        None
    }
}

fn architecture_name(arch: Architecture) -> String {
    match arch {
        Architecture::X86_64 => "x86_64".into(),
        Architecture::I386 => "i386".into(),
        Architecture::Aarch64 => "arm64".into(),
        Architecture::Arm => "arm".into(),
        Architecture::PowerPc => "ppc".into(),
        Architecture::PowerPc64 => "ppc64".into(),
        x => format!("{:?}", x).to_lowercase(),
    }
}

/// A single object inside of a file, sharing the file's bytes with its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    name: Option<String>,
    data: Arc<[u8]>,
    range: Range<usize>,
}

impl ObjectEntry {
    fn new(name: Option<String>, data: Arc<[u8]>, range: Range<usize>) -> Self {
        Self { name, data, range }
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.data.get(self.range.clone()).unwrap_or_default()
    }

    fn parse(&self) -> Result<object::File<'_>, object::Error> {
        object::File::parse(self.bytes())
    }
}

impl Entry for ObjectEntry {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn symbols(&self) -> Result<Vec<Symbol>, SymbolsError> {
        let file = self.parse()?;

        if !has_symbol_table(&file) {
            return Err(SymbolsError::NoSymbols);
        }

        let mut symbols = Vec::new();
        for sym in file.symbols() {
            let kind = sym.kind();
            if !symbol_code::is_listed(kind) {
                continue;
            }

            let raw_name = sym.name_bytes()?;
            if raw_name.is_empty() {
                continue;
            }
            let name = String::from_utf8_lossy(raw_name);

            let code = symbol_code::symbol_code(&file, &sym);
            let type_label = symbol_code::type_label(kind).map(String::from);

            symbols.push(
                Symbol::new(sym.address(), &*name, sym.size(), code).with_type_label(type_label),
            );
        }

        Ok(symbols)
    }

    fn line_table(&self) -> Result<LineTable, LineTableError> {
        let file = self.parse()?;

        let section = PCLNTAB_SECTION_NAMES
            .iter()
            .find_map(|name| file.section_by_name(name))
            .ok_or(LineTableError::Missing)?;

        LineTable::parse_pclntab(section.data()?)
    }
}
