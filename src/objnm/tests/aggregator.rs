/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

use objnm::{
    line_table::{FuncRecord, LineTable, LineTableError},
    reader::{Entry, ObjectReader, OpenError, SymbolsError},
    NmConfig, NmError, SortOrder, Symbol, SymbolDisplayFlags,
};
use pretty_assertions::assert_eq;

struct FakeEntry {
    name: Option<String>,
    symbols: Result<Vec<Symbol>, SymbolsError>,
    line_table: Result<LineTable, LineTableError>,
}

impl FakeEntry {
    fn native(name: Option<&str>, symbols: Vec<Symbol>) -> Self {
        Self {
            name: name.map(String::from),
            symbols: Ok(symbols),
            line_table: Err(LineTableError::Missing),
        }
    }

    fn stripped(name: Option<&str>, line_table: Result<LineTable, LineTableError>) -> Self {
        Self {
            name: name.map(String::from),
            symbols: Err(SymbolsError::NoSymbols),
            line_table,
        }
    }

    fn broken(name: Option<&str>) -> Self {
        Self {
            name: name.map(String::from),
            symbols: Err(SymbolsError::Read(
                object::File::parse(&b""[..]).unwrap_err(),
            )),
            line_table: Err(LineTableError::Missing),
        }
    }
}

impl Entry for FakeEntry {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn symbols(&self) -> Result<Vec<Symbol>, SymbolsError> {
        self.symbols.clone()
    }
    fn line_table(&self) -> Result<LineTable, LineTableError> {
        self.line_table.clone()
    }
}

/// Hands out entries built on demand, files not listed in it do not exist.
#[derive(Default)]
struct FakeReader {
    files: HashMap<PathBuf, fn() -> Vec<FakeEntry>>,
}

impl FakeReader {
    fn with_file(mut self, path: &str, entries: fn() -> Vec<FakeEntry>) -> Self {
        self.files.insert(PathBuf::from(path), entries);
        self
    }
}

impl ObjectReader for FakeReader {
    type Entry = FakeEntry;

    fn open(&self, path: &Path) -> Result<Vec<FakeEntry>, OpenError> {
        match self.files.get(path) {
            Some(entries) => Ok(entries()),
            None => Err(OpenError::Io {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
            }),
        }
    }
}

fn two_symbols() -> Vec<FakeEntry> {
    vec![FakeEntry::native(
        None,
        vec![
            Symbol::new(0x10, "b", 4, 'T'),
            Symbol::new(0x20, "a", 8, 'T'),
        ],
    )]
}

fn undefined_and_data() -> Vec<FakeEntry> {
    vec![FakeEntry::native(
        None,
        vec![
            Symbol::new(0, "puts", 0, 'U'),
            Symbol::new(0x4000, "counter", 8, 'D').with_type_label(Some("object".into())),
        ],
    )]
}

fn nothing() -> Vec<FakeEntry> {
    vec![FakeEntry::native(None, Vec::new())]
}

fn archive() -> Vec<FakeEntry> {
    vec![
        FakeEntry::native(Some("x.o"), vec![Symbol::new(0x0, "x", 0, 'T')]),
        FakeEntry::native(Some("empty.o"), Vec::new()),
        FakeEntry::native(None, vec![Symbol::new(0x8, "anon", 0, 'D')]),
    ]
}

fn partially_broken() -> Vec<FakeEntry> {
    vec![
        FakeEntry::broken(Some("bad.o")),
        FakeEntry::native(Some("good.o"), vec![Symbol::new(0x4, "good", 0, 'T')]),
    ]
}

fn all_broken() -> Vec<FakeEntry> {
    vec![FakeEntry::broken(Some("bad.o")), FakeEntry::broken(None)]
}

fn stripped() -> Vec<FakeEntry> {
    vec![FakeEntry::stripped(
        None,
        Ok(LineTable::new(vec![
            FuncRecord::new(0x401000, "runtime.text", b'T'),
            FuncRecord::new(0x4010A0, "main.main", b'T'),
        ])),
    )]
}

fn stripped_without_table() -> Vec<FakeEntry> {
    vec![FakeEntry::stripped(None, Err(LineTableError::Missing))]
}

fn reader() -> FakeReader {
    FakeReader::default()
        .with_file("prog", two_symbols)
        .with_file("libc_user", undefined_and_data)
        .with_file("empty", nothing)
        .with_file("lib.a", archive)
        .with_file("partial.a", partially_broken)
        .with_file("broken.a", all_broken)
        .with_file("stripped", stripped)
        .with_file("stripped_bare", stripped_without_table)
}

struct Listing {
    out: String,
    err: String,
    status: objnm::RunStatus,
}

fn list(paths: &[&str], config: NmConfig) -> Listing {
    let config = config.with_file_prefix(paths.len() > 1);
    let mut out = Vec::new();
    let mut err = Vec::new();

    let status = objnm::run(&reader(), paths, &config, &mut out, &mut err).unwrap();

    Listing {
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
        status,
    }
}

#[test]
fn single_file_sort_orders() {
    let by_name = list(&["prog"], NmConfig::new());
    assert_eq!(by_name.out, "      20 T a\n      10 T b\n");
    assert_eq!(by_name.err, "");
    assert_eq!(by_name.status.exit_code(), 0);

    let by_size = list(&["prog"], NmConfig::new().with_sort_order(SortOrder::Size));
    assert_eq!(by_size.out, "      20 T a\n      10 T b\n");

    let by_address = list(&["prog"], NmConfig::new().with_sort_order(SortOrder::Address));
    assert_eq!(by_address.out, "      10 T b\n      20 T a\n");

    let numeric = list(&["prog"], NmConfig::new().with_numeric_alias(true));
    assert_eq!(numeric.out, by_address.out);

    let unsorted = list(&["prog"], NmConfig::new().with_sort_order(SortOrder::None));
    assert_eq!(unsorted.out, "      10 T b\n      20 T a\n");
}

#[test]
fn optional_columns() {
    let listing = list(
        &["libc_user"],
        NmConfig::new().with_display_flags(SymbolDisplayFlags::SIZE | SymbolDisplayFlags::TYPE),
    );

    assert_eq!(
        listing.out,
        "    4000          8 D counter object\n                  0 U puts\n"
    );
}

#[test]
fn several_files_get_a_prefix() {
    let listing = list(&["prog", "libc_user"], NmConfig::new());

    assert_eq!(
        listing.out,
        "prog:\t      20 T a\n\
         prog:\t      10 T b\n\
         libc_user:\t    4000 D counter\n\
         libc_user:\t         U puts\n"
    );
    assert_eq!(listing.status.exit_code(), 0);
    assert_eq!(listing.status.files(), 2);
}

#[test]
fn entries_get_their_own_prefix() {
    let listing = list(&["lib.a"], NmConfig::new());

    assert_eq!(
        listing.out,
        "lib.a(x.o):\t       0 T x\n\
         lib.a(_go_.o):\t       8 D anon\n"
    );
    assert_eq!(listing.err, "");
}

#[test]
fn missing_file_does_not_stop_the_rest() {
    let listing = list(&["nope", "prog"], NmConfig::new());

    assert_eq!(listing.out, "prog:\t      20 T a\nprog:\t      10 T b\n");
    assert_eq!(listing.err, "open nope: no such file or directory\n");
    assert_eq!(listing.status.failed_files(), 1);
    assert_eq!(listing.status.exit_code(), 1);
}

#[test]
fn no_symbols_is_reported_once() {
    let listing = list(&["empty", "prog"], NmConfig::new());

    assert_eq!(listing.err, "reading empty: no symbols\n");
    assert_eq!(listing.out, "prog:\t      20 T a\nprog:\t      10 T b\n");
    assert_eq!(listing.status.failed_files(), 1);
    assert!(listing.status.failed());
}

#[test]
fn broken_entry_is_skipped() {
    let mut out = Vec::new();
    let outcome = objnm::nm_file(
        &reader(),
        Path::new("partial.a"),
        &NmConfig::new(),
        &mut out,
    )
    .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "partial.a(good.o):\t       4 T good\n");
    assert_eq!(outcome.errors().len(), 1);
    assert!(matches!(
        &outcome.errors()[0],
        NmError::Resolve { entry: Some(entry), .. } if entry == "bad.o"
    ));
    assert!(outcome.failed());
    assert_eq!(outcome.symbols_written(), 1);
}

#[test]
fn every_entry_broken() {
    let listing = list(&["broken.a"], NmConfig::new());

    assert_eq!(listing.out, "");
    let lines: Vec<&str> = listing.err.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("reading broken.a(bad.o): "));
    assert!(lines[1].starts_with("reading broken.a: "));
    assert_eq!(lines[2], "reading broken.a: no symbols");
    assert_eq!(listing.status.exit_code(), 1);
}

#[test]
fn stripped_file_uses_the_line_table() {
    let listing = list(
        &["stripped"],
        NmConfig::new().with_display_flags(SymbolDisplayFlags::all()),
    );

    assert_eq!(
        listing.out,
        "  4010a0          0 T main.main\n  401000          0 T runtime.text\n"
    );
    assert_eq!(listing.err, "");
    assert_eq!(listing.status.exit_code(), 0);
}

#[test]
fn stripped_file_without_line_table() {
    let listing = list(&["stripped_bare"], NmConfig::new());

    assert_eq!(listing.out, "");
    assert_eq!(
        listing.err,
        "reading stripped_bare: no pc-line table found\nreading stripped_bare: no symbols\n"
    );
    assert_eq!(listing.status.exit_code(), 1);
}
