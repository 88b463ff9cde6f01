/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use object::{Object, ObjectSection, ObjectSymbol, SectionKind, SymbolKind, SymbolSection};

use crate::symbol::UNDEFINED_CODE;

const UNKNOWN_CODE: char = '?';

/// Classifies a native symbol the way `nm` does.
///
/// Local symbols get the lowercase version of their code, except for undefined and unknown
/// symbols.
pub(crate) fn symbol_code<'data, O, S>(file: &O, sym: &S) -> char
where
    O: Object<'data>,
    S: ObjectSymbol<'data>,
{
    let code = match sym.section() {
        SymbolSection::Undefined => return UNDEFINED_CODE,
        SymbolSection::Common => 'B',
        SymbolSection::Absolute => 'A',
        SymbolSection::Section(index) => match file.section_by_index(index) {
            Ok(section) => section_code(section.kind()),
            Err(_) => UNKNOWN_CODE,
        },
        _ => UNKNOWN_CODE,
    };

    if code != UNKNOWN_CODE && sym.is_local() {
        code.to_ascii_lowercase()
    } else {
        code
    }
}

fn section_code(kind: SectionKind) -> char {
    match kind {
        SectionKind::Text => 'T',
        SectionKind::Data | SectionKind::Tls => 'D',
        SectionKind::ReadOnlyData
        | SectionKind::ReadOnlyDataWithRel
        | SectionKind::ReadOnlyString => 'R',
        SectionKind::UninitializedData | SectionKind::UninitializedTls | SectionKind::Common => {
            'B'
        }
        _ => UNKNOWN_CODE,
    }
}

/// Textual kind shown by the type column.
pub(crate) fn type_label(kind: SymbolKind) -> Option<&'static str> {
    match kind {
        SymbolKind::Text => Some("func"),
        SymbolKind::Data => Some("object"),
        SymbolKind::Label => Some("label"),
        SymbolKind::Tls => Some("tls"),
        _ => None,
    }
}

/// Section and file symbols are bookkeeping, not something a listing should show.
pub(crate) fn is_listed(kind: SymbolKind) -> bool {
    !matches!(kind, SymbolKind::Section | SymbolKind::File)
}
