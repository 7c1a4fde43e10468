// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hebrew text normalization for matching.
//!
//! Government datasets spell the same place a dozen ways: pointed and
//! unpointed, with a gershayim in an abbreviation or a plain double quote,
//! with stray double spaces from spreadsheet exports. Everything that takes
//! part in a comparison goes through [`normalize`] first, so the rest of the
//! engine can compare plain strings.
//!
//! # Algorithm
//!
//! 1. (with `unicode-normalization`) NFD decompose, so precomposed
//!    presentation forms like `U+FB2A` (שׁ) split into letter + point
//! 2. Drop Hebrew points and cantillation marks, `U+0591..=U+05C7`, except
//!    the maqaf (`U+05BE`), which separates words like a space does
//! 3. Drop quotation marks, apostrophes, geresh (`׳`) and gershayim (`״`)
//! 4. Collapse whitespace runs (maqaf included) to a single space and trim
//!
//! There is no case folding: Hebrew has no case, and Latin text only ever
//! takes part in plain substring checks.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching.
///
/// ```
/// use mitcham::normalize;
///
/// assert_eq!(normalize("  רַעֲנַנָּה  "), "רעננה");
/// assert_eq!(normalize("ת\"א"), "תא");
/// assert_eq!(normalize("פ״ת"), "פת");
/// ```
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    // Stripping can make two combining marks adjacent; the second NFD pass
    // restores canonical order so the result is stable under re-normalization.
    collapse_whitespace(
        value
            .nfd()
            .map(maqaf_to_space)
            .filter(|c| !is_stripped(*c))
            .nfd(),
    )
}

/// Normalization without NFD: presentation forms keep their points.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    collapse_whitespace(value.chars().map(maqaf_to_space).filter(|c| !is_stripped(*c)))
}

/// Hebrew hyphen: "תל־אביב".
pub const MAQAF: char = '\u{05BE}';

/// Hebrew points and cantillation marks (niqqud, te'amim).
#[inline]
pub fn is_hebrew_point(c: char) -> bool {
    matches!(c, '\u{0591}'..='\u{05C7}') && c != MAQAF
}

#[inline]
fn maqaf_to_space(c: char) -> char {
    if c == MAQAF {
        ' '
    } else {
        c
    }
}

/// Quote-like characters that carry no meaning for matching.
///
/// `ת"א`, `ת״א` and `ת׳א` all mean the same abbreviation.
#[inline]
pub fn is_quote_mark(c: char) -> bool {
    matches!(
        c,
        '"' | '\''
            | '\u{05F3}' // geresh
            | '\u{05F4}' // gershayim
            | '\u{2018}'..='\u{201F}' // typographic quotes
            | '`'
    )
}

#[inline]
fn is_stripped(c: char) -> bool {
    is_hebrew_point(c) || is_quote_mark(c)
}

fn collapse_whitespace(chars: impl Iterator<Item = char>) -> String {
    let mut out = String::new();
    let mut pending_space = false;
    for c in chars {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }
    out
}
