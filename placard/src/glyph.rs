//! Glyphs
//!
//! Glyph types, their dimensions, and the range-based table used to look them up by character
//! code.

use std::ops::Range;
use std::sync::LazyLock;

use itertools::Itertools as _;
use placard_glyphs::{GlyphData, PRINTABLE_ASCII, UNKNOWN};
use thiserror::Error;
use tracing::debug;

/// Codes reserved for the unknown glyph in the standard table, following the convention that
/// U+FFFE is never a valid character.
pub const INVALID_CODES: Range<u32> = 0xFFFE..0xFFFF;

static STANDARD: LazyLock<GlyphTable> = LazyLock::new(GlyphTable::build_standard);

/// The block-letter drawing of a single character
///
/// Rows are stored as drawn and may have different lengths; shorter rows are padded with blanks
/// when rendered. Widths are measured in `char`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: &'static [&'static str],
    width: usize,
}

impl Glyph {
    /// Creates a glyph from its rows. The width is the length of the longest row, but at least
    /// `nominal_width`; this matters for glyphs without rows such as the blank space.
    #[must_use]
    pub fn new(rows: &'static [&'static str], nominal_width: usize) -> Self {
        let width = rows
            .iter()
            .map(|row| row.chars().count())
            .fold(nominal_width, usize::max);
        Self { rows, width }
    }

    /// The number of columns this glyph occupies.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// The number of rows in this glyph.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.rows.len()
    }

    /// Row `i` of the glyph, counting from the top, or `None` if the glyph is not that tall.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&'static str> {
        self.rows.get(i).copied()
    }

    /// All rows of the glyph, top to bottom.
    #[must_use]
    pub const fn rows(&self) -> &'static [&'static str] {
        self.rows
    }
}

impl From<GlyphData> for Glyph {
    fn from(data: GlyphData) -> Self {
        Self::new(data.rows, data.nominal_width)
    }
}

/// A contiguous range of character codes and one glyph for each of them
#[derive(Debug, Clone)]
pub struct GlyphRange {
    codes: Range<u32>,
    glyphs: Vec<Glyph>,
}

impl GlyphRange {
    /// Pairs the half-open range `codes` with its glyphs, the first glyph belonging to
    /// `codes.start`.
    ///
    /// # Errors
    /// Returns `Err` if the range is empty or the number of glyphs does not match its length.
    pub fn new(
        codes: Range<u32>,
        glyphs: impl IntoIterator<Item = Glyph>,
    ) -> Result<Self, TableError> {
        if codes.is_empty() {
            return Err(TableError::EmptyRange(codes));
        }
        let glyphs: Vec<Glyph> = glyphs.into_iter().collect();
        if usize::try_from(codes.end - codes.start).ok() != Some(glyphs.len()) {
            return Err(TableError::GlyphCount {
                codes,
                found: glyphs.len(),
            });
        }
        Ok(Self { codes, glyphs })
    }

    /// The character codes covered by this range.
    #[must_use]
    pub fn codes(&self) -> Range<u32> {
        self.codes.clone()
    }

    fn get(&self, code: u32) -> Option<&Glyph> {
        if !self.codes.contains(&code) {
            return None;
        }
        let index = usize::try_from(code - self.codes.start).ok()?;
        self.glyphs.get(index)
    }
}

/// A lookup table from character codes to glyphs
///
/// The table is a handful of disjoint code ranges plus a placeholder glyph returned for every
/// code outside them, so [`lookup`](GlyphTable::lookup) never fails. Glyph metrics are computed
/// once, when the table is built.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    ranges: Vec<GlyphRange>,
    unknown: Glyph,
    max_width: usize,
}

impl GlyphTable {
    /// Builds a table from disjoint ranges and the glyph to use for codes outside all of them.
    ///
    /// # Errors
    /// Returns [`TableError::Overlap`] if any two ranges share a code.
    pub fn new(ranges: Vec<GlyphRange>, unknown: Glyph) -> Result<Self, TableError> {
        let overlap = ranges
            .iter()
            .map(GlyphRange::codes)
            .sorted_by_key(|codes| codes.start)
            .tuple_windows()
            .find(|(first, second)| second.start < first.end);
        if let Some((first, second)) = overlap {
            return Err(TableError::Overlap(first, second));
        }
        let max_width = ranges
            .iter()
            .flat_map(|range| &range.glyphs)
            .chain([&unknown])
            .map(Glyph::width)
            .max()
            .unwrap_or(0);
        debug!(ranges = ranges.len(), max_width, "built glyph table");
        Ok(Self {
            ranges,
            unknown,
            max_width,
        })
    }

    /// The built-in table: the printable ASCII characters, with every other code drawn as a
    /// question mark.
    ///
    /// The table is built on first use and shared for the rest of the process.
    ///
    /// ```
    /// # use placard::glyph::GlyphTable;
    /// let table = GlyphTable::standard();
    /// assert_eq!(table.lookup(u32::from('H')).width(), 8);
    /// assert_eq!(table.lookup(u32::from('é')), table.unknown());
    /// ```
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    fn build_standard() -> Self {
        let first = PRINTABLE_ASCII[0].code;
        let last = PRINTABLE_ASCII[PRINTABLE_ASCII.len() - 1].code;
        let codes = u32::from(first)..u32::from(last) + 1;
        let ascii = GlyphRange::new(codes, PRINTABLE_ASCII.map(Glyph::from))
            .expect("Should be tested");
        let invalid = GlyphRange::new(INVALID_CODES, [Glyph::from(UNKNOWN)])
            .expect("Should be tested");
        Self::new(vec![invalid, ascii], UNKNOWN.into()).expect("Should be tested")
    }

    /// Returns the glyph for `code`, or the [unknown glyph](GlyphTable::unknown) if no range
    /// contains it.
    #[must_use]
    pub fn lookup(&self, code: u32) -> &Glyph {
        self.ranges
            .iter()
            .find_map(|range| range.get(code))
            .unwrap_or(&self.unknown)
    }

    /// The placeholder glyph for codes without a glyph of their own.
    #[must_use]
    pub const fn unknown(&self) -> &Glyph {
        &self.unknown
    }

    /// The width of the widest glyph in the table, including the unknown glyph. Monospace
    /// rendering gives every character a field this wide.
    #[must_use]
    pub const fn max_width(&self) -> usize {
        self.max_width
    }
}

/// An error in building a [`GlyphTable`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A range covers no codes.
    #[error("code range {0:?} is empty")]
    EmptyRange(Range<u32>),
    /// A range was given a different number of glyphs than it has codes.
    #[error("code range {codes:?} needs {} glyphs, found {found}", .codes.end - .codes.start)]
    GlyphCount {
        /// The offending range
        codes: Range<u32>,
        /// The number of glyphs supplied
        found: usize,
    },
    /// Two ranges share at least one code.
    #[error("code ranges {0:?} and {1:?} overlap")]
    Overlap(Range<u32>, Range<u32>),
}
