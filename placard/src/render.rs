//! Renderer and rendering settings
mod frame;

use std::io::{self, BufRead, Write};
use std::iter::repeat_n;

use bstr::io::BufReadExt as _;
use enumset::{EnumSet, EnumSetType};
use tracing::{trace, warn};

use crate::glyph::{Glyph, GlyphTable};
use crate::str_ext::BStrExt as _;

pub use frame::{BorderStyle, Piece, Segment, Transition};

/// Blank columns between two adjacent glyphs
pub const GLYPH_GAP: usize = 2;

/// Default minimum number of rows in a block, see [`Renderer::min_height`]
pub const MIN_HEIGHT: usize = 7;

/// Maximum number of characters per line rendered by [`Renderer::render_reader`]. Anything
/// beyond it is dropped.
pub const MAX_LINE_CHARS: usize = 8191;

/// The main type for rendering
///
/// Each input line becomes one *block*: as many rows as its tallest glyph (but at least
/// [`min_height`](Renderer::min_height)), with the glyphs side by side. Blocks are stacked
/// vertically, separated by a blank row or, when [framed](Renderer::frame), by borders that
/// adapt to the width of the blocks above and below.
///
/// The settings are meant to be used in a builder pattern:
/// ```
/// # use placard::glyph::GlyphTable;
/// # use placard::render::{BorderStyle, Renderer};
/// let rendered = Renderer::new(GlyphTable::standard())
///     .frame(true)
///     .border_style(BorderStyle::BoxDrawing)
///     .render("ok");
/// let expected = concat!(
///     r"╔═════════════════╗", "\n",
///     r"║          #      ║", "\n",
///     r"║          #   #  ║", "\n",
///     r"║  #####   #  #   ║", "\n",
///     r"║ #     #  #####  ║", "\n",
///     r"║ #     #  #    # ║", "\n",
///     r"║ #     #  #    # ║", "\n",
///     r"║  #####   #    # ║", "\n",
///     r"╚═════════════════╝", "\n",
/// );
/// assert_eq!(rendered, expected);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'table> {
    table: &'table GlyphTable,
    config: Config,
}

impl<'table> Renderer<'table> {
    /// Creates a renderer with every [`Mode`] off, [`BorderStyle::Ascii`] and a minimum height
    /// of [`MIN_HEIGHT`].
    pub const fn new(table: &'table GlyphTable) -> Self {
        Self {
            table,
            config: Config::DEFAULT,
        }
    }

    /// Replaces all modes at once.
    pub const fn modes(mut self, modes: EnumSet<Mode>) -> Self {
        self.config.modes = modes;
        self
    }

    /// Enables or disables [`Mode::Frame`].
    pub fn frame(mut self, enabled: bool) -> Self {
        self.config.set(Mode::Frame, enabled);
        self
    }

    /// Enables or disables [`Mode::Monospace`].
    pub fn monospace(mut self, enabled: bool) -> Self {
        self.config.set(Mode::Monospace, enabled);
        self
    }

    /// Sets the characters used for frames.
    pub const fn border_style(mut self, style: BorderStyle) -> Self {
        self.config.border_style = style;
        self
    }

    /// Sets the minimum number of rows in a block. With `0`, a line without glyph rows (such as
    /// an empty line) produces no rows at all.
    pub const fn min_height(mut self, rows: usize) -> Self {
        self.config.min_height = rows;
        self
    }

    /// Computes the size of the block for a line of character codes, not counting frame sides.
    ///
    /// ```
    /// # use placard::glyph::GlyphTable;
    /// # use placard::render::{Metrics, Renderer};
    /// let renderer = Renderer::new(GlyphTable::standard());
    /// let line: Vec<u32> = "Hi".chars().map(u32::from).collect();
    /// assert_eq!(renderer.measure(&line), Metrics { width: 13, height: 7 });
    /// ```
    #[must_use]
    pub fn measure(&self, line: &[u32]) -> Metrics {
        let spacing = line.len().saturating_sub(1) * GLYPH_GAP;
        let (width, height) = line
            .iter()
            .map(|&code| self.table.lookup(code))
            .fold((spacing, self.config.min_height), |(width, height), glyph| {
                (width + self.field_width(glyph), height.max(glyph.height()))
            });
        Metrics { width, height }
    }

    fn field_width(&self, glyph: &Glyph) -> usize {
        if self.config.monospace() {
            self.table.max_width()
        } else {
            glyph.width()
        }
    }

    /// Returns the rows of the block for a line of character codes, top to bottom.
    ///
    /// When framing, the rows of a non-empty line include the frame sides.
    pub fn rows(&self, line: &[u32]) -> Rows<'table> {
        let height = self.measure(line).height;
        self.rows_with_height(line, height)
    }

    fn rows_with_height(&self, line: &[u32], height: usize) -> Rows<'table> {
        let table = self.table;
        Rows {
            glyphs: line.iter().map(|&code| table.lookup(code)).collect(),
            config: self.config,
            max_width: table.max_width(),
            height,
            next: 0,
        }
    }

    /// Writes the block for one line, preceded by a border or a blank separator row as
    /// appropriate, and records the line in `state`.
    ///
    /// # Errors
    /// Returns any error from writing to `out`.
    pub fn write_line(
        &self,
        state: &mut RenderState,
        line: &[u32],
        out: &mut impl Write,
    ) -> io::Result<()> {
        let metrics = self.measure(line);
        trace!(
            chars = line.len(),
            width = metrics.width,
            height = metrics.height,
            "rendering line"
        );
        let border = if self.config.framed() {
            let transition = Transition::between(state.previous_width, metrics.width);
            self.config.border_style.draw(transition)
        } else {
            None
        };
        if let Some(border) = border {
            writeln!(out, "{border}")?;
        } else {
            if state.blocks > 0 {
                writeln!(out)?;
            }
            state.blocks += 1;
        }
        for row in self.rows_with_height(line, metrics.height) {
            writeln!(out, "{row}")?;
        }
        state.previous_width = metrics.width;
        Ok(())
    }

    /// Closes the frame, if one is open, at the end of an input source.
    ///
    /// The next line written with the same `state` starts a new frame, but keeps counting blocks
    /// for the blank separators.
    ///
    /// # Errors
    /// Returns any error from writing to `out`.
    pub fn finish(&self, state: &mut RenderState, out: &mut impl Write) -> io::Result<()> {
        if self.config.framed() {
            let transition = Transition::between(state.previous_width, 0);
            if let Some(border) = self.config.border_style.draw(transition) {
                writeln!(out, "{border}")?;
            }
        }
        state.previous_width = 0;
        Ok(())
    }

    /// Renders every line of `reader`, then [finishes](Renderer::finish) the source.
    ///
    /// Lines end at `\n` or `\r\n`. Lines longer than [`MAX_LINE_CHARS`] characters (after
    /// decoding) are truncated.
    ///
    /// # Errors
    /// Returns any error from reading `reader` or writing to `out`.
    pub fn render_reader(
        &self,
        state: &mut RenderState,
        mut reader: impl BufRead,
        decoding: Decoding,
        out: &mut impl Write,
    ) -> io::Result<()> {
        reader.for_byte_line(|line| {
            let mut codes = line.char_codes(decoding);
            if codes.len() > MAX_LINE_CHARS {
                warn!(
                    chars = codes.len(),
                    kept = MAX_LINE_CHARS,
                    "truncating overlong line"
                );
                codes.truncate(MAX_LINE_CHARS);
            }
            self.write_line(state, &codes, out)?;
            Ok(true)
        })?;
        self.finish(state, out)
    }

    /// Renders a string as a single source, one block per line. Every output row, including the
    /// last one, ends with a newline.
    #[expect(clippy::missing_panics_doc, reason = "in-memory I/O does not fail")]
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let mut out = Vec::new();
        self.render_reader(
            &mut RenderState::new(),
            text.as_bytes(),
            Decoding::Utf8,
            &mut out,
        )
        .expect("in-memory I/O does not fail");
        String::from_utf8_lossy(&out).into_owned()
    }
}

/// Rendering modes, combined in an [`EnumSet`]
#[derive(Debug, EnumSetType)]
pub enum Mode {
    /// Draw borders around blocks instead of separating them with blank rows.
    Frame,
    /// Give every glyph a field as wide as the widest glyph in the table, with the glyph centered
    /// in it. If the padding is odd, the extra blank goes on the right.
    Monospace,
}

/// How input bytes are turned into character codes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Decoding {
    /// Unicode scalar values from UTF-8; invalid sequences become U+FFFD. This is the default.
    #[default]
    Utf8,
    /// Every byte is its own character code.
    Bytes,
}

/// The size of a rendered block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metrics {
    /// Width in columns, including the gaps between glyphs
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

/// What a [`Renderer`] remembers between lines
///
/// Keep one state for a whole run, across input sources, and pass it to every
/// [`write_line`](Renderer::write_line) and [`finish`](Renderer::finish).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderState {
    previous_width: usize,
    blocks: usize,
}

impl RenderState {
    /// A state for a run in which nothing has been written yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            previous_width: 0,
            blocks: 0,
        }
    }

    /// Width of the last block written since the frame was opened, or 0 if there is none.
    #[must_use]
    pub const fn previous_width(&self) -> usize {
        self.previous_width
    }

    /// Number of blocks written without a border above them.
    #[must_use]
    pub const fn blocks(&self) -> usize {
        self.blocks
    }
}

/// Iterator over the rows of a block, see [`Renderer::rows`]
#[derive(Debug, Clone)]
pub struct Rows<'table> {
    glyphs: Vec<&'table Glyph>,
    config: Config,
    max_width: usize,
    height: usize,
    next: usize,
}

impl Rows<'_> {
    fn row(&self, i: usize) -> String {
        let framed = self.config.framed() && !self.glyphs.is_empty();
        let (left, right) = self.config.border_style.vertical();
        let mut row = String::new();
        if framed {
            row.push_str(left);
        }
        for (j, glyph) in self.glyphs.iter().enumerate() {
            let gap = if j > 0 { GLYPH_GAP } else { 0 };
            let (pad, field) = if self.config.monospace() {
                let pad = self.max_width.saturating_sub(glyph.width()) / 2;
                (pad, self.max_width - pad)
            } else {
                (0, glyph.width())
            };
            let content = glyph.row(i).unwrap_or_default();
            row.extend(repeat_n(' ', gap + pad));
            row.push_str(content);
            row.extend(repeat_n(' ', field.saturating_sub(content.chars().count())));
        }
        if framed {
            row.push_str(right);
        }
        row
    }
}

impl Iterator for Rows<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.height {
            return None;
        }
        let row = self.row(self.next);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.height - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Config {
    modes: EnumSet<Mode>,
    border_style: BorderStyle,
    min_height: usize,
}

impl Config {
    const DEFAULT: Self = Self {
        modes: EnumSet::empty(),
        border_style: BorderStyle::Ascii,
        min_height: MIN_HEIGHT,
    };

    fn set(&mut self, mode: Mode, enabled: bool) {
        if enabled {
            self.modes |= mode;
        } else {
            self.modes -= mode;
        }
    }

    fn framed(self) -> bool {
        self.modes.contains(Mode::Frame)
    }

    fn monospace(self) -> bool {
        self.modes.contains(Mode::Monospace)
    }
}

#[cfg(test)]
mod test {
    use enumset::EnumSet;

    use super::{Decoding, Metrics, Mode, RenderState, Renderer};
    use crate::glyph::GlyphTable;

    fn codes(line: &str) -> Vec<u32> {
        line.chars().map(u32::from).collect()
    }

    fn renderer() -> Renderer<'static> {
        Renderer::new(GlyphTable::standard())
    }

    #[test]
    fn measure_empty() {
        assert_eq!(renderer().measure(&[]), Metrics { width: 0, height: 7 });
        assert_eq!(
            renderer().min_height(0).measure(&[]),
            Metrics { width: 0, height: 0 }
        );
        assert_eq!(renderer().min_height(0).measure(&codes("  ")).height, 0);
    }

    #[test]
    fn measure_single() {
        let table = GlyphTable::standard();
        for c in ['H', 'i', 'g', ' ', '\u{263a}'] {
            let glyph = table.lookup(u32::from(c));
            let line = [u32::from(c)];
            assert_eq!(renderer().measure(&line).width, glyph.width());
            assert_eq!(
                renderer().monospace(true).measure(&line).width,
                table.max_width()
            );
        }
        assert_eq!(renderer().measure(&codes("g")).height, 9);
    }

    #[test]
    fn measure_spacing() {
        let table = GlyphTable::standard();
        for line in ["Hi", "you", "a b c", "!!!!!!!!!!"] {
            let line = codes(line);
            let glyphs: usize = line.iter().map(|&c| table.lookup(c).width()).sum();
            let spacing = 2 * (line.len() - 1);
            assert_eq!(renderer().measure(&line).width, glyphs + spacing);
            assert_eq!(
                renderer().monospace(true).measure(&line).width,
                line.len() * table.max_width() + spacing
            );
        }
    }

    #[test]
    fn rows_match_measure() {
        let lines = ["Hi", "you", "Jumpy {q}", "~", "é?", ""];
        let single = EnumSet::<Mode>::all().iter().map(EnumSet::only);
        for modes in single.chain([EnumSet::empty(), EnumSet::all()]) {
            let renderer = renderer().modes(modes);
            for line in lines {
                let line = codes(line);
                let metrics = renderer.measure(&line);
                let rows: Vec<String> = renderer.rows(&line).collect();
                assert_eq!(rows.len(), metrics.height);
                let side = if modes.contains(Mode::Frame) && !line.is_empty() {
                    4
                } else {
                    0
                };
                for row in rows {
                    assert_eq!(row.chars().count(), metrics.width + side, "{row:?}");
                }
            }
        }
    }

    #[test]
    fn monospace_centering() {
        let table = GlyphTable::standard();
        let renderer = renderer().monospace(true);
        // 'I' is a single column; the 7 leftover columns split 3 left, 4 right.
        let rows: Vec<String> = renderer.rows(&codes("II")).collect();
        assert_eq!(table.max_width(), 8);
        assert_eq!(rows[0], "   #         #    ");
    }

    #[test]
    fn hello() {
        let rendered = renderer().render("Hi");
        let expected = concat!(
            r"#      #  #  ", "\n",
            r"#      #     ", "\n",
            r"#      #  #  ", "\n",
            r"########  #  ", "\n",
            r"#      #  #  ", "\n",
            r"#      #  #  ", "\n",
            r"#      #   ##", "\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn separated_blocks() {
        let rendered = renderer().render("Hi\nHi");
        let expected = concat!(
            r"#      #  #  ", "\n",
            r"#      #     ", "\n",
            r"#      #  #  ", "\n",
            r"########  #  ", "\n",
            r"#      #  #  ", "\n",
            r"#      #  #  ", "\n",
            r"#      #   ##", "\n",
            "\n",
            r"#      #  #  ", "\n",
            r"#      #     ", "\n",
            r"#      #  #  ", "\n",
            r"########  #  ", "\n",
            r"#      #  #  ", "\n",
            r"#      #  #  ", "\n",
            r"#      #   ##", "\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn monospace() {
        let rendered = renderer().monospace(true).render("Hi");
        let expected = concat!(
            r"#      #    #     ", "\n",
            r"#      #          ", "\n",
            r"#      #    #     ", "\n",
            r"########    #     ", "\n",
            r"#      #    #     ", "\n",
            r"#      #    #     ", "\n",
            r"#      #     ##   ", "\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn unknown_glyph() {
        let rendered = renderer().render("a\u{1}");
        let expected = concat!(
            r"           ????? ", "\n",
            r"          ?     ?", "\n",
            r" #####          ?", "\n",
            r"      #       ?? ", "\n",
            r" ######      ?   ", "\n",
            r"#     #          ", "\n",
            r" ##### #     ?   ", "\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn framed_equal_widths() {
        let rendered = renderer().frame(true).render("Hi\nHi");
        let expected = concat!(
            r",===============.", "\n",
            r"| #      #  #   |", "\n",
            r"| #      #      |", "\n",
            r"| #      #  #   |", "\n",
            r"| ########  #   |", "\n",
            r"| #      #  #   |", "\n",
            r"| #      #  #   |", "\n",
            r"| #      #   ## |", "\n",
            r">===============<", "\n",
            r"| #      #  #   |", "\n",
            r"| #      #      |", "\n",
            r"| #      #  #   |", "\n",
            r"| ########  #   |", "\n",
            r"| #      #  #   |", "\n",
            r"| #      #  #   |", "\n",
            r"| #      #   ## |", "\n",
            r"`==============='", "\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn framed_steps() {
        let rendered = renderer().frame(true).render("Hi\nyou\n\nok");
        let expected = concat!(
            r",===============.", "\n",
            r"| #      #  #   |", "\n",
            r"| #      #      |", "\n",
            r"| #      #  #   |", "\n",
            r"| ########  #   |", "\n",
            r"| #      #  #   |", "\n",
            r"| #      #  #   |", "\n",
            r"| #      #   ## |", "\n",
            r">===============^===========.", "\n",
            r"|                           |", "\n",
            r"|                           |", "\n",
            r"| #     #   #####   #    #  |", "\n",
            r"| #     #  #     #  #    #  |", "\n",
            r"| #     #  #     #  #    #  |", "\n",
            r"| #     #  #     #  #    #  |", "\n",
            r"|  ######   #####    #### # |", "\n",
            r"|       #                   |", "\n",
            r"|  #####                    |", "\n",
            r"`==========================='", "\n",
            "\n",
            "\n",
            "\n",
            "\n",
            "\n",
            "\n",
            "\n",
            r",=================.", "\n",
            r"|          #      |", "\n",
            r"|          #   #  |", "\n",
            r"|  #####   #  #   |", "\n",
            r"| #     #  #####  |", "\n",
            r"| #     #  #    # |", "\n",
            r"| #     #  #    # |", "\n",
            r"|  #####   #    # |", "\n",
            r"`================='", "\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn framed_shrink() {
        let rendered = renderer().frame(true).render("you\nHi");
        let expected = concat!(
            r",===========================.", "\n",
            r"|                           |", "\n",
            r"|                           |", "\n",
            r"| #     #   #####   #    #  |", "\n",
            r"| #     #  #     #  #    #  |", "\n",
            r"| #     #  #     #  #    #  |", "\n",
            r"| #     #  #     #  #    #  |", "\n",
            r"|  ######   #####    #### # |", "\n",
            r"|       #                   |", "\n",
            r"|  #####                    |", "\n",
            r">===============v==========='", "\n",
            r"| #      #  #   |", "\n",
            r"| #      #      |", "\n",
            r"| #      #  #   |", "\n",
            r"| ########  #   |", "\n",
            r"| #      #  #   |", "\n",
            r"| #      #  #   |", "\n",
            r"| #      #   ## |", "\n",
            r"`==============='", "\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn framed_empty_lines_use_separators() {
        let rendered = renderer().frame(true).render("\n\nx");
        let lines: Vec<&str> = rendered.lines().collect();
        // two blank blocks of 7 rows and one separator before the frame opens
        assert!(lines[..15].iter().all(|line| line.is_empty()));
        assert_eq!(lines[15], ",=========.");
        assert_eq!(lines.len(), 15 + 1 + 7 + 1);
    }

    #[test]
    fn framed_ending_on_empty_line() {
        let rendered = renderer().frame(true).render("Hi\n\n");
        let lines: Vec<&str> = rendered.lines().collect();
        let closing = r"`==============='";
        assert_eq!(lines.iter().filter(|&&line| line == closing).count(), 1);
        assert_eq!(lines[8], closing);
        // the empty line's blank rows end the output, with no second closing border
        assert_eq!(lines.len(), 1 + 7 + 1 + 7);
        assert!(lines[9..].iter().all(|line| line.is_empty()));
    }

    #[test]
    fn byte_decoding() {
        let mut out = Vec::new();
        renderer()
            .render_reader(
                &mut RenderState::new(),
                "é".as_bytes(),
                Decoding::Bytes,
                &mut out,
            )
            .unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert_eq!(rendered.lines().next(), Some(" ?????    ????? "));
    }

    #[test]
    fn state_across_sources() {
        let renderer = renderer().frame(true);
        let mut state = RenderState::new();
        let mut out = Vec::new();
        for source in ["ok\n", "ok\r\n"] {
            renderer
                .render_reader(&mut state, source.as_bytes(), Decoding::Utf8, &mut out)
                .unwrap();
            assert_eq!(state.previous_width(), 0);
        }
        let single = renderer.render("ok");
        assert_eq!(String::from_utf8(out).unwrap(), single.repeat(2));

        let renderer = renderer.frame(false);
        let mut state = RenderState::new();
        let mut out = Vec::new();
        for source in ["x", "x"] {
            renderer
                .render_reader(&mut state, source.as_bytes(), Decoding::Utf8, &mut out)
                .unwrap();
        }
        assert_eq!(state.blocks(), 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            renderer.render("x\nx")
        );
    }

    #[test]
    fn overlong_line() {
        let line = "i".repeat(super::MAX_LINE_CHARS + 10);
        let renderer = renderer();
        let rendered = renderer.render(&line);
        let width = renderer.measure(&codes(&line[..super::MAX_LINE_CHARS])).width;
        assert_eq!(rendered.lines().next().map(|row| row.len()), Some(width));
    }
}
