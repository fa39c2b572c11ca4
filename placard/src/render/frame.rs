//! Frame borders
//!
//! When framing is enabled, every block of rendered rows is preceded by a horizontal border. Its
//! shape depends on the widths of the previous and the current block, see [`Transition`].

use std::cmp::Ordering;

const ASCII_FILL: &str = "=========================================================";
const BOX_DRAWING_FILL: &str = "═════════════════════════════════════════════════════════";

/// The characters used to draw frames
///
/// Both styles produce borders of the same width in columns: a border between blocks of widths
/// `previous` and `current` is `previous.max(current) + 4` columns wide, matching the rows it
/// encloses (see [`BorderStyle::vertical`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    /// Plain ASCII: `,=====.`, `>=====<`, `` `=====' `` and `|` for the sides. This is the
    /// default.
    #[default]
    Ascii,
    /// Double-line box-drawing characters: `╔═══╗`, `╠═══╣`, `╚═══╝` and `║` for the sides.
    BoxDrawing,
}

impl BorderStyle {
    /// The strings placed before and after each framed row.
    #[must_use]
    pub const fn vertical(self) -> (&'static str, &'static str) {
        match self {
            Self::Ascii => ("| ", " |"),
            Self::BoxDrawing => ("║ ", " ║"),
        }
    }

    /// Draws the border for a transition, or returns `None` if there is nothing to draw.
    ///
    /// ```
    /// # use placard::render::{BorderStyle, Transition};
    /// let border = BorderStyle::Ascii.draw(Transition::between(8, 3));
    /// assert_eq!(border.as_deref(), Some(">=====v===='"));
    /// ```
    #[must_use]
    pub fn draw(self, transition: Transition) -> Option<String> {
        let segments = transition.segments();
        if segments.is_empty() {
            return None;
        }
        let mut line = String::new();
        for segment in segments {
            self.horizontal(&mut line, segment);
        }
        Some(line)
    }

    fn horizontal(self, line: &mut String, segment: Segment) {
        let fill = self.fill();
        let unit = fill.chars().count();
        let mut len = segment.len;
        line.push_str(self.piece(segment.left));
        while len > unit {
            line.push_str(fill);
            len -= unit;
        }
        line.extend(fill.chars().take(len));
        line.push_str(self.piece(segment.right));
    }

    const fn fill(self) -> &'static str {
        match self {
            Self::Ascii => ASCII_FILL,
            Self::BoxDrawing => BOX_DRAWING_FILL,
        }
    }

    const fn piece(self, piece: Piece) -> &'static str {
        match (self, piece) {
            (_, Piece::Bare) => "",
            (Self::Ascii, Piece::OpenLeft) => ",=",
            (Self::Ascii, Piece::OpenRight) => "=.",
            (Self::Ascii, Piece::CloseLeft) => "`=",
            (Self::Ascii, Piece::CloseRight) => "='",
            (Self::Ascii, Piece::TeeLeft) => ">=",
            (Self::Ascii, Piece::TeeRight) => "=<",
            (Self::Ascii, Piece::Shrink) => "v",
            (Self::Ascii, Piece::Grow) => "^",
            (Self::Ascii, Piece::ShrinkEnd) => "'",
            (Self::Ascii, Piece::GrowEnd) => ".",
            (Self::BoxDrawing, Piece::OpenLeft) => "╔═",
            (Self::BoxDrawing, Piece::OpenRight) => "═╗",
            (Self::BoxDrawing, Piece::CloseLeft) => "╚═",
            (Self::BoxDrawing, Piece::CloseRight) => "═╝",
            (Self::BoxDrawing, Piece::TeeLeft) => "╠═",
            (Self::BoxDrawing, Piece::TeeRight) => "═╣",
            (Self::BoxDrawing, Piece::Shrink) => "╦",
            (Self::BoxDrawing, Piece::Grow) => "╩",
            (Self::BoxDrawing, Piece::ShrinkEnd) => "╝",
            (Self::BoxDrawing, Piece::GrowEnd) => "╗",
        }
    }
}

/// The change in block width that a border has to accommodate
///
/// A width of 0 means there is no block (before the first line, or for an empty line).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Neither block has any width; no border is drawn.
    None,
    /// A frame starts above a block of the given width.
    Open(usize),
    /// A frame ends below a block of the given width.
    Close(usize),
    /// Two blocks of the same width meet.
    Straight(usize),
    /// Two blocks of different widths meet. The border steps from one width to the other, with a
    /// marker where the narrower block's side meets it.
    Step {
        /// Width of the block above
        previous: usize,
        /// Width of the block below
        current: usize,
    },
}

impl Transition {
    /// Classifies the border between a block of width `previous` and one of width `current`.
    #[must_use]
    pub const fn between(previous: usize, current: usize) -> Self {
        match (previous, current) {
            (0, 0) => Self::None,
            (0, current) => Self::Open(current),
            (previous, 0) => Self::Close(previous),
            (previous, current) if previous == current => Self::Straight(previous),
            (previous, current) => Self::Step { previous, current },
        }
    }

    /// The horizontal segments making up this border, left to right.
    #[must_use]
    pub fn segments(self) -> Vec<Segment> {
        match self {
            Self::None => Vec::new(),
            Self::Open(len) => vec![Segment::new(len, Piece::OpenLeft, Piece::OpenRight)],
            Self::Close(len) => vec![Segment::new(len, Piece::CloseLeft, Piece::CloseRight)],
            Self::Straight(len) => vec![Segment::new(len, Piece::TeeLeft, Piece::TeeRight)],
            Self::Step { previous, current } => {
                let (min, max, marker, end) = match previous.cmp(&current) {
                    Ordering::Greater => (current, previous, Piece::Shrink, Piece::ShrinkEnd),
                    Ordering::Less => (previous, current, Piece::Grow, Piece::GrowEnd),
                    Ordering::Equal => return Self::Straight(previous).segments(),
                };
                vec![
                    Segment::new(min + 1, Piece::TeeLeft, marker),
                    Segment::new(max - min - 1, Piece::Bare, end),
                ]
            }
        }
    }
}

/// A run of horizontal fill between two end pieces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Number of fill columns, not counting the end pieces
    pub len: usize,
    /// The piece drawn before the fill
    pub left: Piece,
    /// The piece drawn after the fill
    pub right: Piece,
}

impl Segment {
    const fn new(len: usize, left: Piece, right: Piece) -> Self {
        Self { len, left, right }
    }
}

/// The end pieces of a border [`Segment`]
///
/// The pieces at the outer ends of a border include one column of fill, so that the border lines
/// up with the blank column inside the frame's sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Piece {
    /// Nothing
    Bare,
    /// Top left corner
    OpenLeft,
    /// Top right corner
    OpenRight,
    /// Bottom left corner
    CloseLeft,
    /// Bottom right corner
    CloseRight,
    /// Left side junction between two blocks
    TeeLeft,
    /// Right side junction between two blocks of the same width
    TeeRight,
    /// Where the narrower block below meets the border
    Shrink,
    /// Where the narrower block above meets the border
    Grow,
    /// Bottom right corner of the wider block above
    ShrinkEnd,
    /// Top right corner of the wider block below
    GrowEnd,
}
