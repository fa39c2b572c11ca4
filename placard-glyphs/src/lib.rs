//! Block-letter glyph bitmaps used by the [`placard`](https://crates.io/crates/placard) crate.
//!
//! Each glyph is a list of rows, top to bottom. Rows are stored exactly as drawn: they are not
//! padded to a common width, and a glyph may have fewer rows than its neighbours.

/// Raw glyph data for a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphData {
    /// The character this glyph draws
    pub code: char,
    /// A lower bound for the glyph width, used for glyphs whose rows do not convey it (such as
    /// the blank space, which has no rows at all)
    pub nominal_width: usize,
    /// The rows of the glyph, top to bottom
    pub rows: &'static [&'static str],
}

macro_rules! glyphs {
    (@width) => { 0 };
    (@width $width:literal) => { $width };
    ($($code:literal => $(($width:literal))? [$($row:expr),* $(,)?],)*) => {
        /// Glyphs for the printable ASCII characters `' '..='~'`, in code order.
        pub const PRINTABLE_ASCII: [GlyphData; const{0 $(+ {_ = $code; 1} )*}] = [
            $(
                GlyphData {
                    code: $code,
                    nominal_width: glyphs!(@width $($width)?),
                    rows: &[$($row),*],
                },
            )*
        ];
    };
}

/// The placeholder drawn for characters without a glyph of their own
pub const UNKNOWN: GlyphData = GlyphData {
    code: '\u{fffe}',
    nominal_width: 0,
    rows: &[
        " ?????",
        "?     ?",
        "      ?",
        "    ??",
        "   ?",
        "",
        "   ?",
    ],
};

glyphs! {
    ' ' => (7) [],
    '!' => [
        "#",
        "#",
        "#",
        "#",
        "#",
        "",
        "#",
    ],
    '"' => [
        "## ##",
        "## ##",
        " #  #",
        "#  #",
    ],
    '#' => [
        "  # #",
        "  # #",
        "#######",
        "  # #",
        "#######",
        "  # #",
        "  # #",
    ],
    '$' => [
        "  # #",
        " ######",
        "# # #",
        " #####",
        "  # # #",
        "######",
        "  # #",
    ],
    '%' => [
        "       #",
        " ##   #",
        " ##  #",
        "    #",
        "   #",
        "  #  ##",
        " #   ##",
        "#",
    ],
    '&' => [
        "  #",
        " # #",
        "  #",
        "  ##",
        " #  # #",
        "#    #",
        " #### #",
    ],
    '\'' => [
        "##",
        "##",
        " #",
        "#",
    ],
    '(' => [
        "  #",
        " #",
        "#",
        "#",
        "#",
        "#",
        " #",
        "  #",
    ],
    ')' => [
        "#",
        " #",
        "  #",
        "  #",
        "  #",
        "  #",
        " #",
        "#",
    ],
    '*' => [
        "",
        "",
        " #   #",
        "  # #",
        "#######",
        "  # #",
        " #   #",
    ],
    '+' => [
        "",
        "",
        "   #",
        "   #",
        "#######",
        "   # ",
        "   #",
    ],
    ',' => [
        "",
        "",
        "",
        "",
        "",
        "##",
        "##",
        " #",
        "#",
    ],
    '-' => [
        "",
        "",
        "",
        "",
        "#######",
    ],
    '.' => [
        "",
        "",
        "",
        "",
        "",
        "##",
        "##",
    ],
    '/' => [
        "       #",
        "      #",
        "     #",
        "    #",
        "   #",
        "  #",
        " #",
        "#",
    ],
    '0' => [
        "  ###",
        " #   #",
        "#   # #",
        "#  #  #",
        "# #   #",
        " #   #",
        "  ###",
    ],
    '1' => [
        "   #   ",
        "  ##",
        " # #",
        "   #",
        "   #",
        "   #",
        " ####",
    ],
    '2' => [
        " ####",
        "##   ##",
        "     ##",
        "    ##",
        "  ##",
        " #",
        "#######",
    ],
    '3' => [
        " #####",
        " #   # ",
        "    #  ",
        "   ##",
        "     ##",
        "##   ##",
        "  ### ",
    ],
    '4' => [
        "    #",
        "   ##",
        "  # #",
        " #  #",
        "#######",
        "    #",
        "   ###",
    ],
    '5' => [
        "######",
        "#",
        "##",
        "  ###",
        "     ##",
        "##   ##",
        "  ###",
    ],
    '6' => [
        "    ##",
        "  ##",
        " #",
        "# ###",
        "##   ##",
        "##   ##",
        "  ###",
    ],
    '7' => [
        "#######",
        "#     #",
        "     #",
        "    #",
        "   #",
        "  ##",
        "  ##",
    ],
    '8' => [
        "  ###",
        "##   ##",
        "##   ##",
        "  ###",
        "##   ##",
        "##   ##",
        "  ###",
    ],
    '9' => [
        "  ###",
        "##   ##",
        "##   ##",
        " #####",
        "    #",
        "  ##",
        " ##",
    ],
    ':' => [
        "",
        "",
        "##",
        "##",
        "",
        "##",
        "##",
    ],
    ';' => [
        "",
        "",
        "##",
        "##",
        "",
        "##",
        "##",
        " #",
        "#",
    ],
    '<' => [
        "    #",
        "   #",
        "  #",
        " #",
        "#",
        " #",
        "  #",
        "   #",
        "    #",
    ],
    '=' => [
        "",
        "",
        "",
        "#######",
        "",
        "#######",
    ],
    '>' => [
        "#",
        " #",
        "  #",
        "   #",
        "    #",
        "   #",
        "  #",
        " #",
        "#",
    ],
    '?' => [
        " #####",
        "#     #",
        "      #",
        "    ##",
        "   #",
        "",
        "   #",
    ],
    '@' => [
        " #####",
        "#     #",
        "#  ####",
        "# #   #",
        "# #####",
        "#",
        " ######",
    ],
    'A' => [
        "   #",
        "  # #",
        " #   #",
        "#     #",
        "#######",
        "#     #",
        "#     #",
    ],
    'B' => [
        "######",
        "#     #",
        "#     #",
        "######",
        "#     #",
        "#     #",
        "######",
    ],
    'C' => [
        " #####",
        "#     #",
        "#",
        "#",
        "#",
        "#     #",
        " #####",
    ],
    'D' => [
        "#####",
        "#    #",
        "#     #",
        "#     #",
        "#     #",
        "#    #",
        "#####",
    ],
    'E' => [
        "#######",
        "#",
        "#",
        "#####",
        "#",
        "#",
        "#######",
    ],
    'F' => [
        "#######",
        "#",
        "#",
        "#####",
        "#",
        "#",
        "#",
    ],
    'G' => [
        " ######",
        "#      #",
        "#",
        "#   ####",
        "#      #",
        "#      #",
        " ######",
    ],
    'H' => [
        "#      #",
        "#      #",
        "#      #",
        "########",
        "#      #",
        "#      #",
        "#      #",
    ],
    'I' => [
        "#",
        "#",
        "#",
        "#",
        "#",
        "#",
        "#",
    ],
    'J' => [
        "      #",
        "      #",
        "      #",
        "      #",
        "      #",
        "#     #",
        " #####",
    ],
    'K' => [
        "#     #",
        "#    #",
        "#   #",
        "####",
        "#   #",
        "#    #",
        "#     #",
    ],
    'L' => [
        "#",
        "#",
        "#",
        "#",
        "#",
        "#",
        "#######",
    ],
    'M' => [
        "#     #",
        "##   ##",
        "# # # #",
        "#  #  #",
        "#     #",
        "#     #",
        "#     #",
    ],
    'N' => [
        "#     #",
        "##    #",
        "# #   #",
        "#  #  #",
        "#   # #",
        "#    ##",
        "#     #",
    ],
    'O' => [
        " #####",
        "#     #",
        "#     #",
        "#     #",
        "#     #",
        "#     #",
        " #####",
    ],
    'P' => [
        "######",
        "#     #",
        "#     #",
        "######",
        "#",
        "#",
        "#",
    ],
    'Q' => [
        " #####",
        "#     #",
        "#     #",
        "#     #",
        "#   # #",
        "#    #",
        " #### #",
    ],
    'R' => [
        "######",
        "#     #",
        "#     #",
        "######",
        "#     #",
        "#     #",
        "#     #",
    ],
    'S' => [
        " #####",
        "#     #",
        "#",
        " #####",
        "      #",
        "#     #",
        " #####",
    ],
    'T' => [
        "#######",
        "   #",
        "   #",
        "   #",
        "   #",
        "   #",
        "   #",
    ],
    'U' => [
        "#     #",
        "#     #",
        "#     #",
        "#     #",
        "#     #",
        "#     #",
        " #####",
    ],
    'V' => [
        "#     #",
        "#     #",
        "#     #",
        "#     #",
        " #   #",
        "  # #",
        "   #",
    ],
    'W' => [
        "#     #",
        "#     #",
        "#     #",
        "#  #  #",
        "# # # #",
        "##   ##",
        "#     #",
    ],
    'X' => [
        "#     #",
        " #   #",
        "  # #",
        "   #",
        "  # #",
        " #   #",
        "#     #",
    ],
    'Y' => [
        "#     #",
        " #   #",
        "  # #",
        "   #",
        "   #",
        "   #",
        "   #",
    ],
    'Z' => [
        "#######",
        "     #",
        "    #",
        "   #",
        "  #",
        " #",
        "#######",
    ],
    '[' => [
        "###",
        "#",
        "#",
        "#",
        "#",
        "#",
        "#",
        "###",
    ],
    '\\' => [
        "#",
        " #",
        "  #",
        "   #",
        "    #",
        "     #",
        "      #",
        "       #",
    ],
    ']' => [
        "###",
        "  #",
        "  #",
        "  #",
        "  #",
        "  #",
        "  #",
        "###",
    ],
    '^' => [
        "",
        "  #",
        " # #",
        "#   #",
    ],
    '_' => [
        "",
        "",
        "",
        "",
        "",
        "",
        "#######",
    ],
    '`' => [
        "##",
        "##",
        "#",
        " #",
    ],
    'a' => [
        "",
        "",
        " #####",
        "      #",
        " ######",
        "#     #",
        " ##### #",
    ],
    'b' => [
        "#",
        "#",
        "######",
        "#     #",
        "#     #",
        "#     #",
        "######",
    ],
    'c' => [
        "",
        "",
        " #####",
        "#     #",
        "#",
        "#",
        " #####",
    ],
    'd' => [
        "      #",
        "      #",
        " ######",
        "#     #",
        "#     #",
        "#     #",
        " #######",
    ],
    'e' => [
        "",
        "",
        " #####",
        "#     #",
        "######",
        "#",
        " ######",
    ],
    'f' => [
        "  ##",
        " #",
        "####",
        " #",
        " #",
        " #",
        " #",
    ],
    'g' => [
        "",
        "",
        " #####",
        "#     #",
        "#     #",
        "#     #",
        " ######",
        "      #",
        " #####",
    ],
    'h' => [
        "#",
        "#",
        "######",
        "#     #",
        "#     #",
        "#     #",
        "#     #",
    ],
    'i' => [
        "#",
        "",
        "#",
        "#",
        "#",
        "#",
        " ##",
    ],
    'j' => [
        "  #",
        "",
        "  #",
        "  #",
        "  #",
        "  #",
        "  #",
        "  #",
        "##",
    ],
    'k' => [
        "#",
        "#   #",
        "#  #",
        "#####",
        "#    #",
        "#    #",
        "#    #",
    ],
    'l' => [
        "#",
        "#",
        "#",
        "#",
        "#",
        "#",
        " ##",
    ],
    'm' => [
        "",
        "",
        "### ##",
        "#  #  #",
        "#  #  #",
        "#  #  #",
        "#  #  #",
    ],
    'n' => [
        "",
        "",
        "# ####",
        "##    #",
        "#     #",
        "#     #",
        "#     #",
    ],
    'o' => [
        "",
        "",
        " #####",
        "#     #",
        "#     #",
        "#     #",
        " #####",
    ],
    'p' => [
        "",
        "",
        "######",
        "#     #",
        "#     #",
        "#     #",
        "######",
        "#",
        "#",
    ],
    'q' => [
        "",
        "",
        " ######",
        "#     #",
        "#     #",
        "#     #",
        " ######",
        "      #",
        "      #",
    ],
    'r' => [
        "",
        "",
        "# #####",
        "##    #",
        "#",
        "#",
        "#",
    ],
    's' => [
        "",
        "",
        " ######",
        "#",
        " #####",
        "      #",
        "######",
    ],
    't' => [
        "  #",
        "  #",
        "######",
        "  #",
        "  #",
        "  #",
        "   ###",
    ],
    'u' => [
        "",
        "",
        "#    #",
        "#    #",
        "#    #",
        "#    #",
        " #### #",
    ],
    'v' => [
        "",
        "",
        "#     #",
        "#     #",
        " #   #",
        "  # #",
        "   #",
    ],
    'w' => [
        "",
        "",
        "#     #",
        "#     #",
        "#  #  #",
        "#  #  #",
        " ## ##",
    ],
    'x' => [
        "",
        "",
        "#     #",
        " #   #",
        "   #",
        " #   #",
        "#     #",
    ],
    'y' => [
        "",
        "",
        "#     #",
        "#     #",
        "#     #",
        "#     #",
        " ######",
        "      #",
        " #####",
    ],
    'z' => [
        "",
        "",
        "########",
        "      #",
        "   ##",
        " #",
        "########",
    ],
    '{' => [
        "  ##",
        " #",
        " #",
        " #",
        "#",
        " #",
        " #",
        " #",
        "  ##",
    ],
    '|' => [
        "#",
        "#",
        "#",
        "#",
        "#",
        "#",
        "#",
        "#",
    ],
    '}' => [
        "##",
        "  #",
        "  #",
        "  #",
        "   #",
        "  #",
        "  #",
        "  #",
        "##",
    ],
    '~' => [
        " ###  #",
        "#   ##",
    ],
}
