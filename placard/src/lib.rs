//! A crate for rendering lines of text as large block-letter banners.
//!
//! # Features
//!
//! - One block of rows per input line, with the glyphs of the line side by side
//!   ([`Renderer::rows`](crate::render::Renderer::rows))
//! - Natural-width or monospace glyph fields ([`Mode`](crate::render::Mode))
//! - Frames whose borders step between blocks of different widths, in ASCII or box-drawing
//!   characters ([`BorderStyle`](crate::render::BorderStyle))
//! - A placeholder glyph for every character without a glyph of its own
//!   ([`GlyphTable::lookup`](crate::glyph::GlyphTable::lookup))
//!
//! # Example
//!
//! ```
//! # use placard::glyph::GlyphTable;
//! # use placard::render::Renderer;
//! let rendered = Renderer::new(GlyphTable::standard()).frame(true).render("Hi");
//! let expected = concat!(
//! r",===============.", "\n",
//! r"| #      #  #   |", "\n",
//! r"| #      #      |", "\n",
//! r"| #      #  #   |", "\n",
//! r"| ########  #   |", "\n",
//! r"| #      #  #   |", "\n",
//! r"| #      #  #   |", "\n",
//! r"| #      #   ## |", "\n",
//! r"`==============='", "\n",
//! );
//! assert_eq!(rendered, expected);
//! ```

pub mod glyph;
pub mod render;
mod str_ext;
