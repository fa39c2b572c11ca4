//! Prints lines of text, from files or standard input, as large block-letter banners.

use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use placard::glyph::GlyphTable;
use placard::render::{self, BorderStyle, Decoding, RenderState, Renderer};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    let mut out = BufWriter::new(io::stdout().lock());
    run(&cli, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Renders every input in order, stopping at the first file that cannot be opened or read.
fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let renderer = cli.renderer();
    let decoding = cli.decoding();
    let mut state = RenderState::new();
    if cli.files.is_empty() {
        renderer.render_reader(&mut state, io::stdin().lock(), decoding, out)?;
        return Ok(());
    }
    for path in &cli.files {
        let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        debug!(path = %path.display(), "rendering file");
        renderer
            .render_reader(&mut state, BufReader::new(file), decoding, out)
            .with_context(|| format!("cannot render {}", path.display()))?;
    }
    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`), so that stdout only carries the
/// banner.
fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Print text as large block letters, one block per input line
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Files to print, in order; standard input is used if none are given
    files: Vec<PathBuf>,
    /// Frame the blocks instead of separating them with blank lines
    #[arg(short = 'f', long)]
    frame: bool,
    /// Give every character a field of the same width
    #[arg(short = 'm', long)]
    monospace: bool,
    /// Characters used to draw frames
    #[arg(short = 'b', long, default_value_t)]
    borders: Borders,
    /// Treat every input byte as a character instead of decoding UTF-8
    #[arg(long)]
    bytes: bool,
    /// Minimum number of rows per block
    #[arg(long, default_value_t = render::MIN_HEIGHT)]
    min_height: usize,
}

impl Cli {
    fn renderer(&self) -> Renderer<'static> {
        Renderer::new(GlyphTable::standard())
            .frame(self.frame)
            .monospace(self.monospace)
            .border_style(self.borders.into())
            .min_height(self.min_height)
    }

    const fn decoding(&self) -> Decoding {
        if self.bytes {
            Decoding::Bytes
        } else {
            Decoding::Utf8
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
#[value(rename_all = "kebab-case")]
enum Borders {
    #[default]
    Ascii,
    BoxDrawing,
}

impl From<Borders> for BorderStyle {
    fn from(value: Borders) -> Self {
        match value {
            Borders::Ascii => Self::Ascii,
            Borders::BoxDrawing => Self::BoxDrawing,
        }
    }
}

impl Display for Borders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascii => write!(f, "ascii"),
            Self::BoxDrawing => write!(f, "box-drawing"),
        }
    }
}
