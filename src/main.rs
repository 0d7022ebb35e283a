use cardtext::style::parsers::parse_font_shorthand;
use cardtext::tagged::{fix_old_tags, simplify_tagged, tagged_substr_replace, untag, verify_tagged};
use cardtext::{
    CardTextError, Context, InMemorySymbolFontProvider, TextStyle, build_runs, load_style,
    runs::summarize_fixed,
};
use clap::{Parser, Subcommand};
use log::info;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Inspect and edit tagged card text.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the text with all markup removed
    Untag { file: PathBuf },
    /// Repair malformed markup
    Verify { file: PathBuf },
    /// Merge and collapse redundant tags
    Simplify { file: PathBuf },
    /// Rewrite generic `</>` closers into named ones
    FixOldTags { file: PathBuf },
    /// Replace the untagged characters `start..end`
    Replace {
        file: PathBuf,
        #[arg(long)]
        start: usize,
        #[arg(long)]
        end: usize,
        #[arg(long = "with", default_value = "")]
        replacement: String,
    },
    /// Print the styled runs as JSON
    Runs {
        file: PathBuf,
        /// Style file; defaults to 12pt Helvetica
        #[arg(long)]
        style: Option<PathBuf>,
        /// Font shorthand overriding the style's font, e.g. "bold 9pt MPlantin"
        #[arg(long)]
        font: Option<String>,
        /// Value of the `card` context variable
        #[arg(long)]
        card: Option<String>,
    },
}

fn read_text(path: &Path) -> Result<String, CardTextError> {
    let text = fs::read_to_string(path)?;
    Ok(text.strip_suffix('\n').unwrap_or(&text).to_string())
}

fn run(command: Command) -> Result<String, CardTextError> {
    let output = match command {
        Command::Untag { file } => untag(&read_text(&file)?),
        Command::Verify { file } => verify_tagged(&read_text(&file)?),
        Command::Simplify { file } => simplify_tagged(&read_text(&file)?),
        Command::FixOldTags { file } => fix_old_tags(&read_text(&file)?),
        Command::Replace {
            file,
            start,
            end,
            replacement,
        } => tagged_substr_replace(&read_text(&file)?, start, end, &replacement),
        Command::Runs {
            file,
            style,
            font,
            card,
        } => {
            let text = read_text(&file)?;
            let mut style = match style {
                Some(path) => load_style(&path)?,
                None => TextStyle::default(),
            };
            if let Some(font) = font {
                style.font = parse_font_shorthand(&font)?;
            }
            let ctx = match card {
                Some(card) => Context::new().with_var("card", card),
                None => Context::new(),
            };
            // No symbol fonts are bundled: symbol markup falls back to the text font.
            let provider = InMemorySymbolFontProvider::new();
            let elements = build_runs(&text, &style, &provider, &ctx)?;
            info!("Built {} runs from {} bytes.", elements.len(), text.len());
            serde_json::to_string_pretty(&summarize_fixed(&elements))?
        }
    };
    Ok(output)
}

fn main() -> Result<(), CardTextError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "cardtext=info");
        }
    }
    env_logger::init();

    let cli = Cli::parse();
    println!("{}", run(cli.command)?);
    Ok(())
}
