//! outliner: print a document's outline, honouring and persisting its expansion state.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use outliner::app_state::{OutlineState, VisibleRow};
use outliner::formats::markdown::MarkdownFormat;
use outliner::navigator::MarkdownNavigator;
use outliner::store::JsonStore;
use outliner::{config, diff, input, modify_keys};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "outliner")]
#[command(about = "Live document outlines that keep their expansion state", long_about = None)]
struct Args {
    /// Files or directories to outline
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Expand every parent heading down to this level
    #[arg(long, short = 'l')]
    level: Option<u8>,

    /// Print headings through an export template (defaults to the configured one)
    #[arg(long, value_name = "FORMAT")]
    export: Option<Option<String>>,

    /// Only list headings matching this pattern
    #[arg(long, value_name = "PATTERN")]
    filter: Option<String>,

    /// Treat the filter pattern as a regular expression
    #[arg(long)]
    regex: bool,

    /// Locate the heading containing this byte offset and open the path to it
    #[arg(long, value_name = "OFFSET")]
    locate: Option<usize>,

    /// Print the key modifications from an older version of the document
    #[arg(long, value_name = "OLD_PATH")]
    against: Option<PathBuf>,

    /// State file for persisted expansion
    #[arg(long)]
    state: Option<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,
}

fn main() -> outliner::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions.clone_from(&args.ext);
    }
    if args.regex {
        cfg.regex_search = true;
    }
    if let Some(state) = &args.state {
        cfg.state_file = state.to_string_lossy().to_string();
    }

    let documents = input::find_documents(args.paths.clone(), &cfg.file_extensions)?;

    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    if let Some(old) = &args.against {
        return print_modifications(old, &documents[0]);
    }

    let store = JsonStore::open(&cfg.state_file);
    let mut state = OutlineState::new(
        Box::new(MarkdownNavigator::open(&documents[0], cfg.default_level)),
        Box::new(store),
        cfg.clone(),
    )?;

    for (i, doc) in documents.iter().enumerate() {
        if i > 0 {
            state.open(Box::new(MarkdownNavigator::open(doc, cfg.default_level)))?;
        }
        if documents.len() > 1 {
            println!("{}", doc.display());
        }
        run_document(&mut state, &args)?;
    }

    state.flush()
}

fn run_document(state: &mut OutlineState, args: &Args) -> outliner::Result<()> {
    let now = Instant::now();

    if let Some(level) = args.level {
        state.switch_level(level, now)?;
    }
    if let Some(offset) = args.locate {
        match state.locate(offset, now)? {
            Some(index) => eprintln!("Located: {}", state.headings[index].text),
            None => eprintln!("Offset {offset} precedes every heading"),
        }
    }

    if let Some(format) = &args.export {
        for line in state.export(format.as_deref()) {
            println!("{line}");
        }
    } else if let Some(pattern) = &args.filter {
        for index in state.filter(pattern) {
            let heading = &state.headings[index];
            println!("{} {}", "#".repeat(usize::from(heading.level)), heading.text);
        }
    } else {
        for row in state.visible_rows() {
            println!("{}", render_row(state, row));
        }
    }
    Ok(())
}

fn render_row(state: &OutlineState, row: VisibleRow) -> String {
    let marker = match (row.expandable, row.expanded) {
        (true, true) => "▾",
        (true, false) => "▸",
        (false, _) => " ",
    };
    let located = if row.located { " <" } else { "" };
    format!(
        "{}{} {}{}",
        "  ".repeat(row.depth),
        marker,
        state.headings[row.index].text,
        located
    )
}

fn print_modifications(old: &Path, new: &Path) -> outliner::Result<()> {
    let prev = input::extract_file_headings(old, &MarkdownFormat)?;
    let cur = input::extract_file_headings(new, &MarkdownFormat)?;
    let report = serde_json::json!({
        "ops": diff::diff(&prev, &cur),
        "modifyKeys": modify_keys::calc_modifies(&prev, &cur),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
