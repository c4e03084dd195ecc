use std::cell::RefCell;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::{env, process};

use litesearch::kernel::services::adapters::{load_settings, load_settings_from};
use litesearch::kernel::services::ports::SearchConfig;
use litesearch::kernel::{FoldRegion, SearchController};
use litesearch::models::TextBuffer;

mod logging;

const USAGE: &str =
    "usage: litesearch <file> <term> [--ignore-case] [--margin N] [--settings PATH] [--verbose]";

struct Args {
    file: PathBuf,
    term: String,
    ignore_case: bool,
    margin: Option<i64>,
    settings: Option<PathBuf>,
    verbose: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut positional = Vec::new();
    let mut ignore_case = false;
    let mut margin = None;
    let mut settings = None;
    let mut verbose = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ignore-case" | "-i" => ignore_case = true,
            "--verbose" | "-v" => verbose = true,
            "--margin" | "-m" => {
                let value = args.next().ok_or("--margin needs a value")?;
                let value = value
                    .parse::<i64>()
                    .map_err(|_| format!("invalid margin: {value}"))?;
                margin = Some(value);
            }
            "--settings" => {
                let value = args.next().ok_or("--settings needs a path")?;
                settings = Some(PathBuf::from(value));
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let (Some(file), Some(term), None) = (positional.next(), positional.next(), positional.next())
    else {
        return Err(USAGE.to_string());
    };

    Ok(Args {
        file: PathBuf::from(file),
        term,
        ignore_case,
        margin,
        settings,
        verbose,
    })
}

fn resolve_config(args: &Args) -> io::Result<SearchConfig> {
    let settings = match &args.settings {
        Some(path) => Some(
            load_settings_from(path).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
        ),
        None => load_settings(),
    };

    let mut config = settings
        .as_ref()
        .map(SearchConfig::from)
        .unwrap_or_default();
    if args.ignore_case {
        config.case_sensitive = false;
    }
    if let Some(margin) = args.margin {
        config.set_margin_lines(margin);
    }
    Ok(config)
}

fn print_region(out: &mut impl Write, region: &FoldRegion) -> io::Result<()> {
    writeln!(
        out,
        "  lines {}..={} {} ({} {})",
        region.start_line + 1,
        region.end_line + 1,
        FoldRegion::COLLAPSED_TEXT,
        region.line_count(),
        FoldRegion::HOVER_TEXT
    )
}

fn main() -> io::Result<()> {
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    let logging_guard = logging::init(args.verbose);
    if args.verbose {
        if let Some(dir) = logging_guard.as_ref().and_then(|guard| guard.log_dir()) {
            eprintln!("logging to {}", dir.display());
        }
    }

    let config = resolve_config(&args)?;
    let text = std::fs::read_to_string(&args.file)?;
    let buffer = Rc::new(RefCell::new(TextBuffer::from_text(&text)));

    let mut controller = SearchController::builder()
        .provider(buffer.clone())
        .config(config)
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let refresh = controller.set_term(&args.term);
    tracing::info!(
        file = %args.file.display(),
        matches = controller.matches().len(),
        regions = controller.regions().len(),
        invalidated = ?refresh.highlight.map(|n| n.invalidated),
        "search finished"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "{}: {} matches for {:?} (case {}, margin {})",
        args.file.display(),
        controller.matches().len(),
        args.term,
        if config.case_sensitive { "sensitive" } else { "insensitive" },
        config.margin_lines()
    )?;

    let snapshot = buffer.borrow().snapshot();
    for m in controller.matches() {
        writeln!(
            out,
            "  {}:{}  {}",
            m.line + 1,
            m.col + 1,
            snapshot.line_text(m.line)
        )?;
    }

    if controller.are_tags_active() {
        writeln!(out, "fold regions:")?;
        for region in controller.regions() {
            print_region(&mut out, region)?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/cli.rs"]
mod tests;
