use clap::value_parser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, info, Level};

use birkenbihl::config;
use birkenbihl::formatting::Identity;
use birkenbihl::language::{ColorMode, Document, RuleTable};
use birkenbihl::layout::{self, Monospace};
use birkenbihl::meter::{self, MeterThresholds};
use birkenbihl::parsing;
use birkenbihl::rendering::{self, Terminal};
use birkenbihl::visibility::{self, VisibilityOptions};

mod problem;

fn filename_arg() -> Arg {
    Arg::new("filename")
        .required(true)
        .help("The interlinear document to read, or '-' to read from standard input.")
}

fn visibility_args() -> [Arg; 4] {
    [
        Arg::new("config")
            .short('c')
            .long("config")
            .value_name("FILE")
            .help("Tag configuration (JSON) deciding which tags and translations are shown."),
        Arg::new("black-white")
            .long("black-white")
            .action(ArgAction::SetTrue)
            .help("Ignore color markers on every token."),
        Arg::new("colour-only")
            .long("colour-only")
            .value_name("GROUPS")
            .help("Comma separated parts of speech (for example 'adj,verb') whose color markers are kept; all others are dropped."),
        Arg::new("advance")
            .long("advance")
            .value_name("WIDTH")
            .value_parser(value_parser!(f64))
            .default_value("1")
            .help("Width of one character when measuring columns."),
    ]
}

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("birkenbihl")
        .version(VERSION)
        .propagate_version(true)
        .about("Interlinear word-for-word texts with grammar tags and meter markers.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log progress to standard error; repeat for more detail."),
        )
        .subcommand(
            Command::new("check")
                .about("Parse the given document and summarize what was found")
                .args(visibility_args())
                .arg(filename_arg()),
        )
        .subcommand(
            Command::new("meter")
                .about("Report the meter markers of the given document as JSON")
                .arg(
                    Arg::new("per-line")
                        .long("per-line")
                        .value_parser(value_parser!(usize))
                        .default_value("3")
                        .help("Markers a line needs to count toward the document tally."),
                )
                .arg(
                    Arg::new("total")
                        .long("total")
                        .value_parser(value_parser!(usize))
                        .default_value("10")
                        .help("Markers on a single line that mark the whole document as metered."),
                )
                .arg(
                    Arg::new("min-lines")
                        .long("min-lines")
                        .value_parser(value_parser!(usize))
                        .default_value("3")
                        .help("Lines that must reach the per-line count for the document to be metered."),
                )
                .arg(filename_arg()),
        )
        .subcommand(
            Command::new("layout")
                .about("Compute the indentation of every line and print it as JSON")
                .args(visibility_args())
                .arg(filename_arg()),
        )
        .subcommand(
            Command::new("render")
                .about("Print the given document as an interlinear table")
                .args(visibility_args())
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for colour even if output is redirected to a pipe or file."),
                )
                .arg(filename_arg()),
        )
        .get_matches();

    let level = match matches.get_count("verbose") {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = filename(submatches);
            let content = load_content(filename);
            let document = parsing::parse(&content);

            let (blocks, placements) = lay_out(&document, submatches);

            let tokens: usize = document
                .blocks
                .iter()
                .map(|block| block.tokens.len())
                .sum();
            let staggered = placements
                .iter()
                .filter(|placement| placement.is_staggered)
                .count();
            let cleared = visibility::cleared_translations(&document.blocks, &blocks);
            let metered = meter::is_metered(&document.blocks, &MeterThresholds::default());

            println!(
                "{}: {} blocks, {} tokens, {} staggered, {} translations hidden, meter {}",
                filename.display(),
                document
                    .blocks
                    .len(),
                tokens,
                staggered,
                cleared,
                if metered { "present" } else { "absent" }
            );
        }
        Some(("meter", submatches)) => {
            let filename = filename(submatches);
            let content = load_content(filename);
            let document = parsing::parse(&content);

            let thresholds = MeterThresholds {
                per_line: *submatches
                    .get_one::<usize>("per-line")
                    .unwrap_or(&3),
                total: *submatches
                    .get_one::<usize>("total")
                    .unwrap_or(&10),
                min_lines: *submatches
                    .get_one::<usize>("min-lines")
                    .unwrap_or(&3),
            };
            debug!(?thresholds);

            match meter::detect_meter(&document, &thresholds) {
                Some(report) => print_json(&report),
                None => println!("null"),
            }
        }
        Some(("layout", submatches)) => {
            let filename = filename(submatches);
            let content = load_content(filename);
            let document = parsing::parse(&content);

            let (_, placements) = lay_out(&document, submatches);
            print_json(&placements);
        }
        Some(("render", submatches)) => {
            let filename = filename(submatches);
            let content = load_content(filename);
            let document = parsing::parse(&content);

            let (blocks, placements) = lay_out(&document, submatches);
            let measure = measure(submatches);

            let raw_output = submatches.get_flag("raw-control-chars");
            let result = if raw_output
                || std::io::stdout().is_terminal()
            {
                rendering::render(&Terminal, &blocks, &placements, &measure)
            } else {
                rendering::render(&Identity, &blocks, &placements, &measure)
            };

            print!("{}", result);
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: birkenbihl [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn filename(submatches: &ArgMatches) -> &Path {
    match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => {
            eprintln!("{}: no document given", "error".bright_red());
            std::process::exit(1);
        }
    }
}

fn load_content(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}

fn load_rules(submatches: &ArgMatches) -> RuleTable {
    let filename = match submatches.get_one::<String>("config") {
        Some(filename) => Path::new(filename),
        None => {
            return config::load_rules(None).unwrap_or_default();
        }
    };

    let content = load_content(filename);

    match config::load_rules(Some(&content)) {
        Ok(rules) => rules,
        Err(error) => {
            if std::io::stderr().is_terminal() {
                eprintln!("{}", problem::full_config_error(&error, filename, &content));
            } else {
                eprintln!("{}", problem::concise_config_error(&error, filename));
            }
            std::process::exit(1);
        }
    }
}

fn visibility_options(submatches: &ArgMatches) -> VisibilityOptions {
    let color_mode = if submatches.get_flag("black-white") {
        ColorMode::BlackWhite
    } else {
        ColorMode::Color
    };

    let permitted_groups = submatches
        .get_one::<String>("colour-only")
        .map(|groups| {
            groups
                .split(',')
                .map(str::trim)
                .filter(|group| !group.is_empty())
                .map(str::to_string)
                .collect()
        });

    VisibilityOptions {
        color_mode,
        permitted_groups,
    }
}

fn measure(submatches: &ArgMatches) -> Monospace {
    Monospace {
        advance: *submatches
            .get_one::<f64>("advance")
            .unwrap_or(&1.0),
    }
}

fn lay_out(
    document: &Document,
    submatches: &ArgMatches,
) -> (Vec<visibility::VisibleBlock>, Vec<layout::Placement>) {
    let rules = load_rules(submatches);
    let options = visibility_options(submatches);
    let measure = measure(submatches);

    let blocks = visibility::apply_visibility(&document.blocks, &rules, &options);
    let records = layout::line_records(&blocks, &measure);
    let placements = layout::lay_out(&records);

    info!(
        "Laid out {} line{}",
        placements.len(),
        if placements.len() == 1 { "" } else { "s" }
    );

    (blocks, placements)
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    }
}
