use clap::{ArgAction, Parser};
use std::ffi::OsString;

use crate::types::{DEFAULT_ART_TYPE, OutputFormat};

#[derive(Parser, Debug, serde::Serialize)]
#[command(
    name = "romthumb",
    version,
    about = "Print libretro thumbnail URLs for ROM file names read from stdin",
    long_about = include_str!("help_examples.md"),
    args_override_self = true
)]
pub struct Cli {
    /// Console code (e.g. FC, SFC, MD) or a full libretro system name
    #[arg(long = "console", value_name = "CODE", allow_hyphen_values = true)]
    pub console: Option<String>,

    /// Art type (Named_Boxarts, Named_Titles, Named_Snaps)
    #[arg(
        long = "type",
        value_name = "TYPE",
        default_value = DEFAULT_ART_TYPE,
        allow_hyphen_values = true
    )]
    pub art_type: String,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        value_name = "FORMAT",
        default_value_t = OutputFormat::Tsv
    )]
    pub format: OutputFormat,

    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

// Long flags that may be written with a single dash, and whether they take a value.
const LONG_FLAGS: &[(&str, bool)] = &[
    ("console", true),
    ("type", true),
    ("format", true),
    ("verbose", false),
    ("help", false),
    ("version", false),
];

fn long_flag(name: &str) -> Option<bool> {
    LONG_FLAGS
        .iter()
        .find(|(flag, _)| *flag == name)
        .map(|(_, takes_value)| *takes_value)
}

/// Rewrite `-console FC` / `-type=Named_Snaps` style arguments into the
/// double-dash form clap expects. The first element (program name) is kept
/// as-is, as is everything after a bare `--` and every flag value.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut iter = args.into_iter().map(Into::into);
    if let Some(program) = iter.next() {
        out.push(program);
    }

    let mut expect_value = false;
    let mut passthrough = false;
    for arg in iter {
        if passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let stripped = text
            .strip_prefix("--")
            .or_else(|| text.strip_prefix('-'));
        let Some(body) = stripped else {
            out.push(arg);
            continue;
        };

        let (name, has_inline_value) = match body.split_once('=') {
            Some((name, _)) => (name, true),
            None => (body, false),
        };

        match long_flag(name) {
            Some(takes_value) => {
                expect_value = takes_value && !has_inline_value;
                out.push(OsString::from(format!("--{}", body)));
            }
            None => out.push(arg),
        }
    }

    out
}

impl Cli {
    /// Parse process arguments, accepting single-dash long flags.
    pub fn parse_normalized() -> Self {
        Cli::parse_from(normalize_args(std::env::args_os()))
    }
}
