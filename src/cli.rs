//! Command-line argument parsing for the `forecast-compare` binary.

use std::env;
use std::path::PathBuf;

use crate::series::parse_series;

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub actual: Vec<f64>,
    pub predicted: Vec<f64>,
    pub horizon: i64,
    pub begin: usize,
    pub end: Option<usize>,
    pub overlap: bool,
    pub title: Option<String>,
    pub title_suffix: String,
    pub style: Option<PathBuf>,
    pub log_level: String,
    pub tui: bool,
}

/// Outcome of parsing: either options to run with, or a request for help.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Box<CliOptions>),
    Help,
}

/// Parses the process arguments.
///
/// # Errors
///
/// Returns a message describing the first invalid or missing argument.
pub fn parse_args() -> Result<Command, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(args)
}

/// Parses an explicit argument list (without the program name).
///
/// # Errors
///
/// Returns a message describing the first invalid or missing argument.
pub fn parse_args_from(args: Vec<String>) -> Result<Command, String> {
    let mut i = 0usize;
    let mut actual = None;
    let mut predicted = None;
    let mut horizon = 0i64;
    let mut begin = 0usize;
    let mut end = None;
    let mut overlap = false;
    let mut title = None;
    let mut title_suffix = String::new();
    let mut style = None;
    let mut log_level = "warn".to_string();
    #[cfg_attr(not(feature = "tui"), allow(unused_mut))]
    let mut tui = false;

    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--actual" => {
                i += 1;
                let text = args.next_or_err(i, "missing value for --actual (expected a number list)")?;
                let values = parse_series(text).map_err(|e| format!("--actual: {e}"))?;
                if actual.replace(values).is_some() {
                    return Err("--actual provided more than once".to_string());
                }
            }
            "--predicted" => {
                i += 1;
                let text =
                    args.next_or_err(i, "missing value for --predicted (expected a number list)")?;
                let values = parse_series(text).map_err(|e| format!("--predicted: {e}"))?;
                if predicted.replace(values).is_some() {
                    return Err("--predicted provided more than once".to_string());
                }
            }
            "--horizon" => {
                i += 1;
                let text = args.next_or_err(i, "missing value for --horizon (expected an integer)")?;
                horizon = text
                    .parse()
                    .map_err(|_| format!("--horizon value \"{text}\" is not a valid integer"))?;
            }
            "--begin" => {
                i += 1;
                let text = args.next_or_err(i, "missing value for --begin (expected an index)")?;
                begin = text
                    .parse()
                    .map_err(|_| format!("--begin value \"{text}\" is not a valid index"))?;
            }
            "--end" => {
                i += 1;
                let text = args.next_or_err(i, "missing value for --end (expected an index)")?;
                end = Some(
                    text.parse()
                        .map_err(|_| format!("--end value \"{text}\" is not a valid index"))?,
                );
            }
            "--overlap" => overlap = true,
            "--title" => {
                i += 1;
                title = Some(args.next_or_err(i, "missing value for --title")?.to_string());
            }
            "--title-suffix" => {
                i += 1;
                title_suffix = args.next_or_err(i, "missing value for --title-suffix")?.to_string();
            }
            "--style" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --style (expected a TOML file path)")?;
                if style.replace(PathBuf::from(path)).is_some() {
                    return Err("--style provided more than once".to_string());
                }
            }
            "--log-level" => {
                i += 1;
                log_level = args
                    .next_or_err(i, "missing value for --log-level (expected a filter)")?
                    .to_string();
            }
            #[cfg(feature = "tui")]
            "--tui" => tui = true,
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    let actual = actual.ok_or_else(|| "missing required --actual".to_string())?;
    let predicted = predicted.ok_or_else(|| "missing required --predicted".to_string())?;

    Ok(Command::Run(Box::new(CliOptions {
        actual,
        predicted,
        horizon,
        begin,
        end,
        overlap,
        title,
        title_suffix,
        style,
        log_level,
        tui,
    })))
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("forecast-compare: compare a series against its horizon-offset forecast");
    eprintln!();
    eprintln!("Usage: forecast-compare --actual <list> --predicted <list> [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --actual <list>          Actual series, comma or space separated");
    eprintln!("  --predicted <list>       Predicted series, same length as actual");
    eprintln!("  --horizon <int>          Forecast horizon in steps (default: 0)");
    eprintln!("  --begin <n>              First index to plot (default: 0)");
    eprintln!("  --end <n>                One past the last index to plot (default: all)");
    eprintln!("  --overlap                Skew predictions back to check naive forecast");
    eprintln!("  --title <text>           Chart title (default depends on mode)");
    eprintln!("  --title-suffix <text>    Text appended to the title");
    eprintln!("  --style <path>           Load colors and labels from a TOML file");
    eprintln!("  --log-level <filter>     Log filter when RUST_LOG is unset (default: warn)");
    #[cfg(feature = "tui")]
    eprintln!("  --tui                    Open the interactive chart viewer");
    eprintln!("  --help                   Show this help message");
}
