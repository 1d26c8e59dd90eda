//! Command-line argument definition and processing.

use clap::Parser;

/// nook - a cozy terminal home screen and application launcher
#[derive(Parser, Debug)]
#[command(name = "nook")]
#[command(version)]
#[command(about = "A cozy terminal home screen: launch apps, watch the clock", long_about = None)]
pub struct Args {
    /// Print the application listing to stdout and exit
    #[arg(short, long)]
    pub list: bool,

    /// With --list, print machine-readable JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Determine the effective log level from parsed arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `"debug"` when `--verbose` is set, otherwise the `--log-level` value.
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Handle non-TUI modes.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `true` when a command-line mode ran and the TUI must not start.
///
/// Details:
/// - `--list` enumerates the registry synchronously and prints one
///   `name \t id` line per entry, or a JSON array with `--json`.
///   Enumeration failure prints to stderr and exits nonzero.
pub fn process_args(args: &Args) -> bool {
    if !(args.list || args.json) {
        return false;
    }
    match crate::registry::scan_applications() {
        Ok(entries) => {
            if args.json {
                match serde_json::to_string_pretty(&entries) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("nook: failed to encode listing: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                for e in &entries {
                    println!("{}\t{}", e.name, e.id);
                }
            }
        }
        Err(e) => {
            eprintln!("nook: {e}");
            std::process::exit(1);
        }
    }
    true
}
