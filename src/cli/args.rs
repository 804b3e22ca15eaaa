//! CLI argument parsing and configuration.

use std::io;

use crate::models::{resolve_category, DEFAULT_CATEGORY};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
pub struct CliConfig {
    /// Pre-open the Business AI chat dock
    pub chat_open: bool,
    /// Active business category for the chat scripts
    pub category: &'static str,
    /// Seed applicant message sent as soon as the dock opens
    pub initial_message: Option<String>,
    /// Base URL for the trade-license API; None leaves the evaluator offline
    pub api_base: Option<String>,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Portal TUI - Terminal dashboard for the AI Business licensing portal demo");
    eprintln!();
    eprintln!("Usage: portal-tui [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --chat open            Open the Business AI chat dock on launch");
    eprintln!("  --category <id>        Business category for chat guidance");
    eprintln!("                         (restaurants, retail, professional-services)");
    eprintln!("  --message <text>       Seed the chat with an applicant message");
    eprintln!("  --api-base <url>       Trade-license API base URL");
    eprintln!("                         (default: PORTAL_API_BASE_URL env var)");
    eprintln!("  -h, --help             Show this help message");
    eprintln!("  -V, --version          Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  portal-tui                                     # Dashboard only");
    eprintln!("  portal-tui --chat open --category restaurants  # Jump into the chat");
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().collect();
    for arg in &args[1..] {
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("portal-tui {}", VERSION);
            std::process::exit(0);
        }
    }
    parse_from(&args[1..], std::env::var("PORTAL_API_BASE_URL").ok())
}

/// Parse a flag list, with the env-provided API base as fallback
pub fn parse_from(args: &[String], env_api_base: Option<String>) -> io::Result<CliConfig> {
    let mut chat_open = false;
    let mut category = DEFAULT_CATEGORY;
    let mut initial_message: Option<String> = None;
    let mut api_base: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "--chat" {
            i += 1;
            let value = flag_value(args, i, "--chat")?;
            if value != "open" {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid --chat value: {} (expected: open)", value),
                ));
            }
            chat_open = true;
            i += 1;
        } else if arg == "--category" {
            i += 1;
            category = resolve_category(flag_value(args, i, "--category")?);
            i += 1;
        } else if arg == "--message" {
            i += 1;
            initial_message = Some(flag_value(args, i, "--message")?.to_string());
            i += 1;
        } else if arg == "--api-base" {
            i += 1;
            api_base = Some(flag_value(args, i, "--api-base")?.to_string());
            i += 1;
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    let api_base = api_base
        .or(env_api_base)
        .map(|base| base.trim_end_matches('/').to_string())
        .filter(|base| !base.is_empty());

    Ok(CliConfig {
        chat_open,
        category,
        initial_message,
        api_base,
    })
}

fn flag_value<'a>(args: &'a [String], index: usize, flag: &str) -> io::Result<&'a str> {
    args.get(index).map(|s| s.as_str()).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Missing value for {}", flag),
        )
    })
}
