//! `period-nav` — run the navigator and record time rules from a shell.
//!
//! Usage:
//!   period-nav step --mode day --value 2024-02-28 --delta 1 --template '/log/{compact}'
//!   period-nav resolve --config nav.json --value 2024-05
//!   period-nav time 145601
//!   period-nav check-time 99:99:99
//!   period-nav range 202402
//!   period-nav timestamp 20240501 14:56:01

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use period_nav::submit_guard::{check_submission, Accepted};
use period_nav::{
    month_range, normalize, record_timestamp, resolve_month_input, InputField, Mode, NavigationHost,
    NavigatorConfig, PartialUpdate, PeriodNavigator, DEFAULT_SWAP,
};

#[derive(Parser, Debug)]
#[command(name = "period-nav", version)]
#[command(about = "Step periods, resolve navigator URLs and check record times")]
struct Cli {
    /// Log navigation decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Step a period and print the navigation it triggers as JSON
    Step {
        #[command(flatten)]
        nav: NavArgs,

        /// Current field value (YYYY-MM-DD or YYYY-MM)
        #[arg(long)]
        value: String,

        /// Signed number of days or months
        #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
        delta: i64,
    },
    /// Print the URL a committed period value navigates to
    Resolve {
        #[command(flatten)]
        nav: NavArgs,

        #[arg(long)]
        value: String,
    },
    /// Print what a record time field shows for BUFFER after an input event
    Time { buffer: String },
    /// Print the record time that would be submitted, or fail with the message
    CheckTime { value: String },
    /// Print the first and last day of a month given as YYYY-MM or YYYYMM
    Range { month: String },
    /// Print the stored timestamp for a day (YYYYMMDD) and a record time
    Timestamp { day: String, time: String },
}

#[derive(Args, Debug)]
struct NavArgs {
    /// JSON navigator configuration (instead of the flags below)
    #[arg(long, conflicts_with_all = ["template", "hx_target"])]
    config: Option<PathBuf>,

    /// Period granularity; month unless given, as in JSON configs
    #[arg(long, default_value_t = Mode::default())]
    mode: Mode,

    /// URL template with {value} / {compact} placeholders
    #[arg(long, required_unless_present = "config")]
    template: Option<String>,

    /// Selector of the region to update in place
    #[arg(long)]
    hx_target: Option<String>,

    #[arg(long, default_value = DEFAULT_SWAP)]
    hx_swap: String,

    /// Leave the address bar alone on in-place updates
    #[arg(long)]
    no_push_url: bool,

    #[arg(long)]
    hx_indicator: Option<String>,

    /// Behave as if htmx were loaded on the page
    #[arg(long)]
    htmx: bool,
}

impl NavArgs {
    fn config(&self) -> Result<NavigatorConfig> {
        if let Some(path) = &self.config {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            return serde_json::from_str(&raw)
                .with_context(|| format!("parsing {}", path.display()));
        }

        let template = self
            .template
            .clone()
            .context("--template is required without --config")?;
        let mut config = NavigatorConfig::new(self.mode, template);
        if let Some(target) = &self.hx_target {
            config = config.with_partial(PartialUpdate {
                target: target.clone(),
                swap: self.hx_swap.clone(),
                push_url: !self.no_push_url,
                indicator: self.hx_indicator.clone(),
            });
        }
        Ok(config)
    }

    fn navigator(&self) -> Result<PeriodNavigator<DryRunHost>> {
        Ok(PeriodNavigator::new(
            self.config()?,
            DryRunHost { htmx: self.htmx },
        ))
    }
}

/// A page that records navigations instead of performing them.
#[derive(Debug)]
struct DryRunHost {
    htmx: bool,
}

impl NavigationHost for DryRunHost {
    fn partial_update_available(&self) -> bool {
        self.htmx
    }

    fn request_partial(&self, url: &str, options: &PartialUpdate) {
        tracing::info!(url, selector = %options.target, swap = %options.swap, "htmx.ajax GET");
    }

    fn assign_location(&self, url: &str) {
        tracing::info!(url, "location.href");
    }
}

/// The `--value` argument standing in for the period field.
#[derive(Debug)]
struct ArgField(RefCell<String>);

impl InputField for ArgField {
    fn value(&self) -> String {
        self.0.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.0.borrow_mut() = value.to_string();
    }

    fn focus(&self) {}
}

#[derive(Serialize)]
struct MonthRange {
    month: String,
    first: String,
    last: String,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Step { nav, value, delta } => {
            let navigator = nav.navigator()?;
            let field = ArgField(RefCell::new(value.clone()));
            let navigation = navigator
                .step(&field, Some(&delta.to_string()))
                .with_context(|| {
                    format!("cannot step '{value}' by {delta} in {} mode", navigator.config().mode)
                })?;
            println!("{}", serde_json::to_string_pretty(&navigation)?);
        }
        Command::Resolve { nav, value } => {
            let config = nav.config()?;
            println!("{}", config.resolve_url(&value));
        }
        Command::Time { buffer } => {
            println!("{}", normalize(&buffer).value());
        }
        Command::CheckTime { value } => match check_submission(&value) {
            Ok(Accepted::Unchanged) => println!("{value}"),
            Ok(Accepted::Converted(clock)) => println!("{clock}"),
            Err(rejection) => {
                eprintln!("{rejection}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Range { month } => {
            let compact = resolve_month_input(&month)
                .with_context(|| format!("'{month}': expected YYYY-MM or YYYYMM"))?;
            let (first, last) = Mode::Month
                .expand_compact(&compact)
                .and_then(|m| month_range(&m))?;
            let range = MonthRange {
                month: compact,
                first: first.to_string(),
                last: last.to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&range)?);
        }
        Command::Timestamp { day, time } => {
            let timestamp = record_timestamp(&day, &time)
                .with_context(|| format!("cannot record '{time}' on '{day}'"))?;
            println!("{}", timestamp.format("%Y-%m-%d %H:%M:%S"));
        }
    }

    Ok(ExitCode::SUCCESS)
}
