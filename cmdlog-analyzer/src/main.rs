use std::{ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{Parser, builder::PossibleValuesParser, builder::TypedValueParser};
use cmdstat::{MalformedPolicy, ReportKind};
use strum::VariantNames;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod error;

use app::App;
use config::Settings;
use error::Error;

const TOPN_SINGLE_DASH: &str = "-topn";

#[derive(Debug, Parser)]
#[command(
    name = "cmdlog-analyzer",
    about = "Command log analyzer: top commands, keys and command categories",
    version
)]
struct Cli {
    /// Path to the command log (keys.txt)
    log: PathBuf,

    /// Report to print
    #[arg(
        value_parser = PossibleValuesParser::new(ReportKind::VARIANTS.iter().copied())
            .try_map(|name: String| name.parse::<ReportKind>())
    )]
    report: ReportKind,

    /// Print only the top N commands/keys. Negative means print all
    ///
    /// The single-dash `-topn N` spelling is accepted too.
    #[arg(short = 'n', long = "topn", allow_negative_numbers = true)]
    top_n: Option<i64>,

    /// Skip malformed log lines with a warning instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// Directory holding settings.toml (default: the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Parse arguments, rewriting the single-dash `-topn` flag to `--topn` first
    fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(args.into_iter().map(|arg| {
            let arg: OsString = arg.into();
            match arg.to_str() {
                Some(TOPN_SINGLE_DASH) => OsString::from("--topn"),
                Some(flag) if flag.starts_with("-topn=") => OsString::from(format!("-{flag}")),
                _ => arg,
            }
        }))
    }

    /// Resolve settings, with command-line flags taking precedence
    fn settings(&self) -> Result<Settings, Error> {
        let mut settings = Settings::get(self.config.clone())?;

        if let Some(top_n) = self.top_n {
            settings.top_n = top_n;
        }
        if self.skip_malformed {
            settings.on_malformed = MalformedPolicy::Skip;
        }

        Ok(settings)
    }
}

fn run(cli: Cli) -> Result<String, Error> {
    let settings = cli.settings()?;
    App::new(cli.log, cli.report, settings).run()
}

fn main() -> ExitCode {
    let cli = Cli::parse_args(std::env::args_os()).unwrap_or_else(|error| error.exit());

    // Logs go to stderr, the report owns stdout
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
