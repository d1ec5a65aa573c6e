//! Terminal host for the build scheme tree.
//!
//! Loads a build manager fixture, attaches a [`SchemeTreeProvider`] to it and
//! renders the root level the way a sidebar would list it.
//!
//! [`SchemeTreeProvider`]: schemeview_runtime::SchemeTreeProvider

mod commands;
mod host;
mod util;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub use host::TerminalHost;
pub use util::{CliResult, Session};

#[derive(Parser, Debug)]
#[command(name = "schemeview", version, about = "Inspect a build scheme tree from a manager fixture")]
pub struct Cli {
    /// JSON fixture describing schemes, defaults and running state.
    #[arg(long, short = 'f', global = true, default_value = "schemes.json")]
    pub fixture: PathBuf,
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve and print the root level once.
    List,
    /// Open a refresh window, resolve the root level while it is open, then print it.
    Refresh(commands::refresh::RefreshArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build()?;
    let output = runtime.block_on(execute(&cli))?;
    println!("{output}");
    Ok(())
}

pub async fn execute(cli: &Cli) -> CliResult<String> {
    let session = Session::load(&cli.fixture)?;
    match &cli.command {
        Command::List => commands::list::run(&session, cli.format).await,
        Command::Refresh(args) => commands::refresh::run(&session, args, cli.format).await,
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[rstest]
    fn parses_refresh_arguments() {
        let cli = Cli::try_parse_from([
            "schemeview",
            "refresh",
            "--duration-ms",
            "3000",
            "--fail",
            "--fixture",
            "demo.json",
            "--format",
            "json",
            "-vv",
        ])
        .expect("valid arguments");

        assert_eq!(cli.fixture, PathBuf::from("demo.json"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Refresh(args) => {
                assert_eq!(args.duration_ms, 3000);
                assert!(args.fail);
            }
            Command::List => panic!("expected refresh"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn execute_lists_fixture_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"schemes":[{{"name":"App"}}],"default_build":"App"}}"#).expect("write");
        let cli = Cli::try_parse_from([
            "schemeview",
            "list",
            "--format",
            "json",
            "--fixture",
            file.path().to_str().expect("utf-8 path"),
        ])
        .expect("valid arguments");

        let output = execute(&cli).await.expect("list succeeds");

        let parsed: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(parsed["schemes"][0]["label"], "App");
        assert_eq!(parsed["schemes"][0]["description"], "✓");
    }

    #[rstest]
    #[tokio::test]
    async fn execute_reports_missing_fixture() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.json");
        let cli = Cli::try_parse_from([
            "schemeview",
            "list",
            "--fixture",
            missing.to_str().expect("utf-8 path"),
        ])
        .expect("valid arguments");

        let err = execute(&cli).await.unwrap_err();

        assert!(err.to_string().contains("failed to load fixture"));
    }
}
