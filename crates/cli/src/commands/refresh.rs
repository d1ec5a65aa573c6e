use clap::Args;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::OutputFormat;
use crate::commands::list::{TreeSummary, render_tree_text};
use crate::util::{CliResult, Session, yes_no};

#[derive(Args, Debug, Clone)]
pub struct RefreshArgs {
    /// How long the simulated refresh window stays open.
    #[arg(long = "duration-ms", default_value_t = 1000)]
    pub duration_ms: u64,
    /// End the window with refresh-failed instead of refresh-completed.
    #[arg(long)]
    pub fail: bool,
    /// Scheme added to the manager when the refresh completes.
    #[arg(long = "add")]
    pub added: Vec<String>,
}

#[derive(Serialize, Debug)]
struct RefreshReport {
    outcome: &'static str,
    waited_ms: u64,
    invalidations: usize,
    loading: bool,
    tree: TreeSummary,
}

pub async fn run(session: &Session, args: &RefreshArgs, format: OutputFormat) -> CliResult<String> {
    let duration = Duration::from_millis(args.duration_ms);
    session.manager.begin_refresh();

    let manager = Arc::clone(&session.manager);
    let fail = args.fail;
    let added = args.added.clone();
    let driver = tokio::spawn(async move {
        tokio::time::sleep(duration).await;
        if fail {
            manager.fail_refresh();
        } else {
            manager.complete_refresh_adding(added);
        }
    });

    let resolution = session.provider.resolve_root().await;
    driver.await?;
    let waited = resolution.wait.waited();
    let nodes = resolution.nodes;
    tracing::info!(waited_ms = waited.as_millis() as u64, schemes = nodes.len(), "refresh resolved");

    let report = RefreshReport {
        outcome: if fail { "failed" } else { "completed" },
        waited_ms: waited.as_millis() as u64,
        invalidations: session.host.invalidations(),
        loading: session.provider.is_loading(),
        tree: TreeSummary::capture(session, &nodes),
    };
    match format {
        OutputFormat::Text => Ok(render_refresh_text(&report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
    }
}

fn render_refresh_text(report: &RefreshReport) -> String {
    format!(
        "Refresh {} after {} ms (invalidations: {}, loading: {})\n{}",
        report.outcome,
        report.waited_ms,
        report.invalidations,
        yes_no(report.loading),
        render_tree_text(&report.tree)
    )
}
