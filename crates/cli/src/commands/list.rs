use owo_colors::{OwoColorize, Stream};
use schemeview_core::SchemeStatus;
use schemeview_runtime::TreeNode;
use serde::Serialize;
use std::fmt::Write;

use crate::OutputFormat;
use crate::util::{CliResult, Session};

#[derive(Serialize, Debug, PartialEq)]
pub(crate) struct NodeSummary {
    label: String,
    description: Option<String>,
    status: SchemeStatus,
    context_value: String,
    icon: &'static str,
    default_for_build: bool,
    default_for_testing: bool,
}

impl NodeSummary {
    fn from_node(node: &TreeNode) -> Self {
        Self {
            label: node.label().to_owned(),
            description: node.description().map(str::to_owned),
            status: node.status(),
            context_value: node.context_value().to_string(),
            icon: node.icon().id,
            default_for_build: node.is_default_for_build(),
            default_for_testing: node.is_default_for_testing(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub(crate) struct TreeSummary {
    view: &'static str,
    title: &'static str,
    empty: bool,
    schemes: Vec<NodeSummary>,
}

impl TreeSummary {
    pub(crate) fn capture(session: &Session, nodes: &[TreeNode]) -> Self {
        let descriptor = session.provider.descriptor();
        Self {
            view: descriptor.id,
            title: descriptor.display_name,
            empty: session.host.flag(descriptor.empty_context_key),
            schemes: nodes.iter().map(NodeSummary::from_node).collect(),
        }
    }
}

pub async fn run(session: &Session, format: OutputFormat) -> CliResult<String> {
    let nodes = session.provider.children(None).await;
    let summary = TreeSummary::capture(session, &nodes);
    match format {
        OutputFormat::Text => Ok(render_tree_text(&summary)),
        OutputFormat::Json => render_tree_json(&summary),
    }
}

pub(crate) fn render_tree_text(summary: &TreeSummary) -> String {
    if summary.empty {
        return "No schemes found.".to_owned();
    }

    let mut output = String::new();
    for node in &summary.schemes {
        let marker = match node.status {
            SchemeStatus::Running => "▶"
                .if_supports_color(Stream::Stdout, |text| text.green().to_string())
                .to_string(),
            SchemeStatus::Idle => "•".to_owned(),
        };
        let description = node.description.as_deref().map(|text| format!("  {text}")).unwrap_or_default();
        let context = format!("[{}]", node.context_value);
        let _ = writeln!(
            &mut output,
            "{marker} {}{description}  {}",
            node.label,
            context.if_supports_color(Stream::Stdout, |text| text.dimmed().to_string())
        );
    }
    output.trim_end().to_owned()
}

pub(crate) fn render_tree_json(summary: &TreeSummary) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
