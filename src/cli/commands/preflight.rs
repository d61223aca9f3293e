//! Implementation of the `promptinator preflight` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

use super::{meta_map, parse_key_val};
use crate::cli::output::{output, truncate, CommandOutput};
use crate::domain::models::{
    Config, DraftReceipt, PreflightRequest, PreflightResult, PublishReceipt,
};
use crate::infrastructure::setup::AppServices;

#[derive(Args, Debug)]
pub struct PreflightArgs {
    /// Prompt content
    #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
    pub content: Option<String>,

    /// Read prompt content from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Explicit title; generated from the mode metadata when omitted
    #[arg(long)]
    pub title: Option<String>,

    /// Prompt mode: template, agent or blueprint
    #[arg(short, long, default_value = "template")]
    pub mode: String,

    /// Category (repeatable)
    #[arg(short, long = "category")]
    pub categories: Vec<String>,

    /// Tag (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Mode metadata as key=value (goal, agentName, platform, mediaStyle, ...)
    #[arg(long = "meta", value_parser = parse_key_val)]
    pub meta: Vec<(String, String)>,

    /// Save the payload as a draft when the preflight passes
    #[arg(long, conflicts_with = "publish")]
    pub draft: bool,

    /// Publish the payload when the preflight passes
    #[arg(long)]
    pub publish: bool,
}

#[derive(Debug, Serialize)]
pub struct PreflightOutput {
    pub success: bool,
    #[serde(flatten)]
    pub result: PreflightResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<DraftReceipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<PublishReceipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandOutput for PreflightOutput {
    fn to_human(&self) -> String {
        let result = &self.result;
        let validation = &result.validation;

        let mut lines = vec![
            format!("Title:   {}", result.title),
            format!("Slug:    {}", result.slug),
            format!("State:   {}", result.state),
            format!(
                "Terms:   {} existing, {} created",
                result.terms_result.existing.len(),
                result.terms_result.created.len()
            ),
        ];
        if !result.terms_result.created.is_empty() {
            lines.push(format!("  new: {}", result.terms_result.created.join(", ")));
        }

        lines.push(format!(
            "Valid:   {}",
            if validation.is_valid { "yes" } else { "no" }
        ));
        for error in &validation.errors {
            lines.push(format!("  error:   {error}"));
        }
        for warning in &validation.warnings {
            lines.push(format!("  warning: {warning}"));
        }

        if let Some(ref payload) = result.payload {
            lines.push(format!("Categories: {}", payload.categories().join(", ")));
            lines.push(format!("Tags:       {}", payload.tags().join(", ")));
            lines.push(format!("Content:    {}", truncate(payload.content(), 60)));
        }

        if let Some(ref draft) = self.draft {
            lines.push(format!("\nDraft saved: {}", draft.draft_id));
        }
        if let Some(ref published) = self.published {
            lines.push(format!("\nPublished: {} ({})", published.url, published.state));
        }
        if let Some(ref error) = self.error {
            lines.push(format!("\nNot stored: {error}"));
        }

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Turn the arguments into a preflight request. The mode is also recorded in
/// the metadata unless `--meta mode=...` already set it.
pub fn build_request(args: &PreflightArgs, content: String) -> PreflightRequest {
    let mut metadata = meta_map(&args.meta);
    metadata
        .entry("mode")
        .or_insert_with(|| Value::String(args.mode.clone()));

    PreflightRequest {
        title: args.title.clone(),
        content,
        categories: args.categories.clone(),
        tags: args.tags.clone(),
        mode: args.mode.clone(),
        metadata,
    }
}

async fn read_content(args: &PreflightArgs) -> Result<String> {
    match (&args.content, &args.content_file) {
        (Some(content), _) => Ok(content.clone()),
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read content from {}", path.display())),
        (None, None) => anyhow::bail!("Either --content or --content-file is required"),
    }
}

pub async fn execute(args: PreflightArgs, config: &Config, json_mode: bool) -> Result<()> {
    let content = read_content(&args).await?;
    let request = build_request(&args, content);

    let services = AppServices::from_config(config).await?;
    let result = services
        .preflight
        .run_preflight(&request)
        .await
        .context("Preflight failed")?;

    let mut out = PreflightOutput {
        success: result.validation.is_valid,
        result,
        draft: None,
        published: None,
        error: None,
    };

    if args.draft {
        match out.result.payload {
            Some(ref payload) => match services.publish.create_draft(payload).await {
                Ok(receipt) => out.draft = Some(receipt),
                Err(e) => out.error = Some(e.to_string()),
            },
            None => out.error = Some("Payload is required".to_string()),
        }
    } else if args.publish {
        match services.publish.publish(&out.result).await {
            Ok(receipt) => out.published = Some(receipt),
            Err(e) => out.error = Some(e.to_string()),
        }
    }

    if out.error.is_some() {
        out.success = false;
    }

    output(&out, json_mode);

    match out.error {
        Some(error) => Err(anyhow::anyhow!(error)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: PreflightArgs,
    }

    fn parse(argv: &[&str]) -> Result<PreflightArgs, clap::Error> {
        let mut full = vec!["preflight"];
        full.extend_from_slice(argv);
        Harness::try_parse_from(full).map(|h| h.args)
    }

    #[test]
    fn test_parse_full_invocation() {
        let args = parse(&[
            "--content",
            "Write docs",
            "-m",
            "agent",
            "-c",
            "technical-coding",
            "-t",
            "api",
            "-t",
            "docs",
            "--meta",
            "agentName=Dr. Data",
            "--publish",
        ])
        .unwrap();

        assert_eq!(args.mode, "agent");
        assert_eq!(args.categories, vec!["technical-coding"]);
        assert_eq!(args.tags, vec!["api", "docs"]);
        assert_eq!(args.meta, vec![("agentName".to_string(), "Dr. Data".to_string())]);
        assert!(args.publish);
        assert!(!args.draft);
    }

    #[test]
    fn test_content_required() {
        assert!(parse(&["-c", "x"]).is_err());
        assert!(parse(&["--content", "a", "--content-file", "b.txt"]).is_err());
        assert!(parse(&["--content-file", "b.txt"]).is_ok());
    }

    #[test]
    fn test_draft_and_publish_conflict() {
        assert!(parse(&["--content", "a", "--draft", "--publish"]).is_err());
    }

    #[test]
    fn test_build_request_records_mode() {
        let args = parse(&["--content", "body", "-m", "blueprint"]).unwrap();
        let request = build_request(&args, "body".to_string());
        assert_eq!(request.metadata["mode"], "blueprint");

        let args = parse(&["--content", "body", "-m", "blueprint", "--meta", "mode=media"]).unwrap();
        let request = build_request(&args, "body".to_string());
        assert_eq!(request.metadata["mode"], "media");
        assert_eq!(request.mode, "blueprint");
    }
}
