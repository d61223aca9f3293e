//! Implementation of the `promptinator title` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::{meta_map, parse_key_val};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::TitleInput;
use crate::services::{generate_title, normalize_slug, slugify_title};

#[derive(Args, Debug)]
pub struct TitleArgs {
    /// Prompt mode: template, agent or blueprint
    #[arg(short, long, default_value = "template")]
    pub mode: String,

    /// Category used by template titles when no goal is given
    #[arg(short, long)]
    pub category: Option<String>,

    /// Mode metadata as key=value (goal, agentName, platform, mediaStyle)
    #[arg(long = "meta", value_parser = parse_key_val)]
    pub meta: Vec<(String, String)>,
}

#[derive(Debug, Serialize)]
pub struct TitleOutput {
    pub mode: String,
    pub title: String,
    /// Slug the title would get before any collision handling
    pub slug: String,
}

impl CommandOutput for TitleOutput {
    fn to_human(&self) -> String {
        format!("{}\n  slug: {}", self.title, self.slug)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Build the title output for `args` without printing it.
pub fn title_for(args: &TitleArgs) -> TitleOutput {
    let input = TitleInput::from_metadata(&args.mode, &meta_map(&args.meta), args.category.as_deref());
    let title = generate_title(&input);
    let slug = normalize_slug(&slugify_title(&title));

    TitleOutput {
        mode: args.mode.clone(),
        title,
        slug,
    }
}

pub fn execute(args: &TitleArgs, json_mode: bool) -> Result<()> {
    output(&title_for(args), json_mode);
    Ok(())
}
