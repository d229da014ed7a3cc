//! `expand` command: keyword pipeline.

use std::path::Path;

use clap::Args;

use crate::app::api::run_pipeline;
use crate::domain::AppError;
use crate::services::{ArboardClipboard, TerminalNotifier};

use super::form::prompt_keywords;
use super::{load_context, report, run_options};

#[derive(Args, Debug, Default)]
pub struct ExpandArgs {
    /// Raw keywords; words are joined with spaces
    keywords: Vec<String>,
    /// Show the composed instruction without calling the API
    #[arg(long, conflicts_with = "copy")]
    prompt_preview: bool,
    /// Copy the expanded prompt to the clipboard
    #[arg(short = 'c', long)]
    copy: bool,
}

pub fn run_expand(config_path: Option<&Path>, args: ExpandArgs) -> Result<i32, AppError> {
    let raw_keywords = if args.keywords.is_empty() {
        match prompt_keywords()? {
            Some(value) => value,
            None => return Ok(0),
        }
    } else {
        args.keywords.join(" ")
    };

    let ctx = load_context(config_path)?;
    let outcome = run_pipeline(
        ctx.keyword_pipeline(raw_keywords),
        run_options(args.prompt_preview, args.copy),
        &mut ArboardClipboard::new(),
        &TerminalNotifier,
    )?;
    Ok(report(outcome))
}
