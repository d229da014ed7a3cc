//! `generate` command: structured form pipeline.

use std::path::Path;

use clap::Args;

use crate::app::api::run_pipeline;
use crate::domain::{AppError, FormField, FormState};
use crate::services::{ArboardClipboard, TerminalNotifier};

use super::form::{FormPrompt, prompt_form};
use super::{load_context, report, run_options};

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Image style (e.g. "Anime", see `presets style`)
    #[arg(short = 's', long)]
    style: Option<String>,
    /// Camera angle (e.g. "Low Angle")
    #[arg(short = 'a', long)]
    angle: Option<String>,
    /// Lighting (e.g. "Golden Hour")
    #[arg(short = 'l', long)]
    lighting: Option<String>,
    /// Color tone (e.g. "Muted Tones")
    #[arg(short = 't', long)]
    tone: Option<String>,
    /// Free-form scene details
    #[arg(short = 'd', long)]
    details: Option<String>,
    /// Target platform: "Midjourney" or "GPT Image Generation"
    #[arg(long)]
    platform: Option<String>,
    /// Fill the fields not given as flags through an interactive form
    #[arg(short = 'i', long)]
    interactive: bool,
    /// Show the composed instruction without calling the API
    #[arg(long, conflicts_with = "copy")]
    prompt_preview: bool,
    /// Copy the generated prompt to the clipboard
    #[arg(short = 'c', long)]
    copy: bool,
}

impl GenerateArgs {
    fn flag_values(&self) -> [(FormField, Option<&str>); 6] {
        [
            (FormField::ImageStyle, self.style.as_deref()),
            (FormField::CameraAngle, self.angle.as_deref()),
            (FormField::Lighting, self.lighting.as_deref()),
            (FormField::ColorTone, self.tone.as_deref()),
            (FormField::UserDetails, self.details.as_deref()),
            (FormField::Platform, self.platform.as_deref()),
        ]
    }

    /// Form prefilled from flags; fields without a flag keep their defaults.
    fn to_form(&self) -> FormState {
        let mut form = FormState::new();
        for (field, value) in self.flag_values() {
            if let Some(value) = value {
                form.update_field(field, value);
            }
        }
        form
    }

    fn missing_fields(&self) -> Vec<FormField> {
        self.flag_values()
            .into_iter()
            .filter_map(|(field, value)| value.is_none().then_some(field))
            .collect()
    }
}

pub fn run_generate(config_path: Option<&Path>, args: GenerateArgs) -> Result<i32, AppError> {
    let mut form = args.to_form();
    if args.interactive {
        match prompt_form(&mut form, &args.missing_fields())? {
            FormPrompt::Completed => {}
            FormPrompt::Cancelled => return Ok(0),
        }
    }

    let ctx = load_context(config_path)?;
    let outcome = run_pipeline(
        ctx.structured_pipeline(form),
        run_options(args.prompt_preview, args.copy),
        &mut ArboardClipboard::new(),
        &TerminalNotifier,
    )?;
    Ok(report(outcome))
}
