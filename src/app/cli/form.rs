//! Interactive terminal form built on dialoguer.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::domain::{AppError, FormField, FormState, Platform, PresetKind};

const CUSTOM_OPTION: &str = "[custom]";
const SKIP_OPTION: &str = "[skip]";

pub(super) enum FormPrompt {
    Completed,
    Cancelled,
}

enum Answer {
    Value(String),
    Skip,
    Cancel,
}

/// Ask for each of `fields` in order, writing answers into `form`.
pub(super) fn prompt_form(form: &mut FormState, fields: &[FormField]) -> Result<FormPrompt, AppError> {
    for field in fields {
        let answer = match (field, PresetKind::for_field(*field)) {
            (_, Some(kind)) => prompt_preset(kind)?,
            (FormField::Platform, None) => prompt_platform(&form.platform)?,
            (_, None) => prompt_text(field.label(), true)?,
        };

        match answer {
            Answer::Value(value) => form.update_field(*field, value),
            Answer::Skip => {}
            Answer::Cancel => return Ok(FormPrompt::Cancelled),
        }
    }
    Ok(FormPrompt::Completed)
}

/// Ask for raw keywords. `None` when the user cancelled.
pub(super) fn prompt_keywords() -> Result<Option<String>, AppError> {
    match prompt_text("Keywords (comma separated)", true)? {
        Answer::Value(value) => Ok(Some(value)),
        Answer::Skip => Ok(Some(String::new())),
        Answer::Cancel => Ok(None),
    }
}

fn prompt_preset(kind: PresetKind) -> Result<Answer, AppError> {
    let label = kind.field().label();
    let mut items: Vec<&str> = kind.presets().to_vec();
    items.push(CUSTOM_OPTION);
    items.push(SKIP_OPTION);

    let selection = Select::new()
        .with_prompt(format!("Select {}", label))
        .items(&items)
        .default(items.len() - 1)
        .interact_opt()
        .map_err(|err| AppError::Interaction(format!("Failed to select {}: {}", label, err)))?;

    let Some(index) = selection else {
        return Ok(Answer::Cancel);
    };
    match items[index] {
        SKIP_OPTION => Ok(Answer::Skip),
        CUSTOM_OPTION => prompt_text(label, false),
        preset => Ok(Answer::Value(preset.to_string())),
    }
}

fn prompt_platform(current: &str) -> Result<Answer, AppError> {
    let items: Vec<&str> = Platform::ALL.iter().map(|platform| platform.as_str()).collect();
    let default = items.iter().position(|item| *item == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Select platform")
        .items(&items)
        .default(default)
        .interact_opt()
        .map_err(|err| AppError::Interaction(format!("Failed to select platform: {}", err)))?;

    Ok(match selection {
        Some(index) => Answer::Value(items[index].to_string()),
        None => Answer::Cancel,
    })
}

fn prompt_text(label: &str, allow_empty: bool) -> Result<Answer, AppError> {
    match Input::<String>::new().with_prompt(label).allow_empty(allow_empty).interact_text() {
        Ok(value) if value.is_empty() => Ok(Answer::Skip),
        Ok(value) => Ok(Answer::Value(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(Answer::Cancel),
        Err(err) => Err(AppError::Interaction(format!("Failed to read {}: {}", label, err))),
    }
}
