//! Input collector state for both pipelines.

use super::error::ValidationError;
use super::platform::Platform;
use super::presets::PresetKind;

/// Structured form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    ImageStyle,
    CameraAngle,
    Lighting,
    ColorTone,
    UserDetails,
    Platform,
}

impl FormField {
    /// Text fields rendered into the instruction, in display order.
    pub const DETAILS: [FormField; 5] = [
        FormField::ImageStyle,
        FormField::CameraAngle,
        FormField::Lighting,
        FormField::ColorTone,
        FormField::UserDetails,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::ImageStyle => "image_style",
            FormField::CameraAngle => "camera_angle",
            FormField::Lighting => "lighting",
            FormField::ColorTone => "color_tone",
            FormField::UserDetails => "user_details",
            FormField::Platform => "platform",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::ImageStyle => "Image Style",
            FormField::CameraAngle => "Camera Angle",
            FormField::Lighting => "Lighting",
            FormField::ColorTone => "Color Tone",
            FormField::UserDetails => "User-specific details",
            FormField::Platform => "Platform",
        }
    }

    /// Accepts snake_case names and the camelCase names used by web forms.
    pub fn from_name(value: &str) -> Result<Self, ValidationError> {
        let field = match value {
            "image_style" | "imageStyle" => FormField::ImageStyle,
            "camera_angle" | "cameraAngle" => FormField::CameraAngle,
            "lighting" => FormField::Lighting,
            "color_tone" | "colorTone" => FormField::ColorTone,
            "user_details" | "userDetails" => FormField::UserDetails,
            "platform" => FormField::Platform,
            other => return Err(ValidationError::UnknownField(other.to_string())),
        };
        Ok(field)
    }
}

/// Values of the structured form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub image_style: String,
    pub camera_angle: String,
    pub lighting: String,
    pub color_tone: String,
    pub user_details: String,
    /// Raw selector value; validated when the instruction is composed.
    pub platform: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            image_style: String::new(),
            camera_angle: String::new(),
            lighting: String::new(),
            color_tone: String::new(),
            user_details: String::new(),
            platform: Platform::default().as_str().to_string(),
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::ImageStyle => &self.image_style,
            FormField::CameraAngle => &self.camera_angle,
            FormField::Lighting => &self.lighting,
            FormField::ColorTone => &self.color_tone,
            FormField::UserDetails => &self.user_details,
            FormField::Platform => &self.platform,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::ImageStyle => &mut self.image_style,
            FormField::CameraAngle => &mut self.camera_angle,
            FormField::Lighting => &mut self.lighting,
            FormField::ColorTone => &mut self.color_tone,
            FormField::UserDetails => &mut self.user_details,
            FormField::Platform => &mut self.platform,
        }
    }

    /// Replace a field's value verbatim.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    /// Replace the preset-backed field with `label`. An empty label is the
    /// "no selection" entry and leaves the field untouched.
    pub fn apply_preset(&mut self, kind: PresetKind, label: &str) {
        if label.is_empty() {
            return;
        }
        self.update_field(kind.field(), label);
    }

    /// At least one of the five text fields is non-empty.
    pub fn has_details(&self) -> bool {
        FormField::DETAILS.iter().any(|field| !self.value(*field).is_empty())
    }
}

/// Value of the keyword form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordState {
    pub raw_keywords: String,
}

impl KeywordState {
    pub const FIELD_NAME: &'static str = "raw_keywords";

    pub fn new(raw_keywords: impl Into<String>) -> Self {
        Self { raw_keywords: raw_keywords.into() }
    }

    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), ValidationError> {
        match name {
            "raw_keywords" | "rawKeywords" => {
                self.raw_keywords = value.into();
                Ok(())
            }
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }

    /// Keywords with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.raw_keywords.trim()
    }
}
