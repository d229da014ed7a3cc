//! Fixed preset labels offered to prefill form fields.

use super::error::ValidationError;
use super::form::FormField;

pub const IMAGE_STYLE_PRESETS: &[&str] = &[
    "Photorealistic",
    "Oil Painting",
    "Watercolor",
    "Cyberpunk",
    "Fantasy Art",
    "Anime",
    "Pencil Sketch",
    "Pixel Art",
    "Abstract",
    "Minimalist",
    "Impressionistic",
];

pub const CAMERA_ANGLE_PRESETS: &[&str] = &[
    "Wide Shot",
    "Close-up",
    "Bird's Eye View",
    "Low Angle",
    "Dutch Angle",
    "Over-the-Shoulder",
    "Eye-level",
    "Macro Shot",
    "Distant Shot",
    "Extreme Close-up",
];

pub const LIGHTING_PRESETS: &[&str] = &[
    "Golden Hour",
    "Blue Hour",
    "Dramatic Lighting",
    "Soft Diffused Light",
    "Volumetric Lighting",
    "Neon Glow",
    "Backlight",
    "Rim Light",
    "Studio Lighting",
    "Natural Light",
    "Moonlight",
    "Ambient Light",
];

pub const COLOR_TONE_PRESETS: &[&str] = &[
    "Vibrant Colors",
    "Muted Tones",
    "Monochromatic",
    "Pastel Palette",
    "Dark & Moody",
    "Warm Hues",
    "Cool Hues",
    "Sepia Tone",
    "Black & White",
    "Earthy Tones",
];

/// Preset category, one per preset-backed form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetKind {
    ImageStyle,
    CameraAngle,
    Lighting,
    ColorTone,
}

impl PresetKind {
    pub const ALL: [PresetKind; 4] =
        [PresetKind::ImageStyle, PresetKind::CameraAngle, PresetKind::Lighting, PresetKind::ColorTone];

    pub fn presets(&self) -> &'static [&'static str] {
        match self {
            PresetKind::ImageStyle => IMAGE_STYLE_PRESETS,
            PresetKind::CameraAngle => CAMERA_ANGLE_PRESETS,
            PresetKind::Lighting => LIGHTING_PRESETS,
            PresetKind::ColorTone => COLOR_TONE_PRESETS,
        }
    }

    /// Form field a preset of this kind fills.
    pub fn field(&self) -> FormField {
        match self {
            PresetKind::ImageStyle => FormField::ImageStyle,
            PresetKind::CameraAngle => FormField::CameraAngle,
            PresetKind::Lighting => FormField::Lighting,
            PresetKind::ColorTone => FormField::ColorTone,
        }
    }

    /// Preset kind backing `field`, if any.
    pub fn for_field(field: FormField) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.field() == field)
    }

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            PresetKind::ImageStyle => "style",
            PresetKind::CameraAngle => "angle",
            PresetKind::Lighting => "lighting",
            PresetKind::ColorTone => "tone",
        }
    }

    /// Accepts the short name or the field name.
    pub fn from_name(value: &str) -> Result<Self, ValidationError> {
        let normalized = value.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized || kind.field().name() == normalized)
            .ok_or_else(|| ValidationError::UnknownPresetKind(value.to_string()))
    }
}
