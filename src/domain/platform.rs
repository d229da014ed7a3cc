use std::fmt;

use super::error::ValidationError;

/// Image-generation tool the composed prompt is formatted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Midjourney,
    GptImageGeneration,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Midjourney, Platform::GptImageGeneration];

    /// Selector value shown to the user and matched by [`Platform::parse`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Midjourney => "Midjourney",
            Platform::GptImageGeneration => "GPT Image Generation",
        }
    }

    /// Exact, case-sensitive match on the selector value.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str() == value)
            .ok_or_else(|| ValidationError::InvalidPlatform(value.to_string()))
    }

    /// Name of the embedded directive template for this platform.
    pub(crate) fn directive_template(&self) -> &'static str {
        match self {
            Platform::Midjourney => "platforms/midjourney.j2",
            Platform::GptImageGeneration => "platforms/gpt_image_generation.j2",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matches_exact_selector_values() {
        assert_eq!(Platform::parse("Midjourney").unwrap(), Platform::Midjourney);
        assert_eq!(
            Platform::parse("GPT Image Generation").unwrap(),
            Platform::GptImageGeneration
        );
    }

    #[test]
    fn parse_is_case_sensitive_and_untrimmed() {
        for value in ["midjourney", " Midjourney", "GPT image generation", "DALL-E", ""] {
            assert_eq!(
                Platform::parse(value),
                Err(ValidationError::InvalidPlatform(value.to_string()))
            );
        }
    }

    #[test]
    fn default_is_midjourney() {
        assert_eq!(Platform::default().to_string(), "Midjourney");
    }
}
