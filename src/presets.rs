//! Built-in filter and adjustment presets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FilterPreset {
    Synthwave,
    Anime,
    Lomo,
    Glitch,
}

impl FilterPreset {
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Synthwave => "Apply a vibrant 80s synthwave aesthetic with neon magenta and cyan glows, and subtle scan lines.",
            Self::Anime => "Give the image a vibrant Japanese anime style, with bold outlines, cel-shading, and saturated colors.",
            Self::Lomo => "Apply a Lomography-style cross-processing film effect with high-contrast, oversaturated colors, and dark vignetting.",
            Self::Glitch => "Transform the image into a futuristic holographic projection with digital glitch effects and chromatic aberration.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AdjustmentPreset {
    BlurBackground,
    EnhanceDetails,
    WarmerLighting,
    StudioLight,
}

impl AdjustmentPreset {
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::BlurBackground => "Apply a realistic depth-of-field effect, making the background blurry while keeping the main subject in sharp focus.",
            Self::EnhanceDetails => "Slightly enhance the sharpness and details of the image without making it look unnatural.",
            Self::WarmerLighting => "Adjust the color temperature to give the image warmer, golden-hour style lighting.",
            Self::StudioLight => "Add dramatic, professional studio lighting to the main subject.",
        }
    }
}
