//! Prompt construction for every editing operation
//!
//! All operations share one template (`data/prompts/image_edit.txt`); each
//! kind only supplies its task line, focus line and guidelines. The safety
//! policy and output requirements live in the template so they cannot drift
//! between operations. The race/ethnicity policy is an instruction to the
//! model only; nothing here filters requests locally.

use serde::{Deserialize, Serialize};

pub const IMAGE_EDIT: &str = include_str!("../data/prompts/image_edit.txt");

pub const RESOLUTION_CLAUSE: &str = "The final image MUST be exactly 1600x1600 pixels.";
pub const NO_TEXT_CLAUSE: &str = "Do NOT add any text, logos, or watermarks to the image.";
pub const IMAGE_ONLY_CLAUSE: &str = "Return ONLY the final edited image. Do not return any text.";

/// Pixel coordinate marking the focal point of a localized edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotspot {
    pub x: u32,
    pub y: u32,
}

impl Hotspot {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Point-based edit modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    Modify,
    Add,
    Remove,
}

/// One editing operation. Point-based kinds carry their hotspot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Modify(Hotspot),
    Add(Hotspot),
    Remove(Hotspot),
    BackgroundReplace,
    Filter,
    Adjust,
}

impl Operation {
    pub fn point(mode: EditMode, hotspot: Hotspot) -> Self {
        match mode {
            EditMode::Modify => Self::Modify(hotspot),
            EditMode::Add => Self::Add(hotspot),
            EditMode::Remove => Self::Remove(hotspot),
        }
    }

    /// Short label used in error messages and logs.
    pub fn context(&self) -> &'static str {
        match self {
            Self::Modify(_) => "edit",
            Self::Add(_) => "add",
            Self::Remove(_) => "remove",
            Self::BackgroundReplace => "background replacement",
            Self::Filter => "filter",
            Self::Adjust => "adjustment",
        }
    }

    pub fn hotspot(&self) -> Option<Hotspot> {
        match self {
            Self::Modify(h) | Self::Add(h) | Self::Remove(h) => Some(*h),
            _ => None,
        }
    }

    fn task(&self) -> &'static str {
        match self {
            Self::Modify(_) => "Your task is to perform a natural, localized edit on the provided image based on the user's request.",
            Self::Add(_) => "Your task is to add a new object to the provided image at the specified location.",
            Self::Remove(_) => "Your task is to remove an object from the provided image at the specified location.",
            Self::BackgroundReplace => "Your task is to replace the entire background of the provided image.",
            Self::Filter => "Your task is to apply a stylistic filter to the entire image based on the user's request.",
            Self::Adjust => "Your task is to perform a natural, global adjustment to the entire image based on the user's request.",
        }
    }

    fn guidelines(&self) -> &'static str {
        match self {
            Self::Modify(_) => "- The edit must be realistic and blend seamlessly with the surrounding area.\n- The rest of the image (outside the immediate edit area) must remain identical to the original.",
            Self::Add(_) => "- The added object must match the lighting, shadows, perspective and style of the original image.\n- It must blend seamlessly and look like part of the original photograph.\n- The rest of the image must remain identical to the original.",
            Self::Remove(_) => "- Remove the object completely and fill the area by realistically inpainting the background behind it.\n- The filled area must match the surrounding texture, lighting and perspective.\n- The rest of the image must remain identical to the original.",
            Self::BackgroundReplace => "- Accurately isolate the main foreground subject(s) and keep them unchanged.\n- Replace the entire background with a new one matching the user's description.\n- Recenter and frame the subject naturally within the new scene, and match lighting and shadows on the subject to the new background.",
            Self::Filter => "- Apply the style to the whole image.\n- Do not change the composition or content; only apply the style.",
            Self::Adjust => "- The adjustment must be applied across the entire image (e.g. exposure, color temperature, tone, sharpness).\n- The result must be photorealistic; do not apply a stylistic filter.",
        }
    }

    fn focus(&self) -> String {
        match self.hotspot() {
            Some(Hotspot { x, y }) => format!(
                "Edit Location: Focus on the area around pixel coordinates (x: {}, y: {}).",
                x, y
            ),
            None => "Edit Scope: The entire image.".to_string(),
        }
    }
}

/// Replace `{{key}}` placeholders in a template string.
///
/// Single pass over the template: substituted values are never rescanned, so
/// placeholder-like text inside a value is kept as written. Unknown keys are
/// left in place.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let key = &after[..end];
        match vars.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => result.push_str(value),
            None => result.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    result.push_str(rest);
    result
}

/// Build the full instruction text sent alongside the source image.
pub fn build(operation: &Operation, user_text: &str) -> String {
    let focus = operation.focus();
    render(
        IMAGE_EDIT,
        &[
            ("task", operation.task()),
            ("request", user_text.trim()),
            ("focus", &focus),
            ("guidelines", operation.guidelines()),
        ],
    )
}
