//! Image encoding for inline request parts
//!
//! Uploaded files are materialised as `data:<mime>;base64,<payload>` URLs and
//! split back into the MIME type and base64 payload that Gemini expects in an
//! `inlineData` part.

use crate::ai::gemini::types::InlineData;
use crate::ai::mime;
use crate::{Error, Result};
use base64::Engine as _;
use std::fmt;
use std::path::Path;

/// MIME type assigned to files whose type cannot be determined.
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// An in-memory uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type,
            bytes,
        }
    }

    /// Read a file from disk, sniffing its MIME type from content, then extension.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let mime_type = mime::detect_image_mime(&bytes)
            .or_else(|| mime::mime_from_extension(path))
            .map(str::to_string);

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        tracing::debug!(
            "Read {} ({} bytes, type {:?})",
            path.display(),
            bytes.len(),
            mime_type
        );

        Ok(Self::new(name, mime_type, bytes))
    }

    /// Rebuild a file from a data URL, e.g. to chain another edit onto a result.
    pub fn from_data_url(data_url: &str, name: impl Into<String>) -> Result<Self> {
        let url = DataUrl::parse(data_url)?;
        let bytes = url.decode()?;
        Ok(Self::new(name, Some(url.mime_type), bytes))
    }

    /// Full `data:` URL representation of the file.
    pub fn to_data_url(&self) -> String {
        let mime_type = self
            .mime_type
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(UNKNOWN_MIME);
        format!(
            "data:{};base64,{}",
            mime_type,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

/// A parsed `data:<mime>;base64,<payload>` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime_type: String,
    pub data: String,
}

impl DataUrl {
    pub fn parse(input: &str) -> Result<Self> {
        let (header, data) = input
            .split_once(',')
            .ok_or_else(|| Error::Encoding("Invalid data URL: missing ',' separator".to_string()))?;

        let mime_type = header
            .strip_prefix("data:")
            .and_then(|rest| rest.strip_suffix(";base64"))
            .filter(|mime| !mime.is_empty() && !mime.contains(';'))
            .ok_or_else(|| {
                Error::Encoding("Could not parse MIME type from data URL".to_string())
            })?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|e| Error::Encoding(format!("Invalid base64 payload: {}", e)))
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.data)
    }
}

impl From<DataUrl> for InlineData {
    fn from(url: DataUrl) -> Self {
        InlineData {
            mime_type: url.mime_type,
            data: url.data,
        }
    }
}

/// Convert an uploaded file into an inline request part.
pub fn encode(file: &ImageFile) -> Result<InlineData> {
    let data_url = file.to_data_url();
    let part: InlineData = DataUrl::parse(&data_url)?.into();
    tracing::debug!(
        "Encoded {} as {} ({} base64 chars)",
        file.name,
        part.mime_type,
        part.data.len()
    );
    Ok(part)
}
