//! Public editing operations.
//!
//! Each operation runs the same sequence: credential lookup, image encoding,
//! prompt construction, one generation round trip, response triage. Calls
//! share no mutable state and may run concurrently.

use crate::ai::{GeminiImageClient, ImageGenerationService};
use crate::config::{ApiKey, Session};
use crate::encode::{self, ImageFile};
use crate::interpret;
use crate::prompts::{self, EditMode, Hotspot, Operation};
use crate::Result;
use tracing::{error, info};

/// Builds a generation backend for a given API key.
pub type Connector = Box<dyn Fn(&ApiKey) -> Box<dyn ImageGenerationService> + Send + Sync>;

pub struct PhotoEditor {
    session: Session,
    connect: Connector,
}

impl PhotoEditor {
    /// Editor backed by the Gemini API.
    pub fn new(session: Session) -> Self {
        Self::with_connector(
            session,
            Box::new(|api_key: &ApiKey| {
                Box::new(GeminiImageClient::new(api_key.clone())) as Box<dyn ImageGenerationService>
            }),
        )
    }

    /// Editor with an injected backend factory (tests, alternate hosts).
    pub fn with_connector(session: Session, connect: Connector) -> Self {
        Self { session, connect }
    }

    /// Resolve a backend for this call; fails before any other work when no key is set.
    pub fn client(&self) -> Result<Box<dyn ImageGenerationService>> {
        let api_key = self.session.api_key()?;
        Ok((self.connect)(api_key))
    }

    async fn run(&self, file: &ImageFile, operation: Operation, user_text: &str) -> Result<String> {
        let context = operation.context();
        let client = self.client().map_err(|e| {
            error!("Cannot start {} on {}: {}", context, file.name, e);
            e
        })?;
        info!("Starting {} on {} ({} bytes)", context, file.name, file.bytes.len());

        let image = encode::encode(file).map_err(|e| {
            error!("Failed to encode {} for {}: {}", file.name, context, e);
            e
        })?;
        let prompt = prompts::build(&operation, user_text);
        let response = client.generate(&image, &prompt).await?;

        let data_url = interpret::interpret(&response, context)?;
        info!("Finished {} on {}", context, file.name);
        Ok(data_url)
    }

    /// Localized edit (modify / add / remove) centred on `hotspot`.
    pub async fn generate_edited_image(
        &self,
        file: &ImageFile,
        user_prompt: &str,
        hotspot: Hotspot,
        mode: EditMode,
    ) -> Result<String> {
        self.run(file, Operation::point(mode, hotspot), user_prompt)
            .await
    }

    pub async fn generate_replaced_background_image(
        &self,
        file: &ImageFile,
        background_prompt: &str,
    ) -> Result<String> {
        self.run(file, Operation::BackgroundReplace, background_prompt)
            .await
    }

    pub async fn generate_filtered_image(&self, file: &ImageFile, filter_prompt: &str) -> Result<String> {
        self.run(file, Operation::Filter, filter_prompt).await
    }

    pub async fn generate_adjusted_image(
        &self,
        file: &ImageFile,
        adjustment_prompt: &str,
    ) -> Result<String> {
        self.run(file, Operation::Adjust, adjustment_prompt).await
    }
}
