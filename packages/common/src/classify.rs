use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::ai::{AiMessage, AiService, ContentPart, TextRequest};
use crate::clothing::{ClothingAnalysis, ItemDraft};
use crate::error::WardrobeError;
use crate::session::Session;
use crate::storage::{BlobPath, BlobStore};

pub const CLASSIFY_INSTRUCTION: &str = "Analyze this clothing item and provide a JSON response with: category (tops/bottoms/shoes/accessories/outerwear), subcategory (specific type like t-shirt, jeans, sneakers), color (main color), style (casual/formal/sporty), season (spring/summer/fall/winter/all), and description (brief description). Only respond with valid JSON.";

/// An uploaded, classified image awaiting user edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StagedItem {
    pub image_url: String,
    pub analysis: ClothingAnalysis,
    /// True when the service response could not be parsed and the default was used.
    pub fallback: bool,
}

impl StagedItem {
    pub fn draft(&self) -> ItemDraft {
        ItemDraft::from_analysis(&self.image_url, &self.analysis)
    }
}

/// Parse a classification response, substituting the default on failure.
///
/// Returns the analysis and whether the fallback was used. Values are taken
/// as-is; nothing is checked against the category list.
pub fn parse_analysis(text: &str) -> (ClothingAnalysis, bool) {
    match serde_json::from_str::<ClothingAnalysis>(text) {
        Ok(analysis) => (analysis, false),
        Err(e) => {
            warn!(error = %e, "Unparseable classification response, using default");
            (ClothingAnalysis::fallback(), true)
        }
    }
}

/// The message list sent to the vision model for one image.
pub fn classification_request(image_url: &str) -> TextRequest {
    TextRequest::Messages(vec![AiMessage::user(vec![
        ContentPart::Text {
            text: CLASSIFY_INSTRUCTION.to_string(),
        },
        ContentPart::Image {
            image: image_url.to_string(),
        },
    ])])
}

/// Upload + classify flow.
#[derive(Clone)]
pub struct Classifier {
    blobs: Arc<dyn BlobStore>,
    ai: Arc<dyn AiService>,
}

impl Classifier {
    pub fn new(blobs: Arc<dyn BlobStore>, ai: Arc<dyn AiService>) -> Self {
        Self { blobs, ai }
    }

    /// Upload `image` under the owner's clothing prefix and classify it.
    pub async fn analyze(&self, session: &Session, image: &[u8]) -> Result<StagedItem, WardrobeError> {
        self.analyze_at(session, image, Utc::now()).await
    }

    pub async fn analyze_at(
        &self,
        session: &Session,
        image: &[u8],
        now: DateTime<Utc>,
    ) -> Result<StagedItem, WardrobeError> {
        if image.is_empty() {
            return Err(WardrobeError::Invalid("image is empty".into()));
        }

        let path = BlobPath::clothing_image(&session.user_id, now.timestamp_millis());
        let image_url = self.blobs.upload(&path, image).await?;
        info!(user_id = %session.user_id, %path, "Uploaded clothing image");

        let text = self
            .ai
            .generate_text(classification_request(&image_url))
            .await?;
        let (analysis, fallback) = parse_analysis(&text);

        Ok(StagedItem {
            image_url,
            analysis,
            fallback,
        })
    }
}
