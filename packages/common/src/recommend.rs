use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::ai::{AiService, TextRequest};
use crate::clothing::ClothingItem;
use crate::error::WardrobeError;
use crate::outfit::{OutfitRecommendation, OutfitSuggestion, QuestionId, QuizAnswerSet, QuizAnswers};
use crate::session::Session;
use crate::store::{ClothingStore, ListOptions, OutfitStore};

/// How many past recommendations a history call returns by default.
pub const HISTORY_LIMIT: u64 = 10;

#[derive(Deserialize)]
struct OutfitsEnvelope {
    outfits: Vec<OutfitSuggestion>,
}

/// One line per item, joined with `", "`.
pub fn describe_wardrobe(items: &[ClothingItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "{}: {} in {} ({} style, {})",
                item.category,
                item.subcategory.as_deref().unwrap_or("item"),
                item.color.as_deref().unwrap_or("unknown color"),
                item.style.as_deref().unwrap_or("casual"),
                item.season.as_deref().unwrap_or("all season"),
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn build_prompt(answers: &QuizAnswers, wardrobe: &str) -> String {
    format!(
        r#"Based on these preferences:
- Occasion: {occasion}
- Weather: {weather}
- Style Vibe: {vibe}

And this wardrobe: {wardrobe}

Generate 3 outfit recommendations. For each outfit, specify which items from the wardrobe to use and what items are missing (if any).

Respond with JSON in this format:
{{
  "outfits": [
    {{
      "name": "Outfit name",
      "items": ["item descriptions that match wardrobe items"],
      "missing": ["missing item descriptions with specific characteristics"],
      "explanation": "Why this outfit works for the occasion/weather/vibe"
    }}
  ]
}}"#,
        occasion = answers.occasion,
        weather = answers.weather,
        vibe = answers.style_vibe,
    )
}

/// Parse a recommendation response. A response without an `outfits` array
/// counts as unparseable; the single fallback outfit is returned instead.
pub fn parse_outfits(text: &str) -> (Vec<OutfitSuggestion>, bool) {
    match serde_json::from_str::<OutfitsEnvelope>(text) {
        Ok(envelope) => (envelope.outfits, false),
        Err(e) => {
            warn!(error = %e, "Unparseable recommendation response, using fallback outfit");
            (vec![OutfitSuggestion::fallback()], true)
        }
    }
}

/// Quiz-driven outfit recommendations over the owner's wardrobe.
#[derive(Clone)]
pub struct Stylist {
    items: Arc<dyn ClothingStore>,
    outfits: Arc<dyn OutfitStore>,
    ai: Arc<dyn AiService>,
}

impl Stylist {
    pub fn new(
        items: Arc<dyn ClothingStore>,
        outfits: Arc<dyn OutfitStore>,
        ai: Arc<dyn AiService>,
    ) -> Self {
        Self { items, outfits, ai }
    }

    /// Ask the AI for outfits and persist each one in order.
    ///
    /// The first failed create stops the loop. Records already written are
    /// kept and returned inside [`WardrobeError::PartialSave`].
    pub async fn recommend(
        &self,
        session: &Session,
        answers: &QuizAnswers,
    ) -> Result<Vec<OutfitRecommendation>, WardrobeError> {
        let answers = complete_answers(answers)?;
        let answers = &answers;

        let wardrobe = self
            .items
            .list_items(&session.user_id, ListOptions::newest_first())
            .await?;
        if wardrobe.is_empty() {
            return Err(WardrobeError::EmptyWardrobe);
        }

        let prompt = build_prompt(answers, &describe_wardrobe(&wardrobe));
        let text = self.ai.generate_text(TextRequest::Prompt(prompt)).await?;
        let (suggestions, fallback) = parse_outfits(&text);

        let total = suggestions.len();
        let mut saved = Vec::with_capacity(total);
        for suggestion in suggestions {
            let record = OutfitRecommendation {
                id: Uuid::now_v7().to_string(),
                user_id: session.user_id.clone(),
                occasion: answers.occasion.clone(),
                weather: answers.weather.clone(),
                style_vibe: answers.style_vibe.clone(),
                recommended_items: suggestion.items,
                missing_items: suggestion.missing,
                ai_explanation: suggestion.explanation,
                created_at: Utc::now(),
            };

            if let Err(source) = self.outfits.create_outfit(&record).await {
                warn!(
                    user_id = %session.user_id,
                    saved = saved.len(),
                    total,
                    error = %source,
                    "Stopped saving recommendations"
                );
                return Err(WardrobeError::PartialSave {
                    saved,
                    total,
                    source,
                });
            }
            saved.push(record);
        }

        info!(user_id = %session.user_id, count = saved.len(), fallback, "Saved outfit recommendations");
        Ok(saved)
    }

    /// Past recommendations, newest first.
    pub async fn history(
        &self,
        session: &Session,
        limit: Option<u64>,
    ) -> Result<Vec<OutfitRecommendation>, WardrobeError> {
        let options = ListOptions::newest_first().with_limit(limit.unwrap_or(HISTORY_LIMIT));
        Ok(self.outfits.list_outfits(&session.user_id, options).await?)
    }
}

/// Trimmed answers, or the first unanswered question as an error.
fn complete_answers(answers: &QuizAnswers) -> Result<QuizAnswers, WardrobeError> {
    let set = QuizAnswerSet::from(answers);
    set.to_answers().ok_or_else(|| {
        let question = set.next_question().map_or("quiz", QuestionId::answer_field);
        WardrobeError::Invalid(format!("quiz answer `{question}` is missing"))
    })
}
