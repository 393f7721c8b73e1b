use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Quiz question identifiers, also the keys of a [`QuizAnswerSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuestionId {
    Occasion,
    Weather,
    Vibe,
}

impl QuestionId {
    /// Name of the [`QuizAnswers`] field holding this question's answer.
    pub fn answer_field(self) -> &'static str {
        match self {
            Self::Occasion => "occasion",
            Self::Weather => "weather",
            Self::Vibe => "style_vibe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOption {
    pub value: &'static str,
    /// Translation key for the option label.
    pub label_key: &'static str,
    pub emoji: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: QuestionId,
    /// Translation key for the question text.
    pub prompt_key: &'static str,
    pub options: &'static [QuizOption],
}

const fn option(value: &'static str, label_key: &'static str, emoji: &'static str) -> QuizOption {
    QuizOption {
        value,
        label_key,
        emoji,
    }
}

/// The style quiz, in the order it is asked.
pub const QUIZ: [QuizQuestion; 3] = [
    QuizQuestion {
        id: QuestionId::Occasion,
        prompt_key: "question1",
        options: &[
            option("casual", "casual", "😎"),
            option("work", "work", "💼"),
            option("date", "date", "💕"),
            option("party", "party", "🎉"),
            option("workout", "gym", "💪"),
        ],
    },
    QuizQuestion {
        id: QuestionId::Weather,
        prompt_key: "question2",
        options: &[
            option("hot", "hot", "☀️"),
            option("warm", "mild", "🌤️"),
            option("cool", "mild", "🌥️"),
            option("cold", "cold", "❄️"),
            option("rainy", "rainy", "🌧️"),
        ],
    },
    QuizQuestion {
        id: QuestionId::Vibe,
        prompt_key: "question3",
        options: &[
            option("comfortable", "comfortable", "🛋️"),
            option("stylish", "trendy", "💫"),
            option("professional", "work", "👔"),
            option("trendy", "trendy", "🔥"),
            option("classic", "elegant", "👑"),
        ],
    },
];

/// The three answers a recommendation request needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct QuizAnswers {
    pub occasion: String,
    pub weather: String,
    pub style_vibe: String,
}

/// Answers collected during one quiz pass. Blank answers count as unanswered.
#[derive(Debug, Clone, Default)]
pub struct QuizAnswerSet {
    answers: HashMap<QuestionId, String>,
}

impl QuizAnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer. Returns the next unanswered question in quiz order.
    pub fn answer(&mut self, question: QuestionId, value: impl Into<String>) -> Option<QuestionId> {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            self.answers.remove(&question);
        } else {
            self.answers.insert(question, value.to_string());
        }
        self.next_question()
    }

    pub fn next_question(&self) -> Option<QuestionId> {
        QUIZ.iter()
            .map(|q| q.id)
            .find(|id| !self.answers.contains_key(id))
    }

    /// The completed answers, or `None` while any question is unanswered.
    pub fn to_answers(&self) -> Option<QuizAnswers> {
        Some(QuizAnswers {
            occasion: self.answers.get(&QuestionId::Occasion)?.clone(),
            weather: self.answers.get(&QuestionId::Weather)?.clone(),
            style_vibe: self.answers.get(&QuestionId::Vibe)?.clone(),
        })
    }
}

impl From<&QuizAnswers> for QuizAnswerSet {
    fn from(answers: &QuizAnswers) -> Self {
        let mut set = Self::new();
        set.answer(QuestionId::Occasion, answers.occasion.as_str());
        set.answer(QuestionId::Weather, answers.weather.as_str());
        set.answer(QuestionId::Vibe, answers.style_vibe.as_str());
        set
    }
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One outfit as returned by the AI service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitSuggestion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub missing: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,
}

impl OutfitSuggestion {
    /// Substituted when the recommendation response is not parseable.
    pub fn fallback() -> Self {
        Self {
            name: "Casual Outfit".into(),
            items: vec!["Any available top".into(), "Any available bottom".into()],
            missing: Vec::new(),
            explanation: "A simple, comfortable outfit perfect for the occasion.".into(),
        }
    }
}

/// A persisted outfit suggestion. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OutfitRecommendation {
    pub id: String,
    pub user_id: String,
    pub occasion: String,
    pub weather: String,
    pub style_vibe: String,
    pub recommended_items: Vec<String>,
    pub missing_items: Vec<String>,
    pub ai_explanation: String,
    pub created_at: DateTime<Utc>,
}
