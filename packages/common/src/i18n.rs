//! English/Spanish translation tables and the per-owner language preference.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::WardrobeError;
use crate::outfit::{QUIZ, QuestionId};
use crate::session::Session;
use crate::store::PreferenceStore;

/// Preference key the language code is stored under.
pub const LANGUAGE_KEY: &str = "language";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Only the exact codes `en` and `es` are accepted.
    pub fn parse(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    pub fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => EN,
            Language::Es => ES,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Look up `key`, falling back to the key itself.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    language
        .table()
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |&(_, v)| v)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct LocalizedOption {
    pub value: String,
    pub label: String,
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct LocalizedQuestion {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<LocalizedOption>,
}

/// The style quiz with labels in `language`.
pub fn localized_quiz(language: Language) -> Vec<LocalizedQuestion> {
    QUIZ.iter()
        .map(|question| LocalizedQuestion {
            id: question.id,
            prompt: translate(language, question.prompt_key).to_string(),
            options: question
                .options
                .iter()
                .map(|option| LocalizedOption {
                    value: option.value.to_string(),
                    label: translate(language, option.label_key).to_string(),
                    emoji: option.emoji.to_string(),
                })
                .collect(),
        })
        .collect()
}

/// Reads and writes the owner's language preference.
#[derive(Clone)]
pub struct Localizer {
    prefs: Arc<dyn PreferenceStore>,
}

impl Localizer {
    pub fn new(prefs: Arc<dyn PreferenceStore>) -> Self {
        Self { prefs }
    }

    /// The stored language. Unknown values and read failures yield English.
    pub async fn load(&self, session: &Session) -> Language {
        match self.prefs.get_preference(&session.user_id, LANGUAGE_KEY).await {
            Ok(Some(code)) => Language::parse(&code).unwrap_or_else(|| {
                warn!(user_id = %session.user_id, code = %code, "Ignoring unknown stored language");
                Language::En
            }),
            Ok(None) => Language::En,
            Err(e) => {
                warn!(user_id = %session.user_id, error = %e, "Failed to load language preference");
                Language::En
            }
        }
    }

    /// Persist `language`. On error nothing was stored and the previous
    /// preference stays in effect.
    pub async fn change(&self, session: &Session, language: Language) -> Result<Language, WardrobeError> {
        self.prefs
            .set_preference(&session.user_id, LANGUAGE_KEY, language.code())
            .await?;
        info!(user_id = %session.user_id, %language, "Changed language");
        Ok(language)
    }
}

static EN: &[(&str, &str)] = &[
    // navigation
    ("wardrobe", "Wardrobe"),
    ("upload", "Upload"),
    ("outfits", "Outfits"),
    ("profile", "Profile"),
    // wardrobe
    ("myWardrobe", "My Wardrobe"),
    ("addClothes", "Add Clothes"),
    ("all", "All"),
    ("tops", "Tops"),
    ("bottoms", "Bottoms"),
    ("shoes", "Shoes"),
    ("accessories", "Accessories"),
    ("outerwear", "Outerwear"),
    ("emptyWardrobe", "Your wardrobe is empty"),
    ("startAdding", "Start adding clothes to get outfit recommendations!"),
    ("deleteItem", "Delete Item"),
    ("deleteConfirmation", "Are you sure you want to delete"),
    ("delete", "Delete"),
    ("failedToDelete", "Failed to delete the clothing item. Please try again."),
    // upload
    ("addNewClothing", "Add New Clothing"),
    ("takePhoto", "Take Photo"),
    ("chooseFromGallery", "Choose from Gallery"),
    ("analyzing", "Analyzing your clothing..."),
    ("clothingDetails", "Clothing Details"),
    ("type", "Type"),
    ("color", "Color"),
    ("style", "Style"),
    ("season", "Season"),
    ("saveToWardrobe", "Save to Wardrobe"),
    ("saving", "Saving..."),
    ("clothingItemAdded", "Clothing item added to your wardrobe!"),
    ("failedToSave", "Failed to save the clothing item. Please try again."),
    // edit form
    ("editClothingDetails", "Edit Clothing Details"),
    ("category", "Category"),
    ("enterClothingType", "Enter clothing type (e.g., t-shirt, jeans)"),
    ("enterDescription", "Enter a description of this item"),
    ("description", "Description"),
    ("selectCategory", "Select Category"),
    ("selectType", "Select Type"),
    ("selectColor", "Select Color"),
    ("selectStyle", "Select Style"),
    ("selectSeason", "Select Season"),
    // upgrade
    ("upgradeRequired", "Upgrade Required"),
    ("youHaveReached", "You have reached"),
    ("items", "items"),
    ("upTo", "Up to"),
    ("unlimitedOutfits", "Unlimited outfit recommendations"),
    ("advancedAI", "Advanced AI styling"),
    ("prioritySupport", "Priority customer support"),
    ("everythingInPro", "Everything in Pro"),
    ("personalStylist", "Personal AI stylist"),
    ("exclusiveFeatures", "Exclusive premium features"),
    ("upgrade", "Upgrade"),
    ("upgradeToProMessage", "Upgrade to Pro for $10 to add up to 100 clothing items"),
    ("upgradeToPremiumMessage", "Upgrade to Premium for $20 to add up to 500 clothing items"),
    ("upgradeSuccessful", "Upgrade successful! You can now add more items."),
    ("viewWardrobe", "View Wardrobe"),
    ("addMore", "Add More"),
    ("success", "Success"),
    // outfits
    ("outfitRecommendations", "Outfit Recommendations"),
    ("getRecommendations", "Get Recommendations"),
    ("styleQuiz", "Style Quiz"),
    ("question1", "What's the occasion?"),
    ("question2", "What's the weather like?"),
    ("question3", "What's your vibe today?"),
    ("casual", "Casual"),
    ("work", "Work"),
    ("party", "Party"),
    ("date", "Date"),
    ("gym", "Gym"),
    ("sunny", "Sunny"),
    ("rainy", "Rainy"),
    ("cold", "Cold"),
    ("hot", "Hot"),
    ("mild", "Mild"),
    ("comfortable", "Comfortable"),
    ("elegant", "Elegant"),
    ("trendy", "Trendy"),
    ("bold", "Bold"),
    ("minimalist", "Minimalist"),
    ("recommendedOutfits", "Recommended Outfits"),
    ("completeOutfit", "Complete Outfit"),
    ("missingItems", "Missing Items"),
    ("youNeed", "You need:"),
    ("characteristics", "Characteristics:"),
    // profile
    ("myProfile", "My Profile"),
    ("language", "Language"),
    ("english", "English"),
    ("spanish", "Spanish"),
    ("wardrobeStats", "Wardrobe Stats"),
    ("totalItems", "Total Items"),
    ("outfitsCreated", "Outfits Created"),
    // common
    ("next", "Next"),
    ("back", "Back"),
    ("done", "Done"),
    ("cancel", "Cancel"),
    ("save", "Save"),
    ("loading", "Loading..."),
    ("error", "Error"),
    ("tryAgain", "Try Again"),
];

static ES: &[(&str, &str)] = &[
    ("wardrobe", "Guardarropa"),
    ("upload", "Subir"),
    ("outfits", "Outfits"),
    ("profile", "Perfil"),
    ("myWardrobe", "Mi Guardarropa"),
    ("addClothes", "Agregar Ropa"),
    ("all", "Todo"),
    ("tops", "Blusas"),
    ("bottoms", "Pantalones"),
    ("shoes", "Zapatos"),
    ("accessories", "Accesorios"),
    ("outerwear", "Abrigos"),
    ("emptyWardrobe", "Tu guardarropa está vacío"),
    ("startAdding", "¡Comienza agregando ropa para obtener recomendaciones de outfits!"),
    ("deleteItem", "Eliminar Prenda"),
    ("deleteConfirmation", "¿Seguro que quieres eliminar"),
    ("delete", "Eliminar"),
    ("failedToDelete", "Error al eliminar la prenda. Inténtalo de nuevo."),
    ("addNewClothing", "Agregar Nueva Prenda"),
    ("takePhoto", "Tomar Foto"),
    ("chooseFromGallery", "Elegir de Galería"),
    ("analyzing", "Analizando tu prenda..."),
    ("clothingDetails", "Detalles de la Prenda"),
    ("type", "Tipo"),
    ("color", "Color"),
    ("style", "Estilo"),
    ("season", "Temporada"),
    ("saveToWardrobe", "Guardar en Guardarropa"),
    ("saving", "Guardando..."),
    ("clothingItemAdded", "¡Prenda agregada a tu guardarropa!"),
    ("failedToSave", "Error al guardar la prenda. Inténtalo de nuevo."),
    ("editClothingDetails", "Editar Detalles de la Prenda"),
    ("category", "Categoría"),
    ("enterClothingType", "Ingresa el tipo de prenda (ej: camiseta, jeans)"),
    ("enterDescription", "Ingresa una descripción de este artículo"),
    ("description", "Descripción"),
    ("selectCategory", "Seleccionar Categoría"),
    ("selectType", "Seleccionar Tipo"),
    ("selectColor", "Seleccionar Color"),
    ("selectStyle", "Seleccionar Estilo"),
    ("selectSeason", "Seleccionar Temporada"),
    ("upgradeRequired", "Actualización Requerida"),
    ("youHaveReached", "Has alcanzado"),
    ("items", "artículos"),
    ("upTo", "Hasta"),
    ("unlimitedOutfits", "Recomendaciones ilimitadas de outfits"),
    ("advancedAI", "Estilismo avanzado con IA"),
    ("prioritySupport", "Soporte prioritario al cliente"),
    ("everythingInPro", "Todo lo de Pro"),
    ("personalStylist", "Estilista personal con IA"),
    ("exclusiveFeatures", "Características premium exclusivas"),
    ("upgrade", "Actualizar"),
    ("upgradeToProMessage", "Actualiza a Pro por $10 para agregar hasta 100 prendas"),
    ("upgradeToPremiumMessage", "Actualiza a Premium por $20 para agregar hasta 500 prendas"),
    ("upgradeSuccessful", "¡Actualización exitosa! Ahora puedes agregar más artículos."),
    ("viewWardrobe", "Ver Guardarropa"),
    ("addMore", "Agregar Más"),
    ("success", "Éxito"),
    ("outfitRecommendations", "Recomendaciones de Outfits"),
    ("getRecommendations", "Obtener Recomendaciones"),
    ("styleQuiz", "Quiz de Estilo"),
    ("question1", "¿Cuál es la ocasión?"),
    ("question2", "¿Cómo está el clima?"),
    ("question3", "¿Cuál es tu vibra hoy?"),
    ("casual", "Casual"),
    ("work", "Trabajo"),
    ("party", "Fiesta"),
    ("date", "Cita"),
    ("gym", "Gimnasio"),
    ("sunny", "Soleado"),
    ("rainy", "Lluvioso"),
    ("cold", "Frío"),
    ("hot", "Caluroso"),
    ("mild", "Templado"),
    ("comfortable", "Cómodo"),
    ("elegant", "Elegante"),
    ("trendy", "Moderno"),
    ("bold", "Atrevido"),
    ("minimalist", "Minimalista"),
    ("recommendedOutfits", "Outfits Recomendados"),
    ("completeOutfit", "Outfit Completo"),
    ("missingItems", "Artículos Faltantes"),
    ("youNeed", "Necesitas:"),
    ("characteristics", "Características:"),
    ("myProfile", "Mi Perfil"),
    ("language", "Idioma"),
    ("english", "Inglés"),
    ("spanish", "Español"),
    ("wardrobeStats", "Estadísticas del Guardarropa"),
    ("totalItems", "Artículos Totales"),
    ("outfitsCreated", "Outfits Creados"),
    ("next", "Siguiente"),
    ("back", "Atrás"),
    ("done", "Listo"),
    ("cancel", "Cancelar"),
    ("save", "Guardar"),
    ("loading", "Cargando..."),
    ("error", "Error"),
    ("tryAgain", "Intentar de Nuevo"),
];
