use crate::domain::model::Tier;

pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "ru"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }
}

// (key, en, ru); the first entry is the fallback
const STYLE_NAMES: [(&str, &str, &str); 6] = [
    ("modern", "Modern", "Современный"),
    ("minimalist", "Minimalist", "Минималистичный"),
    ("scandinavian", "Scandinavian", "Скандинавский"),
    ("loft", "Loft", "Лофт"),
    ("classic", "Classic", "Классический"),
    ("provence", "Provence", "Прованс"),
];

pub fn is_known_style(style: &str) -> bool {
    STYLE_NAMES.iter().any(|(key, _, _)| *key == style)
}

/// Display name for a style key; unknown keys get the "modern" name.
pub fn style_display_name(locale: Locale, style: &str) -> &'static str {
    let (_, en, ru) = STYLE_NAMES
        .iter()
        .find(|(key, _, _)| *key == style)
        .copied()
        .unwrap_or(STYLE_NAMES[0]);
    match locale {
        Locale::En => en,
        Locale::Ru => ru,
    }
}

pub fn tier_label(locale: Locale, tier: Tier) -> &'static str {
    match (locale, tier) {
        (Locale::En, Tier::Budget) => "Budget",
        (Locale::En, Tier::Standard) => "Standard",
        (Locale::En, Tier::Premium) => "Premium",
        (Locale::Ru, Tier::Budget) => "Бюджетный",
        (Locale::Ru, Tier::Standard) => "Стандартный",
        (Locale::Ru, Tier::Premium) => "Премиум",
    }
}

pub fn plan_title(locale: Locale, tier: Tier, style: &str) -> String {
    format!(
        "{} {}",
        tier_label(locale, tier),
        style_display_name(locale, style)
    )
}
