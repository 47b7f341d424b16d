use crate::core::styles::Locale;
use crate::domain::model::PlanRequest;
use url::form_urlencoded::byte_serialize;

pub const DEFAULT_PLACEHOLDER_BASE_URL: &str = "https://placehold.co";
const INTERIOR_BASE_URL: &str = "https://source.unsplash.com/random/1200x800/";

/// Builds placeholder image URLs for plans that have no generated imagery.
#[derive(Debug, Clone)]
pub struct PlaceholderImagery {
    base_url: String,
    locale: Locale,
}

impl PlaceholderImagery {
    pub fn new(base_url: impl Into<String>, locale: Locale) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, locale }
    }

    pub fn floor_plan_url(&self, seed: u64, request: &PlanRequest) -> String {
        let caption = match self.locale {
            Locale::En => "Plan",
            Locale::Ru => "План",
        };
        format!(
            "{}/800x600/e2e8f0/1e293b?text={}",
            self.base_url,
            self.caption(caption, seed, request)
        )
    }

    pub fn render_url(&self, seed: u64, request: &PlanRequest) -> String {
        format!(
            "{}/800x600/f8fafc/475569?text={}",
            self.base_url,
            self.caption("3D", seed, request)
        )
    }

    fn caption(&self, prefix: &str, seed: u64, request: &PlanRequest) -> String {
        let (rooms_word, unit) = match self.locale {
            Locale::En => ("rooms", "m²"),
            Locale::Ru => ("комнат", "м²"),
        };
        let style: String = byte_serialize(request.style.as_bytes()).collect();
        format!(
            "{}+{}+{}+{}+{}{}+{}",
            prefix, style, request.rooms, rooms_word, request.area, unit, seed
        )
    }
}

/// Stock-photo URL used when no interior render is available.
pub fn interior_placeholder_url(room_type: &str, style: &str) -> String {
    let room_type: String = byte_serialize(room_type.as_bytes()).collect();
    let style: String = byte_serialize(style.as_bytes()).collect();
    format!("{}?{},{},interior", INTERIOR_BASE_URL, room_type, style)
}
