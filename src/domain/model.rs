use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_AREA: u32 = 20;
pub const MAX_AREA: u32 = 200;
pub const MIN_ROOMS: u32 = 1;
pub const MAX_ROOMS: u32 = 5;

/// A single room of a floor plan, in metres. `x`/`y` anchor the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub area: f64,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

impl Room {
    /// Multiplies area and both dimensions by `factor`; position is kept.
    pub fn rescaled(&self, factor: f64) -> Self {
        Self {
            name: self.name.clone(),
            area: self.area * factor,
            width: self.width * factor,
            height: self.height * factor,
            x: self.x,
            y: self.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub area: u32,
    pub rooms: u32,
    pub style: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Validate for PlanRequest {
    fn validate(&self) -> Result<()> {
        validate_range("area", self.area, MIN_AREA, MAX_AREA)?;
        validate_range("rooms", self.rooms, MIN_ROOMS, MAX_ROOMS)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Budget,
    #[default]
    Standard,
    Premium,
}

impl Tier {
    /// Output order of the three variants.
    pub const ALL: [Tier; 3] = [Tier::Budget, Tier::Standard, Tier::Premium];

    pub fn scale_factor(self) -> f64 {
        match self {
            Tier::Budget => 0.8,
            Tier::Standard => 1.0,
            Tier::Premium => 1.2,
        }
    }
}

/// One generated plan as returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanVariant {
    pub id: String,
    #[serde(default)]
    pub tier: Tier,
    pub title: String,
    pub area: u32,
    pub rooms: u32,
    pub style: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub floor_plan: String,
    pub render_3d: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(with = "room_data")]
    pub room_data: Vec<Room>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteriorRequest {
    pub room_type: String,
    pub style: String,
}

impl Validate for InteriorRequest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("room_type", &self.room_type)?;
        validate_non_empty_string("style", &self.style)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteriorDesign {
    pub url: String,
}

/// Image references and base rooms handed back by an image-generation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedLayout {
    pub rooms: Vec<Room>,
    pub floor_plan_url: String,
    pub render_url: String,
}

// room_data 在線路上是 JSON 字串，不是陣列
mod room_data {
    use super::Room;
    use serde::{de::Error as _, ser::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(rooms: &[Room], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = serde_json::to_string(rooms).map_err(S::Error::custom)?;
        serializer.serialize_str(&encoded)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Room>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        if encoded.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&encoded).map_err(D::Error::custom)
    }
}
