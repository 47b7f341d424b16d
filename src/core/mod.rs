pub mod engine;
pub mod layout;
pub mod placeholder;
pub mod rng;
pub mod styles;
pub mod variants;

pub use crate::domain::model::{GeneratedLayout, PlanRequest, PlanVariant, Room, Tier};
pub use crate::domain::ports::{ConfigProvider, IdGenerator, ImageGenerator, PlanStore};
pub use crate::utils::error::Result;
