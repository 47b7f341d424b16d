pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::Cli;

pub use app::Planner;
pub use config::TomlConfig;
pub use self::core::{engine::PlanEngine, layout::LayoutGenerator, variants::VariantBuilder};
pub use domain::model::{PlanRequest, PlanVariant, Room, Tier};
pub use utils::error::{PlanError, Result};
