// Adapters layer: concrete implementations of the domain ports.

pub mod ids;
pub mod imagery;
pub mod store;

pub use ids::UuidGenerator;
pub use imagery::{DisabledImageGenerator, InteriorDesigner, PlaceholderImageGenerator};
pub use store::EchoPlanStore;
