use crate::core::layout::LayoutGenerator;
use crate::core::placeholder::{interior_placeholder_url, PlaceholderImagery};
use crate::core::rng::SharedRng;
use crate::core::ImageGenerator;
use crate::domain::model::{GeneratedLayout, InteriorDesign, InteriorRequest, PlanRequest};
use crate::utils::error::{PlanError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use rand::Rng;

/// Offline stand-in for a text-to-image backend.
///
/// Lays out one standard-scale room list and pairs it with placeholder image
/// URLs, so the variant builder takes the rescale-from-base path.
#[derive(Debug, Clone)]
pub struct PlaceholderImageGenerator {
    layout: LayoutGenerator,
    imagery: PlaceholderImagery,
    rng: SharedRng,
}

impl PlaceholderImageGenerator {
    pub fn new(imagery: PlaceholderImagery, rng: SharedRng) -> Self {
        Self {
            layout: LayoutGenerator::new(),
            imagery,
            rng,
        }
    }
}

#[async_trait]
impl ImageGenerator for PlaceholderImageGenerator {
    async fn generate(&self, request: &PlanRequest) -> Result<GeneratedLayout> {
        tracing::debug!("Using placeholder image generation for {:?}", request);

        let generated = self.rng.with(|rng| {
            let rooms = self
                .layout
                .generate(f64::from(request.area), request.rooms, 1.0, rng);
            let seed = rng.gen::<u64>() >> 1;
            GeneratedLayout {
                rooms,
                floor_plan_url: self.imagery.floor_plan_url(seed, request),
                render_url: self.imagery.render_url(seed, request),
            }
        });

        Ok(generated)
    }
}

/// Always unavailable; forces the local layout path.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledImageGenerator;

#[async_trait]
impl ImageGenerator for DisabledImageGenerator {
    async fn generate(&self, _request: &PlanRequest) -> Result<GeneratedLayout> {
        Err(PlanError::ImageGenerationUnavailable)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InteriorDesigner;

impl InteriorDesigner {
    pub fn design(&self, request: &InteriorRequest) -> Result<InteriorDesign> {
        request.validate()?;
        tracing::info!(
            "🛋️ Interior request: {} in '{}' style",
            request.room_type,
            request.style
        );
        Ok(InteriorDesign {
            url: interior_placeholder_url(&request.room_type, &request.style),
        })
    }
}
