use crate::adapters::{EchoPlanStore, InteriorDesigner, PlaceholderImageGenerator, UuidGenerator};
use crate::core::engine::{PlanEngine, PlanSource};
use crate::core::placeholder::PlaceholderImagery;
use crate::core::rng::SharedRng;
use crate::core::styles::Locale;
use crate::core::variants::VariantBuilder;
use crate::core::{ConfigProvider, PlanRequest, PlanStore, PlanVariant};
use crate::domain::model::{InteriorDesign, InteriorRequest};
use crate::utils::error::Result;
use std::path::Path;

/// Plan operations wired to the built-in adapters.
pub struct Planner {
    engine: PlanEngine<PlaceholderImageGenerator, UuidGenerator>,
    store: EchoPlanStore<UuidGenerator>,
    interiors: InteriorDesigner,
}

impl Planner {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let rng = SharedRng::from_optional_seed(config.seed());
        let locale = Locale::from_code(config.locale()).unwrap_or_default();
        let imagery = PlaceholderImagery::new(config.placeholder_base_url(), locale);

        let generator = PlaceholderImageGenerator::new(imagery.clone(), rng.clone());
        let engine = PlanEngine::new(
            generator,
            UuidGenerator,
            VariantBuilder::new(imagery, locale),
            rng,
        )
        .with_image_generator(config.use_image_generator());

        tracing::debug!(
            "Planner ready (locale: {}, image generator: {}, seeded: {})",
            locale.code(),
            config.use_image_generator(),
            config.seed().is_some()
        );

        Self {
            engine,
            store: EchoPlanStore::new(UuidGenerator),
            interiors: InteriorDesigner,
        }
    }

    pub async fn generate(&self, request: &PlanRequest) -> Result<(Vec<PlanVariant>, PlanSource)> {
        self.engine.generate_with_source(request).await
    }

    pub async fn save(&self, plan: PlanVariant) -> Result<PlanVariant> {
        self.store.save(plan).await
    }

    /// Reads one plan as JSON from `path` and saves it.
    pub async fn save_from_file<P: AsRef<Path>>(&self, path: P) -> Result<PlanVariant> {
        let content = tokio::fs::read_to_string(path).await?;
        let plan: PlanVariant = serde_json::from_str(&content)?;
        self.save(plan).await
    }

    pub async fn list(&self) -> Result<Vec<PlanVariant>> {
        self.store.list().await
    }

    pub fn interior(&self, request: &InteriorRequest) -> Result<InteriorDesign> {
        self.interiors.design(request)
    }
}
