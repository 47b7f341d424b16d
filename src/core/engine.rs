use crate::core::rng::SharedRng;
use crate::core::styles::is_known_style;
use crate::core::variants::VariantBuilder;
use crate::domain::model::{GeneratedLayout, PlanRequest, PlanVariant};
use crate::domain::ports::{IdGenerator, ImageGenerator};
use crate::utils::error::{PlanError, Result};
use crate::utils::validation::Validate;
use chrono::Utc;

/// Which construction path produced a batch of variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    External,
    Local,
}

pub struct PlanEngine<G: ImageGenerator, I: IdGenerator> {
    generator: G,
    ids: I,
    builder: VariantBuilder,
    rng: SharedRng,
    use_image_generator: bool,
}

impl<G: ImageGenerator, I: IdGenerator> PlanEngine<G, I> {
    pub fn new(generator: G, ids: I, builder: VariantBuilder, rng: SharedRng) -> Self {
        Self {
            generator,
            ids,
            builder,
            rng,
            use_image_generator: true,
        }
    }

    /// When disabled the image generator is never called and every request is
    /// built locally.
    pub fn with_image_generator(mut self, enabled: bool) -> Self {
        self.use_image_generator = enabled;
        self
    }

    pub async fn generate(&self, request: &PlanRequest) -> Result<Vec<PlanVariant>> {
        let (variants, _) = self.generate_with_source(request).await?;
        Ok(variants)
    }

    /// Validates the request, then builds three variants.
    ///
    /// Image-generation failures never reach the caller; they are logged and
    /// the local layout path is used instead.
    pub async fn generate_with_source(
        &self,
        request: &PlanRequest,
    ) -> Result<(Vec<PlanVariant>, PlanSource)> {
        request.validate()?;

        tracing::info!(
            "📐 Plan request: {} m², {} rooms, style '{}', {} features",
            request.area,
            request.rooms,
            request.style,
            request.features.len()
        );
        if !is_known_style(&request.style) {
            tracing::debug!("Unknown style '{}', using default title", request.style);
        }

        if let Some(generated) = self.try_external(request).await {
            let variants = self.rng.with(|rng| {
                self.builder
                    .build_from_external(request, &generated, rng, &self.ids, Utc::now())
            });
            tracing::info!(
                "✅ Built {} plans from generated room data",
                variants.len()
            );
            return Ok((variants, PlanSource::External));
        }

        let variants = self
            .rng
            .with(|rng| self.builder.build_local(request, rng, &self.ids, Utc::now()));
        tracing::info!("✅ Built {} plans locally", variants.len());
        Ok((variants, PlanSource::Local))
    }

    async fn try_external(&self, request: &PlanRequest) -> Option<GeneratedLayout> {
        if !self.use_image_generator {
            tracing::debug!("Image generator disabled");
            return None;
        }

        match self.generator.generate(request).await {
            Ok(generated) if !generated.rooms.is_empty() => Some(generated),
            Ok(_) => {
                tracing::warn!("⚠️ Image generator returned no rooms, using local generation");
                None
            }
            Err(PlanError::ImageGenerationUnavailable) => {
                tracing::debug!("Image generator unavailable, using local generation");
                None
            }
            Err(e) => {
                tracing::warn!(
                    "⚠️ Image generation failed: {} (Severity: {:?}), using local generation",
                    e,
                    e.severity()
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::placeholder::{PlaceholderImagery, DEFAULT_PLACEHOLDER_BASE_URL};
    use crate::core::styles::Locale;
    use crate::domain::model::{Room, Tier};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct SequentialIds(AtomicUsize);

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> String {
            format!("id-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    enum Behaviour {
        Rooms(Vec<Room>),
        Empty,
        Fail,
        Unavailable,
    }

    struct MockGenerator {
        behaviour: Behaviour,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl ImageGenerator for MockGenerator {
        async fn generate(&self, _request: &PlanRequest) -> Result<GeneratedLayout> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.behaviour {
                Behaviour::Rooms(rooms) => Ok(GeneratedLayout {
                    rooms: rooms.clone(),
                    floor_plan_url: "/static/plans/fp.png".to_string(),
                    render_url: "/static/plans/r.png".to_string(),
                }),
                Behaviour::Empty => Ok(GeneratedLayout {
                    rooms: vec![],
                    floor_plan_url: "/static/plans/fp.png".to_string(),
                    render_url: String::new(),
                }),
                Behaviour::Fail => Err(PlanError::ImageGenerationError {
                    message: "status 503".to_string(),
                }),
                Behaviour::Unavailable => Err(PlanError::ImageGenerationUnavailable),
            }
        }
    }

    fn engine(behaviour: Behaviour) -> (PlanEngine<MockGenerator, SequentialIds>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let generator = MockGenerator {
            behaviour,
            calls: calls.clone(),
        };
        let builder = VariantBuilder::new(
            PlaceholderImagery::new(DEFAULT_PLACEHOLDER_BASE_URL, Locale::En),
            Locale::En,
        );
        let engine = PlanEngine::new(
            generator,
            SequentialIds(AtomicUsize::new(0)),
            builder,
            SharedRng::from_seed_u64(2024),
        );
        (engine, calls)
    }

    fn request() -> PlanRequest {
        PlanRequest {
            area: 70,
            rooms: 3,
            style: "minimalist".to_string(),
            features: vec![],
        }
    }

    fn one_room() -> Vec<Room> {
        vec![Room {
            name: "Living Room".to_string(),
            area: 20.0,
            width: 5.0,
            height: 4.0,
            x: 0.0,
            y: 1.0,
        }]
    }

    #[tokio::test]
    async fn test_uses_external_rooms_when_present() {
        let (engine, calls) = engine(Behaviour::Rooms(one_room()));
        let (variants, source) = engine.generate_with_source(&request()).await.unwrap();

        assert_eq!(source, PlanSource::External);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(variants.len(), 3);
        assert_eq!(variants[0].room_data[0].area, 20.0 * 0.8);
        assert_eq!(variants[2].room_data[0].area, 20.0 * 1.2);
        assert_eq!(variants[1].floor_plan, "/static/plans/fp.png");
    }

    #[tokio::test]
    async fn test_falls_back_on_failure() {
        for behaviour in [Behaviour::Fail, Behaviour::Unavailable, Behaviour::Empty] {
            let (engine, calls) = engine(behaviour);
            let (variants, source) = engine.generate_with_source(&request()).await.unwrap();

            assert_eq!(source, PlanSource::Local);
            assert_eq!(calls.load(Ordering::SeqCst), 1);
            assert_eq!(variants.len(), 3);
            assert!(variants.iter().all(|v| v.room_data.len() == 4));
        }
    }

    #[tokio::test]
    async fn test_disabled_image_generator_skips_generator() {
        let (engine, calls) = engine(Behaviour::Rooms(one_room()));
        let engine = engine.with_image_generator(false);
        let (variants, source) = engine.generate_with_source(&request()).await.unwrap();

        assert_eq!(source, PlanSource::Local);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            variants.iter().map(|v| v.tier).collect::<Vec<_>>(),
            Tier::ALL.to_vec()
        );
    }

    #[tokio::test]
    async fn test_invalid_request_is_rejected_before_generation() {
        let (engine, calls) = engine(Behaviour::Rooms(one_room()));
        let mut req = request();
        req.area = 500;

        let err = engine.generate(&req).await.unwrap_err();
        assert!(matches!(err, PlanError::InvalidRequest { ref field, .. } if field == "area"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_ids_are_unique_across_requests() {
        let (engine, _) = engine(Behaviour::Unavailable);
        let first = engine.generate(&request()).await.unwrap();
        let second = engine.generate(&request()).await.unwrap();

        let mut ids: Vec<String> = first.iter().chain(&second).map(|v| v.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }
}
