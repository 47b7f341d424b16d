use crate::core::layout::LayoutGenerator;
use crate::core::placeholder::PlaceholderImagery;
use crate::core::styles::{plan_title, Locale};
use crate::domain::model::{GeneratedLayout, PlanRequest, PlanVariant, Room, Tier};
use crate::domain::ports::IdGenerator;
use chrono::{DateTime, Utc};
use rand::Rng;

struct ImageRefs {
    floor_plan: String,
    render_3d: String,
}

/// Assembles the budget / standard / premium variants of one request.
///
/// Two construction paths exist and produce differently shaped rooms:
///
/// * [`build_local`](Self::build_local) re-runs the layout generator once per
///   tier at that tier's scale, so every tier has its own jitter.
/// * [`build_from_external`](Self::build_from_external) takes the single room
///   list supplied by an image-generation backend and multiplies area, width
///   and height by the tier factor, leaving positions alone.
///
/// The external path is used only when the backend returned rooms.
#[derive(Debug, Clone)]
pub struct VariantBuilder {
    layout: LayoutGenerator,
    imagery: PlaceholderImagery,
    locale: Locale,
}

impl VariantBuilder {
    pub fn new(imagery: PlaceholderImagery, locale: Locale) -> Self {
        Self {
            layout: LayoutGenerator::new(),
            imagery,
            locale,
        }
    }

    pub fn build_local<R, I>(
        &self,
        request: &PlanRequest,
        rng: &mut R,
        ids: &I,
        now: DateTime<Utc>,
    ) -> Vec<PlanVariant>
    where
        R: Rng + ?Sized,
        I: IdGenerator + ?Sized,
    {
        Tier::ALL
            .iter()
            .map(|&tier| {
                let rooms = self.layout.generate(
                    f64::from(request.area),
                    request.rooms,
                    tier.scale_factor(),
                    rng,
                );
                let images = ImageRefs {
                    floor_plan: self.imagery.floor_plan_url(url_seed(rng), request),
                    render_3d: self.imagery.render_url(url_seed(rng), request),
                };
                self.assemble(tier, request, ids.next_id(), now, images, rooms)
            })
            .collect()
    }

    pub fn build_from_external<R, I>(
        &self,
        request: &PlanRequest,
        generated: &GeneratedLayout,
        rng: &mut R,
        ids: &I,
        now: DateTime<Utc>,
    ) -> Vec<PlanVariant>
    where
        R: Rng + ?Sized,
        I: IdGenerator + ?Sized,
    {
        let floor_plan = if generated.floor_plan_url.is_empty() {
            self.imagery.floor_plan_url(url_seed(rng), request)
        } else {
            generated.floor_plan_url.clone()
        };
        let render_3d = if generated.render_url.is_empty() {
            self.imagery.render_url(url_seed(rng), request)
        } else {
            generated.render_url.clone()
        };

        Tier::ALL
            .iter()
            .map(|&tier| {
                let rooms = rescale_rooms(&generated.rooms, tier.scale_factor());
                let images = ImageRefs {
                    floor_plan: floor_plan.clone(),
                    render_3d: render_3d.clone(),
                };
                self.assemble(tier, request, ids.next_id(), now, images, rooms)
            })
            .collect()
    }

    fn assemble(
        &self,
        tier: Tier,
        request: &PlanRequest,
        id: String,
        now: DateTime<Utc>,
        images: ImageRefs,
        rooms: Vec<Room>,
    ) -> PlanVariant {
        PlanVariant {
            id,
            tier,
            title: plan_title(self.locale, tier, &request.style),
            area: request.area,
            rooms: request.rooms,
            style: request.style.clone(),
            features: request.features.clone(),
            floor_plan: images.floor_plan,
            render_3d: images.render_3d,
            created_at: now,
            updated_at: now,
            room_data: rooms,
        }
    }
}

/// Uniform rescale of a room list; factor 1.0 is the identity.
pub fn rescale_rooms(rooms: &[Room], factor: f64) -> Vec<Room> {
    rooms.iter().map(|room| room.rescaled(factor)).collect()
}

// 非負 63 位元種子
fn url_seed<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.gen::<u64>() >> 1
}
