use crate::domain::model::Room;
use rand::Rng;

const MIN_ROOM_AREA: f64 = 8.0;
const LIVING_ROOM_MULTIPLIER: f64 = 1.5;
const LIVING_ROOM_GAP: f64 = 1.0;
const BEDROOM_ROW_STEP: f64 = 3.0;

/// Living share used when the service rooms leave nothing of the budget.
pub const MIN_SHARE_AREA: f64 = 4.0;

/// `base + U[0, span)`
#[derive(Debug, Clone, Copy)]
struct Jitter {
    base: f64,
    span: f64,
}

impl Jitter {
    const fn new(base: f64, span: f64) -> Self {
        Self { base, span }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.base + rng.gen::<f64>() * self.span
    }
}

struct ServiceRoom {
    name: &'static str,
    area: Jitter,
    width: Jitter,
}

// 固定順序，同一列由左到右排
const SERVICE_ROOMS: [ServiceRoom; 3] = [
    ServiceRoom {
        name: "Bathroom",
        area: Jitter::new(MIN_ROOM_AREA, 4.0),
        width: Jitter::new(2.0, 1.0),
    },
    ServiceRoom {
        name: "Kitchen",
        area: Jitter::new(MIN_ROOM_AREA, 8.0),
        width: Jitter::new(3.0, 2.0),
    },
    ServiceRoom {
        name: "Hallway",
        area: Jitter::new(MIN_ROOM_AREA, 4.0),
        width: Jitter::new(2.0, 1.0),
    },
];

const LIVING_ROOM_WIDTH: Jitter = Jitter::new(4.0, 2.0);
const BEDROOM_WIDTH: Jitter = Jitter::new(3.5, 1.5);

/// Living room plus bedrooms: `max(rooms - 2, 1)`.
pub fn living_rooms_count(rooms_requested: u32) -> usize {
    rooms_requested.saturating_sub(2).max(1) as usize
}

pub fn expected_room_count(rooms_requested: u32) -> usize {
    SERVICE_ROOMS.len() + living_rooms_count(rooms_requested)
}

/// Procedural room partitioner.
///
/// Produces `[Bathroom, Kitchen, Hallway, Living Room, Bedroom 1, ...]`. The
/// service rooms sit in one row at `y = 0`; the living room starts below the
/// bathroom and bedrooms fill a two-column grid under it.
///
/// The area budget is loose: service rooms are subtracted from
/// `total_area * scale_factor` only to size the living share, and the living
/// room takes 1.5 shares, so the room areas do not sum to the budget.
#[derive(Debug, Default, Clone, Copy)]
pub struct LayoutGenerator;

impl LayoutGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        total_area: f64,
        rooms_requested: u32,
        scale_factor: f64,
        rng: &mut R,
    ) -> Vec<Room> {
        let living_count = living_rooms_count(rooms_requested);
        let mut rooms = Vec::with_capacity(SERVICE_ROOMS.len() + living_count);

        let mut remaining_area = total_area * scale_factor;
        let mut cursor_x = 0.0;

        for service in &SERVICE_ROOMS {
            let area = service.area.sample(rng);
            let width = service.width.sample(rng);
            rooms.push(Room {
                name: service.name.to_string(),
                area,
                width,
                height: area / width,
                x: cursor_x,
                y: 0.0,
            });
            cursor_x += width;
            remaining_area -= area;
        }

        let bathroom_height = rooms[0].height;
        let share = remaining_area / living_count as f64;
        let area_per_room = if share > 0.0 { share } else { MIN_SHARE_AREA };

        let living_area = area_per_room * LIVING_ROOM_MULTIPLIER;
        let living_width = LIVING_ROOM_WIDTH.sample(rng);
        let living_height = living_area / living_width;
        rooms.push(Room {
            name: "Living Room".to_string(),
            area: living_area,
            width: living_width,
            height: living_height,
            x: 0.0,
            y: bathroom_height + LIVING_ROOM_GAP,
        });

        for i in 1..living_count {
            let width = BEDROOM_WIDTH.sample(rng);
            rooms.push(Room {
                name: format!("Bedroom {}", i),
                area: area_per_room,
                width,
                height: area_per_room / width,
                x: living_width * (i % 2) as f64,
                y: bathroom_height + living_height + (i / 2) as f64 * BEDROOM_ROW_STEP,
            });
        }

        tracing::debug!(
            "Generated {} rooms for {:.1} m² at scale {:.1} (share {:.2} m²)",
            rooms.len(),
            total_area,
            scale_factor,
            area_per_room
        );

        rooms
    }
}
