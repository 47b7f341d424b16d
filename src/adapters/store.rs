use crate::core::{IdGenerator, PlanStore, PlanVariant};
use crate::utils::error::Result;
use chrono::Utc;

/// Plan "persistence" without a backing store.
///
/// `save` hands the plan back with a fresh id and timestamps; `list` is always
/// empty. Nothing is kept between calls.
#[derive(Debug, Clone, Default)]
pub struct EchoPlanStore<I: IdGenerator> {
    ids: I,
}

impl<I: IdGenerator> EchoPlanStore<I> {
    pub fn new(ids: I) -> Self {
        Self { ids }
    }
}

impl<I: IdGenerator> PlanStore for EchoPlanStore<I> {
    async fn save(&self, mut plan: PlanVariant) -> Result<PlanVariant> {
        let now = Utc::now();
        plan.id = self.ids.next_id();
        plan.created_at = now;
        plan.updated_at = now;
        tracing::debug!("Echoing saved plan {}", plan.id);
        Ok(plan)
    }

    async fn list(&self) -> Result<Vec<PlanVariant>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ids::UuidGenerator;
    use crate::core::{Room, Tier};
    use chrono::{DateTime, TimeZone};

    fn plan(created_at: DateTime<Utc>) -> PlanVariant {
        PlanVariant {
            id: "client-id".to_string(),
            tier: Tier::Premium,
            title: "Premium Loft".to_string(),
            area: 120,
            rooms: 4,
            style: "loft".to_string(),
            features: vec!["fireplace".to_string()],
            floor_plan: "https://placehold.co/fp".to_string(),
            render_3d: "https://placehold.co/r".to_string(),
            created_at,
            updated_at: created_at,
            room_data: vec![Room {
                name: "Kitchen".to_string(),
                area: 12.0,
                width: 4.0,
                height: 3.0,
                x: 2.5,
                y: 0.0,
            }],
        }
    }

    #[tokio::test]
    async fn test_save_echoes_with_new_identity() {
        let store = EchoPlanStore::new(UuidGenerator);
        let old = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let input = plan(old);

        let saved = store.save(input.clone()).await.unwrap();

        assert_ne!(saved.id, input.id);
        assert!(saved.created_at > old);
        assert_eq!(saved.created_at, saved.updated_at);
        assert_eq!(saved.title, input.title);
        assert_eq!(saved.features, input.features);
        assert_eq!(saved.room_data, input.room_data);
    }

    #[tokio::test]
    async fn test_list_is_empty_even_after_save() {
        let store = EchoPlanStore::new(UuidGenerator);
        store.save(plan(Utc::now())).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}
