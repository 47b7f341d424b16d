use crate::domain::model::{GeneratedLayout, PlanRequest, PlanVariant};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Text-to-image backend that may also supply a base room list.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: &PlanRequest) -> Result<GeneratedLayout>;
}

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

pub trait PlanStore: Send + Sync {
    fn save(
        &self,
        plan: PlanVariant,
    ) -> impl std::future::Future<Output = Result<PlanVariant>> + Send;
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<PlanVariant>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn seed(&self) -> Option<u64>;
    fn locale(&self) -> &str;
    fn placeholder_base_url(&self) -> &str;
    fn use_image_generator(&self) -> bool;
}
