use crate::model::{
    id::SpotId,
    list::PaginatedList,
    spot::{
        event::{CreateSpot, DeleteSpot, SpotListOptions, UpdateSpotLocation},
        Spot,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait SpotRepository: Send + Sync {
    async fn create(&self, event: CreateSpot) -> AppResult<()>;
    async fn find_all(&self, options: SpotListOptions) -> AppResult<PaginatedList<Spot>>;
    async fn find_by_id(&self, spot_id: SpotId) -> AppResult<Option<Spot>>;
    async fn update_location(&self, event: UpdateSpotLocation) -> AppResult<()>;
    async fn delete(&self, event: DeleteSpot) -> AppResult<()>;
}
