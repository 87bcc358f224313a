use crate::model::{
    id::{SpotId, UserId},
    review::{
        event::{CreateReview, DeleteReview, UpdateReview},
        Review, SpotRatingSummary, UserReview,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, event: CreateReview) -> AppResult<Review>;
    async fn find_by_spot_id(&self, spot_id: SpotId) -> AppResult<Vec<Review>>;
    async fn rating_summary(&self, spot_id: SpotId) -> AppResult<SpotRatingSummary>;
    async fn update(&self, event: UpdateReview) -> AppResult<()>;
    async fn delete(&self, event: DeleteReview) -> AppResult<()>;
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<UserReview>>;
}
