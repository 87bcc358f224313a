use crate::model::{
    admin::{DashboardStats, ReviewSummary, SpotSummary, UserSummary},
    id::{ReviewId, SpotId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

/// Cross-entity read models and moderation operations for the admin
/// dashboard. Deletions cascade through the store's foreign keys.
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn list_users(&self) -> AppResult<Vec<UserSummary>>;
    async fn list_spots(&self) -> AppResult<Vec<SpotSummary>>;
    async fn list_reviews(&self) -> AppResult<Vec<ReviewSummary>>;
    async fn stats(&self) -> AppResult<DashboardStats>;
    async fn delete_user(&self, user_id: UserId) -> AppResult<()>;
    async fn delete_spot(&self, spot_id: SpotId) -> AppResult<()>;
    async fn delete_review(&self, review_id: ReviewId) -> AppResult<()>;
}
