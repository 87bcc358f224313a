use crate::model::id::{ReviewId, SpotId, UserId};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateReview {
    pub spot_id: SpotId,
    pub reviewed_by: UserId,
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Debug, new)]
pub struct UpdateReview {
    pub review_id: ReviewId,
    pub requested_user: UserId,
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

#[derive(Debug, new)]
pub struct DeleteReview {
    pub review_id: ReviewId,
    pub requested_user: UserId,
}
