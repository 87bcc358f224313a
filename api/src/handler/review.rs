use crate::{
    extractor::AuthorizedUser,
    model::review::{
        CreateReviewRequest, CreateReviewRequestWithUser, RatingSummaryResponse, ReviewResponse,
        ReviewsResponse, UpdateReviewRequest, UpdateReviewRequestWithIds, UserReviewsResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::{ReviewId, SpotId},
    review::event::DeleteReview,
};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn create_review(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReviewRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    registry
        .review_repository()
        .create(CreateReviewRequestWithUser::new(req, user.id()).into())
        .await
        .map(ReviewResponse::from)
        .map(|review| (StatusCode::CREATED, Json(review)))
}

pub async fn show_spot_reviews(
    Path(spot_id): Path<SpotId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReviewsResponse>> {
    registry
        .review_repository()
        .find_by_spot_id(spot_id)
        .await
        .map(ReviewsResponse::from)
        .map(Json)
}

pub async fn show_spot_rating(
    Path(spot_id): Path<SpotId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RatingSummaryResponse>> {
    registry
        .review_repository()
        .rating_summary(spot_id)
        .await
        .map(RatingSummaryResponse::from)
        .map(Json)
}

pub async fn update_review(
    user: AuthorizedUser,
    Path(review_id): Path<ReviewId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateReviewRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update_review = UpdateReviewRequestWithIds::new(review_id, user.id(), req);
    registry
        .review_repository()
        .update(update_review.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_review(
    user: AuthorizedUser,
    Path(review_id): Path<ReviewId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .review_repository()
        .delete(DeleteReview::new(review_id, user.id()))
        .await
        .map(|_| StatusCode::OK)
}

pub async fn show_my_reviews(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserReviewsResponse>> {
    registry
        .review_repository()
        .find_by_user_id(user.id())
        .await
        .map(UserReviewsResponse::from)
        .map(Json)
}
