use crate::{
    extractor::AuthorizedUser,
    model::admin::{
        ReviewSummariesResponse, SpotSummariesResponse, StatsResponse, UserSummariesResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use kernel::model::id::{ReviewId, SpotId, UserId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

fn require_admin(user: &AuthorizedUser) -> AppResult<()> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    Ok(())
}

pub async fn show_user_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserSummariesResponse>> {
    require_admin(&user)?;

    registry
        .admin_repository()
        .list_users()
        .await
        .map(UserSummariesResponse::from)
        .map(Json)
}

pub async fn show_spot_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpotSummariesResponse>> {
    require_admin(&user)?;

    registry
        .admin_repository()
        .list_spots()
        .await
        .map(SpotSummariesResponse::from)
        .map(Json)
}

pub async fn show_review_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReviewSummariesResponse>> {
    require_admin(&user)?;

    registry
        .admin_repository()
        .list_reviews()
        .await
        .map(ReviewSummariesResponse::from)
        .map(Json)
}

pub async fn show_stats(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<StatsResponse>> {
    require_admin(&user)?;

    registry
        .admin_repository()
        .stats()
        .await
        .map(StatsResponse::from)
        .map(Json)
}

pub async fn delete_user(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;
    if user_id == user.id() {
        return Err(AppError::UnprocessableEntity(
            "cannot delete your own account".into(),
        ));
    }

    registry
        .admin_repository()
        .delete_user(user_id)
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_spot(
    user: AuthorizedUser,
    Path(spot_id): Path<SpotId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;

    registry
        .admin_repository()
        .delete_spot(spot_id)
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_review(
    user: AuthorizedUser,
    Path(review_id): Path<ReviewId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;

    registry
        .admin_repository()
        .delete_review(review_id)
        .await
        .map(|_| StatusCode::OK)
}
