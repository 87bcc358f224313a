use crate::{
    extractor::AuthorizedUser,
    model::spot::{
        CreateSpotRequest, CreateSpotRequestWithUser, PaginatedSpotResponse, SpotListQuery,
        SpotResponse, UpdateSpotRequest, UpdateSpotRequestWithIds,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::SpotId, spot::event::DeleteSpot};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_spot(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateSpotRequest>,
) -> Result<StatusCode, AppError> {
    req.validate(&())?;

    registry
        .spot_repository()
        .create(CreateSpotRequestWithUser::new(req, user.id()).into())
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn show_spot_list(
    Query(query): Query<SpotListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PaginatedSpotResponse>> {
    query.validate(&())?;

    registry
        .spot_repository()
        .find_all(query.into())
        .await
        .map(PaginatedSpotResponse::from)
        .map(Json)
}

pub async fn show_spot(
    Path(spot_id): Path<SpotId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpotResponse>> {
    registry
        .spot_repository()
        .find_by_id(spot_id)
        .await
        .and_then(|spot| match spot {
            Some(spot) => Ok(Json(spot.into())),
            None => Err(AppError::EntityNotFound("parking spot not found".into())),
        })
}

pub async fn update_spot(
    user: AuthorizedUser,
    Path(spot_id): Path<SpotId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateSpotRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update_spot = UpdateSpotRequestWithIds::new(spot_id, user.id(), req);
    registry
        .spot_repository()
        .update_location(update_spot.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_spot(
    user: AuthorizedUser,
    Path(spot_id): Path<SpotId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let delete_spot = DeleteSpot::new(spot_id, user.id());
    registry
        .spot_repository()
        .delete(delete_spot)
        .await
        .map(|_| StatusCode::OK)
}
