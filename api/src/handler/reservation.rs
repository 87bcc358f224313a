use crate::{
    extractor::AuthorizedUser,
    model::reservation::{CancelReservationResponse, ReservationResponse, ReservationsResponse},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use kernel::model::{
    id::SpotId,
    reservation::event::{CancelReservation, ReserveSpot},
};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn reserve_spot(
    user: AuthorizedUser,
    Path(spot_id): Path<SpotId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .reservation_repository()
        .reserve(ReserveSpot::new(spot_id, user.id()))
        .await
        .map(ReservationResponse::from)
        .map(|reservation| (StatusCode::CREATED, Json(reservation)))
}

pub async fn cancel_reservation(
    user: AuthorizedUser,
    Path(spot_id): Path<SpotId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CancelReservationResponse>> {
    registry
        .reservation_repository()
        .cancel(CancelReservation::new(spot_id, user.id()))
        .await
        .map(|reservation_id| Json(CancelReservationResponse { reservation_id }))
}

pub async fn show_reservation_history(
    _user: AuthorizedUser,
    Path(spot_id): Path<SpotId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_history_by_spot_id(spot_id)
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

pub async fn show_my_reservations(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_all_by_user_id(user.id())
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}
