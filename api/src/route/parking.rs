use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{
    cancel_reservation, reserve_spot, show_my_reservations, show_reservation_history,
};
use crate::handler::spot::{delete_spot, register_spot, show_spot, show_spot_list, update_spot};

pub fn build_parking_routers() -> Router<AppRegistry> {
    let parking_routers = Router::new()
        .route("/", post(register_spot))
        .route("/", get(show_spot_list))
        .route("/user/my-reservations", get(show_my_reservations))
        .route("/:spot_id", get(show_spot))
        .route("/:spot_id", put(update_spot))
        .route("/:spot_id", delete(delete_spot))
        .route("/:spot_id/reserve", post(reserve_spot))
        .route("/:spot_id/reserve", delete(cancel_reservation))
        .route("/:spot_id/reservations", get(show_reservation_history));

    Router::new().nest("/parking", parking_routers)
}
