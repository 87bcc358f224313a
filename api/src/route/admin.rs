use axum::{
    routing::{delete, get},
    Router,
};
use registry::AppRegistry;

use crate::handler::admin::{
    delete_review, delete_spot, delete_user, show_review_list, show_spot_list, show_stats,
    show_user_list,
};

pub fn build_admin_routers() -> Router<AppRegistry> {
    let admin_routers = Router::new()
        .route("/users", get(show_user_list))
        .route("/users/:user_id", delete(delete_user))
        .route("/parking-spots", get(show_spot_list))
        .route("/parking-spots/:spot_id", delete(delete_spot))
        .route("/reviews", get(show_review_list))
        .route("/reviews/:review_id", delete(delete_review))
        .route("/stats", get(show_stats));

    Router::new().nest("/admin", admin_routers)
}
