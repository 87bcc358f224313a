use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::review::{
    create_review, delete_review, show_my_reviews, show_spot_rating, show_spot_reviews,
    update_review,
};

pub fn build_review_routers() -> Router<AppRegistry> {
    let review_routers = Router::new()
        .route("/", post(create_review))
        .route("/spot/:spot_id", get(show_spot_reviews))
        .route("/spot/:spot_id/average", get(show_spot_rating))
        .route("/user/my-reviews", get(show_my_reviews))
        .route("/:review_id", put(update_review))
        .route("/:review_id", delete(delete_review));

    Router::new().nest("/reviews", review_routers)
}
