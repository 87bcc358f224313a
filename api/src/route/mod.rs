pub mod admin;
pub mod auth;
pub mod health;
pub mod parking;
pub mod reviews;

use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(health::build_health_check_routers())
        .merge(auth::build_auth_routers())
        .merge(parking::build_parking_routers())
        .merge(reviews::build_review_routers())
        .merge(admin::build_admin_routers());
    Router::new().nest("/api", router)
}
