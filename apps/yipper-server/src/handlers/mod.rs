//! HTTP handlers and route configuration.

mod health;
mod yips;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").route("/health", web::get().to(health::health_check)))
        .service(
            web::scope("/yipper")
                .route("/yips", web::get().to(yips::list_yips))
                .route("/user/{user}", web::get().to(yips::user_yips))
                .route("/likes", web::post().to(yips::like_yip))
                .route("/new", web::post().to(yips::new_yip)),
        );
}

#[cfg(test)]
mod tests;
