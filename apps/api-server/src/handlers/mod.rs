//! HTTP handlers and route configuration.

mod auth;
mod files;
mod health;
mod users;


use actix_web::web;

use crate::middleware::{AppError, AuthGate};

/// Configure all application routes. Everything under `/users` sits
/// behind the authentication gate; `/login` and `/health` are public.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/login", web::post().to(auth::login))
        .service(
            web::scope("/users")
                .wrap(AuthGate)
                .app_data(web::JsonConfig::default().error_handler(|err, _| {
                    AppError::BadRequest(err.to_string()).into()
                }))
                .route("", web::get().to(users::list_users))
                .route("", web::post().to(users::create_user))
                .service(
                    web::resource("/{id}")
                        // Malformed update bodies surface as 500, not
                        // 400; legacy behavior, preserved on purpose.
                        .app_data(web::JsonConfig::default().error_handler(|err, _| {
                            AppError::Internal(err.to_string()).into()
                        }))
                        .route(web::get().to(users::get_user))
                        .route(web::put().to(users::update_user))
                        .route(web::delete().to(users::delete_user)),
                )
                .service(
                    web::resource("/{id}/files")
                        .route(web::get().to(files::get_files))
                        .route(web::post().to(files::add_file))
                        .route(web::delete().to(files::clear_files)),
                ),
        );
}
