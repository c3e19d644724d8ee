pub mod auth;
pub mod health;
pub mod tasks;

use actix_web::web;

use crate::auth::{AuthGuard, TokenService};

/// Mounts the API routes. The auth scope stays public; the task scope is
/// wrapped with the bearer-token guard, which needs the token service.
pub fn config(tokens: TokenService) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.service(
            web::scope("/auth")
                .service(auth::login)
                .service(auth::register),
        )
        .service(
            web::scope("/tasks")
                .wrap(AuthGuard::new(tokens))
                .service(tasks::get_tasks)
                .service(tasks::create_task)
                .service(tasks::update_task)
                .service(tasks::delete_task),
        );
    }
}
