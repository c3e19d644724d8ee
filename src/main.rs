use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;

use tasklane::auth::{AuthService, TokenService};
use tasklane::config::Config;
use tasklane::repository::{PgTaskStore, PgUserStore};
use tasklane::routes;
use tasklane::tasks::TaskService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    // Required variables (DATABASE_URL, JWT_SECRET) abort startup here if
    // absent; nothing below reads the environment again.
    let config = Config::from_env();

    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let tokens = TokenService::new(&config.jwt_secret);
    let auth_service = web::Data::new(AuthService::new(
        Arc::new(PgUserStore::new(pool.clone())),
        tokens.clone(),
    ));
    let task_service = web::Data::new(TaskService::new(Arc::new(PgTaskStore::new(pool.clone()))));

    log::info!("Starting Tasklane server at {}", config.server_url());
    let bind_addr = (config.server_host.clone(), config.server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(auth_service.clone())
            .app_data(task_service.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .service(web::scope("/api").configure(routes::config(tokens.clone())))
    })
    .bind(bind_addr)?
    .run()
    .await
}
