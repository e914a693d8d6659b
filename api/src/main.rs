use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use kp_core::services::activation::ActivationManager;
use kp_core::services::auth::{AuthService, AuthServiceConfig};
use kp_core::services::mail::MailService;
use kp_core::services::session::SessionManager;
use kp_core::services::token::{TokenCodec, TokenCodecConfig};
use kp_infra::{
    DatabasePool, HttpMailService, LoggingMailService, MySqlUserRepository, RedisClient,
    RedisSessionStore,
};
use kp_shared::AppConfig;

mod app;
mod dto;
mod handlers;
mod middleware;
mod routes;

use routes::auth::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Keyport API server");

    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    // Connect to the session store and verify it answers; fail fast if not
    let redis_client = RedisClient::new(config.cache.clone())
        .await
        .map_err(to_io_error)?;
    redis_client.health_check().await.map_err(to_io_error)?;
    let session_store = RedisSessionStore::new(redis_client);

    // Connect to the user directory
    let db_pool = DatabasePool::new(config.database.clone())
        .await
        .map_err(to_io_error)?;
    db_pool.health_check().await.map_err(to_io_error)?;
    let user_repository = MySqlUserRepository::new(db_pool.pool().clone());

    // Mail backend: HTTP provider when credentials are configured,
    // otherwise a logging stub so activation links still show up locally
    let mail_service: Box<dyn MailService> = if config.mail.api_key.is_empty() {
        info!("No mail API key configured; using logging mail stub");
        Box::new(LoggingMailService::new())
    } else {
        Box::new(HttpMailService::new(config.mail.clone()).map_err(to_io_error)?)
    };

    // Wire up the services
    let codec = TokenCodec::new(TokenCodecConfig::from_auth_config(&config.auth));
    let codec_data = web::Data::new(codec);
    let codec_handle: Arc<TokenCodec> = codec_data.clone().into_inner();

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        SessionManager::new(session_store.clone(), codec_handle.clone()),
        ActivationManager::new(session_store, config.auth.activation_ttl_seconds),
        mail_service,
        AuthServiceConfig {
            activation_base_url: config.mail.activation_base_url.clone(),
        },
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        default_fingerprint: config.auth.default_device_fingerprint.clone(),
    });

    info!("Server listening on {}", bind_address);

    let mut server = HttpServer::new(move || app::create_app(app_state.clone(), codec_data.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    let server = server.bind(&bind_address)?.run();

    // actix handles SIGTERM/SIGINT; when run() returns, tear down pools
    let result = server.await;
    db_pool.close().await;
    info!("Keyport API server stopped");

    result
}

fn to_io_error(err: kp_infra::InfrastructureError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
}
