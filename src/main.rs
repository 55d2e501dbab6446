use std::env;

use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;
use pushkind_common::db::establish_connection_pool;
use pushkind_common::models::config::CommonServerConfig;
use tera::Tera;

use pushkind_storefront::config::StorefrontConfig;
use pushkind_storefront::repository::DieselRepository;
use pushkind_storefront::routes::analytics::show_analytics;
use pushkind_storefront::routes::api::{
    api_v1_assistant, api_v1_assistant_greeting, api_v1_community_posts,
    api_v1_create_community_post, api_v1_products, api_v1_search_suggestions,
};
use pushkind_storefront::routes::community::{add_post, show_community};
use pushkind_storefront::routes::main::{logout, show_index};
use pushkind_storefront::routes::marketplace::show_marketplace;
use pushkind_storefront::routes::optimizer::{optimize_prompt, show_optimizer};
use pushkind_storefront::routes::products::show_products;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret = env::var("SECRET_KEY");
    let secret_key = match &secret {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => Key::generate(),
    };

    let auth_service_url = env::var("AUTH_SERVICE_URL");
    let auth_service_url = match auth_service_url {
        Ok(auth_service_url) => auth_service_url,
        Err(_) => {
            log::error!("AUTH_SERVICE_URL environment variable not set");
            std::process::exit(1);
        }
    };

    let common_config = CommonServerConfig {
        secret: secret.unwrap_or_default(),
        auth_service_url,
    };

    let storefront_config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid storefront configuration: {e}");
            std::process::exit(1);
        }
    };

    let domain = env::var("DOMAIN").unwrap_or("localhost".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    log::info!("Starting storefront on {address}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{domain}")))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(
                web::scope("/api")
                    .service(api_v1_products)
                    .service(api_v1_community_posts)
                    .service(api_v1_create_community_post)
                    .service(api_v1_assistant)
                    .service(api_v1_assistant_greeting)
                    .service(api_v1_search_suggestions),
            )
            .service(show_index)
            .service(show_products)
            .service(show_optimizer)
            .service(optimize_prompt)
            .service(show_marketplace)
            .service(show_analytics)
            .service(show_community)
            .service(add_post)
            .service(logout)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(common_config.clone()))
            .app_data(web::Data::new(storefront_config.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
