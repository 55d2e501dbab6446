use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::models::config::CommonServerConfig;
use pushkind_common::routes::render_template;
use tera::Tera;

use crate::domain::session::Session;
use crate::routes::page_context;
use crate::services::analytics::load_analytics_page;

#[get("/analytics")]
pub async fn show_analytics(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<CommonServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let session = Session::from_identity(user);
    let mut context = page_context(
        &flash_messages,
        &session,
        "analytics",
        &server_config.auth_service_url,
    );
    context.insert("analytics", &load_analytics_page());
    render_template(&tera, "analytics/index.html", &context)
}
