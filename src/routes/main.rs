use actix_identity::Identity;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::models::config::CommonServerConfig;
use pushkind_common::routes::{redirect, render_template};
use tera::Tera;

use crate::domain::session::Session;
use crate::routes::page_context;
use crate::services::main::load_hero_page;

#[get("/")]
pub async fn show_index(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<CommonServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let session = Session::from_identity(user);
    let mut context = page_context(
        &flash_messages,
        &session,
        "home",
        &server_config.auth_service_url,
    );
    context.insert("hero", &load_hero_page());
    render_template(&tera, "main/index.html", &context)
}

#[post("/logout")]
pub async fn logout(identity: Option<Identity>, user: Option<AuthenticatedUser>) -> impl Responder {
    let session = Session::from_identity(user).sign_out();

    if let Some(identity) = identity {
        identity.logout();
    }

    if matches!(session, Session::SignedOut) {
        FlashMessage::info("You have been signed out.").send();
    }
    redirect("/")
}
