use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::models::config::CommonServerConfig;
use pushkind_common::routes::{redirect, render_template};
use tera::Tera;

use crate::domain::session::Session;
use crate::forms::community::AddPostForm;
use crate::repository::DieselRepository;
use crate::routes::page_context;
use crate::services::ServiceError;
use crate::services::community::{create_post, load_community_page};

#[get("/community")]
pub async fn show_community(
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<CommonServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_community_page(repo.get_ref()) {
        Ok(data) => {
            let session = Session::from_identity(user);
            let mut context = page_context(
                &flash_messages,
                &session,
                "community",
                &server_config.auth_service_url,
            );
            context.insert("community", &data);
            render_template(&tera, "community/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list community posts: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/community")]
pub async fn add_post(
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddPostForm>,
) -> impl Responder {
    let session = Session::from_identity(user);

    match create_post(repo.get_ref(), &session, form) {
        Ok(_) => {
            FlashMessage::success("Your post has been published.").send();
            redirect("/community")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Please sign in to create posts").send();
            redirect("/community")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/community")
        }
        Err(err) => {
            log::error!("Failed to create community post: {err}");
            FlashMessage::error(err.to_string()).send();
            redirect("/community")
        }
    }
}
