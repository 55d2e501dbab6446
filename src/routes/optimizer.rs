use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::models::config::CommonServerConfig;
use pushkind_common::routes::{redirect, render_template};
use tera::Tera;

use crate::config::StorefrontConfig;
use crate::domain::session::Session;
use crate::forms::optimizer::OptimizerForm;
use crate::routes::page_context;
use crate::services::ServiceError;
use crate::services::optimizer::{OptimizerPageData, run_optimizer};

#[get("/optimizer")]
pub async fn show_optimizer(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<CommonServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let session = Session::from_identity(user);
    let mut context = page_context(
        &flash_messages,
        &session,
        "optimizer",
        &server_config.auth_service_url,
    );
    context.insert("optimizer", &OptimizerPageData::blank());
    render_template(&tera, "optimizer/index.html", &context)
}

#[post("/optimizer")]
pub async fn optimize_prompt(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<CommonServerConfig>,
    storefront_config: web::Data<StorefrontConfig>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<OptimizerForm>,
) -> impl Responder {
    match run_optimizer(form, storefront_config.optimizer_delay).await {
        Ok(data) => {
            let session = Session::from_identity(user);
            let mut context = page_context(
                &flash_messages,
                &session,
                "optimizer",
                &server_config.auth_service_url,
            );
            context.insert("optimizer", &data);
            render_template(&tera, "optimizer/index.html", &context)
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/optimizer")
        }
        Err(err) => {
            log::error!("Failed to optimize prompt: {err}");
            FlashMessage::error("Could not generate prompts.").send();
            redirect("/optimizer")
        }
    }
}
