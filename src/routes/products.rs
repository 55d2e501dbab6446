use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::models::config::CommonServerConfig;
use pushkind_common::routes::{redirect, render_template};
use tera::Tera;

use crate::domain::session::Session;
use crate::forms::catalog::CatalogQuery;
use crate::repository::DieselRepository;
use crate::routes::page_context;
use crate::services::catalog::load_catalog_page;

#[get("/products")]
pub async fn show_products(
    params: web::Query<CatalogQuery>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<CommonServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let filter = match params.into_inner().into_filter() {
        Ok(filter) => filter,
        Err(err) => {
            FlashMessage::error(format!("Price filter ignored: {err}")).send();
            return redirect("/products");
        }
    };

    match load_catalog_page(repo.get_ref(), filter) {
        Ok(data) => {
            let session = Session::from_identity(user);
            let mut context = page_context(
                &flash_messages,
                &session,
                "products",
                &server_config.auth_service_url,
            );
            context.insert("catalog", &data);
            render_template(&tera, "products/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
