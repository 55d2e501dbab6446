use actix_web::{HttpResponse, Responder, get, post, web};
use pushkind_common::domain::auth::AuthenticatedUser;
use serde_json::json;

use crate::config::StorefrontConfig;
use crate::domain::session::Session;
use crate::forms::assistant::{AssistantForm, SuggestionQuery};
use crate::forms::catalog::CatalogQuery;
use crate::forms::community::AddPostForm;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::assistant::{greeting, reply_to_message};
use crate::services::catalog::list_catalog;
use crate::services::community::{create_post, list_recent_posts};
use crate::services::search::search_suggestions;

fn error_body(message: impl Into<String>) -> serde_json::Value {
    json!({ "error": message.into() })
}

#[get("/v1/products")]
/// Return the catalog as JSON, filtered by the same query string as `/products`.
pub async fn api_v1_products(
    params: web::Query<CatalogQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let filter = match params.into_inner().into_filter() {
        Ok(filter) => filter,
        Err(err) => return HttpResponse::BadRequest().json(error_body(err.to_string())),
    };

    match list_catalog(
        repo.get_ref(),
        filter.search.as_deref(),
        filter.sort,
        filter.price_range,
    ) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/community/posts")]
pub async fn api_v1_community_posts(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_recent_posts(repo.get_ref()) {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(err) => {
            log::error!("Failed to list community posts: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/v1/community/posts")]
/// Create a post and return the refreshed feed.
///
/// Anonymous callers receive `401 Unauthorized`, incomplete posts `400 Bad Request`.
pub async fn api_v1_create_community_post(
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddPostForm>,
) -> impl Responder {
    let session = Session::from_identity(user);

    match create_post(repo.get_ref(), &session, form) {
        Ok(posts) => HttpResponse::Created().json(posts),
        Err(ServiceError::Unauthorized) => {
            HttpResponse::Unauthorized().json(error_body("Please sign in to create posts"))
        }
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().json(error_body(message)),
        Err(err) => {
            log::error!("Failed to create community post: {err}");
            HttpResponse::InternalServerError().json(error_body(err.to_string()))
        }
    }
}

#[post("/v1/assistant")]
pub async fn api_v1_assistant(
    repo: web::Data<DieselRepository>,
    storefront_config: web::Data<StorefrontConfig>,
    web::Json(form): web::Json<AssistantForm>,
) -> impl Responder {
    match reply_to_message(
        repo.get_ref(),
        &storefront_config.reply_table,
        storefront_config.assistant_delay,
        form,
    )
    .await
    {
        Ok(exchange) => HttpResponse::Ok().json(exchange),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().json(error_body(message)),
        Err(err) => {
            log::error!("Failed to answer assistant message: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/assistant/greeting")]
pub async fn api_v1_assistant_greeting(
    storefront_config: web::Data<StorefrontConfig>,
) -> impl Responder {
    HttpResponse::Ok().json(greeting(&storefront_config.reply_table))
}

#[get("/v1/search/suggestions")]
pub async fn api_v1_search_suggestions(params: web::Query<SuggestionQuery>) -> impl Responder {
    HttpResponse::Ok().json(search_suggestions(&params.q))
}
