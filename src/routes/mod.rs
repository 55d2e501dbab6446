use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::Context;

use crate::domain::session::Session;
use crate::services::main::NAV_SECTIONS;

pub mod analytics;
pub mod api;
pub mod community;
pub mod main;
pub mod marketplace;
pub mod optimizer;
pub mod products;

#[derive(Serialize)]
struct Alert<'a> {
    level: &'static str,
    content: &'a str,
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::Debug => "debug",
        Level::Info => "info",
        Level::Success => "success",
        Level::Warning => "warning",
        Level::Error => "danger",
    }
}

/// Context shared by every page: alerts, navigation and the visitor session.
///
/// Unlike `pushkind_common::routes::base_context` this works for anonymous visitors.
pub fn page_context(
    flash_messages: &IncomingFlashMessages,
    session: &Session,
    current_page: &str,
    auth_service_url: &str,
) -> Context {
    let alerts: Vec<Alert> = flash_messages
        .iter()
        .map(|message| Alert {
            level: level_name(message.level()),
            content: message.content(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("session", &session.view());
    context.insert("current_page", current_page);
    context.insert("navigation", &NAV_SECTIONS);
    context.insert("auth_service_url", auth_service_url);
    context
}
