use std::time::Duration;

use serde::Serialize;

use crate::domain::assistant::{ChatMessage, ProductSnippet, ReplyTable};
use crate::domain::product::ProductListQuery;
use crate::forms::assistant::{AssistantForm, AssistantFormError};
use crate::repository::ProductReader;
use crate::services::{ServiceError, ServiceResult};
use crate::tasks::ScheduledTask;

/// Maximum number of catalog items attached to a reply.
pub const ASSISTANT_PRODUCT_LIMIT: usize = 4;

/// One round of the assistant conversation.
#[derive(Debug, Clone, Serialize)]
pub struct AssistantExchange {
    /// Echo of the visitor message.
    pub message: ChatMessage,
    pub reply: ChatMessage,
}

/// Opening message and quick actions shown when the chat is opened.
#[derive(Debug, Clone, Serialize)]
pub struct AssistantGreeting {
    pub message: ChatMessage,
    pub quick_actions: Vec<String>,
}

pub fn greeting(table: &ReplyTable) -> AssistantGreeting {
    AssistantGreeting {
        message: table.greeting_message(),
        quick_actions: table.quick_actions.clone(),
    }
}

/// Produce the scripted reply to `form` once `delay` has elapsed.
///
/// Queries containing a search keyword are also run against the catalog and
/// the products matching any of their remaining words are attached to the
/// reply.
pub async fn reply_to_message<R>(
    repo: &R,
    table: &ReplyTable,
    delay: Duration,
    form: AssistantForm,
) -> ServiceResult<AssistantExchange>
where
    R: ProductReader + ?Sized,
{
    let text = form.into_message().map_err(|err| match err {
        AssistantFormError::EmptyMessage => ServiceError::Form("Please type a message".to_string()),
        other => ServiceError::Form(other.to_string()),
    })?;

    let message = ChatMessage::user(text.clone());
    let scripted = table.lookup(&text);
    let forward_search = scripted.forward_search;

    let task = ScheduledTask::schedule(delay, move || {
        ChatMessage::assistant(scripted.content, scripted.suggestions)
    });

    let mut reply = task.await.map_err(|err| {
        log::error!("Assistant reply timer failed: {err}");
        ServiceError::from(err)
    })?;

    if forward_search {
        let terms = table.search_terms(&text);
        if terms.is_empty() {
            log::debug!("Assistant query `{text}` has no catalog terms");
        } else {
            let query = ProductListQuery::new()
                .any_terms(terms)
                .limit(ASSISTANT_PRODUCT_LIMIT);
            let products = repo.list_products(query).map_err(ServiceError::from)?;
            log::debug!(
                "Assistant search for `{text}` matched {} products",
                products.len()
            );
            reply = reply.with_products(products.iter().map(ProductSnippet::from).collect());
        }
    }

    Ok(AssistantExchange { message, reply })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    use crate::domain::assistant::ChatRole;
    use crate::domain::product::Product;
    use crate::repository::mock::MockProductReader;

    fn headphones() -> Product {
        Product {
            id: 2,
            asin: "B0QUIETWAV".to_string(),
            title: "QuietWave Wireless Headphones".to_string(),
            description: None,
            price_cents: 27_999,
            original_price_cents: None,
            discount_percentage: None,
            image_url: "https://example.com/headphones.jpg".to_string(),
            category: "Electronics".to_string(),
            brand: "QuietWave".to_string(),
            rating: 4.7,
            review_count: 18_923,
            features: Vec::new(),
            affiliate_url: "https://www.amazon.com/dp/B0QUIETWAV?tag=prathom-20".to_string(),
            availability: true,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn form(message: &str) -> AssistantForm {
        AssistantForm {
            message: message.to_string(),
        }
    }

    #[actix_web::test]
    async fn plain_question_gets_scripted_reply_without_search() {
        let repo = MockProductReader::new();
        let table = ReplyTable::default();

        let exchange = reply_to_message(&repo, &table, Duration::ZERO, form("Any gift ideas?"))
            .await
            .expect("expected reply");

        assert_eq!(exchange.message.role, ChatRole::User);
        assert_eq!(exchange.message.content, "Any gift ideas?");
        assert_eq!(exchange.reply.role, ChatRole::Assistant);
        assert!(exchange.reply.content.starts_with("I love helping with gift ideas!"));
        assert_eq!(
            exchange.reply.suggestions.as_deref(),
            Some(table.fallback_suggestions.as_slice())
        );
        assert!(exchange.reply.products.is_none());
    }

    #[actix_web::test]
    async fn search_keyword_forwards_query_to_catalog() {
        let mut repo = MockProductReader::new();
        repo.expect_list_products()
            .times(1)
            .withf(|query| {
                query.search.is_none()
                    && query.any_terms == vec!["headphone".to_string()]
                    && query.limit == Some(ASSISTANT_PRODUCT_LIMIT)
            })
            .returning(|_| Ok(vec![headphones()]));
        let table = ReplyTable::default();

        let exchange = reply_to_message(&repo, &table, Duration::ZERO, form(" show me  headphones "))
            .await
            .expect("expected reply");

        assert!(exchange.reply.content.starts_with("Great choice!"));
        let products = exchange.reply.products.expect("expected products");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "QuietWave Wireless Headphones");
    }

    #[actix_web::test]
    async fn search_keyword_alone_skips_catalog() {
        let repo = MockProductReader::new();
        let table = ReplyTable::default();

        let exchange = reply_to_message(&repo, &table, Duration::ZERO, form("show me"))
            .await
            .expect("expected reply");

        assert!(exchange.reply.products.is_none());
    }

    #[actix_web::test]
    async fn blank_message_is_rejected_without_reply() {
        let repo = MockProductReader::new();
        let table = ReplyTable::default();

        let result = reply_to_message(&repo, &table, Duration::ZERO, form("  \t ")).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn greeting_includes_quick_actions() {
        let data = greeting(&ReplyTable::default());

        assert_eq!(data.message.role, ChatRole::Assistant);
        assert_eq!(data.quick_actions[0], "Show me today's best deals");
    }
}
