use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Author of a chat message.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Product summary attached to an assistant message.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductSnippet {
    pub id: i32,
    pub title: String,
    pub price_cents: i64,
    pub rating: f64,
    pub image_url: String,
    pub affiliate_url: String,
}

impl From<&Product> for ProductSnippet {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price_cents: product.price_cents,
            rating: product.rating,
            image_url: product.image_url.clone(),
            affiliate_url: product.affiliate_url.clone(),
        }
    }
}

/// A single message of the assistant conversation. Never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<ProductSnippet>>,
    pub timestamp: NaiveDateTime,
}

impl ChatMessage {
    /// A message typed by the visitor.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            suggestions: None,
            products: None,
            timestamp: chrono::Utc::now().naive_utc(),
        }
    }

    /// A reply produced by the assistant.
    pub fn assistant(content: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            suggestions: Some(suggestions),
            products: None,
            timestamp: chrono::Utc::now().naive_utc(),
        }
    }

    /// Attach catalog results to the message.
    pub fn with_products(mut self, products: Vec<ProductSnippet>) -> Self {
        self.products = Some(products);
        self
    }
}

/// One `{keywords, response}` entry of a [`ReplyTable`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Rule<T> {
    /// Lower-case substrings; any one of them selects the rule.
    pub keywords: Vec<String>,
    pub response: T,
}

impl<T> Rule<T> {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
    }
}

/// Versioned lookup table driving the scripted assistant.
///
/// Rules are checked in order and the first match wins; the fallback is used
/// when nothing matches.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReplyTable {
    pub version: u32,
    pub greeting: String,
    pub greeting_suggestions: Vec<String>,
    pub quick_actions: Vec<String>,
    pub replies: Vec<Rule<String>>,
    pub fallback_reply: String,
    pub suggestions: Vec<Rule<Vec<String>>>,
    pub fallback_suggestions: Vec<String>,
    /// Keywords that mark a query as a product search.
    pub search_keywords: Vec<String>,
}

/// Words dropped from a forwarded query before it reaches the catalog.
const FILLER_WORDS: &[&str] = &[
    "a", "am", "an", "and", "any", "are", "best", "can", "for", "get", "good", "i", "im", "in",
    "is", "it", "me", "my", "of", "on", "or", "please", "some", "that", "the", "to", "under",
    "over", "what", "whats", "with", "you",
];

/// Outcome of looking a query up in the [`ReplyTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedReply {
    pub content: String,
    pub suggestions: Vec<String>,
    /// Whether the query should also be run against the catalog.
    pub forward_search: bool,
}

impl ReplyTable {
    /// Parse a table from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut table: ReplyTable = serde_json::from_str(json)?;
        table.normalize();
        Ok(table)
    }

    fn normalize(&mut self) {
        let lower = |keywords: &mut Vec<String>| {
            for keyword in keywords.iter_mut() {
                *keyword = keyword.to_lowercase();
            }
        };
        for rule in &mut self.replies {
            lower(&mut rule.keywords);
        }
        for rule in &mut self.suggestions {
            lower(&mut rule.keywords);
        }
        lower(&mut self.search_keywords);
    }

    /// Select the canned reply, suggestions and search flag for `query`.
    pub fn lookup(&self, query: &str) -> ScriptedReply {
        let lowered = query.to_lowercase();

        let content = self
            .replies
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map_or(&self.fallback_reply, |rule| &rule.response)
            .clone();

        let suggestions = self
            .suggestions
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map_or(&self.fallback_suggestions, |rule| &rule.response)
            .clone();

        let forward_search = self
            .search_keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()));

        ScriptedReply {
            content,
            suggestions,
            forward_search,
        }
    }

    /// Catalog search words left in `query` once search keywords, filler
    /// words and bare numbers such as prices are removed.
    ///
    /// A trailing plural `s` is dropped so `laptops` still finds `Laptop`.
    pub fn search_terms(&self, query: &str) -> Vec<String> {
        let keyword_words: Vec<&str> = self
            .search_keywords
            .iter()
            .flat_map(|keyword| keyword.split_whitespace())
            .collect();

        let mut terms: Vec<String> = Vec::new();
        for word in query
            .to_lowercase()
            .split(|ch: char| !ch.is_alphanumeric())
            .filter(|word| !word.is_empty())
        {
            if FILLER_WORDS.contains(&word)
                || keyword_words.contains(&word)
                || word.chars().all(|ch| ch.is_ascii_digit())
            {
                continue;
            }
            let term = match word.strip_suffix('s') {
                Some(stem) if stem.chars().count() > 3 && !stem.ends_with('s') => stem,
                _ => word,
            };
            if !terms.iter().any(|existing| existing == term) {
                terms.push(term.to_string());
            }
        }
        terms
    }

    /// The opening assistant message.
    pub fn greeting_message(&self) -> ChatMessage {
        ChatMessage::assistant(self.greeting.clone(), self.greeting_suggestions.clone())
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

impl Default for ReplyTable {
    fn default() -> Self {
        Self {
            version: 1,
            greeting: "Hi! I'm your AI shopping assistant. I can help you find the perfect products, compare prices, and answer any questions you have. What are you looking for today?".to_string(),
            greeting_suggestions: strings(&[
                "Find me a gaming laptop under $1000",
                "What's the best wireless headphones?",
                "I need a gift for my mom",
                "Show me deals on smart home devices",
            ]),
            quick_actions: strings(&[
                "Show me today's best deals",
                "What's trending now?",
                "Help me find a gift",
            ]),
            replies: vec![
                Rule {
                    keywords: strings(&["laptop", "computer"]),
                    response: "I'd be happy to help you find the perfect laptop! Based on your needs, I can recommend options for gaming, work, or general use. What's your budget range and what will you primarily use it for?".to_string(),
                },
                Rule {
                    keywords: strings(&["headphones", "earbuds"]),
                    response: "Great choice! I can help you find the best headphones. Are you looking for wireless or wired? Do you prefer over-ear, on-ear, or in-ear style? And what's your budget?".to_string(),
                },
                Rule {
                    keywords: strings(&["gift"]),
                    response: "I love helping with gift ideas! Tell me a bit about the person - their age, interests, and your budget. That way I can suggest something they'll really love.".to_string(),
                },
                Rule {
                    keywords: strings(&["deal", "sale", "cheap"]),
                    response: "I'm great at finding deals! I can show you current discounts and price drops. What type of products are you interested in, and what's your target price range?".to_string(),
                },
            ],
            fallback_reply: "I understand you're looking for recommendations. Let me search for the best options based on your needs. Can you provide more details about what you're looking for?".to_string(),
            suggestions: vec![
                Rule {
                    keywords: strings(&["laptop"]),
                    response: strings(&[
                        "Show gaming laptops",
                        "Budget laptops under $500",
                        "Best laptop brands",
                        "Laptops for students",
                    ]),
                },
                Rule {
                    keywords: strings(&["headphones"]),
                    response: strings(&[
                        "Wireless headphones",
                        "Noise-canceling options",
                        "Budget-friendly picks",
                        "Gaming headsets",
                    ]),
                },
            ],
            fallback_suggestions: strings(&[
                "Show me similar products",
                "What's trending now?",
                "Compare prices",
                "Find deals and discounts",
            ]),
            search_keywords: strings(&[
                "find",
                "show",
                "search",
                "looking for",
                "need",
                "want",
                "buy",
            ]),
        }
    }
}
