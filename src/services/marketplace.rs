use serde::Serialize;

use crate::services::main::Stat;

/// Prompt offered for sale in the marketplace.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PromptListing {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Price in whole dollars.
    pub price: u32,
    pub rating: f64,
    pub downloads: u32,
    pub category: &'static str,
    pub featured: bool,
}

pub const LISTINGS: [PromptListing; 4] = [
    PromptListing {
        id: 1,
        title: "Ultimate Marketing Copy Generator",
        description: "Convert any product into compelling marketing copy that sells",
        price: 29,
        rating: 4.9,
        downloads: 1240,
        category: "Marketing",
        featured: true,
    },
    PromptListing {
        id: 2,
        title: "Code Documentation Master",
        description: "Generate comprehensive documentation for any codebase",
        price: 19,
        rating: 4.8,
        downloads: 890,
        category: "Development",
        featured: false,
    },
    PromptListing {
        id: 3,
        title: "Creative Story Generator",
        description: "Craft engaging stories with complex characters and plots",
        price: 24,
        rating: 4.7,
        downloads: 567,
        category: "Creative",
        featured: true,
    },
    PromptListing {
        id: 4,
        title: "SEO Content Optimizer",
        description: "Create SEO-optimized content that ranks on Google",
        price: 34,
        rating: 4.9,
        downloads: 2100,
        category: "SEO",
        featured: false,
    },
];

/// Data required to render the marketplace template.
#[derive(Debug, Clone, Serialize)]
pub struct MarketplacePageData {
    pub stats: Vec<Stat>,
    pub featured: Vec<PromptListing>,
    pub listings: Vec<PromptListing>,
}

pub fn load_marketplace_page() -> MarketplacePageData {
    MarketplacePageData {
        stats: vec![
            Stat {
                value: "$125K+",
                label: "Total Sales",
            },
            Stat {
                value: "15,000+",
                label: "Downloads",
            },
            Stat {
                value: "4.8",
                label: "Avg Rating",
            },
            Stat {
                value: "89%",
                label: "Satisfaction",
            },
        ],
        featured: LISTINGS
            .iter()
            .copied()
            .filter(|listing| listing.featured)
            .collect(),
        listings: LISTINGS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_section_contains_only_featured_listings() {
        let data = load_marketplace_page();

        let titles: Vec<&str> = data.featured.iter().map(|listing| listing.title).collect();
        assert_eq!(
            titles,
            vec!["Ultimate Marketing Copy Generator", "Creative Story Generator"]
        );
        assert_eq!(data.listings.len(), 4);
        assert_eq!(data.stats.len(), 4);
    }
}
