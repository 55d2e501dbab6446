use serde::Serialize;

/// Headline figure shown on a page.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Entry of the top navigation bar.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavSection {
    /// Key compared against the current page to highlight the entry.
    pub key: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_SECTIONS: [NavSection; 6] = [
    NavSection {
        key: "home",
        label: "Home",
        href: "/",
    },
    NavSection {
        key: "optimizer",
        label: "Optimizer",
        href: "/optimizer",
    },
    NavSection {
        key: "marketplace",
        label: "Marketplace",
        href: "/marketplace",
    },
    NavSection {
        key: "analytics",
        label: "Analytics",
        href: "/analytics",
    },
    NavSection {
        key: "community",
        label: "Community",
        href: "/community",
    },
    NavSection {
        key: "products",
        label: "Products",
        href: "/products",
    },
];

/// Feature blurb of the landing page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// Data required to render the landing page.
#[derive(Debug, Clone, Serialize)]
pub struct HeroPageData {
    pub brand: &'static str,
    pub badge: &'static str,
    pub tagline: &'static str,
    pub highlight: &'static str,
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
}

/// Loads the landing page content.
pub fn load_hero_page() -> HeroPageData {
    HeroPageData {
        brand: "Prathom.AI",
        badge: "BETA",
        tagline: "Transform your ideas into high-performance AI prompts.",
        highlight: "Optimize, Share, Earn",
        features: vec![
            Feature {
                title: "AI-Powered Optimization",
                description: "Generate multiple high-quality prompts optimized for any AI model",
            },
            Feature {
                title: "Marketplace Ready",
                description: "Buy, sell, and share premium prompts in our thriving community",
            },
            Feature {
                title: "Analytics Dashboard",
                description: "Track performance metrics and optimize your prompt success rate",
            },
        ],
        stats: vec![
            Stat {
                value: "10,000+",
                label: "Prompts Generated",
            },
            Stat {
                value: "5,000+",
                label: "Happy Users",
            },
            Stat {
                value: "95%",
                label: "Success Rate",
            },
        ],
    }
}
