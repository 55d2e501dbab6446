use serde::Serialize;

/// Key metric card with its trend note.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
}

/// Score of one prompt category, in percent.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryScore {
    pub category: &'static str,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TopPrompt {
    pub name: &'static str,
    pub score: u8,
    pub category: &'static str,
}

/// Visual weight of an activity feed entry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Activity {
    pub action: &'static str,
    pub time: &'static str,
    pub kind: ActivityKind,
}

/// Data required to render the analytics dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsPageData {
    pub metrics: Vec<Metric>,
    pub category_performance: Vec<CategoryScore>,
    pub top_prompts: Vec<TopPrompt>,
    pub recent_activity: Vec<Activity>,
}

pub fn load_analytics_page() -> AnalyticsPageData {
    AnalyticsPageData {
        metrics: vec![
            Metric {
                label: "Total Prompts",
                value: "124",
                trend: "+12% from last week",
            },
            Metric {
                label: "Success Rate",
                value: "94.2%",
                trend: "+3.1% improvement",
            },
            Metric {
                label: "Users Reached",
                value: "2,847",
                trend: "+18% this month",
            },
            Metric {
                label: "Revenue",
                value: "$4,892",
                trend: "+24% from last month",
            },
        ],
        category_performance: vec![
            CategoryScore {
                category: "Marketing",
                score: 92,
            },
            CategoryScore {
                category: "Code Generation",
                score: 87,
            },
            CategoryScore {
                category: "Creative Writing",
                score: 95,
            },
            CategoryScore {
                category: "Image Generation",
                score: 89,
            },
        ],
        top_prompts: vec![
            TopPrompt {
                name: "Email Marketing Master",
                score: 98,
                category: "Marketing",
            },
            TopPrompt {
                name: "React Component Builder",
                score: 96,
                category: "Code",
            },
            TopPrompt {
                name: "SEO Blog Post Creator",
                score: 94,
                category: "Content",
            },
            TopPrompt {
                name: "Character Development",
                score: 93,
                category: "Creative",
            },
        ],
        recent_activity: vec![
            Activity {
                action: "New prompt generated",
                time: "2 minutes ago",
                kind: ActivityKind::Success,
            },
            Activity {
                action: "Prompt sold in marketplace",
                time: "1 hour ago",
                kind: ActivityKind::Warning,
            },
            Activity {
                action: "Analytics report updated",
                time: "3 hours ago",
                kind: ActivityKind::Info,
            },
            Activity {
                action: "User feedback received",
                time: "5 hours ago",
                kind: ActivityKind::Success,
            },
            Activity {
                action: "Performance milestone reached",
                time: "1 day ago",
                kind: ActivityKind::Success,
            },
        ],
    }
}
