//! Static dashboard configuration: life-area links and workflow cards.
//!
//! DESIGN
//! ======
//! Both lists are compiled in. The home page renders them as-is on every view;
//! nothing here is mutated at runtime.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// A destination card on the home grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardLink {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

/// The life areas shown on the home page, in display order.
pub const DASHBOARD_LINKS: &[DashboardLink] = &[
    DashboardLink {
        title: "Fitness",
        description: "Track your workouts and health metrics",
        icon: "💪",
        href: "/fitness",
    },
    DashboardLink {
        title: "Social Media",
        description: "Manage your Instagram and social presence",
        icon: "📱",
        href: "/social",
    },
    DashboardLink {
        title: "Calendar",
        description: "View and manage your schedule",
        icon: "📅",
        href: "/calendar",
    },
    DashboardLink {
        title: "Books",
        description: "Track your reading list and progress",
        icon: "📚",
        href: "/books",
    },
    DashboardLink {
        title: "Weather",
        description: "Check current weather and forecasts",
        icon: "🌤️",
        href: "/weather",
    },
    DashboardLink {
        title: "Finance",
        description: "Monitor your personal finances",
        icon: "💰",
        href: "/finance",
    },
    DashboardLink {
        title: "Learning",
        description: "Track your Udemy courses and progress",
        icon: "🎓",
        href: "/learning",
    },
    DashboardLink {
        title: "Projects",
        description: "Monitor your GitHub repositories",
        icon: "💻",
        href: "/projects",
    },
    DashboardLink {
        title: "Entertainment",
        description: "Manage your music and YouTube content",
        icon: "🎵",
        href: "/entertainment",
    },
];

/// A workflow the assistant section can start with one click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkflowCard {
    /// Identifier passed to the workflow runner's webhook.
    pub workflow_id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const DASHBOARD_WORKFLOWS: &[WorkflowCard] = &[WorkflowCard {
    workflow_id: "daily-briefing",
    title: "Daily Briefing",
    description: "Collect today's calendar, weather and news into one summary",
}];
