use serde::{Deserialize, Serialize};

/// Pages reachable from the sidebar selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Home,
    KpiDashboard,
    MarketingReport,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::KpiDashboard, Page::MarketingReport];

    /// Stable key used as the selector value
    pub fn key(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::KpiDashboard => "kpi_dashboard",
            Page::MarketingReport => "marketing_report",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::KpiDashboard => "KPI's Dashboard",
            Page::MarketingReport => "Marketing Report",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_key_lookup() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key("settings"), None);
    }
}
