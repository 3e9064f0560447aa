use serde::{Deserialize, Serialize};

/// Content width of the dashboard shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLayout {
    #[default]
    Wide,
    Narrow,
}

/// Static page chrome, read once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub layout: PageLayout,
    /// Browser tab title
    #[serde(default = "default_page_title")]
    pub page_title: String,
    pub title: String,
    /// Banner image URL shown under the title
    #[serde(default)]
    pub banner_image: Option<String>,
}

fn default_page_title() -> String {
    "Shopping Cart EDA".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            layout: PageLayout::Wide,
            page_title: default_page_title(),
            title: "Shopping Cart Exploratory Data Analysis".to_string(),
            banner_image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default() {
        let config: UiConfig = serde_json::from_str(r#"{"title":"Orders"}"#).unwrap();
        assert_eq!(config.layout, PageLayout::Wide);
        assert_eq!(config.page_title, "Shopping Cart EDA");
        assert_eq!(config.banner_image, None);
    }

    #[test]
    fn test_layout_is_lowercase() {
        let config: UiConfig =
            serde_json::from_str(r#"{"layout":"narrow","title":"Orders"}"#).unwrap();
        assert_eq!(config.layout, PageLayout::Narrow);
        assert_eq!(serde_json::to_string(&PageLayout::Wide).unwrap(), "\"wide\"");
    }
}
