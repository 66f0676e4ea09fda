use crate::domain::logging::LogLevel;

pub const DEFAULT_BASE_URL: &str = "https://www.apitite.net";
pub const DEFAULT_TEMPLATE: &str = "webinar-template";
pub const DEFAULT_CANVAS_ID: &str = "chart";

/// Runtime settings for the compare page.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareConfig {
    /// Scheme and host of the orders API, without trailing path
    pub base_url: String,
    /// API template segment: `{base_url}/api/{template}/...`
    pub template: String,
    pub canvas_id: String,
    pub width: u32,
    pub height: u32,
    pub log_level: LogLevel,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            width: 800,
            height: 400,
            log_level: LogLevel::Debug,
        }
    }
}

impl CompareConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_canvas(mut self, canvas_id: impl Into<String>) -> Self {
        self.canvas_id = canvas_id.into();
        self
    }

    /// `https://www.apitite.net/api/webinar-template/get-orders-by-day/json`
    pub fn orders_endpoint(&self) -> String {
        format!(
            "{}/api/{}/get-orders-by-day/json",
            self.base_url.trim_end_matches('/'),
            self.template.trim_matches('/')
        )
    }
}
