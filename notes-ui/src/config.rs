use std::sync::OnceLock;

/// How the loading indicator reports progress while `/process` is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressFeedback {
    /// Poll `/progress` and show the backend's task description.
    Poll { interval_ms: u32 },
    /// Cosmetic fixed-duration bar, unrelated to actual completion.
    Animation { duration_ms: u32 },
    /// Indicator only.
    Off,
}

pub const DEFAULT_POLL_INTERVAL_MS: u32 = 100;
pub const DEFAULT_ANIMATION_MS: u32 = 5_000;

impl Default for ProgressFeedback {
    fn default() -> Self {
        ProgressFeedback::Poll {
            interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl ProgressFeedback {
    /// Parse the `progress` query parameter. Unknown values keep the default.
    pub fn from_query_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("animation") | Some("animate") => ProgressFeedback::Animation {
                duration_ms: DEFAULT_ANIMATION_MS,
            },
            Some("none") | Some("off") => ProgressFeedback::Off,
            _ => ProgressFeedback::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Prefix for every backend path. Empty means same origin.
    pub api_base: String,
    pub progress: ProgressFeedback,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            progress: ProgressFeedback::default(),
        }
    }
}

impl UiConfig {
    pub fn new(api_base: Option<&str>, progress_param: Option<&str>) -> Self {
        Self {
            api_base: api_base
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_default(),
            progress: ProgressFeedback::from_query_value(progress_param),
        }
    }

    /// Build from the compile-time `NOTES_API_BASE` and the page's query string.
    fn from_environment() -> Self {
        let progress_param = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
            .and_then(|params| params.get("progress"));

        Self::new(option_env!("NOTES_API_BASE"), progress_param.as_deref())
    }
}

static UI_CONFIG: OnceLock<UiConfig> = OnceLock::new();

/// Configuration computed at first use
pub fn ui_config() -> &'static UiConfig {
    UI_CONFIG.get_or_init(UiConfig::from_environment)
}

pub fn api_base() -> &'static str {
    ui_config().api_base.as_str()
}
