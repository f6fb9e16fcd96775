// * Capture configuration
// * Built once at startup from the command line, immutable afterwards

pub mod cli;
pub mod constants;

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use constants::{
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, NAVIGATION_TIMEOUT_MS, OPACITY_TIMEOUT_MS,
    POLL_INTERVAL_MS, READY_SELECTOR, SELECTOR_TIMEOUT_MS, SETTLE_DELAY_MS,
};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid viewport {width}x{height}: width and height must be positive")]
    InvalidViewport { width: u32, height: u32 },
}

// * Simulated browser window size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

// * Per-step wait windows. The opacity timeout and settle delay are heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureTimings {
    pub navigation_timeout: Duration,
    pub selector_timeout: Duration,
    pub opacity_timeout: Duration,
    pub settle_delay: Duration,
    pub poll_interval: Duration,
}

impl Default for CaptureTimings {
    fn default() -> Self {
        Self {
            navigation_timeout: Duration::from_millis(NAVIGATION_TIMEOUT_MS),
            selector_timeout: Duration::from_millis(SELECTOR_TIMEOUT_MS),
            opacity_timeout: Duration::from_millis(OPACITY_TIMEOUT_MS),
            settle_delay: Duration::from_millis(SETTLE_DELAY_MS),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
        }
    }
}

// * Browser process launch settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserSettings {
    pub chrome_executable: Option<PathBuf>,
    pub window: Viewport,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaptureConfig {
    pub url: Url,
    pub output: PathBuf,
    pub viewport: Viewport,
    pub ready_selector: String,
    pub timings: CaptureTimings,
    pub browser: BrowserSettings,
}

impl CaptureConfig {
    // * Builds a config with default selector, timings and browser settings.
    // * The browser window matches the viewport.
    pub fn new(url: Url, output: impl Into<PathBuf>, viewport: Viewport) -> Self {
        Self {
            url,
            output: output.into(),
            viewport,
            ready_selector: READY_SELECTOR.to_string(),
            timings: CaptureTimings::default(),
            browser: BrowserSettings {
                chrome_executable: None,
                window: viewport,
            },
        }
    }
}

// * Parses an absolute URL, keeping the offending input in the error
pub fn parse_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}
