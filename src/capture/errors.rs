use chromiumoxide::error::CdpError;
use thiserror::Error;

// * Unified Error type for the capture run. Engine messages are kept verbatim.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Browser launch failed: {0}")]
    BrowserLaunch(String),

    #[error("Page navigation failed: {0}")]
    Navigation(String),

    #[error("Navigation timeout after {0}ms waiting for DOMContentLoaded")]
    NavigationTimeout(u64),

    #[error("Timeout after {timeout_ms}ms waiting for selector '{selector}' to be attached")]
    SelectorTimeout { selector: String, timeout_ms: u64 },

    #[error("Timeout after {timeout_ms}ms waiting for '{selector}' to reach opacity {opacity}")]
    OpacityTimeout {
        selector: String,
        opacity: String,
        timeout_ms: u64,
    },

    #[error("Script evaluation failed: {0}")]
    Script(String),

    #[error("Screenshot failed: {0}")]
    Screenshot(String),

    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DevTools protocol error: {0}")]
    Cdp(#[from] CdpError),
}

impl CaptureError {
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::NavigationTimeout(_) | Self::SelectorTimeout { .. } | Self::OpacityTimeout { .. }
        )
    }
}
