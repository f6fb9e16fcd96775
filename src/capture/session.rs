// * Scoped headless browser session
// * Owns the Chromium process and its event handler task for one capture run

use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tracing::{debug, info, warn};

use super::errors::CaptureError;
use super::page::{CapturePage, ChromePage};
use crate::config::BrowserSettings;

// * A browser session the capture procedure owns for one run
#[allow(async_fn_in_trait)]
pub trait CaptureSession {
    type Page: CapturePage;

    async fn new_page(&self) -> Result<Self::Page, CaptureError>;

    // * Releases the browser; must be idempotent
    async fn shutdown(&mut self);
}

pub struct BrowserSession {
    browser: Option<Browser>,
    handler: Option<tokio::task::JoinHandle<()>>,
}

impl BrowserSession {
    // * Launches a headless browser sized to the configured window
    pub async fn launch(settings: &BrowserSettings) -> Result<Self, CaptureError> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .viewport(None)
            .window_size(settings.window.width, settings.window.height)
            .arg("--disable-dev-shm-usage")
            .arg("--disable-gpu")
            .arg("--hide-scrollbars");

        if let Some(executable) = &settings.chrome_executable {
            builder = builder.chrome_executable(executable);
        }

        let config = builder.build().map_err(CaptureError::BrowserLaunch)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| CaptureError::BrowserLaunch(e.to_string()))?;

        // * Spawn handler in background; it drives all browser I/O
        let handle = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {}
        });

        info!("Browser launched");
        Ok(Self {
            browser: Some(browser),
            handler: Some(handle),
        })
    }
}

impl CaptureSession for BrowserSession {
    type Page = ChromePage;

    // * Opens a blank tab; navigation happens after the viewport is set
    async fn new_page(&self) -> Result<ChromePage, CaptureError> {
        let browser = self
            .browser
            .as_ref()
            .ok_or_else(|| CaptureError::BrowserLaunch("browser already shut down".into()))?;

        let page = browser.new_page("about:blank").await?;
        debug!("Page opened");
        Ok(ChromePage::new(page))
    }

    // * Closes the browser and waits for the process to exit. Safe to call twice.
    async fn shutdown(&mut self) {
        if let Some(mut browser) = self.browser.take() {
            if let Err(e) = browser.close().await {
                warn!(error = %e, "Browser close failed");
            }
            if let Err(e) = browser.wait().await {
                warn!(error = %e, "Browser process wait failed");
            }
        }
        if let Some(handler) = self.handler.take() {
            handler.abort();
        }
        info!("Browser shutdown complete");
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        // * Best effort cleanup - can't await in drop
        if let Some(handler) = self.handler.take() {
            handler.abort();
        }
    }
}
