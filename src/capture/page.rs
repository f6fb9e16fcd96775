// * Page operations the capture procedure needs from a browser tab
// * ChromePage implements them over the DevTools protocol via ChromiumOxide

use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::cdp::browser_protocol::page::{EventDomContentEventFired, NavigateParams};
use chromiumoxide::cdp::js_protocol::runtime::EvaluateParams;
use chromiumoxide::page::{Page, ScreenshotParams};
use futures::StreamExt;
use std::time::Duration;
use tracing::debug;

use super::errors::CaptureError;
use super::format::ImageFormat;
use super::readiness::attached_expression;
use crate::config::Viewport;

#[allow(async_fn_in_trait)]
pub trait CapturePage {
    // * Emulates the viewport size; must run before navigation
    async fn set_viewport(&self, viewport: Viewport) -> Result<(), CaptureError>;

    // * Navigates and returns once DOMContentLoaded has fired
    async fn navigate(&self, url: &str, limit: Duration) -> Result<(), CaptureError>;

    // * Evaluates a JS expression in the page and reads it back as a bool
    async fn evaluate_bool(&self, expression: &str) -> Result<bool, CaptureError>;

    // * Captures the whole scrollable document, not just the viewport
    async fn screenshot_full_page(&self, format: ImageFormat) -> Result<Vec<u8>, CaptureError>;

    async fn element_attached(&self, selector: &str) -> Result<bool, CaptureError> {
        self.evaluate_bool(&attached_expression(selector)?).await
    }
}

// * A browser tab opened by a BrowserSession
pub struct ChromePage {
    page: Page,
}

impl ChromePage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

impl CapturePage for ChromePage {
    async fn set_viewport(&self, viewport: Viewport) -> Result<(), CaptureError> {
        self.page
            .execute(SetDeviceMetricsOverrideParams::new(
                viewport.width as i64,
                viewport.height as i64,
                1.0,   // device_scale_factor
                false, // mobile
            ))
            .await?;
        debug!(width = viewport.width, height = viewport.height, "Viewport set");
        Ok(())
    }

    async fn navigate(&self, url: &str, limit: Duration) -> Result<(), CaptureError> {
        // * Subscribe before navigating so the event cannot be missed
        let mut dom_ready = self
            .page
            .event_listener::<EventDomContentEventFired>()
            .await?;

        let navigation = async {
            let response = self.page.execute(NavigateParams::new(url)).await?;
            if let Some(error_text) = response.result.error_text.as_ref() {
                return Err(CaptureError::Navigation(format!("{error_text} at {url}")));
            }

            match dom_ready.next().await {
                Some(_) => Ok::<(), CaptureError>(()),
                None => Err(CaptureError::Navigation(format!(
                    "page closed before DOMContentLoaded at {url}"
                ))),
            }
        };

        match tokio::time::timeout(limit, navigation).await {
            Ok(result) => result,
            Err(_) => Err(CaptureError::NavigationTimeout(limit.as_millis() as u64)),
        }
    }

    async fn evaluate_bool(&self, expression: &str) -> Result<bool, CaptureError> {
        let params = EvaluateParams::builder()
            .expression(expression)
            .return_by_value(true)
            .await_promise(true)
            .build()
            .map_err(CaptureError::Script)?;

        let result = self.page.evaluate_expression(params).await?;
        result
            .into_value::<bool>()
            .map_err(|e| CaptureError::Script(e.to_string()))
    }

    async fn screenshot_full_page(&self, format: ImageFormat) -> Result<Vec<u8>, CaptureError> {
        let params = ScreenshotParams::builder()
            .format(format.as_cdp())
            .full_page(true)
            .build();

        self.page
            .screenshot(params)
            .await
            .map_err(|e| CaptureError::Screenshot(e.to_string()))
    }
}
