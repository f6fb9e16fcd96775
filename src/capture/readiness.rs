// * Readiness checks evaluated inside the page
// * Selector attach and opacity fade-in are both polled predicates

use std::future::Future;
use std::time::Duration;

use super::errors::CaptureError;

// * Renders a selector as a JS string literal
fn js_string(value: &str) -> Result<String, CaptureError> {
    serde_json::to_string(value).map_err(|e| CaptureError::Script(e.to_string()))
}

// * true once an element matching the selector is attached to the DOM
pub fn attached_expression(selector: &str) -> Result<String, CaptureError> {
    Ok(format!("document.querySelector({}) !== null", js_string(selector)?))
}

// * true once the element exists and its computed opacity equals `opacity`
pub fn opacity_expression(selector: &str, opacity: &str) -> Result<String, CaptureError> {
    Ok(format!(
        r#"(() => {{
    const element = document.querySelector({selector});
    if (!element) {{ return false; }}
    return window.getComputedStyle(element).opacity === {opacity};
}})()"#,
        selector = js_string(selector)?,
        opacity = js_string(opacity)?,
    ))
}

// * Re-runs `check` every `interval` until it reports true.
// * Returns Ok(false) when `limit` elapses first; check errors abort the wait.
pub async fn poll_until<F, Fut>(
    limit: Duration,
    interval: Duration,
    mut check: F,
) -> Result<bool, CaptureError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, CaptureError>>,
{
    let polling = async {
        loop {
            if check().await? {
                return Ok::<(), CaptureError>(());
            }
            tokio::time::sleep(interval).await;
        }
    };

    match tokio::time::timeout(limit, polling).await {
        Ok(Ok(())) => Ok(true),
        Ok(Err(e)) => Err(e),
        Err(_) => Ok(false),
    }
}
