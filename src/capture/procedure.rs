// * Capture procedure
// * navigate -> wait for attach -> wait for opacity -> settle -> screenshot

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::errors::CaptureError;
use super::format::ImageFormat;
use super::page::CapturePage;
use super::readiness::{opacity_expression, poll_until};
use super::session::{BrowserSession, CaptureSession};
use crate::config::constants::READY_OPACITY;
use crate::config::CaptureConfig;

// * Outcome of a successful capture
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureReport {
    pub path: PathBuf,
    pub bytes: usize,
    pub format: ImageFormat,
    pub elapsed: Duration,
}

// * Runs one capture in a fresh browser session.
// * The session is shut down on every exit path before the result is returned.
pub async fn capture(config: &CaptureConfig) -> Result<CaptureReport, CaptureError> {
    info!(
        url = %config.url,
        path = %config.output.display(),
        width = config.viewport.width,
        height = config.viewport.height,
        "Starting capture"
    );

    let mut session = BrowserSession::launch(&config.browser).await?;
    capture_in_session(&mut session, config).await
}

// * Runs the capture on a session that is already up, then shuts it down
// * whether or not the capture succeeded.
pub async fn capture_in_session<S: CaptureSession>(
    session: &mut S,
    config: &CaptureConfig,
) -> Result<CaptureReport, CaptureError> {
    let outcome = match session.new_page().await {
        Ok(page) => capture_page(&page, config).await,
        Err(e) => Err(e),
    };
    session.shutdown().await;

    outcome
}

// * Drives an already opened page through the capture steps
pub async fn capture_page<P: CapturePage>(
    page: &P,
    config: &CaptureConfig,
) -> Result<CaptureReport, CaptureError> {
    let started = Instant::now();
    let timings = &config.timings;
    let selector = config.ready_selector.as_str();

    page.set_viewport(config.viewport).await?;

    page.navigate(config.url.as_str(), timings.navigation_timeout).await?;
    debug!(url = %config.url, "DOMContentLoaded");

    let attached = poll_until(timings.selector_timeout, timings.poll_interval, move || {
        page.element_attached(selector)
    })
    .await?;
    if !attached {
        return Err(CaptureError::SelectorTimeout {
            selector: selector.to_string(),
            timeout_ms: timings.selector_timeout.as_millis() as u64,
        });
    }
    debug!(selector, "Ready element attached");

    let predicate = opacity_expression(selector, READY_OPACITY)?;
    let predicate = predicate.as_str();
    let faded_in = poll_until(timings.opacity_timeout, timings.poll_interval, move || {
        page.evaluate_bool(predicate)
    })
    .await?;
    if !faded_in {
        return Err(CaptureError::OpacityTimeout {
            selector: selector.to_string(),
            opacity: READY_OPACITY.to_string(),
            timeout_ms: timings.opacity_timeout.as_millis() as u64,
        });
    }
    debug!(selector, "Ready element faded in");

    tokio::time::sleep(timings.settle_delay).await;

    ensure_parent_dir(&config.output).await?;

    let format = ImageFormat::from_path(&config.output);
    let image = page.screenshot_full_page(format).await?;
    tokio::fs::write(&config.output, &image).await?;

    let report = CaptureReport {
        path: config.output.clone(),
        bytes: image.len(),
        format,
        elapsed: started.elapsed(),
    };
    info!(
        path = %report.path.display(),
        bytes = report.bytes,
        format = %report.format,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "Screenshot written"
    );
    Ok(report)
}

// * Creates every missing directory above `path`
async fn ensure_parent_dir(path: &Path) -> Result<(), CaptureError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            tokio::fs::create_dir_all(parent).await?;
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_parent_dir_creates_chain() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/dir/shot.png");

        ensure_parent_dir(&target).await.unwrap();

        assert!(dir.path().join("nested/dir").is_dir());
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn test_ensure_parent_dir_accepts_bare_file_name() {
        ensure_parent_dir(Path::new("shot.png")).await.unwrap();
    }
}
