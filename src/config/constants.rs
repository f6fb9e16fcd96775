// * Configuration Constants
// * Central location for all defaults, thresholds and timeouts

// * Page captured when --url is not given
pub const DEFAULT_URL: &str = "http://127.0.0.1:4100/ghostnet.html";

// * Screenshot destination when --output is not given
pub const DEFAULT_OUTPUT: &str = "artifacts/ghostnet.png";

// * Default viewport in CSS pixels
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 720;

// * Main layout region; the page is ready once it is attached and fully faded in
pub const READY_SELECTOR: &str = ".layout__main";

// * Computed opacity the ready element must report
pub const READY_OPACITY: &str = "1";

// * Navigation timeout until DOMContentLoaded, in milliseconds
pub const NAVIGATION_TIMEOUT_MS: u64 = 30_000;

// * Selector attach timeout in milliseconds
pub const SELECTOR_TIMEOUT_MS: u64 = 30_000;

// * Opacity predicate timeout in milliseconds
pub const OPACITY_TIMEOUT_MS: u64 = 15_000;

// * Extra delay after the opacity predicate holds, lets trailing paint settle
pub const SETTLE_DELAY_MS: u64 = 500;

// * Interval between in-page predicate evaluations
pub const POLL_INTERVAL_MS: u64 = 100;
