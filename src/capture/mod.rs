pub mod errors;
pub mod format;
pub mod page;
pub mod procedure;
pub mod readiness;
pub mod session;

// * Re-exports for convenient access
pub use errors::CaptureError;
pub use format::ImageFormat;
pub use page::{CapturePage, ChromePage};
pub use procedure::{capture, capture_in_session, capture_page, CaptureReport};
pub use session::{BrowserSession, CaptureSession};
