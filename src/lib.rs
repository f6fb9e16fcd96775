//! Headless-browser capture of the GhostNet workspace.
//!
//! Loads a page in Chromium, waits until the main layout region is attached
//! and fully faded in, then writes a full-page screenshot to disk.

pub mod capture;
pub mod config;
pub mod ops;
