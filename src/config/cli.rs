// * Command-line surface: one command, no subcommands

use clap::Parser;
use std::path::PathBuf;

use super::constants::{DEFAULT_OUTPUT, DEFAULT_URL, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use super::{parse_url, CaptureConfig, ConfigError, Viewport};

#[derive(Debug, Parser)]
#[command(name = "ghostnet-capture")]
#[command(about = "Capture a GhostNet screenshot once the workspace layout has faded in")]
#[command(version)]
pub struct Cli {
    /// GhostNet URL to capture
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Path for the captured screenshot
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Viewport width in pixels
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub viewport_width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub viewport_height: u32,

    /// Chrome/Chromium binary to launch (auto-detected when omitted)
    #[arg(long, env = "CHROME")]
    pub chrome_executable: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> Result<CaptureConfig, ConfigError> {
        let url = parse_url(&self.url)?;
        let viewport = Viewport::new(self.viewport_width, self.viewport_height)?;

        let mut config = CaptureConfig::new(url, self.output, viewport);
        config.browser.chrome_executable = self.chrome_executable;
        Ok(config)
    }
}
