use anyhow::Result;

use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::render::RendererConfig;
use trigon_engine::window::{RuntimeConfig, WinitHost};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut host = WinitHost::new(RuntimeConfig {
        title: "Trigon".to_string(),
        ..RuntimeConfig::default()
    })?;

    trigon_app::run(&mut host, RendererConfig::default());
    Ok(())
}
