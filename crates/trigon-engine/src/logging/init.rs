use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// Directives use the `env_logger` syntax ("warn",
/// "trigon_engine=debug,glutin=warn") on every backend.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit directives. Falls back to `RUST_LOG`, then `default_level`.
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,

    /// Terminal coloring (desktop only).
    pub write_style: env_logger::WriteStyle,

    /// Logcat tag (Android only).
    pub tag: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
            tag: "trigon".to_string(),
        }
    }
}

static INIT: Once = Once::new();

/// Installs the platform logger once: logcat on Android, stderr elsewhere.
///
/// Subsequent calls are ignored. Call before the host event source is
/// created so lifecycle messages from the first resume are captured.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let env = std::env::var("RUST_LOG").ok();
        let filter = directives(config.env_filter.as_deref(), env.as_deref(), config.default_level);

        install(config, &filter);
        log::debug!("logging initialized with \"{filter}\"");
    });
}

fn directives(explicit: Option<&str>, env: Option<&str>, default_level: LevelFilter) -> String {
    match explicit.or(env).map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => directives.to_string(),
        None => default_level.as_str().to_ascii_lowercase(),
    }
}

#[cfg(not(target_os = "android"))]
fn install(config: LoggingConfig, filter: &str) {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(filter).write_style(config.write_style);

    // An embedding host may have installed its own logger already.
    if let Err(err) = builder.try_init() {
        eprintln!("logger already initialized: {err}");
    }
}

#[cfg(target_os = "android")]
fn install(config: LoggingConfig, filter: &str) {
    // stderr is discarded on Android; everything goes to logcat.
    android_logger::init_once(
        android_logger::Config::default()
            .with_tag(config.tag)
            .with_max_level(LevelFilter::Trace)
            .with_filter(android_logger::FilterBuilder::new().parse(filter).build()),
    );
}
