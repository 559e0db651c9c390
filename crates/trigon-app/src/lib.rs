//! Trigon application entry points.
//!
//! Desktop starts from `main`; Android loads this crate as a cdylib and
//! enters through `android_main`.

use trigon_engine::core::ApplicationController;
use trigon_engine::device::GlutinPlatform;
use trigon_engine::render::RendererConfig;
use trigon_engine::window::WinitHost;

/// Runs the controller against `host` until the host is destroyed.
pub fn run(host: &mut WinitHost, config: RendererConfig) {
    let mut controller = ApplicationController::new(GlutinPlatform, config);
    controller.run(host);
}

#[cfg(target_os = "android")]
#[unsafe(no_mangle)]
fn android_main(app: winit::platform::android::activity::AndroidApp) {
    use trigon_engine::logging::{init_logging, LoggingConfig};
    use trigon_engine::window::RuntimeConfig;
    use winit::event_loop::EventLoop;
    use winit::platform::android::EventLoopBuilderExtAndroid;

    init_logging(LoggingConfig::default());

    let event_loop = match EventLoop::builder().with_android_app(app).build() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("failed to create winit EventLoop: {e}");
            return;
        }
    };

    let mut host = WinitHost::with_event_loop(event_loop, RuntimeConfig::default());
    run(&mut host, RendererConfig::default());
}
