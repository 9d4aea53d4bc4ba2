mod app;
mod cli;

use tracing_subscriber::EnvFilter;
use url::Url;
use winit::event_loop::EventLoop;

use webpane::{Color, PageConfig};

fn main() {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("webpane-demo v{} starting...", env!("CARGO_PKG_VERSION"));

    let url = match Url::parse(&args.url) {
        Ok(url) => url,
        Err(e) => {
            tracing::error!("invalid url {:?}: {e}", args.url);
            std::process::exit(2);
        }
    };

    let mut config = PageConfig::new(url);

    if let Some(hex) = &args.background {
        match Color::from_hex(hex) {
            Some(color) => config = config.with_background_color(color),
            None => tracing::warn!("ignoring unparseable background color {hex:?}"),
        }
    }

    if let Some(path) = &args.css {
        match std::fs::read_to_string(path) {
            Ok(css) => config = config.with_custom_css(css),
            Err(e) => tracing::warn!("failed to read css {}: {e}", path.display()),
        }
    }

    if let Some(path) = &args.js {
        match std::fs::read_to_string(path) {
            Ok(js) => config = config.with_custom_js(js),
            Err(e) => tracing::warn!("failed to read js {}: {e}", path.display()),
        }
    }

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app::DemoApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
