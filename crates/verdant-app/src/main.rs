mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("verdant=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "verdant=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Verdant v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config, honoring a path override
    let mut config = match args.config {
        Some(ref path) => {
            tracing::info!("Using config override: {path}");
            verdant_config::load_from_path(std::path::Path::new(path)).unwrap_or_else(|e| {
                tracing::warn!("Config load failed, using defaults: {e}");
                verdant_config::VerdantConfig::default()
            })
        }
        None => verdant_config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            verdant_config::VerdantConfig::default()
        }),
    };

    if args.no_intro {
        config.intro.enabled = false;
    }

    if args.print_config {
        println!("{}", verdant_config::config_to_json(&config));
        return;
    }

    tracing::info!(
        "Config loaded (sphere: {} r={})",
        config.scene.sphere.color,
        config.scene.sphere.radius
    );

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::VerdantApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
