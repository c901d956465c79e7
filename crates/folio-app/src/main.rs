mod app_state;
mod cli;
mod clipboard;
mod logging;

use std::path::{Path, PathBuf};

use folio_common::SceneId;
use folio_config::schema::FolioConfig;
use winit::event_loop::EventLoop;

fn main() {
    let args = cli::parse();

    // Config is read first so its log level can seed the filter; a load
    // failure is reported once logging is up.
    let config_override = args.config.as_deref().map(Path::new);
    let loaded = folio_config::load_config(config_override);
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    logging::init(args.log_level.as_deref(), config_level);

    tracing::info!("folio v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        FolioConfig::default()
    });

    if args.print_config {
        println!("{}", folio_config::config_to_json(&config));
        return;
    }

    let scene_name = args
        .scene
        .as_deref()
        .unwrap_or(&config.playground.default_scene);
    let scene = SceneId::parse_or_default(scene_name);
    tracing::info!("Config loaded (scene: {scene})");

    let watch_path = if config.advanced.live_reload {
        match folio_config::resolve_config_path(config_override) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Live reload disabled: {e}");
                None
            }
        }
    } else {
        None
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::FolioApp::new(
        config,
        scene,
        args.config.map(PathBuf::from),
        watch_path,
    );

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
