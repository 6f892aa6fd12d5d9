#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use log::{error, warn};
use roster_business::{Directory, RosterConfig};
use roster_ui::state::State;
use roster_ui::RosterApp;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = RosterConfig::init().unwrap_or_else(|err| {
        error!("Invalid configuration, using defaults: {err:#}");
        RosterConfig::default()
    });

    let directory = match config.directory() {
        Some(path) => Directory::load(path).unwrap_or_else(|err| {
            warn!("Falling back to the sample directory: {err}");
            Directory::sample()
        }),
        None => Directory::sample(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title())
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    let title = config.window_title().to_owned();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| {
            let state = State::new(directory, config);
            Ok(Box::new(RosterApp::new(state)))
        }),
    )
}
