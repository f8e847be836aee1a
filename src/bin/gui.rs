// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::{IconData, ViewportBuilder};
use shop_feed::{
    config::{consts::CONFIG_FILE, options, state::AppState},
    gui,
};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/icon.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    if let Err(e) = shop_feed::log::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let mut state = AppState::default();
    match options::load(Path::new(CONFIG_FILE)) {
        Ok(opts) => state.options = opts,
        Err(e) => eprintln!("Ignoring {}: {}", CONFIG_FILE, e),
    }

    let mut viewport = ViewportBuilder::default()
        .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
