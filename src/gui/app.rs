// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc},
    thread,
    time::Duration,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    data::{Catalog, Origin},
    embed::InstagramEmbed,
    feed::{self, LoadOutcome},
    file,
};

use super::progress::GuiProgress;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Shop Feed",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // canonical products + filters + shown rows
    pub catalog: Catalog,
    pub skipped: usize,
    pub embeds: InstagramEmbed,

    // status/notice (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub notice: Arc<Mutex<Option<String>>>,
    pub running: bool,
    loading: Option<mpsc::Receiver<LoadOutcome>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut app = Self {
            state,
            catalog: Catalog::new(Vec::new(), Origin::Live),
            skipped: 0,
            embeds: InstagramEmbed,
            status: Arc::new(Mutex::new(s!("Idle"))),
            notice: Arc::new(Mutex::new(None)),
            running: false,
            loading: None,
        };
        app.refresh();
        app
    }

    /// Start a feed load on a worker thread. No-op if one is already running.
    pub fn refresh(&mut self) {
        if self.running { return; }
        self.running = true;
        if let Ok(mut n) = self.notice.lock() { *n = None; }

        let opts = self.state.options.feed.clone();
        let mut prog = GuiProgress::new(self.status.clone(), self.notice.clone());
        let (tx, rx) = mpsc::channel();
        self.loading = Some(rx);

        logf!("UI: Refresh from {}", opts.source);
        thread::spawn(move || {
            let outcome = feed::load(&opts, Some(&mut prog));
            let _ = tx.send(outcome);
        });
    }

    /// Pick up a finished load, if any.
    fn poll_load(&mut self) {
        let Some(rx) = &self.loading else { return };
        match rx.try_recv() {
            Ok(outcome) => {
                self.skipped = outcome.skipped.len();
                self.catalog.replace(outcome.products, outcome.origin);
                self.loading = None;
                self.running = false;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                loge!("UI: Load worker ended without a result");
                self.status("Load failed");
                self.loading = None;
                self.running = false;
            }
        }
    }

    pub fn export(&mut self) {
        match file::export_products(&self.state.options.export, self.catalog.visible()) {
            Ok(path) => self.status(format!(
                "Exported {} product(s) to {}",
                self.catalog.visible_count(),
                path.display()
            )),
            Err(e) => {
                loge!("UI: Export failed: {e}");
                self.status(format!("Export failed: {e}"));
            }
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn notice_text(&self) -> Option<String> {
        self.notice.lock().ok().and_then(|n| n.clone())
    }

    pub fn dismiss_notice(&self) {
        if let Ok(mut n) = self.notice.lock() { *n = None; }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            super::components::toolbar::draw(ui, self);
        });

        if self.state.gui.show_filters {
            egui::SidePanel::left("filters")
                .resizable(false)
                .show(ctx, |ui| {
                    super::components::filter_panel::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::product_table::draw(ui, self);
        });
    }
}
