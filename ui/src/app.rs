use roster_business::ensure_page_loaded;

use crate::{state::State, widgets};

/// The admission-roster application shell.
pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    ///
    /// This is the "initial attach" trigger: the page for the current route
    /// offset is requested here, exactly once.
    pub fn new(cc: &eframe::CreationContext<'_>, mut state: State) -> Self {
        let egui_ctx = cc.egui_ctx.clone();
        state.ctx.set_repaint(move || egui_ctx.request_repaint());

        ensure_page_loaded(&mut state.ctx);
        state.ctx.flush_commands();

        Self { state }
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply results published by async commands since the last frame.
        self.state.ctx.sync_pending();

        // The "parameter changed" trigger. Idempotent per offset, so frames
        // that leave the route alone dispatch nothing.
        ensure_page_loaded(&mut self.state.ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::roster_panel(&mut self.state.ctx, ui);
        });

        // Spawn whatever this frame enqueued.
        self.state.ctx.flush_commands();
    }
}
