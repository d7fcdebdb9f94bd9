use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – figure list
// ---------------------------------------------------------------------------

/// Render the left panel: one checkbox per figure window.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Figures");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for index in 0..state.figures.len() {
                let window = &state.figures[index];
                let mut open = window.open;
                let mut text = RichText::new(&window.figure.title);
                if let Some(first) = window.figure.traces.first() {
                    text = text.color(first.style.color);
                }
                let response = ui
                    .checkbox(&mut open, text)
                    .on_hover_text(format!("{} points", window.figure.point_count()));
                if response.changed() {
                    state.set_open(index, open);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top summary bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong(state.mode.label());

        ui.separator();

        ui.label(format!(
            "{} of {} figures open",
            state.open_count(),
            state.figures.len()
        ));

        ui.separator();

        if ui.button("Close all").clicked() {
            state.close_all();
        }
    });
}
