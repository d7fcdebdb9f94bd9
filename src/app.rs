use eframe::egui;

use crate::data::model::Figure;
use crate::state::{AppState, Mode};
use crate::ui::{panels, plot};

const WINDOW_SIZE: [f32; 2] = [1280.0, 860.0];
const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 400.0];

/// Offset between successive figure windows.
const CASCADE_STEP: f32 = 28.0;
const CASCADE_ORIGIN: [f32; 2] = [240.0, 48.0];
const CASCADE_WRAP: usize = 12;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CurveViewerApp {
    pub state: AppState,
}

impl CurveViewerApp {
    pub fn new(figures: Vec<Figure>, mode: Mode) -> Self {
        Self {
            state: AppState::new(figures, mode),
        }
    }
}

impl eframe::App for CurveViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: summary bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: figure list ----
        egui::SidePanel::left("figure_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.weak("Close every figure window to exit.");
        });

        // ---- One floating window per figure ----
        for (index, window) in self.state.figures.iter_mut().enumerate() {
            let mut open = window.open;
            let figure = &window.figure;
            egui::Window::new(figure.title.as_str())
                .id(egui::Id::new(("figure", index)))
                .open(&mut open)
                .default_pos(cascade_pos(index))
                .default_size(figure.size)
                .resizable(true)
                .show(ctx, |ui| {
                    plot::figure_plot(ui, index, figure);
                });
            window.open = open;
        }

        if self.state.all_dismissed() {
            log::info!("all figures dismissed, closing viewer");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

fn cascade_pos(index: usize) -> [f32; 2] {
    let step = (index % CASCADE_WRAP) as f32 * CASCADE_STEP;
    [CASCADE_ORIGIN[0] + step, CASCADE_ORIGIN[1] + step]
}

/// Open the viewer and block until the user dismisses every figure.
pub fn run(figures: Vec<Figure>, mode: Mode) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Simulator curves",
        options,
        Box::new(move |_cc| Ok(Box::new(CurveViewerApp::new(figures, mode)))),
    )
}
