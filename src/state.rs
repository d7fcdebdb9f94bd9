use crate::data::model::Figure;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which renderer produced the figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Individual,
    Comparison,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Individual => "Individual curves",
            Mode::Comparison => "Coding-scheme comparison",
        }
    }
}

/// A figure and whether its window is still on screen.
pub struct FigureWindow {
    pub figure: Figure,
    pub open: bool,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub figures: Vec<FigureWindow>,
    pub mode: Mode,
}

impl AppState {
    /// Every figure starts open.
    pub fn new(figures: Vec<Figure>, mode: Mode) -> Self {
        Self {
            figures: figures
                .into_iter()
                .map(|figure| FigureWindow { figure, open: true })
                .collect(),
            mode,
        }
    }

    pub fn open_count(&self) -> usize {
        self.figures.iter().filter(|w| w.open).count()
    }

    /// The viewer ends once the user has dismissed every figure.
    pub fn all_dismissed(&self) -> bool {
        self.open_count() == 0
    }

    pub fn set_open(&mut self, index: usize, open: bool) {
        if let Some(window) = self.figures.get_mut(index) {
            window.open = open;
        }
    }

    pub fn close_all(&mut self) {
        for window in &mut self.figures {
            window.open = false;
        }
    }
}
