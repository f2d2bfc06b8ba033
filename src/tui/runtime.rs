//! Viewer application state.

use crate::align::SeriesAligner;
use crate::render::{Figure, RenderRequest};
use crate::style::ChartStyle;

/// Narrowest window the zoom controls will shrink to.
const MIN_WINDOW: usize = 2;

/// State of the interactive comparison viewer.
pub struct App {
    aligner: SeriesAligner,
    style: ChartStyle,
    initial: RenderRequest,
    /// Request driving the current frame.
    pub request: RenderRequest,
    /// Set when the user asks to leave.
    pub quit: bool,
}

impl App {
    /// Creates a viewer over `aligner`, starting from `request`.
    pub fn new(aligner: SeriesAligner, request: RenderRequest, style: ChartStyle) -> Self {
        Self {
            aligner,
            style,
            initial: request.clone(),
            request,
            quit: false,
        }
    }

    pub fn aligner(&self) -> &SeriesAligner {
        &self.aligner
    }

    /// Figure for the current request.
    pub fn figure(&self) -> Figure {
        self.aligner.render(&self.request, &self.style)
    }

    /// Displayed `[begin, end)` window, clamped to the series length.
    pub fn window(&self) -> (usize, usize) {
        let n = self.aligner.len();
        let end = self.request.end.unwrap_or(n).min(n);
        (self.request.begin.min(end), end)
    }

    fn set_window(&mut self, begin: usize, end: usize) {
        self.request.begin = begin;
        self.request.end = Some(end);
    }

    /// Switches between time-aligned and overlap display.
    pub fn toggle_overlap(&mut self) {
        self.request.alignment = self.request.alignment.toggle();
    }

    /// Moves the window one step towards the start.
    pub fn pan_left(&mut self) {
        let (begin, end) = self.window();
        if begin > 0 {
            self.set_window(begin - 1, end - 1);
        }
    }

    /// Moves the window one step towards the end.
    pub fn pan_right(&mut self) {
        let (begin, end) = self.window();
        if end < self.aligner.len() {
            self.set_window(begin + 1, end + 1);
        }
    }

    /// Narrows the window by one step from the right.
    pub fn zoom_in(&mut self) {
        let (begin, end) = self.window();
        if end - begin > MIN_WINDOW {
            self.set_window(begin, end - 1);
        }
    }

    /// Widens the window by one step, to the right first.
    pub fn zoom_out(&mut self) {
        let (begin, end) = self.window();
        if end < self.aligner.len() {
            self.set_window(begin, end + 1);
        } else if begin > 0 {
            self.set_window(begin - 1, end);
        }
    }

    /// Restores the request the viewer was launched with.
    pub fn reset(&mut self) {
        self.request = self.initial.clone();
    }
}
