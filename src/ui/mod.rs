//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - banner, title, progress gauge, nav bar, help overlay
//! - `screens` - one render function per wizard screen

mod header;
mod screens;

pub use header::HeaderRenderer;

use crate::app::{AppState, Screen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// UI renderer for the application
///
/// The main entry point for rendering: picks the screen renderer from the
/// current wizard state and draws the shared navigation bar underneath.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        let content_area = main_chunks[0];
        let nav_bar_area = main_chunks[1];

        match state.screen {
            Screen::Welcome => screens::render_welcome(f, content_area, &self.header),
            Screen::Analysis => screens::render_analysis(f, content_area, state),
            Screen::Results => screens::render_results(f, content_area, state),
            Screen::Recommendations => screens::render_recommendations(f, content_area, state),
            Screen::Routine => screens::render_routine(f, content_area, state),
            Screen::Final => screens::render_final(f, content_area, state),
        }

        header::render_nav_bar(f, state, nav_bar_area);

        // Help overlay sits on top of everything
        if state.help_visible {
            header::render_help_overlay(f, state);
        }
    }
}
