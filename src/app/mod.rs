//! Application module
//!
//! Contains the event loop and per-screen key handling. All state mutation
//! happens here, one key event at a time; rendering is delegated to
//! [`crate::ui`].

mod state;

pub use state::{AppState, Screen};

use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct.
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance.
    pub fn new() -> Self {
        info!("creating new App instance");
        Self {
            state: AppState::new(),
            ui_renderer: UiRenderer::new(),
        }
    }

    /// Access the current state (used by tests).
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main event loop until the user quits.
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        info!("starting main application loop");

        loop {
            if crossterm::event::poll(Duration::from_millis(50))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event) {
                        break; // Exit requested
                    }
                }
            }

            let ui_renderer = &self.ui_renderer;
            let state = &self.state;
            terminal.draw(|f| ui_renderer.render(f, state))?;
        }

        Ok(())
    }

    /// Handle a single key event. Returns `true` when the app should exit.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Global bindings first.
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return true;
            }
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => {
                self.state.help_visible = !self.state.help_visible;
                return false;
            }
            KeyCode::Esc if self.state.help_visible => {
                self.state.help_visible = false;
                return false;
            }
            _ => {}
        }
        if self.state.help_visible {
            // Overlay swallows everything else until dismissed.
            return false;
        }

        match self.state.screen {
            Screen::Welcome => self.handle_welcome_key(key.code),
            Screen::Analysis => self.handle_analysis_key(key.code),
            Screen::Results => self.handle_results_key(key.code),
            Screen::Recommendations => self.handle_recommendations_key(key.code),
            Screen::Routine => self.handle_routine_key(key.code),
            Screen::Final => return self.handle_final_key(key.code),
        }
        false
    }

    fn handle_welcome_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.state.on_start();
        }
    }

    fn handle_analysis_key(&mut self, code: KeyCode) {
        let option_count = self.state.quiz.active().options.len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.option_cursor = self.state.option_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.state.option_cursor + 1 < option_count {
                    self.state.option_cursor += 1;
                }
            }
            KeyCode::Char(' ') => {
                let question = self.state.quiz.active();
                if let Some(option) = question.options.get(self.state.option_cursor) {
                    self.state.quiz.answer(question.id, option.value);
                }
            }
            KeyCode::Enter => {
                if let Some(profile) = self.state.quiz.advance() {
                    debug!("quiz complete, profile produced");
                    self.state.on_analysis_complete(profile);
                }
                self.state.option_cursor = 0;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.state.quiz.retreat();
                self.state.option_cursor = 0;
            }
            _ => {}
        }
    }

    fn handle_results_key(&mut self, code: KeyCode) {
        if code == KeyCode::Enter {
            self.state.on_continue_from_results();
        }
    }

    fn handle_recommendations_key(&mut self, code: KeyCode) {
        let product_count = self.state.recommendations.len();
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.product_cursor = self.state.product_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.state.product_cursor + 1 < product_count {
                    self.state.product_cursor += 1;
                }
            }
            KeyCode::Char(' ') => {
                if let Some(product) = self
                    .state
                    .recommendations
                    .get(self.state.product_cursor)
                    .copied()
                {
                    self.state.selection.toggle(product);
                }
            }
            KeyCode::Enter => self.state.on_products_selected(),
            _ => {}
        }
    }

    fn handle_routine_key(&mut self, code: KeyCode) {
        if code == KeyCode::Enter {
            self.state.on_routine_complete();
        }
    }

    fn handle_final_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('r') => {
                self.state.on_restart();
                false
            }
            KeyCode::Enter => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_q_quits_from_any_screen() {
        let mut app = App::new();
        assert!(app.handle_key_event(press(KeyCode::Char('q'))));
    }

    #[test]
    fn test_enter_starts_quiz() {
        let mut app = App::new();
        assert!(!app.handle_key_event(press(KeyCode::Enter)));
        assert_eq!(app.state().screen, Screen::Analysis);
    }

    #[test]
    fn test_space_selects_highlighted_option() {
        let mut app = App::new();
        app.handle_key_event(press(KeyCode::Enter)); // start quiz
        app.handle_key_event(press(KeyCode::Down));
        app.handle_key_event(press(KeyCode::Char(' ')));
        // Second option of the skin type question is "dry".
        assert!(app.state().quiz.is_chosen(crate::quiz::QuestionId::SkinType, "dry"));
    }

    #[test]
    fn test_enter_without_answer_stays_on_question() {
        let mut app = App::new();
        app.handle_key_event(press(KeyCode::Enter)); // start quiz
        app.handle_key_event(press(KeyCode::Enter)); // no answer yet
        assert_eq!(app.state().quiz.position(), (1, 6));
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = App::new();
        app.handle_key_event(press(KeyCode::Char('?')));
        app.handle_key_event(press(KeyCode::Enter));
        assert_eq!(app.state().screen, Screen::Welcome);

        app.handle_key_event(press(KeyCode::Esc));
        app.handle_key_event(press(KeyCode::Enter));
        assert_eq!(app.state().screen, Screen::Analysis);
    }
}
