//! Header and common widget rendering
//!
//! Contains the ASCII art header, title rendering, the quiz progress
//! gauge, the navigation bar, and the help overlay.

use crate::app::{AppState, Screen};
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
};

/// Header renderer containing the ASCII art banner
pub struct HeaderRenderer {
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the ASCII art banner
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render a title section
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let title_widget = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Styles::title());
        f.render_widget(title_widget, area);
    }

    fn create_header() -> Vec<Line<'static>> {
        let banner = [
            r"     _                     _         _ ",
            r"  __| | ___ _ __ _ __ ___ | |_ _   _(_)",
            r" / _` |/ _ \ '__| '_ ` _ \| __| | | | |",
            r"| (_| |  __/ |  | | | | | | |_| |_| | |",
            r" \__,_|\___|_|  |_| |_| |_|\__|\__,_|_|",
        ];
        banner
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(Colors::PRIMARY))))
            .collect()
    }
}

/// Render the quiz progress gauge
pub fn render_progress_bar(f: &mut Frame, area: Rect, percent: u16, label: String) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(Colors::PRIMARY))
        .label(label)
        .percent(percent.min(100));
    f.render_widget(gauge, area);
}

/// Render the navigation bar with per-screen key hints
pub fn render_nav_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let hints: &[(&str, &str)] = match state.screen {
        Screen::Welcome => &[("Enter", "Start"), ("?", "Help"), ("q", "Quit")],
        Screen::Analysis => &[
            ("j/k", "Navigate"),
            ("Space", "Choose"),
            ("Enter", "Next"),
            ("h", "Back"),
            ("q", "Quit"),
        ],
        Screen::Results => &[("Enter", "Continue"), ("?", "Help"), ("q", "Quit")],
        Screen::Recommendations => &[
            ("j/k", "Navigate"),
            ("Space", "Toggle"),
            ("Enter", "Build Routine"),
            ("q", "Quit"),
        ],
        Screen::Routine => &[("Enter", "Complete"), ("?", "Help"), ("q", "Quit")],
        Screen::Final => &[("r", "Restart"), ("Enter", "Exit"), ("q", "Quit")],
    };

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(format!(" [{key}] "), Styles::key()));
        spans.push(Span::styled(format!("{action}  "), Styles::hint()));
    }
    spans.push(Span::styled(
        format!("  {}", state.status_message),
        Style::default().fg(Colors::FG_MUTED),
    ));

    let nav = Paragraph::new(Line::from(spans));
    f.render_widget(nav, area);
}

/// Render the help overlay on top of the current screen
pub fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let area = centered_rect(50, 60, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Step {} of {}: {}", state.screen.step_number(), Screen::TOTAL_STEPS, state.screen.title()),
            Style::default()
                .fg(Colors::SECONDARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    let bindings = [
        ("j / k, arrows", "Move the cursor"),
        ("Space", "Choose an option / toggle a product"),
        ("Enter", "Confirm and continue"),
        ("h / Left", "Previous quiz question"),
        ("r", "Restart from the summary screen"),
        ("?", "Toggle this overlay"),
        ("q, Ctrl+C", "Quit"),
    ];
    for (key, action) in bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<16}"), Styles::key()),
            Span::styled(action, Style::default().fg(Colors::FG_PRIMARY)),
        ]));
    }

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(Colors::BORDER_ACTIVE)),
    );
    f.render_widget(help, area);
}

/// Centered sub-rectangle, sized as a percentage of the parent.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
