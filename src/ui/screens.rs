//! Wizard screen rendering
//!
//! One render function per wizard screen:
//! - `Welcome` - introduction and start prompt
//! - `Analysis` - the six-question quiz with progress gauge
//! - `Results` - skin type summary and care tips
//! - `Recommendations` - product list with toggle selection
//! - `Routine` - morning/evening routine with numbered steps
//! - `Final` - session summary with totals and profile recap

use super::header::{self, HeaderRenderer};
use crate::app::AppState;
use crate::catalog::Product;
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

// ============================================================================
// Welcome Screen
// ============================================================================

pub fn render_welcome(f: &mut Frame, area: Rect, header: &HeaderRenderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Banner
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Intro
            Constraint::Length(3), // Prompt
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Discover Your Perfect Skincare Routine");

    let intro = vec![
        Line::from(""),
        Line::from("  A short analysis of your skin, then a routine built around it:"),
        Line::from(""),
        bullet("Answer six questions about your skin and lifestyle"),
        bullet("Get science-backed product recommendations"),
        bullet("Receive a personalized morning and evening routine"),
        Line::from(""),
        Line::from(Span::styled(
            "  Takes about two minutes.",
            Styles::hint(),
        )),
    ];
    f.render_widget(Paragraph::new(intro).wrap(Wrap { trim: false }), chunks[2]);

    let prompt = Paragraph::new(Line::from(vec![
        Span::styled(" [Enter] ", Styles::key()),
        Span::raw("Start Analysis"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(prompt, chunks[3]);
}

fn bullet(text: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled("   • ", Style::default().fg(Colors::PRIMARY)),
        Span::raw(text),
    ])
}

// ============================================================================
// Analysis (Quiz) Screen
// ============================================================================

pub fn render_analysis(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress gauge
            Constraint::Length(2), // Question title
            Constraint::Min(10),   // Options
            Constraint::Length(3), // Instructions
        ])
        .split(area);

    let (step, total) = state.quiz.position();
    header::render_progress_bar(
        f,
        chunks[0],
        state.quiz.progress_percent(),
        format!("{step} of {total}"),
    );

    let question = state.quiz.active();
    let title = Paragraph::new(Line::from(Span::styled(
        format!("  {}", question.title),
        Styles::title(),
    )));
    f.render_widget(title, chunks[1]);

    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let chosen = state.quiz.is_chosen(question.id, option.value);
            let marker = match (question.multiple, chosen) {
                (true, true) => "[x]",
                (true, false) => "[ ]",
                (false, true) => "(•)",
                (false, false) => "( )",
            };

            let label_style = if i == state.option_cursor {
                Styles::highlight()
            } else if chosen {
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Colors::FG_PRIMARY)
            };

            let mut lines = vec![Line::from(Span::styled(
                format!(" {marker} {}", option.label),
                label_style,
            ))];
            if let Some(description) = option.description {
                lines.push(Line::from(Span::styled(
                    format!("      {description}"),
                    Styles::hint(),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let hint = if question.multiple {
        " Select all that apply "
    } else {
        " Select one "
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(hint)
            .border_style(Style::default().fg(Colors::BORDER_ACTIVE)),
    );
    let mut list_state = ListState::default();
    list_state.select(Some(state.option_cursor));
    f.render_stateful_widget(list, chunks[2], &mut list_state);

    let next_label = if state.quiz.at_last_question() {
        "Get Results"
    } else {
        "Next"
    };
    let can_advance = state.quiz.can_advance();
    let next_style = if can_advance {
        Styles::key()
    } else {
        Style::default().fg(Colors::FG_MUTED)
    };
    let instructions = Paragraph::new(Line::from(vec![
        Span::styled(" [Space] ", Styles::key()),
        Span::raw("Choose  "),
        Span::styled(" [Enter] ", next_style),
        Span::raw(next_label),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(instructions, chunks[3]);
}

// ============================================================================
// Results Screen
// ============================================================================

pub fn render_results(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(profile) = &state.profile else {
        // Unreachable in the wizard flow; render nothing rather than panic.
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Summary
            Constraint::Min(8),    // Tips + profile facts
            Constraint::Length(3), // Instructions
        ])
        .split(area);

    let title = Paragraph::new(profile.skin_type.headline())
        .style(Styles::title())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    let summary = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::raw(format!("  {}", profile.skin_type.summary()))),
    ])
    .wrap(Wrap { trim: false });
    f.render_widget(summary, chunks[1]);

    let mut lines = vec![Line::from(Span::styled(
        "  What helps:",
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD),
    ))];
    for tip in profile.skin_type.care_tips() {
        lines.push(bullet(tip));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "  {} concern(s) identified · {} sensitivity · age {}",
            profile.concerns.len(),
            profile.sensitivity,
            profile.age
        ),
        Styles::hint(),
    )));
    f.render_widget(Paragraph::new(lines), chunks[2]);

    let instructions = Paragraph::new(Line::from(vec![
        Span::styled(" [Enter] ", Styles::key()),
        Span::raw("See Your Recommendations"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(instructions, chunks[3]);
}

// ============================================================================
// Recommendations Screen
// ============================================================================

pub fn render_recommendations(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Product list
            Constraint::Length(3), // Selection summary
        ])
        .split(area);

    let skin_type = state
        .profile
        .as_ref()
        .map(|p| p.skin_type.to_string())
        .unwrap_or_default();
    let title = Paragraph::new(format!(
        "Recommended for You · tailored to your {skin_type} skin"
    ))
    .style(Styles::title())
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = state
        .recommendations
        .iter()
        .enumerate()
        .map(|(i, product)| product_item(product, i == state.product_cursor, state))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Products ")
            .border_style(Style::default().fg(Colors::BORDER_ACTIVE)),
    );
    let mut list_state = ListState::default();
    list_state.select(Some(state.product_cursor));
    f.render_stateful_widget(list, chunks[1], &mut list_state);

    let summary = if state.selection.is_empty() {
        Line::from(Span::styled(
            " Select products to continue building your routine",
            Styles::hint(),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                format!(" {} products selected", state.selection.len()),
                Style::default().fg(Colors::SUCCESS),
            ),
            Span::styled(
                format!("   Total ₹{}", state.selection.total()),
                Style::default()
                    .fg(Colors::FG_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   [Enter] Build Your Routine", Styles::key()),
        ])
    };
    let summary_widget =
        Paragraph::new(summary).block(Block::default().borders(Borders::TOP));
    f.render_widget(summary_widget, chunks[2]);
}

fn product_item<'a>(product: &'a Product, highlighted: bool, state: &AppState) -> ListItem<'a> {
    let selected = state.selection.is_selected(product.id);
    let marker = if selected { "[x]" } else { "[ ]" };

    let name_style = if highlighted {
        Styles::highlight()
    } else if selected {
        Style::default()
            .fg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    };

    let ingredients = product.ingredients.join(", ");
    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" {marker} {}", product.name), name_style),
            Span::styled(
                format!("  ₹{}", product.price),
                Style::default().fg(Colors::SECONDARY),
            ),
        ]),
        Line::from(Span::styled(
            format!("      {} · {}", product.category, product.usage),
            Styles::hint(),
        )),
        Line::from(Span::styled(
            format!("      {} — {}", product.description, ingredients),
            Style::default().fg(Colors::FG_MUTED),
        )),
    ];
    ListItem::new(lines)
}

// ============================================================================
// Routine Screen
// ============================================================================

pub fn render_routine(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Morning + evening
            Constraint::Length(6), // Tips
            Constraint::Length(3), // Instructions
        ])
        .split(area);

    let title = Paragraph::new("Your Personalized Routine · follow this order for best results")
        .style(Styles::title())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_routine_half(
        f,
        halves[0],
        "☀ Morning",
        &state.routine.morning,
        state.routine.morning_minutes(),
        Colors::MORNING,
    );
    render_routine_half(
        f,
        halves[1],
        "☾ Evening",
        &state.routine.evening,
        state.routine.evening_minutes(),
        Colors::EVENING,
    );

    let tips = vec![
        Line::from(Span::styled(
            " Pro tips",
            Style::default()
                .fg(Colors::SECONDARY)
                .add_modifier(Modifier::BOLD),
        )),
        bullet("Wait 5-10 minutes between applying different serums"),
        bullet("Start retinol products slowly (2-3 times per week)"),
        bullet("Always patch test new products"),
        bullet("Be consistent for 4-6 weeks to see results"),
    ];
    f.render_widget(
        Paragraph::new(tips).block(Block::default().borders(Borders::TOP)),
        chunks[2],
    );

    let instructions = Paragraph::new(Line::from(vec![
        Span::styled(" [Enter] ", Styles::key()),
        Span::raw("Complete Setup"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(instructions, chunks[3]);
}

fn render_routine_half(
    f: &mut Frame,
    area: Rect,
    label: &str,
    products: &[Product],
    minutes: u32,
    accent: ratatui::style::Color,
) {
    let mut lines = Vec::new();
    for (i, product) in products.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:02} ", i + 1),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                product.name,
                Style::default()
                    .fg(Colors::FG_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", product.category.application_note()),
            Styles::hint(),
        )));
        lines.push(Line::from(""));
    }
    if products.is_empty() {
        lines.push(Line::from(Span::styled(
            " No products in this routine",
            Styles::hint(),
        )));
    }

    let block_title = format!(" {label} (~{minutes} min) ");
    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(block_title)
                .border_style(Style::default().fg(accent)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

// ============================================================================
// Final Screen
// ============================================================================

pub fn render_final(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Selected products
            Constraint::Length(5), // Profile recap
            Constraint::Length(6), // Next steps
            Constraint::Length(3), // Instructions
        ])
        .split(area);

    let title = Paragraph::new("✓ Routine Ready! Your personalized skincare journey starts now")
        .style(
            Style::default()
                .fg(Colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    let mut product_lines = Vec::new();
    for product in state.selection.members() {
        product_lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<28}", product.name),
                Style::default().fg(Colors::FG_PRIMARY),
            ),
            Span::styled(format!("{:<12}", product.category.to_string()), Styles::hint()),
            Span::styled(
                format!("₹{}", product.price),
                Style::default().fg(Colors::SECONDARY),
            ),
        ]));
    }
    product_lines.push(Line::from(""));
    product_lines.push(Line::from(vec![
        Span::styled(
            " Total",
            Style::default()
                .fg(Colors::FG_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ₹{}", state.selection.total()),
            Style::default()
                .fg(Colors::SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    let products_widget = Paragraph::new(product_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Your Selected Products "),
    );
    f.render_widget(products_widget, chunks[1]);

    if let Some(profile) = &state.profile {
        let recap = vec![
            Line::from(vec![
                Span::styled(" Type: ", Styles::hint()),
                Span::raw(profile.skin_type.to_string()),
                Span::styled("   Age: ", Styles::hint()),
                Span::raw(profile.age.to_string()),
            ]),
            Line::from(vec![
                Span::styled(" Concerns: ", Styles::hint()),
                Span::raw(format!("{} identified", profile.concerns.len())),
                Span::styled("   Sensitivity: ", Styles::hint()),
                Span::raw(profile.sensitivity.to_string()),
            ]),
        ];
        let recap_widget = Paragraph::new(recap).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Your Skin Profile "),
        );
        f.render_widget(recap_widget, chunks[2]);
    }

    let next_steps = vec![
        bullet("Start with your basic routine for 2 weeks"),
        bullet("Introduce actives gradually (alternate nights)"),
        bullet("Track your progress with photos"),
        bullet("Reassess after 6-8 weeks"),
    ];
    let next_widget = Paragraph::new(next_steps).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" What's Next? "),
    );
    f.render_widget(next_widget, chunks[3]);

    let instructions = Paragraph::new(Line::from(vec![
        Span::styled(" [r] ", Styles::key()),
        Span::raw("Start New Analysis  "),
        Span::styled(" [Enter] ", Styles::key()),
        Span::raw("Exit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(instructions, chunks[4]);
}
