//! Dashboard rendering and the terminal loop.

use super::app::{ChartView, Pane, ResultsApp};
use super::events::{handle_key_event, Event, EventHandler};
use super::theme::{colors, render_footer_hints, Styles};
use super::widgets::{
    check_terminal_size, render_category_gauges, render_radar, render_size_warning, MIN_HEIGHT,
    MIN_WIDTH,
};
use crate::narrative::{narrative_lines, NarrativeLine};
use crate::reports::AuditReport;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{self, stdout};

/// Show the results dashboard until the user quits.
pub fn run_results(report: &AuditReport) -> io::Result<()> {
    let mut app = ResultsApp::new(report.clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut ResultsApp) -> io::Result<()> {
    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(_, _) => {}
            Event::Tick => app.tick += 1,
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Main render function
pub fn render(frame: &mut Frame, app: &ResultsApp) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    // Header, body, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(16),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], &app.report);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(11)])
        .split(body[0]);
    render_score(frame, left[0], &app.report);
    match app.chart {
        ChartView::Radar => render_radar(frame, left[1], &app.report.result.radar_data),
        ChartView::Gauges => render_category_gauges(frame, left[1], &app.report.result.radar_data),
    }

    let initiatives_height = (app.report.result.recommendations.len() as u16) * 2 + 2;
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(initiatives_height)])
        .split(body[1]);
    render_narrative(frame, right[0], app);
    render_initiatives(frame, right[1], app);

    render_footer(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, report: &AuditReport) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(false))
        .title(Span::styled(
            " Infrastructure Maturity Report ",
            Styles::header_title(),
        ));

    let lines = vec![
        Line::from(vec![
            Span::styled("Client: ", Styles::label()),
            Span::styled(report.profile.company.clone(), Styles::value()),
            Span::styled("  │  Contact: ", Styles::label()),
            Span::styled(report.profile.representative(), Styles::text()),
        ]),
        Line::from(vec![
            Span::styled("Auth ID: ", Styles::label()),
            Span::styled(report.report_id.clone(), Styles::value()),
            Span::styled("  │  Date: ", Styles::label()),
            Span::styled(
                report.submitted_at.format("%Y-%m-%d %H:%M UTC").to_string(),
                Styles::text(),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_score(frame: &mut Frame, area: Rect, report: &AuditReport) {
    let result = &report.result;
    let maturity_color = colors().maturity_color(result.maturity);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(false))
        .title(Span::styled(" Diagnostic Synthesis ", Styles::section_title()));

    let lines = vec![
        Line::from(vec![
            Span::styled(
                result.display_score(),
                Style::default().fg(maturity_color).bold(),
            ),
            Span::styled(" / 10  ", Styles::text_muted()),
            Span::styled(
                format!("{} Maturity", result.maturity),
                Style::default().fg(maturity_color).bold(),
            ),
        ]),
        Line::from(""),
        Line::styled(result.maturity.synthesis(), Styles::text()),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn narrative_text(analysis: &str) -> Vec<Line<'_>> {
    narrative_lines(analysis)
        .into_iter()
        .map(|line| match line {
            NarrativeLine::Header(header) => Line::styled(header, Styles::section_title()),
            NarrativeLine::Text(text) => Line::styled(text, Styles::text()),
            NarrativeLine::Blank => Line::from(""),
        })
        .collect()
}

fn render_narrative(frame: &mut Frame, area: Rect, app: &ResultsApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus == Pane::Narrative))
        .title(Span::styled(" AI Executive Summary ", Styles::section_title()));

    let paragraph = match app.report.result.ai_analysis.as_deref() {
        Some(analysis) => Paragraph::new(narrative_text(analysis))
            .wrap(Wrap { trim: false })
            .scroll((app.narrative_scroll, 0)),
        None => Paragraph::new(Line::styled(
            "Narrative analysis was not requested for this audit.",
            Styles::text_muted(),
        )),
    };
    frame.render_widget(paragraph.block(block), area);
}

fn render_initiatives(frame: &mut Frame, area: Rect, app: &ResultsApp) {
    let scheme = colors();
    let items: Vec<ListItem> = app
        .report
        .result
        .recommendations
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{:02} ", i + 1), Styles::label()),
                    Span::styled(rec.title.clone(), Styles::value()),
                    Span::styled(format!("  {} · ", rec.category), Styles::text_muted()),
                    Span::styled(
                        format!("{} Impact", rec.impact),
                        Style::default().fg(scheme.impact_color(rec.impact)),
                    ),
                ]),
                Line::styled(format!("   {}", rec.description), Styles::text_muted()),
            ])
        })
        .collect();

    let focused = app.focus == Pane::Initiatives;
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border(focused))
                .title(Span::styled(" Priority Initiatives ", Styles::section_title())),
        )
        .highlight_style(Styles::selected());

    let mut state = ListState::default().with_selected(focused.then_some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &ResultsApp) {
    let line = app.status_message.as_ref().map_or_else(
        || {
            Line::from(render_footer_hints(&[
                ("q", "quit"),
                ("Tab", "switch pane"),
                ("↑↓", "scroll"),
                ("PgUp/PgDn", "page"),
                ("c", "chart"),
                ("t", "theme"),
            ]))
        },
        |message| Line::styled(message.clone(), Styles::shortcut_key()),
    );
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerLevel, CompletedAnswers, UserProfile};
    use crate::scoring::AuditScorer;
    use crate::session::SubmissionTicket;
    use ratatui::backend::TestBackend;

    fn report(analysis: Option<&str>) -> AuditReport {
        let answers = CompletedAnswers::uniform(AnswerLevel::Intermediate);
        let ticket = SubmissionTicket {
            profile: UserProfile {
                company: "Acme Foods".to_string(),
                name: "Jane Doe".to_string(),
                ..UserProfile::default()
            },
            answers,
            submitted_at: chrono::Utc::now(),
        };
        let mut result = AuditScorer::new().score(&answers);
        if let Some(text) = analysis {
            result = result.with_analysis(text);
        }
        AuditReport::from_submission(&ticket, result)
    }

    fn draw(app: &ResultsApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_dashboard_renders_report() {
        let app = ResultsApp::new(report(Some("### I. Position\nSolid foundation.")));
        let screen = draw(&app, 120, 40);

        assert!(screen.contains("Infrastructure Maturity Report"));
        assert!(screen.contains("Acme Foods"));
        assert!(screen.contains(&app.report.report_id));
        assert!(screen.contains("5.0 / 10"));
        assert!(screen.contains("Medium Maturity"));
        assert!(screen.contains("Actual Resilience vs Industry Leader Goal"));
        assert!(screen.contains("I. Position"));
        assert!(screen.contains("Solid foundation."));
        assert!(screen.contains("Priority Initiatives"));
    }

    #[test]
    fn test_gauge_view_names_categories() {
        let mut app = ResultsApp::new(report(None));
        app.toggle_chart();
        let screen = draw(&app, 120, 40);
        assert!(screen.contains("Category Scores"));
        assert!(screen.contains("Data Capture"));
    }

    #[test]
    fn test_dashboard_without_narrative() {
        let app = ResultsApp::new(report(None));
        let screen = draw(&app, 120, 40);
        assert!(screen.contains("not requested"));
    }

    #[test]
    fn test_small_terminal_warning() {
        let app = ResultsApp::new(report(None));
        let screen = draw(&app, 60, 20);
        assert!(screen.contains("Terminal too small"));
    }
}
