use crate::emphasis::{parse_emphasis, plain_text};
use crate::session::SessionState;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::{pad_to_width, truncate_string};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const LABEL_WIDTH: usize = 18;

pub fn draw_summary(f: &mut Frame, state: &SessionState) {
    let layout = calculate_summary_chunks(f.area());
    let score = state.score();

    let title = Paragraph::new("Übung beendet - Practice Complete")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let score_line = Line::from(vec![
        Span::styled(
            format!("Ergebnis: {} / {}", score.correct, score.answered),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::from(format!("  ({:.0}%)", score.percentage())),
    ]);
    let score_widget = Paragraph::new(vec![score_line, Line::from(verdict(score.percentage()))])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(score_widget, layout.score_area);

    let breakdown = Paragraph::new(breakdown_text(state))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Nach Fall / By case"));
    f.render_widget(breakdown, layout.breakdown_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Restart  "),
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Main Menu  "),
        Span::styled(
            "q/Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}

fn verdict(percentage: f64) -> &'static str {
    if percentage >= 100.0 {
        "Ausgezeichnet! Perfect score."
    } else if percentage >= 75.0 {
        "Sehr gut! Very good."
    } else if percentage >= 50.0 {
        "Gut gemacht. Keep practicing."
    } else {
        "Weiter üben! Try again."
    }
}

fn breakdown_text(state: &SessionState) -> Text<'static> {
    let mut text = Text::default();
    for tally in state.case_breakdown() {
        let style = if tally.score.answered > 0 && tally.score.correct == tally.score.answered {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        text.push_line(Line::from(Span::styled(
            format!(
                "{}{} / {}",
                pad_to_width(tally.grammar_case.label(), LABEL_WIDTH),
                tally.score.correct,
                tally.score.answered
            ),
            style,
        )));
    }

    let missed: Vec<_> = state.history().iter().filter(|r| !r.is_correct).collect();
    if !missed.is_empty() {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            "Fehler / Mistakes:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for record in missed {
            let question = plain_text(&parse_emphasis(&record.question));
            text.push_line(Line::from(format!(
                "  {}  ({} → {})",
                truncate_string(&question, 56),
                record.selected,
                record.correct_answer
            )));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;
    use crate::config::PracticeConfig;
    use crate::session::{PracticeSession, Step};
    use ratatui::{backend::TestBackend, Terminal};

    fn finished_session(miss_first: bool) -> PracticeSession {
        let config = PracticeConfig {
            seed: Some(2),
            ..PracticeConfig::default()
        };
        let mut session = PracticeSession::with_config(build_catalog(), &config);
        let mut first = true;
        loop {
            let question = match session.current_question() {
                Step::Question(current) => current.question.clone(),
                Step::Completed(_) => break,
            };
            let pick = if miss_first && first {
                question.options.iter().find(|o| **o != question.answer).unwrap().clone()
            } else {
                question.answer.clone()
            };
            first = false;
            session.submit_answer(&pick).unwrap();
            session.advance();
        }
        session
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(verdict(100.0), "Ausgezeichnet! Perfect score.");
        assert_eq!(verdict(75.0), "Sehr gut! Very good.");
        assert_eq!(verdict(50.0), "Gut gemacht. Keep practicing.");
        assert_eq!(verdict(0.0), "Weiter üben! Try again.");
    }

    #[test]
    fn test_breakdown_lists_every_case() {
        let session = finished_session(false);
        let text = breakdown_text(session.state());
        assert_eq!(text.lines.len(), 4);
    }

    #[test]
    fn test_breakdown_lists_mistakes_without_markers() {
        let session = finished_session(true);
        let text = breakdown_text(session.state());
        // Four cases, blank line, heading, one mistake.
        assert_eq!(text.lines.len(), 7);
        let mistake: String = text.lines[6]
            .spans
            .iter()
            .map(|s| s.content.to_string())
            .collect();
        assert!(!mistake.contains("**"));
        assert!(mistake.contains('→'));
    }

    #[test]
    fn test_draw_summary_shows_final_score() {
        let session = finished_session(true);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| draw_summary(f, session.state()))
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Ergebnis: 15 / 16"));
    }
}
