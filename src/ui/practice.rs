use crate::input::PracticeView;
use crate::models::AnswerResult;
use crate::session::Step;
use crate::ui::layout::calculate_practice_chunks;
use crate::utils::render_emphasis;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn draw_practice(f: &mut Frame, view: &mut PracticeView) {
    let layout = calculate_practice_chunks(f.area());
    let (number, total) = view.session.position();
    let score = view.session.score();
    let selected_option = view.selected_option;
    let status_message = view.status_message.clone();

    let Step::Question(current) = view.session.current_question() else {
        return;
    };

    let progress = format!(
        "Frage {} / {} - {}  |  Punkte: {} / {}",
        number,
        total,
        current.exercise.grammar_case.label(),
        score.correct,
        score.answered
    );
    let header = Paragraph::new(progress)
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let mut case_text = Text::default();
    case_text.push_line(Line::from(Span::styled(
        current.exercise.grammar_case.description(),
        Style::default().fg(Color::Gray),
    )));
    if current.is_first_in_exercise() {
        case_text.push_line(Line::from(Span::styled(
            current.exercise.instructions.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    }
    let case_info = Paragraph::new(case_text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(current.exercise.grammar_case.label()),
        );
    f.render_widget(case_info, layout.case_area);

    let question = Paragraph::new(render_emphasis(&current.question.emphasized_text()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Frage"));
    f.render_widget(question, layout.question_area);

    let answered = current.answered;
    let items: Vec<ListItem> = current
        .question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let mut style = Style::default();
            let mut marker = "  ";
            if let Some(result) = answered {
                if *option == result.correct_answer {
                    style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
                    marker = "✓ ";
                } else if i == selected_option {
                    style = style.fg(Color::Red).add_modifier(Modifier::BOLD);
                    marker = "✗ ";
                }
            } else if i == selected_option {
                style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
                marker = "> ";
            }
            ListItem::new(format!("{}{}. {}", marker, i + 1, option)).style(style)
        })
        .collect();
    let options = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Antworten / Options"),
    );
    f.render_widget(options, layout.options_area);

    let feedback = Paragraph::new(feedback_text(answered, status_message.as_deref()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Erklärung"));
    f.render_widget(feedback, layout.feedback_area);

    let mut first_line = Vec::new();
    if answered.is_some() {
        first_line.extend([Span::styled("Enter", key_style()), Span::from(" Next  ")]);
    } else {
        first_line.extend([
            Span::styled("↑/↓", key_style()),
            Span::from(" Choose  "),
            Span::styled("1-4", key_style()),
            Span::from(" Answer  "),
            Span::styled("Enter", key_style()),
            Span::from(" Submit  "),
        ]);
    }
    first_line.extend([Span::styled("Esc", key_style()), Span::from(" Quit to Menu")]);
    let help_text = vec![
        Line::from(first_line),
        Line::from(vec![Span::styled("Ctrl+C", key_style()), Span::from(" Exit App")]),
    ];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn feedback_text(answered: Option<&AnswerResult>, status_message: Option<&str>) -> Text<'static> {
    let mut text = Text::default();
    match answered {
        Some(result) if result.is_correct => {
            text.push_line(Line::from(Span::styled(
                "✓ Richtig! Correct!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::from(result.explanation.clone()));
        }
        Some(result) => {
            text.push_line(Line::from(Span::styled(
                format!("✗ Falsch. Richtig ist: {}", result.correct_answer),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::from(result.explanation.clone()));
        }
        None => {}
    }
    if let Some(message) = status_message {
        text.push_line(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    text
}

pub fn draw_quit_confirmation(f: &mut Frame, view: &PracticeView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Übung abbrechen? / Quit Practice")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    f.render_widget(
        Paragraph::new(abandon_text(view))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );

    let help_text = vec![Line::from(vec![
        Span::styled("y", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::from(" Ja, zum Menü  "),
        Span::styled("n/Esc", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::from(" Weiter üben  "),
        Span::styled("Ctrl+C", key_style()),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

/// What the player gives up by leaving: the current question number and running score.
fn abandon_text(view: &PracticeView) -> Text<'static> {
    let (number, total) = view.session.position();
    let score = view.session.score();
    let mut text = Text::default();
    text.push_line(Line::from(format!(
        "Frage {} / {}  |  Punkte: {} / {}",
        number, total, score.correct, score.answered
    )));
    let warning = if score.answered == 0 {
        "Noch keine Antworten. Nothing answered yet."
    } else {
        "Dein Ergebnis geht verloren. This score will be lost."
    };
    text.push_line(Line::from(Span::styled(
        warning,
        Style::default().fg(Color::Gray),
    )));
    text
}
