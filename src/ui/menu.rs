use crate::models::{Exercise, GrammarCase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn format_case_item(exercise: &Exercise) -> String {
    format!(
        "{} ({} Fragen)",
        exercise.grammar_case.label(),
        exercise.questions.len()
    )
}

pub fn draw_menu(f: &mut Frame, catalog: &[Exercise], seed: Option<u64>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Berlin entdecken - Practice")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = catalog
        .iter()
        .map(|exercise| {
            let style = if exercise.grammar_case == GrammarCase::Mixed {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(format_case_item(exercise)).style(style)
        })
        .collect();

    let total: usize = catalog.iter().map(|e| e.questions.len()).sum();
    let mut list_title = format!("Der, die, das? {} Fragen, gemischt", total);
    if let Some(seed) = seed {
        list_title.push_str(&format!(" (seed {})", seed));
    }
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(list_title));
    f.render_widget(list, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Start Practice  "),
        Span::styled(
            "q/Esc/Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_format_case_item() {
        let catalog = build_catalog();
        assert_eq!(format_case_item(&catalog[0]), "Nominativ (4 Fragen)");
    }

    #[test]
    fn test_draw_menu_lists_cases() {
        let catalog = build_catalog();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| draw_menu(f, &catalog, Some(7))).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        for case in GrammarCase::ALL {
            assert!(screen.contains(case.label()));
        }
        assert!(screen.contains("16 Fragen"));
        assert!(screen.contains("seed 7"));
    }
}
