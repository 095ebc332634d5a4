use crate::emphasis::TextRun;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Render parsed prompt runs as one line, emphasized runs bold and highlighted.
pub fn render_emphasis(runs: &[TextRun]) -> Line<'static> {
    let spans: Vec<Span<'static>> = runs
        .iter()
        .map(|run| {
            if run.emphasized {
                Span::styled(
                    run.text.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::from(run.text.clone())
            }
        })
        .collect();
    Line::from(spans)
}
