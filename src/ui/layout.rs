use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct PracticeLayout {
    pub header_area: Rect,
    pub case_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub header_area: Rect,
    pub score_area: Rect,
    pub breakdown_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_practice_chunks(area: Rect) -> PracticeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(6),
            Constraint::Length(4),
        ])
        .split(area);

    PracticeLayout {
        header_area: chunks[0],
        case_area: chunks[1],
        question_area: chunks[2],
        options_area: chunks[3],
        feedback_area: chunks[4],
        help_area: chunks[5],
    }
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    SummaryLayout {
        header_area: chunks[0],
        score_area: chunks[1],
        breakdown_area: chunks[2],
        footer_area: chunks[3],
    }
}
