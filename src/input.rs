use crate::config::PracticeConfig;
use crate::logger;
use crate::models::{AppState, Exercise};
use crate::session::{PracticeSession, Step};
use crossterm::event::{KeyCode, KeyEvent};

/// Practice screen state: the engine plus the option cursor and last error line.
#[derive(Debug)]
pub struct PracticeView {
    pub session: PracticeSession,
    pub selected_option: usize,
    pub status_message: Option<String>,
}

impl PracticeView {
    pub fn new(session: PracticeSession) -> Self {
        Self {
            session,
            selected_option: 0,
            status_message: None,
        }
    }

    pub fn restart(&mut self) {
        self.session.reset();
        self.selected_option = 0;
        self.status_message = None;
    }

    fn submit_option(&mut self, index: usize) {
        let option = match self.session.current_question() {
            Step::Question(current) => match current.question.options.get(index) {
                Some(option) => option.clone(),
                None => return,
            },
            Step::Completed(_) => return,
        };
        self.selected_option = index;

        match self.session.submit_answer(&option) {
            Ok(_) => self.status_message = None,
            Err(e) => {
                logger::log(&format!("Rejected answer {:?}: {}", option, e));
                self.status_message = Some(e.to_string());
            }
        }
    }

    fn next_question(&mut self, app_state: &mut AppState) {
        self.session.advance();
        self.selected_option = 0;
        self.status_message = None;
        if self.session.is_completed() {
            *app_state = AppState::Summary;
        }
    }
}

pub fn handle_practice_input(view: &mut PracticeView, key: KeyEvent, app_state: &mut AppState) {
    let (option_count, answered) = match view.session.current_question() {
        Step::Question(current) => (current.question.options.len(), current.answered.is_some()),
        Step::Completed(_) => {
            *app_state = AppState::Summary;
            return;
        }
    };

    match key.code {
        KeyCode::Esc => *app_state = AppState::PracticeQuitConfirm,
        KeyCode::Up | KeyCode::Char('k') if !answered => {
            view.selected_option = view.selected_option.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') if !answered => {
            if view.selected_option < option_count.saturating_sub(1) {
                view.selected_option += 1;
            }
        }
        KeyCode::Char(c @ '1'..='9') if !answered => {
            let index = (c as usize) - ('1' as usize);
            if index < option_count {
                view.submit_option(index);
            }
        }
        KeyCode::Enter => {
            if answered {
                view.next_question(app_state);
            } else {
                view.submit_option(view.selected_option);
            }
        }
        _ => {}
    }
}

/// Menu keys. Returns true when the app should exit.
pub fn handle_menu_input(
    practice: &mut Option<PracticeView>,
    catalog: &[Exercise],
    config: &PracticeConfig,
    key: KeyEvent,
    app_state: &mut AppState,
) -> bool {
    match key.code {
        KeyCode::Enter => {
            let session = PracticeSession::with_config(catalog.to_vec(), config);
            *practice = Some(PracticeView::new(session));
            *app_state = AppState::Practice;
            false
        }
        KeyCode::Char('q') | KeyCode::Esc => true,
        _ => false,
    }
}

pub fn handle_quit_confirm_input(
    practice: &mut Option<PracticeView>,
    key: KeyEvent,
    app_state: &mut AppState,
) {
    match key.code {
        KeyCode::Char('y') => {
            if let Some(view) = practice.take() {
                let score = view.session.score();
                logger::log(&format!(
                    "Practice abandoned at {}/{}",
                    score.correct, score.answered
                ));
            }
            *app_state = AppState::Menu;
        }
        KeyCode::Char('n') | KeyCode::Esc => *app_state = AppState::Practice,
        _ => {}
    }
}

/// Summary keys. Returns true when the app should exit.
pub fn handle_summary_input(
    practice: &mut Option<PracticeView>,
    key: KeyEvent,
    app_state: &mut AppState,
) -> bool {
    match key.code {
        KeyCode::Char('r') => {
            if let Some(view) = practice.as_mut() {
                view.restart();
                *app_state = AppState::Practice;
            }
            false
        }
        KeyCode::Char('m') => {
            *practice = None;
            *app_state = AppState::Menu;
            false
        }
        KeyCode::Char('q') | KeyCode::Esc => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;
    use crate::models::Score;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view() -> PracticeView {
        let config = PracticeConfig {
            seed: Some(99),
            ..PracticeConfig::default()
        };
        PracticeView::new(PracticeSession::with_config(build_catalog(), &config))
    }

    fn answer_index(view: &mut PracticeView) -> usize {
        match view.session.current_question() {
            Step::Question(current) => current
                .question
                .options
                .iter()
                .position(|o| *o == current.question.answer)
                .unwrap(),
            Step::Completed(_) => panic!("no current question"),
        }
    }

    #[test]
    fn test_option_cursor_bounds() {
        let mut view = view();
        let mut state = AppState::Practice;

        handle_practice_input(&mut view, key(KeyCode::Up), &mut state);
        assert_eq!(view.selected_option, 0);

        for _ in 0..10 {
            handle_practice_input(&mut view, key(KeyCode::Down), &mut state);
        }
        assert_eq!(view.selected_option, 3);
        assert_eq!(state, AppState::Practice);
    }

    #[test]
    fn test_enter_submits_then_advances() {
        let mut view = view();
        let mut state = AppState::Practice;
        view.selected_option = answer_index(&mut view);

        handle_practice_input(&mut view, key(KeyCode::Enter), &mut state);
        assert_eq!(
            view.session.score(),
            Score {
                correct: 1,
                answered: 1
            }
        );
        assert!(view.session.last_result().is_some());

        handle_practice_input(&mut view, key(KeyCode::Enter), &mut state);
        assert!(view.session.last_result().is_none());
        assert_eq!(view.selected_option, 0);
        assert_eq!(view.session.position(), (2, 16));
    }

    #[test]
    fn test_number_key_submits_directly() {
        let mut view = view();
        let mut state = AppState::Practice;
        let index = answer_index(&mut view);
        let digit = char::from(b'1' + index as u8);

        handle_practice_input(&mut view, key(KeyCode::Char(digit)), &mut state);
        assert_eq!(view.session.score().correct, 1);
        assert_eq!(view.selected_option, index);
    }

    #[test]
    fn test_keys_after_answer_do_not_double_count() {
        let mut view = view();
        let mut state = AppState::Practice;
        handle_practice_input(&mut view, key(KeyCode::Char('1')), &mut state);
        handle_practice_input(&mut view, key(KeyCode::Char('2')), &mut state);
        handle_practice_input(&mut view, key(KeyCode::Down), &mut state);
        assert_eq!(view.session.score().answered, 1);
        assert_eq!(view.selected_option, 0);
    }

    #[test]
    fn test_out_of_range_digit_is_ignored() {
        let mut view = view();
        let mut state = AppState::Practice;
        handle_practice_input(&mut view, key(KeyCode::Char('9')), &mut state);
        assert_eq!(view.session.score().answered, 0);
    }

    #[test]
    fn test_escape_asks_to_quit() {
        let mut view = view();
        let mut state = AppState::Practice;
        handle_practice_input(&mut view, key(KeyCode::Esc), &mut state);
        assert_eq!(state, AppState::PracticeQuitConfirm);
    }

    #[test]
    fn test_full_run_reaches_summary() {
        let mut view = view();
        let mut state = AppState::Practice;
        for _ in 0..16 {
            assert_eq!(state, AppState::Practice);
            view.selected_option = answer_index(&mut view);
            handle_practice_input(&mut view, key(KeyCode::Enter), &mut state);
            handle_practice_input(&mut view, key(KeyCode::Enter), &mut state);
        }
        assert_eq!(state, AppState::Summary);
        assert_eq!(
            view.session.score(),
            Score {
                correct: 16,
                answered: 16
            }
        );

        view.restart();
        assert_eq!(view.session.score(), Score::default());
        assert!(!view.session.is_completed());
    }

    #[test]
    fn test_menu_enter_starts_practice() {
        let mut practice = None;
        let mut state = AppState::Menu;
        let config = PracticeConfig {
            seed: Some(1),
            ..PracticeConfig::default()
        };
        let quit = handle_menu_input(
            &mut practice,
            &build_catalog(),
            &config,
            key(KeyCode::Enter),
            &mut state,
        );
        assert!(!quit);
        assert_eq!(state, AppState::Practice);
        let view = practice.unwrap();
        assert_eq!(view.session.score(), Score::default());
        assert_eq!(view.session.position(), (1, 16));
    }

    #[test]
    fn test_menu_q_quits() {
        let mut practice = None;
        let mut state = AppState::Menu;
        let config = PracticeConfig::default();
        let catalog = build_catalog();
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            assert!(handle_menu_input(
                &mut practice,
                &catalog,
                &config,
                key(code),
                &mut state
            ));
        }
        assert!(practice.is_none());
        assert_eq!(state, AppState::Menu);
    }

    #[test]
    fn test_quit_confirm_yes_drops_session() {
        let mut practice = Some(view());
        let mut state = AppState::PracticeQuitConfirm;
        handle_quit_confirm_input(&mut practice, key(KeyCode::Char('y')), &mut state);
        assert_eq!(state, AppState::Menu);
        assert!(practice.is_none());
    }

    #[test]
    fn test_quit_confirm_no_resumes_with_score() {
        let mut practice = Some(view());
        let mut state = AppState::Practice;
        if let Some(view) = practice.as_mut() {
            view.selected_option = answer_index(view);
            handle_practice_input(view, key(KeyCode::Enter), &mut state);
            handle_practice_input(view, key(KeyCode::Esc), &mut state);
        }
        assert_eq!(state, AppState::PracticeQuitConfirm);

        handle_quit_confirm_input(&mut practice, key(KeyCode::Char('n')), &mut state);
        assert_eq!(state, AppState::Practice);
        let view = practice.as_ref().unwrap();
        assert_eq!(
            view.session.score(),
            Score {
                correct: 1,
                answered: 1
            }
        );
        assert!(view.session.last_result().is_some());
    }

    #[test]
    fn test_quit_confirm_ignores_other_keys() {
        let mut practice = Some(view());
        let mut state = AppState::PracticeQuitConfirm;
        handle_quit_confirm_input(&mut practice, key(KeyCode::Char('x')), &mut state);
        assert_eq!(state, AppState::PracticeQuitConfirm);
        assert!(practice.is_some());
    }

    #[test]
    fn test_summary_r_restarts() {
        let mut practice = Some(view());
        let mut state = AppState::Practice;
        if let Some(view) = practice.as_mut() {
            for _ in 0..16 {
                handle_practice_input(view, key(KeyCode::Char('1')), &mut state);
                handle_practice_input(view, key(KeyCode::Enter), &mut state);
            }
        }
        assert_eq!(state, AppState::Summary);

        let quit = handle_summary_input(&mut practice, key(KeyCode::Char('r')), &mut state);
        assert!(!quit);
        assert_eq!(state, AppState::Practice);
        let view = practice.as_ref().unwrap();
        assert_eq!(view.session.score(), Score::default());
        assert_eq!(view.session.state().cursors(), (0, 0));
        assert!(view.session.state().history().is_empty());
    }

    #[test]
    fn test_summary_m_returns_to_menu() {
        let mut practice = Some(view());
        let mut state = AppState::Summary;
        assert!(!handle_summary_input(&mut practice, key(KeyCode::Char('m')), &mut state));
        assert_eq!(state, AppState::Menu);
        assert!(practice.is_none());
    }

    #[test]
    fn test_summary_q_and_esc_quit() {
        let mut practice = Some(view());
        let mut state = AppState::Summary;
        assert!(handle_summary_input(&mut practice, key(KeyCode::Char('q')), &mut state));
        assert!(handle_summary_input(&mut practice, key(KeyCode::Esc), &mut state));
        assert_eq!(state, AppState::Summary);
    }
}
