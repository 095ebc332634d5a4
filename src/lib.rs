pub mod catalog;
pub mod config;
pub mod emphasis;
pub mod error;
pub mod input;
pub mod logger;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

pub use catalog::build_catalog;
pub use config::PracticeConfig;
pub use emphasis::{parse_emphasis, TextRun};
pub use error::{PreconditionViolation, Result};
pub use input::{
    handle_menu_input, handle_practice_input, handle_quit_confirm_input, handle_summary_input,
    PracticeView,
};
pub use models::{AnswerResult, AppState, Exercise, GrammarCase, Question, Score};
pub use session::{CurrentQuestion, PracticeSession, ProgressState, SessionState, Step};
pub use ui::{draw_menu, draw_practice, draw_quit_confirmation, draw_summary};
