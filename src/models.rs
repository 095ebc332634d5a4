use crate::emphasis::{parse_emphasis, TextRun};

/// German noun-phrase case drilled by an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarCase {
    Nominativ,
    Akkusativ,
    Dativ,
    Mixed,
}

impl GrammarCase {
    pub const ALL: [GrammarCase; 4] = [
        GrammarCase::Nominativ,
        GrammarCase::Akkusativ,
        GrammarCase::Dativ,
        GrammarCase::Mixed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GrammarCase::Nominativ => "Nominativ",
            GrammarCase::Akkusativ => "Akkusativ",
            GrammarCase::Dativ => "Dativ",
            GrammarCase::Mixed => "Gemischt / Mixed",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GrammarCase::Nominativ => {
                "Der Nominativ markiert das Subjekt: Wer oder was tut etwas? \
                 The nominative marks the subject of the sentence (der / die / das)."
            }
            GrammarCase::Akkusativ => {
                "Der Akkusativ markiert das direkte Objekt: Wen oder was? \
                 Only the masculine article changes: der becomes den."
            }
            GrammarCase::Dativ => {
                "Der Dativ markiert das indirekte Objekt und folgt Präpositionen wie mit, \
                 bei, von, zu: Wem? der/das become dem, die becomes der."
            }
            GrammarCase::Mixed => {
                "Alle Fälle gemischt. Decide first which case the verb or preposition \
                 requires, then pick the matching article."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Prompt, may contain `**word**` emphasis markers.
    pub text: String,
    pub answer: String,
    pub options: Vec<String>,
    pub explanation: String,
}

impl Question {
    pub fn new(text: &str, answer: &str, options: [&str; 4], explanation: &str) -> Self {
        Self {
            text: text.to_string(),
            answer: answer.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            explanation: explanation.to_string(),
        }
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    pub fn emphasized_text(&self) -> Vec<TextRun> {
        parse_emphasis(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub grammar_case: GrammarCase,
    pub instructions: String,
    pub questions: Vec<Question>,
}

/// Running tally of correct answers over answered questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub answered: usize,
}

impl Score {
    pub fn percentage(&self) -> f64 {
        if self.answered == 0 {
            0.0
        } else {
            self.correct as f64 / self.answered as f64 * 100.0
        }
    }
}

/// Feedback produced by submitting an option for the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub is_correct: bool,
    pub explanation: String,
    pub correct_answer: String,
    pub updated_score: Score,
}

/// One submitted answer, kept for the end-of-session breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub grammar_case: GrammarCase,
    pub question: String,
    pub selected: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseTally {
    pub grammar_case: GrammarCase,
    pub score: Score,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Practice,
    PracticeQuitConfirm,
    Summary,
}
