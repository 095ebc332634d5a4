use crate::config::PracticeConfig;
use crate::error::{PreconditionViolation, Result};
use crate::logger;
use crate::models::{
    AnswerRecord, AnswerResult, CaseTally, Exercise, GrammarCase, Question, Score,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Where the progression cursor stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    InProgress {
        exercise_index: usize,
        question_index: usize,
    },
    Completed,
}

/// The question on screen together with its parent exercise.
#[derive(Debug, Clone, Copy)]
pub struct CurrentQuestion<'a> {
    pub exercise: &'a Exercise,
    pub question: &'a Question,
    pub exercise_index: usize,
    pub question_index: usize,
    /// Feedback for this question once it has been answered.
    pub answered: Option<&'a AnswerResult>,
}

impl CurrentQuestion<'_> {
    pub fn is_first_in_exercise(&self) -> bool {
        self.question_index == 0
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Step<'a> {
    Question(CurrentQuestion<'a>),
    Completed(Score),
}

/// Mutable state of one practice attempt over a shuffled copy of the catalog.
#[derive(Debug, Clone)]
pub struct SessionState {
    exercises: Vec<Exercise>,
    current_exercise_index: usize,
    current_question_index: usize,
    score: usize,
    total_answered: usize,
    history: Vec<AnswerRecord>,
    // Set once the current question is answered, cleared by advance.
    current_result: Option<AnswerResult>,
}

impl SessionState {
    /// Copy the catalog, permuting exercise order and each exercise's question order.
    pub fn new<R: Rng + ?Sized>(catalog: &[Exercise], rng: &mut R, shuffle_options: bool) -> Self {
        let mut exercises = catalog.to_vec();
        exercises.shuffle(rng);
        for exercise in &mut exercises {
            exercise.questions.shuffle(rng);
            if shuffle_options {
                for question in &mut exercise.questions {
                    question.options.shuffle(rng);
                }
            }
        }

        Self {
            exercises,
            current_exercise_index: 0,
            current_question_index: 0,
            score: 0,
            total_answered: 0,
            history: Vec::new(),
            current_result: None,
        }
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn cursors(&self) -> (usize, usize) {
        (self.current_exercise_index, self.current_question_index)
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self.score,
            answered: self.total_answered,
        }
    }

    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    pub fn total_questions(&self) -> usize {
        self.exercises.iter().map(|e| e.questions.len()).sum()
    }

    /// Correct/answered counts per grammar case, in catalog case order.
    pub fn case_breakdown(&self) -> Vec<CaseTally> {
        GrammarCase::ALL
            .iter()
            .filter(|case| self.exercises.iter().any(|e| e.grammar_case == **case))
            .map(|&grammar_case| {
                let mut score = Score::default();
                for record in self.history.iter().filter(|r| r.grammar_case == grammar_case) {
                    score.answered += 1;
                    if record.is_correct {
                        score.correct += 1;
                    }
                }
                CaseTally {
                    grammar_case,
                    score,
                }
            })
            .collect()
    }

    /// Cursor position after skipping exhausted exercises, or None once all are done.
    fn resolve(&self) -> Option<(usize, usize)> {
        let mut exercise_index = self.current_exercise_index;
        let mut question_index = self.current_question_index;
        while let Some(exercise) = self.exercises.get(exercise_index) {
            if question_index < exercise.questions.len() {
                return Some((exercise_index, question_index));
            }
            exercise_index += 1;
            question_index = 0;
        }
        None
    }

    /// Roll the cursors over exhausted exercises and report where they land.
    fn settle(&mut self) -> ProgressState {
        match self.resolve() {
            Some((exercise_index, question_index)) => {
                if exercise_index != self.current_exercise_index {
                    logger::log(&format!(
                        "Exercise {} finished, moving to {}",
                        self.current_exercise_index,
                        self.exercises[exercise_index].grammar_case.label()
                    ));
                    self.current_exercise_index = exercise_index;
                    self.current_question_index = question_index;
                }
                ProgressState::InProgress {
                    exercise_index,
                    question_index,
                }
            }
            None => {
                if self.current_exercise_index < self.exercises.len() {
                    self.current_exercise_index = self.exercises.len();
                    self.current_question_index = 0;
                    logger::log(&format!(
                        "Session completed: {}/{}",
                        self.score, self.total_answered
                    ));
                }
                ProgressState::Completed
            }
        }
    }
}

/// Drives one practice attempt: selects the current question, scores answers,
/// advances, and restarts with a fresh shuffle.
#[derive(Debug)]
pub struct PracticeSession {
    catalog: Vec<Exercise>,
    state: SessionState,
    rng: StdRng,
    shuffle_options: bool,
}

impl PracticeSession {
    pub fn new(catalog: Vec<Exercise>) -> Self {
        Self::with_config(catalog, &PracticeConfig::default())
    }

    pub fn with_config(catalog: Vec<Exercise>, config: &PracticeConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = SessionState::new(&catalog, &mut rng, config.shuffle_options);
        logger::log(&format!(
            "New practice session: {} exercises, {} questions, seed {:?}",
            state.exercises.len(),
            state.total_questions(),
            config.seed
        ));

        Self {
            catalog,
            state,
            rng,
            shuffle_options: config.shuffle_options,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn score(&self) -> Score {
        self.state.score()
    }

    pub fn status(&self) -> ProgressState {
        match self.state.resolve() {
            Some((exercise_index, question_index)) => ProgressState::InProgress {
                exercise_index,
                question_index,
            },
            None => ProgressState::Completed,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status() == ProgressState::Completed
    }

    /// 1-based number of the current question and the total, for progress display.
    pub fn position(&self) -> (usize, usize) {
        let total = self.state.total_questions();
        match self.state.resolve() {
            Some((exercise_index, question_index)) => {
                let before: usize = self.state.exercises[..exercise_index]
                    .iter()
                    .map(|e| e.questions.len())
                    .sum();
                (before + question_index + 1, total)
            }
            None => (total, total),
        }
    }

    /// The question to show now. Repeated calls never reshuffle.
    pub fn current_question(&mut self) -> Step<'_> {
        match self.state.settle() {
            ProgressState::InProgress {
                exercise_index,
                question_index,
            } => {
                let exercise = &self.state.exercises[exercise_index];
                Step::Question(CurrentQuestion {
                    exercise,
                    question: &exercise.questions[question_index],
                    exercise_index,
                    question_index,
                    answered: self.state.current_result.as_ref(),
                })
            }
            ProgressState::Completed => Step::Completed(self.state.score()),
        }
    }

    pub fn last_result(&self) -> Option<&AnswerResult> {
        self.state.current_result.as_ref()
    }

    /// Score `selected` against the current question. Accepted once per question.
    pub fn submit_answer(&mut self, selected: &str) -> Result<AnswerResult> {
        let ProgressState::InProgress {
            exercise_index,
            question_index,
        } = self.state.settle()
        else {
            return Err(PreconditionViolation::SessionCompleted);
        };
        if self.state.current_result.is_some() {
            return Err(PreconditionViolation::AlreadyAnswered);
        }

        let exercise = &self.state.exercises[exercise_index];
        let question = &exercise.questions[question_index];
        if !question.has_option(selected) {
            return Err(PreconditionViolation::UnknownOption {
                option: selected.to_string(),
            });
        }

        let is_correct = selected == question.answer;
        let record = AnswerRecord {
            grammar_case: exercise.grammar_case,
            question: question.text.clone(),
            selected: selected.to_string(),
            correct_answer: question.answer.clone(),
            is_correct,
        };
        let explanation = question.explanation.clone();

        if is_correct {
            self.state.score += 1;
        }
        self.state.total_answered += 1;
        self.state.history.push(record.clone());

        let result = AnswerResult {
            is_correct,
            explanation,
            correct_answer: record.correct_answer,
            updated_score: self.state.score(),
        };
        logger::log(&format!(
            "Answered {:?} for {:?} ({}): {}, score {}/{}",
            selected,
            record.question,
            record.grammar_case.label(),
            if is_correct { "correct" } else { "incorrect" },
            result.updated_score.correct,
            result.updated_score.answered
        ));
        self.state.current_result = Some(result.clone());

        Ok(result)
    }

    /// Move past the current question. Does nothing once completed.
    pub fn advance(&mut self) {
        if self.state.settle() == ProgressState::Completed {
            return;
        }
        self.state.current_question_index += 1;
        self.state.current_result = None;
    }

    /// Start over with a fresh shuffle and zeroed counters.
    pub fn reset(&mut self) {
        let previous = self.state.score();
        self.state = SessionState::new(&self.catalog, &mut self.rng, self.shuffle_options);
        logger::log(&format!(
            "Session restarted (previous score {}/{})",
            previous.correct, previous.answered
        ));
    }
}
