use serde::Serialize;

use crate::models::question::Question;

/// The single tagged state value for one quiz round. Keeping score, selection
/// and countdown inside the phase makes stale combinations (a selection while
/// the game is over, a countdown while loading) unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Active {
        index: usize,
        score: u32,
        selected: Option<String>,
        remaining: u8,
    },
    GameOver {
        score: u32,
        total: usize,
    },
}

/// Render state for whatever front-end drives the session. Mirrors exactly
/// what the screens need: the question with its shuffled options and current
/// selection while active, the final score when the game is over.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub enum SessionView {
    Loading,
    Active {
        prompt: String,
        options: Vec<String>,
        selected: Option<String>,
        remaining: u8,
        score: u32,
        question_number: usize,
        total: usize,
        can_submit: bool,
    },
    GameOver {
        score: u32,
        total: usize,
    },
}

/// Owns the fixed question list and the current phase. The session has
/// exactly one writer, the UI loop driving it; every operation is a no-op
/// outside the phases where it is valid, so well-formed input cannot trigger
/// an invalid transition.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    countdown_secs: u8,
    phase: Phase,
}

impl QuizSession {
    /// Session awaiting its wrapped data. Stays in `Loading` until `begin`.
    pub fn loading(countdown_secs: u8) -> Self {
        Self {
            questions: Vec::new(),
            countdown_secs,
            phase: Phase::Loading,
        }
    }

    /// Session that starts on its first question right away.
    pub fn new(questions: Vec<Question>, countdown_secs: u8) -> Self {
        let mut session = Self::loading(countdown_secs);
        session.begin(questions);
        session
    }

    /// Installs the generated questions and leaves `Loading`. An empty list
    /// goes straight to `GameOver { 0, 0 }` instead of presenting an
    /// undefined question.
    pub fn begin(&mut self, questions: Vec<Question>) {
        if !matches!(self.phase, Phase::Loading) {
            return;
        }
        self.questions = questions;
        self.phase = self.initial_phase();
    }

    fn initial_phase(&self) -> Phase {
        if self.questions.is_empty() {
            Phase::GameOver { score: 0, total: 0 }
        } else {
            Phase::Active {
                index: 0,
                score: 0,
                selected: None,
                remaining: self.countdown_secs,
            }
        }
    }

    /// Marks an option as the current answer. Only meaningful while a
    /// question is on screen; reselecting the same option changes nothing.
    pub fn select(&mut self, option: impl Into<String>) {
        if let Phase::Active { selected, .. } = &mut self.phase {
            *selected = Some(option.into());
        }
    }

    /// One second of countdown. Hitting zero submits whatever is selected,
    /// so running out of time is indistinguishable from pressing submit.
    pub fn tick(&mut self) {
        let expired = match &mut self.phase {
            Phase::Active { remaining, .. } if *remaining > 0 => {
                *remaining -= 1;
                *remaining == 0
            }
            _ => return,
        };

        if expired {
            self.submit();
        }
    }

    /// Scores the current selection and advances. An unset selection is a
    /// silent wrong answer; the comparison is exact, case-sensitive string
    /// equality. The last question ends the game.
    pub fn submit(&mut self) {
        let Phase::Active {
            index,
            score,
            selected,
            ..
        } = &self.phase
        else {
            return;
        };

        let index = *index;
        let mut score = *score;
        if selected.as_deref() == Some(self.questions[index].correct_answer.as_str()) {
            score += 1;
        }

        self.phase = if index + 1 == self.questions.len() {
            Phase::GameOver {
                score,
                total: self.questions.len(),
            }
        } else {
            Phase::Active {
                index: index + 1,
                score,
                selected: None,
                remaining: self.countdown_secs,
            }
        };
    }

    /// Back to the first question with a zeroed score and a fresh countdown.
    /// The question list is kept as-is: same questions, same shuffled option
    /// order. Does nothing before the data has arrived.
    pub fn restart(&mut self) {
        if matches!(self.phase, Phase::Loading) {
            return;
        }
        self.phase = self.initial_phase();
    }

    pub fn current_question(&self) -> Option<&Question> {
        match &self.phase {
            Phase::Active { index, .. } => self.questions.get(*index),
            _ => None,
        }
    }

    pub fn score(&self) -> u32 {
        match &self.phase {
            Phase::Loading => 0,
            Phase::Active { score, .. } | Phase::GameOver { score, .. } => *score,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn view(&self) -> SessionView {
        match &self.phase {
            Phase::Loading => SessionView::Loading,
            Phase::Active {
                index,
                score,
                selected,
                remaining,
            } => {
                let question = &self.questions[*index];
                SessionView::Active {
                    prompt: question.prompt.clone(),
                    options: question.options.clone(),
                    selected: selected.clone(),
                    remaining: *remaining,
                    score: *score,
                    question_number: index + 1,
                    total: self.questions.len(),
                    can_submit: selected.is_some(),
                }
            }
            Phase::GameOver { score, total } => SessionView::GameOver {
                score: *score,
                total: *total,
            },
        }
    }
}
