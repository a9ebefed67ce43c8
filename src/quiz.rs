//! Quiz engine for the skin analysis flow
//!
//! Holds the fixed six-question sequence, the current position, and the
//! accumulated answers. The wizard advances one question at a time and the
//! engine produces a [`SkinProfile`] exactly once, when the final question
//! is answered and advanced past.

use crate::profile::SkinProfile;
use crate::types::{AgeGroup, Concern, Lifestyle, RoutineHabit, Sensitivity, SkinType};
use tracing::debug;

/// Identifier for each quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionId {
    SkinType,
    Concerns,
    Age,
    Lifestyle,
    CurrentRoutine,
    Sensitivity,
}

/// A selectable answer option.
#[derive(Debug, Clone, Copy)]
pub struct QuestionOption {
    /// Machine value; parses into the matching domain enum.
    pub value: &'static str,
    pub label: &'static str,
    pub description: Option<&'static str>,
}

/// A quiz question definition.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: QuestionId,
    pub title: &'static str,
    /// Multi-select questions toggle values instead of overwriting.
    pub multiple: bool,
    pub options: &'static [QuestionOption],
}

const fn opt(
    value: &'static str,
    label: &'static str,
    description: &'static str,
) -> QuestionOption {
    QuestionOption {
        value,
        label,
        description: Some(description),
    }
}

const fn opt_plain(value: &'static str, label: &'static str) -> QuestionOption {
    QuestionOption {
        value,
        label,
        description: None,
    }
}

const QUESTIONS: [Question; 6] = [
    Question {
        id: QuestionId::SkinType,
        title: "What best describes your skin type?",
        multiple: false,
        options: &[
            opt("oily", "Oily", "Shiny, enlarged pores, frequent breakouts"),
            opt("dry", "Dry", "Tight feeling, flaky, rough texture"),
            opt(
                "combination",
                "Combination",
                "Oily T-zone, normal to dry cheeks",
            ),
            opt("normal", "Normal", "Balanced, minimal issues"),
            opt(
                "sensitive",
                "Sensitive",
                "Easily irritated, reactive to products",
            ),
        ],
    },
    Question {
        id: QuestionId::Concerns,
        title: "What are your main skin concerns?",
        multiple: true,
        options: &[
            opt_plain("acne", "Acne & Breakouts"),
            opt_plain("aging", "Anti-aging"),
            opt_plain("pigmentation", "Dark spots & Pigmentation"),
            opt_plain("dullness", "Dullness & Uneven tone"),
            opt_plain("pores", "Large pores"),
            opt_plain("dryness", "Dryness & Dehydration"),
        ],
    },
    Question {
        id: QuestionId::Age,
        title: "What's your age group?",
        multiple: false,
        options: &[
            opt_plain("18-21", "18-21 years"),
            opt_plain("22-25", "22-25 years"),
            opt_plain("26-30", "26-30 years"),
            opt_plain("30+", "30+ years"),
        ],
    },
    Question {
        id: QuestionId::Lifestyle,
        title: "Which describes your lifestyle?",
        multiple: false,
        options: &[
            opt("active", "Very Active", "Regular workouts, outdoor activities"),
            opt(
                "moderate",
                "Moderately Active",
                "Some exercise, mixed indoor/outdoor",
            ),
            opt(
                "sedentary",
                "Mostly Indoors",
                "Office work, limited outdoor time",
            ),
            opt("variable", "Variable", "Changes frequently"),
        ],
    },
    Question {
        id: QuestionId::CurrentRoutine,
        title: "Current skincare routine?",
        multiple: false,
        options: &[
            opt("minimal", "Minimal", "Just cleanser or moisturizer"),
            opt("basic", "Basic", "Cleanser, moisturizer, sunscreen"),
            opt("extensive", "Extensive", "Multi-step routine with actives"),
            opt("none", "None", "No regular routine"),
        ],
    },
    Question {
        id: QuestionId::Sensitivity,
        title: "How sensitive is your skin?",
        multiple: false,
        options: &[
            opt("high", "Highly Sensitive", "Reacts to most new products"),
            opt("moderate", "Moderately Sensitive", "Occasional reactions"),
            opt("low", "Low Sensitivity", "Rarely reacts to products"),
            opt(
                "none",
                "Not Sensitive",
                "Can use most products without issues",
            ),
        ],
    },
];

/// The full question sequence.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// Accumulated answers, one slot per question.
#[derive(Debug, Clone, Default)]
struct Answers {
    skin_type: Option<SkinType>,
    /// Insertion order is preserved through toggling.
    concerns: Vec<Concern>,
    age: Option<AgeGroup>,
    lifestyle: Option<Lifestyle>,
    current_routine: Option<RoutineHabit>,
    sensitivity: Option<Sensitivity>,
}

/// Quiz engine state: current question index plus partial answers.
#[derive(Debug, Clone, Default)]
pub struct QuizState {
    current: usize,
    answers: Answers,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question currently shown.
    pub fn active(&self) -> &'static Question {
        &QUESTIONS[self.current]
    }

    /// One-based position, e.g. `(3, 6)` for "3 of 6".
    pub fn position(&self) -> (usize, usize) {
        (self.current + 1, QUESTIONS.len())
    }

    /// Progress through the quiz as a percentage for the gauge.
    pub fn progress_percent(&self) -> u16 {
        (((self.current + 1) * 100) / QUESTIONS.len()) as u16
    }

    pub fn at_first_question(&self) -> bool {
        self.current == 0
    }

    pub fn at_last_question(&self) -> bool {
        self.current == QUESTIONS.len() - 1
    }

    /// Record an answer for the given question.
    ///
    /// Single-select questions overwrite the stored value; the multi-select
    /// concerns question toggles the value. Input for any question other
    /// than the active one is ignored, guarding against stale events.
    pub fn answer(&mut self, question: QuestionId, value: &str) {
        if question != self.active().id {
            debug!(?question, value, "ignoring answer for inactive question");
            return;
        }

        match question {
            QuestionId::SkinType => {
                if let Ok(v) = value.parse::<SkinType>() {
                    self.answers.skin_type = Some(v);
                }
            }
            QuestionId::Concerns => {
                if let Ok(v) = value.parse::<Concern>() {
                    if let Some(pos) = self.answers.concerns.iter().position(|c| *c == v) {
                        self.answers.concerns.remove(pos);
                    } else {
                        self.answers.concerns.push(v);
                    }
                }
            }
            QuestionId::Age => {
                if let Ok(v) = value.parse::<AgeGroup>() {
                    self.answers.age = Some(v);
                }
            }
            QuestionId::Lifestyle => {
                if let Ok(v) = value.parse::<Lifestyle>() {
                    self.answers.lifestyle = Some(v);
                }
            }
            QuestionId::CurrentRoutine => {
                if let Ok(v) = value.parse::<RoutineHabit>() {
                    self.answers.current_routine = Some(v);
                }
            }
            QuestionId::Sensitivity => {
                if let Ok(v) = value.parse::<Sensitivity>() {
                    self.answers.sensitivity = Some(v);
                }
            }
        }
    }

    /// Whether the given option value is currently chosen for a question.
    pub fn is_chosen(&self, question: QuestionId, value: &str) -> bool {
        match question {
            QuestionId::SkinType => matches_value(self.answers.skin_type, value),
            QuestionId::Concerns => self
                .answers
                .concerns
                .iter()
                .any(|c| c.to_string() == value),
            QuestionId::Age => matches_value(self.answers.age, value),
            QuestionId::Lifestyle => matches_value(self.answers.lifestyle, value),
            QuestionId::CurrentRoutine => matches_value(self.answers.current_routine, value),
            QuestionId::Sensitivity => matches_value(self.answers.sensitivity, value),
        }
    }

    /// True iff the active question has an answer: a stored value for
    /// single-select, a non-empty set for multi-select.
    pub fn can_advance(&self) -> bool {
        match self.active().id {
            QuestionId::SkinType => self.answers.skin_type.is_some(),
            QuestionId::Concerns => !self.answers.concerns.is_empty(),
            QuestionId::Age => self.answers.age.is_some(),
            QuestionId::Lifestyle => self.answers.lifestyle.is_some(),
            QuestionId::CurrentRoutine => self.answers.current_routine.is_some(),
            QuestionId::Sensitivity => self.answers.sensitivity.is_some(),
        }
    }

    /// Move to the next question, or finish the quiz.
    ///
    /// A no-op (`None`) while the active question is unanswered. On the
    /// last question, returns the completed profile; any missing field at
    /// that point also yields `None`, though every earlier step gates on
    /// [`can_advance`](Self::can_advance) so that cannot happen in the
    /// wizard flow.
    pub fn advance(&mut self) -> Option<SkinProfile> {
        if !self.can_advance() {
            return None;
        }
        if self.at_last_question() {
            self.finalize()
        } else {
            self.current += 1;
            None
        }
    }

    /// Move back one question; a no-op at the first question.
    pub fn retreat(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    fn finalize(&self) -> Option<SkinProfile> {
        if self.answers.concerns.is_empty() {
            return None;
        }
        Some(SkinProfile {
            skin_type: self.answers.skin_type?,
            concerns: self.answers.concerns.clone(),
            age: self.answers.age?,
            lifestyle: self.answers.lifestyle?,
            current_routine: self.answers.current_routine?,
            sensitivity: self.answers.sensitivity?,
        })
    }
}

fn matches_value<T: ToString>(stored: Option<T>, value: &str) -> bool {
    stored.is_some_and(|v| v.to_string() == value)
}
