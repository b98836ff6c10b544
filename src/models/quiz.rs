// src/models/quiz.rs

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A question from the static bank, including the answer key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,

    /// Ordered answer options.
    pub options: Vec<String>,

    /// Index into `options`.
    pub correct_answer: usize,

    /// Shown in the post-quiz review.
    pub explanation: String,
}

/// DTO for sending a question to the client (answer key and explanation
/// hidden until the quiz is finalized).
#[derive(Debug, Serialize)]
pub struct PublicQuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
}

impl From<&QuizQuestion> for PublicQuizQuestion {
    fn from(question: &QuizQuestion) -> Self {
        Self {
            id: question.id.clone(),
            question: question.question.clone(),
            options: question.options.clone(),
        }
    }
}

/// Rating tier shown with the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRating {
    Excellent,
    Good,
    KeepLearning,
}

impl ScoreRating {
    pub fn for_score(score: usize, total: usize) -> Self {
        if total == 0 {
            return Self::KeepLearning;
        }
        let percentage = score as f64 / total as f64 * 100.0;
        if percentage >= 80.0 {
            Self::Excellent
        } else if percentage >= 60.0 {
            Self::Good
        } else {
            Self::KeepLearning
        }
    }
}

/// One row of the post-quiz answer review.
#[derive(Debug, Serialize)]
pub struct AnswerReview {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub chosen_answer: usize,
    pub chosen_text: String,
    pub correct_answer: usize,
    pub correct_text: String,
    pub is_correct: bool,
    pub explanation: String,
}

/// Outcome of a finalized attempt, retained for the result view.
#[derive(Debug, Clone, Serialize)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
    pub percentage: u8,
    pub rating: ScoreRating,
}

/// What `advance` did: moved to another question, or finalized the attempt.
#[derive(Debug)]
pub enum QuizAdvance {
    Moved(usize),
    Finished(QuizOutcome),
}

/// Score = number of positions where the attempt matches the answer key.
pub fn score_attempt(answers: &[usize], questions: &[QuizQuestion]) -> usize {
    answers
        .iter()
        .zip(questions)
        .filter(|(answer, question)| **answer == question.correct_answer)
        .count()
}

/// Linear progression over a fixed question bank (any N >= 1).
///
/// The engine owns only transient attempt state; the persisted best score
/// never passes through it.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<QuizQuestion>,
    current: usize,
    selected: Option<usize>,
    answers: Vec<usize>,
    outcome: Option<QuizOutcome>,
}

impl QuizEngine {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            current: 0,
            selected: None,
            answers: Vec::new(),
            outcome: None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.outcome.is_some() {
            return None;
        }
        self.questions.get(self.current)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// "Next" stays disabled until an answer is selected.
    pub fn can_advance(&self) -> bool {
        self.outcome.is_none() && self.selected.is_some()
    }

    pub fn outcome(&self) -> Option<&QuizOutcome> {
        self.outcome.as_ref()
    }

    /// Records a candidate answer for the current question. Re-selecting
    /// before advancing overwrites the previous choice.
    pub fn select(&mut self, answer: usize) -> Result<(), AppError> {
        if self.outcome.is_some() {
            return Err(AppError::Conflict("Quiz is already finished".to_string()));
        }
        let Some(question) = self.questions.get(self.current) else {
            return Err(AppError::Conflict("Question bank is empty".to_string()));
        };
        if answer >= question.options.len() {
            return Err(AppError::BadRequest(format!(
                "Answer index {} is out of range for question {}",
                answer, question.id
            )));
        }
        self.selected = Some(answer);
        Ok(())
    }

    /// Commits the current selection: appends it to the attempt and moves to
    /// the next question, or finalizes on the last one. Rejected while no
    /// answer is selected.
    pub fn advance(&mut self) -> Result<QuizAdvance, AppError> {
        if self.outcome.is_some() {
            return Err(AppError::Conflict("Quiz is already finished".to_string()));
        }
        let Some(selected) = self.selected.take() else {
            return Err(AppError::BadRequest("No answer selected".to_string()));
        };

        self.answers.push(selected);

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            Ok(QuizAdvance::Moved(self.current))
        } else {
            let score = score_attempt(&self.answers, &self.questions);
            let total = self.questions.len();
            let percentage = (score as f64 / total as f64 * 100.0).round() as u8;
            let outcome = QuizOutcome {
                score,
                total,
                percentage,
                rating: ScoreRating::for_score(score, total),
            };
            self.outcome = Some(outcome.clone());
            Ok(QuizAdvance::Finished(outcome))
        }
    }

    /// Per-question review of the finalized attempt; `None` while the quiz is
    /// still in progress.
    pub fn review(&self) -> Option<Vec<AnswerReview>> {
        self.outcome.as_ref()?;
        let rows = self
            .questions
            .iter()
            .zip(&self.answers)
            .map(|(question, &chosen)| AnswerReview {
                id: question.id.clone(),
                question: question.question.clone(),
                options: question.options.clone(),
                chosen_answer: chosen,
                chosen_text: question.options.get(chosen).cloned().unwrap_or_default(),
                correct_answer: question.correct_answer,
                correct_text: question
                    .options
                    .get(question.correct_answer)
                    .cloned()
                    .unwrap_or_default(),
                is_correct: chosen == question.correct_answer,
                explanation: question.explanation.clone(),
            })
            .collect();
        Some(rows)
    }

    /// Clears all transient attempt state (index, selection, attempt list,
    /// result). The persisted best score is unaffected.
    pub fn reset(&mut self) {
        self.current = 0;
        self.selected = None;
        self.answers.clear();
        self.outcome = None;
    }
}
