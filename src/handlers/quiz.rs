// src/handlers/quiz.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    models::{
        quiz::{AnswerReview, PublicQuizQuestion, QuizAdvance, QuizEngine, ScoreRating},
        session::Screen,
    },
    state::SharedSession,
    storage::{self, KvStore},
};

#[derive(Debug, Deserialize)]
pub struct SelectAnswerRequest {
    /// Index into the current question's options.
    pub answer: usize,
}

/// What the quiz screen shows: the current question while the attempt is in
/// progress, the scored result afterwards.
#[derive(Debug, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum QuizView {
    Question {
        index: usize,
        total: usize,
        question: PublicQuizQuestion,
        selected: Option<usize>,
        can_advance: bool,
        is_last: bool,
    },
    Result {
        score: usize,
        total: usize,
        percentage: u8,
        rating: ScoreRating,
        best_score: i64,
        review: Vec<AnswerReview>,
    },
}

async fn view_of(engine: &QuizEngine, store: &KvStore) -> Result<QuizView, AppError> {
    if let Some(outcome) = engine.outcome() {
        let best_score: i64 = store.get(storage::BEST_SCORE_KEY, 0).await;
        return Ok(QuizView::Result {
            score: outcome.score,
            total: outcome.total,
            percentage: outcome.percentage,
            rating: outcome.rating,
            best_score,
            review: engine.review().unwrap_or_default(),
        });
    }

    let question = engine
        .current_question()
        .ok_or_else(|| AppError::InternalServerError("Question bank is empty".to_string()))?;

    Ok(QuizView::Question {
        index: engine.current_index(),
        total: engine.total(),
        question: question.into(),
        selected: engine.selected(),
        can_advance: engine.can_advance(),
        is_last: engine.is_last_question(),
    })
}

/// Current quiz state (question or result).
pub async fn get_quiz(
    State(store): State<KvStore>,
    State(session): State<SharedSession>,
) -> Result<impl IntoResponse, AppError> {
    let session = session.lock().await;
    Ok(Json(view_of(&session.quiz, &store).await?))
}

/// Records a candidate answer for the current question.
pub async fn select_answer(
    State(store): State<KvStore>,
    State(session): State<SharedSession>,
    Json(payload): Json<SelectAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = session.lock().await;
    session.expect_screen(Screen::Quiz)?;
    session.quiz.select(payload.answer)?;
    Ok(Json(view_of(&session.quiz, &store).await?))
}

/// Commits the selection and moves on. On the last question this finalizes
/// the attempt: the completion flag is persisted and the best score is raised
/// when (and only when) the new score strictly exceeds it.
pub async fn next_question(
    State(store): State<KvStore>,
    State(session): State<SharedSession>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = session.lock().await;
    session.expect_screen(Screen::Quiz)?;

    if let QuizAdvance::Finished(outcome) = session.quiz.advance()? {
        store.set(storage::QUIZ_COMPLETED_KEY, &true).await;

        let best: i64 = store.get(storage::BEST_SCORE_KEY, 0).await;
        let score = outcome.score as i64;
        if score > best {
            store.set(storage::BEST_SCORE_KEY, &score).await;
            tracing::info!("New best quiz score: {}", score);
        }
    }

    Ok(Json(view_of(&session.quiz, &store).await?))
}

/// Starts the quiz over: transient attempt state is dropped, the persisted
/// best score stays.
pub async fn retake(
    State(store): State<KvStore>,
    State(session): State<SharedSession>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = session.lock().await;
    session.expect_screen(Screen::Quiz)?;
    session.quiz.reset();
    Ok(Json(view_of(&session.quiz, &store).await?))
}
