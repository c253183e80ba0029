use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use crate::core::time::primitive_now_utc;
use crate::db::models::{Quiz, QuizAttempt, QuizQuestion};
use crate::db::types::QuestionType;
use crate::repositories;
use crate::schemas::quiz::{AttemptCreate, QuizCreate};
use crate::services::{access_policy, quiz_codes, scoring};

/// How many fresh codes to try before giving up on a create.
const MAX_CODE_ATTEMPTS: usize = 5;

#[derive(Debug, Error)]
pub(crate) enum QuizError {
    #[error("{0}")]
    Validation(String),
    #[error("quiz not found")]
    NotFound,
    #[error("not authorized to delete this quiz")]
    PermissionDenied,
    #[error("could not allocate a unique quiz code")]
    CodeExhausted,
    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

pub(crate) async fn create_quiz(pool: &PgPool, payload: QuizCreate) -> Result<Quiz, QuizError> {
    payload.validate().map_err(|e| QuizError::Validation(e.to_string()))?;
    validate_questions(&payload.questions)?;

    let mut questions = payload.questions;
    for question in &mut questions {
        if question.id.trim().is_empty() {
            question.id = Uuid::new_v4().to_string();
        }
    }

    let id = Uuid::new_v4().to_string();
    let created_at = primitive_now_utc();

    for _ in 0..MAX_CODE_ATTEMPTS {
        let code = quiz_codes::generate_code();
        let result = repositories::quizzes::create(
            pool,
            repositories::quizzes::CreateQuiz {
                id: &id,
                code: &code,
                title: payload.title.trim(),
                subject: payload.subject.trim(),
                creator_name: payload.creator_name.trim(),
                created_at,
                questions: questions.clone(),
            },
        )
        .await;

        match result {
            Ok(quiz) => return Ok(quiz),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                tracing::warn!(code = %code, "quiz code collision, retrying");
                continue;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(QuizError::CodeExhausted)
}

pub(crate) async fn get_by_id(pool: &PgPool, id: &str) -> Result<Quiz, QuizError> {
    repositories::quizzes::find_by_id(pool, id).await?.ok_or(QuizError::NotFound)
}

pub(crate) async fn get_by_code(pool: &PgPool, code: &str) -> Result<Quiz, QuizError> {
    repositories::quizzes::find_by_code(pool, code).await?.ok_or(QuizError::NotFound)
}

/// A blank term means "show nothing", not "show everything": the search box
/// is the only way to reach quizzes shared out of band.
pub(crate) async fn search(pool: &PgPool, term: &str) -> Result<Vec<Quiz>, QuizError> {
    let term = term.trim();
    if term.is_empty() {
        return Ok(Vec::new());
    }

    Ok(repositories::quizzes::search(pool, term).await?)
}

/// Attempts go first so a concurrent reader never observes attempts whose
/// quiz is already gone.
pub(crate) async fn delete_quiz(
    pool: &PgPool,
    id: &str,
    requester_name: &str,
) -> Result<(), QuizError> {
    let quiz = get_by_id(pool, id).await?;

    if !access_policy::can_delete_quiz(&quiz, requester_name) {
        return Err(QuizError::PermissionDenied);
    }

    repositories::quiz_attempts::delete_by_quiz(pool, &quiz.id).await?;
    repositories::quizzes::delete_by_id(pool, &quiz.id).await?;

    tracing::info!(quiz_id = %quiz.id, requester = %requester_name, "quiz deleted");
    Ok(())
}

pub(crate) async fn submit_attempt(
    pool: &PgPool,
    payload: AttemptCreate,
) -> Result<QuizAttempt, QuizError> {
    payload.validate().map_err(|e| QuizError::Validation(e.to_string()))?;

    let quiz = get_by_id(pool, &payload.quiz_id).await?;
    let outcome = scoring::grade(&quiz.questions.0, &payload.answers);

    let attempt = repositories::quiz_attempts::create(
        pool,
        repositories::quiz_attempts::CreateAttempt {
            id: &Uuid::new_v4().to_string(),
            quiz_id: &quiz.id,
            user_name: payload.user_name.trim(),
            score: outcome.score,
            total_questions: quiz.questions.0.len() as i32,
            answers: outcome.answers,
            completed_at: primitive_now_utc(),
        },
    )
    .await?;

    Ok(attempt)
}

pub(crate) async fn list_attempts(
    pool: &PgPool,
    quiz_id: &str,
) -> Result<Vec<QuizAttempt>, QuizError> {
    Ok(repositories::quiz_attempts::list_by_quiz(pool, quiz_id).await?)
}

pub(crate) async fn get_attempt(
    pool: &PgPool,
    quiz_id: &str,
    user_name: &str,
) -> Result<Option<QuizAttempt>, QuizError> {
    Ok(repositories::quiz_attempts::find_first_for_user(pool, quiz_id, user_name).await?)
}

fn validate_questions(questions: &[QuizQuestion]) -> Result<(), QuizError> {
    for (index, question) in questions.iter().enumerate() {
        let number = index + 1;

        if question.text.trim().is_empty() {
            return Err(QuizError::Validation(format!(
                "question {number} must have a non-empty text"
            )));
        }

        let options = question.options.as_deref().unwrap_or_default();
        match question.kind {
            QuestionType::MultipleChoice => {
                if options.len() < 2 || options.iter().any(|option| option.trim().is_empty()) {
                    return Err(QuizError::Validation(format!(
                        "question {number} must have at least 2 non-empty options"
                    )));
                }
            }
            QuestionType::TrueFalse => {
                if options.len() != 2 {
                    return Err(QuizError::Validation(format!(
                        "question {number} must have exactly 2 options"
                    )));
                }
            }
            QuestionType::ShortAnswer => {
                if !options.is_empty() {
                    return Err(QuizError::Validation(format!(
                        "question {number} must not define options"
                    )));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::types::AnswerValue;

    fn question(kind: QuestionType, options: Option<Vec<&str>>) -> QuizQuestion {
        QuizQuestion {
            id: String::new(),
            kind,
            text: "What is 2 + 2?".to_string(),
            options: options.map(|items| items.into_iter().map(str::to_string).collect()),
            correct_answer: AnswerValue::One("4".to_string()),
        }
    }

    #[test]
    fn multiple_choice_requires_two_options() {
        let err = validate_questions(&[question(QuestionType::MultipleChoice, Some(vec!["4"]))])
            .unwrap_err();
        assert!(matches!(err, QuizError::Validation(_)));

        validate_questions(&[question(QuestionType::MultipleChoice, Some(vec!["3", "4"]))])
            .expect("two options are enough");
    }

    #[test]
    fn multiple_choice_rejects_blank_options() {
        let err =
            validate_questions(&[question(QuestionType::MultipleChoice, Some(vec!["4", " "]))])
                .unwrap_err();
        assert!(matches!(err, QuizError::Validation(_)));
    }

    #[test]
    fn true_false_requires_exactly_two_options() {
        let err =
            validate_questions(&[question(QuestionType::TrueFalse, Some(vec!["a", "b", "c"]))])
                .unwrap_err();
        assert!(matches!(err, QuizError::Validation(_)));

        validate_questions(&[question(QuestionType::TrueFalse, Some(vec!["صح", "خطأ"]))])
            .expect("true/false pair");
    }

    #[test]
    fn short_answer_must_not_define_options() {
        let err = validate_questions(&[question(QuestionType::ShortAnswer, Some(vec!["4"]))])
            .unwrap_err();
        assert!(matches!(err, QuizError::Validation(_)));

        validate_questions(&[question(QuestionType::ShortAnswer, None)]).expect("no options");
    }

    #[test]
    fn blank_question_text_is_rejected() {
        let mut bad = question(QuestionType::ShortAnswer, None);
        bad.text = "  ".to_string();
        let err = validate_questions(&[bad]).unwrap_err();
        assert!(matches!(err, QuizError::Validation(_)));
    }
}
