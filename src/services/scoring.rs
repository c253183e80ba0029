use crate::db::models::{AnswerRecord, QuizQuestion};
use crate::db::types::AnswerValue;
use crate::schemas::quiz::AttemptAnswer;

pub(crate) struct GradedOutcome {
    pub(crate) score: i32,
    pub(crate) answers: Vec<AnswerRecord>,
}

/// Grades submitted answers against the quiz's questions.
///
/// Answers that reference an unknown question id are dropped: they score
/// nothing and do not appear in the graded output. The caller is responsible
/// for reporting the quiz's full question count as the denominator.
pub(crate) fn grade(questions: &[QuizQuestion], submitted: &[AttemptAnswer]) -> GradedOutcome {
    let mut score = 0;
    let mut answers = Vec::with_capacity(submitted.len());

    for entry in submitted {
        let Some(question) = questions.iter().find(|q| q.id == entry.question_id) else {
            continue;
        };

        let is_correct = answer_matches(&question.correct_answer, &entry.answer);
        if is_correct {
            score += 1;
        }

        answers.push(AnswerRecord {
            question_id: entry.question_id.clone(),
            answer: entry.answer.clone(),
            is_correct,
        });
    }

    GradedOutcome { score, answers }
}

fn answer_matches(expected: &AnswerValue, given: &AnswerValue) -> bool {
    match (expected, given) {
        (AnswerValue::Many(expected), AnswerValue::Many(given)) => {
            let mut expected = expected.clone();
            let mut given = given.clone();
            expected.sort();
            given.sort();
            expected == given
        }
        // A scalar against a multi-select key (or vice versa) never matches.
        (AnswerValue::Many(_), AnswerValue::One(_)) => false,
        (AnswerValue::One(_), AnswerValue::Many(_)) => false,
        (AnswerValue::One(expected), AnswerValue::One(given)) => expected == given,
    }
}
