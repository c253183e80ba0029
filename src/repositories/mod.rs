pub(crate) mod exam_schedule;
pub(crate) mod files;
pub(crate) mod quiz_attempts;
pub(crate) mod quizzes;
pub(crate) mod weekly_schedule;
