use crate::db::models::Quiz;

/// Name supplied by callers acting as the authenticated admin. Admin identity
/// itself is established by the session layer in front of this API.
pub(crate) const ADMIN_NAME: &str = "admin";

/// Deletion is allowed for the quiz's creator (matched by display name) and
/// for the admin sentinel. Name-based on purpose: the portal has no user
/// accounts for quiz creators.
pub(crate) fn can_delete_quiz(quiz: &Quiz, requester_name: &str) -> bool {
    requester_name == quiz.creator_name || requester_name == ADMIN_NAME
}
