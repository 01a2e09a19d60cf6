use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::covers::random_interview_cover;
use crate::generate::normalizer::InterviewParams;

/// The persisted interview record. Immutable after construction: it is
/// written to the store exactly once per request and never updated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub role: String,
    #[serde(rename = "type")]
    pub interview_type: String,
    pub level: String,
    pub techstack: Vec<String>,
    pub amount: String,
    pub questions: Vec<String>,
    pub user_id: String,
    pub user_name: String,
    pub finalized: bool,
    pub cover_image: String,
    pub created_at: String,
}

impl Interview {
    /// Assembles the record from normalized parameters and parsed questions,
    /// stamping a cover image and the creation time.
    pub fn build(params: InterviewParams, questions: Vec<String>) -> Self {
        Interview {
            techstack: params.techstack_list(),
            role: params.role,
            interview_type: params.interview_type,
            level: params.level,
            amount: params.amount,
            questions,
            user_id: params.user_id,
            user_name: params.user_name,
            finalized: true,
            cover_image: random_interview_cover(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
