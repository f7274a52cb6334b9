use anyhow::{Context, Result};
use serde::Serialize;

use crate::assessment::ResponseSet;
use crate::history::AssessmentStore;
use crate::scoring::{classify, ClassificationResult};

/// What a submission returns to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub message: &'static str,
    pub result: ClassificationResult,
    pub assessment_id: Option<u64>,
    pub saved: bool,
}

/// Classify a response set and, when a user is known, store it.
///
/// Anonymous submissions are classified but never stored. The stored record
/// keeps the raw responses and the primary dosha name.
pub fn submit_assessment(
    responses: ResponseSet,
    user_id: Option<&str>,
    store: &mut dyn AssessmentStore,
) -> Result<Submission> {
    let result = classify(&responses);
    tracing::debug!(
        primary = %result.primary,
        constitution = %result.constitution,
        total = result.total_responses,
        "classified assessment"
    );

    let assessment_id = match user_id {
        Some(user) => Some(
            store
                .save(user, &responses, result.primary.as_str())
                .context("Failed to save assessment")?,
        ),
        None => None,
    };

    Ok(Submission {
        message: "Assessment completed",
        result,
        assessment_id,
        saved: assessment_id.is_some(),
    })
}
