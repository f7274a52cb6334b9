use serde::Serialize;

use super::dosha::{Dosha, DoshaMap};
use super::recommendations::{recommendations_for, RecommendationBundle};
use crate::assessment::ResponseSet;

/// Primary percentage at or above which the constitution is "Dominant"
pub const DOMINANT_THRESHOLD: u32 = 60;

/// Runner-up percentage at or above which a secondary dosha is reported
pub const SECONDARY_THRESHOLD: u32 = 25;

/// Outcome of classifying one response set.
///
/// Serializes to the response payload shape returned to callers
/// (`primaryDosha`, `constitutionType`, `totalQuestions`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    #[serde(rename = "primaryDosha")]
    pub primary: Dosha,
    #[serde(rename = "secondaryDosha")]
    pub secondary: Option<Dosha>,
    #[serde(rename = "constitutionType")]
    pub constitution: String,
    pub percentages: DoshaMap<u32>,
    pub scores: DoshaMap<u32>,
    #[serde(rename = "totalQuestions")]
    pub total_responses: u32,
    pub recommendations: &'static RecommendationBundle,
}

/// Count recognized answers per dosha. Unrecognized values are skipped.
pub fn tally(responses: &ResponseSet) -> DoshaMap<u32> {
    let mut scores = DoshaMap::default();
    for value in responses.values() {
        if let Some(dosha) = Dosha::parse(value) {
            *scores.get_mut(dosha) += 1;
        }
    }
    scores
}

/// Convert counts into whole percentages of the total.
///
/// Each value is rounded on its own (half away from zero), so the three
/// results need not sum to exactly 100. All zero when there are no answers.
pub fn percentages(scores: &DoshaMap<u32>) -> DoshaMap<u32> {
    let total = scores.vata + scores.pitta + scores.kapha;
    DoshaMap::from_fn(|dosha| {
        if total > 0 {
            (scores.get(dosha) as f64 / total as f64 * 100.0).round() as u32
        } else {
            0
        }
    })
}

/// Order doshas by percentage, highest first.
///
/// `sort_by` is stable, so equal percentages keep vata, pitta, kapha order.
pub fn rank(percentages: &DoshaMap<u32>) -> [Dosha; 3] {
    let mut ranked = Dosha::ALL;
    ranked.sort_by(|a, b| percentages.get(*b).cmp(&percentages.get(*a)));
    ranked
}

/// Build the constitution label. First matching rule wins.
pub fn constitution_label(primary: Dosha, candidate: Dosha, percentages: &DoshaMap<u32>) -> String {
    if percentages.get(primary) >= DOMINANT_THRESHOLD {
        format!("{} Dominant", primary.display_name())
    } else if percentages.get(candidate) >= SECONDARY_THRESHOLD {
        format!("{}-{}", primary.display_name(), candidate.display_name())
    } else {
        format!("{} Predominant", primary.display_name())
    }
}

/// Classify a response set into primary/secondary doshas with recommendations.
///
/// Total over all inputs: an empty or entirely unrecognized set yields zero
/// percentages and a vata primary.
pub fn classify(responses: &ResponseSet) -> ClassificationResult {
    let scores = tally(responses);
    let total_responses = scores.vata + scores.pitta + scores.kapha;
    let percentages = percentages(&scores);

    let [primary, candidate, _] = rank(&percentages);
    let constitution = constitution_label(primary, candidate, &percentages);
    let secondary = (percentages.get(candidate) >= SECONDARY_THRESHOLD).then_some(candidate);

    ClassificationResult {
        primary,
        secondary,
        constitution,
        percentages,
        scores,
        total_responses,
        recommendations: recommendations_for(primary),
    }
}
