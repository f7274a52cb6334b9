use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::ResponseSet;

pub const HISTORY_VERSION: u32 = 1;

/// A stored assessment. Frozen at submission time and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub id: u64,
    pub user_id: String,
    pub responses: ResponseSet,
    /// Primary dosha name at the time of submission, e.g. "pitta"
    pub dosha_result: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryState {
    pub version: u32,
    #[serde(default = "first_id")]
    pub next_id: u64,
    #[serde(default)]
    pub assessments: Vec<AssessmentRecord>,
}

fn first_id() -> u64 {
    1
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryState {
    /// Create a new empty history with the current version
    pub fn new() -> Self {
        Self {
            version: HISTORY_VERSION,
            next_id: first_id(),
            assessments: Vec::new(),
        }
    }

    /// Append a record and return its id
    pub fn record(
        &mut self,
        user_id: &str,
        responses: &ResponseSet,
        dosha_result: &str,
        created_at: DateTime<Utc>,
    ) -> u64 {
        // Never reuse an id, even if next_id was lost or edited by hand
        let max_seen = self.assessments.iter().map(|a| a.id).max().unwrap_or(0);
        let id = self.next_id.max(max_seen + 1);
        self.next_id = id + 1;

        self.assessments.push(AssessmentRecord {
            id,
            user_id: user_id.to_string(),
            responses: responses.clone(),
            dosha_result: dosha_result.to_string(),
            created_at,
        });
        id
    }

    /// All records for a user, newest first. Same-instant records order by id descending.
    pub fn for_user(&self, user_id: &str) -> Vec<AssessmentRecord> {
        newest_first(self.assessments.iter().filter(|a| a.user_id == user_id))
    }

    /// Every user's records, newest first
    pub fn all(&self) -> Vec<AssessmentRecord> {
        newest_first(self.assessments.iter())
    }
}

fn newest_first<'a>(records: impl Iterator<Item = &'a AssessmentRecord>) -> Vec<AssessmentRecord> {
    let mut records: Vec<_> = records.cloned().collect();
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn answers(value: &str) -> ResponseSet {
        let mut set = ResponseSet::new();
        set.insert("skin", value);
        set
    }

    #[test]
    fn test_new_state_empty() {
        let state = HistoryState::new();
        assert_eq!(state.version, 1);
        assert_eq!(state.next_id, 1);
        assert!(state.assessments.is_empty());
    }

    #[test]
    fn test_ids_increase() {
        let mut state = HistoryState::new();
        let now = Utc::now();
        assert_eq!(state.record("alice", &answers("vata"), "vata", now), 1);
        assert_eq!(state.record("bob", &answers("kapha"), "kapha", now), 2);
        assert_eq!(state.record("alice", &answers("pitta"), "pitta", now), 3);
        assert_eq!(state.next_id, 4);
    }

    #[test]
    fn test_ids_skip_past_existing_records() {
        let mut state = HistoryState::new();
        state.record("alice", &answers("vata"), "vata", Utc::now());
        state.next_id = 1;
        assert_eq!(state.record("alice", &answers("vata"), "vata", Utc::now()), 2);
    }

    #[test]
    fn test_for_user_newest_first() {
        let mut state = HistoryState::new();
        let now = Utc::now();
        state.record("alice", &answers("vata"), "vata", now - Duration::days(2));
        state.record("bob", &answers("kapha"), "kapha", now - Duration::days(1));
        state.record("alice", &answers("pitta"), "pitta", now);
        state.record("alice", &answers("kapha"), "kapha", now - Duration::days(1));

        let records = state.for_user("alice");
        let results: Vec<_> = records.iter().map(|r| r.dosha_result.as_str()).collect();
        assert_eq!(results, vec!["pitta", "kapha", "vata"]);
        assert!(records.iter().all(|r| r.user_id == "alice"));
    }

    #[test]
    fn test_for_user_same_instant_orders_by_id() {
        let mut state = HistoryState::new();
        let now = Utc::now();
        state.record("alice", &answers("vata"), "vata", now);
        state.record("alice", &answers("pitta"), "pitta", now);

        let ids: Vec<_> = state.for_user("alice").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_all_spans_users_newest_first() {
        let mut state = HistoryState::new();
        let now = Utc::now();
        state.record("alice", &answers("vata"), "vata", now - Duration::days(2));
        state.record("bob", &answers("kapha"), "kapha", now);
        state.record("carol", &answers("pitta"), "pitta", now - Duration::days(1));

        let users: Vec<_> = state.all().iter().map(|r| r.user_id.clone()).collect();
        assert_eq!(users, vec!["bob", "carol", "alice"]);
    }

    #[test]
    fn test_for_unknown_user_empty() {
        let mut state = HistoryState::new();
        state.record("alice", &answers("vata"), "vata", Utc::now());
        assert!(state.for_user("carol").is_empty());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let mut state = HistoryState::new();
        state.record("alice", &answers("vata"), "vata", Utc::now());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["nextId"], 2);
        assert_eq!(json["assessments"][0]["userId"], "alice");
        assert_eq!(json["assessments"][0]["doshaResult"], "vata");
        assert_eq!(json["assessments"][0]["responses"]["skin"], "vata");
        assert!(json["assessments"][0]["createdAt"].is_string());
    }
}
