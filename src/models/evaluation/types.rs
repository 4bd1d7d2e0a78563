use serde::{Deserialize, Serialize};

/// One stored criterion entry. `score` is None when the evaluator wrote
/// evidence without rating.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationEntry {
    pub name: String,
    pub score: Option<i64>,
    pub evidence: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub id: i64,
    pub participant_id: i64,
    pub evaluator_id: Option<i64>,
    pub evaluator_name: Option<String>,
    pub created_at: String,
    pub criteria: Vec<EvaluationEntry>,
}

#[derive(Debug, Deserialize)]
pub struct EntryInput {
    pub name: String,
    pub score: Option<i64>,
    #[serde(default)]
    pub evidence: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    pub participant_id: i64,
    pub evaluator_id: Option<i64>,
    pub criteria: Vec<EntryInput>,
}

/// One scored entry as surfaced by the ranking detail view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub score: i64,
    pub evidence: String,
    pub evaluator_name: Option<String>,
    pub created_at: String,
}

/// A supporter's standing on one criterion: average of all scored entries,
/// plus the underlying entries for the expandable detail.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSupporter {
    pub participant_id: i64,
    pub name: String,
    pub checked_in: bool,
    pub check_in_photo: Option<String>,
    pub average_score: f64,
    pub evaluation_count: i64,
    pub entries: Vec<RankedEntry>,
}
