use rusqlite::{Connection, params};

use super::types::{EntryInput, Evaluation, EvaluationEntry};

/// Entries worth keeping: evidence non-empty after trimming. A score of 0
/// means "unscored" and is stored as NULL; the original console's star
/// widget reports 0 for an untouched rating.
fn kept_entries(entries: &[EntryInput]) -> Result<Vec<(String, Option<i64>, String)>, String> {
    let mut kept = Vec::new();
    for entry in entries {
        let evidence = entry.evidence.trim();
        if evidence.is_empty() {
            continue;
        }
        let score = match entry.score {
            Some(0) | None => None,
            Some(s) if (1..=5).contains(&s) => Some(s),
            Some(s) => return Err(format!("Score {s} is outside 0..=5")),
        };
        kept.push((entry.name.clone(), score, evidence.to_string()));
    }
    Ok(kept)
}

/// Insert an evaluation and its kept entries in one transaction. Rejects a
/// submission in which no criterion carries evidence.
pub fn create(
    conn: &mut Connection,
    participant_id: i64,
    evaluator_id: Option<i64>,
    entries: &[EntryInput],
) -> Result<i64, crate::errors::AppError> {
    let kept = kept_entries(entries).map_err(crate::errors::AppError::Validation)?;
    if kept.is_empty() {
        return Err(crate::errors::AppError::Validation(
            "At least one criterion needs evidence".to_string(),
        ));
    }

    let tx = conn.transaction()?;
    tx.execute(
        "INSERT INTO evaluations (participant_id, evaluator_id) VALUES (?1, ?2)",
        params![participant_id, evaluator_id],
    )?;
    let evaluation_id = tx.last_insert_rowid();
    for (name, score, evidence) in &kept {
        tx.execute(
            "INSERT INTO evaluation_entries (evaluation_id, criterion, score, evidence) \
             VALUES (?1, ?2, ?3, ?4)",
            params![evaluation_id, name, score, evidence],
        )?;
    }
    tx.commit()?;
    Ok(evaluation_id)
}

pub fn list_for_participant(
    conn: &Connection,
    participant_id: i64,
) -> rusqlite::Result<Vec<Evaluation>> {
    let mut stmt = conn.prepare(
        "SELECT e.id, e.participant_id, e.evaluator_id, u.name AS evaluator_name, e.created_at \
         FROM evaluations e \
         LEFT JOIN users u ON e.evaluator_id = u.id \
         WHERE e.participant_id = ?1 \
         ORDER BY e.created_at, e.id",
    )?;
    let mut evaluations = stmt
        .query_map(params![participant_id], |row| {
            Ok(Evaluation {
                id: row.get("id")?,
                participant_id: row.get("participant_id")?,
                evaluator_id: row.get("evaluator_id")?,
                evaluator_name: row.get("evaluator_name")?,
                created_at: row.get("created_at")?,
                criteria: Vec::new(),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut entry_stmt = conn.prepare(
        "SELECT criterion, score, evidence FROM evaluation_entries \
         WHERE evaluation_id = ?1 ORDER BY id",
    )?;
    for evaluation in &mut evaluations {
        evaluation.criteria = entry_stmt
            .query_map(params![evaluation.id], |row| {
                Ok(EvaluationEntry {
                    name: row.get("criterion")?,
                    score: row.get("score")?,
                    evidence: row.get("evidence")?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
    }
    Ok(evaluations)
}

pub fn count_for_participant(conn: &Connection, participant_id: i64) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM evaluations WHERE participant_id = ?1",
        params![participant_id],
        |row| row.get(0),
    )
}
