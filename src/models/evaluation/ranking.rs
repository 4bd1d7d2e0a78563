//! Supporter ranking: per criterion, the average of every scored entry,
//! unscored entries excluded from both sum and count. Read-only aggregation.

use rusqlite::{Connection, params};

use super::queries::count_for_participant;
use super::types::{RankedEntry, RankedSupporter};

/// Rank all supporters on one criterion, descending by average score.
/// Ties keep participant load order (ascending id) — the sort is stable.
pub fn supporter_ranking(
    conn: &Connection,
    criterion: &str,
) -> rusqlite::Result<Vec<RankedSupporter>> {
    let mut supporter_stmt = conn.prepare(
        "SELECT id, name, checked_in, check_in_photo FROM participants \
         WHERE role = 'supporter' ORDER BY id",
    )?;
    let supporters = supporter_stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>("id")?,
                row.get::<_, String>("name")?,
                row.get::<_, i64>("checked_in")? != 0,
                row.get::<_, Option<String>>("check_in_photo")?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut entry_stmt = conn.prepare(
        "SELECT ee.score, ee.evidence, u.name AS evaluator_name, e.created_at \
         FROM evaluation_entries ee \
         JOIN evaluations e ON ee.evaluation_id = e.id \
         LEFT JOIN users u ON e.evaluator_id = u.id \
         WHERE e.participant_id = ?1 AND ee.criterion = ?2 AND ee.score IS NOT NULL \
         ORDER BY e.created_at, e.id",
    )?;

    let mut ranked = Vec::with_capacity(supporters.len());
    for (id, name, checked_in, check_in_photo) in supporters {
        let entries = entry_stmt
            .query_map(params![id, criterion], |row| {
                Ok(RankedEntry {
                    score: row.get("score")?,
                    evidence: row.get("evidence")?,
                    evaluator_name: row.get("evaluator_name")?,
                    created_at: row.get("created_at")?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let average_score = if entries.is_empty() {
            0.0
        } else {
            entries.iter().map(|e| e.score as f64).sum::<f64>() / entries.len() as f64
        };

        ranked.push(RankedSupporter {
            participant_id: id,
            name,
            checked_in,
            check_in_photo,
            average_score,
            evaluation_count: count_for_participant(conn, id)?,
            entries,
        });
    }

    ranked.sort_by(|a, b| {
        b.average_score
            .partial_cmp(&a.average_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(ranked)
}
