//! Supporter ranking aggregation: averages over scored entries only,
//! descending order, ties stable by load order.

mod common;

use campops::models::camp::Role;
use campops::models::evaluation::{self, EntryInput, ranking};
use common::*;

fn score_entry(score: Option<i64>) -> EntryInput {
    EntryInput {
        name: "Năng lượng".to_string(),
        score,
        evidence: "ghi nhận".to_string(),
    }
}

fn evaluate(conn: &mut rusqlite::Connection, participant: i64, score: Option<i64>) {
    evaluation::create(conn, participant, None, &[score_entry(score)]).unwrap();
}

#[test]
fn test_average_over_scored_entries() {
    let (_dir, mut conn) = setup_test_db();
    let s1 = insert_participant(&conn, "S1", Role::Supporter);

    for score in [4, 5, 3] {
        evaluate(&mut conn, s1, Some(score));
    }

    let ranked = ranking::supporter_ranking(&conn, "Năng lượng").unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].average_score, 4.0);
    assert_eq!(ranked[0].evaluation_count, 3);
}

#[test]
fn test_unscored_entries_excluded_from_sum_and_count() {
    let (_dir, mut conn) = setup_test_db();
    let s1 = insert_participant(&conn, "S1", Role::Supporter);

    evaluate(&mut conn, s1, Some(4));
    evaluate(&mut conn, s1, Some(5));
    evaluate(&mut conn, s1, Some(3));
    evaluate(&mut conn, s1, None); // evidence without a score

    let ranked = ranking::supporter_ranking(&conn, "Năng lượng").unwrap();
    assert_eq!(ranked[0].average_score, 4.0);
    assert_eq!(ranked[0].entries.len(), 3);
    // The unscored evaluation still counts as a submission.
    assert_eq!(ranked[0].evaluation_count, 4);
}

#[test]
fn test_sorted_descending_by_average() {
    let (_dir, mut conn) = setup_test_db();
    let low = insert_participant(&conn, "Low", Role::Supporter);
    let high = insert_participant(&conn, "High", Role::Supporter);

    evaluate(&mut conn, low, Some(2));
    evaluate(&mut conn, high, Some(5));

    let ranked = ranking::supporter_ranking(&conn, "Năng lượng").unwrap();
    assert_eq!(ranked[0].participant_id, high);
    assert_eq!(ranked[1].participant_id, low);
}

#[test]
fn test_ties_keep_load_order() {
    let (_dir, mut conn) = setup_test_db();
    let first = insert_participant(&conn, "First", Role::Supporter);
    let second = insert_participant(&conn, "Second", Role::Supporter);

    evaluate(&mut conn, first, Some(4));
    evaluate(&mut conn, second, Some(4));

    let ranked = ranking::supporter_ranking(&conn, "Năng lượng").unwrap();
    assert_eq!(ranked[0].participant_id, first);
    assert_eq!(ranked[1].participant_id, second);
}

#[test]
fn test_leaders_not_ranked_and_other_criteria_ignored() {
    let (_dir, mut conn) = setup_test_db();
    let leader = insert_participant(&conn, "L1", Role::Leader);
    let supporter = insert_participant(&conn, "S1", Role::Supporter);

    evaluate(&mut conn, leader, Some(5));
    evaluation::create(
        &mut conn,
        supporter,
        None,
        &[EntryInput {
            name: "Teamwork".to_string(),
            score: Some(5),
            evidence: "hợp tác tốt".to_string(),
        }],
    )
    .unwrap();

    let ranked = ranking::supporter_ranking(&conn, "Năng lượng").unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].participant_id, supporter);
    assert_eq!(ranked[0].average_score, 0.0);
    assert!(ranked[0].entries.is_empty());
}
