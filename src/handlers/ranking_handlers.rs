use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::evaluation::{criteria, ranking};

#[derive(Debug, Deserialize)]
pub struct RankingQuery {
    pub criterion: Option<String>,
}

/// GET /api/rankings/supporters?criterion=NAME - Supporters ordered by
/// average score on one criterion, ties stable by load order. Defaults to
/// the first supporter criterion.
pub async fn supporters(
    pool: web::Data<DbPool>,
    query: web::Query<RankingQuery>,
) -> Result<HttpResponse, AppError> {
    let criterion = query
        .criterion
        .clone()
        .unwrap_or_else(|| criteria::SUPPORTER_CRITERIA[0].name.to_string());

    if !criteria::SUPPORTER_CRITERIA
        .iter()
        .any(|c| c.name == criterion)
    {
        return Err(AppError::Validation(format!(
            "Unknown criterion '{criterion}'"
        )));
    }

    let conn = pool.get()?;
    let ranked = ranking::supporter_ranking(&conn, &criterion)?;
    Ok(HttpResponse::Ok().json(ranked))
}
