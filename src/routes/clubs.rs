use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{Club, ClubResponse, CreateClub, CreatedResponse, DeletedResponse};

// Ids that are not integers never match a club
fn club_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id).map_err(|_| ApiError::club_not_found())
}

// GET /clubs - List all clubs in insertion order
pub async fn get_clubs(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Club>>, ApiError> {
    let clubs = db::get_all_clubs(&pool)
        .await?
        .into_iter()
        .map(|row| row.into_club())
        .collect();

    Ok(Json(clubs))
}

// GET /clubs/:id - Get club by ID
pub async fn get_club_by_id(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ClubResponse>, ApiError> {
    let club_id = club_id(path)?;

    let club = db::get_club_by_id(&pool, club_id)
        .await?
        .ok_or_else(ApiError::club_not_found)?;

    Ok(Json(ClubResponse {
        success: true,
        club: club.into_club(),
    }))
}

// POST /clubs - Create a club, requires a name
pub async fn create_club(
    State(pool): State<SqlitePool>,
    payload: Result<Json<CreateClub>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::debug!("Rejected club payload: {}", rejection);
            return Err(ApiError::BadRequest("Name is required".to_string()));
        }
    };

    let new_club = payload
        .into_new_club()
        .ok_or_else(|| ApiError::BadRequest("Name is required".to_string()))?;

    let club_id = db::insert_club(&pool, &new_club).await?;

    tracing::info!("Created club {} ({})", club_id, new_club.name);

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            message: "Club created successfully".to_string(),
            club_id,
        }),
    ))
}

// DELETE /clubs/:id - Delete club by ID
pub async fn delete_club(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let club_id = club_id(path)?;

    if !db::delete_club(&pool, club_id).await? {
        return Err(ApiError::club_not_found());
    }

    tracing::info!("Deleted club {}", club_id);

    Ok(Json(DeletedResponse {
        success: true,
        message: "Club deleted successfully".to_string(),
    }))
}
