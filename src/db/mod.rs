use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use crate::models::*;

/// Open the SQLite file behind `database_url`, creating it if it does not exist yet.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePool::connect_with(options).await
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS club (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               name TEXT NOT NULL,
               description TEXT,
               memberCount INTEGER DEFAULT 0,
               image TEXT
           )"#
    )
    .execute(pool)
    .await?;

    Ok(())
}

// Club queries
pub async fn get_all_clubs(pool: &SqlitePool) -> Result<Vec<ClubRow>, sqlx::Error> {
    sqlx::query_as::<_, ClubRow>(
        r#"SELECT id, name, description, memberCount, image FROM club ORDER BY id"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_club_by_id(pool: &SqlitePool, club_id: i64) -> Result<Option<ClubRow>, sqlx::Error> {
    sqlx::query_as::<_, ClubRow>(
        r#"SELECT id, name, description, memberCount, image FROM club WHERE id = ?"#
    )
    .bind(club_id)
    .fetch_optional(pool)
    .await
}

/// Insert a club and return its newly assigned id
pub async fn insert_club(pool: &SqlitePool, club: &NewClub) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO club (name, description, memberCount, image) VALUES (?, ?, ?, ?)"#
    )
    .bind(&club.name)
    .bind(&club.description)
    .bind(club.member_count)
    .bind(&club.image)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Delete a club by id. Returns false when no row matched.
pub async fn delete_club(pool: &SqlitePool, club_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"DELETE FROM club WHERE id = ?"#
    )
    .bind(club_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
