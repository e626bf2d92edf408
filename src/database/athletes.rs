// ABOUTME: Database operations for athlete profiles
// ABOUTME: List, lookup, create, update and delete with cascade to training sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use super::{db_error, to_count, to_u32, Database};
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use tracing::info;
use trainlog_core::errors::database::DatabaseError;
use trainlog_core::errors::AppResult;
use trainlog_core::models::{Athlete, AthleteId, NewAthlete};

const SELECT_ATHLETE: &str = r"
    SELECT id, name, age, sport, email, phone, created_at
    FROM athletes
";

impl Database {
    /// Every athlete, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_athletes(&self) -> AppResult<Vec<Athlete>> {
        let rows = sqlx::query(&format!("{SELECT_ATHLETE} ORDER BY created_at DESC, id DESC"))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list athletes"))?;

        rows.iter().map(row_to_athlete).collect()
    }

    /// Look up one athlete
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_athlete(&self, athlete_id: AthleteId) -> AppResult<Option<Athlete>> {
        let row = sqlx::query(&format!("{SELECT_ATHLETE} WHERE id = $1"))
            .bind(athlete_id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to get athlete"))?;

        row.map(|r| row_to_athlete(&r)).transpose()
    }

    /// Insert a new athlete
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank name, or an error if the insert fails
    pub async fn create_athlete(&self, athlete: NewAthlete) -> AppResult<Athlete> {
        let athlete = athlete.normalized()?;
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO athletes (name, age, sport, email, phone, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&athlete.name)
        .bind(athlete.age.map(i64::from))
        .bind(&athlete.sport)
        .bind(&athlete.email)
        .bind(&athlete.phone)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to create athlete"))?;

        let id = AthleteId::new(result.last_insert_rowid());
        info!(athlete_id = %id, "Athlete created");

        Ok(Athlete {
            id,
            name: athlete.name,
            age: athlete.age,
            sport: athlete.sport,
            email: athlete.email,
            phone: athlete.phone,
            created_at: now,
        })
    }

    /// Replace an athlete's profile fields; `None` when the id is unknown
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank name, or an error if the update fails
    pub async fn update_athlete(
        &self,
        athlete_id: AthleteId,
        athlete: NewAthlete,
    ) -> AppResult<Option<Athlete>> {
        let athlete = athlete.normalized()?;

        let result = sqlx::query(
            r"
            UPDATE athletes SET name = $1, age = $2, sport = $3, email = $4, phone = $5
            WHERE id = $6
            ",
        )
        .bind(&athlete.name)
        .bind(athlete.age.map(i64::from))
        .bind(&athlete.sport)
        .bind(&athlete.email)
        .bind(&athlete.phone)
        .bind(athlete_id.get())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update athlete"))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_athlete(athlete_id).await
    }

    /// Delete an athlete and, through the foreign key, all of their sessions
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_athlete(&self, athlete_id: AthleteId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM athletes WHERE id = $1")
            .bind(athlete_id.get())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete athlete"))?;

        Ok(result.rows_affected() > 0)
    }

    /// Number of athletes
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_athletes(&self) -> AppResult<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM athletes")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count athletes"))?;

        to_count("count", row.get("count"))
    }
}

fn row_to_athlete(row: &SqliteRow) -> AppResult<Athlete> {
    let created_at_str: String = row.get("created_at");
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| DatabaseError::InvalidData {
            field: "created_at",
            reason: e.to_string(),
        })?
        .with_timezone(&Utc);

    Ok(Athlete {
        id: AthleteId::new(row.get("id")),
        name: row.get("name"),
        age: to_u32("age", row.get("age"))?,
        sport: row.get("sport"),
        email: row.get("email"),
        phone: row.get("phone"),
        created_at,
    })
}
