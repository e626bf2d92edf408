// ABOUTME: Database operations for training sessions
// ABOUTME: Date-filtered scans in store order plus create, update and delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use super::{db_error, to_count, to_u32, Database};
use chrono::NaiveDate;
use sqlx::{sqlite::SqliteRow, Row};
use tracing::info;
use trainlog_core::errors::database::DatabaseError;
use trainlog_core::errors::{AppError, AppResult};
use trainlog_core::models::{
    AthleteId, NewSession, SessionFilter, SessionId, SessionWithAthlete, TrainingSession,
};

/// Stored date format
const DATE_FORMAT: &str = "%Y-%m-%d";

impl Database {
    /// Sessions of every athlete within `filter`, joined with the athlete name
    ///
    /// Ordered by date descending, then id descending.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_sessions(&self, filter: &SessionFilter) -> AppResult<Vec<SessionWithAthlete>> {
        let (from, to) = filter_bounds(filter);
        let rows = sqlx::query(
            r"
            SELECT ts.id, ts.athlete_id, ts.date, ts.activity_type, ts.duration,
                   ts.repetitions, ts.score, ts.notes, a.name AS athlete_name
            FROM training_sessions ts
            JOIN athletes a ON ts.athlete_id = a.id
            WHERE ($1 IS NULL OR ts.date >= $1) AND ($2 IS NULL OR ts.date <= $2)
            ORDER BY ts.date DESC, ts.id DESC
            ",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list sessions"))?;

        rows.iter()
            .map(|row| {
                Ok(SessionWithAthlete {
                    session: row_to_session(row)?,
                    athlete_name: row.get("athlete_name"),
                })
            })
            .collect()
    }

    /// Sessions of one athlete within `filter`, date then id descending
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_sessions_for_athlete(
        &self,
        athlete_id: AthleteId,
        filter: &SessionFilter,
    ) -> AppResult<Vec<TrainingSession>> {
        let (from, to) = filter_bounds(filter);
        let rows = sqlx::query(
            r"
            SELECT id, athlete_id, date, activity_type, duration, repetitions, score, notes
            FROM training_sessions
            WHERE athlete_id = $1
              AND ($2 IS NULL OR date >= $2) AND ($3 IS NULL OR date <= $3)
            ORDER BY date DESC, id DESC
            ",
        )
        .bind(athlete_id.get())
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list athlete sessions"))?;

        rows.iter().map(row_to_session).collect()
    }

    /// Look up one session
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_session(&self, session_id: SessionId) -> AppResult<Option<TrainingSession>> {
        let row = sqlx::query(
            r"
            SELECT id, athlete_id, date, activity_type, duration, repetitions, score, notes
            FROM training_sessions
            WHERE id = $1
            ",
        )
        .bind(session_id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to get session"))?;

        row.map(|r| row_to_session(&r)).transpose()
    }

    /// Log a new session for an existing athlete
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the athlete does not exist, a validation
    /// error for a bad payload, or an error if the insert fails
    pub async fn create_session(&self, session: NewSession) -> AppResult<TrainingSession> {
        let session = session.normalized()?;
        self.require_athlete(session.athlete_id).await?;

        let result = sqlx::query(
            r"
            INSERT INTO training_sessions
                (athlete_id, date, activity_type, duration, repetitions, score, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(session.athlete_id.get())
        .bind(session.date.format(DATE_FORMAT).to_string())
        .bind(&session.activity_type)
        .bind(session.duration_minutes.map(i64::from))
        .bind(session.repetitions.map(i64::from))
        .bind(session.score)
        .bind(&session.notes)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to create session"))?;

        let id = SessionId::new(result.last_insert_rowid());
        info!(session_id = %id, athlete_id = %session.athlete_id, "Training session logged");

        Ok(TrainingSession {
            id,
            athlete_id: session.athlete_id,
            date: session.date,
            activity_type: session.activity_type,
            duration_minutes: session.duration_minutes,
            repetitions: session.repetitions,
            score: session.score,
            notes: session.notes,
        })
    }

    /// Replace a session; `None` when the session id is unknown
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the referenced athlete does not exist, a
    /// validation error for a bad payload, or an error if the update fails
    pub async fn update_session(
        &self,
        session_id: SessionId,
        session: NewSession,
    ) -> AppResult<Option<TrainingSession>> {
        let session = session.normalized()?;
        self.require_athlete(session.athlete_id).await?;

        let result = sqlx::query(
            r"
            UPDATE training_sessions
            SET athlete_id = $1, date = $2, activity_type = $3, duration = $4,
                repetitions = $5, score = $6, notes = $7
            WHERE id = $8
            ",
        )
        .bind(session.athlete_id.get())
        .bind(session.date.format(DATE_FORMAT).to_string())
        .bind(&session.activity_type)
        .bind(session.duration_minutes.map(i64::from))
        .bind(session.repetitions.map(i64::from))
        .bind(session.score)
        .bind(&session.notes)
        .bind(session_id.get())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to update session"))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_session(session_id).await
    }

    /// Delete a session
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_session(&self, session_id: SessionId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM training_sessions WHERE id = $1")
            .bind(session_id.get())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete session"))?;

        Ok(result.rows_affected() > 0)
    }

    /// Number of sessions across all athletes
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_sessions(&self) -> AppResult<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM training_sessions")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count sessions"))?;

        to_count("count", row.get("count"))
    }

    async fn require_athlete(&self, athlete_id: AthleteId) -> AppResult<()> {
        match self.get_athlete(athlete_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(format!("Athlete {athlete_id}"))
                .with_resource_id(athlete_id.to_string())),
        }
    }
}

fn filter_bounds(filter: &SessionFilter) -> (Option<String>, Option<String>) {
    (
        filter.from.map(|d| d.format(DATE_FORMAT).to_string()),
        filter.to.map(|d| d.format(DATE_FORMAT).to_string()),
    )
}

fn row_to_session(row: &SqliteRow) -> AppResult<TrainingSession> {
    let date_str: String = row.get("date");
    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|e| {
        DatabaseError::InvalidData {
            field: "date",
            reason: format!("'{date_str}': {e}"),
        }
    })?;

    Ok(TrainingSession {
        id: SessionId::new(row.get("id")),
        athlete_id: AthleteId::new(row.get("athlete_id")),
        date,
        activity_type: row.get("activity_type"),
        duration_minutes: to_u32("duration", row.get("duration"))?,
        repetitions: to_u32("repetitions", row.get("repetitions"))?,
        score: row.get("score"),
        notes: row.get("notes"),
    })
}
