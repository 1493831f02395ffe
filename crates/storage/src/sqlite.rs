use std::{
    collections::BTreeMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};
use liftlog_domain as domain;
use rusqlite::{Connection, Row, params};
use uuid::Uuid;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS exercises (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        muscle_group TEXT
    );

    CREATE TABLE IF NOT EXISTS templates (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS template_exercises (
        id TEXT PRIMARY KEY,
        template_id TEXT NOT NULL REFERENCES templates(id) ON DELETE CASCADE,
        exercise_id TEXT NOT NULL REFERENCES exercises(id),
        sort_order INTEGER NOT NULL,
        target_sets INTEGER NOT NULL,
        target_reps INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS workout_logs (
        id TEXT PRIMARY KEY,
        template_id TEXT REFERENCES templates(id) ON DELETE SET NULL,
        name TEXT,
        started_at TEXT NOT NULL,
        finished_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS workout_sets (
        id TEXT PRIMARY KEY,
        workout_log_id TEXT NOT NULL REFERENCES workout_logs(id) ON DELETE CASCADE,
        exercise_id TEXT NOT NULL REFERENCES exercises(id),
        set_number INTEGER NOT NULL,
        weight REAL NOT NULL,
        reps INTEGER NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_workout_logs_started_at
        ON workout_logs(started_at DESC);
    CREATE INDEX IF NOT EXISTS idx_workout_sets_log
        ON workout_sets(workout_log_id);
    CREATE INDEX IF NOT EXISTS idx_workout_sets_exercise
        ON workout_sets(exercise_id);
    CREATE INDEX IF NOT EXISTS idx_template_exercises_template
        ON template_exercises(template_id);
";

/// SQLite-backed implementation of the domain repositories.
///
/// The schema is created on open and the preset exercise catalog is seeded
/// iff the exercise table is empty.
#[derive(Clone)]
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, domain::StorageError> {
        Self::initialize(Connection::open(path).map_err(storage_error)?)
    }

    pub fn open_in_memory() -> Result<Self, domain::StorageError> {
        Self::initialize(Connection::open_in_memory().map_err(storage_error)?)
    }

    fn initialize(conn: Connection) -> Result<Self, domain::StorageError> {
        conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA foreign_keys = ON;")
            .map_err(storage_error)?;
        conn.execute_batch(SCHEMA).map_err(storage_error)?;
        seed_exercises(&conn).map_err(storage_error)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, domain::StorageError> {
        self.conn
            .lock()
            .map_err(|_| domain::StorageError::Other("connection mutex poisoned".into()))
    }
}

fn seed_exercises(conn: &Connection) -> rusqlite::Result<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM exercises", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(());
    }
    for (name, muscle_group) in domain::catalog::PRESET_EXERCISES {
        conn.execute(
            "INSERT INTO exercises (id, name, muscle_group) VALUES (?1, ?2, ?3)",
            params![Uuid::new_v4().to_string(), name, muscle_group.name()],
        )?;
    }
    log::debug!(
        "seeded {} preset exercises",
        domain::catalog::PRESET_EXERCISES.len()
    );
    Ok(())
}

impl domain::ExerciseRepository for SqliteStorage {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT id, name, muscle_group FROM exercises ORDER BY muscle_group, name")
            .map_err(read_error)?;
        let exercises = stmt
            .query_map([], exercise_from_row)
            .map_err(read_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_error)?;
        Ok(exercises)
    }

    async fn search_exercises(&self, query: &str) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, name, muscle_group FROM exercises
                 WHERE name LIKE ?1
                 ORDER BY muscle_group, name",
            )
            .map_err(read_error)?;
        let exercises = stmt
            .query_map([format!("%{query}%")], exercise_from_row)
            .map_err(read_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_error)?;
        Ok(exercises)
    }

    async fn create_exercise(
        &self,
        name: domain::Name,
        muscle_group: Option<domain::MuscleGroup>,
    ) -> Result<domain::Exercise, domain::CreateError> {
        let conn = self.lock()?;
        let id = Uuid::new_v4();
        conn.execute(
            "INSERT INTO exercises (id, name, muscle_group) VALUES (?1, ?2, ?3)",
            params![
                id.to_string(),
                name.as_str(),
                muscle_group.map(domain::MuscleGroup::name)
            ],
        )
        .map_err(create_error)?;
        Ok(domain::Exercise {
            id: id.into(),
            name,
            muscle_group,
        })
    }
}

impl domain::TemplateRepository for SqliteStorage {
    async fn read_templates(&self) -> Result<Vec<domain::Template>, domain::ReadError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT id, name, created_at FROM templates ORDER BY created_at DESC")
            .map_err(read_error)?;
        let templates = stmt
            .query_map([], template_from_row)
            .map_err(read_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_error)?;
        Ok(templates)
    }

    async fn read_template(
        &self,
        id: domain::TemplateID,
    ) -> Result<domain::TemplateDetail, domain::ReadError> {
        let conn = self.lock()?;
        let template = conn
            .query_row(
                "SELECT id, name, created_at FROM templates WHERE id = ?1",
                [id.to_string()],
                template_from_row,
            )
            .map_err(read_error)?;
        let mut stmt = conn
            .prepare(
                "SELECT te.exercise_id, e.name, e.muscle_group, te.target_sets, te.target_reps
                 FROM template_exercises te
                 JOIN exercises e ON te.exercise_id = e.id
                 WHERE te.template_id = ?1
                 ORDER BY te.sort_order",
            )
            .map_err(read_error)?;
        let entries = stmt
            .query_map([id.to_string()], |row| {
                Ok(domain::TemplateEntry {
                    exercise_id: uuid_column(row, 0)?.into(),
                    exercise_name: name_column(row, 1)?,
                    muscle_group: muscle_group_column(row, 2)?,
                    target_sets: row.get(3)?,
                    target_reps: row.get(4)?,
                })
            })
            .map_err(read_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_error)?;
        Ok(domain::TemplateDetail { template, entries })
    }

    async fn create_template(
        &self,
        name: domain::Name,
        entries: Vec<domain::NewTemplateEntry>,
    ) -> Result<domain::TemplateID, domain::CreateError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction().map_err(create_error)?;
        let id = Uuid::new_v4();
        tx.execute(
            "INSERT INTO templates (id, name, created_at) VALUES (?1, ?2, ?3)",
            params![id.to_string(), name.as_str(), timestamp(Utc::now())],
        )
        .map_err(create_error)?;
        for (sort_order, entry) in entries.iter().enumerate() {
            tx.execute(
                "INSERT INTO template_exercises
                     (id, template_id, exercise_id, sort_order, target_sets, target_reps)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    Uuid::new_v4().to_string(),
                    id.to_string(),
                    entry.exercise_id.to_string(),
                    sort_order,
                    entry.target_sets,
                    entry.target_reps,
                ],
            )
            .map_err(create_error)?;
        }
        tx.commit().map_err(create_error)?;
        Ok(id.into())
    }

    async fn delete_template(
        &self,
        id: domain::TemplateID,
    ) -> Result<domain::TemplateID, domain::DeleteError> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM templates WHERE id = ?1", [id.to_string()])
            .map_err(delete_error)?;
        Ok(id)
    }
}

impl domain::WorkoutRepository for SqliteStorage {
    async fn create_workout(
        &self,
        template_id: Option<domain::TemplateID>,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        sets: Vec<domain::WorkoutSet>,
    ) -> Result<domain::Workout, domain::CreateError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction().map_err(create_error)?;
        let id = Uuid::new_v4();
        tx.execute(
            "INSERT INTO workout_logs (id, template_id, name, started_at, finished_at)
             VALUES (?1, ?2, NULL, ?3, ?4)",
            params![
                id.to_string(),
                template_id.map(|t| t.to_string()),
                timestamp(started_at),
                timestamp(finished_at),
            ],
        )
        .map_err(create_error)?;
        for set in &sets {
            insert_set(&tx, &id.to_string(), set).map_err(create_error)?;
        }
        tx.commit().map_err(create_error)?;
        Ok(domain::Workout {
            id: id.into(),
            template_id,
            name: None,
            started_at,
            finished_at,
        })
    }

    async fn read_workouts(
        &self,
        limit: u32,
    ) -> Result<Vec<domain::WorkoutSummary>, domain::ReadError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT wl.id, COALESCE(wl.name, t.name), wl.started_at, wl.finished_at,
                        COUNT(DISTINCT ws.exercise_id), COALESCE(SUM(ws.weight * ws.reps), 0.0)
                 FROM workout_logs wl
                 LEFT JOIN templates t ON wl.template_id = t.id
                 LEFT JOIN workout_sets ws ON ws.workout_log_id = wl.id
                 GROUP BY wl.id
                 ORDER BY wl.started_at DESC
                 LIMIT ?1",
            )
            .map_err(read_error)?;
        let workouts = stmt
            .query_map([limit], |row| {
                Ok(domain::WorkoutSummary {
                    id: uuid_column(row, 0)?.into(),
                    name: optional_name_column(row, 1)?,
                    started_at: datetime_column(row, 2)?,
                    finished_at: datetime_column(row, 3)?,
                    exercise_count: row.get(4)?,
                    total_volume: row.get(5)?,
                })
            })
            .map_err(read_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_error)?;
        Ok(workouts)
    }

    async fn read_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::WorkoutDetail, domain::ReadError> {
        let conn = self.lock()?;
        let (id, template_id, name, started_at, finished_at) = conn
            .query_row(
                "SELECT wl.id, wl.template_id, COALESCE(wl.name, t.name),
                        wl.started_at, wl.finished_at
                 FROM workout_logs wl
                 LEFT JOIN templates t ON wl.template_id = t.id
                 WHERE wl.id = ?1",
                [id.to_string()],
                |row| {
                    Ok((
                        uuid_column(row, 0)?,
                        optional_uuid_column(row, 1)?,
                        optional_name_column(row, 2)?,
                        datetime_column(row, 3)?,
                        datetime_column(row, 4)?,
                    ))
                },
            )
            .map_err(read_error)?;
        let mut stmt = conn
            .prepare(
                "SELECT ws.exercise_id, e.name, e.muscle_group, ws.set_number, ws.weight, ws.reps
                 FROM workout_sets ws
                 JOIN exercises e ON ws.exercise_id = e.id
                 WHERE ws.workout_log_id = ?1
                 ORDER BY ws.exercise_id, ws.set_number",
            )
            .map_err(read_error)?;
        let sets = stmt
            .query_map([id.to_string()], |row| {
                Ok(domain::WorkoutSetDetail {
                    exercise_name: name_column(row, 1)?,
                    muscle_group: muscle_group_column(row, 2)?,
                    set: domain::WorkoutSet {
                        exercise_id: uuid_column(row, 0)?.into(),
                        set_number: row.get(3)?,
                        weight: weight_column(row, 4)?,
                        reps: reps_column(row, 5)?,
                    },
                })
            })
            .map_err(read_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_error)?;
        Ok(domain::WorkoutDetail {
            id: id.into(),
            template_id: template_id.map(Into::into),
            name,
            started_at,
            finished_at,
            sets,
        })
    }

    async fn modify_workout_name(
        &self,
        id: domain::WorkoutID,
        name: Option<domain::Name>,
    ) -> Result<domain::WorkoutID, domain::UpdateError> {
        let conn = self.lock()?;
        let updated = conn
            .execute(
                "UPDATE workout_logs SET name = ?1 WHERE id = ?2",
                params![name.as_ref().map(domain::Name::as_str), id.to_string()],
            )
            .map_err(update_error)?;
        if updated == 0 {
            return Err(domain::UpdateError::NotFound);
        }
        Ok(id)
    }

    async fn replace_workout_sets(
        &self,
        id: domain::WorkoutID,
        sets: Vec<domain::WorkoutSet>,
    ) -> Result<domain::WorkoutID, domain::UpdateError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction().map_err(update_error)?;
        let existing: i64 = tx
            .query_row(
                "SELECT COUNT(*) FROM workout_logs WHERE id = ?1",
                [id.to_string()],
                |row| row.get(0),
            )
            .map_err(update_error)?;
        if existing == 0 {
            return Err(domain::UpdateError::NotFound);
        }
        tx.execute(
            "DELETE FROM workout_sets WHERE workout_log_id = ?1",
            [id.to_string()],
        )
        .map_err(update_error)?;
        for set in &sets {
            insert_set(&tx, &id.to_string(), set).map_err(update_error)?;
        }
        tx.commit().map_err(update_error)?;
        Ok(id)
    }

    async fn delete_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::WorkoutID, domain::DeleteError> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM workout_logs WHERE id = ?1", [id.to_string()])
            .map_err(delete_error)?;
        Ok(id)
    }

    async fn read_personal_records(
        &self,
    ) -> Result<Vec<domain::PersonalRecord>, domain::ReadError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT
                   e.id,
                   e.name,
                   MAX(ws.weight),
                   (SELECT ws2.reps FROM workout_sets ws2
                    JOIN workout_logs wl2 ON ws2.workout_log_id = wl2.id
                    WHERE ws2.exercise_id = e.id
                    ORDER BY ws2.weight DESC, ws2.reps DESC, wl2.started_at DESC
                    LIMIT 1),
                   MAX(ws.weight * ws.reps),
                   (SELECT ws3.weight FROM workout_sets ws3
                    JOIN workout_logs wl3 ON ws3.workout_log_id = wl3.id
                    WHERE ws3.exercise_id = e.id
                    ORDER BY ws3.weight * ws3.reps DESC, wl3.started_at DESC
                    LIMIT 1),
                   (SELECT ws4.reps FROM workout_sets ws4
                    JOIN workout_logs wl4 ON ws4.workout_log_id = wl4.id
                    WHERE ws4.exercise_id = e.id
                    ORDER BY ws4.weight * ws4.reps DESC, wl4.started_at DESC
                    LIMIT 1),
                   (SELECT wl5.started_at FROM workout_sets ws5
                    JOIN workout_logs wl5 ON ws5.workout_log_id = wl5.id
                    WHERE ws5.exercise_id = e.id
                    ORDER BY ws5.weight DESC, ws5.reps DESC, wl5.started_at DESC
                    LIMIT 1)
                 FROM exercises e
                 JOIN workout_sets ws ON ws.exercise_id = e.id
                 GROUP BY e.id
                 ORDER BY e.name",
            )
            .map_err(read_error)?;
        let records = stmt
            .query_map([], |row| {
                Ok(domain::PersonalRecord {
                    exercise_id: uuid_column(row, 0)?.into(),
                    exercise_name: name_column(row, 1)?,
                    max_weight: weight_column(row, 2)?,
                    max_weight_reps: reps_column(row, 3)?,
                    max_volume: row.get(4)?,
                    max_volume_weight: weight_column(row, 5)?,
                    max_volume_reps: reps_column(row, 6)?,
                    achieved_at: datetime_column(row, 7)?,
                })
            })
            .map_err(read_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_error)?;
        Ok(records)
    }

    async fn read_exercise_volume(
        &self,
        exercise_id: domain::ExerciseID,
        days: u32,
    ) -> Result<Vec<domain::DailyVolume>, domain::ReadError> {
        let conn = self.lock()?;
        let cutoff = Utc::now() - Duration::days(i64::from(days));
        let mut stmt = conn
            .prepare(
                "SELECT DATE(wl.started_at), SUM(ws.weight * ws.reps)
                 FROM workout_sets ws
                 JOIN workout_logs wl ON ws.workout_log_id = wl.id
                 WHERE ws.exercise_id = ?1 AND wl.started_at >= ?2
                 GROUP BY DATE(wl.started_at)
                 ORDER BY DATE(wl.started_at)",
            )
            .map_err(read_error)?;
        let volumes = stmt
            .query_map(
                params![exercise_id.to_string(), timestamp(cutoff)],
                |row| {
                    Ok(domain::DailyVolume {
                        date: date_column(row, 0)?,
                        volume: row.get(1)?,
                    })
                },
            )
            .map_err(read_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_error)?;
        Ok(volumes)
    }

    async fn read_monthly_stats(&self) -> Result<domain::MonthlyStats, domain::ReadError> {
        let conn = self.lock()?;
        let now = Utc::now();
        let month_start = Utc
            .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
            .single()
            .ok_or_else(|| domain::ReadError::Other("invalid start of month".into()))?;
        let stats = conn
            .query_row(
                "SELECT
                   (SELECT COUNT(*) FROM workout_logs WHERE started_at >= ?1),
                   (SELECT COALESCE(SUM(ws.weight * ws.reps), 0.0)
                    FROM workout_sets ws
                    JOIN workout_logs wl ON ws.workout_log_id = wl.id
                    WHERE wl.started_at >= ?1),
                   (SELECT e.muscle_group
                    FROM workout_sets ws
                    JOIN workout_logs wl ON ws.workout_log_id = wl.id
                    JOIN exercises e ON ws.exercise_id = e.id
                    WHERE wl.started_at >= ?1 AND e.muscle_group IS NOT NULL
                    GROUP BY e.muscle_group
                    ORDER BY COUNT(*) DESC, e.muscle_group ASC
                    LIMIT 1)",
                [timestamp(month_start)],
                |row| {
                    Ok(domain::MonthlyStats {
                        workout_count: row.get(0)?,
                        total_volume: row.get(1)?,
                        top_muscle_group: muscle_group_column(row, 2)?,
                    })
                },
            )
            .map_err(read_error)?;
        Ok(stats)
    }

    async fn read_workout_dates(
        &self,
        year: i32,
        month: u32,
    ) -> Result<BTreeMap<NaiveDate, domain::WorkoutID>, domain::ReadError> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Ok(BTreeMap::new());
        };
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(|| domain::ReadError::Other("invalid month".into()))?;

        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT DATE(started_at), id FROM workout_logs
                 WHERE started_at >= ?1 AND started_at < ?2
                 ORDER BY started_at",
            )
            .map_err(read_error)?;
        let rows = stmt
            .query_map(
                params![
                    timestamp(first.and_time(NaiveTime::MIN).and_utc()),
                    timestamp(next.and_time(NaiveTime::MIN).and_utc()),
                ],
                |row| Ok((date_column(row, 0)?, uuid_column(row, 1)?)),
            )
            .map_err(read_error)?;
        let mut dates = BTreeMap::new();
        for row in rows {
            let (date, id) = row.map_err(read_error)?;
            // the last workout of a day wins the calendar cell
            dates.insert(date, id.into());
        }
        Ok(dates)
    }

    async fn read_all_workout_dates(&self) -> Result<Vec<NaiveDate>, domain::ReadError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT DISTINCT DATE(started_at) FROM workout_logs
                 ORDER BY DATE(started_at) DESC",
            )
            .map_err(read_error)?;
        let dates = stmt
            .query_map([], |row| date_column(row, 0))
            .map_err(read_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_error)?;
        Ok(dates)
    }
}

fn insert_set(
    conn: &Connection,
    workout_id: &str,
    set: &domain::WorkoutSet,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO workout_sets (id, workout_log_id, exercise_id, set_number, weight, reps)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            Uuid::new_v4().to_string(),
            workout_id,
            set.exercise_id.to_string(),
            set.set_number,
            f64::from(set.weight),
            u32::from(set.reps),
        ],
    )?;
    Ok(())
}

fn exercise_from_row(row: &Row<'_>) -> rusqlite::Result<domain::Exercise> {
    Ok(domain::Exercise {
        id: uuid_column(row, 0)?.into(),
        name: name_column(row, 1)?,
        muscle_group: muscle_group_column(row, 2)?,
    })
}

fn template_from_row(row: &Row<'_>) -> rusqlite::Result<domain::Template> {
    Ok(domain::Template {
        id: uuid_column(row, 0)?.into(),
        name: name_column(row, 1)?,
        created_at: datetime_column(row, 2)?,
    })
}

fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn storage_error(err: rusqlite::Error) -> domain::StorageError {
    match err.sqlite_error_code() {
        Some(rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked) => {
            domain::StorageError::Busy
        }
        _ => domain::StorageError::Other(Box::new(err)),
    }
}

fn read_error(err: rusqlite::Error) -> domain::ReadError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => domain::ReadError::NotFound,
        err => domain::ReadError::Storage(storage_error(err)),
    }
}

fn create_error(err: rusqlite::Error) -> domain::CreateError {
    domain::CreateError::Storage(storage_error(err))
}

fn update_error(err: rusqlite::Error) -> domain::UpdateError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => domain::UpdateError::NotFound,
        err => domain::UpdateError::Storage(storage_error(err)),
    }
}

fn delete_error(err: rusqlite::Error) -> domain::DeleteError {
    domain::DeleteError::Storage(storage_error(err))
}

fn invalid_column<E>(index: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, Box::new(err))
}

fn uuid_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(&row.get::<_, String>(index)?).map_err(|err| invalid_column(index, err))
}

fn optional_uuid_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Option<Uuid>> {
    row.get::<_, Option<String>>(index)?
        .map(|text| Uuid::parse_str(&text).map_err(|err| invalid_column(index, err)))
        .transpose()
}

fn datetime_column(row: &Row<'_>, index: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&row.get::<_, String>(index)?)
        .map(|value| value.with_timezone(&Utc))
        .map_err(|err| invalid_column(index, err))
}

fn date_column(row: &Row<'_>, index: usize) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(&row.get::<_, String>(index)?, "%Y-%m-%d")
        .map_err(|err| invalid_column(index, err))
}

fn name_column(row: &Row<'_>, index: usize) -> rusqlite::Result<domain::Name> {
    domain::Name::new(&row.get::<_, String>(index)?).map_err(|err| invalid_column(index, err))
}

fn optional_name_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Option<domain::Name>> {
    row.get::<_, Option<String>>(index)?
        .map(|text| domain::Name::new(&text).map_err(|err| invalid_column(index, err)))
        .transpose()
}

fn muscle_group_column(
    row: &Row<'_>,
    index: usize,
) -> rusqlite::Result<Option<domain::MuscleGroup>> {
    row.get::<_, Option<String>>(index)?
        .map(|text| {
            domain::MuscleGroup::try_from(text.as_str()).map_err(|err| invalid_column(index, err))
        })
        .transpose()
}

fn weight_column(row: &Row<'_>, index: usize) -> rusqlite::Result<domain::Weight> {
    domain::Weight::new(row.get(index)?).map_err(|err| invalid_column(index, err))
}

fn reps_column(row: &Row<'_>, index: usize) -> rusqlite::Result<domain::Reps> {
    domain::Reps::new(row.get(index)?).map_err(|err| invalid_column(index, err))
}
