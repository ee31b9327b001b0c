use sqlx::sqlite::SqlitePool;

use crate::models::Team;

/// Data access for the `equipos` table. Generic CRUD plus one derived query
/// (substring search on the name column), all as parameterized statements.
#[derive(Clone)]
pub struct TeamRepository {
    pool: SqlitePool,
}

impl TeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the backing table if it does not exist yet. AUTOINCREMENT
    /// keeps deleted ids from being handed out again.
    pub async fn create_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS equipos (
                   id      INTEGER PRIMARY KEY AUTOINCREMENT,
                   name    TEXT NOT NULL,
                   league  TEXT NOT NULL,
                   country TEXT NOT NULL
               )"#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn find_all(&self) -> Result<Vec<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            r#"SELECT id, name, league, country FROM equipos ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            r#"SELECT id, name, league, country FROM equipos WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Case-sensitive substring match on the name column. SQLite's LIKE is
    /// case-insensitive for ASCII, so the match uses instr() instead.
    pub async fn find_by_name_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            r#"SELECT id, name, league, country FROM equipos
               WHERE instr(name, ?) > 0
               ORDER BY id"#,
        )
        .bind(fragment)
        .fetch_all(&self.pool)
        .await
    }

    /// Upsert-by-identity: insert when the entity carries no id, update the
    /// mutable columns otherwise.
    pub async fn save(&self, team: Team) -> Result<Team, sqlx::Error> {
        match team.id {
            None => {
                let result = sqlx::query(
                    r#"INSERT INTO equipos (name, league, country) VALUES (?, ?, ?)"#,
                )
                .bind(&team.name)
                .bind(&team.league)
                .bind(&team.country)
                .execute(&self.pool)
                .await?;

                Ok(Team {
                    id: Some(result.last_insert_rowid()),
                    ..team
                })
            }
            Some(id) => {
                sqlx::query(
                    r#"UPDATE equipos SET name = ?, league = ?, country = ? WHERE id = ?"#,
                )
                .bind(&team.name)
                .bind(&team.league)
                .bind(&team.country)
                .bind(id)
                .execute(&self.pool)
                .await?;

                Ok(team)
            }
        }
    }

    /// Deleting an absent id is not an error.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query(r#"DELETE FROM equipos WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
