//! League Store
//!
//! SQLite-backed persistence for teams, matches and news articles. A single
//! connection guarded by an async mutex is plenty for a local league; every
//! operation is one short statement or a read-modify-write under the lock.
//!
//! Timestamps are stored as RFC 3339 text in UTC, which keeps lexicographic
//! and chronological ordering identical.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::league::error::{LeagueError, LeagueResult};
use crate::league::model::{
    DashboardStats, Match, MatchStatus, MatchUpdate, NewMatch, NewNewsArticle, NewTeam,
    NewsArticle, Ranking, Team,
};
use crate::league::standings;

/// Persistent store for all league entities
pub struct LeagueStore {
    conn: Mutex<Connection>,
}

impl LeagueStore {
    /// Open or create the league database at the given path
    pub fn open(path: &Path) -> LeagueResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
            ",
        )?;

        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database, used by tests
    pub fn open_in_memory() -> LeagueResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> LeagueResult<()> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS teams (
                id            TEXT PRIMARY KEY,
                name          TEXT NOT NULL,
                city          TEXT NOT NULL,
                logo_url      TEXT,
                founded_year  INTEGER,
                players_count INTEGER NOT NULL DEFAULT 0,
                created_at    TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS matches (
                id              TEXT PRIMARY KEY,
                home_team_id    TEXT NOT NULL,
                away_team_id    TEXT NOT NULL,
                home_team_score INTEGER,
                away_team_score INTEGER,
                match_date      TEXT NOT NULL,
                venue           TEXT NOT NULL,
                status          TEXT NOT NULL,
                referee         TEXT,
                attendance      INTEGER,
                notes           TEXT,
                created_at      TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_matches_date ON matches(match_date);
            CREATE INDEX IF NOT EXISTS idx_matches_home ON matches(home_team_id);
            CREATE INDEX IF NOT EXISTS idx_matches_away ON matches(away_team_id);

            CREATE TABLE IF NOT EXISTS news (
                id         TEXT PRIMARY KEY,
                title      TEXT NOT NULL,
                content    TEXT NOT NULL,
                author     TEXT NOT NULL,
                image_url  TEXT,
                published  INTEGER NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    // ============ Teams ============

    /// Register a new team
    pub async fn create_team(&self, new: NewTeam) -> LeagueResult<Team> {
        let team = Team {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            city: new.city,
            logo_url: new.logo_url,
            founded_year: new.founded_year,
            players_count: new.players_count,
            created_at: Utc::now(),
        };

        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO teams (id, name, city, logo_url, founded_year, players_count, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                team.id,
                team.name,
                team.city,
                team.logo_url,
                team.founded_year,
                team.players_count,
                team.created_at.to_rfc3339(),
            ],
        )?;

        Ok(team)
    }

    /// All teams, in registration order
    pub async fn list_teams(&self) -> LeagueResult<Vec<Team>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare_cached(
            "SELECT id, name, city, logo_url, founded_year, players_count, created_at
             FROM teams ORDER BY created_at, rowid",
        )?;
        let teams = stmt
            .query_map([], row_to_team)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(teams)
    }

    /// Look up a single team
    pub async fn get_team(&self, id: &str) -> LeagueResult<Option<Team>> {
        let conn = self.conn.lock().await;
        let team = conn
            .query_row(
                "SELECT id, name, city, logo_url, founded_year, players_count, created_at
                 FROM teams WHERE id = ?1",
                params![id],
                row_to_team,
            )
            .optional()?;
        Ok(team)
    }

    /// Number of matches in which the team plays, home or away
    pub async fn team_match_count(&self, id: &str) -> LeagueResult<u64> {
        let conn = self.conn.lock().await;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM matches WHERE home_team_id = ?1 OR away_team_id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    /// Remove a team. Returns false if no such team exists.
    pub async fn delete_team(&self, id: &str) -> LeagueResult<bool> {
        let conn = self.conn.lock().await;
        let affected = conn.execute("DELETE FROM teams WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    // ============ Matches ============

    /// Schedule a new match. Referential checks belong to the caller.
    pub async fn create_match(&self, new: NewMatch) -> LeagueResult<Match> {
        let m = Match {
            id: Uuid::new_v4().to_string(),
            home_team_id: new.home_team_id,
            away_team_id: new.away_team_id,
            home_team_score: None,
            away_team_score: None,
            match_date: new.match_date,
            venue: new.venue,
            status: MatchStatus::Scheduled,
            referee: new.referee,
            attendance: None,
            notes: None,
            created_at: Utc::now(),
        };

        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO matches (id, home_team_id, away_team_id, home_team_score,
                                  away_team_score, match_date, venue, status, referee,
                                  attendance, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                m.id,
                m.home_team_id,
                m.away_team_id,
                m.home_team_score,
                m.away_team_score,
                m.match_date.to_rfc3339(),
                m.venue,
                m.status.as_str(),
                m.referee,
                m.attendance,
                m.notes,
                m.created_at.to_rfc3339(),
            ],
        )?;

        Ok(m)
    }

    /// All matches ordered by kick-off, earliest first
    pub async fn list_matches(&self) -> LeagueResult<Vec<Match>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare_cached(
            "SELECT id, home_team_id, away_team_id, home_team_score, away_team_score,
                    match_date, venue, status, referee, attendance, notes, created_at
             FROM matches ORDER BY match_date",
        )?;
        let matches = stmt
            .query_map([], row_to_match)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(matches)
    }

    /// Look up a single match
    pub async fn get_match(&self, id: &str) -> LeagueResult<Option<Match>> {
        let conn = self.conn.lock().await;
        let m = conn
            .query_row(
                "SELECT id, home_team_id, away_team_id, home_team_score, away_team_score,
                        match_date, venue, status, referee, attendance, notes, created_at
                 FROM matches WHERE id = ?1",
                params![id],
                row_to_match,
            )
            .optional()?;
        Ok(m)
    }

    /// Apply a partial update to a match and return the updated row.
    /// Returns None if the match does not exist.
    pub async fn update_match(
        &self,
        id: &str,
        update: MatchUpdate,
    ) -> LeagueResult<Option<Match>> {
        let conn = self.conn.lock().await;

        let Some(mut m) = conn
            .query_row(
                "SELECT id, home_team_id, away_team_id, home_team_score, away_team_score,
                        match_date, venue, status, referee, attendance, notes, created_at
                 FROM matches WHERE id = ?1",
                params![id],
                row_to_match,
            )
            .optional()?
        else {
            return Ok(None);
        };

        if let Some(score) = update.home_team_score {
            m.home_team_score = Some(score);
        }
        if let Some(score) = update.away_team_score {
            m.away_team_score = Some(score);
        }
        if let Some(status) = update.status {
            m.status = status;
        }
        if let Some(attendance) = update.attendance {
            m.attendance = Some(attendance);
        }
        if let Some(notes) = update.notes {
            m.notes = Some(notes);
        }

        conn.execute(
            "UPDATE matches
             SET home_team_score = ?2, away_team_score = ?3, status = ?4,
                 attendance = ?5, notes = ?6
             WHERE id = ?1",
            params![
                m.id,
                m.home_team_score,
                m.away_team_score,
                m.status.as_str(),
                m.attendance,
                m.notes,
            ],
        )?;

        Ok(Some(m))
    }

    /// Remove a match. Returns false if no such match exists.
    pub async fn delete_match(&self, id: &str) -> LeagueResult<bool> {
        let conn = self.conn.lock().await;
        let affected = conn.execute("DELETE FROM matches WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    // ============ News ============

    /// Publish a new article
    pub async fn create_news(&self, new: NewNewsArticle) -> LeagueResult<NewsArticle> {
        let article = NewsArticle {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            content: new.content,
            author: new.author,
            image_url: new.image_url,
            published: new.published,
            created_at: Utc::now(),
        };

        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO news (id, title, content, author, image_url, published, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                article.id,
                article.title,
                article.content,
                article.author,
                article.image_url,
                article.published,
                article.created_at.to_rfc3339(),
            ],
        )?;

        Ok(article)
    }

    /// Published articles, newest first
    pub async fn list_published_news(&self) -> LeagueResult<Vec<NewsArticle>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare_cached(
            "SELECT id, title, content, author, image_url, published, created_at
             FROM news WHERE published = 1
             ORDER BY created_at DESC, rowid DESC",
        )?;
        let articles = stmt
            .query_map([], row_to_news)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(articles)
    }

    /// Look up a single article, published or not
    pub async fn get_news(&self, id: &str) -> LeagueResult<Option<NewsArticle>> {
        let conn = self.conn.lock().await;
        let article = conn
            .query_row(
                "SELECT id, title, content, author, image_url, published, created_at
                 FROM news WHERE id = ?1",
                params![id],
                row_to_news,
            )
            .optional()?;
        Ok(article)
    }

    /// Remove an article. Returns false if no such article exists.
    pub async fn delete_news(&self, id: &str) -> LeagueResult<bool> {
        let conn = self.conn.lock().await;
        let affected = conn.execute("DELETE FROM news WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    // ============ Derived views ============

    /// Summary counts for the home dashboard
    pub async fn dashboard_stats(&self) -> LeagueResult<DashboardStats> {
        let conn = self.conn.lock().await;
        let count = |sql: &str| -> LeagueResult<u64> {
            let n: i64 = conn.query_row(sql, [], |r| r.get(0))?;
            Ok(n as u64)
        };

        Ok(DashboardStats {
            teams_count: count("SELECT COUNT(*) FROM teams")?,
            matches_count: count("SELECT COUNT(*) FROM matches")?,
            finished_matches: count("SELECT COUNT(*) FROM matches WHERE status = 'finished'")?,
            upcoming_matches: count("SELECT COUNT(*) FROM matches WHERE status = 'scheduled'")?,
        })
    }

    /// Standings computed over every finished match
    pub async fn rankings(&self) -> LeagueResult<Vec<Ranking>> {
        let teams = self.list_teams().await?;
        let matches = self.list_matches().await?;
        Ok(standings::compute_rankings(&teams, &matches))
    }
}

// ============ Row mapping ============

fn row_to_team(row: &rusqlite::Row<'_>) -> rusqlite::Result<Team> {
    Ok(Team {
        id: row.get(0)?,
        name: row.get(1)?,
        city: row.get(2)?,
        logo_url: row.get(3)?,
        founded_year: row.get(4)?,
        players_count: row.get(5)?,
        created_at: timestamp_column(row, 6)?,
    })
}

fn row_to_match(row: &rusqlite::Row<'_>) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        home_team_id: row.get(1)?,
        away_team_id: row.get(2)?,
        home_team_score: row.get(3)?,
        away_team_score: row.get(4)?,
        match_date: timestamp_column(row, 5)?,
        venue: row.get(6)?,
        status: status_column(row, 7)?,
        referee: row.get(8)?,
        attendance: row.get(9)?,
        notes: row.get(10)?,
        created_at: timestamp_column(row, 11)?,
    })
}

fn row_to_news(row: &rusqlite::Row<'_>) -> rusqlite::Result<NewsArticle> {
    Ok(NewsArticle {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        author: row.get(3)?,
        image_url: row.get(4)?,
        published: row.get(5)?,
        created_at: timestamp_column(row, 6)?,
    })
}

fn timestamp_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let value: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                rusqlite::types::Type::Text,
                Box::new(LeagueError::CorruptTimestamp(value)),
            )
        })
}

fn status_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<MatchStatus> {
    let value: String = row.get(idx)?;
    MatchStatus::parse(&value).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(LeagueError::UnknownStatus(value)),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_team(name: &str) -> NewTeam {
        NewTeam {
            name: name.to_string(),
            city: "Boston".to_string(),
            logo_url: None,
            founded_year: Some(1998),
            players_count: 18,
        }
    }

    fn new_match(home: &str, away: &str, date: DateTime<Utc>) -> NewMatch {
        NewMatch {
            home_team_id: home.to_string(),
            away_team_id: away.to_string(),
            match_date: date,
            venue: "Stade Municipal".to_string(),
            referee: Some("M. Dupont".to_string()),
        }
    }

    #[tokio::test]
    async fn test_team_round_trip() {
        let store = LeagueStore::open_in_memory().unwrap();

        let created = store.create_team(new_team("FC Nord")).await.unwrap();
        let listed = store.list_teams().await.unwrap();
        assert_eq!(listed, vec![created.clone()]);

        let fetched = store.get_team(&created.id).await.unwrap();
        assert_eq!(fetched, Some(created.clone()));

        assert!(store.delete_team(&created.id).await.unwrap());
        assert!(!store.delete_team(&created.id).await.unwrap());
        assert!(store.list_teams().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("league.db");
        let store = LeagueStore::open(&path).unwrap();
        store.create_team(new_team("AS Sud")).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_team_match_count() {
        let store = LeagueStore::open_in_memory().unwrap();
        let home = store.create_team(new_team("FC Nord")).await.unwrap();
        let away = store.create_team(new_team("AS Sud")).await.unwrap();
        let idle = store.create_team(new_team("US Est")).await.unwrap();

        store
            .create_match(new_match(&home.id, &away.id, Utc::now()))
            .await
            .unwrap();

        assert_eq!(store.team_match_count(&home.id).await.unwrap(), 1);
        assert_eq!(store.team_match_count(&away.id).await.unwrap(), 1);
        assert_eq!(store.team_match_count(&idle.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_matches_ordered_by_date() {
        let store = LeagueStore::open_in_memory().unwrap();
        let a = store.create_team(new_team("FC Nord")).await.unwrap();
        let b = store.create_team(new_team("AS Sud")).await.unwrap();

        let later = Utc.with_ymd_and_hms(2026, 9, 20, 15, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2026, 9, 6, 15, 0, 0).unwrap();
        store.create_match(new_match(&a.id, &b.id, later)).await.unwrap();
        store.create_match(new_match(&b.id, &a.id, earlier)).await.unwrap();

        let matches = store.list_matches().await.unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].match_date, earlier);
        assert_eq!(matches[1].match_date, later);
        assert_eq!(matches[0].status, MatchStatus::Scheduled);
    }

    #[tokio::test]
    async fn test_update_match_is_partial() {
        let store = LeagueStore::open_in_memory().unwrap();
        let a = store.create_team(new_team("FC Nord")).await.unwrap();
        let b = store.create_team(new_team("AS Sud")).await.unwrap();
        let m = store
            .create_match(new_match(&a.id, &b.id, Utc::now()))
            .await
            .unwrap();

        let updated = store
            .update_match(
                &m.id,
                MatchUpdate {
                    home_team_score: Some(2),
                    away_team_score: Some(1),
                    status: Some(MatchStatus::Finished),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.home_team_score, Some(2));
        assert_eq!(updated.away_team_score, Some(1));
        assert_eq!(updated.status, MatchStatus::Finished);
        // Untouched fields survive.
        assert_eq!(updated.referee.as_deref(), Some("M. Dupont"));
        assert_eq!(updated.venue, m.venue);

        let reloaded = store.get_match(&m.id).await.unwrap().unwrap();
        assert_eq!(reloaded, updated);
    }

    #[tokio::test]
    async fn test_update_missing_match() {
        let store = LeagueStore::open_in_memory().unwrap();
        let result = store
            .update_match("nope", MatchUpdate::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_news_published_filter_and_order() {
        let store = LeagueStore::open_in_memory().unwrap();

        let first = store
            .create_news(NewNewsArticle {
                title: "Ouverture de la saison".to_string(),
                content: "Le championnat reprend.".to_string(),
                author: "La rédaction".to_string(),
                image_url: None,
                published: true,
            })
            .await
            .unwrap();
        let hidden = store
            .create_news(NewNewsArticle {
                title: "Brouillon".to_string(),
                content: "Pas encore prêt.".to_string(),
                author: "La rédaction".to_string(),
                image_url: None,
                published: false,
            })
            .await
            .unwrap();
        let second = store
            .create_news(NewNewsArticle {
                title: "Première journée".to_string(),
                content: "Trois matchs au programme.".to_string(),
                author: "La rédaction".to_string(),
                image_url: Some("https://example.com/ball.jpg".to_string()),
                published: true,
            })
            .await
            .unwrap();

        let listed = store.list_published_news().await.unwrap();
        let ids: Vec<_> = listed.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);

        // Unpublished articles stay reachable by id.
        assert!(store.get_news(&hidden.id).await.unwrap().is_some());

        assert!(store.delete_news(&first.id).await.unwrap());
        assert!(!store.delete_news(&first.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_dashboard_stats() {
        let store = LeagueStore::open_in_memory().unwrap();
        let a = store.create_team(new_team("FC Nord")).await.unwrap();
        let b = store.create_team(new_team("AS Sud")).await.unwrap();

        let m1 = store
            .create_match(new_match(&a.id, &b.id, Utc::now()))
            .await
            .unwrap();
        store
            .create_match(new_match(&b.id, &a.id, Utc::now()))
            .await
            .unwrap();
        store
            .update_match(
                &m1.id,
                MatchUpdate {
                    home_team_score: Some(1),
                    away_team_score: Some(0),
                    status: Some(MatchStatus::Finished),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stats = store.dashboard_stats().await.unwrap();
        assert_eq!(
            stats,
            DashboardStats {
                teams_count: 2,
                matches_count: 2,
                finished_matches: 1,
                upcoming_matches: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_rankings_from_store() {
        let store = LeagueStore::open_in_memory().unwrap();
        let a = store.create_team(new_team("FC Nord")).await.unwrap();
        let b = store.create_team(new_team("AS Sud")).await.unwrap();

        let m = store
            .create_match(new_match(&a.id, &b.id, Utc::now()))
            .await
            .unwrap();
        store
            .update_match(
                &m.id,
                MatchUpdate {
                    home_team_score: Some(3),
                    away_team_score: Some(1),
                    status: Some(MatchStatus::Finished),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let rankings = store.rankings().await.unwrap();
        assert_eq!(rankings.len(), 2);
        assert_eq!(rankings[0].team_name, "FC Nord");
        assert_eq!(rankings[0].points, 3);
        assert_eq!(rankings[0].position, 1);
        assert_eq!(rankings[1].points, 0);
    }
}
