use sqlx::error::ErrorKind;

use crate::application::repos::RepoError;

pub fn map_sqlx_error(err: sqlx::Error) -> RepoError {
    match err {
        sqlx::Error::Database(db) if db.kind() == ErrorKind::UniqueViolation => {
            let constraint = db
                .constraint()
                .map(str::to_string)
                .or_else(|| {
                    db.message()
                        .split_once("failed: ")
                        .map(|(_, columns)| columns.to_string())
                })
                .unwrap_or_else(|| "unknown".to_string());
            RepoError::Duplicate { constraint }
        }
        sqlx::Error::Database(db) if is_lock_contention(db.code().as_deref()) => RepoError::Timeout,
        sqlx::Error::PoolTimedOut => RepoError::Timeout,
        other => RepoError::from_persistence(other),
    }
}

/// `SQLITE_BUSY` (5) or `SQLITE_LOCKED` (6), including their extended codes.
fn is_lock_contention(code: Option<&str>) -> bool {
    code.and_then(|code| code.parse::<i32>().ok())
        .is_some_and(|code| matches!(code & 0xff, 5 | 6))
}

#[cfg(test)]
mod tests {
    use std::{str::FromStr, time::Duration};

    use sqlx::{Connection, query, sqlite::SqliteConnectOptions, sqlite::SqliteConnection};

    use super::*;

    #[test]
    fn busy_and_locked_codes_count_as_contention() {
        for code in ["5", "6", "261", "517", "262"] {
            assert!(is_lock_contention(Some(code)), "{code}");
        }
        for code in ["19", "2067", "1555", "not-a-code"] {
            assert!(!is_lock_contention(Some(code)), "{code}");
        }
        assert!(!is_lock_contention(None));
    }

    #[test]
    fn pool_timeout_maps_to_timeout() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            RepoError::Timeout
        ));
    }

    #[tokio::test]
    async fn locked_database_maps_to_timeout() {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite://{}", dir.path().join("busy.db").display());
        let options = SqliteConnectOptions::from_str(&url)
            .expect("sqlite url")
            .create_if_missing(true)
            .busy_timeout(Duration::ZERO);

        let mut holder = SqliteConnection::connect_with(&options)
            .await
            .expect("first connection");
        query("CREATE TABLE t (x INTEGER)")
            .execute(&mut holder)
            .await
            .expect("create table");
        query("BEGIN IMMEDIATE")
            .execute(&mut holder)
            .await
            .expect("take write lock");

        let mut writer = SqliteConnection::connect_with(&options)
            .await
            .expect("second connection");
        let err = query("INSERT INTO t (x) VALUES (1)")
            .execute(&mut writer)
            .await
            .expect_err("write lock is held");

        assert!(matches!(map_sqlx_error(err), RepoError::Timeout));
    }
}
