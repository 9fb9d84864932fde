/// Persistence for project records
///
/// `ProjectStore` is the seam handlers depend on; `SqliteProjectStore` issues one
/// parameterized statement per call against the shared pool.

use crate::project::types::{NewProject, Project};
use async_trait::async_trait;
use sqlx::{
    sqlite::{SqlitePool, SqliteRow},
    Row,
};
use std::str::FromStr;

/// Storage operations behind the project endpoints
///
/// Every method maps to exactly one SQL statement. Errors are the driver's own.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All rows, in whatever order storage returns them
    async fn list(&self) -> Result<Vec<Project>, sqlx::Error>;

    /// Insert a row and return the id storage assigned to it
    async fn insert(&self, project: &NewProject) -> Result<i64, sqlx::Error>;

    /// Rewrite name, type and status of row `id`; returns affected row count
    async fn update(&self, id: i64, project: &NewProject) -> Result<u64, sqlx::Error>;

    /// Remove row `id`; returns affected row count
    async fn delete(&self, id: i64) -> Result<u64, sqlx::Error>;
}

/// SQLite-backed project store
#[derive(Debug, Clone)]
pub struct SqliteProjectStore {
    pool: SqlitePool,
}

impl SqliteProjectStore {
    /// Create new store over an already bootstrapped pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for SqliteProjectStore {
    async fn list(&self) -> Result<Vec<Project>, sqlx::Error> {
        let rows = sqlx::query("SELECT id, name, project_type, status FROM projects")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(project_from_row).collect()
    }

    async fn insert(&self, project: &NewProject) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO projects (name, project_type, status) VALUES (?, ?, ?)")
            .bind(&project.name)
            .bind(project.project_type.as_str())
            .bind(project.status.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, id: i64, project: &NewProject) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE projects SET name = ?, project_type = ?, status = ? WHERE id = ?")
            .bind(&project.name)
            .bind(project.project_type.as_str())
            .bind(project.status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Decode one row; an enum column outside its set is a decode error, not a panic
fn project_from_row(row: &SqliteRow) -> Result<Project, sqlx::Error> {
    let project_type: String = row.try_get("project_type")?;
    let status: String = row.try_get("status")?;

    Ok(Project {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        project_type: decode_column("project_type", &project_type)?,
        status: decode_column("status", &status)?,
    })
}

fn decode_column<T>(column: &str, raw: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<T>().map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::project::database;
    use crate::project::types::{ProjectStatus, ProjectType};

    async fn memory_store() -> (SqliteProjectStore, SqlitePool) {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        };
        let pool = database::connect(&config).await.unwrap();
        (SqliteProjectStore::new(pool.clone()), pool)
    }

    fn sample(name: &str) -> NewProject {
        NewProject {
            name: name.to_string(),
            project_type: ProjectType::Ecommerce,
            status: ProjectStatus::InProcess,
        }
    }

    #[tokio::test]
    async fn empty_table_lists_nothing() {
        let (store, _pool) = memory_store().await;
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_list_decodes_rows() {
        let (store, _pool) = memory_store().await;

        let first = store.insert(&sample("TestProject")).await.unwrap();
        let second = store.insert(&sample("TestProject")).await.unwrap();
        assert_ne!(first, second);

        let projects = store.list().await.unwrap();
        assert_eq!(projects.len(), 2);
        assert!(projects.iter().all(|p| p.name == "TestProject"
            && p.project_type == ProjectType::Ecommerce
            && p.status == ProjectStatus::InProcess));
    }

    #[tokio::test]
    async fn update_and_delete_report_affected_rows() {
        let (store, _pool) = memory_store().await;
        let id = store.insert(&sample("Before")).await.unwrap();

        let changed = NewProject {
            name: "After".to_string(),
            project_type: ProjectType::SupplyChain,
            status: ProjectStatus::Completed,
        };
        assert_eq!(store.update(id, &changed).await.unwrap(), 1);
        assert_eq!(store.update(id + 100, &changed).await.unwrap(), 0);

        let projects = store.list().await.unwrap();
        assert_eq!(
            projects,
            vec![Project {
                id,
                name: "After".to_string(),
                project_type: ProjectType::SupplyChain,
                status: ProjectStatus::Completed,
            }]
        );

        assert_eq!(store.delete(id).await.unwrap(), 1);
        assert_eq!(store.delete(id).await.unwrap(), 0);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_enum_value_in_storage_fails_the_list() {
        let (store, pool) = memory_store().await;
        sqlx::query("INSERT INTO projects (name, project_type, status) VALUES ('Legacy', 'Retail', 'inprocess')")
            .execute(&pool)
            .await
            .unwrap();

        let err = store.list().await.unwrap_err();
        assert!(matches!(err, sqlx::Error::ColumnDecode { ref index, .. } if index == "project_type"));
    }
}
