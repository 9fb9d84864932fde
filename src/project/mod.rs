/// Project management module
/// 
/// Holds the project record and its enumerations, the storage seam used by the
/// HTTP handlers, and the SQLite pool bootstrap.

pub mod database;
pub mod storage;
pub mod types;

pub use storage::{ProjectStore, SqliteProjectStore};
pub use types::{
    is_valid_project_type, is_valid_status, NewProject, Project, ProjectPayload, ProjectStatus,
    ProjectType, ValidationError,
};
