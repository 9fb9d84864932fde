/// Project type definitions
///
/// The `Project` record as stored and listed, the request payload used by create/update,
/// and the two closed enumerations that guard every write.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A project row as it lives in the `projects` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Storage-assigned identifier
    pub id: i64,
    /// Free-form project name (no uniqueness or length rules)
    pub name: String,
    /// Business domain of the project
    pub project_type: ProjectType,
    /// Delivery status
    pub status: ProjectStatus,
}

/// Business domain a project belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Ecommerce,
    Logistics,
    Retail,
    SupplyChain,
    Others,
}

impl ProjectType {
    /// Every accepted project type, in the order used by error messages
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Ecommerce,
        ProjectType::Logistics,
        ProjectType::Retail,
        ProjectType::SupplyChain,
        ProjectType::Others,
    ];

    /// Wire and column representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Ecommerce => "ecommerce",
            ProjectType::Logistics => "logistics",
            ProjectType::Retail => "retail",
            ProjectType::SupplyChain => "supplychain",
            ProjectType::Others => "others",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = ValidationError;

    /// Exact, case-sensitive match. No trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(ValidationError::InvalidProjectType)
    }
}

/// Delivery status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    InProcess,
    Completed,
}

impl ProjectStatus {
    /// Wire and column representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::InProcess => "inprocess",
            ProjectStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inprocess" => Ok(ProjectStatus::InProcess),
            "completed" => Ok(ProjectStatus::Completed),
            _ => Err(ValidationError::InvalidStatus),
        }
    }
}

/// Rejection raised when a payload field falls outside its enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Project type must be in ecommerce, logistics, retail, supplychain, or others")]
    InvalidProjectType,
    #[error("Status must be 'inprocess' or 'completed'")]
    InvalidStatus,
}

/// Returns true when `project_type` is one of the five accepted literals
pub fn is_valid_project_type(project_type: &str) -> bool {
    project_type.parse::<ProjectType>().is_ok()
}

/// Returns true when `status` is exactly "inprocess" or "completed"
pub fn is_valid_status(status: &str) -> bool {
    status.parse::<ProjectStatus>().is_ok()
}

/// JSON body accepted by create and update
///
/// Enum fields arrive as raw strings so that validation can run in a fixed order
/// (type first, then status) and report its own messages.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectPayload {
    /// Accepted for compatibility with clients that echo full records; never used
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(alias = "ptype")]
    pub project_type: String,
    pub status: String,
}

impl ProjectPayload {
    /// Check both enumerations and produce a write-ready record
    pub fn validate(self) -> Result<NewProject, ValidationError> {
        let project_type = self.project_type.parse::<ProjectType>()?;
        let status = self.status.parse::<ProjectStatus>()?;

        Ok(NewProject {
            name: self.name,
            project_type,
            status,
        })
    }
}

/// A validated project without an id, ready to be inserted or written over a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_accepts_exactly_the_five_literals() {
        for accepted in ["ecommerce", "logistics", "retail", "supplychain", "others"] {
            assert!(is_valid_project_type(accepted), "{accepted} should be accepted");
        }
        for rejected in ["", "Ecommerce", "ECOMMERCE", " retail", "retail ", "supply chain", "supply_chain", "other", "invalid"] {
            assert!(!is_valid_project_type(rejected), "{rejected:?} should be rejected");
        }
    }

    #[test]
    fn status_accepts_exactly_two_literals() {
        assert!(is_valid_status("inprocess"));
        assert!(is_valid_status("completed"));
        for rejected in ["", "InProcess", "in_process", "in process", "Completed", "completed\n", "done"] {
            assert!(!is_valid_status(rejected), "{rejected:?} should be rejected");
        }
    }

    #[test]
    fn as_str_matches_serde_names() {
        for project_type in ProjectType::ALL {
            let json = serde_json::to_value(project_type).unwrap();
            assert_eq!(json, project_type.as_str());
        }
        assert_eq!(serde_json::to_value(ProjectStatus::InProcess).unwrap(), "inprocess");
        assert_eq!(serde_json::to_value(ProjectStatus::Completed).unwrap(), "completed");
    }

    #[test]
    fn validation_checks_type_before_status() {
        let payload = ProjectPayload {
            id: None,
            name: "Broken".to_string(),
            project_type: "invalid".to_string(),
            status: "invalid".to_string(),
        };
        assert_eq!(payload.validate(), Err(ValidationError::InvalidProjectType));

        let payload = ProjectPayload {
            id: None,
            name: "Broken".to_string(),
            project_type: "retail".to_string(),
            status: "invalid".to_string(),
        };
        assert_eq!(payload.validate(), Err(ValidationError::InvalidStatus));
    }

    #[test]
    fn payload_binding_is_strict() {
        let ok: ProjectPayload = serde_json::from_str(
            r#"{"id":0,"name":"TestProject","ptype":"ecommerce","status":"inprocess"}"#,
        )
        .unwrap();
        assert_eq!(ok.project_type, "ecommerce");

        let unknown = serde_json::from_str::<ProjectPayload>(
            r#"{"name":"x","project_type":"retail","status":"completed","owner":"me"}"#,
        );
        assert!(unknown.is_err());

        let missing = serde_json::from_str::<ProjectPayload>(r#"{"name":"x","status":"completed"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn valid_payload_becomes_new_project() {
        let payload: ProjectPayload = serde_json::from_str(
            r#"{"name":"UpdatedProject","project_type":"logistics","status":"completed"}"#,
        )
        .unwrap();

        assert_eq!(
            payload.validate().unwrap(),
            NewProject {
                name: "UpdatedProject".to_string(),
                project_type: ProjectType::Logistics,
                status: ProjectStatus::Completed,
            }
        );
    }
}
