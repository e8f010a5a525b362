use serde::{Deserialize, Serialize};

/// Query parameters for `GET /listSchools`.
///
/// Both parameters are kept as raw text so that presence and numeric
/// parsing can be reported as distinct validation failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSchoolsQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSchoolResponse {
    pub message: String,

    #[serde(rename = "schoolId")]
    pub school_id: u64,
}

impl AddSchoolResponse {
    pub fn created(school_id: u64) -> Self {
        Self {
            message: "School added successfully".to_string(),
            school_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
