pub mod requests;
pub mod school;

// Re-export commonly used types
pub use requests::{AddSchoolResponse, ErrorResponse, ListSchoolsQuery};
pub use school::{NewSchool, School};
