pub mod field;
pub mod issue;
pub mod reference;
pub mod submission;

pub use field::{FieldName, FormValues, HiddenField};
pub use issue::ValidationIssue;
pub use reference::{generate_reference, is_reference_format};
pub use submission::{SubmissionOutcome, SubmissionRequest, SubmissionResponse};
