//! Form state module

mod field;
mod machine;
mod snapshot;

pub use field::{FieldValue, FormField};
pub use machine::{FormInstance, SubmissionPhase};
pub use snapshot::FormSnapshot;
