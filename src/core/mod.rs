pub mod choices;
pub mod field;
pub mod field_errors;
pub mod field_list;
pub mod form;
pub mod form_data;
pub mod validators;

pub use crate::domain::model::{Choice, User};
pub use crate::domain::ports::UserStore;
pub use crate::utils::error::Result;
pub use self::choices::ChoiceCatalog;
pub use self::field::{DateValue, FieldKind, FieldSpec, FormSchema};
pub use self::field_errors::FieldErrors;
pub use self::field_list::{FieldList, Subform};
pub use self::form::{process, Form, FormContext, Submission, SubmissionReport, SubmitAction};
pub use self::form_data::FormData;
