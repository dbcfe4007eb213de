/// Command error type and exit codes.
pub mod error;
/// Extract one typed field.
pub mod get;
/// Key presence query.
pub mod have;
/// Document loading helpers.
pub(crate) mod util;
/// To-do item extraction walkthrough.
pub mod walkthrough;
