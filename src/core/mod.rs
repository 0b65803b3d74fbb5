pub mod palindrome;
pub mod runner;
pub mod search;

pub use crate::domain::model::{Case, Outcome, SuiteReport};
pub use crate::domain::ports::CaseSource;
pub use crate::utils::error::Result;
