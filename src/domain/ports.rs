use crate::domain::model::Case;

/// Anything that can hand the runner a named list of cases.
pub trait CaseSource {
    fn suite_name(&self) -> &str;
    fn cases(&self) -> &[Case];
}
