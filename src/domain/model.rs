use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Case {
    Search {
        name: Option<String>,
        nums: Vec<i32>,
        target: i32,
        expected: isize,
    },
    Palindrome {
        name: Option<String>,
        value: i32,
        expected: bool,
    },
}

impl Case {
    pub fn kind(&self) -> &'static str {
        match self {
            Case::Search { .. } => "search",
            Case::Palindrome { .. } => "palindrome",
        }
    }

    /// 顯示用標籤，未命名時由輸入組出
    pub fn label(&self) -> String {
        match self {
            Case::Search {
                name: Some(name), ..
            }
            | Case::Palindrome {
                name: Some(name), ..
            } => name.clone(),
            Case::Search { nums, target, .. } => format!("search({:?}, {})", nums, target),
            Case::Palindrome { value, .. } => format!("is_palindrome({})", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub label: String,
    pub kind: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite: String,
    pub generated_at: DateTime<Utc>,
    pub outcomes: Vec<Outcome>,
}

impl SuiteReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// 0 when every case passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}
