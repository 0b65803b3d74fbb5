use crate::core::{Case, CaseSource};

/// The warm-up cases that ship with the binary; used when no suite file is given.
#[derive(Debug, Clone)]
pub struct BuiltinSuite {
    cases: Vec<Case>,
}

impl BuiltinSuite {
    pub fn new() -> Self {
        let cases = vec![
            search_case("empty array", &[], 3, -1),
            search_case("single hit", &[5], 5, 0),
            search_case("single miss", &[5], 3, -1),
            search_case("middle hit", &[1, 3, 5, 7, 9, 11], 7, 3),
            search_case("below range", &[1, 3, 5, 7, 9, 11], 0, -1),
            search_case("above range", &[1, 3, 5, 7, 9, 11], 12, -1),
            search_case("gap inside range", &[-1, 0, 3, 5, 9, 12], 2, -1),
            search_case("leetcode 704", &[-1, 0, 3, 5, 9, 12], 9, 4),
            palindrome_case("zero", 0, true),
            palindrome_case("odd length", 121, true),
            palindrome_case("negative", -121, false),
            palindrome_case("trailing zero", 10, false),
            palindrome_case("repeated digit", 555, true),
            palindrome_case("even length", 1221, true),
            palindrome_case("reversal overflows", i32::MAX, false),
        ];

        Self { cases }
    }
}

fn search_case(name: &str, nums: &[i32], target: i32, expected: isize) -> Case {
    Case::Search {
        name: Some(name.to_string()),
        nums: nums.to_vec(),
        target,
        expected,
    }
}

fn palindrome_case(name: &str, value: i32, expected: bool) -> Case {
    Case::Palindrome {
        name: Some(name.to_string()),
        value,
        expected,
    }
}

impl Default for BuiltinSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseSource for BuiltinSuite {
    fn suite_name(&self) -> &str {
        "builtin"
    }

    fn cases(&self) -> &[Case] {
        &self.cases
    }
}
