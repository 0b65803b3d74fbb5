pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::{builtin::BuiltinSuite, suite_config::SuiteConfig};
pub use core::{
    palindrome::{is_palindrome, reverse_digits},
    runner::SuiteRunner,
    search::{position, search, NOT_FOUND},
};
pub use utils::error::{KataError, Result};
