use anyhow::Result;
use small_katas::utils::validation::Validate;
use small_katas::{BuiltinSuite, KataError, SuiteConfig, SuiteRunner};
use tempfile::TempDir;

/// 從檔案載入題組、驗證並執行
#[test]
fn test_suite_file_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("katas.toml");

    let config_content = r#"
[suite]
name = "leetcode basics"
description = "704 binary search and 9 palindrome number"

[[cases]]
kind = "search"
name = "leetcode example 1"
nums = [-1, 0, 3, 5, 9, 12]
target = 9
expected = 4

[[cases]]
kind = "search"
name = "leetcode example 2"
nums = [-1, 0, 3, 5, 9, 12]
target = 2
expected = -1

[[cases]]
kind = "palindrome"
value = 121
expected = true

[[cases]]
kind = "palindrome"
name = "wrong on purpose"
value = 10
expected = true
"#;
    std::fs::write(&config_path, config_content)?;

    let suite = SuiteConfig::from_file(&config_path)?;
    suite.validate()?;

    let report = SuiteRunner::new(suite).run();

    assert_eq!(report.suite, "leetcode basics");
    assert_eq!(report.total(), 4);
    assert_eq!(report.passed(), 3);
    assert_eq!(report.failed(), 1);

    let failed: Vec<_> = report.outcomes.iter().filter(|o| !o.passed).collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].label, "wrong on purpose");
    assert_eq!(failed[0].kind, "palindrome");
    assert_eq!(failed[0].actual, "false");

    Ok(())
}

#[test]
fn test_report_serializes_to_json() -> Result<()> {
    let report = SuiteRunner::new(BuiltinSuite::new()).run();
    let json = serde_json::to_value(&report)?;

    assert_eq!(json["suite"], "builtin");
    assert!(json["generated_at"].is_string());

    let outcomes = json["outcomes"].as_array().expect("outcomes array");
    assert_eq!(outcomes.len(), report.total());
    assert!(outcomes.iter().all(|o| o["passed"] == true));
    assert_eq!(outcomes[3]["label"], "middle hit");
    assert_eq!(outcomes[3]["actual"], "3");

    Ok(())
}

#[test]
fn test_invalid_suite_is_rejected_before_running() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("unsorted.toml");
    std::fs::write(
        &config_path,
        r#"
[suite]
name = "unsorted"

[[cases]]
kind = "search"
nums = [3, 1, 2]
target = 1
expected = 1
"#,
    )?;

    let suite = SuiteConfig::from_file(&config_path)?;
    let err = suite.validate().unwrap_err();

    assert!(matches!(err, KataError::InvalidConfigValueError { .. }));
    assert!(err.user_friendly_message().contains("cases[0].nums"));

    Ok(())
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let result = SuiteConfig::from_toml_str("[suite\nname = ");
    assert!(matches!(result, Err(KataError::ConfigParseError { .. })));
}

/// 載入失敗時的退出碼：讀檔錯誤 3，題組內容錯誤 1
#[test]
fn test_load_failures_map_to_exit_codes() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let missing = SuiteConfig::from_file(temp_dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(missing, KataError::IoError(_)));
    assert_eq!(missing.exit_code(), 3);

    let empty_path = temp_dir.path().join("empty.toml");
    std::fs::write(&empty_path, "[suite]\nname = \"empty\"\n")?;
    let empty = SuiteConfig::from_file(&empty_path)?.validate().unwrap_err();
    assert!(matches!(empty, KataError::MissingConfigError { .. }));
    assert_eq!(empty.exit_code(), 1);

    let malformed = SuiteConfig::from_toml_str("[suite").unwrap_err();
    assert_eq!(malformed.exit_code(), 1);

    Ok(())
}

#[test]
fn test_report_exit_code() {
    assert_eq!(SuiteRunner::new(BuiltinSuite::new()).run().exit_code(), 0);

    let failing = SuiteConfig::from_toml_str(
        r#"
[suite]
name = "failing"

[[cases]]
kind = "search"
nums = [1, 3, 5]
target = 3
expected = 0
"#,
    )
    .unwrap();
    assert_eq!(SuiteRunner::new(failing).run().exit_code(), 1);
}
