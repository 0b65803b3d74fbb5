use clap::Parser;
use small_katas::core::CaseSource;
use small_katas::domain::model::SuiteReport;
use small_katas::utils::error::KataError;
use small_katas::utils::{logger, validation::Validate};
use small_katas::{is_palindrome, search, BuiltinSuite, CliConfig, Command, SuiteConfig, SuiteRunner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    match &config.command {
        Command::Suite { json: true, .. } => logger::init_json_logger(config.verbose),
        _ => logger::init_cli_logger(config.verbose),
    }

    tracing::debug!("CLI config: {:?}", config);

    match config.command {
        Command::Search { nums, target } => {
            println!("{}", search(&nums, &target));
        }
        Command::Palindrome { value } => {
            println!("{}", is_palindrome(value));
        }
        Command::Suite { config, json } => {
            let report = match config {
                Some(path) => {
                    tracing::info!("📁 Loading suite from: {}", path);
                    let suite = match load_suite(&path) {
                        Ok(suite) => suite,
                        Err(e) => exit_with(&e),
                    };
                    if let Some(description) = suite.description() {
                        tracing::info!("📋 {}", description);
                    }
                    run(suite)
                }
                None => run(BuiltinSuite::new()),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }

            if !report.all_passed() {
                std::process::exit(report.exit_code());
            }
        }
    }

    Ok(())
}

fn load_suite(path: &str) -> small_katas::Result<SuiteConfig> {
    let suite = SuiteConfig::from_file(path)?;
    suite.validate()?;
    tracing::info!("✅ Suite loaded and validated successfully");
    Ok(suite)
}

fn run<S: CaseSource>(source: S) -> SuiteReport {
    SuiteRunner::new(source).run()
}

fn print_report(report: &SuiteReport) {
    println!("📋 Suite: {}", report.suite);
    for outcome in &report.outcomes {
        if outcome.passed {
            println!("  ✅ {} -> {}", outcome.label, outcome.actual);
        } else {
            println!(
                "  ❌ {}: expected {}, got {}",
                outcome.label, outcome.expected, outcome.actual
            );
        }
    }
    println!();
    println!(
        "{} passed, {} failed, {} total",
        report.passed(),
        report.failed(),
        report.total()
    );
}

fn exit_with(e: &KataError) -> ! {
    tracing::error!(
        "❌ Failed to load suite: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    std::process::exit(e.exit_code());
}
