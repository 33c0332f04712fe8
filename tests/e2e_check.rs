//! End-to-end version check scenarios through the public driver

mod helper;

use std::time::Duration;

use helper::{StubRecipe, create_test_checker};
use toolchain_check::version::checker::CheckOptions;
use toolchain_check::version::outcome::{ALL_CLEAR_MESSAGE, Outcome, UPGRADE_MESSAGE};

#[tokio::test(flavor = "multi_thread")]
async fn upgrade_available_fails_run_and_names_only_the_upgradable_target() {
    let (checker, reporter) = create_test_checker(
        vec![
            ("A", "1.0", StubRecipe::version("1.0")),
            ("B", "2.0", StubRecipe::version("2.1")),
        ],
        CheckOptions::default(),
    );

    let outcome = checker.run(None).await;

    assert_eq!(outcome, Outcome::UpgradesNeeded);
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(
        reporter.lines(),
        vec![
            "B 2.0 can be upgraded to 2.1.".to_string(),
            UPGRADE_MESSAGE.to_string()
        ]
    );
    assert!(reporter.errors().is_empty());
    assert!(!reporter.all().iter().any(|line| line.starts_with("A ")));
}

#[tokio::test(flavor = "multi_thread")]
async fn everything_current_succeeds_with_single_summary_line() {
    let (checker, reporter) = create_test_checker(
        vec![("A", "1.0", StubRecipe::version("1.0"))],
        CheckOptions::default(),
    );

    let outcome = checker.run(None).await;

    assert_eq!(outcome, Outcome::AllClear);
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(reporter.all(), vec![ALL_CLEAR_MESSAGE.to_string()]);
}

#[tokio::test(flavor = "multi_thread")]
async fn single_target_mode_with_unregistered_name_fails_without_summary() {
    let (checker, reporter) = create_test_checker(
        vec![("A", "1.0", StubRecipe::version("1.0"))],
        CheckOptions::default(),
    );

    let outcome = checker.run(Some("Missing")).await;

    assert_eq!(outcome, Outcome::ErrorsOnly);
    assert_eq!(outcome.exit_code(), 1);
    let errors = reporter.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Missing version could not be found"));
    assert!(reporter.lines().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn transport_failure_without_upgrades_fails_run() {
    let (checker, reporter) = create_test_checker(
        vec![
            ("A", "1.0", StubRecipe::version("1.0")),
            ("B", "2.0", StubRecipe::Unreachable),
        ],
        CheckOptions::default(),
    );

    let outcome = checker.run(None).await;

    assert_eq!(outcome, Outcome::ErrorsOnly);
    assert_eq!(outcome.exit_code(), 1);
    let errors = reporter.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("B website could not be loaded."));
    assert!(errors[0].contains("503 Service Unavailable"));
    assert!(reporter.lines().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn upgrade_takes_priority_over_errors() {
    let (checker, reporter) = create_test_checker(
        vec![
            ("A", "1.0", StubRecipe::Missing),
            ("B", "2.0", StubRecipe::version("2.1")),
        ],
        CheckOptions::default(),
    );

    let outcome = checker.run(None).await;

    assert_eq!(outcome, Outcome::UpgradesNeeded);
    assert!(reporter.lines().contains(&UPGRADE_MESSAGE.to_string()));
    assert!(reporter.errors()[0].starts_with("A version could not be found. Check the website."));
}

#[tokio::test(flavor = "multi_thread")]
async fn hanging_page_does_not_stall_the_batch() {
    let (checker, reporter) = create_test_checker(
        vec![
            ("A", "1.0", StubRecipe::version("1.0")),
            ("B", "2.0", StubRecipe::Hangs),
        ],
        CheckOptions {
            timeout: Duration::from_millis(100),
            timing: false,
        },
    );

    let outcome = tokio::time::timeout(Duration::from_secs(10), checker.run(None))
        .await
        .expect("run should finish once the per-target timeout fires");

    assert_eq!(outcome, Outcome::ErrorsOnly);
    assert!(reporter.errors()[0].contains("Timed out after 100 ms"));
}

#[tokio::test(flavor = "multi_thread")]
async fn outcome_is_independent_of_dispatch_order() {
    let entries = || {
        vec![
            ("A", "1.0", StubRecipe::version("1.0")),
            ("B", "2.0", StubRecipe::Missing),
            ("C", "3.0", StubRecipe::version("3.0")),
            ("D", "4.0", StubRecipe::Unreachable),
        ]
    };

    let (forward, _) = create_test_checker(entries(), CheckOptions::default());
    let mut reversed_entries = entries();
    reversed_entries.reverse();
    let (reversed, _) = create_test_checker(reversed_entries, CheckOptions::default());

    assert_eq!(forward.run(None).await, Outcome::ErrorsOnly);
    assert_eq!(reversed.run(None).await, Outcome::ErrorsOnly);
}

#[tokio::test(flavor = "multi_thread")]
async fn debug_timing_adds_one_line_per_target() {
    let (checker, reporter) = create_test_checker(
        vec![
            ("A", "1.0", StubRecipe::version("1.0")),
            ("B", "2.0", StubRecipe::version("2.0")),
        ],
        CheckOptions {
            timing: true,
            ..CheckOptions::default()
        },
    );

    let outcome = checker.run(None).await;

    assert_eq!(outcome, Outcome::AllClear);
    let timing_lines: Vec<_> = reporter
        .lines()
        .into_iter()
        .filter(|line| line.ends_with(" seconds"))
        .collect();
    assert_eq!(timing_lines.len(), 2);
}
