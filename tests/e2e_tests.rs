//! End-to-end integration tests
//!
//! These tests validate the complete command processing pipeline using
//! predefined CSV test fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Applies all commands to a fresh bank
//! 3. Generates the accounts report
//! 4. Compares actual output with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path scenarios
//! - Overdraft and interest rules
//! - Transfers within and across customers
//! - Rejected operations (insufficient funds, unknown customers and accounts)
//! - Edge cases (deletions, duplicate ids, malformed rows)

#[cfg(test)]
mod tests {
    use banking_ledger::cli::ReportFormat;
    use banking_ledger::{run, LedgerError};
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Run a test fixture by processing input.csv and comparing with expected.csv
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Input or expected files cannot be read
    /// - Output doesn't match expected
    fn run_test_fixture(fixture_name: &str) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        run(
            Some(Path::new(&input_path)),
            ReportFormat::Accounts,
            None,
            &mut temp_output,
        )
        .unwrap_or_else(|e| panic!("Failed to process commands: {}", e));

        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));

        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    /// End-to-end test for all fixtures
    #[rstest]
    #[case("happy_path")]
    #[case("overdraft")]
    #[case("interest")]
    #[case("transfers")]
    #[case("failed_operations")]
    #[case("deletions")]
    #[case("duplicate_ids")]
    #[case("malformed_rows")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }

    #[rstest]
    #[case("happy_path", 7, 0, 0)]
    #[case("failed_operations", 5, 7, 0)]
    #[case("malformed_rows", 4, 0, 6)]
    fn test_fixture_summaries(
        #[case] fixture: &str,
        #[case] applied: usize,
        #[case] rejected: usize,
        #[case] malformed: usize,
    ) {
        let input_path = format!("tests/fixtures/{}/input.csv", fixture);
        let mut output = Vec::new();

        let summary = run(
            Some(Path::new(&input_path)),
            ReportFormat::Accounts,
            None,
            &mut output,
        )
        .unwrap_or_else(|e| panic!("Failed to process commands: {}", e));

        assert_eq!(summary.applied, applied, "applied count for {}", fixture);
        assert_eq!(summary.rejected, rejected, "rejected count for {}", fixture);
        assert_eq!(summary.malformed, malformed, "malformed count for {}", fixture);
    }

    #[test]
    fn test_history_report_lists_every_transaction() {
        let mut output = Vec::new();

        run(
            Some(Path::new("tests/fixtures/transfers/input.csv")),
            ReportFormat::History,
            None,
            &mut output,
        )
        .unwrap();

        let text = String::from_utf8(output).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("customer,account,timestamp,description,amount")
        );

        let rows: Vec<Vec<&str>> = lines.map(|line| line.split(',').collect()).collect();
        assert_eq!(rows.len(), 7);

        let summary: Vec<(&str, &str, &str, &str)> = rows
            .iter()
            .map(|row| (row[0], row[1], row[3], row[4]))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("1", "10", "Deposit", "300.0000"),
                ("1", "10", "Withdrawal", "-100.0000"),
                ("1", "10", "Deposit", "50.0000"),
                ("1", "10", "Withdrawal", "-10.0000"),
                ("1", "10", "Deposit", "10.0000"),
                ("1", "11", "Withdrawal (Overdraft)", "-50.0000"),
                ("2", "20", "Deposit", "100.0000"),
            ]
        );
    }

    #[rstest]
    #[case::accounts(
        ReportFormat::Accounts,
        "customer,name,account,kind,balance,transactions\n\
         2,Ravi,20,savings,100.0000,1\n"
    )]
    #[case::history(
        ReportFormat::History,
        "customer,account,timestamp,description,amount\n2,20,"
    )]
    fn test_report_for_one_customer(
        #[case] report: ReportFormat,
        #[case] expected_start: &str,
    ) {
        let mut output = Vec::new();

        run(
            Some(Path::new("tests/fixtures/transfers/input.csv")),
            report,
            Some(2),
            &mut output,
        )
        .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(
            text.starts_with(expected_start),
            "unexpected report:\n{}",
            text
        );
        assert!(text.lines().skip(1).all(|line| line.starts_with("2,")));
    }

    #[test]
    fn test_report_for_unknown_customer_fails() {
        let mut output = Vec::new();

        let result = run(
            Some(Path::new("tests/fixtures/transfers/input.csv")),
            ReportFormat::Accounts,
            Some(3),
            &mut output,
        );

        assert_eq!(result, Err(LedgerError::customer_not_found(3)));
    }

    #[test]
    fn test_missing_input_file_is_fatal() {
        let mut output = Vec::new();

        let result = run(
            Some(Path::new("tests/fixtures/does_not_exist/input.csv")),
            ReportFormat::Accounts,
            None,
            &mut output,
        );

        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
    }
}
