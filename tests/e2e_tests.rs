//! End-to-end integration tests
//!
//! These tests validate the complete read, sort and write pipeline using
//! predefined CSV test fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Sorts the records with the selected policy
//! 3. Writes the output CSV to a temporary directory
//! 4. Compares actual output with the policy's expected file
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Mixed-case names with the documented example
//! - Header-only input
//! - Already sorted input
//! - Stable ordering of tied records
//! - Quoted names with embedded commas and quotes
//! - Negative and explicitly signed numbers
//!
//! Each fixture is run once per ordering policy.

#[cfg(test)]
mod tests {
    use record_sorter::core::SortPolicy;
    use record_sorter::pipeline::SortPipeline;
    use rstest::rstest;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn expected_file(policy: SortPolicy) -> &'static str {
        match policy {
            SortPolicy::Name => "expected_name.csv",
            SortPolicy::NameAge => "expected_name_age.csv",
        }
    }

    /// Run a test fixture by sorting input.csv and comparing with the expected file
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Input or expected files cannot be read
    /// - Output doesn't match expected
    fn run_test_fixture(fixture_name: &str, policy: SortPolicy) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/{}", fixture_dir, expected_file(policy));

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

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_path = temp_dir.path().join("output.csv");

        SortPipeline::new(policy)
            .run(Path::new(&input_path), &output_path)
            .unwrap_or_else(|e| panic!("Failed to sort records: {}", e));

        let actual_output = fs::read_to_string(&output_path)
            .unwrap_or_else(|e| panic!("Failed to read output file: {}", e));

        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (policy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, policy, actual_output, expected_output
        );
    }

    /// End-to-end test for all fixtures with both ordering policies
    #[rstest]
    #[case("mixed_case")]
    #[case("header_only")]
    #[case("already_sorted")]
    #[case("stable_ties")]
    #[case("quoted_names")]
    #[case("negative_numbers")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[values(SortPolicy::Name, SortPolicy::NameAge)] policy: SortPolicy,
    ) {
        run_test_fixture(fixture, policy);
    }

    /// Sorting the sorted output again must not change it
    #[rstest]
    #[case("mixed_case")]
    #[case("stable_ties")]
    #[case("quoted_names")]
    fn test_sorting_output_is_idempotent(
        #[case] fixture: &str,
        #[values(SortPolicy::Name, SortPolicy::NameAge)] policy: SortPolicy,
    ) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let first = temp_dir.path().join("first.csv");
        let second = temp_dir.path().join("second.csv");
        let input = format!("tests/fixtures/{}/input.csv", fixture);

        let pipeline = SortPipeline::new(policy);
        pipeline.run(Path::new(&input), &first).unwrap();
        pipeline.run(&first, &second).unwrap();

        assert_eq!(
            fs::read_to_string(&first).unwrap(),
            fs::read_to_string(&second).unwrap()
        );
    }
}
