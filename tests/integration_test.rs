//! Integration tests for asmbench.

#![allow(clippy::expect_used)]

use asmbench::core::{Operation, samples};
use asmbench::harness::{DEFAULT_ITERATIONS, run_benchmark, run_demo, run_suite};
use asmbench::routines::{NativeRoutines, Routines};

#[test]
fn test_native_demo_values() {
    let native = NativeRoutines;
    assert_eq!(native.factorial(samples::FACTORIAL_INPUT), 720);
    assert_eq!(native.strlen(samples::TEXT), 22);
    assert_eq!(native.sum_array(&samples::NUMBERS), 55);
}

#[test]
fn test_default_iterations() {
    assert_eq!(DEFAULT_ITERATIONS, 10_000_000);
}

#[test]
fn test_benchmark_latency_is_non_negative() {
    let result =
        run_benchmark(&NativeRoutines, Operation::Multiply, 10_000).expect("benchmark failed");
    assert_eq!(result.iterations, 10_000);
    assert!(result.ns_per_op >= 0.0);
    assert!(result.ns_per_op.is_finite());
}

/// Tests that need the hand-written routines compiled in.
#[cfg(any(target_arch = "aarch64", target_arch = "x86_64"))]
mod assembly_tests {
    use super::*;
    use asmbench::routines::AsmRoutines;

    fn asm() -> AsmRoutines {
        AsmRoutines::detect().expect("assembly backend should exist on this host")
    }

    #[test]
    fn test_demo_all_match() {
        let report = run_demo(&NativeRoutines, &asm());
        assert!(report.all_match());
        for c in &report.comparisons {
            assert_eq!(c.native, c.foreign, "{} disagreed", c.operation);
        }
    }

    #[test]
    fn test_factorial_of_six() {
        assert_eq!(asm().factorial(6), 720);
        assert_eq!(NativeRoutines.factorial(6), 720);
    }

    #[test]
    fn test_strlen_of_sample() {
        assert_eq!(asm().strlen(c"Hello, ARM64 Assembly!"), 22);
        assert_eq!(NativeRoutines.strlen(c"Hello, ARM64 Assembly!"), 22);
    }

    #[test]
    fn test_sum_one_through_ten() {
        let numbers: Vec<i64> = (1..=10).collect();
        assert_eq!(asm().sum_array(&numbers), 55);
        assert_eq!(NativeRoutines.sum_array(&numbers), 55);
    }

    #[test]
    fn test_sum_of_subslice() {
        let numbers: Vec<i64> = (1..=10).collect();
        assert_eq!(asm().sum_array(&numbers[2..5]), 3 + 4 + 5);
        assert_eq!(asm().sum_array(&numbers[10..]), 0);
    }

    #[test]
    fn test_suite_reports_both_backends() {
        let results = run_suite(&NativeRoutines, &asm(), &Operation::BENCHMARKED, 1_000)
            .expect("suite failed");
        let backends: Vec<&str> = results.iter().map(|r| r.backend).collect();
        assert_eq!(backends, vec!["Rust", "ASM", "Rust", "ASM"]);
        for r in &results {
            assert_eq!(r.iterations, 1_000);
            assert!(r.ns_per_op >= 0.0);
        }
    }
}

#[cfg(any(target_arch = "aarch64", target_arch = "x86_64"))]
mod property_tests {
    use asmbench::harness::bench_inputs;
    use asmbench::core::Operation;
    use asmbench::routines::{AsmRoutines, NativeRoutines, Routines};
    use proptest::prelude::*;
    use std::ffi::CString;

    fn asm() -> AsmRoutines {
        AsmRoutines::detect().expect("assembly backend")
    }

    proptest! {
        #[test]
        fn add_matches_native(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(asm().add(a, b), NativeRoutines.add(a, b));
        }

        #[test]
        fn multiply_matches_native(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(asm().multiply(a, b), NativeRoutines.multiply(a, b));
        }

        #[test]
        fn factorial_matches_native(n in -10i64..64) {
            prop_assert_eq!(asm().factorial(n), NativeRoutines.factorial(n));
        }

        #[test]
        fn strlen_matches_native(text in "[^\\x00]{0,200}") {
            let c_string = CString::new(text.clone()).expect("no interior NUL");
            prop_assert_eq!(asm().strlen(&c_string), NativeRoutines.strlen(&c_string));
            prop_assert_eq!(NativeRoutines.strlen(&c_string), i64::try_from(text.len()).expect("fits"));
        }

        #[test]
        fn sum_array_matches_native(values in proptest::collection::vec(any::<i64>(), 0..256)) {
            prop_assert_eq!(asm().sum_array(&values), NativeRoutines.sum_array(&values));
        }

        #[test]
        fn bench_inputs_match_between_backends(i in 0i64..20_000_000) {
            for op in Operation::BENCHMARKED {
                let (a, b) = bench_inputs(op, i).expect("benchmarkable");
                if op == Operation::Add {
                    prop_assert_eq!(asm().add(a, b), NativeRoutines.add(a, b));
                } else {
                    prop_assert_eq!(asm().multiply(a, b), NativeRoutines.multiply(a, b));
                }
            }
        }
    }
}

/// CLI command integration tests.
mod cli_tests {
    use asmbench::cli::commands::execute;
    use asmbench::cli::parser::{Cli, Commands};

    /// Helper to create a CLI struct with a small iteration count.
    fn make_cli(command: Commands, format: &str) -> Cli {
        Cli {
            verbose: false,
            format: format.to_string(),
            iterations: 1_000,
            command: Some(command),
        }
    }

    #[test]
    fn test_cmd_info() {
        let output = execute(&make_cli(Commands::Info, "text")).expect("info failed");
        assert!(output.contains("Iterations:    1000"));
        assert!(output.contains("Benchmarkable: add, multiply"));
    }

    #[test]
    fn test_cmd_info_json() {
        let output = execute(&make_cli(Commands::Info, "json")).expect("info failed");
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(value["iterations"], 1000);
        assert_eq!(value["operations"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn test_cmd_bench_rejects_unbenchmarkable() {
        let cli = make_cli(
            Commands::Bench {
                ops: vec!["factorial".to_string()],
            },
            "text",
        );
        let result = execute(&cli);
        assert!(result.is_err());
    }

    #[test]
    fn test_cmd_bench_rejects_unknown_operation() {
        let cli = make_cli(
            Commands::Bench {
                ops: vec!["divide".to_string()],
            },
            "text",
        );
        let err = execute(&cli).expect_err("unknown op should fail");
        assert!(err.to_string().contains("unknown operation"));
    }

    #[cfg(any(target_arch = "aarch64", target_arch = "x86_64"))]
    #[test]
    fn test_cmd_run() {
        let output = execute(&make_cli(Commands::Run, "text")).expect("run failed");
        assert!(output.contains("Assembly Module Demo"));
        assert!(output.contains("Factorial: 6! = 720"));
        assert!(output.contains("String length of 'Hello, ARM64 Assembly!': 22"));
        assert!(output.contains("Sum of array [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]: 55"));
        assert!(output.contains("Rust Addition: 1000 iterations in"));
        assert!(output.contains("ASM Multiplication: 1000 iterations in"));
        assert!(output.contains("All assembly functions working correctly!"));
    }

    #[cfg(any(target_arch = "aarch64", target_arch = "x86_64"))]
    #[test]
    fn test_cmd_run_json() {
        let output = execute(&make_cli(Commands::Run, "json")).expect("run failed");
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(value["all_match"], true);
        assert_eq!(value["demo"]["comparisons"][2]["operation"], "factorial");
        assert_eq!(value["demo"]["comparisons"][2]["foreign"], 720);
        assert_eq!(value["benchmarks"].as_array().map(Vec::len), Some(4));
    }

    #[cfg(any(target_arch = "aarch64", target_arch = "x86_64"))]
    #[test]
    fn test_cmd_bench_single_operation() {
        let cli = make_cli(
            Commands::Bench {
                ops: vec!["add".to_string()],
            },
            "text",
        );
        let output = execute(&cli).expect("bench failed");
        assert!(output.contains("Rust Addition: 1000 iterations"));
        assert!(output.contains("ASM Addition: 1000 iterations"));
        assert!(!output.contains("Multiplication"));
    }

    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
    #[test]
    fn test_cmd_demo_without_backend() {
        let err = execute(&make_cli(Commands::Demo, "text")).expect_err("no backend");
        assert!(err.to_string().contains("no assembly backend"));
    }
}

/// Tests that drive the compiled binary.
#[cfg(any(target_arch = "aarch64", target_arch = "x86_64"))]
mod binary_tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn asmbench() -> Command {
        let mut cmd = Command::cargo_bin("asmbench").expect("binary should build");
        cmd.env_remove("ASMBENCH_ITERATIONS").env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn test_no_arguments_exits_zero() {
        asmbench()
            .assert()
            .success()
            .stdout(predicate::str::contains("Comparison with Rust implementations:"))
            .stdout(predicate::str::contains(
                "Rust Addition: 10000000 iterations in",
            ))
            .stdout(predicate::str::contains(
                "ASM Multiplication: 10000000 iterations in",
            ))
            .stdout(predicate::str::contains(
                "✅ All assembly functions working correctly!",
            ));
    }

    #[test]
    fn test_iterations_from_env() {
        asmbench()
            .env("ASMBENCH_ITERATIONS", "250")
            .arg("bench")
            .assert()
            .success()
            .stdout(predicate::str::contains("ASM Addition: 250 iterations in"));
    }

    #[test]
    fn test_invalid_operation_fails() {
        asmbench()
            .args(["bench", "--op", "divide"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error: invalid argument"));
    }

    #[test]
    fn test_json_error_goes_to_stdout() {
        asmbench()
            .args(["--format", "json", "bench", "--op", "strlen"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("\"error\""));
    }

    #[test]
    fn test_demo_json() {
        asmbench()
            .args(["demo", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"foreign_backend\": \"ASM\""));
    }
}
