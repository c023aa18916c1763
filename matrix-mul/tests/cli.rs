use std::process::{Command, Output};

const NAIVE: &str = "Naive Multiplication Time: ";
const STRASSEN: &str = "Strassen's Multiplication Time: ";

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("MATMUL_THRESHOLD")
        .env_remove("MATMUL_SEED")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute benchmark binary")
}

/// Extracts every `<label><int> ms` value from stdout.
fn timings(stdout: &str, label: &str) -> Vec<u64> {
    stdout
        .lines()
        .filter_map(|line| line.strip_prefix(label))
        .map(|rest| {
            rest.strip_suffix(" ms")
                .and_then(|ms| ms.parse().ok())
                .unwrap_or_else(|| panic!("malformed timing line: {rest:?}"))
        })
        .collect()
}

fn assert_benchmark(bin: &str, size: &str) -> (u64, u64) {
    let output = run(bin, &[size]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "N={size} failed: {stderr}");

    let naive = timings(&stdout, NAIVE);
    let strassen = timings(&stdout, STRASSEN);
    assert_eq!(naive.len(), 1, "expected one naive line in:\n{stdout}");
    assert_eq!(strassen.len(), 1, "expected one Strassen line in:\n{stdout}");

    let naive_pos = stdout.find(NAIVE).unwrap();
    let strassen_pos = stdout.find(STRASSEN).unwrap();
    assert!(naive_pos < strassen_pos, "naive line must come first");
    assert!(stdout.contains("Both multiplication methods produced the same result."));

    (naive[0], strassen[0])
}

#[test]
fn test_size_128_and_256() {
    let bin = env!("CARGO_BIN_EXE_matrix_mul");
    let (naive_128, strassen_128) = assert_benchmark(bin, "128");
    let (naive_256, strassen_256) = assert_benchmark(bin, "256");

    // Both sizes stay within an order of magnitude of naive, with slack for
    // sub-millisecond runs.
    for (n, naive, strassen) in [(128, naive_128, strassen_128), (256, naive_256, strassen_256)] {
        assert!(
            strassen <= naive * 10 + 50,
            "N={n}: strassen {strassen} ms vs naive {naive} ms"
        );
    }

    // Strassen's share of the naive time does not grow past the threshold.
    // Timings are noisy, so allow the ratio to double plus a constant.
    let ratio = |naive: u64, strassen: u64| (strassen + 1) as f64 / (naive + 1) as f64;
    let ratio_128 = ratio(naive_128, strassen_128);
    let ratio_256 = ratio(naive_256, strassen_256);
    assert!(
        ratio_256 <= ratio_128 * 2.0 + 0.5,
        "strassen/naive ratio grew from {ratio_128:.2} at 128 to {ratio_256:.2} at 256"
    );
}

#[test]
fn test_both_binary_names() {
    let first = run(env!("CARGO_BIN_EXE_matrix_mul"), &["33", "--threshold", "4"]);
    let second = run(
        env!("CARGO_BIN_EXE_matmul_vs_strassen"),
        &["33", "--threshold", "4"],
    );
    assert!(first.status.success());
    assert!(second.status.success());

    let strip_times = |out: &Output| {
        String::from_utf8_lossy(&out.stdout)
            .lines()
            .filter(|line| !line.contains("Multiplication Time: "))
            .map(str::to_owned)
            .collect::<Vec<_>>()
    };
    assert_eq!(strip_times(&first), strip_times(&second));
    assert_eq!(timings(&String::from_utf8_lossy(&second.stdout), NAIVE).len(), 1);
}

#[test]
fn test_odd_size_with_low_threshold() {
    let bin = env!("CARGO_BIN_EXE_matmul_vs_strassen");
    let output = run(bin, &["65", "--threshold", "8"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generating two 65x65 matrices..."));
    assert!(stdout.contains("Both multiplication methods produced the same result."));
}

#[test]
fn test_threshold_from_env() {
    let output = Command::new(env!("CARGO_BIN_EXE_matrix_mul"))
        .arg("17")
        .env("MATMUL_THRESHOLD", "2")
        .output()
        .expect("failed to execute benchmark binary");
    assert!(output.status.success());
}

#[test]
fn test_invalid_sizes_fail() {
    let bin = env!("CARGO_BIN_EXE_matrix_mul");
    let cases: [&[&str]; 5] = [&[], &["abc"], &["0"], &["-5"], &["12x"]];
    for args in cases {
        let output = run(bin, args);
        assert!(!output.status.success(), "args {args:?} should fail");
        assert!(output.stdout.is_empty(), "args {args:?} wrote to stdout");
        assert!(
            !output.stderr.is_empty(),
            "args {args:?} should explain the failure on stderr"
        );
    }
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_oversized_size_fails_cleanly() {
    let output = run(env!("CARGO_BIN_EXE_matrix_mul"), &["3037000499"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("too large"), "unexpected stderr: {stderr}");
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_no_verify_omits_check_line() {
    let output = run(env!("CARGO_BIN_EXE_matrix_mul"), &["8", "--no-verify"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Both multiplication methods"));
    assert_eq!(timings(&stdout, STRASSEN).len(), 1);
}
