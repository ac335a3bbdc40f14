//! Integration tests for infrastructure_integer_scanning crate
//!
//! These tests verify end-to-end scanning behavior: maximal prefix
//! consumption, remainder handoff, and the progress guarantee when the
//! remainder is scanned again.

use entities_numeric::BigNumber;
use infrastructure_integer_scanning::{scan_integer, ScanResult};

#[test]
fn test_scan_reference_vectors() {
    let cases: Vec<(&str, u32, i64, &str)> = vec![
        ("34", 10, 34, ""),
        ("34.5", 10, 34, ".5"),
        ("f4", 16, 244, ""),
        ("Awww++", 36, 509_216, "++"),
        ("-173", 10, -173, ""),
        ("+42tail", 10, 42, "tail"),
        ("10", 2, 2, ""),
    ];

    for (input, base, value, rest) in cases {
        assert_eq!(
            scan_integer(input, base).unwrap(),
            ScanResult::Match {
                value: BigNumber::from_i64(value),
                rest,
            },
            "scan_integer({:?}, {})",
            input,
            base
        );
    }
}

#[test]
fn test_scan_no_match_vectors() {
    for (input, base) in [("three", 10), ("fab", 10), ("", 10), ("+", 16), ("-", 2)] {
        assert_eq!(
            scan_integer(input, base).unwrap(),
            ScanResult::NoMatch,
            "scan_integer({:?}, {})",
            input,
            base
        );
    }
}

#[test]
fn test_rescanning_the_remainder_makes_progress() {
    // Repeatedly scanning the returned remainder either fails or shortens
    // the buffer, so driving the scanner over any input terminates.
    let mut buffer = "12abc345..67x8";
    let mut rounds = 0;
    loop {
        match scan_integer(buffer, 10).unwrap() {
            ScanResult::Match { rest, .. } => {
                assert!(rest.len() < buffer.len(), "no progress on {:?}", buffer);
                buffer = rest;
                rounds += 1;
            }
            ScanResult::NoMatch => break,
        }
        assert!(rounds <= 14, "scanner failed to terminate");
    }
    assert_eq!(buffer, "abc345..67x8");
}

#[test]
fn test_scan_consumes_maximal_prefix() {
    // Every digit of the run is consumed before the scanner stops
    let outcome = scan_integer("99999999999999999999/3", 10).unwrap();
    match outcome {
        ScanResult::Match { value, rest } => {
            assert_eq!(rest, "/3");
            // 20 nines exceeds i64, proving no truncation of the run
            assert!(value.to_i64().is_none());
        }
        ScanResult::NoMatch => panic!("expected a match"),
    }
}
