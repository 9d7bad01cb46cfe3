// End-to-end comparison of candump logs written to disk
use candump_compare::{Comparator, CompareConfig, CompareError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const EPS: f64 = 1e-9;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_log(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn one_group_of_each_outcome() {
    init_logging();
    let log = write_log(
        "(0.050) vcan0 1#1111\n\
         (0.100) vcan0 2#DEADBEEF\n\
         (0.120) vcan0 3#00AA\n\
         (0.130) vcan1 3#00AB\n\
         (0.150) vcan1 2#DEADBEEF\n\
         (0.160) vcan0 4#44\n\
         (0.170) vcan1 4#44\n\
         (0.180) vcan1 4#44\n",
    );

    let stats = Comparator::new(CompareConfig::new())
        .compare_file(log.path())
        .unwrap();

    assert_eq!(stats.loss, 1);
    assert_eq!(stats.duplicate, 1);
    assert_eq!(stats.corrupt, 1);
    assert_eq!(stats.correct, 1);
    assert!((stats.delay_total - 0.050).abs() < EPS);
    assert!((stats.delay_min.unwrap() - 0.050).abs() < EPS);
    assert!((stats.delay_max.unwrap() - 0.050).abs() < EPS);
    assert!((stats.average_delay() - 0.050).abs() < EPS);
    assert_eq!(stats.arrivals, 8);
}

#[test]
fn extended_frames_compare_by_payload() {
    init_logging();
    let log = write_log(
        "(1610000000.123456) vcan0 7B##0ADEADBEEF\n\
         (1610000000.234567) vcan1 7B##0ADEADBEEF\n",
    );

    let stats = Comparator::default().compare_file(log.path()).unwrap();
    assert_eq!(stats.correct, 1);
    assert!((stats.average_delay() - 0.111111).abs() < 1e-5);
    assert_eq!(stats.capture_start().unwrap().timestamp(), 1610000000);
}

#[test]
fn no_correct_pairs_gives_undefined_average() {
    init_logging();
    let log = write_log("(1.0) vcan0 1#AA\n(1.1) vcan1 2#BB\n");

    let stats = Comparator::default().compare_file(log.path()).unwrap();
    assert_eq!(stats.loss, 2);
    assert_eq!(stats.correct, 0);
    assert!(stats.average_delay().is_nan());
    assert_eq!(stats.delay_min, None);
}

#[test]
fn malformed_line_fails_the_run() {
    init_logging();
    let log = write_log("(1.0) vcan0 1#AA\n(1.1) vcan1 1#AA\n(oops) vcan1 2#BB\n");

    let err = Comparator::default().compare_file(log.path()).unwrap_err();
    assert_eq!(err.line(), Some(3));
    assert!(matches!(err.root(), CompareError::MalformedTimestamp(_)));
}

#[test]
fn missing_file_is_file_access_error() {
    let err = Comparator::default()
        .compare_file(Path::new("/nonexistent/candump.log"))
        .unwrap_err();
    match err {
        CompareError::FileAccess { path, .. } => {
            assert_eq!(path, Path::new("/nonexistent/candump.log"))
        }
        other => panic!("unexpected error: {}", other),
    }
}
