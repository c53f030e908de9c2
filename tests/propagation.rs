//! End-to-end propagation through a chain of guarded calls.

use fwutils::{check_ok, FwError, FwResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex, PoisonError,
};

static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());
static STEP3_RAN: AtomicBool = AtomicBool::new(false);

struct TestLogger;

impl Log for TestLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Error
    }

    fn flush(&self) {}

    fn log(&self, record: &Record) {
        if record.level() == Level::Error {
            RECORDS
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(record.args().to_string());
        }
    }
}

fn step1() -> i32 {
    0
}

fn step2() -> i32 {
    -5
}

fn step3() -> i32 {
    STEP3_RAN.store(true, Ordering::SeqCst);
    0
}

fn run_sequence() -> FwResult<()> {
    check_ok!(step1());
    check_ok!(step2());
    check_ok!(step3());
    Ok(())
}

#[test]
fn first_failure_aborts_and_surfaces_its_code() {
    log::set_logger(&TestLogger).expect("Failed to install test logger");
    log::set_max_level(LevelFilter::Error);

    let result = run_sequence();

    assert_eq!(result, Err(FwError::Code(-5)));
    assert_eq!(result.unwrap_err().code(), -5);
    assert!(!STEP3_RAN.load(Ordering::SeqCst));

    let records = RECORDS.lock().unwrap_or_else(PoisonError::into_inner);
    assert_eq!(records.len(), 1);
    assert!(records[0].contains(file!()));
    assert!(records[0].ends_with(":-5"));
}
