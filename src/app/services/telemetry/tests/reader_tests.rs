//! Tests for the whole-file readers: encoding fallback, abort-on-error,
//! snapshot truncation, and log remapping

use super::{temp_file_with, temp_file_with_bytes};
use crate::Error;
use crate::app::models::FieldValue;
use crate::app::services::telemetry::reader::{
    LOG_TO_ECOTAXA, read_dat, read_log, read_tmd,
};
use chrono::NaiveDate;

#[test]
fn test_reads_utf8_telemetry_stream() {
    let file = temp_file_with("1;DeviceA\n10;23,5\n231;17\n");
    let record = read_tmd(file.path()).unwrap();

    assert_eq!(record.len(), 3);
    assert_eq!(
        record.get("DEVICE"),
        Some(&FieldValue::Text("DeviceA".to_string()))
    );
    assert_eq!(record.get("PRESS"), Some(&FieldValue::Float(23.5)));
    assert_eq!(record.get("LOKI_PIC"), Some(&FieldValue::Integer(17)));
}

#[test]
fn test_duplicate_codes_keep_the_last_value() {
    // TMD files are concatenations of per-line pairs; a repeated code
    // overwrites silently rather than erroring.
    let file = temp_file_with("10;1,0\n10;2,0\n");
    let record = read_tmd(file.path()).unwrap();

    assert_eq!(record.len(), 1);
    assert_eq!(record.get("PRESS"), Some(&FieldValue::Float(2.0)));
}

#[test]
fn test_falls_back_to_windows_1252() {
    // "Ger\xe4t" is "Gerät" in Windows-1252 and invalid UTF-8.
    let file = temp_file_with_bytes(b"1;Ger\xe4t\n");
    let record = read_tmd(file.path()).unwrap();

    assert_eq!(
        record.get("DEVICE"),
        Some(&FieldValue::Text("Ger\u{e4}t".to_string()))
    );
}

#[test]
fn test_undecodable_file_is_terminal() {
    // 0x81 is invalid UTF-8 here and unassigned in Windows-1252.
    let file = temp_file_with_bytes(b"1;\xff\x81\x81\xfe\n");
    assert!(matches!(
        read_tmd(file.path()).unwrap_err(),
        Error::Decode { .. }
    ));
}

#[test]
fn test_unknown_code_aborts_whole_read() {
    let file = temp_file_with("1;DeviceA\n99;X\n");
    assert!(matches!(
        read_tmd(file.path()).unwrap_err(),
        Error::UnknownFieldCode { code: 99, .. }
    ));
}

#[test]
fn test_strict_field_failure_aborts_whole_read() {
    // No partial record: the bad picture number sinks the valid lines too.
    let file = temp_file_with("1;DeviceA\n231;seventeen\n");
    assert!(matches!(
        read_tmd(file.path()).unwrap_err(),
        Error::FieldConversion { field: "LOKI_PIC", .. }
    ));
}

#[test]
fn test_empty_file_yields_empty_record() {
    let file = temp_file_with("");
    assert!(read_tmd(file.path()).unwrap().is_empty());
}

#[test]
fn test_snapshot_reads_registered_columns() {
    let file = temp_file_with("3.04\t1450.5\t1027.1\t-1.2\t28.3\t34.1\n");
    let record = read_dat(file.path()).unwrap();

    assert_eq!(
        record.get("FW_REV"),
        Some(&FieldValue::Text("3.04".to_string()))
    );
    assert_eq!(record.get("COND_SSPEED"), Some(&FieldValue::Float(1450.5)));
    assert_eq!(record.get("COND_SALY"), Some(&FieldValue::Float(34.1)));
}

#[test]
fn test_snapshot_uses_only_the_first_line() {
    let first = "3.04\t1450.5";
    let with_garbage = format!("{first}\nsecond line\tof\tnoise\n");

    let file_a = temp_file_with(first);
    let file_b = temp_file_with(&with_garbage);

    assert_eq!(
        read_dat(file_a.path()).unwrap(),
        read_dat(file_b.path()).unwrap()
    );
}

#[test]
fn test_snapshot_strict_field_failure_aborts() {
    // Valid numbers everywhere except the pressure column.
    let mut columns = vec!["1.0"; 20];
    columns[19] = "not-a-pressure";
    let file = temp_file_with(&columns.join("\t"));

    assert!(matches!(
        read_dat(file.path()).unwrap_err(),
        Error::FieldConversion { field: "PRESS", .. }
    ));
}

fn sample_log() -> String {
    [
        "1;05.07.2019",
        "2;10:41:17",
        "3;0",
        "4;LOKI_1034",
        "5;1034",
        "8;PS122",
        "9;PS122/2",
        "10;2-17",
        "11;7",
        "12;A. Researcher",
        "13;Polarstern",
        "17;2",
        "18;14,27",
        "19;78,50",
    ]
    .join("\n")
}

#[test]
fn test_reads_log_without_remap() {
    let file = temp_file_with(&sample_log());
    let record = read_log(file.path(), None).unwrap();

    assert_eq!(
        record.get("DATE"),
        Some(&FieldValue::Date(
            NaiveDate::from_ymd_opt(2019, 7, 5).unwrap()
        ))
    );
    assert_eq!(
        record.get("STATION"),
        Some(&FieldValue::Text("PS122/2".to_string()))
    );
    assert_eq!(record.get("FIX_LAT"), Some(&FieldValue::Float(78.50)));
}

#[test]
fn test_log_remap_projects_to_external_names() {
    let file = temp_file_with(&sample_log());
    let record = read_log(file.path(), Some(LOG_TO_ECOTAXA)).unwrap();

    assert_eq!(record.len(), LOG_TO_ECOTAXA.len());
    assert_eq!(
        record.get("sample_station"),
        Some(&FieldValue::Text("PS122/2".to_string()))
    );
    assert_eq!(
        record.get("sample_haul"),
        Some(&FieldValue::Text("7".to_string()))
    );
    assert_eq!(
        record.get("sample_latitude"),
        Some(&FieldValue::Float(78.50))
    );
    // Internal names are gone after projection.
    assert!(record.get("STATION").is_none());
}

#[test]
fn test_log_remap_missing_internal_key_fails() {
    // A log without station/haul lines cannot satisfy the projection.
    let file = temp_file_with("4;LOKI_1034\n");
    match read_log(file.path(), Some(LOG_TO_ECOTAXA)).unwrap_err() {
        Error::RemapKey { external, internal } => {
            assert_eq!(external, "sample_date");
            assert_eq!(internal, "DATE");
        }
        other => panic!("expected RemapKey error, got {other:?}"),
    }
}
