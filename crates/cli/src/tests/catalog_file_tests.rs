// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use unisched_domain::DomainError;
use unisched_persistence::CatalogImport;

use super::{SAMPLE_CATALOG, write_catalog};
use crate::catalog_file::CatalogFile;
use crate::error::CliError;

#[test]
fn test_sample_catalog_converts() {
    let file = write_catalog(SAMPLE_CATALOG);

    let import: CatalogImport = CatalogFile::read(file.path())
        .unwrap()
        .into_import()
        .unwrap();

    assert_eq!(import.careers.len(), 1);
    assert_eq!(import.subjects.len(), 2);
    assert_eq!(import.teachers[0].full_name(), "Ana Rojas");
    assert!(import.teachers[0].contract_date.is_some());
    assert!(import.teachers[1].email.is_none());
    assert_eq!(import.periods[0].label(), "2026-1");
    assert_eq!(import.timeslots[1].range_label().unwrap(), "09:45-11:15");
}

#[test]
fn test_missing_sections_default_to_empty() {
    let catalog: CatalogFile =
        serde_json::from_str(r#"{ "rooms": [{ "id": 4, "code": "D-1", "name": "Room D" }] }"#)
            .unwrap();

    let import: CatalogImport = catalog.into_import().unwrap();
    assert_eq!(import.rooms.len(), 1);
    assert!(import.careers.is_empty());
}

#[test]
fn test_invalid_timeslot_range_is_rejected() {
    let catalog: CatalogFile = serde_json::from_str(
        r#"{ "timeslots": [{ "id": 1, "start_time": "10:00", "end_time": "09:00" }] }"#,
    )
    .unwrap();

    assert!(matches!(
        catalog.into_import(),
        Err(DomainError::InvalidTimeslotRange { .. })
    ));
}

#[test]
fn test_non_positive_id_is_rejected() {
    let catalog: CatalogFile =
        serde_json::from_str(r#"{ "groups": [{ "id": 0, "name": "A" }] }"#).unwrap();

    assert!(matches!(
        catalog.into_import(),
        Err(DomainError::InvalidIdentifier { .. })
    ));
}

#[test]
fn test_malformed_json_reports_the_path() {
    let file = write_catalog("{ not json");

    let err = CatalogFile::read(file.path()).unwrap_err();
    assert!(matches!(err, CliError::CatalogFormat { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}
