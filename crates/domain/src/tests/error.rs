// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidIdentifier {
        field: "teacher_id",
        value: 0,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid teacher_id: identifiers must be positive, got 0"
    );

    let err: DomainError = DomainError::InvalidSubjectCode(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid subject code: test");

    let err: DomainError = DomainError::InvalidPeriodYear(1999);
    assert_eq!(
        format!("{err}"),
        "Management period year must be between 2000 and 2100, got 1999"
    );

    let err: DomainError = DomainError::InvalidPeriodTerm(3);
    assert_eq!(format!("{err}"), "Management period term must be 1 or 2, got 3");

    let err: DomainError = DomainError::EmptySlotList;
    assert_eq!(format!("{err}"), "At least one slot is required");
}

#[test]
fn test_domain_error_field_names() {
    assert_eq!(DomainError::EmptySlotList.field(), "slots");
    assert_eq!(
        DomainError::InvalidSubjectCode(String::new()).field(),
        "subject_code"
    );
    assert_eq!(
        DomainError::InvalidIdentifier {
            field: "group_id",
            value: -1
        }
        .field(),
        "group_id"
    );
    assert_eq!(DomainError::InvalidPeriodTerm(0).field(), "term");
}
