// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.

use tempfile::TempDir;
use unisched_domain::{AssignmentFilter, Day};

use crate::tests::{seeded_persistence, test_catalog};
use crate::{Persistence, PersistenceError};

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_is_enabled() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_migrations_seed_days_in_week_order() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let days: Vec<Day> = persistence.list_days().unwrap();

    assert_eq!(days.len(), 7);
    assert_eq!(days[0].name, "Monday");
    assert_eq!(days[0].abbreviation, "MON");
    assert_eq!(days[6].name, "Sunday");
    assert!(days.windows(2).all(|w| w[0].sort_order < w[1].sort_order));
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: Persistence = seeded_persistence();
    let mut db2: Persistence = Persistence::new_in_memory().unwrap();

    assert_eq!(db1.list_rooms().unwrap().len(), 3);
    assert!(db2.list_rooms().unwrap().is_empty());
    assert!(
        db2.list_assignment_views(&AssignmentFilter::default())
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_file_database_survives_reopen() {
    let dir: TempDir = TempDir::new().unwrap();
    let path = dir.path().join("schedule.db");

    {
        let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
        persistence.load_catalog(&test_catalog()).unwrap();
    }

    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    assert_eq!(reopened.list_teachers().unwrap().len(), 3);
    assert!(reopened.verify_foreign_key_enforcement().is_ok());
}
