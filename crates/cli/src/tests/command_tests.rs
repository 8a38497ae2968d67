// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::Parser;
use serde_json::Value;
use unisched_api::ApiError;
use unisched_persistence::Persistence;

use super::{SAMPLE_CATALOG, write_catalog};
use crate::args::Cli;
use crate::commands::execute;
use crate::error::CliError;

fn run(persistence: &mut Persistence, args: &[&str]) -> Result<Value, CliError> {
    let cli = Cli::try_parse_from(std::iter::once("unisched").chain(args.iter().copied()))
        .unwrap();
    execute(persistence, &cli)
}

fn loaded_persistence() -> Persistence {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let file = write_catalog(SAMPLE_CATALOG);
    let path = file.path().to_str().unwrap().to_string();
    let summary = run(&mut persistence, &["catalog", "load", &path]).unwrap();
    assert_eq!(summary["subjects"], 2);
    assert_eq!(summary["rooms"], 1);
    persistence
}

const CREATE: [&str; 16] = [
    "assignments",
    "create",
    "--teacher",
    "1",
    "--career",
    "1",
    "--subject",
    "INF-110",
    "--group",
    "1",
    "--period",
    "1",
    "--slot",
    "1:1:1",
    "--slot",
    "3:2:1",
];

#[test]
fn test_catalog_show_lists_seeded_days() {
    let mut persistence = loaded_persistence();

    let listing = run(&mut persistence, &["catalog", "show"]).unwrap();

    assert_eq!(listing["days"].as_array().unwrap().len(), 7);
    assert_eq!(listing["days"][0]["name"], "Monday");
    assert_eq!(listing["rooms"][0]["code"], "A-101");
    assert_eq!(listing["teachers"].as_array().unwrap().len(), 2);
}

#[test]
fn test_create_show_and_history() {
    let mut persistence = loaded_persistence();

    let created = run(&mut persistence, &CREATE).unwrap();
    let id = created["assignment_id"].as_i64().unwrap().to_string();

    let view = run(&mut persistence, &["assignments", "show", &id]).unwrap();
    assert_eq!(view["teacher_name"], "Ana Rojas");
    assert_eq!(view["schedule"].as_array().unwrap().len(), 2);

    let history = run(
        &mut persistence,
        &["assignments", "history", &id, "--actor", "reader", "--role", "teacher"],
    )
    .unwrap();
    assert_eq!(history["events"][0]["action"], "CreateAssignment");
    assert_eq!(history["events"][0]["actor_id"], "admin");
}

#[test]
fn test_second_create_for_same_room_is_refused() {
    let mut persistence = loaded_persistence();
    run(&mut persistence, &CREATE).unwrap();

    let err = run(
        &mut persistence,
        &[
            "assignments",
            "create",
            "--teacher",
            "2",
            "--career",
            "1",
            "--subject",
            "INF-120",
            "--group",
            "1",
            "--period",
            "1",
            "--slot",
            "1:1:1",
        ],
    )
    .unwrap_err();

    match err {
        CliError::Api(ApiError::DomainRuleViolation { rule, .. }) => {
            assert_eq!(rule, "room_availability");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_teacher_role_cannot_delete() {
    let mut persistence = loaded_persistence();
    let created = run(&mut persistence, &CREATE).unwrap();
    let id = created["assignment_id"].as_i64().unwrap().to_string();

    let err = run(
        &mut persistence,
        &["assignments", "delete", &id, "--role", "teacher"],
    )
    .unwrap_err();

    assert!(matches!(err, CliError::Api(ApiError::Unauthorized { .. })));
    assert!(err.to_string().contains("status 403"));
}

#[test]
fn test_update_then_list_by_group() {
    let mut persistence = loaded_persistence();
    let created = run(&mut persistence, &CREATE).unwrap();
    let id = created["assignment_id"].as_i64().unwrap().to_string();

    run(
        &mut persistence,
        &["assignments", "update", &id, "--slot", "2:2", "--reason", "Room closed"],
    )
    .unwrap();

    let listed = run(&mut persistence, &["assignments", "list", "--group", "1"]).unwrap();
    let assignments = listed["assignments"].as_array().unwrap();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0]["schedule"][0]["day_name"], "Tuesday");
    assert!(assignments[0]["schedule"][0]["slots"][0]["room_id"].is_null());

    let history = run(&mut persistence, &["assignments", "history", &id]).unwrap();
    assert_eq!(history["events"][1]["cause_description"], "Room closed");
}

#[test]
fn test_blank_actor_is_rejected() {
    let mut persistence = loaded_persistence();

    let err = run(&mut persistence, &["assignments", "list", "--actor", "  "]).unwrap_err();

    assert!(matches!(
        err,
        CliError::Api(ApiError::AuthenticationFailed { .. })
    ));
}
