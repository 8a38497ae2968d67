// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::Parser;

use crate::args::{AssignmentCommand, Cli, Command, RoleArg};
use crate::commands::{create_request, update_request};

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["unisched", "catalog", "show"]).unwrap();

    assert!(cli.database.is_none());
    assert_eq!(cli.actor, "admin");
    assert_eq!(cli.role, RoleArg::Admin);
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = Cli::try_parse_from([
        "unisched",
        "assignments",
        "list",
        "--teacher",
        "3",
        "--role",
        "teacher",
        "--actor",
        "t-3",
    ])
    .unwrap();

    assert_eq!(cli.role, RoleArg::Teacher);
    assert_eq!(cli.actor, "t-3");
    match cli.command {
        Command::Assignments(AssignmentCommand::List(args)) => {
            assert_eq!(args.teacher, Some(3));
            assert_eq!(args.period, None);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_create_collects_repeated_slots() {
    let cli = Cli::try_parse_from([
        "unisched",
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
        "3:1",
    ])
    .unwrap();

    let Command::Assignments(AssignmentCommand::Create(args)) = cli.command else {
        panic!("expected create");
    };
    let request = create_request(&args);
    assert_eq!(request.subject_code, "INF-110");
    assert_eq!(request.slots.len(), 2);
    assert_eq!(request.slots[0].room_id, Some(1));
    assert_eq!(request.slots[1].room_id, None);
    assert_eq!(args.reason.reason, "Command-line request");
}

#[test]
fn test_create_requires_a_slot() {
    let result = Cli::try_parse_from([
        "unisched",
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
    ]);

    assert!(result.is_err());
}

#[test]
fn test_malformed_slot_is_a_parse_error() {
    let result = Cli::try_parse_from([
        "unisched",
        "assignments",
        "update",
        "4",
        "--slot",
        "monday",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_update_without_slots_keeps_them() {
    let cli =
        Cli::try_parse_from(["unisched", "assignments", "update", "4", "--group", "2"]).unwrap();

    let Command::Assignments(AssignmentCommand::Update(args)) = cli.command else {
        panic!("expected update");
    };
    let request = update_request(&args);
    assert_eq!(request.group_id, Some(2));
    assert!(request.slots.is_none());
}

#[test]
fn test_update_career_requires_subject() {
    let result = Cli::try_parse_from([
        "unisched",
        "assignments",
        "update",
        "4",
        "--career",
        "2",
    ]);

    assert!(result.is_err());
}
