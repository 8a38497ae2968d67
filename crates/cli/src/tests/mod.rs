// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod args_tests;
mod catalog_file_tests;
mod command_tests;

use std::io::Write;

use tempfile::NamedTempFile;

pub const SAMPLE_CATALOG: &str = r#"{
  "careers": [{ "id": 1, "name": "Systems Engineering" }],
  "subjects": [
    { "career_id": 1, "code": "INF-110", "name": "Introduction to Programming" },
    { "career_id": 1, "code": "INF-120", "name": "Data Structures" }
  ],
  "teachers": [
    { "id": 1, "first_name": "Ana", "last_name": "Rojas", "contract_date": "2019-03-01" },
    { "id": 2, "first_name": "Bruno", "last_name": "Vargas" }
  ],
  "groups": [{ "id": 1, "name": "A" }],
  "periods": [
    { "id": 1, "year": 2026, "term": 1, "start_date": "2026-02-01", "end_date": "2026-06-30" }
  ],
  "timeslots": [
    { "id": 1, "start_time": "08:00", "end_time": "09:30" },
    { "id": 2, "start_time": "09:45:00", "end_time": "11:15:00" }
  ],
  "rooms": [{ "id": 1, "code": "A-101", "name": "Lab A" }]
}"#;

pub fn write_catalog(contents: &str) -> NamedTempFile {
    let mut file: NamedTempFile = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
