// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use unisched_api::SlotInput;

use crate::error::SlotArgError;

fn parse_part(part: &'static str, value: &str) -> Result<i64, SlotArgError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| SlotArgError::NotANumber {
            part,
            value: value.to_string(),
        })
}

/// Parses a slot given as `DAY:TIMESLOT` or `DAY:TIMESLOT:ROOM`.
///
/// Only the shape is checked here. Positivity and existence are checked
/// by the API layer so errors name the slot's position.
///
/// # Errors
///
/// Returns an error if the value does not have two or three numeric parts.
pub fn parse_slot_arg(value: &str) -> Result<SlotInput, SlotArgError> {
    let parts: Vec<&str> = value.split(':').collect();
    match parts.as_slice() {
        [day, timeslot] => Ok(SlotInput {
            day_id: parse_part("day", day)?,
            timeslot_id: parse_part("timeslot", timeslot)?,
            room_id: None,
        }),
        [day, timeslot, room] => Ok(SlotInput {
            day_id: parse_part("day", day)?,
            timeslot_id: parse_part("timeslot", timeslot)?,
            room_id: Some(parse_part("room", room)?),
        }),
        _ => Err(SlotArgError::WrongShape(value.to_string())),
    }
}
