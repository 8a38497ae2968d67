// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::SlotRequest;

/// Validates the shape of a requested slot set.
///
/// This function does NOT consult storage. Whether the teacher or room is
/// busy, including a day and timeslot repeated within the request, is
/// decided by the scheduling engine.
///
/// # Arguments
///
/// * `slots` - The requested slots, in request order
///
/// # Returns
///
/// * `Ok(())` if the slot set is well formed
/// * `Err(DomainError)` describing the first problem found
///
/// # Errors
///
/// Returns `DomainError::EmptySlotList` if the slot list is empty.
pub const fn validate_slot_requests(slots: &[SlotRequest]) -> Result<(), DomainError> {
    if slots.is_empty() {
        return Err(DomainError::EmptySlotList);
    }

    Ok(())
}
