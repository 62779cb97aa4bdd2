//! Bookable time slot generation
//!
//! Business hours are fixed: one slot per hour from 09:00 through 17:00.

use std::sync::OnceLock;

/// One selectable appointment time: machine value plus display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// 24-hour value, zero-padded ("09:00")
    pub value: String,
    /// 12-hour display label ("9:00 AM")
    pub label: String,
}

/// First bookable hour (inclusive)
const OPENING_HOUR: u32 = 9;
/// Last bookable hour (inclusive)
const CLOSING_HOUR: u32 = 17;

/// Generate the slot list for one day of business hours
pub fn generate() -> Vec<TimeSlot> {
    (OPENING_HOUR..=CLOSING_HOUR)
        .map(|hour| {
            let period = if hour >= 12 { "PM" } else { "AM" };
            let display_hour = if hour > 12 { hour - 12 } else { hour };
            TimeSlot {
                value: format!("{hour:02}:00"),
                label: format!("{display_hour}:00 {period}"),
            }
        })
        .collect()
}

/// The slot list, computed once per process
pub fn time_slots() -> &'static [TimeSlot] {
    static SLOTS: OnceLock<Vec<TimeSlot>> = OnceLock::new();
    SLOTS.get_or_init(generate)
}

/// Machine values of every slot, for choice validation
pub fn slot_values() -> Vec<String> {
    time_slots().iter().map(|s| s.value.clone()).collect()
}
