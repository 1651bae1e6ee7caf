// src/core/reporting.rs

use itertools::Itertools;

use crate::core::models::Slot;

pub const STATUS_HEADER: &str = "Slot No.    Registration No    Colour";

// Column gaps of the occupancy table.
const SLOT_GAP: usize = 11;
const REGISTRATION_GAP: usize = 6;

/// Formats the occupancy table for the given parked slots, in the order given.
pub fn format_status_table(parked: &[Slot]) -> String {
    let mut table = String::from(STATUS_HEADER);
    for slot in parked {
        table.push('\n');
        table.push_str(&format_status_row(slot));
    }
    table.trim_end().to_string()
}

fn format_status_row(slot: &Slot) -> String {
    format!(
        "{}{}{}{}{}",
        slot.id(),
        " ".repeat(SLOT_GAP),
        slot.registration().unwrap_or_default(),
        " ".repeat(REGISTRATION_GAP),
        slot.colour().unwrap_or_default(),
    )
}

pub fn format_id_list(ids: impl IntoIterator<Item = usize>) -> String {
    ids.into_iter().join(", ")
}

pub fn format_name_list<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().join(", ")
}
