// src/core/parking_service.rs

use log::{debug, info};

use crate::core::errors::ParkingError;
use crate::core::models::{ParkingLot, Slot, SlotStatus};
use crate::core::reporting::{format_id_list, format_name_list, format_status_table};

const LOT_NOT_INITIALIZED: &str =
    "Parking lot has not been initialized. Call create_parking_lot command to initialize a parking lot";

fn is_number(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Owns at most one parking lot per session and guards every vehicle-facing
/// operation with the lot lifecycle and input checks.
#[derive(Debug, Default)]
pub struct ParkingService {
    lot: Option<ParkingLot>,
}

impl ParkingService {
    pub fn new() -> Self {
        Self { lot: None }
    }

    pub fn lot(&self) -> Option<&ParkingLot> {
        self.lot.as_ref()
    }

    pub fn create_parking_lot(&mut self, capacity: &str) -> Result<String, ParkingError> {
        if !is_number(capacity) {
            return Err(ParkingError::bad_data("Capacity must be a valid integer between 1 and N"));
        }

        // All-digit input can still overflow; treat it like any other unusable capacity.
        let capacity: usize = capacity.parse().unwrap_or(0);
        if capacity < 1 {
            return Err(ParkingError::bad_data(
                "Capacity value > 0, must be provided to create a parking lot",
            ));
        }

        if self.lot.is_some() {
            return Err(ParkingError::bad_data(
                "A parking lot has already been created for this app. \
                 Only one parking lot can be used at one time. \
                 Call reset to reset this app",
            ));
        }

        self.lot = Some(ParkingLot::new(capacity));
        info!("Created parking lot with {} slots", capacity);

        Ok(format!("Created a parking lot with {} slots", capacity))
    }

    pub fn park(&mut self, registration: &str, colour: &str) -> Result<String, ParkingError> {
        if registration.is_empty() || colour.is_empty() {
            return Err(ParkingError::bad_data(
                "Both registration & colour values are required to park a car",
            ));
        }

        let lot = self.lot_mut()?;

        // Registrations are not checked for uniqueness: parking the same car
        // twice takes a second slot.
        let slot = lot.find_nearest_empty_slot()?;
        let id = slot.assign(registration, colour)?;
        debug!("Allocated slot {} to {} ({})", id, registration, colour);

        Ok(format!("Allocated slot number: {}", id))
    }

    pub fn leave(&mut self, slot: &str) -> Result<String, ParkingError> {
        if !is_number(slot) {
            return Err(ParkingError::bad_data("Slot number must be a valid integer between 1 and N"));
        }

        let lot = self.lot_mut()?;

        // Out-of-range digit strings cannot name a slot.
        let id: usize = slot.parse().map_err(|_| ParkingError::SlotNotFound)?;
        let id = lot.find_slot_by_id_mut(id)?.leave();
        debug!("Slot {} released", id);

        Ok(format!("Slot number {} is free", id))
    }

    pub fn status(&self) -> Result<String, ParkingError> {
        let lot = self.lot_ref()?;

        let parked = match lot.find_by_status(SlotStatus::Parked) {
            Ok(slots) => slots,
            Err(ParkingError::SlotNotFound) => Vec::new(),
            Err(e) => return Err(e),
        };

        Ok(format_status_table(&parked))
    }

    pub fn reset(&mut self) {
        if self.lot.take().is_some() {
            info!("Parking lot reset");
        }
    }

    pub fn registration_numbers_for_colour(&self, colour: &str) -> Result<String, ParkingError> {
        let matches = self.parked_matching("colour", colour, |slot| slot.colour() == Some(colour))?;
        Ok(format_name_list(matches.iter().filter_map(|slot| slot.registration())))
    }

    pub fn slot_numbers_for_colour(&self, colour: &str) -> Result<String, ParkingError> {
        let matches = self.parked_matching("colour", colour, |slot| slot.colour() == Some(colour))?;
        Ok(format_id_list(matches.iter().map(|slot| slot.id())))
    }

    pub fn slot_number_for_registration(&self, registration: &str) -> Result<String, ParkingError> {
        let matches = self.parked_matching("registration", registration, |slot| {
            slot.registration() == Some(registration)
        })?;
        // Snapshots are in ascending id order.
        Ok(matches[0].id().to_string())
    }

    /// Parked slots satisfying `predicate`, ascending by id; `SlotNotFound` when none do.
    fn parked_matching<F>(&self, field: &str, value: &str, predicate: F) -> Result<Vec<Slot>, ParkingError>
    where
        F: Fn(&Slot) -> bool,
    {
        if value.is_empty() {
            return Err(ParkingError::bad_data(format!("A {} value is required", field)));
        }

        let matches: Vec<Slot> = self.lot_ref()?
            .find_by_status(SlotStatus::Parked)?
            .into_iter()
            .filter(|slot| predicate(slot))
            .collect();

        if matches.is_empty() {
            return Err(ParkingError::SlotNotFound);
        }
        Ok(matches)
    }

    fn lot_ref(&self) -> Result<&ParkingLot, ParkingError> {
        self.lot.as_ref().ok_or_else(|| ParkingError::bad_data(LOT_NOT_INITIALIZED))
    }

    fn lot_mut(&mut self) -> Result<&mut ParkingLot, ParkingError> {
        self.lot.as_mut().ok_or_else(|| ParkingError::bad_data(LOT_NOT_INITIALIZED))
    }
}
