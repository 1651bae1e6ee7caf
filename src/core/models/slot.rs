use serde::{Serialize, Deserialize};

use crate::core::errors::ParkingError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum SlotStatus {
    Vacant,
    Parked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub registration: String,
    pub colour: String,
}

/// A single parking space. The vehicle is present exactly when the slot is parked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    id: usize,
    status: SlotStatus,
    vehicle: Option<Vehicle>,
}

impl Slot {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            status: SlotStatus::Vacant,
            vehicle: None,
        }
    }

    // Getter methods
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn status(&self) -> SlotStatus {
        self.status
    }

    pub fn is_vacant(&self) -> bool {
        self.status == SlotStatus::Vacant
    }

    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    pub fn registration(&self) -> Option<&str> {
        self.vehicle.as_ref().map(|v| v.registration.as_str())
    }

    pub fn colour(&self) -> Option<&str> {
        self.vehicle.as_ref().map(|v| v.colour.as_str())
    }

    /// Parks a car here. The registration and colour are stored as given.
    pub fn assign(&mut self, registration: &str, colour: &str) -> Result<usize, ParkingError> {
        if self.status != SlotStatus::Vacant {
            return Err(ParkingError::SlotNotVacant { slot_id: self.id });
        }

        self.vehicle = Some(Vehicle {
            registration: registration.to_string(),
            colour: colour.to_string(),
        });
        self.status = SlotStatus::Parked;

        Ok(self.id)
    }

    /// Clears the parked car, if any. Leaving a vacant slot changes nothing.
    pub fn leave(&mut self) -> usize {
        self.vehicle = None;
        self.status = SlotStatus::Vacant;
        self.id
    }
}
