use serde::{Deserialize, Serialize};

#[cfg(test)]
use mockall::automock;

use crate::core::errors::ParkingError;
use crate::core::parking_service::ParkingService;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "params")]
pub enum Command {
    CreateParkingLot {
        capacity: String,
    },
    Park {
        registration: String,
        colour: String,
    },
    Leave {
        slot: String,
    },
    Status,
    Reset,
    RegistrationNumbersForCarsWithColour {
        colour: String,
    },
    SlotNumbersForCarsWithColour {
        colour: String,
    },
    SlotNumberForRegistrationNumber {
        registration: String,
    },
}

/// The operations a command can drive. `ParkingService` is the real
/// implementation; tests substitute a mock.
#[cfg_attr(test, automock)]
pub trait ParkingOperations {
    fn create_parking_lot(&mut self, capacity: &str) -> Result<String, ParkingError>;
    fn park(&mut self, registration: &str, colour: &str) -> Result<String, ParkingError>;
    fn leave(&mut self, slot: &str) -> Result<String, ParkingError>;
    fn status(&self) -> Result<String, ParkingError>;
    fn reset(&mut self);
    fn registration_numbers_for_colour(&self, colour: &str) -> Result<String, ParkingError>;
    fn slot_numbers_for_colour(&self, colour: &str) -> Result<String, ParkingError>;
    fn slot_number_for_registration(&self, registration: &str) -> Result<String, ParkingError>;
}

impl ParkingOperations for ParkingService {
    fn create_parking_lot(&mut self, capacity: &str) -> Result<String, ParkingError> {
        ParkingService::create_parking_lot(self, capacity)
    }

    fn park(&mut self, registration: &str, colour: &str) -> Result<String, ParkingError> {
        ParkingService::park(self, registration, colour)
    }

    fn leave(&mut self, slot: &str) -> Result<String, ParkingError> {
        ParkingService::leave(self, slot)
    }

    fn status(&self) -> Result<String, ParkingError> {
        ParkingService::status(self)
    }

    fn reset(&mut self) {
        ParkingService::reset(self)
    }

    fn registration_numbers_for_colour(&self, colour: &str) -> Result<String, ParkingError> {
        ParkingService::registration_numbers_for_colour(self, colour)
    }

    fn slot_numbers_for_colour(&self, colour: &str) -> Result<String, ParkingError> {
        ParkingService::slot_numbers_for_colour(self, colour)
    }

    fn slot_number_for_registration(&self, registration: &str) -> Result<String, ParkingError> {
        ParkingService::slot_number_for_registration(self, registration)
    }
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateParkingLot { .. } => "create_parking_lot",
            Command::Park { .. } => "park",
            Command::Leave { .. } => "leave",
            Command::Status => "status",
            Command::Reset => "reset",
            Command::RegistrationNumbersForCarsWithColour { .. } => "registration_numbers_for_cars_with_colour",
            Command::SlotNumbersForCarsWithColour { .. } => "slot_numbers_for_cars_with_colour",
            Command::SlotNumberForRegistrationNumber { .. } => "slot_number_for_registration_number",
        }
    }

    /// Runs the command against `app` and returns the text to display on success.
    pub fn execute<P: ParkingOperations + ?Sized>(&self, app: &mut P) -> Result<String, ParkingError> {
        match self {
            Command::CreateParkingLot { capacity } => app.create_parking_lot(capacity),
            Command::Park { registration, colour } => app.park(registration, colour),
            Command::Leave { slot } => app.leave(slot),
            Command::Status => app.status(),
            Command::Reset => {
                app.reset();
                Ok("Parking lot has been reset".to_string())
            }
            Command::RegistrationNumbersForCarsWithColour { colour } => app.registration_numbers_for_colour(colour),
            Command::SlotNumbersForCarsWithColour { colour } => app.slot_numbers_for_colour(colour),
            Command::SlotNumberForRegistrationNumber { registration } => app.slot_number_for_registration(registration),
        }
    }
}
