// src/core/errors.rs

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParkingError {
    /// Invalid or missing input, or a command issued in the wrong lot state.
    BadData(String),
    /// A lookup by id, status or vehicle attribute matched nothing.
    SlotNotFound,
    /// An occupied slot was asked to take another car.
    SlotNotVacant { slot_id: usize },
    ParkingLotFull,
}

impl ParkingError {
    pub fn bad_data(message: impl Into<String>) -> Self {
        ParkingError::BadData(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ParkingError::SlotNotFound)
    }
}

impl fmt::Display for ParkingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParkingError::BadData(message) => write!(f, "{}", message),
            ParkingError::SlotNotFound => write!(f, "Not found"),
            ParkingError::SlotNotVacant { slot_id } => write!(
                f,
                "Slot {} has a parked car. It cannot be assigned to a new car",
                slot_id
            ),
            ParkingError::ParkingLotFull => write!(f, "Sorry, parking lot is full"),
        }
    }
}

impl Error for ParkingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ParkingError::bad_data("nope").to_string(), "nope");
        assert_eq!(ParkingError::SlotNotFound.to_string(), "Not found");
        assert_eq!(ParkingError::ParkingLotFull.to_string(), "Sorry, parking lot is full");
        assert!(ParkingError::SlotNotVacant { slot_id: 7 }.to_string().contains("Slot 7"));
    }

    #[test]
    fn test_slot_not_vacant_keeps_slot_id() {
        let err = ParkingError::SlotNotVacant { slot_id: 12 };
        match err {
            ParkingError::SlotNotVacant { slot_id } => assert_eq!(slot_id, 12),
            _ => panic!("Expected SlotNotVacant"),
        }
        assert!(!err.is_not_found());
        assert!(ParkingError::SlotNotFound.is_not_found());
    }

    #[test]
    fn test_boxes_as_std_error() {
        let boxed: Box<dyn Error> = Box::new(ParkingError::ParkingLotFull);
        assert_eq!(boxed.to_string(), "Sorry, parking lot is full");
    }
}
