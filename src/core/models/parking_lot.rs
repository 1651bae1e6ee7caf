use std::collections::HashMap;

use crate::core::errors::ParkingError;
use crate::core::models::{Slot, SlotStatus};

/// Fixed set of slots numbered `1..=capacity`. Slot ids double as distance
/// from the entrance, so the lowest vacant id is the nearest one.
#[derive(Debug, Clone)]
pub struct ParkingLot {
    capacity: usize,
    slots: Vec<Slot>,
    // slot id -> position in `slots`
    index: HashMap<usize, usize>,
}

impl ParkingLot {
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        let mut index = HashMap::with_capacity(capacity);

        for id in 1..=capacity {
            index.insert(id, slots.len());
            slots.push(Slot::new(id));
        }

        Self { capacity, slots, index }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn find_slot_by_id(&self, id: usize) -> Result<&Slot, ParkingError> {
        self.index
            .get(&id)
            .map(|&pos| &self.slots[pos])
            .ok_or(ParkingError::SlotNotFound)
    }

    pub fn find_slot_by_id_mut(&mut self, id: usize) -> Result<&mut Slot, ParkingError> {
        let pos = *self.index.get(&id).ok_or(ParkingError::SlotNotFound)?;
        Ok(&mut self.slots[pos])
    }

    /// Snapshot of every slot in `status`, ascending by id. An empty result is
    /// reported as `SlotNotFound`.
    pub fn find_by_status(&self, status: SlotStatus) -> Result<Vec<Slot>, ParkingError> {
        let found: Vec<Slot> = self.slots
            .iter()
            .filter(|slot| slot.status() == status)
            .cloned()
            .collect();

        if found.is_empty() {
            return Err(ParkingError::SlotNotFound);
        }
        Ok(found)
    }

    pub fn find_nearest_empty_slot(&mut self) -> Result<&mut Slot, ParkingError> {
        self.slots
            .iter_mut()
            .find(|slot| slot.is_vacant())
            .ok_or(ParkingError::ParkingLotFull)
    }
}
