//! Fixed-capacity slot container with linear-scan allocation.

use crate::core::{Car, LotError};

/// Number of slots in a lot constructed without an explicit capacity.
pub const DEFAULT_CAPACITY: usize = 6;

/// Marker rendered for an unoccupied slot when full status is requested.
const EMPTY_MARKER: &str = "(empty)";

/// Header line of the status table.
const STATUS_HEADER: &str = "Slot No.\tID\t\tColor";

/// A fixed-capacity parking lot.
///
/// Slots are a contiguous sequence of optional [`Car`] values indexed
/// `0..capacity`. Allocation and search both use a linear scan with a
/// lowest-index-wins tie-break, so results are deterministic for any
/// sequence of operations. Capacity is fixed at construction; replacing a
/// lot means constructing a new one.
///
/// Invariant: `occupied` always equals the number of `Some` slots and stays
/// within `0..=capacity`. A slot index is stable until the occupying car
/// leaves.
#[derive(Debug, Clone)]
pub struct ParkingLot {
    capacity: usize,
    slots: Vec<Option<Car>>,
    occupied: usize,
}

impl Default for ParkingLot {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ParkingLot {
    /// Create an empty lot with the given number of slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: vec![None; capacity],
            occupied: 0,
        }
    }

    /// Number of slots in the lot.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of currently occupied slots.
    pub const fn occupied(&self) -> usize {
        self.occupied
    }

    /// Whether every slot is occupied.
    pub const fn is_full(&self) -> bool {
        self.occupied == self.capacity
    }

    /// Park a car in the lowest-indexed empty slot.
    ///
    /// Returns the 0-based index of the slot the car was parked in, or
    /// [`LotError::Full`] when no slot is empty.
    pub fn park(&mut self, car: Car) -> Result<usize, LotError> {
        let Some(index) = self.slots.iter().position(Option::is_none) else {
            tracing::warn!("park rejected: all {} slots occupied", self.capacity);
            return Err(LotError::Full);
        };
        tracing::debug!("parked {} in slot {}", car.plate, index + 1);
        self.slots[index] = Some(car);
        self.occupied += 1;
        Ok(index)
    }

    /// Free a slot by 0-based index and return the car that occupied it.
    ///
    /// An already-empty slot is not an error: the call returns `Ok(None)` and
    /// leaves the lot unchanged, which makes freeing idempotent. An index at
    /// or beyond capacity is [`LotError::OutOfRange`].
    pub fn leave(&mut self, index: usize) -> Result<Option<Car>, LotError> {
        if index >= self.capacity {
            return Err(LotError::OutOfRange(index));
        }
        match self.slots[index].take() {
            Some(car) => {
                self.occupied -= 1;
                tracing::debug!("slot {} freed, {} left", index + 1, car.plate);
                Ok(Some(car))
            }
            None => Ok(None),
        }
    }

    /// Whether the slot at a 0-based index is empty.
    ///
    /// Returns [`LotError::OutOfRange`] for an index at or beyond capacity.
    pub fn is_slot_empty(&self, index: usize) -> Result<bool, LotError> {
        self.slots
            .get(index)
            .map(Option::is_none)
            .ok_or(LotError::OutOfRange(index))
    }

    /// All parked cars of the given color, in slot order.
    pub fn cars_by_color(&self, color: &str) -> Vec<&Car> {
        self.slots
            .iter()
            .flatten()
            .filter(|car| car.color == color)
            .collect()
    }

    /// 0-based indices of all slots holding a car of the given color.
    pub fn slot_indices_by_color(&self, color: &str) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Some(car) if car.color == color => Some(index),
                _ => None,
            })
            .collect()
    }

    /// 0-based index of the first slot holding the given plate, if any.
    ///
    /// With duplicate plates the lowest index wins, consistent with the
    /// allocation tie-break.
    pub fn slot_index_for_plate(&self, plate: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|car| car.plate == plate))
    }

    /// Render the lot as a tab-separated status table.
    ///
    /// The header row is followed by one row per slot with its 1-indexed
    /// number, plate, and color. When `include_empty` is false, unoccupied
    /// slots are omitted entirely; when true they render as an `(empty)`
    /// placeholder row. The final line carries no trailing newline.
    pub fn render_status(&self, include_empty: bool) -> String {
        let mut lines = vec![STATUS_HEADER.to_string()];
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(car) => {
                    lines.push(format!("{}\t\t{}\t\t{}", index + 1, car.plate, car.color));
                }
                None if include_empty => {
                    lines.push(format!("{}\t\t{EMPTY_MARKER}", index + 1));
                }
                None => {}
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(plate: &str, color: &str) -> Car {
        Car::new(plate, color)
    }

    #[test]
    fn test_park_fills_lowest_slot_first() {
        let mut lot = ParkingLot::new(3);
        assert_eq!(lot.park(car("AAA111", "White")).unwrap(), 0);
        assert_eq!(lot.park(car("BBB222", "Black")).unwrap(), 1);
        assert_eq!(lot.park(car("CCC333", "Red")).unwrap(), 2);
        assert_eq!(lot.occupied(), 3);
        assert!(lot.is_full());
    }

    #[test]
    fn test_park_full_lot() {
        let mut lot = ParkingLot::new(1);
        lot.park(car("AAA111", "White")).unwrap();
        assert_eq!(lot.park(car("BBB222", "Black")), Err(LotError::Full));
        // The failed park must not disturb bookkeeping
        assert_eq!(lot.occupied(), 1);
    }

    #[test]
    fn test_leave_then_park_reuses_lowest_freed_slot() {
        let mut lot = ParkingLot::new(3);
        lot.park(car("AAA111", "White")).unwrap();
        lot.park(car("BBB222", "Black")).unwrap();
        lot.park(car("CCC333", "Red")).unwrap();

        let freed = lot.leave(1).unwrap();
        assert_eq!(freed.unwrap().plate, "BBB222");
        assert_eq!(lot.occupied(), 2);

        // Lowest empty slot wins again
        assert_eq!(lot.park(car("DDD444", "Blue")).unwrap(), 1);
    }

    #[test]
    fn test_leave_empty_slot_is_idempotent() {
        let mut lot = ParkingLot::new(2);
        assert_eq!(lot.leave(0), Ok(None));
        assert_eq!(lot.leave(0), Ok(None));
        assert_eq!(lot.occupied(), 0);
    }

    #[test]
    fn test_leave_out_of_range() {
        let mut lot = ParkingLot::new(2);
        assert_eq!(lot.leave(2), Err(LotError::OutOfRange(2)));
        assert_eq!(lot.leave(99), Err(LotError::OutOfRange(99)));
    }

    #[test]
    fn test_is_slot_empty() {
        let mut lot = ParkingLot::new(2);
        assert_eq!(lot.is_slot_empty(0), Ok(true));
        lot.park(car("AAA111", "White")).unwrap();
        assert_eq!(lot.is_slot_empty(0), Ok(false));
        assert_eq!(lot.is_slot_empty(1), Ok(true));
        assert_eq!(lot.is_slot_empty(2), Err(LotError::OutOfRange(2)));
    }

    #[test]
    fn test_color_queries_keep_slot_order() {
        let mut lot = ParkingLot::new(4);
        lot.park(car("AAA111", "White")).unwrap();
        lot.park(car("BBB222", "Black")).unwrap();
        lot.park(car("CCC333", "White")).unwrap();
        lot.park(car("DDD444", "Blue")).unwrap();

        let plates: Vec<&str> = lot
            .cars_by_color("White")
            .iter()
            .map(|c| c.plate.as_str())
            .collect();
        assert_eq!(plates, vec!["AAA111", "CCC333"]);
        assert_eq!(lot.slot_indices_by_color("White"), vec![0, 2]);
        assert!(lot.cars_by_color("Green").is_empty());
        assert!(lot.slot_indices_by_color("Green").is_empty());
    }

    #[test]
    fn test_plate_lookup_prefers_lowest_index() {
        let mut lot = ParkingLot::new(3);
        lot.park(car("AAA111", "White")).unwrap();
        lot.park(car("DUP000", "Black")).unwrap();
        lot.park(car("DUP000", "Red")).unwrap();

        assert_eq!(lot.slot_index_for_plate("DUP000"), Some(1));
        assert_eq!(lot.slot_index_for_plate("MISSING"), None);
    }

    #[test]
    fn test_status_omits_empty_slots() {
        let mut lot = ParkingLot::new(3);
        lot.park(car("AAA111", "White")).unwrap();
        lot.park(car("BBB222", "Black")).unwrap();
        lot.park(car("CCC333", "Red")).unwrap();
        lot.leave(1).unwrap();

        let expected = "Slot No.\tID\t\tColor\n\
                        1\t\tAAA111\t\tWhite\n\
                        3\t\tCCC333\t\tRed";
        assert_eq!(lot.render_status(false), expected);
    }

    #[test]
    fn test_status_marks_empty_slots_when_requested() {
        let mut lot = ParkingLot::new(3);
        lot.park(car("AAA111", "White")).unwrap();
        lot.leave(0).unwrap();
        lot.park(car("BBB222", "Black")).unwrap();
        lot.leave(0).unwrap();
        lot.park(car("CCC333", "Red")).unwrap();
        lot.leave(0).unwrap();

        let expected = "Slot No.\tID\t\tColor\n\
                        1\t\t(empty)\n\
                        2\t\t(empty)\n\
                        3\t\t(empty)";
        assert_eq!(lot.render_status(true), expected);
    }

    #[test]
    fn test_status_empty_lot_without_placeholder_is_header_only() {
        let lot = ParkingLot::new(4);
        assert_eq!(lot.render_status(false), "Slot No.\tID\t\tColor");
    }

    #[test]
    fn test_default_capacity() {
        let lot = ParkingLot::default();
        assert_eq!(lot.capacity(), DEFAULT_CAPACITY);
        assert_eq!(lot.occupied(), 0);
    }
}
