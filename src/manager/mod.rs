//! Command parsing and dispatch over a single optional lot.

pub mod command;

pub use command::Command;

use crate::config::LotConfig;
use crate::core::{Car, ParkingLot};

/// Response for any operation issued before a lot exists.
const MSG_NO_LOT: &str = "Please create a parking lot first";
/// Response for lines that do not form a valid command.
const MSG_INVALID: &str = "Invalid command";
/// Response for a slot number outside the lot.
const MSG_BAD_SLOT: &str = "Invalid lot number";

/// Command-dispatch layer wrapping at most one [`ParkingLot`].
///
/// The manager starts without a lot; every operation except
/// [`create_parking_lot`](Self::create_parking_lot) answers with a fixed
/// please-create message until one exists. Creating a lot again replaces the
/// previous one entirely. All outcomes, including structural errors, are
/// rendered as response strings - nothing propagates as an `Err` across the
/// dispatch boundary.
#[derive(Debug, Default)]
pub struct Manager {
    lot: Option<ParkingLot>,
    config: LotConfig,
}

impl Manager {
    /// Create a manager with no lot and default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager with no lot and the given configuration.
    pub fn with_config(config: LotConfig) -> Self {
        Self { lot: None, config }
    }

    /// Create a manager with a lot of the given capacity already in place.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lot: Some(ParkingLot::new(capacity)),
            config: LotConfig::default(),
        }
    }

    /// Handle one input line and return the response line.
    pub fn dispatch(&mut self, line: &str) -> String {
        match Command::parse(line) {
            Some(Command::Create { capacity }) => self.create_parking_lot(capacity),
            Some(Command::Park { plate, color }) => self.park(&plate, &color),
            Some(Command::Leave { slot }) => self.leave(slot),
            Some(Command::Status) => self.status(),
            Some(Command::PlatesByColor { color }) => self.ids_for_cars_with_color(&color),
            Some(Command::SlotsByColor { color }) => self.slot_numbers_for_cars_with_color(&color),
            Some(Command::SlotForPlate { plate }) => self.slot_number_for_id(&plate),
            None => {
                tracing::debug!("rejected invalid line: {:?}", line);
                MSG_INVALID.to_string()
            }
        }
    }

    /// Replace the current lot with a fresh one of the given capacity.
    ///
    /// A zero capacity is rejected as an invalid command; a lot with no slots
    /// would make every later command degenerate.
    pub fn create_parking_lot(&mut self, capacity: usize) -> String {
        if capacity == 0 {
            return MSG_INVALID.to_string();
        }
        if self.lot.is_some() {
            tracing::info!("replacing existing lot");
        }
        self.lot = Some(ParkingLot::new(capacity));
        tracing::info!("created lot with {} slots", capacity);
        format!("Created a parking lot with {capacity} slots")
    }

    /// Park a car, reporting the allocated 1-indexed slot number.
    pub fn park(&mut self, plate: &str, color: &str) -> String {
        let Some(lot) = self.lot.as_mut() else {
            return MSG_NO_LOT.to_string();
        };
        match lot.park(Car::new(plate, color)) {
            Ok(index) => format!("Allocated slot number: {}", index + 1),
            Err(_) => "Sorry, parking lot is full".to_string(),
        }
    }

    /// Free a slot by its 1-indexed number.
    ///
    /// Freeing an already-empty slot is idempotent and reports the same
    /// is-free response; a slot number of zero or beyond capacity reports an
    /// invalid lot number.
    pub fn leave(&mut self, slot: usize) -> String {
        let Some(lot) = self.lot.as_mut() else {
            return MSG_NO_LOT.to_string();
        };
        let Some(index) = slot.checked_sub(1) else {
            return MSG_BAD_SLOT.to_string();
        };
        match lot.leave(index) {
            Ok(_) => format!("Slot number {slot} is free"),
            Err(_) => MSG_BAD_SLOT.to_string(),
        }
    }

    /// Render the occupancy table.
    ///
    /// Whether unoccupied slots appear as placeholder rows is a configuration
    /// choice ([`LotConfig::status_include_empty`], off by default).
    pub fn status(&self) -> String {
        match &self.lot {
            Some(lot) => lot.render_status(self.config.status_include_empty),
            None => MSG_NO_LOT.to_string(),
        }
    }

    /// Plates of all cars of the given color, in slot order.
    pub fn ids_for_cars_with_color(&self, color: &str) -> String {
        let Some(lot) = self.lot.as_ref() else {
            return MSG_NO_LOT.to_string();
        };
        let plates: Vec<&str> = lot
            .cars_by_color(color)
            .iter()
            .map(|car| car.plate.as_str())
            .collect();
        if plates.is_empty() {
            "None found".to_string()
        } else {
            plates.join(", ")
        }
    }

    /// 1-indexed slot numbers of all cars of the given color, in slot order.
    pub fn slot_numbers_for_cars_with_color(&self, color: &str) -> String {
        let Some(lot) = self.lot.as_ref() else {
            return MSG_NO_LOT.to_string();
        };
        let slots: Vec<String> = lot
            .slot_indices_by_color(color)
            .iter()
            .map(|index| (index + 1).to_string())
            .collect();
        if slots.is_empty() {
            "None found".to_string()
        } else {
            slots.join(", ")
        }
    }

    /// 1-indexed slot number of the car with the given plate.
    pub fn slot_number_for_id(&self, plate: &str) -> String {
        let Some(lot) = self.lot.as_ref() else {
            return MSG_NO_LOT.to_string();
        };
        lot.slot_index_for_plate(plate)
            .map_or_else(|| "Not found".to_string(), |index| (index + 1).to_string())
    }
}
