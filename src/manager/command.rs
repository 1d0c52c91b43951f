//! Wire command model and tokenizer.

/// A parsed command from one input line.
///
/// Slot numbers are carried exactly as given on the wire (1-indexed); the
/// dispatcher converts them to 0-based lot indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create_parking_lot N` - replace any existing lot with a fresh one.
    Create {
        /// Requested number of slots.
        capacity: usize,
    },
    /// `park PLATE COLOR`.
    Park {
        /// License plate of the arriving car.
        plate: String,
        /// Body color of the arriving car.
        color: String,
    },
    /// `leave S` - free the slot with this 1-indexed number.
    Leave {
        /// 1-indexed slot number from the wire.
        slot: usize,
    },
    /// `status` - render the occupancy table.
    Status,
    /// `ids_for_cars_with_color COLOR`.
    PlatesByColor {
        /// Color to match.
        color: String,
    },
    /// `slot_numbers_for_cars_with_color COLOR`.
    SlotsByColor {
        /// Color to match.
        color: String,
    },
    /// `slot_number_for_id PLATE`.
    SlotForPlate {
        /// Plate to look up.
        plate: String,
    },
}

impl Command {
    /// Parse one input line into a command.
    ///
    /// `None` means the line does not form a valid command: unknown token,
    /// wrong argument count, or a number that does not parse. The caller owns
    /// the generic invalid-command response.
    pub fn parse(line: &str) -> Option<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            ["create_parking_lot", n] => n.parse().ok().map(|capacity| Self::Create { capacity }),
            ["park", plate, color] => Some(Self::Park {
                plate: (*plate).to_string(),
                color: (*color).to_string(),
            }),
            ["leave", s] => s.parse().ok().map(|slot| Self::Leave { slot }),
            ["status"] => Some(Self::Status),
            ["ids_for_cars_with_color", color] => Some(Self::PlatesByColor {
                color: (*color).to_string(),
            }),
            ["slot_numbers_for_cars_with_color", color] => Some(Self::SlotsByColor {
                color: (*color).to_string(),
            }),
            ["slot_number_for_id", plate] => Some(Self::SlotForPlate {
                plate: (*plate).to_string(),
            }),
            _ => None,
        }
    }
}
