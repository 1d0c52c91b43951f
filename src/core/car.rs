//! Car value type.

use serde::{Deserialize, Serialize};

/// A car occupying one slot, identified by its license plate.
///
/// Plates are unique in practice but not enforced; colors repeat freely.
/// A `Car` has no lifecycle of its own - it is owned entirely by the slot
/// that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// License plate, the car's identifier.
    pub plate: String,
    /// Body color.
    pub color: String,
}

impl Car {
    /// Create a car from a plate and a color.
    pub fn new(plate: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            plate: plate.into(),
            color: color.into(),
        }
    }
}
