//! # Carpark
//!
//! A fixed-capacity parking lot with slot allocation, release, and
//! query-by-attribute operations, driven by a line-oriented command
//! interpreter.
//!
//! The crate models a small, strictly sequential system: a [`core::ParkingLot`]
//! owns a fixed array of slots and its allocation bookkeeping, and a
//! [`manager::Manager`] wraps at most one lot, parses textual commands, and
//! renders every outcome as a response string. A thin [`repl`] loop connects
//! the manager to any line source and line sink.
//!
//! ## Allocation model
//!
//! - Slots are a contiguous sequence of optional cars, `0..capacity`.
//! - Parking always takes the lowest-indexed empty slot (linear scan).
//! - Searches return matches in the same lowest-index-first order, so output
//!   is deterministic for any command sequence.
//! - Slot numbers are 1-indexed in every external-facing string.
//!
//! ## Command protocol
//!
//! One command per line, whitespace-separated tokens, one response line per
//! command. Structural problems (unknown command, wrong arity, malformed
//! number, full lot, bad slot number) are response strings too - the protocol
//! has no separate error channel.
//!
//! ```rust
//! use carpark::manager::Manager;
//!
//! let mut manager = Manager::new();
//! assert_eq!(manager.dispatch("create_parking_lot 3"), "Created a parking lot with 3 slots");
//! assert_eq!(manager.dispatch("park KA1234 White"), "Allocated slot number: 1");
//! assert_eq!(manager.dispatch("slot_number_for_id KA1234"), "1");
//! assert_eq!(manager.dispatch("leave 1"), "Slot number 1 is free");
//! assert_eq!(manager.dispatch("slot_number_for_id KA1234"), "Not found");
//! ```
//!
//! For complete sessions, see `tests/repl_session_test.rs`.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core parking-lot domain: cars, slots, and allocation bookkeeping.
pub mod core;
/// Configuration models for the lot and the application.
pub mod config;
/// Command parsing and dispatch over a single optional lot.
pub mod manager;
/// Line-oriented session loop connecting a manager to reader and writer.
pub mod repl;
/// Shared utilities.
pub mod util;
