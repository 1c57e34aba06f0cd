//! Pin mapping for the Multiduino v2 board (ATmega328PB)
//!
//! This crate is the board's logical-to-physical pin table. For each
//! logical pin `D0`–`D23` it answers, in O(1), which port and bit
//! implement it, which timer compare unit can drive it, which interrupt
//! resources it is routed to, and which board-level roles it carries.
//! It contains no driver logic and touches no registers; resolving a
//! [`Register`] name to a memory-mapped location is the hosting HAL's
//! concern.
//!
//! Pin assignments are verified against the Multiduino.net KiCad
//! netlist. The Uno-compatible pins (`D0`–`D13`, `A0`–`A5`) are
//! identical to the Uno R3; the extended pins `D20`–`D23` map to
//! `PE0`–`PE3`.
//!
//! ```
//! use multiduino_v2_pins::{pins, Port};
//!
//! let sck = pins::SCK;
//! assert_eq!(sck.port(), Some(Port::B));
//! assert_eq!(sck.bit_mask(), 1 << 5);
//! assert!(!sck.supports_pwm());
//! ```
//!
//! Every accessor is a `const fn` over fixed data: pure, side-effect
//! free and safe to call from any thread or interrupt context.
//!
//! # Crate features
//!
//! * **defmt** -
//!   Implement `defmt::Format` for the mapping types.

#![warn(missing_docs)]
#![no_std]

mod alias;
mod interrupt;
mod pin;
pub mod pins;
mod port;
mod pwm;

pub use alias::Alias;
pub use interrupt::{ExternalInterrupt, PcintGroup, PinChange};
pub use pin::{analog_input_pin, Pin};
pub use port::{Port, PortRegisters, Register};
pub use pwm::TimerChannel;

/// Total number of logical pins (`D0`–`D23`).
pub const NUM_DIGITAL_PINS: u8 = 24;

/// Number of analog inputs (`A0`–`A5`).
pub const NUM_ANALOG_INPUTS: u8 = 6;

/// Logical pin carrying analog input 0. The analog inputs occupy the
/// contiguous pin range starting here, so `An` is `D14 + n`.
pub const FIRST_ANALOG_PIN: u8 = 14;

/// Errors reported by the range-checked constructors and accessors.
///
/// Sentinel answers (`None` from the timer/interrupt lookups, an empty
/// alias slice) are valid negative results, not errors; only a caller
/// presenting an invalid index ever sees one of these.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The index lies outside the logical-pin or analog-input range.
    OutOfRange,
    /// The pin index is reserved but not wired to a port on this variant.
    NoPort,
}
