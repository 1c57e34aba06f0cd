//! I/O ports and their register triples.
//!
//! The ATmega328PB exposes four GPIO ports; `PORTA` does not exist on
//! this part, and an index that is reserved without being wired to any
//! port is represented as `Option::<Port>::None` by the pin lookups.
//! Each port is backed by a direction/output/input register triple.
//! This module only names those registers; it never dereferences them.

/// Value-level `enum` for a pin's I/O port.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    /// `PORTB` (D8–D13, the SPI pins).
    B,
    /// `PORTC` (D14–D19, the analog inputs).
    C,
    /// `PORTD` (D0–D7).
    D,
    /// `PORTE` (D20–D23, the extended pins).
    E,
}

/// Value-level `enum` naming the I/O registers the mapping refers to.
///
/// These are handles, not addresses: the register-access layer decides
/// what a name resolves to on a given target.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    /// Port B direction register (`DDRB`).
    Ddrb,
    /// Port B output register (`PORTB`).
    Portb,
    /// Port B input register (`PINB`).
    Pinb,
    /// Port C direction register (`DDRC`).
    Ddrc,
    /// Port C output register (`PORTC`).
    Portc,
    /// Port C input register (`PINC`).
    Pinc,
    /// Port D direction register (`DDRD`).
    Ddrd,
    /// Port D output register (`PORTD`).
    Portd,
    /// Port D input register (`PIND`).
    Pind,
    /// Port E direction register (`DDRE`).
    Ddre,
    /// Port E output register (`PORTE`).
    Porte,
    /// Port E input register (`PINE`).
    Pine,
    /// Pin-change interrupt control register (`PCICR`).
    Pcicr,
    /// Pin-change mask register for group 0 (`PCMSK0`).
    Pcmsk0,
    /// Pin-change mask register for group 1 (`PCMSK1`).
    Pcmsk1,
    /// Pin-change mask register for group 2 (`PCMSK2`).
    Pcmsk2,
}

/// The direction/output/input register triple backing one [`Port`].
///
/// Fixed by the silicon, not by the board: the relation from [`Port`] to
/// its triple never changes after power-up.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortRegisters {
    /// Data direction register (`DDRx`).
    pub direction: Register,
    /// Output state register (`PORTx`).
    pub output: Register,
    /// Input read register (`PINx`).
    pub input: Register,
}

impl Port {
    /// Number of I/O lines one register triple covers.
    pub const WIDTH: u8 = 8;

    /// The fixed register triple for this port.
    #[inline]
    pub const fn registers(self) -> PortRegisters {
        match self {
            Port::B => PortRegisters {
                direction: Register::Ddrb,
                output: Register::Portb,
                input: Register::Pinb,
            },
            Port::C => PortRegisters {
                direction: Register::Ddrc,
                output: Register::Portc,
                input: Register::Pinc,
            },
            Port::D => PortRegisters {
                direction: Register::Ddrd,
                output: Register::Portd,
                input: Register::Pind,
            },
            Port::E => PortRegisters {
                direction: Register::Ddre,
                output: Register::Porte,
                input: Register::Pine,
            },
        }
    }
}
