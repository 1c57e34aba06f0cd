//! Logical pin identifiers and the per-pin resource lookups.
//!
//! A [`Pin`] is the abstract index application code addresses an I/O
//! line by. The constructor checks the index against the board's pin
//! range once; after that, every lookup is a total `const fn` over the
//! fixed mapping and can never read outside the table.

use crate::alias::Alias;
use crate::interrupt::{ExternalInterrupt, PcintGroup, PinChange};
use crate::port::{Port, PortRegisters};
use crate::pwm::TimerChannel;
use crate::Error;

/// Value-level identifier for one of the board's logical pins.
///
/// Holding a `Pin` proves the index is within
/// `0..`[`NUM_DIGITAL_PINS`](crate::NUM_DIGITAL_PINS).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pin(u8);

impl Pin {
    /// Checks `num` against the board's logical pin range.
    #[inline]
    pub const fn new(num: u8) -> Result<Self, Error> {
        if num < crate::NUM_DIGITAL_PINS {
            Ok(Pin(num))
        } else {
            Err(Error::OutOfRange)
        }
    }

    /// The logical pin number (`0..NUM_DIGITAL_PINS`).
    #[inline]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Iterator over every logical pin, in index order.
    pub fn all() -> impl Iterator<Item = Pin> {
        (0..crate::NUM_DIGITAL_PINS).map(Pin)
    }

    /// The port containing this pin.
    ///
    /// Every pin of this variant is wired, so the answer is always
    /// `Some`; the sentinel stays in the signature for variants that
    /// reserve indices without connecting them to silicon.
    #[inline]
    pub const fn port(self) -> Option<Port> {
        Some(match self.0 {
            0..=7 => Port::D,
            8..=13 => Port::B,
            14..=19 => Port::C,
            _ => Port::E,
        })
    }

    /// The pin's bit position within its port (0–7).
    #[inline]
    pub const fn bit_index(self) -> u8 {
        match self.0 {
            0..=7 => self.0,
            8..=13 => self.0 - 8,
            14..=19 => self.0 - 14,
            _ => self.0 - 20,
        }
    }

    /// Single-bit mask selecting this pin within its port's registers.
    #[inline]
    pub const fn bit_mask(self) -> u8 {
        1 << self.bit_index()
    }

    /// The register triple backing this pin's port.
    ///
    /// Answers [`Error::NoPort`] for an index whose port is the "not
    /// wired" sentinel; no such index exists on this variant.
    #[inline]
    pub const fn registers(self) -> Result<PortRegisters, Error> {
        match self.port() {
            Some(port) => Ok(port.registers()),
            None => Err(Error::NoPort),
        }
    }

    /// The output-compare unit driving this pin, if PWM is wired here.
    ///
    /// Only the six Uno-compatible PWM pins are mapped. `PE0`/`PE1`
    /// carry `OC4A`/`OC4B` in silicon but answer `None` until Timer 4
    /// support is added.
    #[inline]
    pub const fn timer_channel(self) -> Option<TimerChannel> {
        match self.0 {
            3 => Some(TimerChannel::Timer2B),
            5 => Some(TimerChannel::Timer0B),
            6 => Some(TimerChannel::Timer0A),
            9 => Some(TimerChannel::Timer1A),
            10 => Some(TimerChannel::Timer1B),
            11 => Some(TimerChannel::Timer2A),
            _ => None,
        }
    }

    /// Whether `analogWrite`-style PWM output is available on this pin.
    #[inline]
    pub const fn supports_pwm(self) -> bool {
        self.timer_channel().is_some()
    }

    /// The dedicated external interrupt line on this pin, if any.
    #[inline]
    pub const fn external_interrupt(self) -> Option<ExternalInterrupt> {
        match self.0 {
            2 => Some(ExternalInterrupt::Int0),
            3 => Some(ExternalInterrupt::Int1),
            _ => None,
        }
    }

    /// Pin-change interrupt membership, if the pin is routed to one of
    /// the three shared groups.
    ///
    /// The extended `PE` pins (D20–D23) are not routed to the
    /// pin-change circuitry in this mapping and answer `None`.
    #[inline]
    pub const fn pin_change(self) -> Option<PinChange> {
        let group = match self.0 {
            0..=7 => PcintGroup::Pcie2,
            8..=13 => PcintGroup::Pcie0,
            14..=19 => PcintGroup::Pcie1,
            _ => return None,
        };
        Some(PinChange {
            group,
            mask_bit: self.bit_index(),
        })
    }

    /// Board-specific roles attached to this pin (empty when none).
    #[inline]
    pub const fn aliases(self) -> &'static [Alias] {
        crate::alias::aliases(self)
    }
}

impl TryFrom<u8> for Pin {
    type Error = Error;

    #[inline]
    fn try_from(num: u8) -> Result<Self, Error> {
        Pin::new(num)
    }
}

impl From<Pin> for u8 {
    #[inline]
    fn from(pin: Pin) -> u8 {
        pin.number()
    }
}

/// Maps an analog input index (`A0`–`A5`) to its logical pin.
///
/// The analog inputs occupy a contiguous suffix of the pin range, so
/// the mapping is a plain offset from
/// [`FIRST_ANALOG_PIN`](crate::FIRST_ANALOG_PIN). An out-of-range index
/// answers `None`; it is a capability query, not a precondition.
#[inline]
pub const fn analog_input_pin(index: u8) -> Option<Pin> {
    if index < crate::NUM_ANALOG_INPUTS {
        Some(Pin(crate::FIRST_ANALOG_PIN + index))
    } else {
        None
    }
}
