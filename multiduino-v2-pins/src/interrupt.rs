//! External and pin-change interrupt resources.

use crate::port::Register;

/// Dedicated, individually vectored external interrupt lines.
///
/// The board routes exactly two: `INT0` on D2 and `INT1` on D3. This is
/// a fixed property of the pinout, not a derivable rule.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExternalInterrupt {
    /// `INT0`, wired to D2 (`PD2`).
    Int0,
    /// `INT1`, wired to D3 (`PD3`).
    Int1,
}

impl ExternalInterrupt {
    /// The interrupt channel number used when attaching a handler.
    #[inline]
    pub const fn channel(self) -> u8 {
        match self {
            ExternalInterrupt::Int0 => 0,
            ExternalInterrupt::Int1 => 1,
        }
    }
}

/// Value-level `enum` for the three shared pin-change interrupt groups.
///
/// Each group covers one port's pin-change circuitry: one enable bit in
/// `PCICR` plus one `PCMSKn` per-pin mask register. All pins of a port
/// share the group; they differ only in their mask bit.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PcintGroup {
    /// `PCIE0`/`PCMSK0`, covering the `PORTB` pins D8–D13.
    Pcie0,
    /// `PCIE1`/`PCMSK1`, covering the `PORTC` pins D14–D19.
    Pcie1,
    /// `PCIE2`/`PCMSK2`, covering the `PORTD` pins D0–D7.
    Pcie2,
}

impl PcintGroup {
    /// The control register gating all three groups.
    #[inline]
    pub const fn control(self) -> Register {
        Register::Pcicr
    }

    /// This group's enable bit within [`Register::Pcicr`].
    #[inline]
    pub const fn control_bit(self) -> u8 {
        match self {
            PcintGroup::Pcie0 => 0,
            PcintGroup::Pcie1 => 1,
            PcintGroup::Pcie2 => 2,
        }
    }

    /// The group's per-pin enable mask register.
    #[inline]
    pub const fn mask_register(self) -> Register {
        match self {
            PcintGroup::Pcie0 => Register::Pcmsk0,
            PcintGroup::Pcie1 => Register::Pcmsk1,
            PcintGroup::Pcie2 => Register::Pcmsk2,
        }
    }
}

/// A pin's membership in one pin-change interrupt group.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinChange {
    /// The group whose shared interrupt the pin raises.
    pub group: PcintGroup,
    /// The pin's bit within the group's enable mask (0–7).
    pub mask_bit: u8,
}
