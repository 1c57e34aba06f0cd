//! Timer output-compare units usable for PWM.

/// Value-level `enum` for the output-compare units wired for PWM.
///
/// A compare unit drives exactly one pin, so no two pins share a
/// variant. Only the six Uno-compatible channels are listed: the
/// ATmega328PB also has `OC4A`/`OC4B` on `PE0`/`PE1`, which stay
/// unmapped until Timer 4 support is added.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerChannel {
    /// `OC0A`: timer 0, output A (D6).
    Timer0A,
    /// `OC0B`: timer 0, output B (D5).
    Timer0B,
    /// `OC1A`: timer 1, output A (D9).
    Timer1A,
    /// `OC1B`: timer 1, output B (D10).
    Timer1B,
    /// `OC2A`: timer 2, output A (D11).
    Timer2A,
    /// `OC2B`: timer 2, output B (D3).
    Timer2B,
}

impl TimerChannel {
    /// The timer the compare unit belongs to.
    #[inline]
    pub const fn timer(self) -> u8 {
        match self {
            TimerChannel::Timer0A | TimerChannel::Timer0B => 0,
            TimerChannel::Timer1A | TimerChannel::Timer1B => 1,
            TimerChannel::Timer2A | TimerChannel::Timer2B => 2,
        }
    }
}
