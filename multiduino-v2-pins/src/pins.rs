//! Named pin constants for the Multiduino v2.
//!
//! These names form the stable contract consumed by sketches and
//! drivers; renaming or renumbering any of them is a breaking change.

use crate::pin::Pin;
use crate::Error;

// Evaluated at compile time; an out-of-range literal fails the build.
const fn pin(num: u8) -> Pin {
    match Pin::new(num) {
        Ok(pin) => pin,
        Err(Error::OutOfRange | Error::NoPort) => {
            panic!("pin constant outside the board's pin range")
        }
    }
}

macro_rules! digital_pins {
    ($($num:literal: $pad:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Logical pin `D" $num "`, on pad `" $pad "`."]
                pub const [<D $num>]: Pin = pin($num);
            )*
        }
    };
}

macro_rules! analog_pins {
    ($($index:literal),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Analog input `A" $index "` (the digital pin at `FIRST_ANALOG_PIN + " $index "`)."]
                pub const [<A $index>]: Pin = pin(crate::FIRST_ANALOG_PIN + $index);
            )*
        }
    };
}

digital_pins!(
    0: PD0, 1: PD1, 2: PD2, 3: PD3, 4: PD4, 5: PD5,
    6: PD6, 7: PD7, 8: PB0, 9: PB1, 10: PB2, 11: PB3,
    12: PB4, 13: PB5, 14: PC0, 15: PC1, 16: PC2, 17: PC3,
    18: PC4, 19: PC5, 20: PE0, 21: PE1, 22: PE2, 23: PE3,
);

analog_pins!(0, 1, 2, 3, 4, 5);

/// SPI chip select (`PB2`, net `SS`), selecting the SD card.
pub const SS: Pin = D10;
/// SPI controller-out line (`PB3`, net `MOSI`).
pub const MOSI: Pin = D11;
/// SPI controller-in line (`PB4`, net `MISO`).
pub const MISO: Pin = D12;
/// SPI clock (`PB5`, net `SCK`), shared with the on-board LED.
pub const SCK: Pin = D13;

/// I2C data line (`PC4`, net `A4/SDA`).
pub const SDA: Pin = A4;
/// I2C clock line (`PC5`, net `A5/SCL`).
pub const SCL: Pin = A5;

/// On-board LED, shared with [`SCK`].
pub const LED_BUILTIN: Pin = D13;

/// SD card chip select (`PB2`, net `SS`).
pub const SPI_SS_SD: Pin = D10;
/// 23AA02M SRAM chip select (`PB1`, net `CS`).
pub const SPI_SS_SRAM: Pin = D9;
/// SD card presence detect, active low (`PB0`, net `IO8`).
pub const SD_DET: Pin = D8;
/// SD enable / slide-switch state when JP5 is closed (`PE2`).
pub const SD_EN: Pin = D22;
/// 3.3 V rail enable, high = on, via JP6 (`PE3`).
pub const RAIL_3V3_EN: Pin = D23;
/// RTC 32 kHz output when JP3 is closed (`PE0`).
pub const RTC_32K: Pin = D20;
/// RTC SQW/INT output when JP4 is closed (`PE1`).
pub const RTC_SQW: Pin = D21;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_pins_keep_their_numbers() {
        assert_eq!(SS.number(), 10);
        assert_eq!(MOSI.number(), 11);
        assert_eq!(MISO.number(), 12);
        assert_eq!(SCK.number(), 13);
        assert_eq!(SDA.number(), 18);
        assert_eq!(SCL.number(), 19);
        assert_eq!(SPI_SS_SRAM.number(), 9);
        assert_eq!(SD_DET.number(), 8);
        assert_eq!(RAIL_3V3_EN.number(), 23);
    }

    #[test]
    fn analog_constants_sit_on_the_analog_suffix() {
        assert_eq!(A0.number(), crate::FIRST_ANALOG_PIN);
        assert_eq!(A5.number(), crate::FIRST_ANALOG_PIN + 5);
        assert_eq!(A4, SDA);
    }
}
