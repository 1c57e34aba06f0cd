//! Board-specific functional roles.

use crate::pin::Pin;

/// Board-specific role attached to a logical pin.
///
/// Aliases are documentation: they record what a pin is routed to on
/// the board (per the KiCad netlist) and never change the pin's
/// port/bit/timer identity. A pin may carry several roles at once, for
/// example D13 is both the SPI clock and the on-board LED.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alias {
    /// Serial receive line (net `IO0`).
    SerialRx,
    /// Serial transmit line (net `IO1`).
    SerialTx,
    /// SPI bus clock (net `SCK`).
    SpiSck,
    /// SPI controller-out line (net `MOSI`).
    SpiMosi,
    /// SPI controller-in line (net `MISO`).
    SpiMiso,
    /// Chip select for the SD card, via the U7 buffer (net `SS`).
    SdCardCs,
    /// Chip select for the 23AA02M SRAM (net `CS`).
    SramCs,
    /// SD card presence detect, active low (net `IO8`).
    SdCardDetect,
    /// SD enable / slide-switch state when JP5 is closed.
    SdCardEnable,
    /// 3.3 V rail enable, high = on (JP6).
    Rail3v3Enable,
    /// I2C data line (net `A4/SDA`).
    I2cSda,
    /// I2C clock line (net `A5/SCL`).
    I2cScl,
    /// RTC 32 kHz output when JP3 is closed.
    Rtc32kHz,
    /// RTC SQW/INT output when JP4 is closed.
    RtcSqw,
    /// On-board LED, shared with the SPI clock.
    Led,
    /// Analog input `An`.
    AnalogInput(u8),
}

pub(crate) const fn aliases(pin: Pin) -> &'static [Alias] {
    match pin.number() {
        0 => &[Alias::SerialRx],
        1 => &[Alias::SerialTx],
        8 => &[Alias::SdCardDetect],
        9 => &[Alias::SramCs],
        10 => &[Alias::SdCardCs],
        11 => &[Alias::SpiMosi],
        12 => &[Alias::SpiMiso],
        13 => &[Alias::SpiSck, Alias::Led],
        14 => &[Alias::AnalogInput(0)],
        15 => &[Alias::AnalogInput(1)],
        16 => &[Alias::AnalogInput(2)],
        17 => &[Alias::AnalogInput(3)],
        18 => &[Alias::AnalogInput(4), Alias::I2cSda],
        19 => &[Alias::AnalogInput(5), Alias::I2cScl],
        20 => &[Alias::Rtc32kHz],
        21 => &[Alias::RtcSqw],
        22 => &[Alias::SdCardEnable],
        23 => &[Alias::Rail3v3Enable],
        _ => &[],
    }
}
