//! Cross-module invariants of the Multiduino v2 pin table, checked
//! through the public API only.

use multiduino_v2_pins::{
    analog_input_pin, pins, Alias, Error, Pin, Port, Register, TimerChannel, FIRST_ANALOG_PIN,
    NUM_ANALOG_INPUTS, NUM_DIGITAL_PINS,
};

#[test]
fn pin_count_matches_the_board() {
    assert_eq!(NUM_DIGITAL_PINS, 24);
    assert_eq!(NUM_ANALOG_INPUTS, 6);
    assert_eq!(Pin::all().count(), NUM_DIGITAL_PINS as usize);
}

#[test]
fn d13_is_the_spi_clock_on_port_b() {
    let d13 = pins::D13;
    assert_eq!(d13.port(), Some(Port::B));
    assert_eq!(d13.bit_index(), 5);
    assert_eq!(d13.timer_channel(), None);
    assert_eq!(d13.external_interrupt(), None);
    assert!(d13.aliases().contains(&Alias::SpiSck));

    // same pin-change group as the rest of D8..=D13
    let group = d13.pin_change().unwrap().group;
    for num in 8..=13 {
        let pin = Pin::new(num).unwrap();
        assert_eq!(pin.pin_change().unwrap().group, group);
    }
}

#[test]
fn d9_is_the_sram_chip_select_with_timer1a() {
    let d9 = pins::SPI_SS_SRAM;
    assert_eq!(d9.port(), pins::D13.port());
    assert_eq!(d9.bit_index(), 1);
    assert_eq!(d9.timer_channel(), Some(TimerChannel::Timer1A));
    assert_eq!(d9.aliases(), &[Alias::SramCs]);
}

#[test]
fn the_interrupt_pins_are_d2_and_d3() {
    assert_eq!(pins::D2.external_interrupt().unwrap().channel(), 0);
    let d3 = pins::D3;
    assert_eq!(d3.external_interrupt().unwrap().channel(), 1);
    // D3 holds a timer channel at the same time
    assert_eq!(d3.timer_channel(), Some(TimerChannel::Timer2B));
}

#[test]
fn analog_index_4_is_the_i2c_data_pin() {
    let pin = analog_input_pin(4).unwrap();
    assert_eq!(pin.number(), FIRST_ANALOG_PIN + 4);
    assert_eq!(pin, pins::SDA);
    assert!(pin.aliases().contains(&Alias::I2cSda));
    assert!(pin.aliases().contains(&Alias::AnalogInput(4)));
}

#[test]
fn register_lookups_go_through_the_port_relation() {
    for pin in Pin::all() {
        let registers = pin.registers().unwrap();
        assert_eq!(registers, pin.port().unwrap().registers());
    }
    let d13 = pins::D13.registers().unwrap();
    assert_eq!(d13.direction, Register::Ddrb);
    assert_eq!(d13.output, Register::Portb);
    assert_eq!(d13.input, Register::Pinb);
}

#[test]
fn pin_change_groups_are_distinct_across_the_three_ranges() {
    let groups: Vec<_> = [pins::D0, pins::D8, pins::D14]
        .iter()
        .map(|pin| pin.pin_change().unwrap().group)
        .collect();
    assert_ne!(groups[0], groups[1]);
    assert_ne!(groups[1], groups[2]);
    assert_ne!(groups[0], groups[2]);

    // one PCICR enable bit and one PCMSKn per group
    for pin in Pin::all() {
        if let Some(change) = pin.pin_change() {
            assert!(change.group.control_bit() < 3);
            assert_eq!(change.group.control(), Register::Pcicr);
            assert_eq!(change.mask_bit, pin.bit_index());
        }
    }
}

#[test]
fn out_of_range_indices_are_rejected_not_clamped() {
    assert_eq!(Pin::new(NUM_DIGITAL_PINS), Err(Error::OutOfRange));
    assert_eq!(Pin::new(u8::MAX), Err(Error::OutOfRange));
    assert_eq!(analog_input_pin(NUM_ANALOG_INPUTS), None);
}

#[test]
fn const_contexts_can_consume_the_table() {
    const SCK_MASK: u8 = pins::SCK.bit_mask();
    const SD_CS_PWM: bool = pins::SPI_SS_SD.supports_pwm();
    assert_eq!(SCK_MASK, 1 << 5);
    assert!(SD_CS_PWM);
}
