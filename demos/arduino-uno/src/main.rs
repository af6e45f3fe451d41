#![no_std]
#![no_main]

use arduino_hal::prelude::*;
use arduino_hal::spi::{DataOrder, SerialClockRate, Settings};
use max72xx::Max72xx;
use panic_halt as _;

const NUM_DIGITS: u8 = 8; // MAX72xx scans 1-8 digits (matrix columns)

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);
    let mut serial = arduino_hal::default_serial!(dp, pins, 57600);

    let settings = Settings {
        data_order: DataOrder::MostSignificantFirst,
        clock: SerialClockRate::OscfOver2,
        mode: embedded_hal::spi::MODE_0,
    };
    let (spi, cs) = arduino_hal::Spi::new(
        dp.SPI,
        pins.d13.into_output(),
        pins.d11.into_output(),
        pins.d12.into_pull_up_input(),
        pins.d10.into_output(),
        settings,
    );

    let mut display: Max72xx<_, _, NUM_DIGITS> = Max72xx::new(spi, cs);
    display.init().unwrap();

    ufmt::uwriteln!(&mut serial, "Fading...").unwrap_infallible();
    display.set_all().unwrap();
    for intensity in (0..=max72xx::MAX_INTENSITY).rev() {
        display.set_intensity(intensity).unwrap();
        arduino_hal::delay_ms(100);
    }
    display.set_intensity(max72xx::MAX_INTENSITY).unwrap();

    ufmt::uwriteln!(&mut serial, "Scanning rows and columns...").unwrap_infallible();
    for segment in 0..8u8 {
        display.set_rows(1 << segment).unwrap();
        arduino_hal::delay_ms(100);
    }
    for digit in 0..NUM_DIGITS {
        display.set_columns(1 << digit).unwrap();
        arduino_hal::delay_ms(100);
    }

    ufmt::uwriteln!(&mut serial, "Checkerboard...").unwrap_infallible();
    for _ in 0..4 {
        display.set_matrix(0b0101_0101, 0b0101_0101).unwrap();
        arduino_hal::delay_ms(250);
        display.set_matrix(0b1010_1010, 0b1010_1010).unwrap();
        arduino_hal::delay_ms(250);
    }
    display.clear().unwrap();

    ufmt::uwriteln!(&mut serial, "Bouncing pixel...").unwrap_infallible();
    let mut digit: u8 = 0;
    let mut segment: u8 = 0;
    loop {
        display.set_pixel(digit, segment, true).unwrap();
        arduino_hal::delay_ms(50);
        display.set_pixel(digit, segment, false).unwrap();

        segment = (segment + 1) % 8;
        if segment == 0 {
            digit = (digit + 1) % NUM_DIGITS;
        }
    }
}
