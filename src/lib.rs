#![no_std]

mod constants;

pub use constants::*;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

pub struct Max72xx<SPI, CS, const NUM_DIGITS: u8> {
    spi: SPI,
    cs: CS,
    framebuffer: [u8; MAX_DIGITS as usize], // ideally NUM_DIGITS
}

impl<SPI, CS, SpiE, PinE, const NUM_DIGITS: u8> Max72xx<SPI, CS, NUM_DIGITS>
where
    SPI: SpiBus<Error = SpiE>,
    CS: OutputPin<Error = PinE>,
{
    /// The SPI bus must be configured for mode 0, MSB first. CS idles high.
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self {
            spi,
            cs,
            framebuffer: [0; MAX_DIGITS as usize],
        }
    }

    pub fn destroy(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    pub fn init(&mut self) -> Result<(), Error<SpiE, PinE>> {
        if NUM_DIGITS == 0 || NUM_DIGITS > MAX_DIGITS {
            return Err(Error::InvalidValue);
        }

        self.write_register(register::SHUTDOWN, register::shutdown_mode::SHUTDOWN)?;
        self.clear()?;
        // scan limit register takes 0-7 for 1-8 digits
        self.write_register(register::SCAN_LIMIT, NUM_DIGITS - 1)?;
        self.write_register(register::DECODE_MODE, register::decode_mode::NO_DECODE)?;
        self.set_intensity(MAX_INTENSITY)?;
        self.write_register(register::SHUTDOWN, register::shutdown_mode::NORMAL_OPERATION)?;

        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), Error<SpiE, PinE>> {
        for digit in 0..Self::digit_count() {
            self.framebuffer[digit as usize] = 0x00;
            self.write_digit(digit)?;
        }
        Ok(())
    }

    pub fn set_all(&mut self) -> Result<(), Error<SpiE, PinE>> {
        for digit in 0..Self::digit_count() {
            self.framebuffer[digit as usize] = 0xFF;
            self.write_digit(digit)?;
        }
        Ok(())
    }

    /// Rewrites the framebuffer to the chip without modifying it, in case
    /// the display RAM is suspected to have diverged.
    pub fn refresh(&mut self) -> Result<(), Error<SpiE, PinE>> {
        for digit in 0..Self::digit_count() {
            self.write_digit(digit)?;
        }
        Ok(())
    }

    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), Error<SpiE, PinE>> {
        if intensity > MAX_INTENSITY {
            return Err(Error::InvalidValue);
        }
        self.write_register(register::INTENSITY, intensity)
    }

    pub fn set_digit(&mut self, digit: u8, segments: u8) -> Result<(), Error<SpiE, PinE>> {
        if digit >= Self::digit_count() {
            return Err(Error::InvalidLocation(digit));
        }
        self.framebuffer[digit as usize] = segments;
        self.write_digit(digit)
    }

    pub fn set_matrix(&mut self, digit_mask: u8, segments: u8) -> Result<(), Error<SpiE, PinE>> {
        for digit in 0..Self::digit_count() {
            self.framebuffer[digit as usize] = if digit_mask & (1 << digit) != 0 {
                segments
            } else {
                0x00
            };
            self.write_digit(digit)?;
        }
        Ok(())
    }

    pub fn set_rows(&mut self, segments: u8) -> Result<(), Error<SpiE, PinE>> {
        for digit in 0..Self::digit_count() {
            self.framebuffer[digit as usize] = segments;
            self.write_digit(digit)?;
        }
        Ok(())
    }

    pub fn set_columns(&mut self, digit_mask: u8) -> Result<(), Error<SpiE, PinE>> {
        for digit in 0..Self::digit_count() {
            self.framebuffer[digit as usize] = if digit_mask & (1 << digit) != 0 {
                0xFF
            } else {
                0x00
            };
            self.write_digit(digit)?;
        }
        Ok(())
    }

    pub fn set_pixel(&mut self, digit: u8, segment: u8, on: bool) -> Result<(), Error<SpiE, PinE>> {
        if digit >= Self::digit_count() {
            return Err(Error::InvalidLocation(digit));
        }
        if segment >= SEGMENTS_PER_DIGIT {
            return Err(Error::InvalidLocation(segment));
        }
        if on {
            self.framebuffer[digit as usize] |= 1 << segment;
        } else {
            self.framebuffer[digit as usize] &= !(1 << segment);
        }
        self.write_digit(digit)
    }

    pub fn framebuffer(&self) -> &[u8; MAX_DIGITS as usize] {
        &self.framebuffer
    }

    fn digit_count() -> u8 {
        if NUM_DIGITS > MAX_DIGITS {
            MAX_DIGITS
        } else {
            NUM_DIGITS
        }
    }

    fn write_digit(&mut self, digit: u8) -> Result<(), Error<SpiE, PinE>> {
        self.write_register(
            register::DIGIT_OFFSET + digit,
            self.framebuffer[digit as usize],
        )
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<SpiE, PinE>> {
        // data latches into the chip on the rising edge of CS, so the bus
        // must be flushed before CS is released
        self.cs.set_low().map_err(Error::Pin)?;
        let transfer = self
            .spi
            .write(&[register, value])
            .and_then(|()| self.spi.flush());
        self.cs.set_high().map_err(Error::Pin)?;
        transfer.map_err(Error::Spi)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<SpiE, PinE> {
    Spi(SpiE),
    Pin(PinE),
    InvalidValue,
    InvalidLocation(u8),
}
