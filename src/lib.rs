//! Driver for the SC1628D LED/keyscan controller.
//!
//! The chip multiplexes a 7-segment display across five character
//! positions on seven grid lines and scans a 2x10 key matrix, behind a
//! 3-wire serial bus (STB, CLK, DIO) that this driver bit-bangs through
//! embedded-hal pins.

#![no_std]

mod constants;
mod remap;

pub use constants::*;
pub use remap::{inverted_remap, normal_remap, Remap, RemapFn};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use num_traits::ToPrimitive;

pub struct SC1628D<STB, CLK, DIO, DELAY> {
    stb: STB,
    clk: CLK,
    dio: DIO,
    delay: DELAY,
    bit_delay_us: u32,
    control: u8,
    font: &'static Font,
    remap: Remap,
    segments: [u8; NUM_DIGITS as usize],
}

impl<STB, CLK, DIO, DELAY, E> SC1628D<STB, CLK, DIO, DELAY>
where
    STB: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    DIO: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
{
    /// Creates a driver over the three bus pins.
    ///
    /// DIO must be an open-drain output with a pull-up so the line can
    /// be released and read back during key scans; STB and CLK are
    /// plain push-pull outputs.
    pub fn new(stb: STB, clk: CLK, dio: DIO, delay: DELAY) -> Self {
        Self {
            stb,
            clk,
            dio,
            delay,
            bit_delay_us: DEFAULT_BIT_DELAY_US,
            control: command::display_control::POWER_ON | MAX_BRIGHTNESS,
            font: &NORMAL_FONT,
            remap: Remap::Normal,
            segments: [0; NUM_DIGITS as usize],
        }
    }

    pub fn destroy(self) -> (STB, CLK, DIO) {
        (self.stb, self.clk, self.dio)
    }

    /// Drives all three bus lines to their idle-high state. Call once
    /// before the first display or key operation.
    pub fn init(&mut self) -> Result<(), SC1628DError<E>> {
        self.stb.set_high()?;
        self.clk.set_high()?;
        self.dio.set_high()?;
        Ok(())
    }

    pub fn set_bit_delay_us(&mut self, bit_delay_us: u32) {
        self.bit_delay_us = bit_delay_us;
    }

    /// Stores the intensity (0-7) and power flag. Takes effect on the
    /// next display refresh, not immediately.
    pub fn set_brightness(&mut self, brightness: u8, on: bool) -> Result<(), SC1628DError<E>> {
        if brightness > MAX_BRIGHTNESS {
            return Err(SC1628DError::InvalidValue);
        }
        self.control = if on {
            command::display_control::POWER_ON | brightness
        } else {
            brightness
        };
        Ok(())
    }

    pub fn set_font(&mut self, font: &'static Font) {
        self.font = font;
    }

    pub fn set_remap(&mut self, remap: Remap) {
        self.remap = remap;
    }

    pub fn clear(&mut self) -> Result<(), SC1628DError<E>> {
        self.display_digits(&[DIGIT_BLANK; NUM_DIGITS as usize], 0)
    }

    /// Looks up `code` in the active font, stores it at `pos`
    /// (0 = leftmost) and refreshes the display.
    pub fn display_digit(&mut self, code: u8, pos: u8) -> Result<(), SC1628DError<E>> {
        let mask = self.font_mask(code)?;
        self.display_segment(mask, pos)
    }

    /// Renders consecutive font codes starting at `pos` and refreshes
    /// the display once.
    pub fn display_digits(&mut self, codes: &[u8], pos: u8) -> Result<(), SC1628DError<E>> {
        self.check_span(pos, codes.len())?;
        let mut masks = [0u8; NUM_DIGITS as usize];
        for (mask, &code) in masks.iter_mut().zip(codes) {
            *mask = self.font_mask(code)?;
        }
        let start = pos as usize;
        self.segments[start..start + codes.len()].copy_from_slice(&masks[..codes.len()]);
        self.refresh()
    }

    /// Stores a raw segment mask at `pos`, bypassing the font, and
    /// refreshes the display.
    pub fn display_segment(&mut self, mask: u8, pos: u8) -> Result<(), SC1628DError<E>> {
        if pos >= NUM_DIGITS {
            return Err(SC1628DError::InvalidLocation(pos));
        }
        self.segments[pos as usize] = mask;
        self.refresh()
    }

    pub fn display_segments(&mut self, masks: &[u8], pos: u8) -> Result<(), SC1628DError<E>> {
        self.check_span(pos, masks.len())?;
        let start = pos as usize;
        self.segments[start..start + masks.len()].copy_from_slice(masks);
        self.refresh()
    }

    /// Shows a decimal value right-aligned over the four character
    /// positions, with a leading minus for negatives. The symbols
    /// position is left untouched.
    pub fn display_value<T>(&mut self, value: T) -> Result<(), SC1628DError<E>>
    where
        T: ToPrimitive,
    {
        let codes = Self::value_codes(value, 10)?;
        self.display_digits(&codes, 0)
    }

    /// Hexadecimal variant of [`Self::display_value`].
    pub fn display_hex_value<T>(&mut self, value: T) -> Result<(), SC1628DError<E>>
    where
        T: ToPrimitive,
    {
        let codes = Self::value_codes(value, 16)?;
        self.display_digits(&codes, 0)
    }

    /// Polls the key matrix.
    ///
    /// Returns a mask with K1 presses in bits 0-9 and K2 presses in
    /// bits 16-25, one bit per scanned key column. Each raw byte covers
    /// two columns: bits 0/3 are the K1 contacts, bits 1/4 the K2
    /// contacts.
    pub fn get_buttons(&mut self) -> Result<u32, SC1628DError<E>> {
        let mut buttons = 0u32;
        self.start()?;
        self.write_command(command::DATA_READ)?;
        // the chip advances its read pointer itself, one command reads
        // all five bytes
        for i in 0..KEY_BYTES {
            let keys = self.receive_data()? as u32;
            buttons |= ((keys & 0x01) | ((keys & 0x08) >> 2)) << (2 * i);
            buttons |= (((keys & 0x02) >> 1) | ((keys & 0x10) >> 3)) << (2 * i + 16);
        }
        self.stop()?;
        Ok(buttons)
    }

    fn font_mask(&self, code: u8) -> Result<u8, SC1628DError<E>> {
        self.font
            .get(code as usize)
            .copied()
            .ok_or(SC1628DError::InvalidValue)
    }

    fn check_span(&self, pos: u8, len: usize) -> Result<(), SC1628DError<E>> {
        if pos >= NUM_DIGITS || pos as usize + len > NUM_DIGITS as usize {
            return Err(SC1628DError::InvalidLocation(pos));
        }
        Ok(())
    }

    fn value_codes<T>(value: T, base: u32) -> Result<[u8; 4], SC1628DError<E>>
    where
        T: ToPrimitive,
    {
        let value = value.to_i32().ok_or(SC1628DError::InvalidValue)?;
        let mut num = value.unsigned_abs();
        let mut codes = [DIGIT_BLANK; 4];
        let mut index = codes.len();
        loop {
            if index == 0 {
                return Err(SC1628DError::InvalidValue);
            }
            index -= 1;
            codes[index] = (num % base) as u8;
            num /= base;
            if num == 0 {
                break;
            }
        }
        if value < 0 {
            if index == 0 {
                return Err(SC1628DError::InvalidValue);
            }
            codes[index - 1] = DIGIT_MINUS;
        }
        Ok(codes)
    }

    // The chip keeps separate registers behind each command, so the
    // refresh order is fixed: data mode, address + matrix, display
    // mode, control.
    fn refresh(&mut self) -> Result<(), SC1628DError<E>> {
        let matrix = self.remap.apply(&self.segments);
        self.write_matrix(&matrix)?;

        self.start()?;
        self.write_command(command::DISPLAY_MODE | command::display_mode::GRID7_SEG11)?;
        self.stop()?;

        self.start()?;
        self.write_command(command::DISPLAY_CONTROL | (self.control & 0x0F))?;
        self.stop()
    }

    fn write_matrix(&mut self, matrix: &[u16; NUM_GRIDS as usize]) -> Result<(), SC1628DError<E>> {
        self.start()?;
        self.write_command(command::DATA_WRITE)?;
        self.stop()?;

        self.start()?;
        self.write_command(command::ADDRESS_SET)?;
        for &word in matrix {
            self.write_data(word)?;
        }
        self.stop()
    }

    fn bit_delay(&mut self) {
        self.delay.delay_us(self.bit_delay_us);
    }

    fn start(&mut self) -> Result<(), SC1628DError<E>> {
        self.stb.set_low()?;
        self.bit_delay();
        Ok(())
    }

    fn stop(&mut self) -> Result<(), SC1628DError<E>> {
        self.stb.set_high()?;
        self.bit_delay();
        Ok(())
    }

    fn write_command(&mut self, value: u8) -> Result<(), SC1628DError<E>> {
        self.clock_out(u16::from(value), 8)
    }

    fn write_data(&mut self, value: u16) -> Result<(), SC1628DError<E>> {
        self.clock_out(value, 16)
    }

    /// Shifts `bits` bits out on DIO, least significant first; the chip
    /// latches on each rising clock edge. Ends with one settle delay.
    fn clock_out(&mut self, value: u16, bits: u8) -> Result<(), SC1628DError<E>> {
        let mut data = value;
        for _ in 0..bits {
            self.clk.set_low()?;
            if data & 0x01 != 0 {
                self.dio.set_high()?;
            } else {
                self.dio.set_low()?;
            }
            self.bit_delay();
            self.clk.set_high()?;
            self.bit_delay();
            data >>= 1;
        }
        self.bit_delay();
        Ok(())
    }

    fn receive_data(&mut self) -> Result<u8, SC1628DError<E>> {
        // release the line so the pull-up can assert it; the chip
        // drives key bits onto DIO while CLK is low
        self.dio.set_high()?;
        let mut value = 0u8;
        for _ in 0..8 {
            value >>= 1;
            self.clk.set_low()?;
            self.bit_delay();
            if self.dio.is_high()? {
                value |= 0x80;
            }
            self.clk.set_high()?;
            self.bit_delay();
        }
        Ok(value)
    }
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SC1628DError<E> {
    PinError(E),
    InvalidValue,
    InvalidLocation(u8),
}

impl<E> From<E> for SC1628DError<E> {
    fn from(error: E) -> Self {
        SC1628DError::PinError(error)
    }
}
