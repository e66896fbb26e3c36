//! 1602 character LCD (HD44780-compatible) wrapper.
//!
//! The interface only needs three primitives - clear, position the cursor,
//! write text - captured by [`CharDisplay`]. [`Lcd1602`] implements them
//! over six GPIO lines in 4-bit mode.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::LCD_ROWS;

/// Character-cell output primitive driven by the interface scheduler.
pub trait CharDisplay {
    /// Bring the controller into a known state. Called once by `init`.
    fn init(&mut self);
    fn clear(&mut self);
    fn set_cursor(&mut self, row: u8, col: u8);
    fn write_str(&mut self, text: &str);
}

// HD44780 instruction set (subset)
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_INCREMENT: u8 = 0x06;
const CMD_DISPLAY_OFF: u8 = 0x08;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FUNCTION_4BIT_2LINE: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM address of the first cell of each row.
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// HD44780 in 4-bit mode: RS, EN and D4..D7. R/W is tied low.
pub struct Lcd1602<P, D> {
    rs: P,
    en: P,
    data: [P; 4],
    delay: D,
}

impl<P, D> Lcd1602<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self { rs, en, data, delay }
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            let _ = if nibble & (1 << bit) != 0 {
                pin.set_high()
            } else {
                pin.set_low()
            };
        }
        let _ = self.en.set_high();
        self.delay.delay_us(1);
        let _ = self.en.set_low();
        // Most instructions finish within 37 µs.
        self.delay.delay_us(50);
    }

    fn send(&mut self, byte: u8, is_data: bool) {
        let _ = if is_data {
            self.rs.set_high()
        } else {
            self.rs.set_low()
        };
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
    }

    fn command(&mut self, cmd: u8) {
        self.send(cmd, false);
    }
}

impl<P, D> CharDisplay for Lcd1602<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn init(&mut self) {
        let _ = self.rs.set_low();
        let _ = self.en.set_low();
        self.delay.delay_ms(50);

        // Reset-by-instruction sequence, then switch to 4-bit.
        self.write_nibble(0x03);
        self.delay.delay_ms(5);
        self.write_nibble(0x03);
        self.delay.delay_ms(5);
        self.write_nibble(0x03);
        self.delay.delay_us(150);
        self.write_nibble(0x02);

        self.command(CMD_FUNCTION_4BIT_2LINE);
        self.command(CMD_DISPLAY_OFF);
        self.clear();
        self.command(CMD_ENTRY_INCREMENT);
        self.command(CMD_DISPLAY_ON);
    }

    fn clear(&mut self) {
        self.command(CMD_CLEAR);
        self.delay.delay_ms(2);
    }

    fn set_cursor(&mut self, row: u8, col: u8) {
        let row = usize::from(row.min(LCD_ROWS - 1));
        self.command(CMD_SET_DDRAM | (ROW_OFFSETS[row] + (col & 0x3F)));
    }

    fn write_str(&mut self, text: &str) {
        for c in text.chars() {
            let byte = if c.is_ascii() { c as u8 } else { b'?' };
            self.send(byte, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Lines {
        rs: bool,
        data: [bool; 4],
        /// (rs, nibble) latched on every falling edge of EN.
        latched: Vec<(bool, u8)>,
    }

    enum Role {
        Rs,
        En,
        Data(usize),
    }

    struct FakePin {
        lines: Rc<RefCell<Lines>>,
        role: Role,
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            let mut lines = self.lines.borrow_mut();
            match self.role {
                Role::Rs => lines.rs = false,
                Role::En => {
                    if self.high {
                        let nibble = lines
                            .data
                            .iter()
                            .enumerate()
                            .fold(0u8, |acc, (bit, &on)| acc | (u8::from(on) << bit));
                        let rs = lines.rs;
                        lines.latched.push((rs, nibble));
                    }
                }
                Role::Data(i) => lines.data[i] = false,
            }
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            let mut lines = self.lines.borrow_mut();
            match self.role {
                Role::Rs => lines.rs = true,
                Role::En => {}
                Role::Data(i) => lines.data[i] = true,
            }
            self.high = true;
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn lcd() -> (Lcd1602<FakePin, NoDelay>, Rc<RefCell<Lines>>) {
        let lines = Rc::new(RefCell::new(Lines::default()));
        let pin = |role| FakePin {
            lines: lines.clone(),
            role,
            high: false,
        };
        let data = [pin(Role::Data(0)), pin(Role::Data(1)), pin(Role::Data(2)), pin(Role::Data(3))];
        let lcd = Lcd1602::new(pin(Role::Rs), pin(Role::En), data, NoDelay);
        (lcd, lines)
    }

    #[test]
    fn init_enters_four_bit_mode_then_configures() {
        let (mut lcd, lines) = lcd();
        lcd.init();
        let nibbles: Vec<u8> = lines.borrow().latched.iter().map(|&(_, n)| n).collect();
        assert_eq!(&nibbles[..4], &[0x3, 0x3, 0x3, 0x2]);
        // 0x28, 0x08, 0x01, 0x06, 0x0C as high/low nibble pairs
        assert_eq!(&nibbles[4..], &[0x2, 0x8, 0x0, 0x8, 0x0, 0x1, 0x0, 0x6, 0x0, 0xC]);
        assert!(lines.borrow().latched.iter().all(|&(rs, _)| !rs));
    }

    #[test]
    fn text_is_sent_as_data() {
        let (mut lcd, lines) = lcd();
        lcd.write_str("A");
        assert_eq!(lines.borrow().latched, vec![(true, 0x4), (true, 0x1)]);
    }

    #[test]
    fn non_ascii_becomes_question_mark() {
        let (mut lcd, lines) = lcd();
        lcd.write_str("µ");
        assert_eq!(lines.borrow().latched, vec![(true, 0x3), (true, 0xF)]);
    }

    #[test]
    fn cursor_addresses_second_row() {
        let (mut lcd, lines) = lcd();
        lcd.set_cursor(1, 3);
        // 0x80 | 0x43
        assert_eq!(lines.borrow().latched, vec![(false, 0xC), (false, 0x3)]);
    }
}
