//! Host-side doubles for the display and the potentiometer bus.

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

use crate::ui::display::CharDisplay;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayOp {
    Init,
    Clear,
    Cursor(u8, u8),
    Write(String),
}

/// Records every display call.
#[derive(Default)]
pub struct RecordingDisplay {
    pub ops: Vec<DisplayOp>,
}

impl RecordingDisplay {
    /// Each redraw starts with exactly one clear.
    pub fn redraws(&self) -> usize {
        self.ops.iter().filter(|op| **op == DisplayOp::Clear).count()
    }

    /// Text of the two rows written by the latest redraw.
    pub fn last_frame(&self) -> Option<(String, String)> {
        let start = self.ops.iter().rposition(|op| *op == DisplayOp::Clear)?;
        match &self.ops[start + 1..] {
            [DisplayOp::Write(a), DisplayOp::Cursor(1, 0), DisplayOp::Write(b)] => {
                Some((a.clone(), b.clone()))
            }
            _ => None,
        }
    }
}

impl CharDisplay for RecordingDisplay {
    fn init(&mut self) {
        self.ops.push(DisplayOp::Init);
    }

    fn clear(&mut self) {
        self.ops.push(DisplayOp::Clear);
    }

    fn set_cursor(&mut self, row: u8, col: u8) {
        self.ops.push(DisplayOp::Cursor(row, col));
    }

    fn write_str(&mut self, text: &str) {
        self.ops.push(DisplayOp::Write(text.to_string()));
    }
}

/// I²C bus that records writes and can refuse the next `failures` of them.
#[derive(Default)]
pub struct RecordingBus {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub failures: u32,
    pub attempts: u32,
}

impl RecordingBus {
    pub fn failing(failures: u32) -> Self {
        Self {
            failures,
            ..Self::default()
        }
    }
}

impl ErrorType for RecordingBus {
    type Error = ErrorKind;
}

impl I2c for RecordingBus {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), ErrorKind> {
        self.attempts += 1;
        if self.failures > 0 {
            self.failures -= 1;
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        for op in operations.iter() {
            if let Operation::Write(bytes) = op {
                self.writes.push((address, bytes.to_vec()));
            }
        }
        Ok(())
    }
}
