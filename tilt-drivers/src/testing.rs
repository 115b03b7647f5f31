//! Shared I2C test doubles

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use embedded_hal_02::blocking::i2c::{Write, WriteRead};

/// Write-only I2C device that logs every write verbatim
pub struct MockI2c {
    pub address: u8,
    pub writes: Vec<Vec<u8>>,
    pub fail: bool,
}

impl MockI2c {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            writes: Vec::new(),
            fail: false,
        }
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail || address != self.address {
            return Err(ErrorKind::Other);
        }

        for op in operations {
            match op {
                Operation::Write(bytes) => self.writes.push(bytes.to_vec()),
                Operation::Read(buf) => buf.fill(0),
            }
        }
        Ok(())
    }
}

/// Registers behind a [`RegisterBus`]
pub struct RegisterFile {
    pub registers: [u8; 0x40],
    pub fail: bool,
}

/// Register-file I2C device on the embedded-hal 0.2 blocking traits
///
/// A write's first byte selects a register (bit 7 requests
/// auto-increment); any further bytes are stored from there. Reads return
/// from the selected register. Clones share one register file, so a test
/// keeps a handle after moving the bus into a driver.
#[derive(Clone)]
pub struct RegisterBus {
    pub address: u8,
    pub file: Rc<RefCell<RegisterFile>>,
}

impl RegisterBus {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            file: Rc::new(RefCell::new(RegisterFile {
                registers: [0; 0x40],
                fail: false,
            })),
        }
    }

    pub fn set(&self, register: u8, value: u8) {
        self.file.borrow_mut().registers[register as usize] = value;
    }

    pub fn get(&self, register: u8) -> u8 {
        self.file.borrow().registers[register as usize]
    }

    pub fn set_fail(&self, fail: bool) {
        self.file.borrow_mut().fail = fail;
    }

    fn check(&self, address: u8) -> Result<(), ErrorKind> {
        if self.file.borrow().fail || address != self.address {
            Err(ErrorKind::Other)
        } else {
            Ok(())
        }
    }
}

impl Write for RegisterBus {
    type Error = ErrorKind;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.check(address)?;
        if let Some((&first, rest)) = bytes.split_first() {
            let mut file = self.file.borrow_mut();
            let start = (first & 0x7F) as usize;
            for (i, &b) in rest.iter().enumerate() {
                file.registers[(start + i) % 0x40] = b;
            }
        }
        Ok(())
    }
}

impl WriteRead for RegisterBus {
    type Error = ErrorKind;

    fn write_read(&mut self, address: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.check(address)?;
        let first = bytes.first().copied().unwrap_or(0);
        let auto_increment = first & 0x80 != 0;
        let start = (first & 0x7F) as usize;

        let file = self.file.borrow();
        for (i, b) in buffer.iter_mut().enumerate() {
            let offset = if auto_increment { i } else { 0 };
            *b = file.registers[(start + offset) % 0x40];
        }
        Ok(())
    }
}
