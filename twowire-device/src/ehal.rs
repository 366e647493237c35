//! Bus controller over a blocking `embedded-hal` I2C implementation
//!
//! Bridges the transactional [`WireBus`] model onto the whole-transfer
//! `embedded_hal::i2c::I2c` trait: queued bytes collect in a local transmit
//! buffer and go out as one transfer when the transaction ends; requested
//! bytes land in a local receive buffer drained by `read`.

use embedded_hal::i2c::{ErrorKind, I2c, NoAcknowledgeSource};
use heapless::Vec;
use twowire_hal::{BusStatus, WireBus};

/// Transmit/receive buffer size, the classic Wire buffer length
pub const BUFFER_LENGTH: usize = 32;

/// [`WireBus`] controller backed by any blocking `embedded-hal` I2C bus
///
/// The wrapped bus comes pre-configured (clocking and timeouts belong to
/// the chip HAL). One limitation of the blocking trait: each call is a
/// self-contained transfer, so a repeated start cannot span two `WireBus`
/// calls and a stop condition is generated even when `send_stop` is false.
pub struct HalBus<I2C> {
    i2c: I2C,
    tx_address: u8,
    tx: Vec<u8, BUFFER_LENGTH>,
    tx_open: bool,
    tx_overflow: bool,
    rx: Vec<u8, BUFFER_LENGTH>,
    rx_pos: usize,
}

impl<I2C: I2c> HalBus<I2C> {
    /// Wrap a configured I2C bus
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            tx_address: 0,
            tx: Vec::new(),
            tx_open: false,
            tx_overflow: false,
            rx: Vec::new(),
            rx_pos: 0,
        }
    }

    /// Consume the controller and return the wrapped bus
    pub fn into_inner(self) -> I2C {
        self.i2c
    }
}

fn map_error<E: embedded_hal::i2c::Error>(err: E) -> BusStatus {
    match err.kind() {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => BusStatus::NackOnAddress,
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data) => BusStatus::NackOnData,
        // Probe NACKs happen in the address phase; classify unknowns there
        // so detect() keeps working on HALs that cannot tell the two apart.
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown) => BusStatus::NackOnAddress,
        _ => BusStatus::Other,
    }
}

impl<I2C: I2c> WireBus for HalBus<I2C> {
    fn begin_transmission(&mut self, address: u8) {
        self.tx_address = address & 0x7F;
        self.tx.clear();
        self.tx_open = true;
        self.tx_overflow = false;
    }

    fn write(&mut self, data: &[u8]) -> usize {
        if !self.tx_open {
            return 0;
        }
        let mut queued = 0;
        for &byte in data {
            if self.tx.push(byte).is_err() {
                self.tx_overflow = true;
                break;
            }
            queued += 1;
        }
        queued
    }

    /// A stop condition is always generated; see the type-level note.
    fn end_transmission(&mut self, _send_stop: bool) -> BusStatus {
        if !self.tx_open {
            return BusStatus::Other;
        }
        self.tx_open = false;
        if self.tx_overflow {
            // Truncated payloads never touch the wire
            return BusStatus::DataTooLong;
        }
        match self.i2c.write(self.tx_address, &self.tx) {
            Ok(()) => BusStatus::Success,
            Err(err) => map_error(err),
        }
    }

    fn request_from(&mut self, address: u8, count: usize) -> usize {
        self.rx.clear();
        self.rx_pos = 0;

        let count = count.min(BUFFER_LENGTH);
        let mut buf = [0u8; BUFFER_LENGTH];
        match self.i2c.read(address & 0x7F, &mut buf[..count]) {
            Ok(()) => {
                // Capacity checked above, extend cannot fail
                let _ = self.rx.extend_from_slice(&buf[..count]);
                count
            }
            Err(_) => 0,
        }
    }

    fn available(&self) -> usize {
        self.rx.len() - self.rx_pos
    }

    fn read(&mut self) -> Option<u8> {
        let byte = self.rx.get(self.rx_pos).copied()?;
        self.rx_pos += 1;
        Some(byte)
    }
}
