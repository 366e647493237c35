//! Addressable bus device wrapper
//!
//! Associates a fixed 7-bit address with a bus-controller handle so driver
//! code never repeats the address, and caches the result of the most recent
//! transaction for later inspection.

use core::fmt;

use twowire_hal::{BusStatus, WireBus};

/// One addressable peripheral on a shared two-wire bus
///
/// Every transaction primitive is a thin forward to the controller with
/// this device's address filled in. The controller handle can be owned or
/// a `&mut` borrow, so several devices can share one controller:
///
/// ```ignore
/// let mut eeprom = BusDevice::new(&mut bus, 0x50);
/// let mut rtc = BusDevice::new(&mut bus, 0x68);
/// ```
pub struct BusDevice<B> {
    bus: B,
    /// 7-bit device address, fixed at construction
    address: u8,
    /// Result of the most recent completed transaction.
    /// Meaningless until the first `end_transmission`.
    status: BusStatus,
}

impl<B: WireBus> BusDevice<B> {
    /// Wrap a controller handle with a fixed device address
    ///
    /// The address is masked to 7 bits. The controller must outlive the
    /// wrapper; ownership of a `&mut` borrow is the usual arrangement when
    /// the bus carries more than one device.
    pub fn new(bus: B, address: u8) -> Self {
        Self {
            bus,
            address: address & 0x7F,
            status: BusStatus::Success,
        }
    }

    /// The 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Result of the most recent completed transaction
    pub fn status(&self) -> BusStatus {
        self.status
    }

    /// Open a write transaction to this device
    ///
    /// Call before [`queue_write`](Self::queue_write); failures surface
    /// from the matching [`end_transmission`](Self::end_transmission).
    pub fn begin_transmission(&mut self) {
        self.bus.begin_transmission(self.address);
    }

    /// Queue one byte into the open transaction
    ///
    /// Returns 1 if the byte was queued, 0 if the controller's buffer is
    /// full. Nothing hits the wire until the transaction ends.
    pub fn queue_write(&mut self, byte: u8) -> usize {
        self.bus.write(&[byte])
    }

    /// Queue a byte slice into the open transaction
    ///
    /// Returns the number of bytes actually queued, which may be less than
    /// `data.len()` when the controller's buffer fills.
    pub fn queue_write_buf(&mut self, data: &[u8]) -> usize {
        self.bus.write(data)
    }

    /// Flush the queued bytes and close the transaction with a stop condition
    ///
    /// The returned status is also cached and available from
    /// [`status`](Self::status) until the next transaction completes.
    pub fn end_transmission(&mut self) -> BusStatus {
        self.end(true)
    }

    /// Flush the queued bytes, keeping the bus claimed for a repeated start
    pub fn end_transmission_no_stop(&mut self) -> BusStatus {
        self.end(false)
    }

    fn end(&mut self, send_stop: bool) -> BusStatus {
        self.status = self.bus.end_transmission(send_stop);
        self.status
    }

    /// Request `count` bytes from this device
    ///
    /// Returns the number of bytes actually received into the controller's
    /// buffer, which may be less than `count` on NACK or bus error. Drain
    /// them with [`read_byte`](Self::read_byte).
    pub fn request_bytes(&mut self, count: usize) -> usize {
        self.bus.request_from(self.address, count)
    }

    /// Received bytes not yet consumed
    pub fn available(&self) -> usize {
        self.bus.available()
    }

    /// Pop one received byte, `None` when the buffer is empty
    pub fn read_byte(&mut self) -> Option<u8> {
        self.bus.read()
    }

    /// Probe for the device with a zero-payload transaction
    ///
    /// Opens and immediately ends a transaction; true iff the address was
    /// acknowledged. Updates the cached status like any other transaction.
    pub fn detect(&mut self) -> bool {
        self.begin_transmission();
        self.end_transmission().is_success()
    }

    /// Write `value` to the 8-bit register at `reg`
    pub fn write_register(&mut self, reg: u8, value: u8) -> BusStatus {
        self.begin_transmission();
        self.queue_write(reg);
        self.queue_write(value);
        self.end_transmission()
    }

    /// Read the 8-bit register at `reg`
    ///
    /// Writes the register address with a repeated start, then requests one
    /// byte. `None` unless the write was acknowledged and a byte arrived.
    pub fn read_register(&mut self, reg: u8) -> Option<u8> {
        self.begin_transmission();
        self.queue_write(reg);
        if !self.end_transmission_no_stop().is_success() {
            return None;
        }
        if self.request_bytes(1) == 0 {
            return None;
        }
        self.read_byte()
    }

    /// Read consecutive registers starting at `reg` into `buf`
    ///
    /// Returns the number of bytes actually read, 0 when the register
    /// address write was not acknowledged.
    pub fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> usize {
        self.begin_transmission();
        self.queue_write(reg);
        if !self.end_transmission_no_stop().is_success() {
            return 0;
        }
        let received = self.request_bytes(buf.len());
        let mut count = 0;
        while count < received {
            match self.read_byte() {
                Some(byte) => {
                    buf[count] = byte;
                    count += 1;
                }
                None => break,
            }
        }
        count
    }

    /// Write the cached status to a diagnostic sink
    pub fn print_status(&self, w: &mut impl fmt::Write) -> fmt::Result {
        writeln!(w, "bus status: {} ({})", self.status.code(), self.status)
    }

    /// Borrow the underlying controller handle
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutably borrow the underlying controller handle
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Consume the wrapper and return the controller handle
    pub fn into_bus(self) -> B {
        self.bus
    }
}
