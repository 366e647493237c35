//! Bus controller trait
//!
//! Transactional Wire-style interface to a two-wire bus controller. A write
//! is queued between `begin_transmission` and `end_transmission` and hits
//! the wire only when the transaction ends; reads land in a controller-owned
//! buffer drained with `read`.

use crate::status::BusStatus;

/// Transactional two-wire bus controller
///
/// One controller is shared by every device on the bus; device wrappers
/// target it with their own 7-bit address per transaction. All operations
/// are synchronous and run to completion.
pub trait WireBus {
    /// Open a write transaction to the given 7-bit address
    ///
    /// Failures (bus busy, no such device) are not reported here; they
    /// surface from the matching [`end_transmission`](WireBus::end_transmission).
    fn begin_transmission(&mut self, address: u8);

    /// Queue bytes into the open transaction's transmit buffer
    ///
    /// Returns the number of bytes actually queued, which may be less than
    /// `data.len()` when the controller's buffer fills. Truncation is
    /// silent; the transaction status reports it when the transaction ends.
    fn write(&mut self, data: &[u8]) -> usize;

    /// Flush the queued bytes over the wire and close the transaction
    ///
    /// This is the single point where transaction failure surfaces.
    ///
    /// # Arguments
    /// * `send_stop` - generate a stop condition after the transfer; pass
    ///   `false` to keep the bus claimed for a repeated start
    fn end_transmission(&mut self, send_stop: bool) -> BusStatus;

    /// Read `count` bytes from the device at `address` into the receive buffer
    ///
    /// Returns the number of bytes actually received, which may be less
    /// than `count` on NACK or bus error. Received bytes replace any unread
    /// bytes from a previous request.
    fn request_from(&mut self, address: u8, count: usize) -> usize;

    /// Number of received bytes not yet consumed by [`read`](WireBus::read)
    fn available(&self) -> usize;

    /// Pop one byte from the receive buffer
    ///
    /// Returns `None` when the buffer is empty. Never blocks.
    fn read(&mut self) -> Option<u8>;
}

// A mutable borrow of a controller is itself a controller, so several
// device wrappers can share one bus within a single execution context.
impl<B: WireBus + ?Sized> WireBus for &mut B {
    fn begin_transmission(&mut self, address: u8) {
        (**self).begin_transmission(address)
    }

    fn write(&mut self, data: &[u8]) -> usize {
        (**self).write(data)
    }

    fn end_transmission(&mut self, send_stop: bool) -> BusStatus {
        (**self).end_transmission(send_stop)
    }

    fn request_from(&mut self, address: u8, count: usize) -> usize {
        (**self).request_from(address, count)
    }

    fn available(&self) -> usize {
        (**self).available()
    }

    fn read(&mut self) -> Option<u8> {
        (**self).read()
    }
}
