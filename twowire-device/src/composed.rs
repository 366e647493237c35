//! Composition helper for types that embed a bus device
//!
//! Containing types hold this wrapper as a plain field and get the common
//! status/probe surface without re-implementing the forwards themselves.
//! Pure delegation, no state of its own.

use core::fmt;

use twowire_hal::{BusStatus, WireBus};

use crate::device::BusDevice;

/// A bus device held as a component of a larger type
///
/// Re-exports only the diagnostic surface (`status`, `print_status`,
/// `detect`); transaction primitives stay behind
/// [`device_mut`](Self::device_mut) so the containing type's own driver
/// code is the only place that talks to the wire.
pub struct ComposedBusDevice<B> {
    device: BusDevice<B>,
}

impl<B: WireBus> ComposedBusDevice<B> {
    /// Wrap a controller handle and device address
    pub fn new(bus: B, address: u8) -> Self {
        Self {
            device: BusDevice::new(bus, address),
        }
    }

    /// Result of the component's most recent completed transaction
    pub fn status(&self) -> BusStatus {
        self.device.status()
    }

    /// Write the component's cached status to a diagnostic sink
    pub fn print_status(&self, w: &mut impl fmt::Write) -> fmt::Result {
        self.device.print_status(w)
    }

    /// Probe for the component's device on the bus
    pub fn detect(&mut self) -> bool {
        self.device.detect()
    }

    /// Borrow the wrapped device
    pub fn device(&self) -> &BusDevice<B> {
        &self.device
    }

    /// Mutably borrow the wrapped device for transaction code
    pub fn device_mut(&mut self) -> &mut BusDevice<B> {
        &mut self.device
    }
}
