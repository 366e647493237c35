//! Bus address scan
//!
//! Probes every assignable 7-bit address with a zero-payload transaction,
//! the way `i2cdetect` walks a bus.

use heapless::Vec;
use twowire_hal::WireBus;

use crate::device::BusDevice;

/// First assignable 7-bit address (0x00-0x07 are reserved)
pub const FIRST_ADDRESS: u8 = 0x08;

/// Last assignable 7-bit address (0x78-0x7F are reserved)
pub const LAST_ADDRESS: u8 = 0x77;

/// Size of the assignable address range
pub const MAX_DEVICES: usize = (LAST_ADDRESS - FIRST_ADDRESS + 1) as usize;

/// Probe the assignable address range and collect acknowledging addresses
///
/// Runs one zero-payload transaction per address, so a full scan is 112
/// transactions on the wire. Addresses come back in ascending order.
pub fn scan<B: WireBus>(bus: &mut B) -> Vec<u8, MAX_DEVICES> {
    let mut found = Vec::new();
    for address in FIRST_ADDRESS..=LAST_ADDRESS {
        let mut device = BusDevice::new(&mut *bus, address);
        if device.detect() {
            // Capacity covers the whole range, push cannot fail
            let _ = found.push(address);
        }
    }
    found
}
