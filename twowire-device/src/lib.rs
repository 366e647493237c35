//! Device-side wrappers for the TwoWire bus abstraction
//!
//! This crate builds on the [`twowire_hal::WireBus`] trait:
//!
//! - [`BusDevice`] - one addressable peripheral on a shared bus, with
//!   thin transaction forwards and the cached last-transaction status
//! - [`ComposedBusDevice`] - delegation wrapper for types that embed a
//!   bus device as one of their components
//! - [`ehal::HalBus`] - a `WireBus` controller over any blocking
//!   `embedded_hal::i2c::I2c` implementation
//! - [`scan::scan`] - probe the assignable address range for responders

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod composed;
pub mod device;
pub mod ehal;
pub mod scan;

#[cfg(test)]
mod testutil;

pub use composed::ComposedBusDevice;
pub use device::BusDevice;
pub use twowire_hal::{BusStatus, WireBus};
