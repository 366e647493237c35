//! TwoWire bus-controller abstraction
//!
//! This crate defines the boundary between per-device wrapper code and the
//! bus controller that owns the physical two-wire signaling. A controller
//! implements [`WireBus`]; everything device-side (twowire-device) is built
//! against that trait so the same wrapper code runs on any controller.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Device wrappers (twowire-device)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  twowire-hal (this crate - trait)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Bus controller (chip HAL, adapter, …)  │
//! └─────────────────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bus;
pub mod status;

// Re-export key items at crate root for convenience
pub use bus::WireBus;
pub use status::BusStatus;
