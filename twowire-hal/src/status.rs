//! Bus transaction result codes
//!
//! Every transaction ends with exactly one of these five codes. The numeric
//! values are the classic Wire return codes and are kept stable so callers
//! can log or compare them directly.

use core::fmt;

/// Result of a completed bus transaction
///
/// Returned by [`WireBus::end_transmission`](crate::bus::WireBus) and cached
/// device-side until the next transaction completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusStatus {
    /// Transaction completed, every byte acknowledged
    Success,
    /// Queued data exceeded the controller's transmit buffer
    DataTooLong,
    /// NACK while transmitting the device address
    NackOnAddress,
    /// NACK while transmitting a data byte
    NackOnData,
    /// Any other failure (no transaction open, bus error, timeout, …)
    Other,
}

impl BusStatus {
    /// Numeric code for this status (0-4)
    pub fn code(&self) -> u8 {
        match self {
            BusStatus::Success => 0,
            BusStatus::DataTooLong => 1,
            BusStatus::NackOnAddress => 2,
            BusStatus::NackOnData => 3,
            BusStatus::Other => 4,
        }
    }

    /// Map a numeric code back to a status
    ///
    /// Codes above 4 collapse into [`BusStatus::Other`], which is the code
    /// controllers reserve for unclassified failures anyway.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => BusStatus::Success,
            1 => BusStatus::DataTooLong,
            2 => BusStatus::NackOnAddress,
            3 => BusStatus::NackOnData,
            _ => BusStatus::Other,
        }
    }

    /// True only for [`BusStatus::Success`]
    pub fn is_success(&self) -> bool {
        matches!(self, BusStatus::Success)
    }
}

impl fmt::Display for BusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BusStatus::Success => "success",
            BusStatus::DataTooLong => "data too long",
            BusStatus::NackOnAddress => "NACK on address",
            BusStatus::NackOnData => "NACK on data",
            BusStatus::Other => "other error",
        };
        f.write_str(name)
    }
}
