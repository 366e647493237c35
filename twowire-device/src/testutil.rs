//! Scripted bus controller for host tests

use heapless::{Deque, Vec};
use twowire_hal::{BusStatus, WireBus};

/// In-memory bus controller double
///
/// Acknowledges only the addresses listed in `present`, serves `reply`
/// bytes (possibly fewer than requested, modelling a mid-read NACK) and
/// records every completed write transaction in `sent`.
pub struct MockBus {
    /// Addresses that acknowledge
    present: Vec<u8, 8>,
    /// Bytes the addressed device returns on a read request
    reply: Vec<u8, 32>,
    /// When set, the next `end_transmission` reports this instead
    pub force_status: Option<BusStatus>,
    /// (address, payload) of every completed write transaction
    pub sent: Vec<(u8, Vec<u8, 32>), 8>,
    in_transaction: bool,
    current_address: u8,
    tx: Vec<u8, 32>,
    rx: Deque<u8, 32>,
}

impl MockBus {
    /// Empty bus: every address NACKs
    pub fn new() -> Self {
        Self {
            present: Vec::new(),
            reply: Vec::new(),
            force_status: None,
            sent: Vec::new(),
            in_transaction: false,
            current_address: 0,
            tx: Vec::new(),
            rx: Deque::new(),
        }
    }

    /// Bus with a single acknowledging device
    pub fn with_device(address: u8) -> Self {
        let mut bus = Self::new();
        bus.add_device(address);
        bus
    }

    pub fn add_device(&mut self, address: u8) {
        self.present.push(address).unwrap();
    }

    /// Bytes the device will deliver before NACKing the read
    pub fn set_reply(&mut self, bytes: &[u8]) {
        self.reply.clear();
        self.reply.extend_from_slice(bytes).unwrap();
    }

    fn acks(&self, address: u8) -> bool {
        self.present.contains(&address)
    }
}

impl WireBus for MockBus {
    fn begin_transmission(&mut self, address: u8) {
        self.in_transaction = true;
        self.current_address = address;
        self.tx.clear();
    }

    fn write(&mut self, data: &[u8]) -> usize {
        if !self.in_transaction {
            return 0;
        }
        let mut queued = 0;
        for &byte in data {
            if self.tx.push(byte).is_err() {
                break;
            }
            queued += 1;
        }
        queued
    }

    fn end_transmission(&mut self, _send_stop: bool) -> BusStatus {
        let open = core::mem::replace(&mut self.in_transaction, false);
        if let Some(status) = self.force_status.take() {
            return status;
        }
        if !open {
            return BusStatus::Other;
        }
        if !self.acks(self.current_address) {
            return BusStatus::NackOnAddress;
        }
        let payload = self.tx.clone();
        self.sent.push((self.current_address, payload)).unwrap();
        BusStatus::Success
    }

    fn request_from(&mut self, address: u8, count: usize) -> usize {
        self.rx.clear();
        if !self.acks(address) {
            return 0;
        }
        let served = count.min(self.reply.len());
        for &byte in &self.reply[..served] {
            self.rx.push_back(byte).unwrap();
        }
        served
    }

    fn available(&self) -> usize {
        self.rx.len()
    }

    fn read(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }
}
