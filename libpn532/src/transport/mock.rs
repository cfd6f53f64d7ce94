// libpn532/src/transport/mock.rs

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::constants::PN532_ACK;
use crate::transport::traits::Transport;

/// Scripted bus for tests. Clones share one script and one call log, so
/// a test can keep a handle after moving a clone into the driver.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

#[derive(Debug, Default)]
struct MockState {
    responses: VecDeque<Vec<u8>>,
    writes: Vec<(u8, Vec<u8>)>,
    reads: Vec<(u8, usize)>,
    write_failures: usize,
    read_failures: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue bytes for the next read. Reads return at most the requested
    /// count.
    pub fn push_response(&self, resp: Vec<u8>) {
        self.state().responses.push_back(resp);
    }

    /// Queue the ACK frame.
    pub fn push_ack(&self) {
        self.push_response(PN532_ACK.to_vec());
    }

    /// Make the next `n` writes fail.
    pub fn fail_next_writes(&self, n: usize) {
        self.state().write_failures = n;
    }

    /// Make the next `n` reads fail.
    pub fn fail_next_reads(&self, n: usize) {
        self.state().read_failures = n;
    }

    /// Payloads written so far, in order.
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.state().writes.iter().map(|(_, d)| d.clone()).collect()
    }

    /// Addresses used by writes, in order.
    pub fn write_addresses(&self) -> Vec<u8> {
        self.state().writes.iter().map(|(a, _)| *a).collect()
    }

    /// `(address, count)` of every read so far.
    pub fn reads(&self) -> Vec<(u8, usize)> {
        self.state().reads.clone()
    }

    /// Total bus calls, writes and reads together.
    pub fn call_count(&self) -> usize {
        let s = self.state();
        s.writes.len() + s.reads.len()
    }

    pub fn pending_responses(&self) -> usize {
        self.state().responses.len()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, address: u8, data: &[u8]) -> io::Result<()> {
        let mut s = self.state();
        s.writes.push((address, data.to_vec()));
        if s.write_failures > 0 {
            s.write_failures -= 1;
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "simulated write failure"));
        }
        Ok(())
    }

    fn read(&mut self, address: u8, count: usize) -> io::Result<Vec<u8>> {
        let mut s = self.state();
        s.reads.push((address, count));
        if s.read_failures > 0 {
            s.read_failures -= 1;
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "simulated read failure"));
        }
        match s.responses.pop_front() {
            Some(mut resp) => {
                resp.truncate(count);
                Ok(resp)
            }
            None => Err(io::Error::new(io::ErrorKind::WouldBlock, "no scripted response")),
        }
    }
}
