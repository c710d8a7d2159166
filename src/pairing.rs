//! Per-thread entry/exit pairing.
//!
//! Each thread is either Idle (no map entry) or Awaiting-Exit (one stored
//! [`EntrySnapshot`]). The table is owned by the session's event loop and
//! needs no synchronization; the key is the target thread id reported on the
//! stop event.

use std::collections::HashMap;
use std::time::Instant;

use time::OffsetDateTime;

use crate::event::Value;
use crate::registry::Entry;

/// Everything captured at an entry-hit, held until the matching exit-hit.
pub struct EntrySnapshot {
    pub number: u64,
    /// The schema, when the registry knows this number.
    pub schema: Option<Entry>,
    /// Raw argument registers in calling-convention order.
    pub args: [u64; 6],
    /// Entry-time rendering of the arguments (IN materializations done,
    /// OUT placeholders pending).
    pub rendered: Vec<(&'static str, Value)>,
    pub started: OffsetDateTime,
    pub t0: Instant,
    pub tid: u64,
    /// Where the one-shot exit breakpoint was armed.
    pub return_address: u64,
}

impl EntrySnapshot {
    pub fn elapsed_us(&self) -> u64 {
        self.t0.elapsed().as_micros() as u64
    }
}

#[derive(Default)]
pub struct PairingTable {
    pending: HashMap<u64, EntrySnapshot>,
}

impl PairingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot for `tid`. If the thread already had one pending
    /// (two entries without an exit, which a correct kernel never produces)
    /// the earlier snapshot is returned so the caller can flush it as
    /// unfinished; the later one wins.
    pub fn arm(&mut self, snapshot: EntrySnapshot) -> Option<EntrySnapshot> {
        self.pending.insert(snapshot.tid, snapshot)
    }

    /// Consume the snapshot for an exit-hit on `tid`.
    pub fn complete(&mut self, tid: u64) -> Option<EntrySnapshot> {
        self.pending.remove(&tid)
    }

    /// Discard the snapshot of a dying thread, returning it for an optional
    /// unfinished event.
    pub fn thread_gone(&mut self, tid: u64) -> Option<EntrySnapshot> {
        self.pending.remove(&tid)
    }

    pub fn awaiting(&self, tid: u64) -> bool {
        self.pending.contains_key(&tid)
    }

    /// Drain everything (process exit): snapshots come out in no particular
    /// order, each to be flushed as unfinished.
    pub fn drain(&mut self) -> Vec<EntrySnapshot> {
        self.pending.drain().map(|(_, snap)| snap).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(tid: u64, number: u64) -> EntrySnapshot {
        EntrySnapshot {
            number,
            schema: None,
            args: [0; 6],
            rendered: Vec::new(),
            started: OffsetDateTime::UNIX_EPOCH,
            t0: Instant::now(),
            tid,
            return_address: 0x1000,
        }
    }

    #[test]
    fn exit_consumes_the_matching_entry_exactly_once() {
        let mut table = PairingTable::new();
        assert!(table.arm(snapshot(7, 3)).is_none());
        let taken = table.complete(7).unwrap();
        assert_eq!(taken.number, 3);
        assert!(table.complete(7).is_none());
    }

    #[test]
    fn threads_do_not_clobber_each_other() {
        let mut table = PairingTable::new();
        table.arm(snapshot(1, 3));
        table.arm(snapshot(2, 4));
        assert_eq!(table.complete(1).unwrap().number, 3);
        assert_eq!(table.complete(2).unwrap().number, 4);
    }

    #[test]
    fn duplicate_entry_displaces_the_earlier_one() {
        let mut table = PairingTable::new();
        table.arm(snapshot(1, 3));
        let displaced = table.arm(snapshot(1, 5)).unwrap();
        assert_eq!(displaced.number, 3);
        assert_eq!(table.complete(1).unwrap().number, 5);
    }

    #[test]
    fn thread_death_discards_the_snapshot() {
        let mut table = PairingTable::new();
        table.arm(snapshot(9, 1));
        assert!(table.thread_gone(9).is_some());
        assert!(table.is_empty());
    }
}
