//! In-memory share registry.

use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use lockdrop_core::error::AppError;
use lockdrop_core::result::AppResult;
use lockdrop_core::types::LinkId;

use crate::share::ShareRecord;

#[derive(Debug)]
enum Slot {
    /// Claimed by an upload whose blob is still being written.
    Reserved,
    Registered(ShareRecord),
}

/// Concurrent map from link identifier to share metadata.
///
/// Each map operation holds one shard lock for the duration of the map
/// mutation only; callers never do I/O while holding it. A slot is either
/// reserved (invisible to [`get`](Self::get)) or holds an immutable record.
/// Records live until the process exits.
#[derive(Debug, Default)]
pub struct ShareRegistry {
    entries: DashMap<LinkId, Slot>,
    registered: AtomicUsize,
}

impl ShareRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a complete record, failing if the key is taken or reserved.
    pub fn put(&self, record: ShareRecord) -> AppResult<()> {
        match self.entries.entry(record.link_id.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Link {} is already in use",
                record.link_id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(Slot::Registered(record));
                self.registered.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
        }
    }

    /// Returns a copy of the registered record for `link_id`.
    pub fn get(&self, link_id: &LinkId) -> Option<ShareRecord> {
        match self.entries.get(link_id)?.value() {
            Slot::Registered(record) => Some(record.clone()),
            Slot::Reserved => None,
        }
    }

    /// Whether a registered (not merely reserved) record exists.
    pub fn contains(&self, link_id: &LinkId) -> bool {
        self.get(link_id).is_some()
    }

    /// Claims `link_id` for an in-flight upload.
    pub fn reserve(&self, link_id: &LinkId) -> AppResult<()> {
        match self.entries.entry(link_id.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Link {link_id} is already in use"
            ))),
            Entry::Vacant(slot) => {
                slot.insert(Slot::Reserved);
                Ok(())
            }
        }
    }

    /// Turns a reservation into a registered record.
    pub fn commit(&self, record: ShareRecord) -> AppResult<()> {
        let Some(mut slot) = self.entries.get_mut(&record.link_id) else {
            return Err(AppError::internal(format!(
                "No reservation for link {}",
                record.link_id
            )));
        };

        if matches!(*slot, Slot::Registered(_)) {
            return Err(AppError::conflict(format!(
                "Link {} is already registered",
                record.link_id
            )));
        }

        *slot = Slot::Registered(record);
        self.registered.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Drops a reservation. Registered records are left untouched.
    pub fn release(&self, link_id: &LinkId) {
        self.entries
            .remove_if(link_id, |_, slot| matches!(slot, Slot::Reserved));
    }

    /// Number of registered shares.
    pub fn len(&self) -> usize {
        self.registered.load(Ordering::Relaxed)
    }

    /// Number of slots held by uploads still in flight.
    pub fn reserved(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.value(), Slot::Reserved))
            .count()
    }

    /// Whether no share has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
