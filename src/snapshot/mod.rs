//! Trimmed swagger snapshots stored on disk

pub mod loader;

pub use loader::{load_most_recent, snapshot_file_name, Snapshot, SnapshotVersion};
