pub mod json_backend;

pub use json_backend::{load_snapshot_from_path, save_snapshot_to_path, JsonSnapshotSource};
