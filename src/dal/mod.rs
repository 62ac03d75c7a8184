pub mod resource_db;
pub mod snapshot_db;
