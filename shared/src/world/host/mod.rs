pub mod direct_watcher;
pub mod error;
pub mod global_diff_handler;
pub mod host_world_writer;
pub mod indirect_watcher;
pub mod owner_points;
pub mod watch_point;
pub mod watch_strategy;
