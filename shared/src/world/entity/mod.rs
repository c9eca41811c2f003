pub mod network_id;
pub mod ownership;
pub mod replica_key;
