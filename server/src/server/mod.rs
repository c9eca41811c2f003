mod server;
pub use server::{Server, TickReport};

mod server_config;
pub use server_config::ServerConfig;
