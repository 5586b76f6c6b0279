pub mod connection;
pub mod models;
pub mod reader;

pub use connection::ConnectionProvider;
pub use reader::{fetch_recent, RecordSource};
