// Server module entry point
// Listener creation and per-connection serving

mod connection;
mod listener;

pub use connection::handle_connection;
pub use listener::create_listener;
