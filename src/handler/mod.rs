// Request handling module entry point
// Route matching and per-route payload construction

mod payload;
mod router;

pub use router::{handle_request, Route};
