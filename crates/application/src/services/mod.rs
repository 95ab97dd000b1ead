mod handler_chain;

pub use handler_chain::{client_wrote, next_or_failure};
