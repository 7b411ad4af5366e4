mod errors;
mod handlers;

pub use handlers::{configure, OrderHandlers};
