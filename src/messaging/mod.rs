mod logging;
mod redpanda;

pub use logging::LoggingOrderDispatch;
pub use redpanda::RedpandaOrderDispatch;
