//! # Utility Modules
//!
//! Supporting utilities that sit outside the decode path.
//!
//! ## Components
//! - **Logging**: Structured logging configuration
//!
//! The reader itself only emits `tracing` events; installing a subscriber is left
//! to the application through [`logging::init_logging`].

pub mod logging;
