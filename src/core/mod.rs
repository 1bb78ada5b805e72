//! # Core Decoder Components
//!
//! The bit/byte reader and the types describing the legacy wire format.
//!
//! ## Components
//! - **Types**: field widths, byte orders and transformations
//! - **Buffer**: the byte store a reader consumes
//! - **Charset**: single-byte text decoding for string fields
//! - **Reader**: mode control and every field decoder
//!
//! ## Wire Format
//! ```text
//! Big:             [b3] [b2] [b1] [t(b0)]
//! Little:          [t(b0)] [b1] [b2] [b3]
//! Middle:          [b1] [b0] [b3] [b2]
//! Inversed middle: [b2] [b3] [b0] [b1]
//! ```
//! `bN` is the byte holding bits `8N..8N+7`; `t` is the field's transformation.

pub mod buffer;
pub mod charset;
pub mod reader;
pub mod types;
