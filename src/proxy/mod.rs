//! Proxy module
//!
//! Handles request forwarding to the upstream AI gateway.

pub mod gateway;

pub use gateway::{ByteStream, GatewayClient};
