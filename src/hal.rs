//! Hardware Abstraction Layer
//!
//! Adapts `embedded-hal` bus traits to the transports the drivers use.
//! Kept free of chip-specific types so it builds and tests on the host.

pub mod i2c;
