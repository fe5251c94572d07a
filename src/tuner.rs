//! FM Tuner
//!
//! Register-image protocol for the RDA5807-style receiver and the
//! controller that writes it over the bus with bounded retry.

pub mod controller;
pub mod protocol;
