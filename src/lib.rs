//! Clock Radio Firmware Library
//!
//! This library provides the control core of a bedside clock radio: it
//! keeps wall-clock time and an alarm, drives an RDA5807-style FM tuner over
//! I2C, and navigates a four-button, one-switch menu hierarchy.
//!
//! # Architecture
//!
//! The firmware is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │  ClockRadio tick  │  Navigation state machine  │  ViewModel  │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      MODEL LAYER                             │
//! │  ClockModel  │  AlarmModel / evaluator  │  Tuner protocol    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / DRIVER LAYER                         │
//! │  I2C bus adapter  │  Button latch  │  SSD1306 display        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / SCHEDULER                          │
//! │           embassy-rs (async/await executor)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Functional core, imperative shell**: navigation is a pure function
//!   of `(state, button, direction, model)`; I/O happens in the controller
//! - **Type-driven design**: `Frequency` and `Volume` can only hold valid values
//! - **No ambient globals**: all mutable state lives in one [`app::ClockRadio`]
//! - **Explicit error handling**: bus failures are retried a bounded number
//!   of times and then reported, never looped on

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

#[macro_use]
mod fmt;

/// Hardware Abstraction Layer
///
/// Bus adapters between `embedded-hal` traits and the tuner transport.
pub mod hal;

/// Peripheral Drivers
///
/// SSD1306 rendering of the view model.
#[cfg(feature = "embedded")]
pub mod drivers;

/// Clock and alarm models
///
/// Time arithmetic, format conversion, alarm evaluation and snooze.
pub mod clock;

/// FM tuner
///
/// Register image protocol and the retrying bus controller.
pub mod tuner;

/// Button input
///
/// Interrupt-safe pending-press latch consumed once per tick.
pub mod input;

/// User Interface
///
/// Menu states, navigation table and the view model snapshot.
pub mod ui;

/// Application context and per-tick control step
pub mod app;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::app::ClockRadio;
    pub use crate::config::*;
    pub use crate::input::{Button, ButtonLatch};
    pub use crate::types::*;

    // Common traits
    pub use embedded_hal::i2c::I2c;

    // Embassy
    pub use embassy_time::{Duration, Instant, Ticker, Timer};

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
