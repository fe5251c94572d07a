//! Clock and Alarm Models
//!
//! Wall-clock time keeping, 12/24-hour arithmetic and the alarm.
//! Everything here is plain data with value-returning transitions.

pub mod alarm;
pub mod time;
