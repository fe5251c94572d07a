//! User Interface
//!
//! Menu states, the button navigation table and the view model the
//! display layer renders.

pub mod navigation;
pub mod state;
pub mod view;
