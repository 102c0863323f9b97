//! Display models handed to the launcher host
//!
//! This module provides the result item the host renders and the actions it
//! performs when an item is activated.

pub mod item;

pub use item::{Action, DisplayItem, Icon};
