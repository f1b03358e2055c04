//! UI widget components
//!
//! This module contains the slide body, the navigation control bar
//! and popups.

pub mod controls;
pub mod popups;
pub mod slide;
