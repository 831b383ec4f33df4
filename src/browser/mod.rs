//! Browser automation module
//!
//! This module provides high-level browser control through ChromiumOxide,
//! including lifecycle management and navigation.

pub mod controller;
pub mod navigation;

pub use controller::{BrowserConfig, BrowserController, PageHandle};
pub use navigation::{NavigationOptions, NavigationResult, PageNavigator};
