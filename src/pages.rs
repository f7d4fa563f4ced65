//! Page generation modules for different view types
//!
//! This module organizes HTML page generators by page type (course index
//! and chapter reader). Each page module handles its specific view logic
//! and utilizes shared components from the components module.

pub mod chapter;
pub mod index;
