//! This crate collects Swedish red days (public holidays) into a JSON file.
//! It also implements lookups on a previously written file.
//!
//! The days are read from <http://sholiday.faboul.se/dagar/v2.1/>.

pub mod collector;
pub mod config;
pub mod error;
pub mod holiday;
pub mod holiday_client;
