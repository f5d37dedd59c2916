//! Test helpers module
//!
//! This module provides utilities and helpers for testing the YallaNow client.
//! It includes a mock backend server, transport doubles, and test context setup.

#![allow(dead_code)]

pub mod backend_mock;
pub mod spy_transport;
pub mod test_context;
pub mod test_data;

pub use backend_mock::*;
pub use spy_transport::*;
pub use test_context::*;
pub use test_data::*;
