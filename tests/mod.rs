//! Test suite for messenger-auth
//!
//! This module organizes all tests
