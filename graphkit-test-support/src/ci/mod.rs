//! Environment-driven run profiles shared by the workspace's test suites.

pub mod property_test_profile;
