//! Scenario test suites


mod boundary_tests;
mod clock_tests;
mod config_tests;
