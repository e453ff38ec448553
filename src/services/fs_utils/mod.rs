pub mod path_utils;

#[cfg(test)]
#[path = "tests/path_utils_tests.rs"]
mod path_utils_tests;
