mod coordinate_parse_error_tests;
mod utils;
