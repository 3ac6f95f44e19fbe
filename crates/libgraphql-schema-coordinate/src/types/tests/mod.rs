mod deprecation_state_tests;
mod graphql_type_tests;
