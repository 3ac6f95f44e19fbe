mod resolve_schema_coordinate_tests;
