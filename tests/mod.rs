mod payload_tests;
