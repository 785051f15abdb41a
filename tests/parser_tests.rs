// Integration test entry point for the URI parsers.

mod parser;
