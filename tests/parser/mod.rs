mod uri_parser_test;
mod uri_property_test;
