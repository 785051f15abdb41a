// Property tests for URI decomposition.

use proptest::prelude::*;

use routeuri::ParsedUri;

proptest! {
    // Any scheme matching ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
    // rounds out exactly as given, case included.
    #[test]
    fn prop_valid_scheme_round_out(scheme in "[a-zA-Z][a-zA-Z0-9+.-]{0,15}") {
        let uri = ParsedUri::parse(&format!("{}://host", scheme)).unwrap();
        prop_assert_eq!(uri.scheme, scheme);
    }

    // Every in-range port is accepted and reported verbatim.
    #[test]
    fn prop_port_in_range(port in 1u16..) {
        let uri = ParsedUri::parse(&format!("scheme://host:{}", port)).unwrap();
        prop_assert_eq!(uri.port, port);
        prop_assert_eq!(uri.host, "host");
    }

    // Parsing never panics on arbitrary input, and when it succeeds a
    // second independent parse yields an identical record.
    #[test]
    fn prop_parse_is_total_and_deterministic(input in ".{0,64}") {
        if let Ok(first) = ParsedUri::parse(&input) {
            let second = ParsedUri::parse(&input).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    // Percent-decoded segments survive any delimiter-free text: the
    // parse keeps segment order and count.
    #[test]
    fn prop_path_segment_count(segments in prop::collection::vec("[a-z0-9]{1,8}", 1..6)) {
        let uri = ParsedUri::parse(&format!("scheme://host/{}", segments.join("/"))).unwrap();
        prop_assert_eq!(uri.path, segments);
    }
}
