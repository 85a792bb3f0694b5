//! Go naming conventions for generated identifiers.
//!
//! Raw element and attribute names pass through a small pipeline before
//! they become Go identifiers: hyphenated names are merged to camel form,
//! field names get their words title-cased, known initialisms are rewritten
//! to their all-caps Go spelling, and any leftover spaces are stripped.
//!
//! No uniqueness is guaranteed here; the generator's emitted-name registry
//! owns collision handling.

/// Initialisms canonicalized to their all-caps form, based on the
/// commonInitialisms table in golang/lint.
///
/// Kept sorted by descending raw-token length: the scan in
/// `replace_initialisms` takes the first entry matching at a position, so
/// "Https" must be seen before "Http" ("HTTPS", never "HTTPs").
const INITIALISMS: &[(&str, &str)] = &[
    ("Ascii", "ASCII"),
    ("Https", "HTTPS"),
    ("Guid", "GUID"),
    ("Html", "HTML"),
    ("Http", "HTTP"),
    ("Json", "JSON"),
    ("Smtp", "SMTP"),
    ("Utf8", "UTF8"),
    ("Uuid", "UUID"),
    ("Xsrf", "XSRF"),
    ("Api", "API"),
    ("Cpu", "CPU"),
    ("Css", "CSS"),
    ("Dns", "DNS"),
    ("Eof", "EOF"),
    ("Lhs", "LHS"),
    ("Qps", "QPS"),
    ("Ram", "RAM"),
    ("Rhs", "RHS"),
    ("Rpc", "RPC"),
    ("Sla", "SLA"),
    ("Sql", "SQL"),
    ("Ssh", "SSH"),
    ("Tcp", "TCP"),
    ("Tls", "TLS"),
    ("Ttl", "TTL"),
    ("Udp", "UDP"),
    ("Uid", "UID"),
    ("Uri", "URI"),
    ("Url", "URL"),
    ("Xml", "XML"),
    ("Xss", "XSS"),
    ("Id", "ID"),
    ("Ip", "IP"),
    ("Ui", "UI"),
    ("Vm", "VM"),
];

/// Merge a hyphenated name to camel form (e.g., "ship-date" -> "shipDate").
///
/// The first segment's casing is preserved; every later segment gets its
/// first letter uppercased. Single-segment names pass through unchanged.
pub fn merge_hyphens(raw: &str) -> String {
    let mut segments = raw.split('-');
    let first = segments.next().unwrap_or_default();
    let mut merged = String::from(first);
    for segment in segments {
        merged.push_str(&title_first(segment));
    }
    merged
}

/// Normalize a raw name into a Go type name (e.g., "sub-order" -> "subOrder").
pub fn type_name(raw: &str) -> String {
    squish(&replace_initialisms(&merge_hyphens(raw)))
}

/// Normalize a raw name into a Go field name (e.g., "ship-date" -> "ShipDate",
/// "id" -> "ID").
pub fn field_name(raw: &str) -> String {
    squish(&replace_initialisms(&title_words(&merge_hyphens(raw))))
}

/// Uppercase the first letter of a single word.
fn title_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Uppercase the first letter of each space-delimited word.
fn title_words(s: &str) -> String {
    s.split(' ').map(title_first).collect::<Vec<_>>().join(" ")
}

/// Replace every occurrence of a known initialism with its all-caps form,
/// preferring the longest token at each position.
///
/// Matching is positional, not word-bounded, exactly like the Go replacer
/// it mirrors: "Identity" becomes "IDentity".
fn replace_initialisms(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    'scan: while let Some(c) = rest.chars().next() {
        for (raw, canonical) in INITIALISMS {
            if rest.starts_with(raw) {
                out.push_str(canonical);
                rest = &rest[raw.len()..];
                continue 'scan;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Strip remaining space characters.
fn squish(s: &str) -> String {
    s.replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialism_table_sorted_longest_first() {
        for pair in INITIALISMS.windows(2) {
            assert!(
                pair[0].0.len() >= pair[1].0.len(),
                "'{}' must come before '{}'",
                pair[1].0,
                pair[0].0
            );
        }
    }

    #[test]
    fn test_merge_hyphens() {
        assert_eq!(merge_hyphens("ship-date"), "shipDate");
        assert_eq!(merge_hyphens("a-b-c"), "aBC");
        assert_eq!(merge_hyphens("plain"), "plain");
        assert_eq!(merge_hyphens("Already-Cased"), "AlreadyCased");
        assert_eq!(merge_hyphens(""), "");
    }

    #[test]
    fn test_field_name() {
        assert_eq!(field_name("id"), "ID");
        assert_eq!(field_name("ship-date"), "ShipDate");
        assert_eq!(field_name("note"), "Note");
        assert_eq!(field_name("base-url"), "BaseURL");
        assert_eq!(field_name("uuid"), "UUID");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(type_name("Order"), "Order");
        assert_eq!(type_name("sub-order"), "subOrder");
        assert_eq!(type_name("Http-response"), "HTTPResponse");
    }

    #[test]
    fn test_longest_match_wins() {
        assert_eq!(replace_initialisms("Https"), "HTTPS");
        assert_eq!(replace_initialisms("HttpsProxy"), "HTTPSProxy");
        assert_eq!(replace_initialisms("HttpServer"), "HTTPServer");
        assert_eq!(replace_initialisms("Uuid"), "UUID");
    }

    #[test]
    fn test_canonical_input_is_unchanged() {
        assert_eq!(replace_initialisms("HTTP"), "HTTP");
        assert_eq!(replace_initialisms("ServerHTTPS"), "ServerHTTPS");
        assert_eq!(field_name("ShipDate"), "ShipDate");
    }

    #[test]
    fn test_positional_replacement_quirk() {
        // Replacement is not word-bounded; this mirrors the Go replacer.
        assert_eq!(replace_initialisms("Identity"), "IDentity");
    }

    #[test]
    fn test_squish_strips_spaces() {
        assert_eq!(field_name("first name"), "FirstName");
    }
}
