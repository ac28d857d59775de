#![no_main]

use enumgen_core::{extract_field_specs, parse_alias_list, resolve_field_values};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // First line is the type comment, the rest the member's literals
        let (comment, literals) = s.split_once('\n').unwrap_or((s, ""));
        let (_, specs) = extract_field_specs(comment);
        let _ = resolve_field_values(literals, &specs);
        let _ = parse_alias_list(literals);
    }
});
