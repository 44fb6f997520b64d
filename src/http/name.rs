/// Canonical header name: lowercased, with the first character of every
/// `-` separated segment uppercased (`x-foo-bar` becomes `X-Foo-Bar`).
pub fn normalize_name(name: &str) -> String {
    let mut canonical = String::with_capacity(name.len());
    let mut segment_start = true;
    for c in name.chars() {
        if segment_start {
            canonical.push(c.to_ascii_uppercase());
        } else {
            canonical.push(c.to_ascii_lowercase());
        }
        segment_start = c == '-';
    }
    canonical
}
