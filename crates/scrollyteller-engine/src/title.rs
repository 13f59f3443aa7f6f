/// Turn a hyphenated identifier into a display title.
///
/// `"ramesh-kumar"` becomes `"Ramesh Kumar"`. Only the first character of
/// each segment changes case; empty segments are dropped.
pub fn derive_title(identifier: &str) -> String {
    identifier
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
