use crate::section::Section;
use crate::translation::Translation;

/// Split a model response into its four sections.
///
/// Each section starts at the first heading variant (tried in order) that
/// occurs in `text` and runs until the next occurrence of any variant of
/// any section. If no section yields text, the whole response is returned
/// unmodified as the technical spec.
pub fn segment(text: &str) -> Translation {
    let mut result = Translation::default();

    for section in Section::ALL {
        let Some((start, marker)) = find_marker(text, *section) else {
            continue;
        };
        let end = next_heading_offset(text, start + marker.len());

        let mut body = text[start..end].trim().to_string();
        for variant in section.headings() {
            body = body.replace(variant, "").trim().to_string();
        }
        result.set(*section, body);
    }

    if result.is_empty() {
        result.technical_spec = text.to_string();
    }

    result
}

/// First variant of `section` present anywhere in `text`, with its offset.
fn find_marker(text: &str, section: Section) -> Option<(usize, &'static str)> {
    section
        .headings()
        .iter()
        .find_map(|variant| text.find(variant).map(|idx| (idx, *variant)))
}

/// Offset of the earliest heading of any section at or after `from`,
/// or the end of `text`.
fn next_heading_offset(text: &str, from: usize) -> usize {
    let rest = &text[from..];
    Section::ALL
        .iter()
        .flat_map(|s| s.headings().iter())
        .filter_map(|variant| rest.find(variant))
        .map(|idx| from + idx)
        .min()
        .unwrap_or(text.len())
}
