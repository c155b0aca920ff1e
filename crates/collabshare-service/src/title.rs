//! Document title composition.

/// Compose a browser document title from ordered segments.
///
/// Blank segments are skipped; the rest are joined with `" - "`. Typical
/// segments are the file name, the application name, and the theme name.
pub fn document_title<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    segments
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" - ")
}
