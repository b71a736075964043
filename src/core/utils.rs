use url::Url;

/// Formats a duration in seconds as `M:SS`.
///
/// # Example
///
/// ```
/// use tunegrab::core::utils::format_duration;
///
/// assert_eq!(format_duration(75), "1:05");
/// assert_eq!(format_duration(0), "0:00");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", minutes, secs)
}

/// Formats a count with thousand separators.
///
/// # Example
///
/// ```
/// use tunegrab::core::utils::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1000), "1,000");
/// ```
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Extracts the video id from common YouTube URL shapes.
///
/// Recognizes `youtu.be` short links, `watch?v=`, `/shorts/` and `/embed/`
/// paths. Returns `None` for anything else; non-YouTube URLs are still
/// submitted to the backend as-is, this is only used for logging.
pub fn video_id_from_url(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();

    if host == "youtu.be" {
        return parsed
            .path_segments()?
            .next()
            .filter(|s| !s.is_empty())
            .map(String::from);
    }

    if host == "youtube.com" || host.ends_with(".youtube.com") {
        if let Some((_, v)) = parsed.query_pairs().find(|(k, _)| k == "v") {
            return Some(v.into_owned());
        }
        let mut segments = parsed.path_segments()?;
        if matches!(segments.next(), Some("shorts") | Some("embed")) {
            return segments.next().filter(|s| !s.is_empty()).map(String::from);
        }
    }

    None
}

/// Sanitizes a server-returned filename for a local save.
///
/// Replaces filesystem-unsafe characters with `_`.
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            other => other,
        })
        .collect()
}
