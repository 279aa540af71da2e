//! Text normalization for test-case content
//!
//! Test data is often written inline in an indented string literal. The
//! normalized form is what a judge compares against:
//!
//! - the common leading indentation of non-blank lines is removed;
//! - trailing whitespace is stripped from every line;
//! - leading and trailing blank lines are dropped;
//! - non-empty text ends with exactly one `\n`.

/// Normalizes test-case text.
///
/// # Examples
///
/// ```
/// use ojkit_problem::normalize;
///
/// let text = "
///     3
///     1 2 3
/// ";
/// assert_eq!(normalize(text), "3\n1 2 3\n");
/// assert_eq!(normalize("  \n\n"), "");
/// ```
pub fn normalize(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();

    let Some(first) = lines.iter().position(|line| !line.is_empty()) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .unwrap_or(first);
    let body = &lines[first..=last];

    let margin = body
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| indentation(line))
        .reduce(common_prefix)
        .unwrap_or("");

    let mut out = String::with_capacity(text.len());
    for line in body {
        out.push_str(line.strip_prefix(margin).unwrap_or(line));
        out.push('\n');
    }
    out
}

/// The longest shared prefix of two indentation runs.
fn common_prefix<'a>(a: &'a str, b: &'a str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

/// The leading run of spaces and tabs.
fn indentation(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}
