//! Locate the frontmatter block and rewrite its `date` line.

/// Marker line that opens and closes a frontmatter block.
const DELIMITER: &str = "---";

/// Key rewritten by [`update_date`].
const DATE_KEY: &str = "date:";

/// A frontmatter block split out of a document.
///
/// All slices borrow from the original text so that everything outside
/// `body` can be written back byte for byte.
#[derive(Debug, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    /// Opening marker line, without its `\n`.
    pub opening: &'a str,
    /// Lines between the markers, without the `\n` that precedes the closing marker.
    pub body: &'a str,
    /// Closing marker line, without its line terminator.
    pub closing: &'a str,
    /// Everything after the closing marker, starting at its line terminator.
    pub rest: &'a str,
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Split `content` into its frontmatter block and the remainder.
///
/// The block must start at offset 0 and ends at the first following line that
/// is a bare `---`. Returns `None` when there is no opening marker or it is
/// never closed.
pub fn split_frontmatter(content: &str) -> Option<Frontmatter<'_>> {
    let first_nl = content.find('\n')?;
    let opening = &content[..first_nl];
    if !is_delimiter(opening) {
        return None;
    }

    let body_start = first_nl + 1;
    let mut offset = body_start;
    for line in content[body_start..].split_inclusive('\n') {
        let text = line.strip_suffix('\n').unwrap_or(line);
        if is_delimiter(text) {
            let marker = text.strip_suffix('\r').unwrap_or(text);
            let body = if offset == body_start {
                ""
            } else {
                &content[body_start..offset - 1]
            };
            return Some(Frontmatter {
                opening,
                body,
                closing: &content[offset..offset + marker.len()],
                rest: &content[offset + marker.len()..],
            });
        }
        offset += line.len();
    }

    None
}

/// Rewrite the `date` entry of `content` to `new_date`.
///
/// Returns the new text and whether it differs from the input. A document
/// without frontmatter gets a fresh block holding only the date.
pub fn update_date(content: &str, new_date: &str) -> (String, bool) {
    let date_line = format!("{DATE_KEY} {new_date}");

    let Some(block) = split_frontmatter(content) else {
        return (format!("{DELIMITER}\n{date_line}\n{DELIMITER}\n\n{content}"), true);
    };

    let body = match rewrite_body(block.body, &date_line) {
        Some(body) => body,
        None => return (content.to_string(), false),
    };

    let updated = format!(
        "{}\n{}\n{}{}",
        block.opening, body, block.closing, block.rest
    );
    (updated, true)
}

/// Returns the rewritten body, or `None` when the date line already matches.
fn rewrite_body(body: &str, date_line: &str) -> Option<String> {
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        let text = line.strip_suffix('\n').unwrap_or(line);
        if text.starts_with(DATE_KEY) {
            if text.trim() == date_line {
                return None;
            }
            // keep a CRLF terminator on the rewritten line
            let content_len = text.strip_suffix('\r').unwrap_or(text).len();
            let mut out = String::with_capacity(body.len() + date_line.len());
            out.push_str(&body[..offset]);
            out.push_str(date_line);
            out.push_str(&body[offset + content_len..]);
            return Some(out);
        }
        offset += line.len();
    }

    let kept = body.trim_end();
    if kept.is_empty() {
        Some(date_line.to_string())
    } else {
        Some(format!("{kept}\n{date_line}"))
    }
}
