//! Reduce the puzzle page's `<article>` markup to Markdown.
//!
//! The remote site renders puzzle text with a small, stable set of tags
//! (headings, paragraphs, emphasis, inline code, code blocks, lists,
//! links), so a single-pass scanner covers it. Unknown tags are dropped
//! and their text kept.

/// Convert every `<article>` region of a page to Markdown, joined with a
/// blank line. Pages without an article produce an empty string.
pub fn articles_to_markdown(html: &str) -> String {
    article_bodies(html)
        .into_iter()
        .map(convert)
        .collect::<Vec<_>>()
        .join("\n")
}

fn article_bodies(html: &str) -> Vec<&str> {
    let mut bodies = Vec::new();
    let mut rest = html;
    while let Some(open) = rest.find("<article") {
        let Some(tag_end) = rest[open..].find('>') else {
            break;
        };
        let body_start = open + tag_end + 1;
        let Some(close) = rest[body_start..].find("</article>") else {
            break;
        };
        bodies.push(&rest[body_start..body_start + close]);
        rest = &rest[body_start + close + "</article>".len()..];
    }
    bodies
}

fn convert(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_pre = false;
    let mut link_href: Option<String> = None;
    let mut rest = html;
    while let Some(lt) = rest.find('<') {
        push_text(&mut out, &rest[..lt], in_pre);
        let after = &rest[lt + 1..];
        let Some(gt) = after.find('>') else {
            // stray '<' at the end, keep it
            push_text(&mut out, &rest[lt..], in_pre);
            rest = "";
            break;
        };
        apply_tag(&mut out, &after[..gt], &mut in_pre, &mut link_href);
        rest = &after[gt + 1..];
    }
    push_text(&mut out, rest, in_pre);
    squeeze_blank_lines(&out)
}

fn push_text(out: &mut String, text: &str, in_pre: bool) {
    if text.is_empty() || (!in_pre && text.trim().is_empty()) {
        return;
    }
    out.push_str(&decode_entities(text));
}

fn apply_tag(out: &mut String, tag: &str, in_pre: &mut bool, link_href: &mut Option<String>) {
    let name_end = tag.find(char::is_whitespace).unwrap_or(tag.len());
    match tag[..name_end].to_ascii_lowercase().as_str() {
        "h2" => {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("## ");
        }
        "/h2" | "/p" | "/ul" => out.push_str("\n\n"),
        "em" | "/em" => out.push('*'),
        "code" | "/code" => {
            if !*in_pre {
                out.push('`');
            }
        }
        "pre" => {
            *in_pre = true;
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("```\n");
        }
        "/pre" => {
            *in_pre = false;
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("```\n\n");
        }
        "li" => out.push_str("* "),
        "/li" => out.push('\n'),
        "br" | "br/" => out.push('\n'),
        "a" => {
            if let Some(href) = attr_value(tag, "href") {
                *link_href = Some(href);
                out.push('[');
            }
        }
        "/a" => {
            if let Some(href) = link_href.take() {
                out.push(']');
                out.push('(');
                out.push_str(&href);
                out.push(')');
            }
        }
        _ => {}
    }
}

fn attr_value(tag: &str, name: &str) -> Option<String> {
    let marker = format!("{name}=\"");
    let start = tag.find(&marker)? + marker.len();
    let end = tag[start..].find('"')?;
    Some(tag[start..start + end].to_string())
}

fn decode_entities(text: &str) -> String {
    // `&amp;` last, so `&amp;lt;` stays a literal `&lt;`
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Collapse runs of blank lines to one, drop leading blanks, and end with a
/// single newline.
fn squeeze_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = true;
    for line in text.lines() {
        if line.trim().is_empty() {
            if !blank_run {
                out.push('\n');
            }
            blank_run = true;
        } else {
            out.push_str(line.trim_end());
            out.push('\n');
            blank_run = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PAGE: &str = concat!(
        "<html><body><main>",
        "<article class=\"day-desc\">",
        "<h2>--- Day 1: Not Quite Lisp ---</h2>",
        "<p>Santa starts on the <em>ground floor</em> and follows the ",
        "instructions one at a time.</p>",
        "<p>For example:</p>",
        "<ul>",
        "<li><code>(())</code> and <code>()()</code> both land on floor <em>0</em>.</li>",
        "<li><code>(((</code> lands on floor <em>3</em>.</li>",
        "</ul>",
        "<pre><code>(())\n()()\n</code></pre>",
        "<p>Get your <a href=\"/2015/day/1/input\">puzzle input</a>.</p>",
        "</article>",
        "</main></body></html>",
    );

    #[test]
    fn converts_a_puzzle_page() {
        let expected = "\
## --- Day 1: Not Quite Lisp ---

Santa starts on the *ground floor* and follows the instructions one at a time.

For example:

* `(())` and `()()` both land on floor *0*.
* `(((` lands on floor *3*.

```
(())
()()
```

Get your [puzzle input](/2015/day/1/input).
";
        assert_eq!(articles_to_markdown(PAGE), expected);
    }

    #[test]
    fn joins_multiple_articles() {
        let html = "<article><p>part one</p></article>\
                    <article><p>part two</p></article>";
        assert_eq!(articles_to_markdown(html), "part one\n\npart two\n");
    }

    #[test]
    fn page_without_articles_is_empty() {
        assert_eq!(articles_to_markdown("<html><p>nope</p></html>"), "");
    }

    #[test]
    fn decodes_entities_outside_and_inside_pre() {
        let html = "<article><p>x &lt; y &amp;&amp; y &gt; z</p>\
                    <pre><code>if a &lt; b:\n</code></pre></article>";
        assert_eq!(
            articles_to_markdown(html),
            "x < y && y > z\n\n```\nif a < b:\n```\n"
        );
    }

    #[test]
    fn drops_unknown_tags_but_keeps_text() {
        let html = "<article><p>the <span title=\"hint\">starting floor</span></p></article>";
        assert_eq!(articles_to_markdown(html), "the starting floor\n");
    }

    #[test]
    fn anchor_without_href_keeps_plain_text() {
        let html = "<article><p>see <a name=\"x\">this</a></p></article>";
        assert_eq!(articles_to_markdown(html), "see this\n");
    }
}
