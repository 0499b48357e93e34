use std::collections::HashMap;

/// Substitute `{{key}}` placeholders from the value map. Whitespace inside
/// the braces is allowed. Unknown placeholders are left intact so a typo in
/// a template shows up in the rendered file instead of vanishing.
pub fn render(template: &str, values: &HashMap<&str, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                match values.get(after[..end].trim()) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&rest[start..start + end + 4]),
                }
                rest = &after[end + 2..];
            }
            None => {
                // unterminated placeholder, keep the tail verbatim
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> HashMap<&'static str, String> {
        HashMap::from([
            ("year", "2023".to_string()),
            ("day", "1".to_string()),
        ])
    }

    #[test]
    fn substitutes_known_keys() {
        assert_eq!(
            render("Advent of Code {{year}}, Day {{day}}", &values()),
            "Advent of Code 2023, Day 1"
        );
    }

    #[test]
    fn allows_padding_inside_braces() {
        assert_eq!(render("{{ year }}-{{day }}", &values()), "2023-1");
    }

    #[test]
    fn leaves_unknown_placeholders_intact() {
        assert_eq!(render("{{year}} {{typo}}", &values()), "2023 {{typo}}");
    }

    #[test]
    fn keeps_unterminated_braces() {
        assert_eq!(render("{{year}} {{oops", &values()), "2023 {{oops");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(render("no placeholders here", &values()), "no placeholders here");
    }
}
