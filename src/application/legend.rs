// Legend template parsing

/// Extract the label names referenced as `{{name}}` in a legend template,
/// in order of appearance. Duplicates are kept; unmatched braces yield nothing.
pub fn parse_legend_format(template: Option<&str>) -> Vec<String> {
    let mut tokens = Vec::new();
    let Some(mut rest) = template else {
        return tokens;
    };

    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let name = &after[..end];
        if name.contains("{{") {
            // "{{ {{job}}": restart from the inner opening braces
            rest = &after[name.rfind("{{").unwrap_or(0)..];
            continue;
        }
        if !name.is_empty() {
            tokens.push(name.to_string());
        }
        rest = &after[end + 2..];
    }

    tokens
}
