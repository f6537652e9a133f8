/// Rewrite a JavaScript-style object literal into strict JSON text.
///
/// Purely lexical: single-quoted strings become double-quoted, bare
/// identifier keys are quoted, `True`/`False`/`None`/`undefined` map to
/// JSON literals and trailing commas are dropped. Numbers are rewritten to
/// JSON form (`.5` to `0.5`, `5.` to `5`) and infinities become `null`.
/// Anything it does not recognise is copied through for the JSON parser to
/// reject.
pub fn normalize_object_literal(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 16);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '"' => i = copy_double_quoted(&chars, i, &mut out),
            '\'' => i = convert_single_quoted(&chars, i, &mut out),
            ',' => {
                if !closes_next(&chars, i + 1) {
                    out.push(',');
                }
                i += 1;
            }
            c if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
                i = copy_number(&chars, i, &mut out);
            }
            c if is_ident_start(c) => i = convert_identifier(&chars, i, &mut out),
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

fn copy_double_quoted(chars: &[char], start: usize, out: &mut String) -> usize {
    out.push('"');
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        out.push(c);
        i += 1;
        if c == '\\' {
            if let Some(&escaped) = chars.get(i) {
                out.push(escaped);
                i += 1;
            }
        } else if c == '"' {
            break;
        }
    }
    i
}

fn convert_single_quoted(chars: &[char], start: usize, out: &mut String) -> usize {
    out.push('"');
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '\'' => break,
            '"' => out.push_str("\\\""),
            '\\' => match chars.get(i) {
                Some('\'') => {
                    out.push('\'');
                    i += 1;
                }
                Some(&escaped) => {
                    out.push('\\');
                    out.push(escaped);
                    i += 1;
                }
                None => out.push_str("\\\\"),
            },
            _ => out.push(c),
        }
    }
    out.push('"');
    i
}

fn copy_number(chars: &[char], start: usize, out: &mut String) -> usize {
    let mut i = start;
    let negative = chars[i] == '-';
    // Leading '+' is valid JavaScript but not JSON.
    if matches!(chars[i], '-' | '+') {
        i += 1;
    }
    if let Some(end) = match_word(chars, i, "Infinity") {
        out.push_str("null");
        return end;
    }

    let int_start = i;
    i = skip_digits(chars, i);
    let int_digits = &chars[int_start..i];
    let mut frac_digits: &[char] = &[];
    if chars.get(i) == Some(&'.') {
        let frac_start = i + 1;
        i = skip_digits(chars, frac_start);
        frac_digits = &chars[frac_start..i];
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        // Not a number; leave it for the JSON parser to reject.
        out.extend(&chars[start..i]);
        return i;
    }

    if negative {
        out.push('-');
    }
    if int_digits.is_empty() {
        out.push('0');
    } else {
        out.extend(int_digits);
    }
    // A bare trailing '.' is dropped.
    if !frac_digits.is_empty() {
        out.push('.');
        out.extend(frac_digits);
    }

    if matches!(chars.get(i), Some('e' | 'E')) {
        let mut j = i + 1;
        if matches!(chars.get(j), Some('+' | '-')) {
            j += 1;
        }
        let end = skip_digits(chars, j);
        if end > j {
            out.extend(&chars[i..end]);
            i = end;
        }
    }
    i
}

fn skip_digits(chars: &[char], from: usize) -> usize {
    let mut i = from;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// End index of `word` at `from` if it appears there as a whole identifier.
fn match_word(chars: &[char], from: usize, word: &str) -> Option<usize> {
    let mut i = from;
    for w in word.chars() {
        if chars.get(i) != Some(&w) {
            return None;
        }
        i += 1;
    }
    match chars.get(i) {
        Some(&c) if is_ident_continue(c) => None,
        _ => Some(i),
    }
}

fn convert_identifier(chars: &[char], start: usize, out: &mut String) -> usize {
    let mut i = start;
    while i < chars.len() && is_ident_continue(chars[i]) {
        i += 1;
    }
    let ident: String = chars[start..i].iter().collect();

    if next_non_ws(chars, i) == Some(':') {
        out.push('"');
        out.push_str(&ident);
        out.push('"');
        return i;
    }

    let literal = match ident.as_str() {
        "true" | "True" => "true",
        "false" | "False" => "false",
        "null" | "None" | "undefined" | "NaN" | "Infinity" => "null",
        other => other,
    };
    out.push_str(literal);
    i
}

fn closes_next(chars: &[char], from: usize) -> bool {
    matches!(next_non_ws(chars, from), Some('}' | ']'))
}

fn next_non_ws(chars: &[char], from: usize) -> Option<char> {
    chars[from.min(chars.len())..]
        .iter()
        .copied()
        .find(|c| !c.is_whitespace())
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_quotes_become_double() {
        assert_eq!(normalize_object_literal("{'a': 'b'}"), r#"{"a": "b"}"#);
    }

    #[test]
    fn test_embedded_double_quote_is_escaped() {
        assert_eq!(
            normalize_object_literal(r#"['say "hi"']"#),
            r#"["say \"hi\""]"#
        );
    }

    #[test]
    fn test_escaped_single_quote() {
        assert_eq!(normalize_object_literal(r"['it\'s']"), r#"["it's"]"#);
    }

    #[test]
    fn test_bare_keys_quoted() {
        assert_eq!(
            normalize_object_literal("{output: {detection_results: []}}"),
            r#"{"output": {"detection_results": []}}"#
        );
    }

    #[test]
    fn test_python_literals() {
        assert_eq!(
            normalize_object_literal("[True, False, None]"),
            "[true, false, null]"
        );
    }

    #[test]
    fn test_trailing_commas_dropped() {
        assert_eq!(normalize_object_literal("[1, 2, ]"), "[1, 2 ]");
        assert_eq!(normalize_object_literal("{'a': 1,\n}"), "{\"a\": 1\n}");
    }

    #[test]
    fn test_exponent_numbers_untouched() {
        assert_eq!(normalize_object_literal("[1e5, -2.5E-3]"), "[1e5, -2.5E-3]");
    }

    #[test]
    fn test_javascript_number_forms() {
        assert_eq!(normalize_object_literal("[.5, -.25, 5., +3]"), "[0.5, -0.25, 5, 3]");
        assert_eq!(normalize_object_literal("[5.e2, 1.5e+3]"), "[5e2, 1.5e+3]");
    }

    #[test]
    fn test_infinity_becomes_null() {
        assert_eq!(
            normalize_object_literal("[Infinity, -Infinity, +Infinity]"),
            "[null, null, null]"
        );
    }

    #[test]
    fn test_non_numbers_copied_through() {
        assert_eq!(normalize_object_literal("[-, .]"), "[-, .]");
    }

    #[test]
    fn test_double_quoted_strings_untouched() {
        let input = r#"{"label": "it's, fine"}"#;
        assert_eq!(normalize_object_literal(input), input);
    }
}
