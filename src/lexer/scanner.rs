use crate::error::{Error, Result};

/// One atomic token scanned from the front of the source text
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    /// Double-quoted string literal, contents taken verbatim (no escapes)
    Str(String),
    /// Run of ASCII digits
    Number(f64),
    /// Maximal run of characters excluding whitespace, `(`, `)`, `,`, `"`
    Word(String),
}

/// Returns the input with all leading whitespace removed
pub fn skip_space(input: &str) -> &str {
    input.trim_start()
}

/// Scans one atom from the front of `input`
///
/// Returns the atom together with the text remaining after it. The three
/// shapes are tried in order: string literal, number literal, word. Fails
/// when none matches, which includes an unterminated string literal (the
/// opening `"` is not a word character either).
pub fn scan_atom(input: &str) -> Result<(Atom, &str)> {
    if let Some(rest) = input.strip_prefix('"') {
        return match rest.find('"') {
            Some(end) => Ok((Atom::Str(rest[..end].to_string()), &rest[end + 1..])),
            None => Err(Error::UnexpectedSyntax(input.to_string())),
        };
    }

    let digits = input.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 && !word_continues(&input[digits..]) {
        let value = input[..digits]
            .parse::<f64>()
            .map_err(|_| Error::UnexpectedSyntax(input.to_string()))?;
        return Ok((Atom::Number(value), &input[digits..]));
    }

    let word_len = input
        .chars()
        .take_while(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | ',' | '"'))
        .map(char::len_utf8)
        .sum::<usize>();
    if word_len == 0 {
        return Err(Error::UnexpectedSyntax(input.to_string()));
    }
    Ok((Atom::Word(input[..word_len].to_string()), &input[word_len..]))
}

/// A digit run followed by a word character is not a number literal, it is
/// the front of a word like `123abc`.
fn word_continues(rest: &str) -> bool {
    matches!(rest.chars().next(), Some(c) if c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_space() {
        assert_eq!(skip_space("  \n\t x"), "x");
        assert_eq!(skip_space("x "), "x ");
        assert_eq!(skip_space("   "), "");
    }

    #[test]
    fn test_scan_number() {
        let (atom, rest) = scan_atom("42, 10)").unwrap();
        assert_eq!(atom, Atom::Number(42.0));
        assert_eq!(rest, ", 10)");
    }

    #[test]
    fn test_scan_string() {
        let (atom, rest) = scan_atom("\"hello world\")").unwrap();
        assert_eq!(atom, Atom::Str("hello world".to_string()));
        assert_eq!(rest, ")");
    }

    #[test]
    fn test_string_contents_are_verbatim() {
        // No escape processing: the backslash stays in the string
        let (atom, _) = scan_atom("\"a\\n\"").unwrap();
        assert_eq!(atom, Atom::Str("a\\n".to_string()));
    }

    #[test]
    fn test_unterminated_string() {
        let err = scan_atom("\"abc").unwrap_err();
        assert_eq!(err, Error::UnexpectedSyntax("\"abc".to_string()));
    }

    #[test]
    fn test_scan_word() {
        let (atom, rest) = scan_atom("count, 1)").unwrap();
        assert_eq!(atom, Atom::Word("count".to_string()));
        assert_eq!(rest, ", 1)");
    }

    #[test]
    fn test_operators_are_words() {
        let (atom, rest) = scan_atom("+(1, 2)").unwrap();
        assert_eq!(atom, Atom::Word("+".to_string()));
        assert_eq!(rest, "(1, 2)");
    }

    #[test]
    fn test_digits_followed_by_letters_lex_as_word() {
        let (atom, rest) = scan_atom("123abc ").unwrap();
        assert_eq!(atom, Atom::Word("123abc".to_string()));
        assert_eq!(rest, " ");
    }

    #[test]
    fn test_empty_input_fails() {
        let err = scan_atom("").unwrap_err();
        assert_eq!(err, Error::UnexpectedSyntax(String::new()));
    }

    #[test]
    fn test_bare_paren_fails() {
        assert!(scan_atom(")").is_err());
    }
}
