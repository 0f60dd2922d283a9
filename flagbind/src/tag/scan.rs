//! Quote-aware splitting of raw tag strings.

use crate::TagError;

/// Quoting state of the scanner.
///
/// The two quoted states are mutually exclusive: a quote character of the
/// other kind is literal text while a span is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Double,
    Single,
}

impl Quote {
    const fn toggle(self, ch: char) -> Self {
        match (self, ch) {
            (Self::None, '"') => Self::Double,
            (Self::None, '\'') => Self::Single,
            (Self::Double, '"') | (Self::Single, '\'') => Self::None,
            (state, _) => state,
        }
    }

    const fn closing(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Double => Some('"'),
            Self::Single => Some('\''),
        }
    }
}

/// Splits `input` into tokens on every `delimiter` outside a quoted span.
///
/// Quote characters are kept verbatim in the token text; stripping happens
/// later during resolution. A delimiter always closes the current token, so
/// consecutive delimiters yield empty tokens, but a trailing empty token is
/// dropped and an empty input yields no tokens at all.
///
/// # Errors
///
/// Returns [`TagError::Syntax`] naming the missing closing character when a
/// quoted span is still open at the end of the input.
///
/// # Examples
///
/// ```rust
/// use flagbind::tag::tokenize;
///
/// let tokens = tokenize("a;'b;c';d", ';')?;
/// assert_eq!(tokens, ["a", "'b;c'", "d"]);
/// # Ok::<(), flagbind::TagError>(())
/// ```
pub fn tokenize(input: &str, delimiter: char) -> Result<Vec<String>, TagError> {
    let mut tokens = Vec::with_capacity(4);
    let mut current = String::new();
    let mut quote = Quote::None;

    for ch in input.chars() {
        match ch {
            '"' | '\'' => {
                quote = quote.toggle(ch);
                current.push(ch);
            }
            _ if ch == delimiter && quote == Quote::None => {
                tokens.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    if let Some(closing) = quote.closing() {
        return Err(TagError::Syntax { quote: closing });
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}
