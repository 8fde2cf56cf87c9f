use std::cmp::Ordering;

/// Words that mark a pre-release; they sort below a missing token so that
/// `11-ea` < `11`.
const PRE_RELEASE: &[&str] = &["ea", "alpha", "beta", "rc", "snapshot", "preview", "pre"];

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    /// Digit run with leading zeros stripped.
    Num(&'a str),
    Word(&'a str),
}

impl Token<'_> {
    fn is_pre_release(&self) -> bool {
        match self {
            Token::Word(w) => PRE_RELEASE.iter().any(|p| w.eq_ignore_ascii_case(p)),
            Token::Num(_) => false,
        }
    }

    /// Rank of the token's class; the end of a version sits between
    /// pre-release words and everything else.
    fn class(token: Option<&Self>) -> u8 {
        match token {
            Some(t) if t.is_pre_release() => 0,
            None => 1,
            Some(Token::Word(_)) => 2,
            Some(Token::Num(_)) => 3,
        }
    }

    fn cmp_slot(left: Option<&Self>, right: Option<&Self>) -> Ordering {
        Self::class(left)
            .cmp(&Self::class(right))
            .then_with(|| match (left, right) {
                (Some(Token::Num(a)), Some(Token::Num(b))) => {
                    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
                }
                (Some(Token::Word(a)), Some(Token::Word(b))) => a
                    .bytes()
                    .map(|c| c.to_ascii_lowercase())
                    .cmp(b.bytes().map(|c| c.to_ascii_lowercase())),
                _ => Ordering::Equal,
            })
    }
}

fn tokenize(version: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let bytes = version.as_bytes();
    let mut start = 0;
    while start < bytes.len() {
        let c = bytes[start];
        if !c.is_ascii_alphanumeric() {
            start += 1;
            continue;
        }
        let digit = c.is_ascii_digit();
        let mut end = start;
        while end < bytes.len()
            && bytes[end].is_ascii_alphanumeric()
            && bytes[end].is_ascii_digit() == digit
        {
            end += 1;
        }
        let text = &version[start..end];
        if digit {
            let trimmed = text.trim_start_matches('0');
            tokens.push(Token::Num(if trimmed.is_empty() { "0" } else { trimmed }));
        } else {
            tokens.push(Token::Word(text));
        }
        start = end;
    }
    tokens
}

/// Compare two version strings token by token.
///
/// Digit runs compare numerically, letter runs case-insensitively, and a
/// number sorts above a word. Separators (`.`, `-`, `_`, `+`, spaces) are
/// ignored. Pre-release words sort below every other word and below the
/// end of a version, so `11-ea` < `11` < `11.0.1` and `11-ea` < `11-b`.
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = tokenize(a);
    let right = tokenize(b);

    (0..left.len().max(right.len()))
        .map(|i| Token::cmp_slot(left.get(i), right.get(i)))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}
