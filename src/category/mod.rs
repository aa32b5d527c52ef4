//! Category name matching: which categories get through, and under what name
//! the engine sees them.
//!
//! Patterns use a single wildcard character, `*`:
//!
//! | pattern      | matches                          |
//! |--------------|----------------------------------|
//! | `App.Orders` | exactly `App.Orders`             |
//! | `App.*`      | anything starting with `App.`    |
//! | `*Service`   | anything ending with `Service`   |
//! | `*Orders*`   | anything containing `Orders`     |
//! | `*`          | everything                       |
//!
//! A `*` anywhere else in the pattern is an ordinary character.

/// The wildcard character recognised at either end of a pattern.
pub const WILDCARD: char = '*';

/// Accept-list matching is case-sensitive, alias lookup is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

/// A parsed pattern, borrowed from the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern<'a> {
    Exact(&'a str),
    StartsWith(&'a str),
    EndsWith(&'a str),
    Contains(&'a str),
}

impl<'a> Pattern<'a> {
    /// Classifies by where the wildcard sits. Never fails: anything without a
    /// leading or trailing `*` is an exact name.
    #[must_use]
    pub fn parse(pattern: &'a str) -> Self {
        if pattern == "*" {
            return Self::StartsWith("");
        }
        let leading = pattern.starts_with(WILDCARD);
        let trailing = pattern.ends_with(WILDCARD);
        match (leading, trailing) {
            (true, true) => Self::Contains(&pattern[1..pattern.len() - 1]),
            (false, true) => Self::StartsWith(&pattern[..pattern.len() - 1]),
            (true, false) => Self::EndsWith(&pattern[1..]),
            (false, false) => Self::Exact(pattern),
        }
    }

    #[must_use]
    pub fn matches(self, category: &str, case: CaseSensitivity) -> bool {
        match case {
            CaseSensitivity::Sensitive => self.matches_exact_case(category),
            CaseSensitivity::Insensitive => {
                let category = category.to_lowercase();
                let text = self.text().to_lowercase();
                self.with_text(&text).matches_exact_case(&category)
            }
        }
    }

    /// The pattern with its wildcards stripped.
    #[must_use]
    pub const fn text(self) -> &'a str {
        match self {
            Self::Exact(s) | Self::StartsWith(s) | Self::EndsWith(s) | Self::Contains(s) => s,
        }
    }

    const fn with_text<'b>(self, text: &'b str) -> Pattern<'b> {
        match self {
            Self::Exact(_) => Pattern::Exact(text),
            Self::StartsWith(_) => Pattern::StartsWith(text),
            Self::EndsWith(_) => Pattern::EndsWith(text),
            Self::Contains(_) => Pattern::Contains(text),
        }
    }

    fn matches_exact_case(self, category: &str) -> bool {
        match self {
            Self::Exact(name) => category == name,
            Self::StartsWith(prefix) => category.starts_with(prefix),
            Self::EndsWith(suffix) => category.ends_with(suffix),
            Self::Contains(part) => category.contains(part),
        }
    }
}

/// Case-sensitive match of one category against one pattern.
#[must_use]
pub fn matches(category: &str, pattern: &str) -> bool {
    Pattern::parse(pattern).matches(category, CaseSensitivity::Sensitive)
}

/// Empty list accepts everything; otherwise the first matching pattern wins.
#[must_use]
pub fn is_accepted<S: AsRef<str>>(category: &str, patterns: &[S]) -> bool {
    patterns.is_empty() || patterns.iter().any(|p| matches(category, p.as_ref()))
}

/// Returns the alias of the first entry whose pattern matches `category`
/// ignoring case, or `category` itself when nothing matches.
///
/// Independent of acceptance: a rejected category still resolves.
#[must_use]
pub fn resolve_alias<'a, K, V>(category: &'a str, aliases: &'a [(K, V)]) -> &'a str
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    aliases
        .iter()
        .find(|(pattern, _)| {
            Pattern::parse(pattern.as_ref()).matches(category, CaseSensitivity::Insensitive)
        })
        .map_or(category, |(_, alias)| alias.as_ref())
}
