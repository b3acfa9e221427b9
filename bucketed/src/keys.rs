//! Key types with a relaxed notion of equality.

use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

/// A string key compared without regard to ASCII letter case.
///
/// Canonicalization is plain ASCII case folding: `A-Z` are treated as `a-z` and every other byte,
/// including all non-ASCII characters, is compared as-is. Locale-aware folding is out of scope.
///
/// Every hasher provided by this crate hashes the folded form, so keys that compare equal always
/// hash equally. The original spelling is preserved and returned by [`Caseless::as_str`].
///
/// # Examples
///
/// ```rust
/// use bucketed::keys::Caseless;
///
/// assert_eq!(Caseless("Content-Type"), Caseless("content-type"));
/// assert_ne!(Caseless("Straße"), Caseless("STRASSE"));
/// ```
#[derive(Clone, Copy, Default)]
pub struct Caseless<S>(pub S);

impl<S: AsRef<str>> Caseless<S> {
    pub fn new(value: S) -> Self {
        Self(value)
    }

    /// The key as originally spelled.
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    /// The canonical (ASCII lower-cased) form the key is hashed by.
    pub fn canonical(&self) -> String {
        self.as_str().to_ascii_lowercase()
    }

    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: AsRef<str>> From<S> for Caseless<S> {
    fn from(value: S) -> Self {
        Self(value)
    }
}

impl<S: AsRef<str>> PartialEq for Caseless<S> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl<S: AsRef<str>> Eq for Caseless<S> {}

impl<S: AsRef<str>> Hash for Caseless<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.as_str().bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        // Same terminator `str` uses, keeps tuples of keys prefix-free.
        state.write_u8(0xff);
    }
}

impl<S: AsRef<str>> Debug for Caseless<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Caseless").field(&self.as_str()).finish()
    }
}

impl<S: AsRef<str>> Display for Caseless<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
