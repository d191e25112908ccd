use std::fmt::{self, Write};
use std::ops::Deref;

use zeroize::{Zeroize, Zeroizing};

/// A generated password. The buffer is zeroized when dropped.
pub struct Password(Vec<char>);

impl Password {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    #[inline]
    pub(crate) fn push(&mut self, c: char) {
        self.0.push(c);
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [char] {
        &mut self.0
    }

    pub fn as_chars(&self) -> &[char] {
        &self.0
    }

    /// Render as a `String` that is itself zeroized on drop.
    pub fn to_zeroizing_string(&self) -> Zeroizing<String> {
        let mut s = Zeroizing::new(String::with_capacity(self.0.len()));
        s.extend(self.0.iter());
        s
    }
}

impl Deref for Password {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.0 {
            f.write_char(c)?;
        }
        Ok(())
    }
}

// Contents stay out of debug output and logs.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password").field("len", &self.0.len()).finish()
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(s: &str) -> Password {
        let mut p = Password::with_capacity(s.len());
        s.chars().for_each(|c| p.push(c));
        p
    }

    #[test]
    fn displays_its_characters() {
        let p = password("aé9!");
        assert_eq!(p.to_string(), "aé9!");
        assert_eq!(p.len(), 4);
        assert_eq!(p.to_zeroizing_string().as_str(), "aé9!");
    }

    #[test]
    fn debug_hides_contents() {
        let p = password("hunter2");
        let debug = format!("{p:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("len: 7"));
    }
}
