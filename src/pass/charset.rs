//! Character sets and the pool they form together.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";

/// An ordered run of characters plus how many of them a password must contain.
///
/// Duplicates are kept; a character listed twice is twice as likely to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    chars: Vec<char>,
    min: usize,
}

impl CharSet {
    pub fn new(chars: impl IntoIterator<Item = char>, min: usize) -> Self {
        Self {
            chars: chars.into_iter().collect(),
            min,
        }
    }

    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Minimum number of characters from this set in every password.
    #[inline]
    pub fn min(&self) -> usize {
        self.min
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

/// Resolve an index into the virtual concatenation of `sets` to
/// `(set index, offset within that set)`. `None` past the end of the pool.
pub(crate) fn locate(sets: &[CharSet], mut index: usize) -> Option<(usize, usize)> {
    for (i, set) in sets.iter().enumerate() {
        if index < set.len() {
            return Some((i, index));
        }
        index -= set.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets() -> Vec<CharSet> {
        vec![
            CharSet::new("abc".chars(), 1),
            CharSet::new("".chars(), 0),
            CharSet::new("XY".chars(), 0),
            CharSet::new("0".chars(), 2),
        ]
    }

    #[test]
    fn locate_walks_sets_in_order() {
        let sets = sets();
        assert_eq!(locate(&sets, 0), Some((0, 0)));
        assert_eq!(locate(&sets, 2), Some((0, 2)));
        assert_eq!(locate(&sets, 3), Some((2, 0)));
        assert_eq!(locate(&sets, 4), Some((2, 1)));
        assert_eq!(locate(&sets, 5), Some((3, 0)));
    }

    #[test]
    fn locate_past_the_pool_is_none() {
        assert_eq!(locate(&sets(), 6), None);
        assert_eq!(locate(&[], 0), None);
    }

    #[test]
    fn duplicates_are_kept() {
        let set = CharSet::new("aab".chars(), 0);
        assert_eq!(set.len(), 3);
        assert_eq!(set.chars(), &['a', 'a', 'b']);
        assert!(set.contains('b'));
        assert!(!set.contains('c'));
    }
}
