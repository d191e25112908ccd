use crate::random::{RandomError, RandomSource, draw};

/// Uniform in-place permutation (Fisher-Yates, front to back).
///
/// Position `i` swaps with a position drawn from `i..len`. Slices shorter than
/// two elements are left alone without touching `random`.
pub fn shuffle<R, T>(random: &R, items: &mut [T]) -> Result<(), RandomError>
where
    R: RandomSource + ?Sized,
{
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        let k = draw(random, n - i)?;
        items.swap(i, i + k);
    }
    Ok(())
}
