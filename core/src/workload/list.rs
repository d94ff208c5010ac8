/// `0..n` collected into a vector.
pub fn sequence(n: i64) -> Vec<i64> {
    (0..n).collect()
}

/// Reverses `data` in place with `len / 2` swaps working inward from both ends.
pub fn reverse(data: &mut [i64]) {
    let size = data.len();
    let end = size / 2;
    for i in 0..end {
        let n = size - i - 1;
        data.swap(i, n);
    }
}
