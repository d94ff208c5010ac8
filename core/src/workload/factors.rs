/// Every divisor of `n` in increasing order, found by trying each candidate
/// in `1..=n`.
pub fn factors(n: i64) -> Vec<i64> {
    let mut found = Vec::new();
    for i in 1..=n {
        if n % i == 0 {
            found.push(i);
        }
    }
    found
}
