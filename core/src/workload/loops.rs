use anyhow::{Result, anyhow};

/// Builds `0..n` one push at a time.
pub fn push_sequence(n: i64) -> Vec<i64> {
    let mut data = Vec::new();
    for i in 0..n {
        data.push(i);
    }
    data
}

/// Sums `data[v]` for every value `v` stored in `data`.
///
/// Each element is used as an index back into the slice, so the result only
/// equals the plain sum when `data` is `0..len`.
pub fn index_sum(data: &[i64]) -> Result<i64> {
    let mut total = 0;
    for &value in data {
        let slot = usize::try_from(value)
            .ok()
            .and_then(|idx| data.get(idx))
            .ok_or_else(|| anyhow!("value {} is not a valid index into {} elements", value, data.len()))?;
        total += slot;
    }
    Ok(total)
}
