/// Trial division over every candidate in `2..n`. No square-root bound.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    for i in 2..n {
        if n % i == 0 {
            return false;
        }
    }
    true
}

pub fn primes_below(n: i64) -> Vec<i64> {
    let mut primes = Vec::new();
    for i in 0..n {
        if is_prime(i) {
            primes.push(i);
        }
    }
    primes
}
