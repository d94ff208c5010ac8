/// Naive recursive Fibonacci.
pub fn fib(n: i64) -> i64 {
    if n < 2 {
        return n;
    }
    fib(n - 1) + fib(n - 2)
}

/// Calls `fib(n)` `times` times and sums the results.
pub fn fib_sum(n: i64, times: usize) -> i64 {
    let mut sum = 0;
    for _ in 0..times {
        sum += fib(n);
    }
    sum
}
