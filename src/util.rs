use num_traits::Float;

#[macro_export]
macro_rules! profile(
  ($title: literal, $stmt: stmt) => {{
    let t0 = std::time::Instant::now();
    $stmt
    println!("{} profile: {}ms", $title, t0.elapsed().as_millis());
  }}
);

/// `n` equally spaced samples covering `[a, b]`, endpoints included.
/// A single-sample sequence collapses to `a`.
pub fn linspace<T: Float>(a: T, b: T, n: usize) -> impl Iterator<Item = T> {
  let step = if n > 1 {
    (b - a) / T::from(n - 1).unwrap()
  } else {
    T::zero()
  };
  (0..n).map(move |k|
    // pin the far endpoint, float accumulation must not drift past `b`
    if n > 1 && k == n - 1 { b } else { a + step * T::from(k).unwrap() }
  )
}
