//! Min-max decimation for long traces.

/// Reduce `points` to at most about `2 * buckets` points, keeping the extremes.
///
/// The input is split into `buckets` consecutive runs; each run contributes its
/// lowest and highest point in their original order. Short traces come back unchanged.
///
/// # Example
///
/// ```
/// use lagsim_app::plotting::decimate_minmax;
///
/// let points: Vec<[f64; 2]> = (0..1000).map(|i| [i as f64, (i % 7) as f64]).collect();
/// let decimated = decimate_minmax(&points, 50);
/// assert!(decimated.len() <= 100);
/// ```
pub fn decimate_minmax(points: &[[f64; 2]], buckets: usize) -> Vec<[f64; 2]> {
    if buckets == 0 {
        return Vec::new();
    }
    if points.len() <= buckets * 2 {
        return points.to_vec();
    }

    let bucket_size = points.len() / buckets;
    let mut result = Vec::with_capacity(buckets * 2);

    for bucket in 0..buckets {
        let start = bucket * bucket_size;
        // Last bucket absorbs the remainder
        let end = if bucket == buckets - 1 {
            points.len()
        } else {
            start + bucket_size
        };

        let run = &points[start..end];
        let mut lo = 0;
        let mut hi = 0;
        for (i, p) in run.iter().enumerate() {
            if p[1] < run[lo][1] {
                lo = i;
            }
            if p[1] > run[hi][1] {
                hi = i;
            }
        }

        match lo.cmp(&hi) {
            std::cmp::Ordering::Less => result.extend([run[lo], run[hi]]),
            std::cmp::Ordering::Greater => result.extend([run[hi], run[lo]]),
            std::cmp::Ordering::Equal => result.push(run[lo]),
        }
    }

    result
}
