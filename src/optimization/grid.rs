/// Options for placing TOPPRA grid points along a path parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalcGridPointsOptions {
    pub max_err: f64,
    pub max_iter: usize,
    pub max_seg_length: f64,
    pub min_points: usize,
}

impl Default for CalcGridPointsOptions {
    fn default() -> Self {
        Self {
            max_err: 1e-3,
            max_iter: 100,
            max_seg_length: 0.05,
            min_points: 100,
        }
    }
}

/// How TOPPRA imposes constraints between grid points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ToppraDiscretization {
    #[default]
    Collocation,
    Interpolation,
}

/// Upper bound on the number of segments in a generated grid.
const MAX_GRID_SEGMENTS: usize = 1 << 20;

/// Evenly spaced grid over `[start, end]`.
///
/// The grid has at least `min_points` points (and never fewer than two), and
/// is refined until no segment exceeds `max_seg_length` or `max_iter`
/// doublings have been made. No grid has more than 2^20 segments. Returns an
/// empty grid for an empty or non-finite interval.
pub fn uniform_grid_points(start: f64, end: f64, options: &CalcGridPointsOptions) -> Vec<f64> {
    if !start.is_finite() || !end.is_finite() || end <= start {
        return Vec::new();
    }

    let length = end - start;
    let mut segments = (options.min_points.max(2) - 1).min(MAX_GRID_SEGMENTS);
    for _ in 0..options.max_iter {
        if options.max_seg_length <= 0.0 || length / segments as f64 <= options.max_seg_length {
            break;
        }
        match segments.checked_mul(2).filter(|&n| n <= MAX_GRID_SEGMENTS) {
            Some(refined) => segments = refined,
            None => {
                log::debug!(
                    "grid over [{start}, {end}] capped at {segments} segments, \
                     longer than {}",
                    options.max_seg_length
                );
                break;
            }
        }
    }

    (0..=segments)
        .map(|i| {
            if i == segments {
                end
            } else {
                start + length * i as f64 / segments as f64
            }
        })
        .collect()
}
