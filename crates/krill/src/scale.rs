//! Domain-to-pixel mappings used to derive particle targets and radii.

/// Linear interpolation from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps `v` into the range. A collapsed domain maps everything to the
    /// range midpoint instead of dividing by zero.
    pub fn value(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }
}

/// Square-root area scale from `[0, max]` onto a radius range.
///
/// Radii grow with the square root of the value so that particle *area*
/// tracks the value. A value of 0 still yields the minimum radius; dots
/// must stay visible even for players who never scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    max: f64,
    range: (f64, f64),
}

impl SqrtScale {
    pub fn new(max: f64, range: (f64, f64)) -> Self {
        Self { max, range }
    }

    pub fn radius(&self, v: f64) -> f64 {
        let (r_min, r_max) = self.range;
        if self.max <= 0.0 {
            return r_min;
        }
        let t = (v / self.max).clamp(0.0, 1.0);
        (r_min + (r_max - r_min) * t.sqrt()).max(r_min)
    }
}

/// Y coordinate of guide lane `index` out of `count`, evenly spaced inside
/// `height` with the same spacing kept to both edges. Zero lanes collapse
/// to the vertical midline.
pub fn lane_y(index: usize, count: usize, height: f64) -> f64 {
    if count == 0 {
        return height / 2.0;
    }
    height * (index as f64 + 1.0) / (count as f64 + 1.0)
}
