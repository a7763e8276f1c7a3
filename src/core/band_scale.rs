use indexmap::IndexSet;

use crate::error::{ChartError, ChartResult};

/// Ordinal scale that splits a pixel range into equally sized bands.
///
/// Layout follows the usual band algorithm: `step` covers one band plus its
/// inner gap, outer padding is expressed in steps, leftover space is split
/// by `align` (0.5 centers the bands). With rounding enabled, step, start and
/// bandwidth snap to whole pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    round: bool,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Builds a scale over `domain` (duplicates collapse, first occurrence wins).
    pub fn new<I, S>(domain: I, range_start: f64, range_end: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band range must be finite".to_owned(),
            ));
        }

        let mut scale = Self {
            domain: domain.into_iter().map(Into::into).collect(),
            range_start,
            range_end,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            round: false,
            start: 0.0,
            step: 0.0,
            bandwidth: 0.0,
        };
        scale.rescale();
        Ok(scale)
    }

    /// Sets inner and outer padding to the same ratio.
    pub fn with_padding(mut self, padding: f64) -> ChartResult<Self> {
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        self.padding_inner = padding;
        self.padding_outer = padding;
        self.rescale();
        Ok(self)
    }

    #[must_use]
    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self.rescale();
        self
    }

    fn rescale(&mut self) {
        let count = self.domain.len() as f64;
        let (mut start, stop) = if self.is_reversed() {
            (self.range_end, self.range_start)
        } else {
            (self.range_start, self.range_end)
        };

        let mut step =
            (stop - start) / (count - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        if self.round {
            step = step.floor();
        }
        start += (stop - start - step * (count - self.padding_inner)) * self.align;
        let mut bandwidth = step * (1.0 - self.padding_inner);
        if self.round {
            start = start.round();
            bandwidth = bandwidth.round();
        }

        self.start = start;
        self.step = step;
        self.bandwidth = bandwidth;
    }

    /// Left edge of the band for `key`, `None` when the key is not in the domain.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<f64> {
        let index = self.domain.get_index_of(key)?;
        Some(self.position_at(index))
    }

    fn position_at(&self, index: usize) -> f64 {
        // Descending ranges reuse the ascending layout with band order flipped.
        let slot = if self.is_reversed() {
            self.domain.len() - 1 - index
        } else {
            index
        };
        self.start + self.step * slot as f64
    }

    fn is_reversed(&self) -> bool {
        self.range_end < self.range_start
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Domain keys in band order.
    pub fn domain(&self) -> impl ExactSizeIterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.domain.contains(key)
    }
}
