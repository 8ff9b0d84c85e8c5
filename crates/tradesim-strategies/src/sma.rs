//! Simple moving average over the tail of a price history.

/// Simple Moving Average (SMA) over the most recent `period` values.
#[derive(Debug, Clone, Copy)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Arithmetic mean of the last `period` values.
    ///
    /// Returns `None` when the period is zero or exceeds the available
    /// history.
    pub fn value(&self, data: &[f64]) -> Option<f64> {
        if self.period == 0 || data.len() < self.period {
            return None;
        }

        let tail = &data[data.len() - self.period..];
        Some(tail.iter().sum::<f64>() / self.period as f64)
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_over_tail() {
        let sma = Sma::new(3);
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];

        assert_eq!(sma.value(&data), Some(4.0));
    }

    #[test]
    fn test_sma_full_window() {
        let sma = Sma::new(5);
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];

        assert_eq!(sma.value(&data), Some(3.0));
    }

    #[test]
    fn test_sma_insufficient_data() {
        let sma = Sma::new(10);

        assert_eq!(sma.value(&[1.0, 2.0]), None);
    }

    #[test]
    fn test_sma_zero_period() {
        let sma = Sma::new(0);

        assert_eq!(sma.value(&[1.0, 2.0]), None);
    }
}
