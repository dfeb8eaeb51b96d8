//! Search configuration for the round-trip fare finder.

/// Configuration parameters for a fare search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Day increment between consecutive sampled departure dates.
    /// Larger strides issue fewer availability queries but may miss
    /// cheap days between samples.
    pub stride_days: u32,

    /// Maximum number of trips to return.
    pub top_k: usize,

    /// Maximum number of availability queries in flight per direction.
    pub max_in_flight: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(stride_days: u32, top_k: usize, max_in_flight: usize) -> Self {
        Self {
            stride_days,
            top_k,
            max_in_flight,
        }
    }

    /// Returns the stride, clamped so enumeration always advances.
    pub fn stride(&self) -> u32 {
        self.stride_days.max(1)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            stride_days: 3,
            top_k: 30,
            max_in_flight: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.stride_days, 3);
        assert_eq!(config.top_k, 30);
        assert_eq!(config.max_in_flight, 16);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(7, 5, 4);

        assert_eq!(config.stride_days, 7);
        assert_eq!(config.top_k, 5);
        assert_eq!(config.max_in_flight, 4);
    }

    #[test]
    fn zero_stride_is_clamped() {
        let config = SearchConfig::new(0, 30, 16);

        assert_eq!(config.stride(), 1);
        assert_eq!(SearchConfig::default().stride(), 3);
    }
}
