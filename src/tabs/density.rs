//! Density tab: single built-up density scalar with a qualitative bucket.

/// Qualitative label for the built-up density value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityBucket {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl DensityBucket {
    /// Bucket thresholds over the raw 0..1 density value.
    pub fn from_value(value: f64) -> Self {
        if value < 0.05 {
            DensityBucket::Low
        } else if value < 0.15 {
            DensityBucket::Moderate
        } else if value < 0.30 {
            DensityBucket::High
        } else {
            DensityBucket::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DensityBucket::Low => "low built-up density",
            DensityBucket::Moderate => "moderate built-up density",
            DensityBucket::High => "high built-up density",
            DensityBucket::VeryHigh => "very high built-up density",
        }
    }
}

/// Density tab view model.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityView {
    /// Raw density, 0..1.
    pub value: f64,
    pub bucket: DensityBucket,
}

impl DensityView {
    /// Display string, e.g. `12.34%`.
    pub fn pct_text(&self) -> String {
        format!("{:.2}%", self.value * 100.0)
    }
}

pub fn density_view(value: f64) -> DensityView {
    DensityView {
        value,
        bucket: DensityBucket::from_value(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_thresholds() {
        assert_eq!(DensityBucket::from_value(0.0), DensityBucket::Low);
        assert_eq!(DensityBucket::from_value(0.049), DensityBucket::Low);
        assert_eq!(DensityBucket::from_value(0.05), DensityBucket::Moderate);
        assert_eq!(DensityBucket::from_value(0.15), DensityBucket::High);
        assert_eq!(DensityBucket::from_value(0.30), DensityBucket::VeryHigh);
        assert_eq!(DensityBucket::from_value(0.95), DensityBucket::VeryHigh);
    }

    #[test]
    fn test_pct_text() {
        let view = density_view(0.1234);
        assert_eq!(view.pct_text(), "12.34%");
        assert_eq!(view.bucket, DensityBucket::Moderate);
    }
}
