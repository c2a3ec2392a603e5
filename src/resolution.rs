//! Grid-resolution check
//!
//! A numerical model resolves nucleation only if the nucleation length spans
//! at least [`MIN_CELLS_PER_NUCLEATION`] grid cells. Falling short is
//! advisory: the check reports it and logs a warning, it never fails.

use serde::{Deserialize, Serialize};

use crate::labeled::LabeledValues;
use crate::{ensure_positive, RuptureError};

pub const MIN_CELLS_PER_NUCLEATION: f64 = 3.0;

/// Non-fatal finding of the resolution check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Advisory {
    /// The worst-resolved scenario spans fewer than the required cells.
    UnderResolved {
        label: String,
        ratio: f64,
        required: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionReport {
    pub cell_size: f64,
    /// Nucleation length divided by cell size, per scenario label
    pub ratios: LabeledValues,
    pub min_ratio: f64,
    pub max_ratio: f64,
    pub advisory: Option<Advisory>,
}

impl ResolutionReport {
    pub fn is_adequate(&self) -> bool {
        self.advisory.is_none()
    }
}

/// Largest cell size that still resolves `length` with the 3-cell criterion.
pub fn max_cell_size_for(length: f64) -> Result<f64, RuptureError> {
    Ok(ensure_positive("nucleation length", length)? / MIN_CELLS_PER_NUCLEATION)
}

pub fn check_resolution(
    lengths: &LabeledValues,
    cell_size: f64,
) -> Result<ResolutionReport, RuptureError> {
    let cell_size = ensure_positive("grid cell size", cell_size)?;
    for (_, length) in lengths.iter() {
        ensure_positive("nucleation length", length)?;
    }

    let ratios = lengths.map_values(|length| length / cell_size);
    let (min_label, min_ratio) = ratios.min().ok_or_else(|| {
        RuptureError::InvalidArgument("no nucleation lengths to check".to_string())
    })?;
    let (_, max_ratio) = ratios.max().ok_or_else(|| {
        RuptureError::InvalidArgument("no nucleation lengths to check".to_string())
    })?;

    let advisory = if min_ratio < MIN_CELLS_PER_NUCLEATION {
        tracing::warn!(
            label = min_label,
            ratio = min_ratio,
            required = MIN_CELLS_PER_NUCLEATION,
            cell_size,
            "nucleation length is resolved by too few grid cells"
        );
        Some(Advisory::UnderResolved {
            label: min_label.to_string(),
            ratio: min_ratio,
            required: MIN_CELLS_PER_NUCLEATION,
        })
    } else {
        None
    };

    Ok(ResolutionReport {
        cell_size,
        ratios,
        min_ratio,
        max_ratio,
        advisory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn lengths() -> LabeledValues {
        [("coarse", 300.0), ("fine", 1200.0)].into_iter().collect()
    }

    #[test]
    fn computes_ratio_extrema() {
        let report = check_resolution(&lengths(), 100.0).unwrap();
        assert_relative_eq!(report.min_ratio, 3.0);
        assert_relative_eq!(report.max_ratio, 12.0);
        assert_eq!(report.ratios.get("fine"), Some(12.0));
        assert!(report.is_adequate());
    }

    #[test]
    fn under_resolution_is_advisory_only() {
        let report = check_resolution(&lengths(), 150.0).unwrap();
        assert!(!report.is_adequate());
        match report.advisory {
            Some(Advisory::UnderResolved { label, ratio, required }) => {
                assert_eq!(label, "coarse");
                assert_relative_eq!(ratio, 2.0);
                assert_eq!(required, MIN_CELLS_PER_NUCLEATION);
            }
            None => panic!("expected an advisory"),
        }
    }

    #[test]
    fn empty_mapping_is_invalid() {
        let err = check_resolution(&LabeledValues::new(), 85.0).unwrap_err();
        assert!(matches!(err, RuptureError::InvalidArgument(_)));
    }

    #[test]
    fn non_positive_cell_size_is_a_domain_error() {
        let err = check_resolution(&lengths(), 0.0).unwrap_err();
        assert!(matches!(err, RuptureError::Domain { .. }));
    }

    #[test]
    fn non_positive_or_non_finite_length_is_a_domain_error() {
        for bad in [0.0, -300.0, f64::INFINITY, f64::NAN] {
            let lengths: LabeledValues = [("ok", 300.0), ("bad", bad)].into_iter().collect();
            let err = check_resolution(&lengths, 85.0).unwrap_err();
            assert!(matches!(err, RuptureError::Domain { .. }), "{bad}");
        }
    }

    #[test]
    fn max_cell_size_meets_criterion() {
        let cell = max_cell_size_for(300.0).unwrap();
        assert_relative_eq!(cell, 100.0);
        let report = check_resolution(&[("h", 300.0)].into_iter().collect(), cell).unwrap();
        assert!(report.is_adequate());
    }
}
