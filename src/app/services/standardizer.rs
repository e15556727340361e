//! Row standardization and numeric validation
//!
//! This stage turns one raw catalog row into a [`CanonicalRecord`], or
//! into nothing. A row missing any of the three numeric fields, or whose
//! cells do not parse to finite numbers, is an expected per-row outcome
//! and is dropped without surfacing an error; the loader keeps an
//! aggregate count per source.

use tracing::debug;

use super::field_mapper::mapper_for;
use crate::app::models::{CanonicalRecord, Disposition, RawRow, SourceTag};

/// Standardize one raw row from the given source
///
/// Returns `None` when period, radius, or temperature is absent or does
/// not parse to a finite number. On success the record's `id` is 0; the
/// loader assigns identity during the merge.
pub fn standardize_row(row: &RawRow, source: SourceTag) -> Option<CanonicalRecord> {
    let fields = mapper_for(source).map(row);

    let period = parse_finite(fields.period.as_deref())?;
    let radius = parse_finite(fields.radius.as_deref())?;
    let temperature = parse_finite(fields.temperature.as_deref())?;

    let disposition = Disposition::normalize(fields.raw_disposition.as_deref());

    match CanonicalRecord::new(
        fields.name,
        source,
        radius,
        period,
        temperature,
        disposition,
        row.clone(),
    ) {
        Ok(record) => Some(record),
        Err(e) => {
            debug!("Dropped {} row during standardization: {}", source, e);
            None
        }
    }
}

/// Parse an optional cell as a finite f64
fn parse_finite(value: Option<&str>) -> Option<f64> {
    value?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_kepler_row() -> RawRow {
        let mut row = RawRow::new();
        row.push("kepid", "10797460");
        row.push("kepler_name", "Kepler-227 b");
        row.push("koi_disposition", "CONFIRMED");
        row.push("koi_period", "9.48803557");
        row.push("koi_prad", "2.26");
        row.push("koi_teq", "793");
        row
    }

    fn tess_row(period: &str, radius: &str, temperature: &str) -> RawRow {
        let mut row = RawRow::new();
        row.push("toi", "700.01");
        row.push("tfopwg_disp", "PC");
        row.push("pl_orbper", period);
        row.push("pl_rade", radius);
        row.push("pl_eqt", temperature);
        row
    }

    #[test]
    fn test_valid_row_becomes_record() {
        let record = standardize_row(&valid_kepler_row(), SourceTag::Kepler).unwrap();
        assert_eq!(record.id, 0);
        assert_eq!(record.name, "Kepler-227 b");
        assert_eq!(record.source, SourceTag::Kepler);
        assert!((record.period - 9.48803557).abs() < 1e-9);
        assert!((record.radius - 2.26).abs() < 1e-9);
        assert!((record.temperature - 793.0).abs() < 1e-9);
        assert_eq!(record.disposition, Disposition::Confirmed);
        assert_eq!(record.raw.get("koi_prad"), Some("2.26"));
    }

    #[test]
    fn test_missing_numeric_field_drops_row() {
        for (period, radius, temperature) in [
            ("", "2.0", "500"),
            ("1.0", "", "500"),
            ("1.0", "2.0", ""),
        ] {
            let row = tess_row(period, radius, temperature);
            assert!(standardize_row(&row, SourceTag::Tess).is_none());
        }
    }

    #[test]
    fn test_non_numeric_field_drops_row() {
        let row = tess_row("not-a-number", "2.0", "500");
        assert!(standardize_row(&row, SourceTag::Tess).is_none());

        let row = tess_row("1.0", "n/a", "500");
        assert!(standardize_row(&row, SourceTag::Tess).is_none());
    }

    #[test]
    fn test_non_finite_field_drops_row() {
        for value in ["NaN", "inf", "-inf"] {
            let row = tess_row("1.0", "2.0", value);
            assert!(standardize_row(&row, SourceTag::Tess).is_none());
        }
    }

    #[test]
    fn test_disposition_defaults_to_candidate() {
        let mut row = RawRow::new();
        row.push("kepler_name", "Kepler-227 b");
        row.push("koi_period", "9.488");
        row.push("koi_prad", "2.26");
        row.push("koi_teq", "793");
        let record = standardize_row(&row, SourceTag::Kepler).unwrap();
        assert_eq!(record.disposition, Disposition::Candidate);
    }

    #[test]
    fn test_disposition_is_always_one_of_three() {
        for raw in ["CONFIRMED", "C", "FALSE POSITIVE", "FP", "PC", "KP", ""] {
            let mut row = RawRow::new();
            row.push("tfopwg_disp", raw);
            row.push("pl_orbper", "1.0");
            row.push("pl_rade", "2.0");
            row.push("pl_eqt", "500");
            let record = standardize_row(&row, SourceTag::Tess).unwrap();
            assert!(Disposition::all_values().contains(&record.disposition));
        }
    }

    #[test]
    fn test_row_without_identifiers_still_gets_name() {
        let mut row = RawRow::new();
        row.push("pl_orbper", "12.5");
        row.push("pl_rade", "1.4");
        row.push("pl_eqt", "300");
        let record = standardize_row(&row, SourceTag::K2).unwrap();
        assert_eq!(record.name, "K2-Object");
    }

    #[test]
    fn test_raw_row_is_retained_verbatim() {
        let row = valid_kepler_row();
        let record = standardize_row(&row, SourceTag::Kepler).unwrap();
        assert_eq!(record.raw, row);
    }
}
