use crate::config::ReferenceMaxima;
use crate::core::{NormalizedFeatures, PatientMeasurement};

/// Divide each raw measurement by its reference maximum.
///
/// No clamping and no rounding: a glucose above the reference maximum
/// produces a normalized value above 1.0.
pub fn normalize(measurement: &PatientMeasurement, maxima: &ReferenceMaxima) -> NormalizedFeatures {
    NormalizedFeatures::from_fn(|feature| measurement.value(feature) / maxima.get(feature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feature;

    #[test]
    fn test_reference_values_normalize_to_one() {
        let maxima = ReferenceMaxima::default();
        let at_max = PatientMeasurement {
            pregnancies: 17.0,
            glucose: 199.0,
            blood_pressure: 122.0,
            skin_thickness: 99.0,
            insulin: 846.0,
            bmi: 67.1,
            diabetes_pedigree: 2.42,
            age: 81.0,
        };
        let normalized = normalize(&at_max, &maxima);
        for (feature, value) in normalized.iter() {
            assert_eq!(value, 1.0, "{feature}");
        }
    }

    #[test]
    fn test_values_above_maximum_are_not_capped() {
        let m = PatientMeasurement {
            glucose: 398.0,
            ..Default::default()
        };
        let normalized = normalize(&m, &ReferenceMaxima::default());
        assert_eq!(normalized.get(Feature::Glucose), 2.0);
        assert_eq!(normalized.get(Feature::Age), 0.0);
    }
}
