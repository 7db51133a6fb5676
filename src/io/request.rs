//! Request decoding for the prediction boundary.
//!
//! All eight measurements are required and must be JSON numbers. Unknown
//! keys are ignored. Negative or out-of-range numbers are accepted; the
//! engine handles them.

use serde_json::{Map, Value};

use crate::core::{Feature, PatientMeasurement};
use crate::errors::{Error, Result};

/// Decode a single JSON object into a measurement.
pub fn parse_request(body: &str) -> Result<PatientMeasurement> {
    let value: Value = serde_json::from_str(body)?;
    measurement_from_value(&value)
}

/// Decode either one JSON object or an array of objects.
pub fn parse_batch(body: &str) -> Result<Vec<PatientMeasurement>> {
    let value: Value = serde_json::from_str(body)?;
    match &value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                measurement_from_value(item).map_err(|e| match e {
                    Error::InvalidInput { field, reason } => {
                        Error::invalid_input(format!("[{i}].{field}"), reason)
                    }
                    Error::MalformedRequest(msg) => {
                        Error::MalformedRequest(format!("item {i}: {msg}"))
                    }
                    other => other,
                })
            })
            .collect(),
        _ => Ok(vec![measurement_from_value(&value)?]),
    }
}

pub fn measurement_from_value(value: &Value) -> Result<PatientMeasurement> {
    let object = value.as_object().ok_or_else(|| {
        Error::MalformedRequest(format!("expected a JSON object, got {}", type_name(value)))
    })?;

    let mut values = [0.0; Feature::COUNT];
    for feature in Feature::ALL {
        values[feature.index()] = required_number(object, feature)?;
    }

    Ok(PatientMeasurement {
        pregnancies: values[Feature::Pregnancies.index()],
        glucose: values[Feature::Glucose.index()],
        blood_pressure: values[Feature::BloodPressure.index()],
        skin_thickness: values[Feature::SkinThickness.index()],
        insulin: values[Feature::Insulin.index()],
        bmi: values[Feature::Bmi.index()],
        diabetes_pedigree: values[Feature::DiabetesPedigree.index()],
        age: values[Feature::Age.index()],
    })
}

fn required_number(object: &Map<String, Value>, feature: Feature) -> Result<f64> {
    let key = feature.key();
    let value = object
        .get(key)
        .ok_or_else(|| Error::invalid_input(key, "missing required field"))?;

    let number = value.as_f64().ok_or_else(|| {
        Error::invalid_input(key, format!("expected a number, got {}", type_name(value)))
    })?;

    if number.is_finite() {
        Ok(number)
    } else {
        Err(Error::invalid_input(key, "expected a finite number"))
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
