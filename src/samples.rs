//! Built-in sample patients, one per risk profile.

use clap::ValueEnum;

use crate::core::PatientMeasurement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleProfile {
    /// Young, lean, normal glucose
    Low,
    /// Borderline glucose and BMI, middle-aged
    Medium,
    /// Elevated glucose, obese, several pregnancies
    High,
}

impl SampleProfile {
    pub const ALL: [SampleProfile; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn measurement(self) -> PatientMeasurement {
        match self {
            Self::Low => PatientMeasurement {
                pregnancies: 1.0,
                glucose: 99.0,
                blood_pressure: 65.0,
                skin_thickness: 15.0,
                insulin: 80.0,
                bmi: 25.0,
                diabetes_pedigree: 0.1,
                age: 30.0,
            },
            Self::Medium => PatientMeasurement {
                pregnancies: 3.0,
                glucose: 123.0,
                blood_pressure: 76.0,
                skin_thickness: 29.0,
                insulin: 120.0,
                bmi: 28.5,
                diabetes_pedigree: 0.35,
                age: 45.0,
            },
            Self::High => PatientMeasurement {
                pregnancies: 6.0,
                glucose: 148.0,
                blood_pressure: 72.0,
                skin_thickness: 35.0,
                insulin: 0.0,
                bmi: 33.6,
                diabetes_pedigree: 0.627,
                age: 50.0,
            },
        }
    }
}
