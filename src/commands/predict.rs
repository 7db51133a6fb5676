use crate::config::{self, EngineConfig, ScalingPreset};
use crate::core::{PatientMeasurement, PredictionResult};
use crate::engine::{predict_batch, predict_checked};
use crate::errors::{Error, ErrorResponse};
use crate::io::{self, create_writer, OutputFormat};
use crate::samples::SampleProfile;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct PredictConfig {
    pub input: Option<PathBuf>,
    pub sample: Option<SampleProfile>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub preset: Option<ScalingPreset>,
}

pub fn handle_predict(options: PredictConfig) -> Result<()> {
    let engine_config = resolve_config(&options)?;
    log::info!(
        "Ensemble divisor {}, {} scorer(s)",
        engine_config.ensemble.post_blend_divisor,
        engine_config.scorers.len()
    );

    let results = match gather_measurements(&options).and_then(|m| score_all(&m, &engine_config))
    {
        Ok(results) => results,
        Err(err) => {
            if options.format == OutputFormat::Json {
                let response = ErrorResponse::from(&err);
                println!("{}", serde_json::to_string(&response)?);
            }
            return Err(err.into());
        }
    };

    log::info!("Scored {} measurement(s)", results.len());
    match &options.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_results(options.format, BufWriter::new(file), &results)?;
        }
        None => write_results(options.format, std::io::stdout().lock(), &results)?,
    }
    Ok(())
}

fn resolve_config(options: &PredictConfig) -> Result<EngineConfig> {
    let loaded = match &options.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config(),
    };
    match &options.config {
        Some(path) => log::info!("Using configuration from {}", path.display()),
        None => log::info!("Using discovered or built-in configuration"),
    }
    Ok(match options.preset {
        Some(preset) => preset.apply(loaded),
        None => loaded,
    })
}

fn gather_measurements(options: &PredictConfig) -> crate::errors::Result<Vec<PatientMeasurement>> {
    if let Some(sample) = options.sample {
        return Ok(vec![sample.measurement()]);
    }
    let path = options.input.as_deref().unwrap_or(Path::new("-"));
    let body = io::read_input(path).map_err(|source| Error::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    io::parse_batch(&body)
}

/// Single records go through the checked path; batches are scored in
/// parallel and checked afterwards.
fn score_all(
    measurements: &[PatientMeasurement],
    config: &EngineConfig,
) -> crate::errors::Result<Vec<PredictionResult>> {
    if let [single] = measurements {
        return Ok(vec![predict_checked(single, config)?]);
    }

    let results = predict_batch(measurements, config);
    if let Some((i, bad)) = results.iter().enumerate().find(|(_, r)| !r.is_finite()) {
        return Err(Error::Prediction(format!(
            "non-finite result for item {i} (probability={})",
            bad.probability
        )));
    }
    Ok(results)
}

fn write_results<W: Write>(
    format: OutputFormat,
    writer: W,
    results: &[PredictionResult],
) -> Result<()> {
    let mut output = create_writer(format, writer);
    output.write_results(results)
}
