use crate::core::{PredictionResult, RiskLevel};
use clap::ValueEnum;
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &[PredictionResult]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    /// A single result is written as an object, several as an array.
    fn write_results(&mut self, results: &[PredictionResult]) -> anyhow::Result<()> {
        let json = match results {
            [single] => serde_json::to_string_pretty(single)?,
            many => serde_json::to_string_pretty(many)?,
        };
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &[PredictionResult]) -> anyhow::Result<()> {
        for (i, result) in results.iter().enumerate() {
            if results.len() > 1 {
                writeln!(
                    self.writer,
                    "{}",
                    format!("Patient #{}", i + 1).as_str().bold().underline()
                )?;
            }
            self.write_summary(result)?;
            self.write_models(result)?;
            self.write_feature_importance(result)?;
            self.write_recommendations(result)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_summary(&mut self, result: &PredictionResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Diabetes Risk Assessment".bold().blue())?;
        writeln!(self.writer, "{}", "========================".blue())?;
        writeln!(self.writer, "  Risk Level: {}", risk_badge(result.risk_level))?;
        writeln!(self.writer, "  Probability: {}", percent(result.probability))?;
        writeln!(self.writer, "  Confidence: {}", percent(result.confidence))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_models(&mut self, result: &PredictionResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Model Predictions:".bold())?;
        let width = result
            .models
            .iter()
            .map(|m| m.name.len())
            .max()
            .unwrap_or(0);
        for model in &result.models {
            writeln!(
                self.writer,
                "  {:<width$}  {:>7}  (confidence: {})",
                model.name,
                percent(model.probability),
                percent(model.confidence),
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_feature_importance(&mut self, result: &PredictionResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Feature Importance:".bold())?;
        for entry in &result.feature_importance {
            writeln!(
                self.writer,
                "  {:<18} {:>7}",
                entry.feature,
                percent(entry.importance)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, result: &PredictionResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Recommendations:".bold())?;
        for (i, line) in result.recommendations.iter().enumerate() {
            writeln!(self.writer, "  {}. {}", i + 1, line)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn risk_badge(level: RiskLevel) -> ColoredString {
    let label = level.as_str().to_uppercase();
    match level {
        RiskLevel::Low => label.as_str().green().bold(),
        RiskLevel::Medium => label.as_str().yellow().bold(),
        RiskLevel::High => label.as_str().red().bold(),
    }
}

fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
