//! CSV output backend.
//!
//! Creates one file in the configured output directory:
//! - `quality_timeseries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use mq_core::SimulationStep;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Writes the step sequence to a CSV file, one row per step.
pub struct CsvWriter {
    steps:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the CSV file in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut steps = Writer::from_path(dir.join("quality_timeseries.csv"))?;
        steps.write_record([
            "time_h",
            "t_env_c",
            "t_prod_c",
            "humidity_pct",
            "microbes_cfu_g",
            "moisture_pct",
            "protein_pct",
            "fat_oxidation_pct",
            "quality_index",
        ])?;

        Ok(Self { steps, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_step(&mut self, step: &SimulationStep) -> OutputResult<()> {
        self.steps.write_record(&[
            step.time.to_string(),
            step.t_env.to_string(),
            step.t_prod.to_string(),
            step.humidity.to_string(),
            (step.microbes as i64).to_string(),
            step.moisture.to_string(),
            step.protein.to_string(),
            step.fat_oxidation.to_string(),
            step.quality_index.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.steps.flush()?;
        Ok(())
    }
}
