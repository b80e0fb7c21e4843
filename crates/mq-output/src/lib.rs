//! `mq-output` — time-series output and spoilage reporting.
//!
//! The CSV backend implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `mq_sim::SimObserver` so a run can
//! stream its records straight to disk.  [`spoilage`] holds the consumer-side
//! reduction over a finished step sequence: the first time microbial density
//! reaches the spoilage threshold.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mq_output::{CsvWriter, SimOutputObserver, SpoilageReport};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! let steps = Sim::new(config.clone(), noise).run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! let report = SpoilageReport::from_steps(config.scenario, &steps);
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod spoilage;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use spoilage::{SpoilageReport, spoilage_time};
pub use writer::OutputWriter;
