//! Begin/complete logging around a unit of work

use std::time::Instant;

use super::logger::Logger;
use crate::errors::QueryError;

/// Logs `{name}_BEGIN` on creation and `{name}_COMPLETE` or
/// `{name}_FAILED` when finished. A scope dropped without finishing logs
/// `{name}_INCOMPLETE` at WARN.
pub struct ObservationScope<'a> {
    logger: &'a Logger,
    name: &'a str,
    started: Instant,
    finished: bool,
}

impl<'a> ObservationScope<'a> {
    pub fn begin(logger: &'a Logger, name: &'a str, fields: &[(&str, &str)]) -> Self {
        logger.info(&format!("{}_BEGIN", name), fields);
        Self {
            logger,
            name,
            started: Instant::now(),
            finished: false,
        }
    }

    /// Logs a TRACE event for an intermediate step
    pub fn step(&self, step: &str, fields: &[(&str, &str)]) {
        self.logger.trace(&format!("{}_{}", self.name, step), fields);
    }

    pub fn complete(mut self, fields: &[(&str, &str)]) {
        self.finished = true;
        let elapsed = self.elapsed_us();
        let mut all: Vec<(&str, &str)> = fields.to_vec();
        all.push(("elapsed_us", elapsed.as_str()));
        self.logger.info(&format!("{}_COMPLETE", self.name), &all);
    }

    pub fn fail(mut self, err: &QueryError) {
        self.finished = true;
        let message = err.to_string();
        self.logger.error(
            &format!("{}_FAILED", self.name),
            &[("code", err.code()), ("message", message.as_str())],
        );
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn elapsed_us(&self) -> String {
        self.started.elapsed().as_micros().to_string()
    }
}

impl Drop for ObservationScope<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.logger.warn(
                &format!("{}_INCOMPLETE", self.name),
                &[("reason", "scope dropped without completion")],
            );
        }
    }
}
