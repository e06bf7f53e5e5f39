//! Aggregate assertion helper: every check in a batch runs, and all
//! failures are reported together instead of stopping at the first one.

use std::fmt::Debug;

#[derive(Default)]
pub struct Checks {
    failures: Vec<String>,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn that(&mut self, label: &str, ok: bool) {
        if !ok {
            self.failures.push(label.to_owned());
        }
    }

    pub fn eq<T>(&mut self, label: &str, expected: T, actual: T)
    where
        T: Debug + PartialEq,
    {
        if expected != actual {
            self.failures
                .push(format!("{label}: expected {expected:?}, got {actual:?}"));
        }
    }

    /// Panics with the full failure list when any check failed.
    pub fn report(self) {
        if !self.failures.is_empty() {
            panic!(
                "{} check(s) failed:\n  {}",
                self.failures.len(),
                self.failures.join("\n  ")
            );
        }
    }
}
