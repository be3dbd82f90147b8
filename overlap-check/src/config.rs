//! Run-level settings shared by extraction and comparison.
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::errors::{OverlapError, Result};

/// Number of consecutive words forming one n-gram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sensitivity(NonZeroUsize);

impl Sensitivity {
    /// Width used when the caller does not choose one.
    pub const DEFAULT: usize = 15;

    /// Creates an instance, rejecting zero.
    pub fn new(n: usize) -> Result<Self> {
        NonZeroUsize::new(n)
            .map(Self)
            .ok_or_else(|| OverlapError::invalid_sensitivity(n))
    }

    /// Gets the n-gram width.
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        const WIDTH: NonZeroUsize = match NonZeroUsize::new(Sensitivity::DEFAULT) {
            Some(n) => n,
            None => panic!("default sensitivity must be non-zero"),
        };
        Self(WIDTH)
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Sensitivity {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .parse::<usize>()
            .map_err(|e| format!("Could not parse a sensitivity value: {e}"))?;
        Self::new(n).map_err(|e| e.to_string())
    }
}

/// What to do when a document cannot be read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadPolicy {
    /// Record the failure and leave the document out of the comparison.
    #[default]
    Skip,
    /// Stop at the first failure.
    Abort,
}
