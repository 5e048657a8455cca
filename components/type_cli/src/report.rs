//! Classification results for one input sequence

use std::fmt;

use core_types::{CoarseTag, RealTag, Value};
use serde::Serialize;
use type_classifier::{
    all_same_coarse_type, all_unique_real_types, classify_all_coarse, classify_all_real,
    count_by_real_type, FrequencyTable,
};

use crate::cli::Mode;
use crate::error::CliResult;

/// The results requested by a [`Mode`]; parts outside the mode are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// `typeof` tag of each value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coarse: Option<Vec<CoarseTag>>,
    /// Refined type of each value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real: Option<Vec<RealTag>>,
    /// Whether all values share a `typeof` tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same: Option<bool>,
    /// Whether every value has its own refined type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
    /// Refined types with their counts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<FrequencyTable>,
}

impl Report {
    /// Runs the classifications `mode` asks for over `values`.
    pub fn build(values: &[Value], mode: Mode) -> Self {
        Self {
            coarse: mode.includes(Mode::Coarse).then(|| classify_all_coarse(values)),
            real: mode.includes(Mode::Real).then(|| classify_all_real(values)),
            same: mode.includes(Mode::Same).then(|| all_same_coarse_type(values)),
            unique: mode.includes(Mode::Unique).then(|| all_unique_real_types(values)),
            count: mode.includes(Mode::Count).then(|| count_by_real_type(values)),
        }
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> CliResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn join<T: fmt::Display>(tags: &[T]) -> String {
    tags.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        if let Some(coarse) = &self.coarse {
            lines.push(format!("coarse: {}", join(coarse)));
        }
        if let Some(real) = &self.real {
            lines.push(format!("real: {}", join(real)));
        }
        if let Some(same) = self.same {
            lines.push(format!("same: {}", same));
        }
        if let Some(unique) = self.unique {
            lines.push(format!("unique: {}", unique));
        }
        if let Some(count) = &self.count {
            lines.push("count:".to_string());
            for entry in count {
                lines.push(format!("{}\t{}", entry.tag, entry.count));
            }
        }
        write!(f, "{}", lines.join("\n"))
    }
}
