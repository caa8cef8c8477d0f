// NOTE: Quantization tables are data, not branching.
// The estimator only ever sees a bit-width. Which names exist and what they
// map to lives in the tables below (and in user tables loaded from config),
// so adding or re-tuning a level never touches the formula.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const STANDARD_TABLE: &str = "standard";
pub const K_QUANT_TABLE: &str = "k-quant";

/// Compile-time entry of a built-in table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantSpec {
    pub name: &'static str,
    pub bits: f64,
}

impl QuantSpec {
    pub const fn new(name: &'static str, bits: f64) -> Self {
        Self { name, bits }
    }
}

/// Integer bit-widths plus the usual float formats.
const STANDARD_SPECS: &[QuantSpec] = &[
    QuantSpec::new("1-bit", 1.0),
    QuantSpec::new("2-bit", 2.0),
    QuantSpec::new("3-bit", 3.0),
    QuantSpec::new("4-bit", 4.0),
    QuantSpec::new("5-bit", 5.0),
    QuantSpec::new("6-bit", 6.0),
    QuantSpec::new("8-bit", 8.0),
    QuantSpec::new("fp16", 16.0),
    QuantSpec::new("bf16", 16.0),
    QuantSpec::new("fp32", 32.0),
];

/// llama.cpp style names. K-quant sub-variants (S/M/L) keep some tensors at
/// higher precision, so their effective width sits above the nominal one.
const K_QUANT_SPECS: &[QuantSpec] = &[
    QuantSpec::new("q4", 4.0),
    QuantSpec::new("q5", 5.0),
    QuantSpec::new("q8", 8.0),
    QuantSpec::new("fp16", 16.0),
    QuantSpec::new("q2_K", 2.5),
    QuantSpec::new("q3_K_S", 3.0),
    QuantSpec::new("q3_K_M", 3.5),
    QuantSpec::new("q3_K_L", 3.75),
    QuantSpec::new("q4_K_S", 4.5),
    QuantSpec::new("q4_K_M", 4.75),
    QuantSpec::new("q5_K_S", 5.5),
    QuantSpec::new("q5_K_M", 5.75),
    QuantSpec::new("q6_K", 6.5),
];

/// A named bit-width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantizationLevel {
    pub name: String,
    pub bits: f64,
}

impl QuantizationLevel {
    pub fn new(name: impl Into<String>, bits: f64) -> Self {
        Self {
            name: name.into(),
            bits,
        }
    }

    pub fn bytes_per_param(&self) -> f64 {
        self.bits / 8.0
    }
}

impl From<&QuantSpec> for QuantizationLevel {
    fn from(spec: &QuantSpec) -> Self {
        Self::new(spec.name, spec.bits)
    }
}

/// Immutable, ordered set of quantization levels.
///
/// Order is display order. The default selection is the first level unless
/// the table names another one. Lookups are exact and case-sensitive
/// (`q4_K_M` and `q4_k_m` are different keys).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantizationTable {
    name: String,
    levels: Vec<QuantizationLevel>,
    #[serde(skip)]
    default_index: usize,
}

impl QuantizationTable {
    /// Build a table, rejecting empty tables, duplicate names and
    /// non-positive bit-widths.
    pub fn new(name: impl Into<String>, levels: Vec<QuantizationLevel>) -> Result<Self> {
        let name = name.into();
        if levels.is_empty() {
            return Err(Error::EmptyTable(name));
        }

        let mut seen = HashSet::new();
        for level in &levels {
            if !seen.insert(level.name.as_str()) {
                return Err(Error::DuplicateLevel {
                    table: name,
                    level: level.name.clone(),
                });
            }
            if !level.bits.is_finite() || level.bits <= 0.0 {
                return Err(Error::InvalidBitWidth {
                    level: level.name.clone(),
                    bits: level.bits,
                });
            }
        }

        Ok(Self {
            name,
            levels,
            default_index: 0,
        })
    }

    /// Select the default level by name.
    pub fn with_default(mut self, level: &str) -> Result<Self> {
        match self.levels.iter().position(|l| l.name == level) {
            Some(index) => {
                self.default_index = index;
                Ok(self)
            }
            None => Err(Error::UnknownDefault {
                table: self.name,
                level: level.to_string(),
            }),
        }
    }

    fn from_specs(name: &str, specs: &[QuantSpec], default: &str) -> Self {
        let levels: Vec<QuantizationLevel> = specs.iter().map(QuantizationLevel::from).collect();
        let default_index = levels.iter().position(|l| l.name == default).unwrap_or(0);
        Self {
            name: name.to_string(),
            levels,
            default_index,
        }
    }

    pub fn standard() -> Self {
        Self::from_specs(STANDARD_TABLE, STANDARD_SPECS, "4-bit")
    }

    pub fn k_quant() -> Self {
        Self::from_specs(K_QUANT_TABLE, K_QUANT_SPECS, "q4")
    }

    /// Built-in tables in display order.
    pub fn builtin() -> Vec<Self> {
        vec![Self::standard(), Self::k_quant()]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn levels(&self) -> &[QuantizationLevel] {
        &self.levels
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.levels.iter().map(|level| level.name.as_str())
    }

    pub fn default_level(&self) -> &QuantizationLevel {
        // `new` and the built-in specs never produce an empty table
        &self.levels[self.default_index]
    }

    pub fn level(&self, name: &str) -> Option<&QuantizationLevel> {
        self.levels.iter().find(|level| level.name == name)
    }

    /// Bit-width for `name`, or `None` when the table has no such level.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.level(name).map(|level| level.bits)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.level(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Ordered collection of tables, built-ins first.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSet {
    tables: Vec<QuantizationTable>,
}

impl Default for TableSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TableSet {
    pub fn builtin() -> Self {
        Self {
            tables: QuantizationTable::builtin(),
        }
    }

    /// Add a table. A table with the same name is replaced in place, so a
    /// user table called `standard` shadows the built-in one.
    pub fn insert(&mut self, table: QuantizationTable) {
        match self.tables.iter_mut().find(|t| t.name == table.name) {
            Some(existing) => *existing = table,
            None => self.tables.push(table),
        }
    }

    pub fn with_tables(mut self, tables: impl IntoIterator<Item = QuantizationTable>) -> Self {
        for table in tables {
            self.insert(table);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&QuantizationTable> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuantizationTable> {
        self.tables.iter()
    }
}
