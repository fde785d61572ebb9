//! Canonical recipe record types.
//!
//! The record serializes back to the same hierarchical shape the markup
//! format uses, so a normalized recipe can be written out and re-normalized
//! losslessly. Struct field order is the canonical field order.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_yaml::{Mapping, Value};

/// Prefix marking extension fields.
pub const X_PREFIX: &str = "x-";

/// Fully-normalized recipe record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub recipe_name: String,
    pub oven_fan: OvenFan,
    pub oven_temp: Vec<OvenTemp>,
    pub oven_time: Value,
    pub yields: Vec<YieldEntry>,
    pub ingredients: Vec<Ingredient>,
    pub notes: Value,
    pub recipe_uuid: String,
    pub source_book: SourceBook,
    pub source_authors: Value,
    pub source_url: Value,
    pub steps: Vec<Step>,
    /// Extension bucket: every top-level field the schema does not know.
    pub x: Mapping,
}

impl Recipe {
    /// The record as a raw value tree.
    pub fn to_value(&self) -> Result<Value, serde_yaml::Error> {
        serde_yaml::to_value(self)
    }
}

/// Oven fan setting. Free text that does not match a known setting is
/// preserved verbatim rather than dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum OvenFan {
    Off,
    Low,
    High,
    Other(Value),
}

impl Serialize for OvenFan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OvenFan::Off => serializer.serialize_str("Off"),
            OvenFan::Low => serializer.serialize_str("Low"),
            OvenFan::High => serializer.serialize_str("High"),
            OvenFan::Other(value) => value.serialize(serializer),
        }
    }
}

/// A single oven temperature: unit (canonically `C` or `F`) and amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OvenTemp {
    pub unit: Value,
    pub amount: Amount,
}

impl Default for OvenTemp {
    fn default() -> Self {
        OvenTemp {
            unit: Value::String(String::new()),
            amount: Amount::Raw(Value::String(String::new())),
        }
    }
}

/// An amount somewhere along the coercion tiers: exact integer, degraded
/// float, or the original value kept verbatim (e.g. `"1 1/2"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Amount {
    Int(i64),
    Float(f64),
    Raw(Value),
}

/// A single `unit: amount` yield entry.
#[derive(Debug, Clone, PartialEq)]
pub struct YieldEntry {
    pub unit: String,
    pub amount: Amount,
}

impl Serialize for YieldEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.unit, &self.amount)?;
        map.end()
    }
}

/// A single `name: detail` ingredient entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub detail: IngredientDetail,
}

impl Serialize for Ingredient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.detail)?;
        map.end()
    }
}

/// Everything known about one ingredient.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngredientDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amounts: Option<Vec<IngredientAmount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usda_num: Option<Value>,
    /// Substitutions recurse one level: a substitution never carries its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitutions: Option<Vec<Ingredient>>,
}

/// One measurement of an ingredient. There is one entry per yield.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientAmount {
    pub unit: Value,
    pub amount: Amount,
    /// Fields beyond unit/amount, e.g. stray notes. Carried through verbatim.
    #[serde(flatten)]
    pub extra: Mapping,
}

/// Attribution for a recipe that came from a book.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Value>,
    /// Extension (`x-`) fields, including renamed unknown fields.
    #[serde(flatten)]
    pub extra: Mapping,
}

/// A single preparation step.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Step {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub haccp: Option<Haccp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Value>>,
}

/// HACCP annotations on a step. A step should carry a control point or a
/// critical control point, not both; when both appear, both are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Haccp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_point: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_control_point: Option<Value>,
    /// Non-standard HACCP fields, merged through verbatim.
    #[serde(flatten)]
    pub extra: Mapping,
}
