//! Core normalization engine for Open Recipe Format documents.
//!
//! The engine takes an untyped hierarchical value tree, as produced by
//! deserializing a human-edited YAML recipe, and produces a canonical
//! [`Recipe`] record plus an ordered log of non-fatal warnings describing
//! every deviation from the expected schema. Missing fields get documented
//! defaults, values are coerced toward their expected types, and unrecognized
//! fields are preserved under the `x-` extension namespace instead of being
//! dropped. Normalization never fails; only reading or parsing the document
//! itself can.

pub mod coerce;
pub mod defaults;
pub mod diagnostics;
pub mod error;
pub mod fields;
pub mod ingredients;
pub mod io;
pub mod normalize;
pub mod steps;
pub mod types;
pub mod value;

pub use diagnostics::DiagnosticLog;
pub use error::RecipeError;
pub use io::{load_file, load_str, save_file, to_yaml_string};
pub use normalize::{normalize, Normalized};
pub use types::{
    Amount, Haccp, Ingredient, IngredientAmount, IngredientDetail, OvenFan, OvenTemp, Recipe,
    SourceBook, Step, YieldEntry, X_PREFIX,
};
