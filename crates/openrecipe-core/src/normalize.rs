//! Recipe record assembly.
//!
//! Runs the per-field parsers in a fixed order over a lower-cased view of the
//! input document, then routes every unclaimed field into the `x` extension
//! bucket. The order matters twice: the yield count feeds the ingredient
//! amount-count check, and the resolved recipe name feeds the fallback
//! source URL.

use serde_yaml::{Mapping, Value};

use crate::defaults::Defaults;
use crate::diagnostics::DiagnosticLog;
use crate::fields;
use crate::ingredients::{parse_ingredients, IngredientContext};
use crate::steps::parse_steps;
use crate::types::{Recipe, X_PREFIX};
use crate::value::lower_keys;

/// Top-level fields claimed by a named parser. Everything else left in the
/// document afterward is an extension field.
const CLAIMED_FIELDS: &[&str] = &[
    "recipe_name",
    "oven_fan",
    "oven_temp",
    "oven_time",
    "yields",
    "ingredients",
    "notes",
    "recipe_uuid",
    "source_book",
    "source_authors",
    "source_url",
    "steps",
];

/// A normalized recipe together with the warnings produced along the way.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub recipe: Recipe,
    pub warnings: Vec<String>,
}

/// Normalize a raw recipe document into a canonical [`Recipe`].
///
/// Never fails: every schema deviation is handled with a default or a
/// verbatim passthrough, and reported in [`Normalized::warnings`].
pub fn normalize(input: Value) -> Normalized {
    let mut log = DiagnosticLog::new();

    let doc = match lower_keys(input) {
        Value::Mapping(map) => map,
        Value::Null => Mapping::new(),
        _ => {
            log.warn("recipe document is not a mapping");
            Mapping::new()
        }
    };

    let mut defaults = Defaults::new();

    let recipe_name = fields::parse_recipe_name(doc.get("recipe_name"), &defaults, &mut log);
    defaults.resolve_name(&recipe_name);

    let oven_fan = fields::parse_oven_fan(doc.get("oven_fan"), &mut log);
    let oven_temp = fields::parse_oven_temp(doc.get("oven_temp"), &mut log);
    let oven_time = fields::parse_oven_time(doc.get("oven_time"));
    let yields = fields::parse_yields(doc.get("yields"), &defaults, &mut log);
    let ingredients = parse_ingredients(
        doc.get("ingredients"),
        &defaults,
        yields.len(),
        IngredientContext::TopLevel,
        &mut log,
    );
    let notes = fields::parse_notes(doc.get("notes"));
    let recipe_uuid = fields::parse_recipe_uuid(doc.get("recipe_uuid"), &defaults, &mut log);
    let source_book = fields::parse_source_book(doc.get("source_book"), &mut log);
    let source_authors = fields::parse_source_authors(doc.get("source_authors"), &defaults, &mut log);
    let source_url = fields::parse_source_url(doc.get("source_url"), &defaults, &mut log);
    let steps = parse_steps(doc.get("steps"), &mut log);
    let x = collect_extensions(&doc, &mut log);

    Normalized {
        recipe: Recipe {
            recipe_name,
            oven_fan,
            oven_temp,
            oven_time,
            yields,
            ingredients,
            notes,
            recipe_uuid,
            source_book,
            source_authors,
            source_url,
            steps,
            x,
        },
        warnings: log.into_warnings(),
    }
}

/// Gather every field no named parser claimed into the extension bucket.
///
/// Fields already carrying the extension prefix are kept as-is; everything
/// else is renamed under it. A canonical record re-fed as input carries its
/// previous extension bucket under `x`; those entries fold back in rather
/// than being renamed again, which keeps normalization idempotent.
fn collect_extensions(doc: &Mapping, log: &mut DiagnosticLog) -> Mapping {
    let mut out = Mapping::new();
    for (key, value) in doc {
        let Some(field) = key.as_str() else {
            log.warn("recipe contained a non-text field name, it has been stored in x");
            out.insert(key.clone(), value.clone());
            continue;
        };
        if CLAIMED_FIELDS.contains(&field) {
            continue;
        }
        if field == "x" {
            match value {
                Value::Mapping(bucket) => {
                    for (inner_key, inner_value) in bucket {
                        insert_extension(&mut out, inner_key, inner_value, log);
                    }
                }
                other => {
                    log.warn(format!(
                        "recipe contained unknown field 'x', this is now '{X_PREFIX}x'"
                    ));
                    out.insert(Value::String(format!("{X_PREFIX}x")), other.clone());
                }
            }
            continue;
        }
        insert_extension(&mut out, key, value, log);
    }
    out
}

fn insert_extension(out: &mut Mapping, key: &Value, value: &Value, log: &mut DiagnosticLog) {
    let Some(field) = key.as_str() else {
        log.warn("recipe contained a non-text field name, it has been stored in x");
        out.insert(key.clone(), value.clone());
        return;
    };
    if field.starts_with(X_PREFIX) {
        log.warn(format!(
            "recipe contained x-field '{field}', it has been stored but not understood"
        ));
        out.insert(key.clone(), value.clone());
    } else {
        log.warn(format!(
            "recipe contained unknown field '{field}', this is now '{X_PREFIX}{field}'"
        ));
        out.insert(Value::String(format!("{X_PREFIX}{field}")), value.clone());
    }
}
