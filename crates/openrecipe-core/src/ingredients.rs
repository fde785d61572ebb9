//! Ingredient and substitution parsing.
//!
//! The most involved field parser: each ingredient is a `name: detail`
//! mapping whose amount list is cross-checked against the yield count, and
//! whose substitutions recurse through the same parser exactly one level
//! deep.

use serde_yaml::{Mapping, Value};

use crate::coerce::coerce_numeric;
use crate::defaults::Defaults;
use crate::diagnostics::DiagnosticLog;
use crate::types::{Amount, Ingredient, IngredientAmount, IngredientDetail};
use crate::value::{present, scalar_str};

/// Whether we are parsing the top-level ingredient list or a substitution
/// list nested inside an ingredient. Substitutions may not carry their own
/// substitutions; a deeper `substitutions` key is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientContext {
    TopLevel,
    Substitution,
}

/// Parse an ingredient list (or a substitution list, by context).
///
/// `yield_count` is the number of yield entries already parsed; each
/// ingredient is expected to carry `max(yield_count, 1)` amounts, and a
/// mismatch is reported but never blocks.
pub fn parse_ingredients(
    raw: Option<&Value>,
    defaults: &Defaults,
    yield_count: usize,
    context: IngredientContext,
    log: &mut DiagnosticLog,
) -> Vec<Ingredient> {
    let Some(src) = present(raw) else {
        match context {
            IngredientContext::TopLevel => log.warn("no ingredients"),
            IngredientContext::Substitution => log.warn("no substitutions"),
        }
        return Vec::new();
    };
    let Value::Sequence(entries) = src else {
        log.warn("ingredients is not a list");
        return Vec::new();
    };
    let mut out = Vec::new();
    for entry in entries {
        let Value::Mapping(map) = entry else {
            log.warn("ingredient entry is not a mapping");
            continue;
        };
        for (key, detail) in map {
            let Some(name) = scalar_str(key) else {
                log.warn("ingredient name is not text");
                continue;
            };
            out.push(parse_ingredient(
                &name,
                detail,
                defaults,
                yield_count,
                context,
                log,
            ));
        }
    }
    out
}

fn parse_ingredient(
    name: &str,
    raw_detail: &Value,
    defaults: &Defaults,
    yield_count: usize,
    context: IngredientContext,
    log: &mut DiagnosticLog,
) -> Ingredient {
    let empty = Mapping::new();
    let src = match raw_detail {
        Value::Mapping(map) => map,
        Value::Null => &empty,
        _ => {
            log.warn(format!("ingredient '{name}' detail is not a mapping"));
            &empty
        }
    };

    let mut detail = IngredientDetail::default();

    match src.get("amounts") {
        Some(Value::Sequence(amounts)) => {
            if amounts.len() != yield_count.max(1) {
                log.warn(
                    "mismatch between number of yields and number of measurements of ingredients",
                );
            }
            detail.amounts = Some(
                amounts
                    .iter()
                    .map(|item| parse_amount(name, item, defaults, log))
                    .collect(),
            );
        }
        Some(_) => log.warn(format!("amounts for '{name}' is not a list")),
        None => log.warn(format!("no amounts were provided for '{name}'")),
    }

    detail.processing = src.get("processing").cloned();
    detail.notes = src.get("notes").cloned();
    detail.usda_num = src.get("usda_num").cloned();

    if context == IngredientContext::TopLevel {
        if let Some(subs) = src.get("substitutions") {
            detail.substitutions = Some(parse_ingredients(
                Some(subs),
                defaults,
                yield_count,
                IngredientContext::Substitution,
                log,
            ));
        }
    }

    // "substitutions" counts as known even one level deep, where it is
    // silently not parsed rather than unknown.
    for (key, _) in src {
        let known = matches!(
            key.as_str(),
            Some("amounts")
                | Some("processing")
                | Some("notes")
                | Some("usda_num")
                | Some("substitutions")
        );
        if !known {
            let label = scalar_str(key).unwrap_or_else(|| "?".into());
            log.warn(format!(
                "unknown field '{label}' in ingredient '{name}', ignored"
            ));
        }
    }

    Ingredient {
        name: name.to_string(),
        detail,
    }
}

fn parse_amount(
    name: &str,
    raw: &Value,
    defaults: &Defaults,
    log: &mut DiagnosticLog,
) -> IngredientAmount {
    let mut out = IngredientAmount {
        unit: Value::String(defaults.ingredient_unit.clone()),
        amount: Amount::Int(defaults.ingredient_amount),
        extra: Mapping::new(),
    };
    let Value::Mapping(map) = raw else {
        log.warn(format!("amount entry for '{name}' is not a mapping"));
        return out;
    };

    match map.get("unit") {
        Some(unit) => out.unit = unit.clone(),
        None => log.warn(format!(
            "no unit provided for '{name}', using '{}'",
            defaults.ingredient_unit
        )),
    }

    match map.get("amount") {
        Some(value) => {
            let amount = coerce_numeric(value);
            if matches!(amount, Amount::Float(_)) {
                log.warn(format!("amount for '{name}' is a float, not an int"));
            }
            // Non-numeric text like "1 1/2" is an expected amount, not an
            // error; it stays verbatim without a diagnostic.
            out.amount = amount;
        }
        None => log.warn(format!(
            "no amount provided for '{name}', using '{}'",
            defaults.ingredient_amount
        )),
    }

    // Anything else inside an amount entry is unexpected but could carry
    // meaning, eg. "3 cups sugar, packed tightly". Keep it.
    for (key, value) in map {
        if matches!(key.as_str(), Some("unit") | Some("amount")) {
            continue;
        }
        let label = scalar_str(key).unwrap_or_else(|| "?".into());
        log.warn(format!("unknown value '{label}' in amounts for '{name}'"));
        out.extra.insert(key.clone(), value.clone());
    }

    out
}
