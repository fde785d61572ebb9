//! Per-field parsers for the simple top-level recipe fields.
//!
//! Each parser takes the raw value for its field (or `None` when the field is
//! absent) plus the run's defaults, and returns the normalized value. Every
//! deviation from the expected shape lands in the diagnostic log; none of
//! these parsers fail, and none of them drop a value silently.

use serde_yaml::Value;

use crate::coerce::coerce_numeric;
use crate::defaults::Defaults;
use crate::diagnostics::DiagnosticLog;
use crate::types::{Amount, OvenFan, OvenTemp, SourceBook, YieldEntry, X_PREFIX};
use crate::value::{present, scalar_str};

pub fn parse_recipe_name(
    raw: Option<&Value>,
    defaults: &Defaults,
    log: &mut DiagnosticLog,
) -> String {
    match present(raw) {
        Some(src) => match scalar_str(src) {
            Some(name) => name,
            None => {
                let name = defaults.recipe_name.clone();
                log.warn(format!("recipe name is not text, using '{name}'"));
                name
            }
        },
        None => {
            let name = defaults.recipe_name.clone();
            log.warn(format!("no recipe name provided, using '{name}'"));
            name
        }
    }
}

pub fn parse_oven_fan(raw: Option<&Value>, log: &mut DiagnosticLog) -> OvenFan {
    let Some(src) = present(raw) else {
        return OvenFan::Off;
    };
    match src {
        Value::String(s) => match s.to_lowercase().as_str() {
            "" | "off" => OvenFan::Off,
            "low" => OvenFan::Low,
            "high" => OvenFan::High,
            _ => {
                log.warn(format!("oven fan setting '{s}' is invalid"));
                OvenFan::Other(src.clone())
            }
        },
        other => {
            log.warn("oven fan setting is invalid");
            OvenFan::Other(other.clone())
        }
    }
}

pub fn parse_oven_temp(raw: Option<&Value>, log: &mut DiagnosticLog) -> Vec<OvenTemp> {
    let Some(src) = present(raw) else {
        return Vec::new();
    };
    let Value::Sequence(entries) = src else {
        log.warn("oven temp is not a list");
        return Vec::new();
    };
    if entries.len() > 1 {
        log.warn("multiple oven temperatures detected");
    }
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut temp = OvenTemp::default();
        match entry {
            // A null entry keeps the empty placeholder without complaint.
            Value::Null => {}
            Value::Mapping(map) => {
                match map.get("unit") {
                    None => log.warn("no oven temp unit"),
                    Some(Value::String(u))
                        if u.eq_ignore_ascii_case("c") || u.eq_ignore_ascii_case("f") =>
                    {
                        temp.unit = Value::String(u.to_uppercase());
                    }
                    Some(other) => {
                        log.warn("oven temp unit is invalid");
                        temp.unit = other.clone();
                    }
                }
                match map.get("amount") {
                    None => log.warn("no oven temp amount"),
                    Some(value) => {
                        let amount = coerce_numeric(value);
                        match &amount {
                            Amount::Int(_) => {}
                            Amount::Float(_) => log.warn("oven temp amount is a float, not an int"),
                            Amount::Raw(_) => log.warn("oven temp amount is not an int or float"),
                        }
                        temp.amount = amount;
                    }
                }
            }
            _ => log.warn("oven temp entry is not a mapping"),
        }
        out.push(temp);
    }
    out
}

pub fn parse_oven_time(raw: Option<&Value>) -> Value {
    present(raw)
        .cloned()
        .unwrap_or_else(|| Value::String(String::new()))
}

pub fn parse_yields(
    raw: Option<&Value>,
    defaults: &Defaults,
    log: &mut DiagnosticLog,
) -> Vec<YieldEntry> {
    let Some(src) = present(raw) else {
        return Vec::new();
    };
    let Value::Sequence(entries) = src else {
        log.warn("yields is not a list");
        return Vec::new();
    };
    let mut out = Vec::new();
    for entry in entries {
        let Value::Mapping(map) = entry else {
            log.warn("yield entry is not a mapping");
            continue;
        };
        // A multi-entry mapping flattens to one yield per key/value pair.
        for (key, value) in map {
            let amount = coerce_numeric(value);
            match &amount {
                Amount::Int(_) => {}
                Amount::Float(_) => log.warn("yield amount is a float, not an int"),
                Amount::Raw(_) => log.warn("yield amount is not an int or float"),
            }
            let unit = match scalar_str(key).filter(|u| !u.is_empty()) {
                Some(unit) => unit,
                None => {
                    let unit = defaults.yield_unit.clone();
                    log.warn(format!("no yields unit, using '{unit}'"));
                    unit
                }
            };
            out.push(YieldEntry { unit, amount });
        }
    }
    out
}

pub fn parse_notes(raw: Option<&Value>) -> Value {
    present(raw)
        .cloned()
        .unwrap_or_else(|| Value::Sequence(Vec::new()))
}

pub fn parse_recipe_uuid(
    raw: Option<&Value>,
    defaults: &Defaults,
    log: &mut DiagnosticLog,
) -> String {
    match present(raw) {
        Some(src) => match scalar_str(src) {
            Some(uuid) => uuid,
            None => {
                let uuid = defaults.recipe_uuid.clone();
                log.warn(format!("recipe UUID is not text, using '{uuid}'"));
                uuid
            }
        },
        None => {
            let uuid = defaults.recipe_uuid.clone();
            log.warn(format!("no UUID provided, using '{uuid}'"));
            uuid
        }
    }
}

pub fn parse_source_book(raw: Option<&Value>, log: &mut DiagnosticLog) -> SourceBook {
    let mut out = SourceBook::default();
    let Some(src) = present(raw) else {
        return out;
    };
    let Value::Mapping(map) = src else {
        log.warn("source book is not a mapping");
        return out;
    };
    for (key, value) in map {
        let Some(field) = key.as_str() else {
            log.warn("source book contains a non-text field name");
            out.extra.insert(key.clone(), value.clone());
            continue;
        };
        match field {
            "authors" => out.authors = Some(value.clone()),
            "title" => out.title = Some(value.clone()),
            "isbn" => out.isbn = Some(value.clone()),
            "notes" => out.notes = Some(value.clone()),
            _ if field.starts_with(X_PREFIX) => {
                out.extra.insert(key.clone(), value.clone());
            }
            _ => {
                log.warn(format!(
                    "source book contained unknown field '{field}', this is now '{X_PREFIX}{field}'"
                ));
                out.extra
                    .insert(Value::String(format!("{X_PREFIX}{field}")), value.clone());
            }
        }
    }
    out
}

pub fn parse_source_authors(
    raw: Option<&Value>,
    defaults: &Defaults,
    log: &mut DiagnosticLog,
) -> Value {
    match present(raw) {
        Some(src) => src.clone(),
        None => {
            log.warn(format!(
                "no source author provided, using '{}'",
                defaults.source_authors
            ));
            Value::String(defaults.source_authors.clone())
        }
    }
}

pub fn parse_source_url(
    raw: Option<&Value>,
    defaults: &Defaults,
    log: &mut DiagnosticLog,
) -> Value {
    match present(raw) {
        Some(src) => src.clone(),
        None => {
            log.warn(format!(
                "no source URL provided, using '{}'",
                defaults.source_url
            ));
            Value::String(defaults.source_url.clone())
        }
    }
}
