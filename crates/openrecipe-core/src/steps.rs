//! Step list parsing, including HACCP annotations.

use serde_yaml::Value;

use crate::diagnostics::DiagnosticLog;
use crate::types::{Haccp, Step};
use crate::value::present;

pub fn parse_steps(raw: Option<&Value>, log: &mut DiagnosticLog) -> Vec<Step> {
    let Some(src) = present(raw) else {
        log.warn("no steps provided");
        return Vec::new();
    };
    let Value::Sequence(entries) = src else {
        log.warn("steps is not a list");
        return Vec::new();
    };
    entries
        .iter()
        .map(|entry| parse_step(entry, log))
        .collect()
}

fn parse_step(raw: &Value, log: &mut DiagnosticLog) -> Step {
    let mut step = Step::default();
    let Value::Mapping(map) = raw else {
        log.warn("step entry is not a mapping");
        return step;
    };

    match map.get("step") {
        Some(text) => step.step = Some(text.clone()),
        None => log.warn("a step is missing its text"),
    }

    if let Some(haccp) = map.get("haccp") {
        step.haccp = Some(parse_haccp(haccp, log));
    }

    if let Some(notes) = map.get("notes") {
        match notes {
            Value::Sequence(items) => step.notes = Some(items.clone()),
            other => {
                log.warn("step notes is not a list");
                step.notes = Some(vec![other.clone()]);
            }
        }
    }

    step
}

fn parse_haccp(raw: &Value, log: &mut DiagnosticLog) -> Haccp {
    let mut out = Haccp::default();
    let Value::Mapping(map) = raw else {
        log.warn("haccp is not a mapping");
        return out;
    };

    if map.get("control_point").is_some() && map.get("critical_control_point").is_some() {
        log.warn("haccp contains both control point and critical control point");
    }

    let mut non_standard = false;
    for (key, value) in map {
        match key.as_str() {
            Some("control_point") => out.control_point = Some(value.clone()),
            Some("critical_control_point") => out.critical_control_point = Some(value.clone()),
            _ => {
                non_standard = true;
                out.extra.insert(key.clone(), value.clone());
            }
        }
    }
    if non_standard {
        log.warn("haccp contains non-standard fields");
    }

    out
}
