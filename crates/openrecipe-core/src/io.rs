//! Thin I/O shims around the normalization engine.
//!
//! The engine itself never touches storage; these helpers cover the common
//! read-normalize and serialize-write paths for YAML recipe files. Unicode
//! round-trips intact.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::RecipeError;
use crate::normalize::{normalize, Normalized};
use crate::types::Recipe;

/// Parse and normalize a recipe document from YAML text.
pub fn load_str(text: &str) -> Result<Normalized, RecipeError> {
    let value: Value = serde_yaml::from_str(text)?;
    Ok(normalize(value))
}

/// Read, parse, and normalize a recipe file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Normalized, RecipeError> {
    let text = fs::read_to_string(path)?;
    load_str(&text)
}

/// Serialize a canonical recipe back to YAML text.
pub fn to_yaml_string(recipe: &Recipe) -> Result<String, RecipeError> {
    Ok(serde_yaml::to_string(recipe)?)
}

/// Write a canonical recipe to a YAML file.
pub fn save_file(recipe: &Recipe, path: impl AsRef<Path>) -> Result<(), RecipeError> {
    fs::write(path, to_yaml_string(recipe)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_str_rejects_malformed_yaml() {
        let err = load_str("recipe_name: [unclosed").unwrap_err();
        assert!(matches!(err, RecipeError::Yaml(_)));
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pancakes.yaml");

        let first = load_str("recipe_name: Pancakes\nsteps:\n- step: Mix, then fry.\n").unwrap();
        save_file(&first.recipe, &path).unwrap();

        let second = load_file(&path).unwrap();
        assert_eq!(second.recipe, first.recipe);
    }

    #[test]
    fn test_unicode_survives_the_round_trip() {
        let first = load_str("recipe_name: Crème brûlée 🍮\n").unwrap();
        let text = to_yaml_string(&first.recipe).unwrap();
        assert!(text.contains("Crème brûlée 🍮"));

        let second = load_str(&text).unwrap();
        assert_eq!(second.recipe.recipe_name, "Crème brûlée 🍮");
    }
}
