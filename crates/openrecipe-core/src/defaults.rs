//! Fallback values applied when a recipe omits a field.
//!
//! Built once per normalization run. The fallback source URL embeds the
//! resolved recipe name, so it is re-derived after the name field has been
//! parsed; everything else is fixed up front.

use uuid::Uuid;

/// Placeholder name for recipes that do not carry one.
const DEFAULT_RECIPE_NAME: &str = "untitled";
/// Unit assumed for yields that do not name one.
const DEFAULT_YIELD_UNIT: &str = "servings";
/// Unit assumed for ingredient amounts that do not name one.
const DEFAULT_INGREDIENT_UNIT: &str = "each";
/// Amount assumed for ingredient entries that do not carry one.
const DEFAULT_INGREDIENT_AMOUNT: i64 = 1;
/// Host used when deriving a fallback source URL.
const DEFAULT_WEBSITE: &str = "example.recipes.com";

/// Per-run registry of default values, threaded into the field parsers.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub recipe_name: String,
    pub yield_unit: String,
    pub ingredient_unit: String,
    pub ingredient_amount: i64,
    pub source_authors: String,
    /// Freshly generated for this run.
    pub uuid: String,
    /// Software-qualified recipe identifier derived from [`Defaults::uuid`].
    pub recipe_uuid: String,
    /// Fallback source URL. Provisional until [`Defaults::resolve_name`] runs.
    pub source_url: String,
    website: String,
}

impl Defaults {
    pub fn new() -> Self {
        let uuid = Uuid::new_v4().to_string();
        let recipe_uuid = format!("{}-{}", env!("CARGO_PKG_NAME"), uuid);
        let source_url = derive_source_url(DEFAULT_WEBSITE, &uuid, DEFAULT_RECIPE_NAME);
        Defaults {
            recipe_name: DEFAULT_RECIPE_NAME.to_string(),
            yield_unit: DEFAULT_YIELD_UNIT.to_string(),
            ingredient_unit: DEFAULT_INGREDIENT_UNIT.to_string(),
            ingredient_amount: DEFAULT_INGREDIENT_AMOUNT,
            source_authors: String::new(),
            uuid,
            recipe_uuid,
            source_url,
            website: DEFAULT_WEBSITE.to_string(),
        }
    }

    /// Re-derive the fallback source URL once the recipe name is known.
    ///
    /// The URL template embeds the resolved name, so this must run after the
    /// name field has been parsed and before the source URL field is.
    pub fn resolve_name(&mut self, recipe_name: &str) {
        self.source_url = derive_source_url(&self.website, &self.uuid, recipe_name);
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self::new()
    }
}

fn derive_source_url(website: &str, uuid: &str, recipe_name: &str) -> String {
    format!("https://{website}/{uuid}/{recipe_name}/")
}
