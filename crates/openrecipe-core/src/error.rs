use thiserror::Error;

/// Fatal errors from the I/O boundary.
///
/// Schema deviations inside a document are never fatal; they surface as
/// warnings on the normalization run instead.
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("failed to read recipe file: {0}")]
    Io(#[from] std::io::Error),

    #[error("recipe document is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
