use crate::{CutoutStats, Result, remove_white_background};
use derivative::Derivative;
use derive_setters::Setters;
use std::path::PathBuf;

/// Where the logo is read from and where the cutout is written.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_", into)]
#[non_exhaustive]
pub struct RemoverConfig {
    #[derivative(Default(value = "PathBuf::from(\"public/logo_source.png\")"))]
    pub input_path: PathBuf,

    #[derivative(Default(value = "PathBuf::from(\"public/logo.png\")"))]
    pub output_path: PathBuf,
}

impl RemoverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&self) -> Result<CutoutStats> {
        remove_white_background(&self.input_path, &self.output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = RemoverConfig::new();
        assert_eq!(config.input_path, PathBuf::from("public/logo_source.png"));
        assert_eq!(config.output_path, PathBuf::from("public/logo.png"));
    }

    #[test]
    fn test_setters() {
        let config = RemoverConfig::new()
            .with_input_path("assets/in.png")
            .with_output_path(PathBuf::from("assets/out.png"));
        assert_eq!(config.input_path, PathBuf::from("assets/in.png"));
        assert_eq!(config.output_path, PathBuf::from("assets/out.png"));
    }
}
