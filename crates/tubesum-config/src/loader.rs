use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Load configuration from `path`, or use defaults when it does not exist
    ///
    /// The service runs without a config file in the common case where the
    /// only inputs are `PORT` and the credential variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            return Self::load(path);
        }

        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// Missing credentials are deliberately not checked here: they surface
    /// as an unhealthy client at runtime rather than a startup failure.
    ///
    /// # Errors
    ///
    /// Returns an error if sampling parameters are out of range
    pub fn validate(&self) -> anyhow::Result<()> {
        let generation = &self.genai.generation;

        if !(0.0..=2.0).contains(&generation.temperature) {
            anyhow::bail!("genai.generation.temperature must be between 0.0 and 2.0");
        }

        if !(generation.top_p > 0.0 && generation.top_p <= 1.0) {
            anyhow::bail!("genai.generation.top_p must be in (0.0, 1.0]");
        }

        if generation.max_output_tokens == 0 {
            anyhow::bail!("genai.generation.max_output_tokens must be greater than 0");
        }

        Ok(())
    }
}
