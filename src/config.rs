use crate::{cli::Cli, game_console, types::KNOWN_ART_TYPES, types::OutputFormat};

#[derive(Debug, Clone, serde::Serialize)]
pub struct Config {
    pub console: String,
    pub art_type: String,
    pub format: OutputFormat,
    pub verbose: u8,
}

impl Config {
    fn validate_console(&self) -> anyhow::Result<()> {
        if self.console.is_empty() {
            anyhow::bail!("-console flag is required");
        }

        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_console()?;
        Ok(())
    }

    /// Emit diagnostics about how the console and art type resolve, plus the
    /// full resolved config at level 2.
    pub fn log_summary(&self) {
        if self.verbose >= 2 {
            match serde_json::to_string(self) {
                Ok(json) => vprintln!(self.verbose, 2, "config: {}", json),
                Err(err) => vprintln!(self.verbose, 2, "config: <unserializable: {}>", err),
            }
        }

        if game_console::is_known_console(&self.console) {
            vprintln!(
                self.verbose,
                1,
                "console {} -> {}",
                self.console,
                game_console::platform_name(&self.console)
            );
        } else {
            vprintln!(
                self.verbose,
                1,
                "console {:?} is not a known code; using it as the system name",
                self.console
            );
        }

        if !KNOWN_ART_TYPES.contains(&self.art_type.as_str()) {
            vprintln!(
                self.verbose,
                1,
                "art type {:?} is not one of {}",
                self.art_type,
                KNOWN_ART_TYPES.join(", ")
            );
        }
    }
}

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let config = Self {
            console: cli.console.unwrap_or_default(),
            art_type: cli.art_type,
            format: cli.format,
            verbose: cli.verbose,
        };

        config.validate()?;
        Ok(config)
    }
}
