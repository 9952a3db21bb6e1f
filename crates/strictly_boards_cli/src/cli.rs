//! Command-line interface for the console game.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_boards::{BoardConfig, BoardVariant, HintMode, RenderStyle};
use tracing::{debug, instrument};

/// Strictly Boards - console tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "strictly_boards")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with `render_style` and `hint_mode`
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Board preset: plain, mini, hint, or hybrid (ignored with --config)
    #[arg(long)]
    pub variant: Option<String>,

    /// Render style: standard or compact (overrides config and variant)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Show one-move win hints under the board
    #[arg(long)]
    pub hints: bool,
}

impl Cli {
    /// Resolves the board configuration.
    ///
    /// Starts from the config file, else the variant, else the plain board.
    /// `--style` then replaces the style and `--hints` turns hints on.
    #[instrument(skip(self))]
    pub fn board_config(&self) -> Result<BoardConfig> {
        let mut config = match (&self.config, &self.variant) {
            (Some(path), _) => BoardConfig::from_file(path)
                .with_context(|| format!("Loading board config from {}", path.display()))?,
            (None, Some(name)) => name
                .parse::<BoardVariant>()
                .context("Parsing --variant")?
                .config(),
            (None, None) => BoardConfig::default(),
        };

        if let Some(style) = &self.style {
            let style: RenderStyle = style.parse().context("Parsing --style")?;
            config = config.with_render_style(style);
        }
        if self.hints {
            config = config.with_hint_mode(HintMode::Enabled);
        }

        debug!(?config, "Board config resolved");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("strictly_boards").chain(args.iter().copied()))
            .expect("valid args")
    }

    #[test]
    fn test_defaults_to_plain() {
        assert_eq!(
            parse(&[]).board_config().unwrap(),
            BoardVariant::Plain.config()
        );
    }

    #[test]
    fn test_variant_selects_preset() {
        assert_eq!(
            parse(&["--variant", "hybrid"]).board_config().unwrap(),
            BoardVariant::Hybrid.config()
        );
    }

    #[test]
    fn test_flags_override_variant() {
        let config = parse(&["--variant", "mini", "--style", "standard", "--hints"])
            .board_config()
            .unwrap();
        assert_eq!(config, BoardVariant::Hint.config());
    }

    #[test]
    fn test_bad_style_is_reported() {
        let err = parse(&["--style", "huge"]).board_config().unwrap_err();
        assert!(format!("{err:#}").contains("huge"));
    }
}
