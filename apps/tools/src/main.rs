use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use portfolio_core::{
    resolve_data_root, JsonFileStore, PortfolioContent, PreferenceStore, ThemePreference,
    PREFERENCES_FILE, THEME_STORAGE_KEY,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "portfolio-tools")]
struct Cli {
    /// Directory holding preferences.json.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a content file and print a summary.
    CheckContent { path: PathBuf },
    /// Print the bundled content as TOML.
    DumpContent,
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    Show,
    Toggle,
    Set { mode: Mode },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Dark,
    Light,
}

impl From<Mode> for ThemePreference {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Dark => ThemePreference::Dark,
            Mode::Light => ThemePreference::Light,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::CheckContent { path } => println!("{}", check_content(&path)?),
        Command::DumpContent => print!("{}", dump_content()?),
        Command::Theme { action } => {
            let root = resolve_data_root(cli.data_dir.as_deref())
                .context("unable to resolve local app data dir")?;
            let mut store = JsonFileStore::new(root.join(PREFERENCES_FILE));
            let theme = match action {
                ThemeAction::Show => stored_theme(&store)?,
                ThemeAction::Toggle => {
                    let next = stored_theme(&store)?.toggled();
                    write_theme(&mut store, next)?
                }
                ThemeAction::Set { mode } => write_theme(&mut store, mode.into())?,
            };
            println!("theme={theme}");
        }
    }

    Ok(())
}

fn check_content(path: &Path) -> Result<String> {
    let content = PortfolioContent::load(path)
        .with_context(|| format!("invalid content file '{}'", path.display()))?;
    Ok(format!(
        "ok: '{}' with {} projects, {} experience, {} education, {} testimonials",
        content.title,
        content.projects.len(),
        content.experience.len(),
        content.education.len(),
        content.testimonials.len(),
    ))
}

fn dump_content() -> Result<String> {
    toml::to_string_pretty(&PortfolioContent::builtin()).context("failed to render content")
}

fn stored_theme(store: &impl PreferenceStore) -> Result<ThemePreference> {
    let raw = store
        .get(THEME_STORAGE_KEY)
        .context("failed to read preferences")?;
    Ok(ThemePreference::from_stored(raw.as_deref()))
}

fn write_theme(store: &mut impl PreferenceStore, theme: ThemePreference) -> Result<ThemePreference> {
    store
        .set(THEME_STORAGE_KEY, theme.as_str())
        .context("failed to write preferences")?;
    tracing::info!(%theme, "theme preference stored");
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dumped_content_checks_clean() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("portfolio.toml");
        std::fs::write(&path, dump_content().expect("dump")).expect("write");

        let summary = check_content(&path).expect("valid");
        assert!(summary.starts_with("ok: 'Manali | Blockchain Developer Portfolio'"));
        assert!(summary.ends_with("3 testimonials"));
    }

    #[test]
    fn check_content_rejects_empty_testimonials() {
        let mut content = PortfolioContent::builtin();
        content.testimonials.clear();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("portfolio.toml");
        std::fs::write(&path, toml::to_string_pretty(&content).expect("render")).expect("write");

        let err = check_content(&path).expect_err("no testimonials");
        assert!(format!("{err:#}").contains("portfolio.toml"));
    }

    #[test]
    fn theme_toggle_round_trips_through_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = JsonFileStore::new(dir.path().join(PREFERENCES_FILE));
        assert_eq!(stored_theme(&store).expect("read"), ThemePreference::Light);

        let next = stored_theme(&store).expect("read").toggled();
        write_theme(&mut store, next).expect("write");
        assert_eq!(stored_theme(&store).expect("read"), ThemePreference::Dark);

        write_theme(&mut store, Mode::Light.into()).expect("write");
        assert_eq!(stored_theme(&store).expect("read"), ThemePreference::Light);
    }
}
