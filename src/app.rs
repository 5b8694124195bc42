use crate::catalog::{Catalog, CatalogError};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{CustomLogger, LogBuffer};
use crate::state::State;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::VecDeque;
use std::io::{self, stdout};
use std::sync::{Arc, Mutex};

/// Oversees catalog loading, event processing, and terminal output.
///
pub struct App {
    state: State,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config) -> Result<()> {
        let log_entries: LogBuffer = Arc::new(Mutex::new(VecDeque::new()));
        CustomLogger::with_buffer(LevelFilter::Debug, Arc::clone(&log_entries)).install()?;

        info!("Starting application...");
        let (catalog, _) = load_catalog(&config)?;
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!("Unknown theme '{}', using default", config.theme_name);
            Theme::default()
        });
        let state = State::new(
            catalog,
            config.nested_expansion,
            theme,
            config.hotkeys.clone(),
            log_entries,
        )?;
        let mut app = App { state, config };
        let result = app.start_ui();

        // Only the theme picked at runtime is persisted
        if let Err(e) = app.config.save_theme(&app.state.get_theme().name) {
            error!("Failed to save config on exit: {}", e);
        }

        info!("Exiting application...");
        Ok(result?)
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&mut self) -> AppResult<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        let result = loop {
            if let Err(e) = terminal.draw(|frame| crate::ui::render(frame, &mut self.state)) {
                break Err(e.into());
            }
            match terminal_event_handler.handle_next(&mut self.state) {
                Ok(true) => (),
                Ok(false) => {
                    debug!("Received application exit request.");
                    break Ok(());
                }
                Err(e) => break Err(AppError::Terminal(e.to_string())),
            }
        };

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}

/// Load the catalog named by the configuration, falling back to the
/// builtin catalog for the configured skin, and validate it. Returns the
/// catalog with any permissive-mode warnings.
///
pub fn load_catalog(config: &Config) -> Result<(Catalog, Vec<CatalogError>)> {
    let catalog = match config.catalog_path.as_deref() {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin(config.skin)?,
    };
    let warnings = catalog.validate(config.strict_categories)?;
    Ok((catalog, warnings))
}

/// Describe every screen of `catalog` on its own line, followed by the
/// validation warnings.
///
pub fn check_report(catalog: &Catalog, warnings: &[CatalogError]) -> String {
    let mut lines = vec![format!("{} ({})", catalog.name, catalog.skin)];
    for screen in &catalog.screens {
        lines.push(format!(
            "  {:<12} {:<10} {:>2} categories {:>3} items",
            screen.title,
            format!("{:?}", screen.layout).to_lowercase(),
            screen.categories.len(),
            screen.items.len()
        ));
    }
    if warnings.is_empty() {
        lines.push("No problems found.".to_string());
    } else {
        lines.push(format!("{} warning(s):", warnings.len()));
        lines.extend(warnings.iter().map(|w| format!("  {}", w)));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Skin;
    use std::fs;

    #[test]
    fn load_catalog_uses_builtin_skin() {
        let mut config = Config::new();
        config.skin = Skin::Club;
        let (catalog, warnings) = load_catalog(&config).unwrap();
        assert_eq!(catalog.skin, Skin::Club);
        assert!(warnings.is_empty());
    }

    #[test]
    fn check_report_lists_screens() {
        let catalog = Catalog::builtin(Skin::Club).unwrap();
        let report = check_report(&catalog, &[]);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), catalog.screen_count() + 2);
        assert!(lines[1].contains("list"));
        assert!(report.contains("accordion"));
        assert!(report.ends_with("No problems found."));
    }

    #[test]
    fn load_catalog_strict_rejects_unknown_category() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yml");
        fs::write(
            &path,
            "name: Pop-up\nskin: club\nscreens:\n  - id: events\n    title: Events\n    \
             categories:\n      - label: All\n      - id: social\n        label: Social\n    \
             items:\n      - key: a\n        title: A\n        category: karaoke\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.catalog_path = Some(path);
        let (catalog, warnings) = load_catalog(&config).unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(check_report(&catalog, &warnings).contains("1 warning(s):"));

        config.strict_categories = true;
        let err = load_catalog(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::UnknownCategory { .. })
        ));
    }
}
