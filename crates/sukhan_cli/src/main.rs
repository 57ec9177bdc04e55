//! Command-line host for the poetry page.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Feed page events to the core controller and print rendered content.

mod args;
mod session;

use anyhow::{anyhow, bail, Context, Result};
use args::{Cli, Command, OutputFormat, ThemeAction};
use clap::Parser;
use log::{info, warn};
use std::io::Write;
use sukhan_core::db::{open_db, Connection};
use sukhan_core::{
    init_logging, Calendar, FilePoemSource, FixedCalendar, HtmlPresenter, LocalCalendar,
    PageConfig, PageContent, PageController, Presenter, SqlitePreferenceRepository,
    TextPresenter, Theme, ThemeService,
};

type CliPage = PageController<FilePoemSource, Box<dyn Calendar>>;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli);

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir).context("failed to initialize logging")?;
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        sukhan_core::core_version()
    );

    let presenter: Box<dyn Presenter> = match cli.format {
        OutputFormat::Text => Box::new(TextPresenter),
        OutputFormat::Html => Box::new(HtmlPresenter),
    };
    let mut page = PageController::with_calendar(
        FilePoemSource::new(&config.data_path),
        calendar(cli.day),
    );
    let stdout = std::io::stdout();

    match cli.command {
        Command::List => {
            let screen = Screen::new(presenter.as_ref(), &config);
            activate(&mut page, &screen)?;
        }
        Command::Search { query } => {
            let screen = Screen::new(presenter.as_ref(), &config);
            activate_quietly(&mut page, &screen)?;
            screen.print(page.search(&query))?;
        }
        Command::Show { target } => {
            let screen = Screen::new(presenter.as_ref(), &config);
            activate_quietly(&mut page, &screen)?;
            let fragment = fragment_for(&target);
            if !matches!(page.navigate(&fragment), PageContent::Single(_)) {
                bail!("no poem matches `{target}`");
            }
            screen.print(page.content())?;
        }
        Command::Theme { action } => {
            let conn = open_prefs(&config)?;
            let service = theme_service(&conn)?;
            let theme = match action {
                ThemeAction::Show => service.load_theme(),
                ThemeAction::Toggle => service.toggle(),
            }
            .context("theme preference unavailable")?;
            writeln!(stdout.lock(), "{}", describe_theme(theme))?;
        }
        Command::Browse => {
            let conn = open_prefs(&config)?;
            let service = theme_service(&conn)?;
            let stdin = std::io::stdin();
            session::run(
                &mut page,
                presenter.as_ref(),
                &service,
                stdin.lock(),
                stdout.lock(),
            )?;
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> PageConfig {
    let mut config = PageConfig::from_env();
    if let Some(data) = &cli.data {
        config.data_path = data.clone();
    }
    if let Some(prefs_db) = &cli.prefs_db {
        config.prefs_db_path = prefs_db.clone();
    }
    if let Some(log_dir) = &cli.log_dir {
        config.set_log_dir(log_dir);
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config
}

fn calendar(day: Option<u32>) -> Box<dyn Calendar> {
    match day {
        Some(day) => Box::new(FixedCalendar(day)),
        None => Box::new(LocalCalendar),
    }
}

/// Presenter plus the display preference read at startup.
struct Screen<'a> {
    presenter: &'a dyn Presenter,
    theme: Theme,
}

impl<'a> Screen<'a> {
    fn new(presenter: &'a dyn Presenter, config: &PageConfig) -> Self {
        Self {
            presenter,
            theme: startup_theme(config),
        }
    }

    fn print(&self, content: &PageContent) -> Result<()> {
        let body = content.present(self.presenter);
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", self.presenter.page(self.theme, &body))?;
        Ok(())
    }
}

/// Activates the page and prints the initial list (or the failure message).
fn activate(page: &mut CliPage, screen: &Screen<'_>) -> Result<()> {
    let content = page.activate();
    screen.print(content)?;
    fail_on_load_error(page)
}

/// Activates the page without printing the initial list.
fn activate_quietly(page: &mut CliPage, screen: &Screen<'_>) -> Result<()> {
    let failed = matches!(page.activate(), PageContent::LoadFailed { .. });
    if failed {
        screen.print(page.content())?;
    }
    fail_on_load_error(page)
}

fn fail_on_load_error(page: &CliPage) -> Result<()> {
    match page.load_error() {
        Some(err) => Err(anyhow!(err.clone())).context("poem dataset could not be loaded"),
        None => Ok(()),
    }
}

/// Accepts `#poem/<slug>`, `poem/<slug>` or a bare slug.
fn fragment_for(target: &str) -> String {
    let target = target.trim();
    if target.starts_with('#') || target.starts_with("poem/") {
        target.to_string()
    } else {
        format!("#poem/{target}")
    }
}

fn open_prefs(config: &PageConfig) -> Result<Connection> {
    open_db(&config.prefs_db_path).context("preference store unavailable")
}

fn theme_service(conn: &Connection) -> Result<ThemeService<SqlitePreferenceRepository<'_>>> {
    let repo = SqlitePreferenceRepository::try_new(conn).context("preference store not ready")?;
    Ok(ThemeService::new(repo))
}

/// Reads the display preference for one-shot renders; an unreadable store
/// renders light rather than failing the command.
fn startup_theme(config: &PageConfig) -> Theme {
    let loaded = open_prefs(config).and_then(|conn| {
        let theme = theme_service(&conn)?.load_theme()?;
        Ok(theme)
    });
    match loaded {
        Ok(theme) => theme,
        Err(err) => {
            warn!("event=theme_load module=cli status=fallback theme=light error={err:#}");
            Theme::default()
        }
    }
}

fn describe_theme(theme: Theme) -> String {
    format!(
        "theme={} toggle={} body_class={}",
        theme.name(),
        theme.toggle_label(),
        theme.body_class().unwrap_or("-")
    )
}

#[cfg(test)]
mod tests {
    use super::{describe_theme, fragment_for};
    use sukhan_core::Theme;

    #[test]
    fn bare_slug_becomes_poem_fragment() {
        assert_eq!(fragment_for("hazaron"), "#poem/hazaron");
        assert_eq!(fragment_for("#poem/a"), "#poem/a");
        assert_eq!(fragment_for("poem/a"), "poem/a");
    }

    #[test]
    fn theme_description_includes_body_class() {
        assert_eq!(
            describe_theme(Theme::Dark),
            "theme=dark toggle=☀️ body_class=dark-mode"
        );
    }
}
