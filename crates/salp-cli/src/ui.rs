use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    ));
}

fn resolve(flags: &GlobalFlags, is_tty: bool, no_color: bool, columns: Option<&str>) -> UiPrefs {
    let color = match flags.color {
        ColorMode::Always => flags.format == OutputFormat::Table,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && flags.format == OutputFormat::Table && !no_color,
    };

    let progress = match flags.progress {
        ProgressMode::On => !flags.quiet,
        ProgressMode::Off => false,
        ProgressMode::Auto => is_tty && !flags.quiet && flags.format == OutputFormat::Table,
    };

    let term_width = columns
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    UiPrefs {
        color,
        progress,
        term_width,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format,
            ..GlobalFlags::default()
        }
    }

    #[test]
    fn tty_table_output_gets_color_and_spinner() {
        let prefs = resolve(&flags(OutputFormat::Table), true, false, Some("120"));
        assert!(prefs.color);
        assert!(prefs.progress);
        assert_eq!(prefs.term_width, Some(120));
    }

    #[test]
    fn json_output_stays_plain() {
        let prefs = resolve(&flags(OutputFormat::Json), true, false, None);
        assert!(!prefs.color);
        assert!(!prefs.progress);
    }

    #[test]
    fn no_color_env_disables_auto_color() {
        let prefs = resolve(&flags(OutputFormat::Table), true, true, None);
        assert!(!prefs.color);
    }

    #[test]
    fn quiet_disables_spinner_even_when_forced() {
        let flags = GlobalFlags {
            quiet: true,
            progress: ProgressMode::On,
            ..GlobalFlags::default()
        };
        assert!(!resolve(&flags, true, false, None).progress);
    }

    #[test]
    fn narrow_columns_are_ignored() {
        let prefs = resolve(&flags(OutputFormat::Table), false, false, Some("20"));
        assert_eq!(prefs.term_width, None);
    }
}
