use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::ui::chart::ChartStyle;
use crate::ui::theme::DisplayMode;

/// Start-up settings taken from command line flags. Nothing is read from or
/// written to disk.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Settings {
    pub(crate) display_mode: DisplayMode,
    pub(crate) chart_style: ChartStyle,
    pub(crate) log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Light,
            chart_style: ChartStyle::Bars,
            log_file: None,
        }
    }
}

impl Settings {
    /// Split `args` (without the program name) into settings and the
    /// remaining command words. Flags may appear anywhere.
    pub(crate) fn from_args(args: &[String]) -> Result<(Self, Vec<String>)> {
        let mut settings = Self::default();
        let mut rest = Vec::new();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--dark" => settings.display_mode = DisplayMode::Dark,
                "--light" => settings.display_mode = DisplayMode::Light,
                "--chart" => {
                    let Some(value) = iter.next() else {
                        bail!("--chart needs a value (bars or shares)");
                    };
                    settings.chart_style = ChartStyle::parse(value).ok_or_else(|| {
                        anyhow::anyhow!("Unknown chart style: {value} (use bars or shares)")
                    })?;
                }
                "--log" => {
                    let Some(value) = iter.next() else {
                        bail!("--log needs a file path");
                    };
                    settings.log_file = Some(PathBuf::from(value));
                }
                _ => rest.push(arg.clone()),
            }
        }

        Ok((settings, rest))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_when_no_flags() {
        let (settings, rest) = Settings::from_args(&[]).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(rest.is_empty());
    }

    #[test]
    fn test_flags_anywhere() {
        let (settings, rest) = Settings::from_args(&args(&[
            "summary", "--dark", "Coffee", "--chart", "shares", "4.50",
        ]))
        .unwrap();
        assert_eq!(settings.display_mode, DisplayMode::Dark);
        assert_eq!(settings.chart_style, ChartStyle::Shares);
        assert_eq!(rest, args(&["summary", "Coffee", "4.50"]));
    }

    #[test]
    fn test_log_file() {
        let (settings, _) = Settings::from_args(&args(&["--log", "/tmp/finsmart.log"])).unwrap();
        assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/finsmart.log")));
    }

    #[test]
    fn test_missing_flag_values() {
        assert!(Settings::from_args(&args(&["--chart"])).is_err());
        assert!(Settings::from_args(&args(&["--log"])).is_err());
    }

    #[test]
    fn test_unknown_chart_style() {
        let err = Settings::from_args(&args(&["--chart", "donut"])).unwrap_err();
        assert!(err.to_string().contains("donut"));
    }
}
