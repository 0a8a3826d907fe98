//! Runtime configuration.
//!
//! Environment variables give the defaults, command-line flags override them:
//!
//! | Variable | Flag | Meaning |
//! |----------|------|---------|
//! | `BEADS_GAME` | `--game` | `gravity`, `slider` or `rain` |
//! | `BEADS_SEED` | `--seed` | RNG seed |
//! | `BEADS_LEVELS` | `--levels` | JSON level pack for the slider game |
//! | `BEADS_LOG_PATH` | | log file (logging is off without one) |
//! | `BEADS_BELL` | `--bell` | ring the terminal bell on loud cues |
//!
//! The game may also be given as a bare first argument (`tui-beads rain`).

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::{GameKind, RAIN_DEFAULT_SEED};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameKind,
    pub seed: Option<u32>,
    pub levels: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub bell: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameKind::Gravity,
            seed: None,
            levels: None,
            log_path: None,
            bell: false,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Create from any variable lookup (tests pass a map here)
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |name: &str| {
            var(name)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let mut config = Self::default();
        if let Some(game) = non_empty("BEADS_GAME") {
            config.game = parse_game(&game)?;
        }
        if let Some(seed) = non_empty("BEADS_SEED") {
            config.seed = Some(parse_seed(&seed)?);
        }
        config.levels = non_empty("BEADS_LEVELS").map(PathBuf::from);
        config.log_path = non_empty("BEADS_LOG_PATH").map(PathBuf::from);
        config.bell = non_empty("BEADS_BELL").is_some_and(|s| is_truthy(&s));
        Ok(config)
    }

    /// Apply command-line flags (program name already stripped)
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--game" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --game"))?;
                    self.game = parse_game(v)?;
                }
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = Some(parse_seed(v)?);
                }
                "--levels" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --levels"))?;
                    self.levels = Some(PathBuf::from(v));
                }
                "--bell" => self.bell = true,
                other if i == 0 && !other.starts_with('-') => {
                    self.game = parse_game(other)?;
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(self)
    }

    /// Seed for the configured game.
    ///
    /// Rain falls back to its fixed seed so the drop pattern is the same every
    /// run; the other games take one from the clock.
    pub fn seed(&self) -> u32 {
        match (self.seed, self.game) {
            (Some(seed), _) => seed,
            (None, GameKind::Rain) => RAIN_DEFAULT_SEED,
            (None, _) => clock_seed(),
        }
    }
}

fn parse_game(s: &str) -> Result<GameKind> {
    GameKind::from_str(s).ok_or_else(|| anyhow!("unknown game: {} (try gravity, slider, rain)", s))
}

fn parse_seed(s: &str) -> Result<u32> {
    s.parse::<u32>()
        .map_err(|_| anyhow!("invalid seed value: {}", s))
}

fn is_truthy(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_env_defaults() {
        let config = AppConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::from_vars(vars(&[
            ("BEADS_GAME", "cats"),
            ("BEADS_SEED", "42"),
            ("BEADS_LOG_PATH", "  "),
            ("BEADS_BELL", "yes"),
        ]))
        .unwrap();
        assert_eq!(config.game, GameKind::Rain);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path, None);
        assert!(config.bell);
    }

    #[test]
    fn test_bad_env_is_an_error() {
        assert!(AppConfig::from_vars(vars(&[("BEADS_SEED", "lots")])).is_err());
        assert!(AppConfig::from_vars(vars(&[("BEADS_GAME", "chess")])).is_err());
    }

    #[test]
    fn test_flags_override_env() {
        let base = AppConfig::from_vars(vars(&[("BEADS_GAME", "rain")])).unwrap();
        let config = base
            .apply_args(&args(&["--game", "slider", "--levels", "pack.json", "--bell"]))
            .unwrap();
        assert_eq!(config.game, GameKind::Slider);
        assert_eq!(config.levels, Some(PathBuf::from("pack.json")));
        assert!(config.bell);
    }

    #[test]
    fn test_positional_game() {
        let config = AppConfig::default().apply_args(&args(&["rain"])).unwrap();
        assert_eq!(config.game, GameKind::Rain);
        assert!(AppConfig::default().apply_args(&args(&["--seed"])).is_err());
        assert!(AppConfig::default().apply_args(&args(&["--speed", "2"])).is_err());
    }

    #[test]
    fn test_rain_keeps_fixed_seed() {
        let config = AppConfig {
            game: GameKind::Rain,
            ..AppConfig::default()
        };
        assert_eq!(config.seed(), RAIN_DEFAULT_SEED);
        let config = AppConfig {
            seed: Some(7),
            ..config
        };
        assert_eq!(config.seed(), 7);
    }
}
