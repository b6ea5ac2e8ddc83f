use std::env;
use std::env::VarError;
use std::time::Duration;

use crate::error::ConfigError;
use crate::render::Glyphs;
use crate::rules::RuleSet;
use crate::rules::B3S23;

pub const WIDTH: usize = 20;
pub const HEIGHT: usize = 20;

/// Smallest side length that still leaves an interior inside the dead border.
pub const MIN_SIDE: usize = 9;

pub const PAUSE: Duration = Duration::from_millis(100);

pub const ALIVE_GLYPH: char = '█';
pub const DEAD_GLYPH: char = ' ';

pub const GAME_OVER: &str = "GAME OVER";

/// Environment variable holding an optional `u64` seed for the initial fill
pub const SEED_VAR: &str = "LIFE_SEED";

#[derive(Debug, Clone)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub rules: RuleSet,
    pub pause: Duration,
    pub glyphs: Glyphs,
    pub game_over: &'static str,

    /// Seed for the initial fill. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            rules: B3S23,
            pause: PAUSE,
            glyphs: Glyphs::new(ALIVE_GLYPH, DEAD_GLYPH),
            game_over: GAME_OVER,
            seed: None,
        }
    }
}

impl Config {
    /// The compiled-in configuration, plus the seed from [`SEED_VAR`] if set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let seed = match env::var(SEED_VAR) {
            Ok(value) => Some(parse_seed(&value)?),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(value)) => {
                return Err(ConfigError::InvalidSeed {
                    value: value.to_string_lossy().into_owned(),
                });
            }
        };

        Ok(Self {
            seed,
            ..Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_SIDE || self.height < MIN_SIDE {
            return Err(ConfigError::GridTooSmall {
                height: self.height,
                width: self.width,
                min: MIN_SIDE,
            });
        }

        self.rules.validate()
    }
}

fn parse_seed(value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidSeed {
            value: value.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_in_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_small_grid() {
        let config = Config {
            width: 8,
            ..Config::default()
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::GridTooSmall { width: 8, .. }));

        let config = Config {
            height: 3,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn minimum_grid_is_accepted() {
        let config = Config {
            width: MIN_SIDE,
            height: MIN_SIDE,
            ..Config::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn rule_errors_surface() {
        let config = Config {
            rules: RuleSet::new(3, 2, 3),
            ..Config::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdsInverted { .. })
        ));
    }

    #[test]
    fn seed_parsing() {
        assert_eq!(parse_seed("42").unwrap(), 42);
        assert_eq!(parse_seed(" 7\n").unwrap(), 7);
        assert!(matches!(
            parse_seed("-1"),
            Err(ConfigError::InvalidSeed { .. })
        ));
        assert!(parse_seed("abc").is_err());
    }

    #[test]
    fn seed_from_environment() {
        // Every case lives in this one test, the environment is shared across test threads
        unsafe { env::remove_var(SEED_VAR) };
        assert_eq!(Config::from_env().unwrap().seed, None);

        unsafe { env::set_var(SEED_VAR, "1234") };
        assert_eq!(Config::from_env().unwrap().seed, Some(1234));

        unsafe { env::set_var(SEED_VAR, "twelve") };
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidSeed { value }) if value == "twelve"
        ));

        #[cfg(unix)]
        {
            use std::ffi::OsStr;
            use std::os::unix::ffi::OsStrExt;

            unsafe { env::set_var(SEED_VAR, OsStr::from_bytes(&[0xff, 0x31])) };
            assert!(matches!(
                Config::from_env(),
                Err(ConfigError::InvalidSeed { .. })
            ));
        }

        unsafe { env::remove_var(SEED_VAR) };
    }
}
