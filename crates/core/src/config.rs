//! Game configuration.
//!
//! Everything here is fixed for the lifetime of a session; a reset keeps the
//! same configuration.

use crate::error::ConfigError;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MAX_SHAPE_SIZE};

/// Construction parameters for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// Seed for the piece randomizer
    pub seed: u32,
    /// Lower bound for the level drop interval.
    ///
    /// `None` keeps the classic unclamped curve, where the interval reaches
    /// zero at level 11 and every frame forces a drop from then on.
    pub drop_interval_floor_ms: Option<i64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            seed: 1,
            drop_interval_floor_ms: None,
        }
    }
}

impl GameConfig {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_drop_interval_floor(mut self, floor_ms: i64) -> Self {
        self.drop_interval_floor_ms = Some(floor_ms);
        self
    }

    /// Read overrides from the environment.
    ///
    /// - `BLOCKDROP_WIDTH`, `BLOCKDROP_HEIGHT`: board size in cells
    /// - `BLOCKDROP_SEED`: randomizer seed
    /// - `BLOCKDROP_DROP_FLOOR_MS`: minimum drop interval
    ///
    /// Missing or unparsable values fall back to the defaults. The result is
    /// not validated; call [`GameConfig::validate`].
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let width = env::var("BLOCKDROP_WIDTH")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);
        let height = env::var("BLOCKDROP_HEIGHT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);
        let seed = env::var("BLOCKDROP_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);
        let drop_interval_floor_ms = env::var("BLOCKDROP_DROP_FLOOR_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok());

        Self {
            width,
            height,
            seed,
            drop_interval_floor_ms,
        }
    }

    /// Scripted piece order from `BLOCKDROP_PIECES` (e.g. `"t,o,i"`).
    ///
    /// `None` when unset or when any entry is not a piece letter; the game then
    /// uses the seeded randomizer.
    pub fn pieces_from_env() -> Option<Vec<PieceKind>> {
        std::env::var("BLOCKDROP_PIECES")
            .ok()
            .and_then(|s| parse_piece_list(&s))
    }

    /// Reject boards that cannot hold every shape at its spawn anchor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        let min = MAX_SHAPE_SIZE as u8;
        if self.width < min || self.height < min {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
                min,
            });
        }
        Ok(())
    }
}

/// Parse a comma or whitespace separated list of piece letters.
///
/// ```
/// use blockdrop_core::config::parse_piece_list;
/// use blockdrop_types::PieceKind;
///
/// assert_eq!(parse_piece_list("T, o i"), Some(vec![PieceKind::T, PieceKind::O, PieceKind::I]));
/// assert_eq!(parse_piece_list("t,x"), None);
/// assert_eq!(parse_piece_list(""), None);
/// ```
pub fn parse_piece_list(s: &str) -> Option<Vec<PieceKind>> {
    let kinds = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(PieceKind::from_str)
        .collect::<Option<Vec<_>>>()?;
    (!kinds.is_empty()).then_some(kinds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    #[test]
    fn default_is_classic_board() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height), (10, 20));
        assert_eq!(config.drop_interval_floor_ms, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_board() {
        assert_eq!(
            GameConfig::new(0, 20).validate(),
            Err(ConfigError::EmptyBoard {
                width: 0,
                height: 20
            })
        );
    }

    #[test]
    fn rejects_board_narrower_than_i_piece() {
        assert!(matches!(
            GameConfig::new(3, 20).validate(),
            Err(ConfigError::BoardTooSmall { min: 4, .. })
        ));
        assert!(GameConfig::new(4, 4).validate().is_ok());
    }

    // Tests share the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "BLOCKDROP_WIDTH",
        "BLOCKDROP_HEIGHT",
        "BLOCKDROP_SEED",
        "BLOCKDROP_DROP_FLOOR_MS",
        "BLOCKDROP_PIECES",
    ];

    fn with_env(vars: &[(&str, &str)], f: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for name in VARS {
            env::remove_var(name);
        }
        for (name, value) in vars {
            env::set_var(name, value);
        }
        f();
        for name in VARS {
            env::remove_var(name);
        }
    }

    #[test]
    fn test_config_from_env_overrides() {
        with_env(
            &[
                ("BLOCKDROP_WIDTH", "12"),
                ("BLOCKDROP_HEIGHT", " 24 "),
                ("BLOCKDROP_SEED", "777"),
                ("BLOCKDROP_DROP_FLOOR_MS", "50"),
            ],
            || {
                let config = GameConfig::from_env();
                assert_eq!((config.width, config.height), (12, 24));
                assert_eq!(config.seed, 777);
                assert_eq!(config.drop_interval_floor_ms, Some(50));
            },
        );
    }

    #[test]
    fn test_config_from_env_falls_back_on_bad_values() {
        with_env(
            &[
                ("BLOCKDROP_WIDTH", "wide"),
                ("BLOCKDROP_HEIGHT", "300"),
                ("BLOCKDROP_SEED", "abc"),
                ("BLOCKDROP_DROP_FLOOR_MS", "fast"),
            ],
            || {
                assert_eq!(GameConfig::from_env(), GameConfig::default());
            },
        );
    }

    #[test]
    fn test_config_from_env_unset_is_default() {
        with_env(&[], || {
            assert_eq!(GameConfig::from_env(), GameConfig::default());
            assert_eq!(GameConfig::pieces_from_env(), None);
        });
    }

    #[test]
    fn test_pieces_from_env() {
        with_env(&[("BLOCKDROP_PIECES", "o,t")], || {
            assert_eq!(
                GameConfig::pieces_from_env(),
                Some(vec![PieceKind::O, PieceKind::T])
            );
        });
        with_env(&[("BLOCKDROP_PIECES", "o,q")], || {
            assert_eq!(GameConfig::pieces_from_env(), None);
        });
    }
}
