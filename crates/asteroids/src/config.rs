//! Game configuration
//!
//! Tunables for the simulation, loadable from RON or TOML files. Defaults
//! reproduce the classic arcade feel exactly; config files only need to list
//! the fields they override.

use serde::{Deserialize, Serialize};

/// Configuration trait for serde-backed config types
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Load from file, falling back to defaults if the file is missing or
    /// malformed (the failure is logged, not propagated)
    fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("failed to load config from {path}: {e}; using defaults");
                Self::default()
            }
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Top-level game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gameplay tuning
    pub gameplay: GameplayConfig,

    /// World geometry
    pub world: WorldConfig,

    /// Logical control bindings (informational; the core only sees logical
    /// signals)
    pub controls: ControlsConfig,
}

impl Config for GameConfig {}

/// Gameplay tuning values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Speed gained per tick while thrusting
    pub thrust_accel: f32,

    /// Speed lost per tick while coasting
    pub drag: f32,

    /// Maximum ship speed
    pub max_speed: f32,

    /// Facing rotation per tick while turning, in radians
    pub turn_rate: f32,

    /// Bullet speed added on top of the ship's speed at fire time
    pub bullet_speed_boost: f32,

    /// Bullet collision radius
    pub bullet_radius: f32,

    /// Ship collision radius
    pub player_radius: f32,

    /// Lives at the start of a round
    pub starting_lives: u32,

    /// Score awarded per asteroid hit
    pub score_per_asteroid: u32,

    /// Displacement from spawn-origin beyond which an asteroid is recycled
    pub asteroid_recycle_distance: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            thrust_accel: 1.0 / 8.0,
            drag: 1.0 / 14.0,
            max_speed: 8.0,
            turn_rate: 0.09,
            bullet_speed_boost: 7.0,
            bullet_radius: 5.0,
            player_radius: 25.0,
            starting_lives: 3,
            score_per_asteroid: 10,
            asteroid_recycle_distance: 5000.0,
        }
    }
}

/// World geometry: logical screen size, ship wrap bounds and spawn bands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Logical screen width
    pub screen_width: f32,

    /// Logical screen height
    pub screen_height: f32,

    /// Ship wrap bounds (only the ship wraps; asteroids recycle instead)
    pub wrap: WrapBounds,

    /// How far past the screen edges asteroids may spawn
    pub spawn_margin: f32,

    /// X band within which a spawn counts as "over the screen" and must be
    /// pushed off-screen vertically
    pub onscreen_band_min_x: f32,

    /// Upper edge of the on-screen X band
    pub onscreen_band_max_x: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            screen_width: 1600.0,
            screen_height: 1200.0,
            wrap: WrapBounds::default(),
            spawn_margin: 500.0,
            onscreen_band_min_x: -100.0,
            onscreen_band_max_x: 1700.0,
        }
    }
}

impl WorldConfig {
    /// Center of the logical screen (ship start and respawn point)
    pub fn center(&self) -> crate::foundation::math::Vec2 {
        crate::foundation::math::Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }
}

/// Ship screen-wrap thresholds and re-entry positions.
///
/// Exit thresholds and re-entry positions are asymmetric; the values carry
/// the classic tuning verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapBounds {
    /// Leaving past this X wraps the ship to `right_entry_x`
    pub min_x: f32,

    /// X used when re-entering from the right
    pub right_entry_x: f32,

    /// Leaving past this X wraps the ship to `left_entry_x`
    pub max_x: f32,

    /// X used when re-entering from the left
    pub left_entry_x: f32,

    /// Leaving past this Y wraps the ship to `bottom_entry_y`
    pub min_y: f32,

    /// Y used when re-entering from the bottom
    pub bottom_entry_y: f32,

    /// Leaving past this Y wraps the ship to `top_entry_y`
    pub max_y: f32,

    /// Y used when re-entering from the top
    pub top_entry_y: f32,
}

impl Default for WrapBounds {
    fn default() -> Self {
        Self {
            min_x: -400.0,
            right_entry_x: 1800.0,
            max_x: 2000.0,
            left_entry_x: -200.0,
            min_y: -200.0,
            bottom_entry_y: 1200.0,
            max_y: 1200.0,
            top_entry_y: -200.0,
        }
    }
}

/// Logical control bindings.
///
/// The simulation only consumes logical signals ([`crate::input::InputState`]);
/// these names exist so a front end can display or remap bindings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Thrust key
    pub thrust_key: String,

    /// Left turn key
    pub left_key: String,

    /// Right turn key
    pub right_key: String,

    /// Fire key
    pub fire_key: String,

    /// Pause key
    pub pause_key: String,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            thrust_key: "W".to_string(),
            left_key: "A".to_string(),
            right_key: "D".to_string(),
            fire_key: "Space".to_string(),
            pause_key: "P".to_string(),
        }
    }
}
