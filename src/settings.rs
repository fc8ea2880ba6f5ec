//! Overlay settings, persisted as RON next to the host's other assets.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;
use tracing::info;

pub const SETTINGS_PATH: &str = "assets/combat_info.ron";

pub fn plugin(app: &mut App) {
    app.register_type::<OverlaySettings>()
        .init_resource::<OverlaySettings>()
        .add_systems(Startup, load_settings)
        .add_observer(toggle_overlay);
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("reading {SETTINGS_PATH}: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing {SETTINGS_PATH}: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("serializing settings: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Resource, Reflect, Deserialize, Serialize, Debug, Clone, PartialEq)]
#[reflect(Resource)]
pub struct OverlaySettings {
    pub enabled: bool,
    pub anchor: OverlayAnchor,
    /// Distance from the anchored screen edges, in logical pixels.
    pub margin: f32,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            anchor: OverlayAnchor::BottomLeft,
            margin: 10.0,
        }
    }
}

impl OverlaySettings {
    pub fn read() -> Result<Self, SettingsError> {
        let content = fs::read_to_string(SETTINGS_PATH)?;
        Ok(ron::from_str(&content)?)
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        let content = ron::ser::to_string_pretty(self, Default::default())?;
        fs::write(SETTINGS_PATH, content)?;
        Ok(())
    }
}

/// Screen corner the panel is pinned to.
#[derive(Reflect, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayAnchor {
    TopLeft,
    TopRight,
    #[default]
    BottomLeft,
    BottomRight,
}

impl OverlayAnchor {
    pub(crate) fn apply(self, node: &mut Node, margin: f32) {
        let px = Val::Px(margin);
        (node.left, node.right, node.top, node.bottom) = match self {
            Self::TopLeft => (px, Val::Auto, px, Val::Auto),
            Self::TopRight => (Val::Auto, px, px, Val::Auto),
            Self::BottomLeft => (px, Val::Auto, Val::Auto, px),
            Self::BottomRight => (Val::Auto, px, Val::Auto, px),
        };
    }
}

/// Fired by the host to flip the panel on or off, e.g. from its config menu.
#[derive(Event, Debug, Clone)]
pub struct ToggleCombatInfo;

pub(crate) fn load_settings(mut settings: ResMut<OverlaySettings>) {
    match OverlaySettings::read() {
        Ok(loaded) => {
            info!("loaded overlay settings from '{SETTINGS_PATH}'");
            *settings = loaded;
        }
        Err(e) => {
            info!("using default overlay settings: {e}");
        }
    }
}

fn toggle_overlay(_: On<ToggleCombatInfo>, mut settings: ResMut<OverlaySettings>) {
    settings.enabled = !settings.enabled;
    info!("combat info overlay enabled: {}", settings.enabled);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_bottom_left() {
        let settings = OverlaySettings::default();
        assert!(settings.enabled);
        assert_eq!(settings.anchor, OverlayAnchor::BottomLeft);
    }

    #[test]
    fn anchor_pins_two_edges() {
        let mut node = Node::default();
        OverlayAnchor::BottomLeft.apply(&mut node, 10.0);
        assert_eq!(node.left, Val::Px(10.0));
        assert_eq!(node.bottom, Val::Px(10.0));
        assert_eq!(node.right, Val::Auto);
        assert_eq!(node.top, Val::Auto);

        OverlayAnchor::TopRight.apply(&mut node, 4.0);
        assert_eq!(node.right, Val::Px(4.0));
        assert_eq!(node.top, Val::Px(4.0));
        assert_eq!(node.left, Val::Auto);
        assert_eq!(node.bottom, Val::Auto);
    }

    #[test]
    fn settings_round_trip_through_ron() {
        let settings = OverlaySettings {
            enabled: false,
            anchor: OverlayAnchor::TopLeft,
            margin: 24.0,
        };
        let content = ron::ser::to_string_pretty(&settings, Default::default()).unwrap();
        let parsed: OverlaySettings = ron::from_str(&content).unwrap();
        assert_eq!(parsed, settings);
    }
}
