//! Combat info overlay for Bevy games: a small HUD panel showing the five
//! combat skill levels, the current attack style and the auto-retaliate
//! setting.
//!
//! The host app owns the game state. It keeps [`PlayerVars`] and
//! [`SkillLevels`] current and triggers [`VarbitChanged`] whenever one of the
//! tracked varbits moves; this plugin derives the rest and draws the panel.
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_combat_info::{CombatInfoPlugin, PlayerVars, Varbit, VarbitChanged};
//!
//! fn main() {
//!     App::new()
//!         .add_plugins((DefaultPlugins, CombatInfoPlugin))
//!         .add_systems(Update, on_weapon_swap)
//!         .run();
//! }
//!
//! // Somewhere in the host: mirror the client value, then notify.
//! fn on_weapon_swap(mut vars: ResMut<PlayerVars>, mut commands: Commands) {
//!     vars.equipped_weapon_type = 3;
//!     commands.trigger(VarbitChanged {
//!         varbit: Varbit::EquippedWeaponType,
//!         value: 3,
//!     });
//! }
//! ```

use bevy::prelude::*;

pub mod interpreter;
pub mod models;
pub mod overlay;
pub mod settings;
pub mod styles;

pub use interpreter::CombatState;
pub use models::{CombatSkill, PlayerVars, SkillLevel, SkillLevels, Varbit, VarbitChanged};
pub use settings::{OverlayAnchor, OverlaySettings, SettingsError, ToggleCombatInfo};
pub use styles::{AttackStyle, WeaponType};

/// The overlay refresh systems, grouped so hosts can order their own UI work
/// around them.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombatInfoSystems;

pub struct CombatInfoPlugin;

impl Plugin for CombatInfoPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            models::plugin,
            settings::plugin,
            interpreter::plugin,
            overlay::plugin,
        ));
    }
}
