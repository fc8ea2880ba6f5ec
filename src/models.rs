//! Host-facing data surface: raw varbit values, skill levels and the change
//! notification the host fires when a tracked varbit moves.

use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.register_type::<PlayerVars>()
        .register_type::<SkillLevels>()
        .init_resource::<PlayerVars>()
        .init_resource::<SkillLevels>();
}

/// Macro to hide the derive trait boilerplate
macro_rules! markers {
  ( $( $name:ident ),* ) => {
        $(
            #[derive(Component, Reflect, Clone, Default)]
            #[reflect(Component)]
            pub struct $name;
        )*
    };
}
pub(crate) use markers;

/// The five combat skills the panel always displays.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CombatSkill {
    #[default]
    Attack,
    Strength,
    Defence,
    Ranged,
    Magic,
}

impl CombatSkill {
    pub const ALL: [CombatSkill; 5] = [
        Self::Attack,
        Self::Strength,
        Self::Defence,
        Self::Ranged,
        Self::Magic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Strength => "Strength",
            Self::Defence => "Defence",
            Self::Ranged => "Ranged",
            Self::Magic => "Magic",
        }
    }
}

/// Base and temporarily boosted level for one skill.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillLevel {
    pub base: i32,
    pub boosted: i32,
}

impl Default for SkillLevel {
    fn default() -> Self {
        Self { base: 1, boosted: 1 }
    }
}

/// Current skill levels, written by the host whenever the client reports a
/// stat change and read back by the overlay every frame.
#[derive(Resource, Reflect, Debug, Clone, Default)]
#[reflect(Resource)]
pub struct SkillLevels {
    levels: [SkillLevel; 5],
}

impl SkillLevels {
    pub fn base(&self, skill: CombatSkill) -> i32 {
        self.levels[skill as usize].base
    }

    pub fn boosted(&self, skill: CombatSkill) -> i32 {
        self.levels[skill as usize].boosted
    }

    /// `boosted - base`; negative while the skill is drained.
    pub fn boost(&self, skill: CombatSkill) -> i32 {
        let level = self.levels[skill as usize];
        level.boosted - level.base
    }

    pub fn set(&mut self, skill: CombatSkill, base: i32, boosted: i32) {
        self.levels[skill as usize] = SkillLevel { base, boosted };
    }
}

/// Raw varbit values mirrored from the game client. The host keeps these
/// current and triggers [`VarbitChanged`] after writing.
#[derive(Resource, Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(Resource)]
pub struct PlayerVars {
    pub equipped_weapon_type: i32,
    pub attack_style: i32,
    pub defensive_casting_mode: i32,
    /// 0 while auto-retaliate is enabled, anything else while it is not.
    pub auto_retaliate: i32,
}

/// Identifies which raw signal moved.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Varbit {
    EquippedWeaponType,
    AttackStyle,
    DefensiveCastingMode,
    AutoRetaliate,
}

/// Fired by the host after it has written a new value into [`PlayerVars`].
#[derive(Event, Debug, Clone)]
pub struct VarbitChanged {
    pub varbit: Varbit,
    pub value: i32,
}
