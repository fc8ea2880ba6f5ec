//! Derives the displayed attack style and auto-retaliate state from the raw
//! varbit values.

use bevy::prelude::*;
use tracing::debug;

use crate::models::{PlayerVars, VarbitChanged};
use crate::styles::{AttackStyle, WeaponType};

pub fn plugin(app: &mut App) {
    app.register_type::<CombatState>()
        .init_resource::<CombatState>()
        .add_observer(on_varbit_changed)
        .add_systems(Startup, sync_from_client);
}

/// Cached raw varbit values plus the state derived from them. Lives for the
/// session; rebuilt from [`PlayerVars`] on startup.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct CombatState {
    weapon_type_var: i32,
    attack_style_var: i32,
    casting_mode_var: i32,
    auto_retaliate_var: i32,
    attack_style: AttackStyle,
    auto_retaliate: bool,
}

impl Default for CombatState {
    fn default() -> Self {
        Self {
            // -1 marks "not yet observed" so the first notification always differs
            weapon_type_var: -1,
            attack_style_var: -1,
            casting_mode_var: -1,
            auto_retaliate_var: -1,
            attack_style: AttackStyle::Other,
            auto_retaliate: true,
        }
    }
}

impl CombatState {
    pub fn attack_style(&self) -> AttackStyle {
        self.attack_style
    }

    pub fn auto_retaliate(&self) -> bool {
        self.auto_retaliate
    }

    pub fn auto_retaliate_label(&self) -> &'static str {
        if self.auto_retaliate { "On" } else { "Off" }
    }

    fn style_vars(&self) -> (i32, i32, i32) {
        (
            self.weapon_type_var,
            self.attack_style_var,
            self.casting_mode_var,
        )
    }

    fn update_attack_style(&mut self, weapon_type: i32, style_index: i32, casting_mode: i32) {
        self.weapon_type_var = weapon_type;
        self.attack_style_var = style_index;
        self.casting_mode_var = casting_mode;

        // An out-of-range selector index keeps whatever was resolved before.
        let weapon = WeaponType::from_varbit(weapon_type);
        if let Some(style) = resolve_attack_style(weapon, style_index, casting_mode) {
            self.attack_style = style;
        }
    }

    fn update_auto_retaliate(&mut self, raw: i32) {
        self.auto_retaliate_var = raw;
        self.auto_retaliate = resolve_auto_retaliate(raw);
    }
}

/// Resolves the selector index against the weapon category's style list.
/// `None` when the index is outside the list; the caller keeps its previous
/// resolution in that case.
pub(crate) fn resolve_attack_style(
    weapon: WeaponType,
    style_index: i32,
    casting_mode: i32,
) -> Option<AttackStyle> {
    let styles = weapon.attack_styles();
    let slot = *styles.get(usize::try_from(style_index).ok()?)?;
    let style = slot.unwrap_or(AttackStyle::Other);
    if style == AttackStyle::Casting && casting_mode == 1 {
        return Some(AttackStyle::DefensiveCasting);
    }
    Some(style)
}

/// The raw flag is inverted: 0 means auto-retaliate is on.
pub(crate) fn resolve_auto_retaliate(raw: i32) -> bool {
    raw == 0
}

fn sync_from_client(vars: Res<PlayerVars>, mut state: ResMut<CombatState>) {
    state.update_attack_style(
        vars.equipped_weapon_type,
        vars.attack_style,
        vars.defensive_casting_mode,
    );
    state.update_auto_retaliate(vars.auto_retaliate);
    debug!(
        "initial combat state: {} / auto-retaliate {}",
        state.attack_style().name(),
        state.auto_retaliate_label()
    );
}

fn on_varbit_changed(
    _: On<VarbitChanged>,
    vars: Res<PlayerVars>,
    mut state: ResMut<CombatState>,
) {
    let observed = (
        vars.equipped_weapon_type,
        vars.attack_style,
        vars.defensive_casting_mode,
    );
    if observed != state.style_vars() {
        state.update_attack_style(observed.0, observed.1, observed.2);
        debug!("attack style: {}", state.attack_style().name());
    }

    if vars.auto_retaliate != state.auto_retaliate_var {
        state.update_auto_retaliate(vars.auto_retaliate);
        debug!("auto-retaliate: {}", state.auto_retaliate_label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AttackStyle::*;

    #[test]
    fn resolves_selector_index() {
        assert_eq!(
            resolve_attack_style(WeaponType::Unarmed, 0, 0),
            Some(Accurate)
        );
        assert_eq!(
            resolve_attack_style(WeaponType::Unarmed, 1, 0),
            Some(Aggressive)
        );
        assert_eq!(resolve_attack_style(WeaponType::Bow, 3, 0), Some(LongRange));
        assert_eq!(resolve_attack_style(WeaponType::Whip, 1, 0), Some(Controlled));
    }

    #[test]
    fn absent_slot_resolves_to_other() {
        assert_eq!(resolve_attack_style(WeaponType::Unarmed, 2, 0), Some(Other));
        assert_eq!(resolve_attack_style(WeaponType::Gun, 2, 0), Some(Other));
    }

    #[test]
    fn defensive_casting_substitution() {
        assert_eq!(
            resolve_attack_style(WeaponType::PoweredStaff, 0, 0),
            Some(Casting)
        );
        assert_eq!(
            resolve_attack_style(WeaponType::PoweredStaff, 0, 1),
            Some(DefensiveCasting)
        );
        assert_eq!(
            resolve_attack_style(WeaponType::Staff, 4, 1),
            Some(DefensiveCasting)
        );
    }

    #[test]
    fn casting_mode_does_not_touch_non_casting_styles() {
        assert_eq!(
            resolve_attack_style(WeaponType::Unarmed, 0, 1),
            Some(Accurate)
        );
        assert_eq!(
            resolve_attack_style(WeaponType::Salamander, 1, 1),
            Some(Ranging)
        );
    }

    #[test]
    fn out_of_range_index_resolves_to_nothing() {
        assert_eq!(resolve_attack_style(WeaponType::Unarmed, 4, 0), None);
        assert_eq!(resolve_attack_style(WeaponType::Unarmed, -1, 0), None);
        assert_eq!(resolve_attack_style(WeaponType::Staff, 6, 0), None);
    }

    #[test]
    fn retaliate_polarity_is_inverted() {
        assert!(resolve_auto_retaliate(0));
        assert!(!resolve_auto_retaliate(1));
        assert!(!resolve_auto_retaliate(7));
    }

    #[test]
    fn out_of_range_index_keeps_previous_resolution() {
        let mut state = CombatState::default();
        state.update_attack_style(0, 1, 0);
        assert_eq!(state.attack_style(), Aggressive);

        state.update_attack_style(0, 4, 0);
        assert_eq!(state.attack_style(), Aggressive);
        // the cached raw triple still advances
        assert_eq!(state.style_vars(), (0, 4, 0));
    }
}
