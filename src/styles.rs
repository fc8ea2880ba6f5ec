//! Attack style data: what the in-game style selector resolves to for each
//! equipped weapon category.

use bevy::prelude::*;

/// A player-selectable combat mode. Which ones are available depends on the
/// equipped weapon category.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AttackStyle {
    Accurate,
    Aggressive,
    Defensive,
    Controlled,
    Ranging,
    LongRange,
    Casting,
    DefensiveCasting,
    /// Catch-all for selector slots that carry no proper style.
    #[default]
    Other,
}

impl AttackStyle {
    pub fn name(self) -> &'static str {
        match self {
            Self::Accurate => "Accurate",
            Self::Aggressive => "Aggressive",
            Self::Defensive => "Defensive",
            Self::Controlled => "Controlled",
            Self::Ranging => "Ranging",
            Self::LongRange => "Longrange",
            Self::Casting => "Casting",
            Self::DefensiveCasting => "Defensive Casting",
            Self::Other => "Other",
        }
    }
}

/// Equipped-weapon category, as reported by the weapon type varbit (0..=26).
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WeaponType {
    #[default]
    Unarmed,
    Axe,
    Blunt,
    Bow,
    Claws,
    Crossbow,
    Salamander,
    Chinchompa,
    Gun,
    SlashSword,
    TwoHandedSword,
    Pickaxe,
    Polearm,
    Polestaff,
    Scythe,
    Spear,
    Spiked,
    StabSword,
    Staff,
    Thrown,
    Whip,
    BladedStaff,
    Godsword,
    PoweredStaff,
    Banner,
    Bludgeon,
    Bulwark,
}

impl WeaponType {
    /// Unknown category values fall back to `Unarmed`.
    pub fn from_varbit(value: i32) -> Self {
        match value {
            0 => Self::Unarmed,
            1 => Self::Axe,
            2 => Self::Blunt,
            3 => Self::Bow,
            4 => Self::Claws,
            5 => Self::Crossbow,
            6 => Self::Salamander,
            7 => Self::Chinchompa,
            8 => Self::Gun,
            9 => Self::SlashSword,
            10 => Self::TwoHandedSword,
            11 => Self::Pickaxe,
            12 => Self::Polearm,
            13 => Self::Polestaff,
            14 => Self::Scythe,
            15 => Self::Spear,
            16 => Self::Spiked,
            17 => Self::StabSword,
            18 => Self::Staff,
            19 => Self::Thrown,
            20 => Self::Whip,
            21 => Self::BladedStaff,
            22 => Self::Godsword,
            23 => Self::PoweredStaff,
            24 => Self::Banner,
            25 => Self::Bludgeon,
            26 => Self::Bulwark,
            _ => Self::Unarmed,
        }
    }

    /// The ordered style list behind the in-game selector, indexed by the
    /// attack style varbit. `None` marks selector slots with no style on this
    /// category. Staff categories carry two extra slots for the casting pair.
    pub fn attack_styles(self) -> &'static [Option<AttackStyle>] {
        use AttackStyle::*;

        match self {
            Self::Unarmed => &[Some(Accurate), Some(Aggressive), None, Some(Defensive)],
            Self::Axe => &[
                Some(Accurate),
                Some(Aggressive),
                Some(Aggressive),
                Some(Defensive),
            ],
            Self::Blunt => &[Some(Accurate), Some(Aggressive), None, Some(Defensive)],
            Self::Bow => &[Some(Ranging), Some(Ranging), None, Some(LongRange)],
            Self::Claws => &[
                Some(Accurate),
                Some(Aggressive),
                Some(Controlled),
                Some(Defensive),
            ],
            Self::Crossbow => &[Some(Ranging), Some(Ranging), None, Some(LongRange)],
            Self::Salamander => &[Some(Aggressive), Some(Ranging), Some(Casting), None],
            Self::Chinchompa => &[Some(Ranging), Some(Ranging), None, Some(LongRange)],
            Self::Gun => &[Some(Other), Some(Aggressive), None, None],
            Self::SlashSword => &[
                Some(Accurate),
                Some(Aggressive),
                Some(Controlled),
                Some(Defensive),
            ],
            Self::TwoHandedSword => &[
                Some(Accurate),
                Some(Aggressive),
                Some(Aggressive),
                Some(Defensive),
            ],
            Self::Pickaxe => &[
                Some(Accurate),
                Some(Aggressive),
                Some(Aggressive),
                Some(Defensive),
            ],
            Self::Polearm => &[Some(Controlled), Some(Aggressive), None, Some(Defensive)],
            Self::Polestaff => &[Some(Accurate), Some(Aggressive), None, Some(Defensive)],
            Self::Scythe => &[
                Some(Accurate),
                Some(Aggressive),
                Some(Aggressive),
                Some(Defensive),
            ],
            Self::Spear => &[
                Some(Controlled),
                Some(Controlled),
                Some(Controlled),
                Some(Defensive),
            ],
            Self::Spiked => &[
                Some(Accurate),
                Some(Aggressive),
                Some(Controlled),
                Some(Defensive),
            ],
            Self::StabSword => &[
                Some(Accurate),
                Some(Aggressive),
                Some(Aggressive),
                Some(Defensive),
            ],
            Self::Staff => &[
                Some(Accurate),
                Some(Aggressive),
                None,
                Some(Defensive),
                Some(Casting),
                Some(DefensiveCasting),
            ],
            Self::Thrown => &[Some(Ranging), Some(Ranging), None, Some(LongRange)],
            Self::Whip => &[Some(Accurate), Some(Controlled), None, Some(Defensive)],
            Self::BladedStaff => &[
                Some(Accurate),
                Some(Aggressive),
                None,
                Some(Defensive),
                Some(Casting),
                Some(DefensiveCasting),
            ],
            Self::Godsword => &[
                Some(Accurate),
                Some(Aggressive),
                Some(Aggressive),
                Some(Defensive),
            ],
            Self::PoweredStaff => &[
                Some(Casting),
                Some(Casting),
                None,
                Some(DefensiveCasting),
            ],
            Self::Banner => &[
                Some(Accurate),
                Some(Aggressive),
                Some(Controlled),
                Some(Defensive),
            ],
            Self::Bludgeon => &[
                Some(Aggressive),
                Some(Aggressive),
                None,
                Some(Aggressive),
            ],
            Self::Bulwark => &[Some(Accurate), None, None, Some(Other)],
        }
    }
}
