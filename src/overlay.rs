//! The on-screen panel: one line per combat skill plus the attack style /
//! auto-retaliate line.

use bevy::prelude::*;

use crate::CombatInfoSystems;
use crate::interpreter::CombatState;
use crate::models::{CombatSkill, SkillLevels, markers};
use crate::settings::{OverlaySettings, load_settings};

/// #463d329c
const PANEL_BG: Color = Color::srgba(0.275, 0.239, 0.196, 0.612);
/// #ee3333
pub const DRAINED: Color = Color::srgb(0.933, 0.2, 0.2);
/// #ffffff
pub const NEUTRAL: Color = Color::WHITE;
/// #00ff00
pub const BOOSTED: Color = Color::srgb(0.0, 1.0, 0.0);
/// #ffc800
pub const ACCENT: Color = Color::srgb(1.0, 0.784, 0.0);

const FONT_SIZE: f32 = 14.0;

pub fn plugin(app: &mut App) {
    app.register_type::<SkillValueLabel>()
        .add_systems(Startup, spawn_overlay.after(load_settings))
        .add_systems(
            Update,
            (
                apply_settings.run_if(resource_changed::<OverlaySettings>),
                refresh_overlay,
            )
                .chain()
                .in_set(CombatInfoSystems),
        );
}

markers!(CombatInfoPanel, StyleNameLabel, RetaliateLabel);

/// Marks the value text of one skill line.
#[derive(Component, Reflect, Clone, Copy, Default)]
#[reflect(Component)]
pub struct SkillValueLabel(pub CombatSkill);

fn spawn_overlay(mut commands: Commands, settings: Res<OverlaySettings>) {
    let mut node = Node {
        position_type: PositionType::Absolute,
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(2.0),
        padding: UiRect::all(Val::Px(6.0)),
        min_width: Val::Px(130.0),
        display: display_of(settings.enabled),
        ..default()
    };
    settings.anchor.apply(&mut node, settings.margin);

    commands
        .spawn((
            CombatInfoPanel,
            Name::new("Combat Info Panel"),
            node,
            BackgroundColor(PANEL_BG),
            GlobalZIndex(50),
            Pickable::IGNORE,
        ))
        .with_children(|panel| {
            for skill in CombatSkill::ALL {
                panel.spawn(line()).with_children(|line| {
                    line.spawn(line_text(skill.name(), NEUTRAL));
                    line.spawn((SkillValueLabel(skill), line_text("1", NEUTRAL)));
                });
            }
            panel.spawn(line()).with_children(|line| {
                line.spawn((StyleNameLabel, line_text("-", ACCENT)));
                line.spawn((RetaliateLabel, line_text("-", ACCENT)));
            });
        });
}

fn line() -> impl Bundle {
    (
        Node {
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            column_gap: Val::Px(12.0),
            ..default()
        },
        Pickable::IGNORE,
    )
}

fn line_text(value: impl Into<String>, color: Color) -> impl Bundle {
    (
        Text::new(value),
        TextFont {
            font_size: FONT_SIZE,
            ..default()
        },
        TextColor(color),
        Pickable::IGNORE,
    )
}

fn display_of(enabled: bool) -> Display {
    if enabled { Display::Flex } else { Display::None }
}

fn boost_color(boost: i32) -> Color {
    if boost < 0 {
        DRAINED
    } else if boost > 0 {
        BOOSTED
    } else {
        NEUTRAL
    }
}

/// The overlay-manager analogue: settings drive whether and where the panel
/// shows up.
fn apply_settings(
    settings: Res<OverlaySettings>,
    mut panel: Query<&mut Node, With<CombatInfoPanel>>,
) {
    if let Ok(mut node) = panel.single_mut() {
        node.display = display_of(settings.enabled);
        settings.anchor.apply(&mut node, settings.margin);
    }
}

fn refresh_overlay(
    levels: Res<SkillLevels>,
    state: Res<CombatState>,
    mut values: Query<(&SkillValueLabel, &mut Text, &mut TextColor)>,
    mut style_label: Query<
        &mut Text,
        (
            With<StyleNameLabel>,
            Without<SkillValueLabel>,
            Without<RetaliateLabel>,
        ),
    >,
    mut retaliate_label: Query<
        &mut Text,
        (
            With<RetaliateLabel>,
            Without<SkillValueLabel>,
            Without<StyleNameLabel>,
        ),
    >,
) {
    for (label, mut text, mut color) in values.iter_mut() {
        text.0 = levels.boosted(label.0).to_string();
        color.0 = boost_color(levels.boost(label.0));
    }

    if let Ok(mut text) = style_label.single_mut() {
        text.0 = state.attack_style().name().to_string();
    }

    if let Ok(mut text) = retaliate_label.single_mut() {
        text.0 = state.auto_retaliate_label().to_string();
    }
}
