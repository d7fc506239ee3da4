//! Damage calculation and application.

use crate::config::RosterConfig;
use crate::env::RngOracle;

use super::battle::Fighter;

/// Calculate damage from one hit.
///
/// # Formula
///
/// ```text
/// damage = max(MIN_DAMAGE, attack - defense / DEFENSE_DIVISOR + roll)
/// ```
///
/// The division truncates toward zero.
pub fn calculate_damage(attacker: &Fighter, defender: &Fighter, roll: u32) -> i32 {
    let reduction = defender.defense / RosterConfig::DEFENSE_DIVISOR;
    let roll = i32::try_from(roll).unwrap_or(i32::MAX);
    attacker
        .attack
        .saturating_sub(reduction)
        .saturating_add(roll)
        .max(RosterConfig::MIN_DAMAGE)
}

/// Draw the random bonus for one hit, in `[0, DAMAGE_ROLL_MAX]`.
pub fn roll_bonus(rng: &mut (impl RngOracle + ?Sized)) -> u32 {
    rng.range(0, RosterConfig::DAMAGE_ROLL_MAX)
}

/// Apply damage to a working health value.
///
/// Working health may go below zero; displays clamp it with [`displayed_health`].
pub fn apply_damage(current: i32, damage: i32) -> i32 {
    current.saturating_sub(damage)
}

/// Health as shown to players: never negative.
pub fn displayed_health(current: i32) -> i32 {
    current.max(0)
}
