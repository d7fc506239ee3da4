/// Roster rules and balance constants.
///
/// Everything here is fixed at compile time; the front-end reads the level
/// bounds for its prompts and the battle engine reads the damage parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterConfig;

impl RosterConfig {
    // ===== character levels =====
    pub const MIN_LEVEL: u8 = 1;
    pub const MAX_LEVEL: u8 = 20;

    // ===== battle balance =====
    /// Upper bound (inclusive) of the random bonus added to every hit.
    pub const DAMAGE_ROLL_MAX: u32 = 9;
    /// Every landed hit deals at least this much damage.
    pub const MIN_DAMAGE: i32 = 1;
    /// Defender's defense is divided by this before being subtracted.
    pub const DEFENSE_DIVISOR: i32 = 2;

    // ===== identifiers =====
    /// First identifier handed out by a fresh store.
    pub const FIRST_ID: u32 = 1;
}
