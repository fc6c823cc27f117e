//! Progression constants shared by the character lifecycle operations.

/// Gold granted to every freshly created character.
///
/// Gold is fixed at creation and no implemented operation changes it;
/// leveling deliberately leaves it alone.
pub const STARTING_GOLD: i32 = 100;

/// Level assigned to a freshly created character.
pub const CREATION_LEVEL: i32 = 1;
