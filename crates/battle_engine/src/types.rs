//! Elemental kinds and the type-effectiveness chart.
//!
//! The chart is a dense `Kind x Kind` matrix built by a `const fn`, so the
//! process-wide table exists before first use and is shared by reference
//! into every encounter (no lazy first-use initialization).

use serde::Serialize;

/// Number of elemental kinds.
pub const KIND_COUNT: usize = 13;

/// Elemental kind of a combatant or move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Kind {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Grass = 3,
    Electric = 4,
    Ice = 5,
    Fighting = 6,
    Ground = 7,
    Flying = 8,
    Rock = 9,
    Bug = 10,
    Psychic = 11,
    Dragon = 12,
}

/// Name -> kind lookup table (lowercase keys).
static KIND_BY_NAME: phf::Map<&'static str, Kind> = phf::phf_map! {
    "normal" => Kind::Normal,
    "fire" => Kind::Fire,
    "water" => Kind::Water,
    "grass" => Kind::Grass,
    "electric" => Kind::Electric,
    "ice" => Kind::Ice,
    "fighting" => Kind::Fighting,
    "ground" => Kind::Ground,
    "flying" => Kind::Flying,
    "rock" => Kind::Rock,
    "bug" => Kind::Bug,
    "psychic" => Kind::Psychic,
    "dragon" => Kind::Dragon,
};

impl Kind {
    /// Parse a kind from its name (case-insensitive).
    pub fn from_str(name: &str) -> Option<Kind> {
        KIND_BY_NAME.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Display name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Normal => "Normal",
            Kind::Fire => "Fire",
            Kind::Water => "Water",
            Kind::Grass => "Grass",
            Kind::Electric => "Electric",
            Kind::Ice => "Ice",
            Kind::Fighting => "Fighting",
            Kind::Ground => "Ground",
            Kind::Flying => "Flying",
            Kind::Rock => "Rock",
            Kind::Bug => "Bug",
            Kind::Psychic => "Psychic",
            Kind::Dragon => "Dragon",
        }
    }
}

// ============================================================================
// Effectiveness
// ============================================================================

/// Effectiveness of an attacking kind against a defending kind.
///
/// Discriminants are on a 4-denominator integer scale (0 = immune,
/// 2 = 0.5x, 4 = 1x, 8 = 2x) so damage scaling stays in integer math.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum Effectiveness {
    Immune = 0,
    NotVeryEffective = 2,
    #[default]
    Neutral = 4,
    SuperEffective = 8,
}

impl Effectiveness {
    /// Exact multiplier represented by this tier.
    pub fn multiplier(self) -> f64 {
        self as u8 as f64 / 4.0
    }

    /// Scale a pre-effectiveness damage magnitude, truncating toward zero.
    pub fn apply(self, damage: u32) -> u32 {
        let scaled = damage as u64 * self as u8 as u64 / 4;
        scaled.min(u32::MAX as u64) as u32
    }
}

// ============================================================================
// Type Chart
// ============================================================================

/// Dense matchup matrix: `chart[attacking][defending]`.
///
/// Unlisted pairs stay `Neutral`; entries are directional (Water -> Fire is
/// super effective while Fire -> Water is not very effective).
pub struct TypeChart {
    matrix: [[Effectiveness; KIND_COUNT]; KIND_COUNT],
}

/// The standard matchup chart, shared process-wide.
pub static STANDARD_CHART: TypeChart = TypeChart::standard();

impl TypeChart {
    /// Build the standard chart.
    pub const fn standard() -> Self {
        use Effectiveness::{Immune, NotVeryEffective, SuperEffective};
        use Kind::*;

        let mut matrix = [[Effectiveness::Neutral; KIND_COUNT]; KIND_COUNT];

        macro_rules! set {
            ($atk:expr, $def:expr, $eff:expr) => {
                matrix[$atk as usize][$def as usize] = $eff;
            };
        }

        // Fire
        set!(Fire, Water, NotVeryEffective);
        set!(Fire, Grass, SuperEffective);
        set!(Fire, Fire, NotVeryEffective);
        set!(Fire, Ice, SuperEffective);
        set!(Fire, Bug, SuperEffective);
        set!(Fire, Rock, NotVeryEffective);

        // Water
        set!(Water, Fire, SuperEffective);
        set!(Water, Water, NotVeryEffective);
        set!(Water, Grass, NotVeryEffective);
        set!(Water, Ground, SuperEffective);
        set!(Water, Rock, SuperEffective);

        // Grass
        set!(Grass, Water, SuperEffective);
        set!(Grass, Ground, SuperEffective);
        set!(Grass, Rock, SuperEffective);
        set!(Grass, Fire, NotVeryEffective);
        set!(Grass, Grass, NotVeryEffective);
        set!(Grass, Flying, NotVeryEffective);
        set!(Grass, Bug, NotVeryEffective);

        // Electric
        set!(Electric, Water, SuperEffective);
        set!(Electric, Flying, SuperEffective);
        set!(Electric, Electric, NotVeryEffective);
        set!(Electric, Grass, NotVeryEffective);
        set!(Electric, Ground, Immune);

        // Ice
        set!(Ice, Grass, SuperEffective);
        set!(Ice, Ground, SuperEffective);
        set!(Ice, Flying, SuperEffective);
        set!(Ice, Dragon, SuperEffective);
        set!(Ice, Fire, NotVeryEffective);
        set!(Ice, Water, NotVeryEffective);
        set!(Ice, Ice, NotVeryEffective);

        // Fighting
        set!(Fighting, Normal, SuperEffective);
        set!(Fighting, Ice, SuperEffective);
        set!(Fighting, Rock, SuperEffective);
        set!(Fighting, Flying, NotVeryEffective);
        set!(Fighting, Psychic, NotVeryEffective);

        // Ground
        set!(Ground, Fire, SuperEffective);
        set!(Ground, Electric, SuperEffective);
        set!(Ground, Rock, SuperEffective);
        set!(Ground, Grass, NotVeryEffective);
        set!(Ground, Bug, NotVeryEffective);
        set!(Ground, Flying, Immune);

        // Flying
        set!(Flying, Grass, SuperEffective);
        set!(Flying, Fighting, SuperEffective);
        set!(Flying, Bug, SuperEffective);
        set!(Flying, Electric, NotVeryEffective);
        set!(Flying, Rock, NotVeryEffective);

        // Rock
        set!(Rock, Fire, SuperEffective);
        set!(Rock, Ice, SuperEffective);
        set!(Rock, Flying, SuperEffective);
        set!(Rock, Bug, SuperEffective);
        set!(Rock, Fighting, NotVeryEffective);
        set!(Rock, Ground, NotVeryEffective);

        // Bug
        set!(Bug, Grass, SuperEffective);
        set!(Bug, Psychic, SuperEffective);
        set!(Bug, Fire, NotVeryEffective);
        set!(Bug, Fighting, NotVeryEffective);
        set!(Bug, Flying, NotVeryEffective);

        // Psychic
        set!(Psychic, Fighting, SuperEffective);
        set!(Psychic, Psychic, NotVeryEffective);

        // Dragon
        set!(Dragon, Dragon, SuperEffective);

        Self { matrix }
    }

    /// Look up the effectiveness of `attack` against `defense`.
    ///
    /// Normal-kind attacks are hard-wired neutral against everything,
    /// overriding any chart entry.
    pub fn effectiveness(&self, attack: Kind, defense: Kind) -> Effectiveness {
        if attack == Kind::Normal {
            return Effectiveness::Neutral;
        }
        self.matrix[attack as usize][defense as usize]
    }
}
