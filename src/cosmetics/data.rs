//! Static descriptor tables for skins, background themes and trail effects.
//!
//! Descriptors never change at runtime. Which skins a player owns and which
//! options are equipped lives in the [`crate::profile::Profile`].

use crate::core::palette::*;

/// Bird skin identifiers. The display name doubles as the profile key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum SkinId {
    #[default]
    ClassicRed,
    ForestGreen,
    SunshineYellow,
    MysticPurple,
    OceanBlue,
    GoldenKing,
    NeonCyber,
}

option_enum_impl!(SkinId, 7, {
    ClassicRed => ("Classic Red", "Classic Red"),
    ForestGreen => ("Forest Green", "Forest Green"),
    SunshineYellow => ("Sunshine Yellow", "Sunshine Yellow"),
    MysticPurple => ("Mystic Purple", "Mystic Purple"),
    OceanBlue => ("Ocean Blue", "Ocean Blue"),
    GoldenKing => ("Golden King", "Golden King"),
    NeonCyber => ("Neon Cyber", "Neon Cyber"),
});

/// Shop grouping for skins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinCategory {
    Classic,
    Premium,
    Special,
}

impl SkinCategory {
    pub const ALL: [SkinCategory; 3] = [Self::Classic, Self::Premium, Self::Special];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Premium => "Premium",
            Self::Special => "Special",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkinDescriptor {
    pub id: SkinId,
    pub price: u32,
    pub color: Rgb,
    pub category: SkinCategory,
}

/// One row per skin, in `SkinId::ALL` order.
pub const SKINS: [SkinDescriptor; 7] = [
    SkinDescriptor {
        id: SkinId::ClassicRed,
        price: 30,
        color: RED,
        category: SkinCategory::Classic,
    },
    SkinDescriptor {
        id: SkinId::ForestGreen,
        price: 50,
        color: GREEN,
        category: SkinCategory::Classic,
    },
    SkinDescriptor {
        id: SkinId::SunshineYellow,
        price: 70,
        color: YELLOW,
        category: SkinCategory::Classic,
    },
    SkinDescriptor {
        id: SkinId::MysticPurple,
        price: 80,
        color: PURPLE,
        category: SkinCategory::Premium,
    },
    SkinDescriptor {
        id: SkinId::OceanBlue,
        price: 90,
        color: BLUE,
        category: SkinCategory::Premium,
    },
    SkinDescriptor {
        id: SkinId::GoldenKing,
        price: 100,
        color: GOLD,
        category: SkinCategory::Premium,
    },
    SkinDescriptor {
        id: SkinId::NeonCyber,
        price: 120,
        color: CYAN,
        category: SkinCategory::Special,
    },
];

impl SkinId {
    /// The skin every profile owns.
    pub const DEFAULT: SkinId = SkinId::ClassicRed;

    pub fn descriptor(&self) -> &'static SkinDescriptor {
        &SKINS[self.index()]
    }

    pub fn price(&self) -> u32 {
        self.descriptor().price
    }

    pub fn color(&self) -> Rgb {
        self.descriptor().color
    }

    pub fn category(&self) -> SkinCategory {
        self.descriptor().category
    }
}

/// Backdrop behind the playfield. Render only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackgroundTheme {
    #[default]
    Day,
    Night,
    Storm,
}

option_enum_impl!(BackgroundTheme, 3, {
    Day => ("Day Mode", "DAY"),
    Night => ("Night Mode", "NIGHT"),
    Storm => ("Storm Mode", "STORM"),
});

impl BackgroundTheme {
    pub fn sky_color(&self) -> Rgb {
        match self {
            Self::Day => SKY_BLUE,
            Self::Night => NIGHT_BLUE,
            Self::Storm => DARK_BLUE,
        }
    }
}

/// Trail drawn behind the avatar. Render only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrailEffect {
    None,
    #[default]
    Sparkle,
    Fire,
    Rainbow,
}

option_enum_impl!(TrailEffect, 4, {
    None => ("None", "NONE"),
    Sparkle => ("Sparkle", "SPARKLE"),
    Fire => ("Fire", "FIRE"),
    Rainbow => ("Rainbow", "RAINBOW"),
});

impl TrailEffect {
    /// Fixed trail color. `None` means no trail or a color cycled per cell.
    pub fn color(&self) -> Option<Rgb> {
        match self {
            Self::None => None,
            Self::Sparkle => Some(WHITE),
            Self::Fire => Some(ORANGE),
            Self::Rainbow => None,
        }
    }
}
