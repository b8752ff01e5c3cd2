//! Unlock and equip policy for cosmetics.

use super::data::{BackgroundTheme, SkinId, TrailEffect};
use crate::profile::Profile;
use tracing::info;

/// Outcome of selecting a skin in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinSelection {
    /// Already owned; now equipped.
    Equipped,
    /// Bought with coins and equipped.
    Purchased { price: u32 },
    /// Locked and unaffordable. Nothing changed.
    Rejected { price: u32, balance: u32 },
}

/// Equip an owned skin, or try to buy and equip a locked one.
///
/// An owned skin is never charged for again. A purchase the balance cannot
/// cover leaves the profile untouched.
pub fn select_skin(profile: &mut Profile, skin: SkinId) -> SkinSelection {
    if profile.is_unlocked(skin) {
        profile.equipped_skin = skin;
        return SkinSelection::Equipped;
    }

    let price = skin.price();
    if profile.coins < price {
        return SkinSelection::Rejected {
            price,
            balance: profile.coins,
        };
    }

    profile.coins -= price;
    profile.unlocked_skins.insert(skin);
    profile.equipped_skin = skin;
    info!(skin = skin.name(), price, balance = profile.coins, "Skin purchased");
    SkinSelection::Purchased { price }
}

pub fn select_theme(profile: &mut Profile, theme: BackgroundTheme) {
    profile.background_theme = theme;
}

pub fn select_trail(profile: &mut Profile, trail: TrailEffect) {
    profile.trail_effect = trail;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_coins_rejected() {
        let mut profile = Profile {
            coins: 60,
            ..Profile::default()
        };
        let result = select_skin(&mut profile, SkinId::SunshineYellow);
        assert_eq!(
            result,
            SkinSelection::Rejected {
                price: 70,
                balance: 60
            }
        );
        assert_eq!(profile.coins, 60);
        assert!(!profile.is_unlocked(SkinId::SunshineYellow));
        assert_eq!(profile.equipped_skin, SkinId::ClassicRed);
    }

    #[test]
    fn test_exact_balance_purchases() {
        let mut profile = Profile {
            coins: 70,
            ..Profile::default()
        };
        let result = select_skin(&mut profile, SkinId::SunshineYellow);
        assert_eq!(result, SkinSelection::Purchased { price: 70 });
        assert_eq!(profile.coins, 0);
        assert!(profile.is_unlocked(SkinId::SunshineYellow));
        assert_eq!(profile.equipped_skin, SkinId::SunshineYellow);
    }

    #[test]
    fn test_repeat_selection_never_charges_twice() {
        let mut profile = Profile {
            coins: 200,
            ..Profile::default()
        };
        select_skin(&mut profile, SkinId::GoldenKing);
        assert_eq!(profile.coins, 100);
        assert_eq!(select_skin(&mut profile, SkinId::GoldenKing), SkinSelection::Equipped);
        assert_eq!(profile.coins, 100);
    }

    #[test]
    fn test_equip_owned_skin_is_free() {
        let mut profile = Profile::default();
        profile.unlocked_skins.insert(SkinId::OceanBlue);
        assert_eq!(select_skin(&mut profile, SkinId::OceanBlue), SkinSelection::Equipped);
        assert_eq!(profile.coins, 100);
        assert_eq!(profile.equipped_skin, SkinId::OceanBlue);
        assert_eq!(select_skin(&mut profile, SkinId::ClassicRed), SkinSelection::Equipped);
        assert_eq!(profile.equipped_skin, SkinId::ClassicRed);
    }

    #[test]
    fn test_theme_and_trail_selection() {
        let mut profile = Profile::default();
        select_theme(&mut profile, BackgroundTheme::Storm);
        select_trail(&mut profile, TrailEffect::Fire);
        assert_eq!(profile.background_theme, BackgroundTheme::Storm);
        assert_eq!(profile.trail_effect, TrailEffect::Fire);
    }
}
