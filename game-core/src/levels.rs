use game_types::{LEVEL_TIERS, LevelTier};

/// Tier whose threshold is the greatest one not above `total_xp`.
pub fn tier_for_xp(total_xp: u32) -> &'static LevelTier {
    LEVEL_TIERS
        .iter()
        .rev()
        .find(|tier| tier.xp_threshold <= total_xp)
        .unwrap_or(&LEVEL_TIERS[0])
}

pub fn tier_for_level(level: u32) -> Option<&'static LevelTier> {
    LEVEL_TIERS.iter().find(|tier| tier.level == level)
}

pub fn level_for_xp(total_xp: u32) -> u32 {
    tier_for_xp(total_xp).level
}

pub fn xp_into_level(total_xp: u32, level: u32) -> u32 {
    tier_for_level(level)
        .map(|tier| total_xp.saturating_sub(tier.xp_threshold))
        .unwrap_or(0)
}

pub fn next_tier(level: u32) -> Option<&'static LevelTier> {
    tier_for_level(level + 1)
}

/// Progress through the current tier, 0..=100. Always 100 at the top tier.
pub fn progress_percent(level: u32, xp_in_level: u32) -> f64 {
    let Some(next) = next_tier(level) else {
        return 100.0;
    };
    let current = tier_for_level(level).unwrap_or(&LEVEL_TIERS[0]);

    let span = i64::from(next.xp_threshold) - i64::from(current.xp_threshold);
    if span <= 0 {
        return 100.0;
    }

    (f64::from(xp_in_level) / span as f64 * 100.0).clamp(0.0, 100.0)
}
