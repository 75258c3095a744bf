use serde::{Deserialize, Serialize};

/// Cosmetic rank labels, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Bronze,
    Prata,
    Ouro,
    Hacker,
}

impl Rank {
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Bronze => "Bronze",
            Rank::Prata => "Prata",
            Rank::Ouro => "Ouro",
            Rank::Hacker => "Hacker",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Level 1 at zero XP, one level per `xp_per_level` after that.
pub fn level_for_xp(xp: u32, xp_per_level: u32) -> u32 {
    xp / xp_per_level.max(1) + 1
}

/// Hacker mode overrides the computed rank outright.
pub fn rank_for(level: u32, hacker_mode: bool) -> Rank {
    if hacker_mode {
        Rank::Hacker
    } else if level >= 8 {
        Rank::Ouro
    } else if level >= 4 {
        Rank::Prata
    } else {
        Rank::Bronze
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_starts_at_one() {
        assert_eq!(level_for_xp(0, 25), 1);
        assert_eq!(level_for_xp(24, 25), 1);
        assert_eq!(level_for_xp(25, 25), 2);
    }

    #[test]
    fn level_is_non_decreasing() {
        let mut previous = 0;
        for xp in 0..500 {
            let level = level_for_xp(xp, 25);
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn rank_thresholds() {
        assert_eq!(rank_for(1, false), Rank::Bronze);
        assert_eq!(rank_for(3, false), Rank::Bronze);
        assert_eq!(rank_for(4, false), Rank::Prata);
        assert_eq!(rank_for(7, false), Rank::Prata);
        assert_eq!(rank_for(8, false), Rank::Ouro);
        assert_eq!(rank_for(20, false), Rank::Ouro);
    }

    #[test]
    fn hacker_mode_overrides_everything() {
        assert_eq!(rank_for(1, true), Rank::Hacker);
        assert_eq!(rank_for(20, true), Rank::Hacker);
    }

    #[test]
    fn zero_divisor_does_not_panic() {
        assert_eq!(level_for_xp(50, 0), 51);
    }
}
