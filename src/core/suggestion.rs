//! Betting Suggestion Heuristic
//!
//! Compares the win totals of both teams with a fixed margin:
//!     home_wins > away_wins + 3  => back the home team
//!     away_wins > home_wins + 3  => back the away team
//!     otherwise                   => draw or double chance

use serde::{Deserialize, Serialize};

use crate::models::TeamRecord;

/// Win difference that must be exceeded before a side is recommended
pub const WIN_MARGIN: u32 = 3;

/// Betting suggestion for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    HomeWin,
    AwayWin,
    Balanced,
}

impl Suggestion {
    /// User-facing message, naming the recommended team where there is one
    pub fn message(&self, home_name: &str, away_name: &str) -> String {
        match self {
            Suggestion::HomeWin => {
                format!("🏠 Apostar na vitória do {} parece seguro.", home_name)
            }
            Suggestion::AwayWin => {
                format!("🚀 Apostar na vitória do {} pode ser uma boa.", away_name)
            }
            Suggestion::Balanced => {
                "🤝 Jogo equilibrado — aposta em empate ou dupla hipótese.".to_string()
            }
        }
    }
}

/// Suggest a bet from the two win totals
///
/// # Examples
/// ```
/// use matchtip::core::suggestion::{suggest, Suggestion};
/// assert_eq!(suggest(10, 2), Suggestion::HomeWin);
/// assert_eq!(suggest(5, 6), Suggestion::Balanced);
/// ```
pub fn suggest(home_wins: u32, away_wins: u32) -> Suggestion {
    // saturating_add keeps the comparison total for u32::MAX inputs
    if home_wins > away_wins.saturating_add(WIN_MARGIN) {
        Suggestion::HomeWin
    } else if away_wins > home_wins.saturating_add(WIN_MARGIN) {
        Suggestion::AwayWin
    } else {
        Suggestion::Balanced
    }
}

/// Suggest a bet from two full records (only wins are considered)
pub fn suggest_for(home: &TeamRecord, away: &TeamRecord) -> Suggestion {
    suggest(home.wins, away.wins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_win() {
        assert_eq!(suggest(10, 2), Suggestion::HomeWin);
    }

    #[test]
    fn test_away_win() {
        assert_eq!(suggest(2, 10), Suggestion::AwayWin);
    }

    #[test]
    fn test_balanced() {
        assert_eq!(suggest(5, 6), Suggestion::Balanced);
        assert_eq!(suggest(0, 0), Suggestion::Balanced);
    }

    #[test]
    fn test_margin_is_exclusive() {
        // A difference of exactly 3 is still balanced
        assert_eq!(suggest(7, 4), Suggestion::Balanced);
        assert_eq!(suggest(4, 7), Suggestion::Balanced);
        assert_eq!(suggest(8, 4), Suggestion::HomeWin);
        assert_eq!(suggest(4, 8), Suggestion::AwayWin);
    }

    #[test]
    fn test_no_overflow() {
        assert_eq!(suggest(u32::MAX, u32::MAX), Suggestion::Balanced);
        assert_eq!(suggest(0, u32::MAX), Suggestion::AwayWin);
    }

    #[test]
    fn test_draws_and_losses_ignored() {
        let home = TeamRecord::new(10, 0, 30);
        let away = TeamRecord::new(2, 20, 0);
        assert_eq!(suggest_for(&home, &away), Suggestion::HomeWin);
    }

    #[test]
    fn test_messages_name_the_team() {
        let home = Suggestion::HomeWin.message("Benfica", "Porto");
        assert!(home.contains("Benfica"));
        assert!(!home.contains("Porto"));

        let away = Suggestion::AwayWin.message("Benfica", "Porto");
        assert!(away.contains("Porto"));
        assert!(!away.contains("Benfica"));

        let balanced = Suggestion::Balanced.message("Benfica", "Porto");
        assert_eq!(
            balanced,
            "🤝 Jogo equilibrado — aposta em empate ou dupla hipótese."
        );
    }
}
