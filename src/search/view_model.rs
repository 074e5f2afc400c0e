use crate::analysis::PlayerPerformance;
use crate::api::models::{MatchDto, MatchReferenceDto, ProfileDto};
use chrono::{DateTime, Utc};

pub const UNKNOWN_CHAMPION: &str = "Unknown";

/// Everything the results page needs for one search. Built fresh for every
/// request and owned by it.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub summoner_name: String,
    pub summoner_level: i64,
    pub profile_icon_id: i64,
    pub account_id: i64,
    pub revision_date: i64,
    pub highest_tier: String,
    pub matches: Vec<MatchEntry>,
}

impl SearchResults {
    pub fn new(profile: &ProfileDto, matches: Vec<MatchEntry>) -> Self {
        // Newest resolved match with a tier on record.
        let highest_tier = matches
            .iter()
            .filter_map(|entry| entry.performance.as_ref())
            .map(|performance| performance.highest_tier.as_str())
            .find(|tier| !tier.is_empty())
            .unwrap_or_default()
            .to_string();

        SearchResults {
            summoner_name: profile.name.clone(),
            summoner_level: profile.summoner_level,
            profile_icon_id: profile.profile_icon_id,
            account_id: profile.account_id,
            revision_date: profile.revision_date,
            highest_tier,
            matches,
        }
    }

    pub fn last_updated(&self) -> String {
        format_timestamp(self.revision_date)
    }

    pub fn wins(&self) -> usize {
        self.matches
            .iter()
            .filter(|entry| entry.performance.as_ref().is_some_and(|p| p.win))
            .count()
    }

    pub fn losses(&self) -> usize {
        self.matches
            .iter()
            .filter(|entry| entry.performance.as_ref().is_some_and(|p| !p.win))
            .count()
    }
}

/// One match of the history, enriched for display.
#[derive(Debug, Clone)]
pub struct MatchEntry {
    pub reference: MatchReferenceDto,
    pub champion_name: String,
    /// Image file name of the champion portrait, empty when unknown.
    pub champion_image: String,
    pub detail: MatchDto,
    /// `None` when the searched player could not be found among the participants.
    pub performance: Option<PlayerPerformance>,
}

impl MatchEntry {
    pub fn played_at(&self) -> String {
        let timestamp = if self.reference.timestamp > 0 {
            self.reference.timestamp
        } else {
            self.detail.game_creation
        };
        format_timestamp(timestamp)
    }

    pub fn duration(&self) -> String {
        let seconds = self.detail.game_duration.max(0);
        format!("{}:{:02}", seconds / 60, seconds % 60)
    }

    // Takes a reference so templates can pass a field straight through.
    pub fn official_stats_url(&self, account_id: &i64) -> String {
        let platform = [&self.detail.platform_id, &self.reference.platform_id]
            .into_iter()
            .find(|platform| !platform.is_empty())
            .map(|platform| platform.as_str())
            .unwrap_or("NA1");

        format!(
            "https://matchhistory.na.leagueoflegends.com/en/#match-details/{}/{}/{}?tab=overview",
            platform, self.reference.game_id, account_id
        )
    }
}

fn format_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .filter(|_| millis > 0)
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_default()
}
