use crate::api::models::{MatchDto, ParticipantDto};

use super::lookup::{spell_icon, streak_label};

/// Index into `detail.participants` of the player named `summoner_name`.
///
/// Every identity is scanned and the last match wins. `None` when no identity
/// carries the name, or when the matching participant id does not address an
/// entry of the participant list.
pub fn resolve_participant(detail: &MatchDto, summoner_name: &str) -> Option<usize> {
    let mut participant_id = None;

    for identity in &detail.participant_identities {
        let matches = identity
            .player
            .as_ref()
            .is_some_and(|player| player.summoner_name == summoner_name);
        if matches {
            participant_id = Some(identity.participant_id);
        }
    }

    let index = usize::try_from(participant_id?).ok()?.checked_sub(1)?;
    (index < detail.participants.len()).then_some(index)
}

/// What the results page shows for the searched player in one match.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPerformance {
    pub participant_id: i32,
    pub win: bool,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    /// Basic plus neutral minions.
    pub creep_score: i64,
    pub gold_earned: i64,
    pub champ_level: i64,
    pub vision_score: i64,
    pub damage_to_champions: i64,
    /// Non-empty item slots in slot order.
    pub items: Vec<i64>,
    pub spell1_icon: &'static str,
    pub spell2_icon: &'static str,
    pub streak: &'static str,
    pub highest_tier: String,
}

impl PlayerPerformance {
    /// Builds the view of participant `index`. The match detail is only read,
    /// so deriving again from the same detail gives the same result.
    pub fn derive(detail: &MatchDto, index: usize) -> Option<Self> {
        detail.participants.get(index).map(Self::from_participant)
    }

    fn from_participant(participant: &ParticipantDto) -> Self {
        let stats = &participant.stats;

        PlayerPerformance {
            participant_id: participant.participant_id,
            win: stats.win,
            kills: stats.kills,
            deaths: stats.deaths,
            assists: stats.assists,
            creep_score: stats.total_minions_killed + stats.neutral_minions_killed,
            gold_earned: stats.gold_earned,
            champ_level: stats.champ_level,
            vision_score: stats.vision_score,
            damage_to_champions: stats.total_damage_dealt_to_champions,
            items: stats.items().into_iter().filter(|item| *item > 0).collect(),
            spell1_icon: spell_icon(participant.spell1_id),
            spell2_icon: spell_icon(participant.spell2_id),
            streak: streak_label(stats.largest_multi_kill),
            highest_tier: participant.highest_achieved_season_tier.clone(),
        }
    }

    pub fn kda_ratio(&self) -> f64 {
        let takedowns = (self.kills + self.assists) as f64;
        if self.deaths == 0 {
            takedowns
        } else {
            takedowns / self.deaths as f64
        }
    }

    pub fn outcome(&self) -> &'static str {
        if self.win {
            "Victory!"
        } else {
            "Defeat!"
        }
    }
}
