use serde::Deserialize;

// Summoner V3 response
#[derive(Debug, Deserialize, Clone, Default)]
#[allow(dead_code)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub account_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_icon_id: i64,
    #[serde(default)]
    pub summoner_level: i64,
    #[serde(default)]
    pub revision_date: i64,
}

// Matchlist V3 response
#[derive(Debug, Deserialize, Clone, Default)]
#[allow(dead_code)]
#[serde(rename_all = "camelCase")]
pub struct MatchListDto {
    #[serde(default)]
    pub matches: Vec<MatchReferenceDto>,
    #[serde(default)]
    pub start_index: i32,
    #[serde(default)]
    pub end_index: i32,
    #[serde(default)]
    pub total_games: i32,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[allow(dead_code)]
#[serde(rename_all = "camelCase")]
pub struct MatchReferenceDto {
    pub game_id: i64,
    #[serde(default)]
    pub champion: i64,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub queue: i32,
    #[serde(default)]
    pub season: i32,
    #[serde(default)]
    pub lane: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub platform_id: String,
}

// Match V3 response
#[derive(Debug, Deserialize, Clone, Default)]
#[allow(dead_code)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    #[serde(default)]
    pub game_id: i64,
    #[serde(default)]
    pub platform_id: String,
    #[serde(default)]
    pub game_creation: i64,
    /// Seconds.
    #[serde(default)]
    pub game_duration: i64,
    #[serde(default)]
    pub queue_id: i32,
    #[serde(default)]
    pub map_id: i32,
    #[serde(default)]
    pub season_id: i32,
    #[serde(default)]
    pub game_version: String,
    #[serde(default)]
    pub game_mode: String,
    #[serde(default)]
    pub game_type: String,
    #[serde(default)]
    pub teams: Vec<TeamStatsDto>,
    #[serde(default)]
    pub participants: Vec<ParticipantDto>,
    #[serde(default)]
    pub participant_identities: Vec<ParticipantIdentityDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[allow(dead_code)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsDto {
    #[serde(default)]
    pub team_id: i32,
    /// "Win" or "Fail".
    #[serde(default)]
    pub win: String,
    #[serde(default)]
    pub first_blood: bool,
    #[serde(default)]
    pub first_tower: bool,
    #[serde(default)]
    pub first_inhibitor: bool,
    #[serde(default)]
    pub first_baron: bool,
    #[serde(default)]
    pub first_dragon: bool,
    #[serde(default)]
    pub first_rift_herald: bool,
    #[serde(default)]
    pub tower_kills: i32,
    #[serde(default)]
    pub inhibitor_kills: i32,
    #[serde(default)]
    pub baron_kills: i32,
    #[serde(default)]
    pub dragon_kills: i32,
    #[serde(default)]
    pub rift_herald_kills: i32,
    #[serde(default)]
    pub vilemaw_kills: i32,
    #[serde(default)]
    pub dominion_victory_score: i32,
    #[serde(default)]
    pub bans: Vec<TeamBanDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[allow(dead_code)]
#[serde(rename_all = "camelCase")]
pub struct TeamBanDto {
    #[serde(default)]
    pub champion_id: i64,
    #[serde(default)]
    pub pick_turn: i32,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[allow(dead_code)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    /// 1-based, matches `ParticipantIdentityDto::participant_id`.
    #[serde(default)]
    pub participant_id: i32,
    #[serde(default)]
    pub team_id: i32,
    #[serde(default)]
    pub champion_id: i64,
    #[serde(default)]
    pub spell1_id: i32,
    #[serde(default)]
    pub spell2_id: i32,
    #[serde(default)]
    pub highest_achieved_season_tier: String,
    #[serde(default)]
    pub stats: ParticipantStatsDto,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[allow(dead_code)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantStatsDto {
    pub participant_id: i32,
    pub win: bool,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub champ_level: i64,
    pub item0: i64,
    pub item1: i64,
    pub item2: i64,
    pub item3: i64,
    pub item4: i64,
    pub item5: i64,
    pub item6: i64,
    pub gold_earned: i64,
    pub gold_spent: i64,
    pub total_minions_killed: i64,
    pub neutral_minions_killed: i64,
    pub neutral_minions_killed_team_jungle: i64,
    pub neutral_minions_killed_enemy_jungle: i64,
    pub largest_multi_kill: i64,
    pub largest_killing_spree: i64,
    pub killing_sprees: i64,
    pub double_kills: i64,
    pub triple_kills: i64,
    pub quadra_kills: i64,
    pub penta_kills: i64,
    pub unreal_kills: i64,
    pub vision_score: i64,
    pub wards_placed: i64,
    pub wards_killed: i64,
    pub vision_wards_bought_in_game: i64,
    pub sight_wards_bought_in_game: i64,
    pub total_damage_dealt: i64,
    pub total_damage_dealt_to_champions: i64,
    pub physical_damage_dealt_to_champions: i64,
    pub magic_damage_dealt_to_champions: i64,
    pub true_damage_dealt_to_champions: i64,
    pub damage_dealt_to_objectives: i64,
    pub damage_dealt_to_turrets: i64,
    pub damage_self_mitigated: i64,
    pub total_damage_taken: i64,
    pub total_heal: i64,
    pub largest_critical_strike: i64,
    pub time_c_cing_others: i64,
    pub total_time_crowd_control_dealt: i64,
    pub longest_time_spent_living: i64,
    pub turret_kills: i64,
    pub inhibitor_kills: i64,
    pub first_blood_kill: bool,
    pub first_blood_assist: bool,
    pub first_tower_kill: bool,
    pub first_tower_assist: bool,
    pub first_inhibitor_kill: bool,
    pub first_inhibitor_assist: bool,
    pub total_player_score: i64,
    pub combat_player_score: i64,
    pub objective_player_score: i64,
    pub total_score_rank: i64,
}

impl ParticipantStatsDto {
    pub fn items(&self) -> [i64; 7] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[allow(dead_code)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantIdentityDto {
    #[serde(default)]
    pub participant_id: i32,
    /// Absent for other players in custom or anonymized games.
    #[serde(default)]
    pub player: Option<PlayerDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[allow(dead_code)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerDto {
    pub summoner_name: String,
    pub summoner_id: i64,
    pub account_id: i64,
    pub current_account_id: i64,
    pub profile_icon: i64,
    pub platform_id: String,
    pub current_platform_id: String,
    pub match_history_uri: String,
}

// Static data V3 champion response
#[derive(Debug, Deserialize, Clone, Default)]
#[allow(dead_code)]
#[serde(default)]
pub struct ChampionDto {
    pub id: i64,
    pub key: String,
    pub name: String,
    pub title: String,
    pub image: Option<ImageDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[allow(dead_code)]
#[serde(default)]
pub struct ImageDto {
    pub full: String,
    pub group: String,
    pub sprite: String,
}
