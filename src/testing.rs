//! In-memory stats provider for tests.

use crate::api::models::*;
use crate::api::StatsProvider;
use crate::error::AppError;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

#[derive(Default)]
pub struct FakeProvider {
    profiles: HashMap<String, ProfileDto>,
    match_lists: HashMap<i64, Vec<MatchReferenceDto>>,
    details: HashMap<i64, MatchDto>,
    champions: HashMap<i64, ChampionDto>,
    detail_delays: HashMap<i64, Duration>,
    failing_details: HashSet<i64>,
    pub profile_calls: AtomicUsize,
    pub match_list_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub champion_calls: AtomicUsize,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a player with one game per `(game_id, champion_id)`, newest first.
    /// The player sits in a different participant slot in every game.
    pub fn with_player(mut self, name: &str, account_id: i64, games: &[(i64, i64)]) -> Self {
        self.profiles.insert(
            name.to_string(),
            ProfileDto {
                id: account_id + 1,
                account_id,
                name: name.to_string(),
                profile_icon_id: 588,
                summoner_level: 30,
                revision_date: 1_503_000_000_000,
            },
        );

        let references = games
            .iter()
            .map(|&(game_id, champion)| MatchReferenceDto {
                game_id,
                champion,
                timestamp: 1_503_000_000_000 - game_id,
                queue: 420,
                season: 9,
                lane: "JUNGLE".to_string(),
                role: "NONE".to_string(),
                platform_id: "NA1".to_string(),
            })
            .collect();
        self.match_lists.insert(account_id, references);

        for &(game_id, champion) in games {
            let slot = (game_id % 10) as usize;
            self.details
                .insert(game_id, match_with_player(game_id, name, slot, champion));
        }
        self
    }

    /// A profile that the provider reports with an unset id.
    pub fn with_unset_profile(mut self, name: &str) -> Self {
        self.profiles.insert(
            name.to_string(),
            ProfileDto {
                name: name.to_string(),
                ..Default::default()
            },
        );
        self
    }

    pub fn with_champion(mut self, champion_id: i64, name: &str) -> Self {
        self.champions.insert(
            champion_id,
            ChampionDto {
                id: champion_id,
                key: name.replace(' ', ""),
                name: name.to_string(),
                title: "the Test".to_string(),
                image: (!name.is_empty()).then(|| ImageDto {
                    full: format!("{}.png", name.replace(' ', "")),
                    ..Default::default()
                }),
            },
        );
        self
    }

    /// Replaces a game's identities so the searched player is absent.
    pub fn without_player_in(mut self, game_id: i64) -> Self {
        if let Some(detail) = self.details.get_mut(&game_id) {
            for (i, identity) in detail.participant_identities.iter_mut().enumerate() {
                identity.player = Some(PlayerDto {
                    summoner_name: format!("Stranger {}", i + 1),
                    ..Default::default()
                });
            }
        }
        self
    }

    pub fn with_detail_delay(mut self, game_id: i64, delay: Duration) -> Self {
        self.detail_delays.insert(game_id, delay);
        self
    }

    pub fn with_failing_detail(mut self, game_id: i64) -> Self {
        self.failing_details.insert(game_id);
        self
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

fn match_with_player(game_id: i64, name: &str, slot: usize, champion: i64) -> MatchDto {
    let participants = (0..10)
        .map(|i| {
            let is_player = i == slot;
            ParticipantDto {
                participant_id: i as i32 + 1,
                team_id: if i < 5 { 100 } else { 200 },
                champion_id: if is_player { champion } else { 1000 + i as i64 },
                spell1_id: if is_player { 4 } else { 12 },
                spell2_id: if is_player { 14 } else { 4 },
                highest_achieved_season_tier: (if is_player { "GOLD" } else { "SILVER" }).to_string(),
                stats: ParticipantStatsDto {
                    participant_id: i as i32 + 1,
                    win: (i < 5) == (game_id % 2 == 0),
                    kills: if is_player { 8 } else { 1 },
                    deaths: 3,
                    assists: 5,
                    champ_level: 15,
                    item0: 1055,
                    item3: if is_player { 3078 } else { 0 },
                    gold_earned: 11000,
                    total_minions_killed: 150,
                    neutral_minions_killed: if is_player { 12 } else { 0 },
                    largest_multi_kill: if is_player { 2 } else { 1 },
                    ..Default::default()
                },
            }
        })
        .collect();

    let participant_identities = (0..10)
        .map(|i| ParticipantIdentityDto {
            participant_id: i as i32 + 1,
            player: Some(PlayerDto {
                summoner_name: if i == slot {
                    name.to_string()
                } else {
                    format!("Filler {}", i + 1)
                },
                ..Default::default()
            }),
        })
        .collect();

    MatchDto {
        game_id,
        platform_id: "NA1".to_string(),
        game_creation: 1_503_000_000_000,
        game_duration: 1834,
        game_mode: "CLASSIC".to_string(),
        teams: vec![
            TeamStatsDto {
                team_id: 100,
                win: (if game_id % 2 == 0 { "Win" } else { "Fail" }).to_string(),
                ..Default::default()
            },
            TeamStatsDto {
                team_id: 200,
                win: (if game_id % 2 == 0 { "Fail" } else { "Win" }).to_string(),
                ..Default::default()
            },
        ],
        participants,
        participant_identities,
        ..Default::default()
    }
}

impl StatsProvider for FakeProvider {
    fn profile_by_name(&self, name: &str) -> Result<ProfileDto, AppError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.profiles
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::PlayerNotFound(name.to_string()))
    }

    fn match_list(&self, account_id: i64, count: usize) -> Result<MatchListDto, AppError> {
        self.match_list_calls.fetch_add(1, Ordering::SeqCst);
        let matches: Vec<_> = self
            .match_lists
            .get(&account_id)
            .map(|list| list.iter().take(count).cloned().collect())
            .unwrap_or_default();
        Ok(MatchListDto {
            end_index: matches.len() as i32,
            total_games: matches.len() as i32,
            matches,
            ..Default::default()
        })
    }

    fn match_detail(&self, game_id: i64) -> Result<MatchDto, AppError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.detail_delays.get(&game_id) {
            thread::sleep(*delay);
        }
        if self.failing_details.contains(&game_id) {
            return Err(AppError::JsonError(format!("match {} is malformed", game_id)));
        }
        self.details.get(&game_id).cloned().ok_or(AppError::Status {
            status: 404,
            url: format!("/lol/match/v3/matches/{}", game_id),
        })
    }

    fn champion(&self, champion_id: i64) -> Result<Option<ChampionDto>, AppError> {
        self.champion_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.champions.get(&champion_id).cloned())
    }
}
