use crate::error::AppError;

use super::models::{ChampionDto, MatchDto, MatchListDto, ProfileDto};

/// The four call shapes the search workflow needs from the stats provider.
///
/// Implementations must be shareable across the worker threads that enrich
/// matches in parallel.
pub trait StatsProvider: Send + Sync {
    /// Looks up a profile by display name. An unknown name is either
    /// `Err(AppError::PlayerNotFound)` or a profile whose `id` is 0.
    fn profile_by_name(&self, name: &str) -> Result<ProfileDto, AppError>;

    /// Most recent `count` matches of an account, newest first.
    fn match_list(&self, account_id: i64, count: usize) -> Result<MatchListDto, AppError>;

    fn match_detail(&self, game_id: i64) -> Result<MatchDto, AppError>;

    /// `Ok(None)` when the provider does not know the champion.
    fn champion(&self, champion_id: i64) -> Result<Option<ChampionDto>, AppError>;
}
