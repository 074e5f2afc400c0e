pub mod view_model;

pub use view_model::{MatchEntry, SearchResults, UNKNOWN_CHAMPION};

use crate::analysis::{resolve_participant, PlayerPerformance};
use crate::api::models::{MatchReferenceDto, ProfileDto};
use crate::api::StatsProvider;
use crate::error::AppError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// Runs the profile → match list → per-match enrichment chain for one
/// search term. Holds no per-search state; concurrent searches are independent.
pub struct SearchService {
    provider: Arc<dyn StatsProvider>,
    match_count: usize,
    workers: usize,
}

impl SearchService {
    pub fn new(provider: Arc<dyn StatsProvider>, match_count: usize, workers: usize) -> Self {
        SearchService {
            provider,
            match_count,
            workers: workers.max(1),
        }
    }

    pub fn search(&self, name: &str) -> Result<SearchResults, AppError> {
        tracing::info!(summoner = name, "searching");

        let profile = self.provider.profile_by_name(name)?;
        if profile.id == 0 {
            return Err(AppError::PlayerNotFound(name.to_string()));
        }

        let match_list = self
            .provider
            .match_list(profile.account_id, self.match_count)?;
        let mut references = match_list.matches;
        references.truncate(self.match_count);

        let matches = self.enrich_all(&profile, &references)?;
        tracing::info!(
            summoner = %profile.name,
            matches = matches.len(),
            "search complete"
        );

        Ok(SearchResults::new(&profile, matches))
    }

    /// Enriches every reference on a bounded set of scoped workers and returns
    /// the entries in match-list order.
    fn enrich_all(
        &self,
        profile: &ProfileDto,
        references: &[MatchReferenceDto],
    ) -> Result<Vec<MatchEntry>, AppError> {
        if references.is_empty() {
            return Ok(Vec::new());
        }

        let workers = self.workers.min(references.len());
        let cursor = AtomicUsize::new(0);
        let next = &cursor;

        let mut finished: Vec<(usize, Result<MatchEntry, AppError>)> = thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    scope.spawn(move || {
                        let mut done = Vec::new();
                        loop {
                            let index = next.fetch_add(1, Ordering::Relaxed);
                            let Some(reference) = references.get(index) else {
                                break;
                            };
                            done.push((index, self.enrich(profile, reference)));
                        }
                        done
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap_or_default())
                .collect()
        });

        if finished.len() != references.len() {
            return Err(AppError::Internal(format!(
                "match enrichment lost {} of {} matches",
                references.len() - finished.len(),
                references.len()
            )));
        }

        finished.sort_by_key(|(index, _)| *index);
        finished.into_iter().map(|(_, entry)| entry).collect()
    }

    fn enrich(
        &self,
        profile: &ProfileDto,
        reference: &MatchReferenceDto,
    ) -> Result<MatchEntry, AppError> {
        let (champion_name, champion_image) = self.champion(reference.champion)?;
        let detail = self.provider.match_detail(reference.game_id)?;

        let performance = resolve_participant(&detail, &profile.name)
            .and_then(|index| PlayerPerformance::derive(&detail, index));
        if performance.is_none() {
            tracing::warn!(
                game_id = reference.game_id,
                summoner = %profile.name,
                "player not found among match participants"
            );
        }

        Ok(MatchEntry {
            reference: reference.clone(),
            champion_name,
            champion_image,
            detail,
            performance,
        })
    }

    fn champion(&self, champion_id: i64) -> Result<(String, String), AppError> {
        let champion = self.provider.champion(champion_id)?;

        let name = champion
            .as_ref()
            .map(|c| c.name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_CHAMPION.to_string());
        let image = champion
            .and_then(|c| match c.image {
                Some(image) if !image.full.is_empty() => Some(image.full),
                _ if !c.key.is_empty() => Some(format!("{}.png", c.key)),
                _ => None,
            })
            .unwrap_or_default();

        Ok((name, image))
    }
}
