use crate::config::Config;
use crate::error::AppError;
use crate::rate_limit::{parse_retry_after, RetryPolicy, Throttle};
use serde::de::DeserializeOwned;
use std::thread;

use super::endpoints;
use super::models::*;
use super::provider::StatsProvider;

const USER_AGENT: &str = concat!("summoner_search/", env!("CARGO_PKG_VERSION"));

pub struct RiotApiClient {
    agent: ureq::Agent,
    api_key: String,
    base: String,
    throttle: Throttle,
    retry: RetryPolicy,
}

impl RiotApiClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build();

        RiotApiClient {
            agent,
            api_key: config.api_key.clone(),
            base: config.api_base(),
            throttle: Throttle::per_second(config.requests_per_second),
            retry: RetryPolicy {
                max_retries: config.max_retries,
                initial_backoff: config.retry_backoff,
            },
        }
    }

    /// Performs a GET and reads the whole body, retrying transport failures,
    /// 429 and 5xx according to the retry policy. `url` must not carry the key.
    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let mut attempt = 0;

        loop {
            self.throttle.wait();
            tracing::debug!(url, attempt, "calling stats provider");

            let response = self
                .agent
                .get(url)
                .query("api_key", &self.api_key)
                .call();

            let (error, retry_after) = match response {
                Ok(resp) => {
                    return resp
                        .into_string()
                        .map_err(|e| AppError::HttpError(self.redact(&e.to_string())));
                }
                Err(ureq::Error::Status(status, resp))
                    if RetryPolicy::is_retryable_status(status) =>
                {
                    let retry_after = parse_retry_after(resp.header("Retry-After"));
                    let error = if status == 429 {
                        AppError::RateLimited
                    } else {
                        AppError::Status {
                            status,
                            url: url.to_string(),
                        }
                    };
                    (error, retry_after)
                }
                Err(ureq::Error::Status(status, _)) => {
                    return Err(AppError::Status {
                        status,
                        url: url.to_string(),
                    });
                }
                Err(ureq::Error::Transport(transport)) => {
                    (AppError::HttpError(self.redact(&transport.to_string())), None)
                }
            };

            if attempt >= self.retry.max_retries {
                return Err(error);
            }

            let wait = self.retry.delay(attempt, retry_after);
            tracing::warn!(
                url,
                attempt = attempt + 1,
                max_retries = self.retry.max_retries,
                "{}, retrying in {:?}",
                error,
                wait
            );
            thread::sleep(wait);
            attempt += 1;
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let body = self.execute_request(url)?;
        serde_json::from_str(&body).map_err(|e| AppError::JsonError(format!("{}: {}", url, e)))
    }

    // ureq transport errors embed the full URL, query string included.
    fn redact(&self, message: &str) -> String {
        if self.api_key.is_empty() {
            message.to_string()
        } else {
            message.replace(&self.api_key, "<redacted>")
        }
    }
}

impl StatsProvider for RiotApiClient {
    fn profile_by_name(&self, name: &str) -> Result<ProfileDto, AppError> {
        let url = endpoints::profile_by_name(&self.base, name);

        match self.get_json(&url) {
            Err(AppError::Status { status: 404, .. }) => {
                Err(AppError::PlayerNotFound(name.to_string()))
            }
            other => other,
        }
    }

    fn match_list(&self, account_id: i64, count: usize) -> Result<MatchListDto, AppError> {
        let url = endpoints::match_list(&self.base, account_id, count);

        match self.get_json(&url) {
            // Accounts without any recorded games answer 404.
            Err(AppError::Status { status: 404, .. }) => Ok(MatchListDto::default()),
            other => other,
        }
    }

    fn match_detail(&self, game_id: i64) -> Result<MatchDto, AppError> {
        let url = endpoints::match_detail(&self.base, game_id);
        self.get_json(&url)
    }

    fn champion(&self, champion_id: i64) -> Result<Option<ChampionDto>, AppError> {
        let url = endpoints::champion(&self.base, champion_id);

        match self.get_json(&url) {
            Ok(champion) => Ok(Some(champion)),
            Err(AppError::Status { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
