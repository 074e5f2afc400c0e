use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

const MAX_BACKOFF_FACTOR: u32 = 8;
/// Longest a provider-supplied `Retry-After` may park a worker.
pub const MAX_RETRY_AFTER: Duration = Duration::from_secs(5);

/// Blocking front for a process-wide request quota.
pub struct Throttle {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    clock: DefaultClock,
}

impl Throttle {
    pub fn per_second(requests: u32) -> Self {
        let quota = Quota::per_second(NonZeroU32::new(requests).unwrap_or(NonZeroU32::MIN));
        Throttle {
            limiter: RateLimiter::direct(quota),
            clock: DefaultClock::default(),
        }
    }

    /// Parks the calling thread until a permit is available.
    pub fn wait(&self) {
        while let Err(not_until) = self.limiter.check() {
            thread::sleep(not_until.wait_time_from(self.clock.now()));
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
}

impl RetryPolicy {
    /// Exponential delay before retry number `attempt` (zero-based), capped at 8x the base.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt).min(MAX_BACKOFF_FACTOR);
        self.initial_backoff.saturating_mul(factor)
    }

    /// Delay before retry number `attempt`. A `Retry-After` hint wins over the
    /// computed backoff but is clamped to `MAX_RETRY_AFTER`.
    pub fn delay(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        match retry_after {
            Some(hint) => hint.min(MAX_RETRY_AFTER),
            None => self.backoff(attempt),
        }
    }

    pub fn is_retryable_status(status: u16) -> bool {
        status == 429 || (500..600).contains(&status)
    }
}

/// Parses a `Retry-After` value given in whole seconds.
pub fn parse_retry_after(value: Option<&str>) -> Option<Duration> {
    value
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}
