use crate::error::FetchError;
use crate::retry::{run_with_retry, RetryEvent, RetryPolicy};
use crate::sort::{sort_heroes, SortDirection};
use crate::types::{FetchFailure, Hero, HeroList};
use futures::future::BoxFuture;
use reqwest::Client;
use std::collections::HashSet;

/// Something that can produce one hero list per call.
pub trait HeroSource: Send + Sync {
    fn fetch_heroes(&self) -> BoxFuture<'_, Result<HeroList, FetchError>>;
}

/// Plain HTTP GET against a JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl HeroSource for HttpSource {
    fn fetch_heroes(&self) -> BoxFuture<'_, Result<HeroList, FetchError>> {
        Box::pin(get_heroes(&self.client, &self.url))
    }
}

pub async fn get_heroes(client: &Client, url: &str) -> Result<HeroList, FetchError> {
    tracing::debug!(url, "requesting hero list");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let heroes = response.json::<HeroList>().await.map_err(|e| {
        if e.is_decode() {
            FetchError::Parse(e)
        } else {
            FetchError::Network(e)
        }
    })?;
    validate(&heroes)?;
    Ok(heroes)
}

/// Reject lists with duplicate ids or win rates outside 0..=100.
pub fn validate(heroes: &[Hero]) -> Result<(), FetchError> {
    let mut seen = HashSet::with_capacity(heroes.len());
    for hero in heroes {
        if !hero.win_rate.is_finite() || !(0.0..=100.0).contains(&hero.win_rate) {
            return Err(FetchError::Invalid(format!(
                "hero {} has win rate {}",
                hero.hero_id, hero.win_rate
            )));
        }
        if !seen.insert(&hero.hero_id) {
            return Err(FetchError::Invalid(format!(
                "duplicate hero id {}",
                hero.hero_id
            )));
        }
    }
    Ok(())
}

/// Fetch with retries and return the list ranked by win rate, best first.
pub async fn load_heroes<S, R>(
    source: &S,
    policy: &RetryPolicy,
    on_retry: R,
) -> Result<HeroList, FetchFailure>
where
    S: HeroSource + ?Sized,
    R: FnMut(&RetryEvent),
{
    let mut heroes = run_with_retry(policy, |_| source.fetch_heroes(), on_retry).await?;
    sort_heroes(&mut heroes, SortDirection::Descending);
    tracing::info!(count = heroes.len(), "hero list loaded");
    Ok(heroes)
}


#[cfg(test)]
mod tests {
    use super::stub::ScriptedSource;
    use super::*;
    use crate::sort::hero;

    #[test]
    fn validate_rejects_duplicates_and_bad_rates() {
        assert!(validate(&[hero(1, "A", 50.0), hero(2, "B", 100.0)]).is_ok());
        assert!(matches!(
            validate(&[hero(1, "A", 50.0), hero(1, "B", 40.0)]),
            Err(FetchError::Invalid(_))
        ));
        assert!(validate(&[hero(1, "A", 100.5)]).is_err());
        assert!(validate(&[hero(1, "A", f64::NAN)]).is_err());
        assert!(validate(&[hero(1, "A", -1.0)]).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn load_sorts_best_first() {
        let source = ScriptedSource::new(vec![Ok(vec![
            hero(2, "B", 40.0),
            hero(1, "A", 60.0),
            hero(3, "C", 50.0),
        ])]);
        let heroes = load_heroes(&source, &RetryPolicy::default(), |_| {})
            .await
            .unwrap();
        let names: Vec<_> = heroes.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["A", "C", "B"]);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_list_is_success() {
        let source = ScriptedSource::new(vec![Ok(vec![])]);
        let heroes = load_heroes(&source, &RetryPolicy::default(), |_| {})
            .await
            .unwrap();
        assert!(heroes.is_empty());
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn exhausts_without_extra_attempts() {
        let source = ScriptedSource::new(vec![]);
        let failure = load_heroes(&source, &RetryPolicy::default(), |_| {})
            .await
            .unwrap_err();
        assert_eq!(failure.attempts, 4);
        assert_eq!(source.calls(), 4);
    }
}
