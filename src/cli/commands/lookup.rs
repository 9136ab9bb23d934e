//! Breed lookup command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

use crate::adapters::cache::CachingLookup;
use crate::adapters::dog_api::DogApiClient;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::domain::ports::BreedLookup;

/// Arguments for `breedcache lookup`.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Breed names to look up, in order (case-insensitive)
    #[arg(required = true, value_name = "BREED")]
    pub breeds: Vec<String>,
}

/// Result of looking up a single breed.
#[derive(Debug, Serialize)]
pub struct BreedOutcome {
    /// Breed name as the user typed it.
    pub breed: String,
    /// Sub-breeds, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_breeds: Option<Vec<String>>,
    /// Error message, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Whether the failure was an unknown breed.
    pub not_found: bool,
}

/// Outcomes of a lookup run plus the upstream call count.
#[derive(Debug, Serialize)]
pub struct LookupReport {
    /// One outcome per requested breed, in request order.
    pub results: Vec<BreedOutcome>,
    /// Upstream calls made by the cache.
    pub calls_made: u64,
}

impl LookupReport {
    /// True when no lookup failed.
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.error.is_none())
    }
}

impl CommandOutput for LookupReport {
    fn to_human(&self) -> String {
        let mut lines: Vec<String> = self
            .results
            .iter()
            .map(|r| match (&r.sub_breeds, &r.error) {
                (Some(subs), _) if subs.is_empty() => format!("{}: (no sub-breeds)", r.breed),
                (Some(subs), _) => format!("{}: {}", r.breed, subs.join(", ")),
                (None, Some(err)) => format!("{}: error: {}", r.breed, err),
                (None, None) => format!("{}: (no result)", r.breed),
            })
            .collect();
        lines.push(format!("upstream calls: {}", self.calls_made));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Fetch each breed in order through `lookup`, collecting every outcome.
pub async fn run_lookups<L>(lookup: &CachingLookup<L>, breeds: &[String]) -> LookupReport
where
    L: BreedLookup + ?Sized + 'static,
{
    let mut results = Vec::with_capacity(breeds.len());
    for breed in breeds {
        let outcome = match lookup.fetch(breed).await {
            Ok(subs) => BreedOutcome {
                breed: breed.clone(),
                sub_breeds: Some(subs),
                error: None,
                not_found: false,
            },
            Err(err) => BreedOutcome {
                breed: breed.clone(),
                sub_breeds: None,
                not_found: err.is_not_found(),
                error: Some(err.to_string()),
            },
        };
        results.push(outcome);
    }

    LookupReport {
        results,
        calls_made: lookup.calls_made(),
    }
}

/// Run the lookup command. Returns whether every lookup succeeded.
pub async fn execute(args: LookupArgs, config: &Config, json_mode: bool) -> Result<bool> {
    let client = DogApiClient::with_config(&config.dog_api)
        .context("Failed to create Dog API client")?;
    let lookup = CachingLookup::new(Arc::new(client));

    let report = run_lookups(&lookup, &args.breeds).await;
    output(&report, json_mode);
    Ok(report.all_succeeded())
}
