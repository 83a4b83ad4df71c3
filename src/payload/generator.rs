//! Fake Payload Generator
//!
//! Produces the filler batch written to the store on a cache miss.

use rand::{distr::Alphanumeric, rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};

use super::corpus;
use crate::error::{AppError, Result};

/// Number of records in every generated batch.
pub const DEFAULT_ROWS: usize = 30;

const PASSWORD_LENGTH: usize = 12;

// == Payload Source ==
/// Anything able to produce a serialized payload for a cache miss.
pub trait PayloadSource: Send + Sync {
    fn generate(&self, rng: &mut StdRng) -> Result<String>;
}

// == Fake Record ==
/// One synthetic row of the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FakeRecord {
    pub id: usize,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub animal: String,
    pub user_agent: String,
    pub car: String,
    pub url: String,
    pub uuid: String,
    pub password: String,
}

impl FakeRecord {
    /// Draws a record with the given ordinal.
    pub fn random(id: usize, rng: &mut StdRng) -> Self {
        Self {
            id,
            first_name: pick(rng, corpus::FIRST_NAMES).to_string(),
            last_name: pick(rng, corpus::LAST_NAMES).to_string(),
            address: address(rng),
            animal: pick(rng, corpus::ANIMALS).to_string(),
            user_agent: pick(rng, corpus::USER_AGENTS).to_string(),
            car: car(rng),
            url: url(rng),
            uuid: uuid::Builder::from_random_bytes(rng.random())
                .into_uuid()
                .to_string(),
            password: (0..PASSWORD_LENGTH)
                .map(|_| char::from(rng.sample(Alphanumeric)))
                .collect(),
        }
    }
}

// == Fake Payload ==
/// Generates a pretty-printed JSON array of `rows` fake records.
#[derive(Debug, Clone, Copy)]
pub struct FakePayload {
    rows: usize,
}

impl FakePayload {
    pub fn new(rows: usize) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Builds the records without serializing them.
    pub fn records(&self, rng: &mut StdRng) -> Vec<FakeRecord> {
        (1..=self.rows).map(|id| FakeRecord::random(id, rng)).collect()
    }
}

impl Default for FakePayload {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS)
    }
}

impl PayloadSource for FakePayload {
    fn generate(&self, rng: &mut StdRng) -> Result<String> {
        let records = self.records(rng);
        serde_json::to_string_pretty(&records).map_err(|e| AppError::Generation(e.to_string()))
    }
}

// == Field Helpers ==
fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

fn address(rng: &mut StdRng) -> String {
    format!(
        "{} {} {}, {}, {} {:05}",
        rng.random_range(1..10_000u32),
        pick(rng, corpus::STREET_NAMES),
        pick(rng, corpus::STREET_SUFFIXES),
        pick(rng, corpus::CITIES),
        pick(rng, corpus::STATES),
        rng.random_range(1_000..100_000u32),
    )
}

fn car(rng: &mut StdRng) -> String {
    let (make, models) = corpus::CAR_MAKES[rng.random_range(0..corpus::CAR_MAKES.len())];
    format!(
        "{} {} {} {} ({})",
        rng.random_range(1995..=2025u32),
        make,
        pick(rng, models),
        pick(rng, corpus::CAR_TYPES),
        pick(rng, corpus::FUEL_TYPES),
    )
}

fn url(rng: &mut StdRng) -> String {
    format!(
        "https://www.{}.{}/{}",
        pick(rng, corpus::URL_WORDS),
        pick(rng, corpus::URL_TLDS),
        pick(rng, corpus::URL_PATHS),
    )
}
