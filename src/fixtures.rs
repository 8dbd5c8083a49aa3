//! Fixture Data
//!
//! Seed collections served by the development API so the front-end can be run
//! without the Django backend. The built-in seed mirrors the backend's
//! `populate_db` command: two teams, four heroes, their activities, two
//! workouts and an unsorted leaderboard.
//!
//! Fixtures can also be read from a JSON file keyed by collection slug:
//!
//! ```json
//! { "users": [{ "id": 1, "username": "tony" }], "teams": [] }
//! ```
//!
//! Collections missing from the file are served as empty lists.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use octofit_core::{Collection, Page, UnknownCollection};

/// Response shape used when serving a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStyle {
    /// Bare JSON array
    Bare,
    /// `{count, next, previous, results}`
    #[default]
    Paginated,
}

impl fmt::Display for EnvelopeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvelopeStyle::Bare => f.write_str("bare"),
            EnvelopeStyle::Paginated => f.write_str("paginated"),
        }
    }
}

impl FromStr for EnvelopeStyle {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bare" | "array" => Ok(EnvelopeStyle::Bare),
            "paginated" | "envelope" => Ok(EnvelopeStyle::Paginated),
            other => Err(FixtureError::UnknownEnvelope(other.to_string())),
        }
    }
}

/// Fixture loading errors
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read fixture file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse fixture file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error(transparent)]
    UnknownCollection(#[from] UnknownCollection),

    #[error("Fixture '{0}' must be a JSON array")]
    NotAList(String),

    #[error("Unknown envelope style '{0}' (expected bare or paginated)")]
    UnknownEnvelope(String),
}

/// Items for every collection, in serving order
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    collections: HashMap<Collection, Vec<Value>>,
}

impl Fixtures {
    /// No items in any collection
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in seed data
    pub fn seed() -> Self {
        let mut collections = HashMap::new();

        collections.insert(
            Collection::Teams,
            vec![
                json!({ "id": 1, "name": "Marvel", "members_count": 2 }),
                json!({ "id": 2, "name": "DC", "members_count": 2 }),
            ],
        );

        collections.insert(
            Collection::Users,
            HEROES
                .iter()
                .enumerate()
                .map(|(i, hero)| {
                    let (first, last) = hero.name.split_once(' ').unwrap_or((hero.name, ""));
                    json!({
                        "id": i + 1,
                        "username": hero.username,
                        "name": hero.name,
                        "email": hero.email,
                        "first_name": first,
                        "last_name": last,
                        "team": hero.team,
                    })
                })
                .collect(),
        );

        collections.insert(
            Collection::Activities,
            HEROES
                .iter()
                .enumerate()
                .map(|(i, hero)| {
                    json!({
                        "id": i + 1,
                        "user": hero.name,
                        "name": hero.activity.0,
                        "type": hero.activity.0,
                        "duration": hero.activity.1,
                        "calories": hero.activity.2,
                    })
                })
                .collect(),
        );

        collections.insert(
            Collection::Workouts,
            vec![
                json!({ "id": 1, "name": "Morning Cardio", "description": "Cardio for all" }),
                json!({ "id": 2, "name": "Strength Training", "description": "Strength for all" }),
            ],
        );

        // Kept in insertion order; ranks follow list position
        collections.insert(
            Collection::Leaderboard,
            HEROES
                .iter()
                .enumerate()
                .map(|(i, hero)| {
                    json!({
                        "id": i + 1,
                        "user_name": hero.name,
                        "team_name": hero.team,
                        "score": hero.score,
                        "activity_count": 1,
                    })
                })
                .collect(),
        );

        Self { collections }
    }

    /// Read fixtures from a JSON object keyed by collection slug
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path).map_err(|e| FixtureError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let map: Map<String, Value> =
            serde_json::from_str(&content).map_err(|e| FixtureError::Parse {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        let mut collections = HashMap::new();
        for (name, items) in map {
            let collection: Collection = name.parse()?;
            match items {
                Value::Array(items) => {
                    collections.insert(collection, items);
                }
                _ => return Err(FixtureError::NotAList(name)),
            }
        }

        tracing::debug!(path = ?path, collections = collections.len(), "Loaded fixtures");
        Ok(Self { collections })
    }

    pub fn items(&self, collection: Collection) -> &[Value] {
        self.collections
            .get(&collection)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Response body for a collection in the requested shape
    pub fn body(&self, collection: Collection, style: EnvelopeStyle) -> Value {
        let items = self.items(collection).to_vec();
        match style {
            EnvelopeStyle::Bare => Value::Array(items),
            EnvelopeStyle::Paginated => json!(Page::single(items)),
        }
    }
}

struct Hero {
    name: &'static str,
    username: &'static str,
    email: &'static str,
    team: &'static str,
    /// (type, minutes, kcal)
    activity: (&'static str, u32, u32),
    score: u32,
}

const HEROES: [Hero; 4] = [
    Hero {
        name: "Tony Stark",
        username: "tony",
        email: "tony@marvel.com",
        team: "Marvel",
        activity: ("Run", 30, 300),
        score: 1000,
    },
    Hero {
        name: "Steve Rogers",
        username: "steve",
        email: "steve@marvel.com",
        team: "Marvel",
        activity: ("Swim", 45, 400),
        score: 900,
    },
    Hero {
        name: "Bruce Wayne",
        username: "bruce",
        email: "bruce@dc.com",
        team: "DC",
        activity: ("Bike", 60, 500),
        score: 1100,
    },
    Hero {
        name: "Clark Kent",
        username: "clark",
        email: "clark@dc.com",
        team: "DC",
        activity: ("Yoga", 50, 200),
        score: 950,
    },
];
