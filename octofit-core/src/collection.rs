//! Collection Catalogue
//!
//! The five read-only collections exposed by the OctoFit API, together with the
//! fixed copy each view shows (titles, loading labels, empty-state guidance).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::entities::{Activity, LeaderboardEntry, Team, User, Workout};
use crate::table::{Table, Tone};

/// A remote collection served under `/api/{slug}/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Users,
    Teams,
    Activities,
    Workouts,
    Leaderboard,
}

impl Collection {
    /// All collections in navigation order
    pub const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::Teams,
        Collection::Activities,
        Collection::Workouts,
        Collection::Leaderboard,
    ];

    /// Path segment under the API base (`users`, `teams`, ...)
    pub fn slug(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Teams => "teams",
            Collection::Activities => "activities",
            Collection::Workouts => "workouts",
            Collection::Leaderboard => "leaderboard",
        }
    }

    /// Client-side route rendering this collection
    pub fn route(self) -> &'static str {
        match self {
            Collection::Users => "/users",
            Collection::Teams => "/teams",
            Collection::Activities => "/activities",
            Collection::Workouts => "/workouts",
            Collection::Leaderboard => "/leaderboard",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Collection::Users => "Users",
            Collection::Teams => "Teams",
            Collection::Activities => "Activities",
            Collection::Workouts => "Workouts",
            Collection::Leaderboard => "Leaderboard",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Collection::Users => "👥",
            Collection::Teams => "🏆",
            Collection::Activities => "📋",
            Collection::Workouts => "💪",
            Collection::Leaderboard => "🏅",
        }
    }

    /// Muted line under the page heading
    pub fn subtitle(self) -> &'static str {
        match self {
            Collection::Users => "Manage and view all registered users",
            Collection::Teams => "View and manage competitive teams",
            Collection::Activities => "Browse all available activities",
            Collection::Workouts => "Track your fitness workouts and progress",
            Collection::Leaderboard => "Top performers and competitive rankings",
        }
    }

    /// Accessible label of the progress indicator
    pub fn loading_label(self) -> String {
        format!("Loading {}...", self.slug())
    }

    /// Bold lead of the empty-state banner
    pub fn empty_headline(self) -> &'static str {
        match self {
            Collection::Users => "No users found.",
            Collection::Teams => "No teams found.",
            Collection::Activities => "No activities found.",
            Collection::Workouts => "No workouts found.",
            Collection::Leaderboard => "No leaderboard data available.",
        }
    }

    /// Guidance text following the empty-state headline
    pub fn empty_hint(self) -> &'static str {
        match self {
            Collection::Users => "Register new users to see them here.",
            Collection::Teams => "Create a team to start competing!",
            Collection::Activities => "Start logging your activities to see them here.",
            Collection::Workouts => "Log your first workout to get started!",
            Collection::Leaderboard => {
                "Complete workouts and activities to appear on the leaderboard!"
            }
        }
    }

    /// Card header shown above a non-empty table
    pub fn count_heading(self, count: usize) -> String {
        match self {
            Collection::Leaderboard => format!("Top {} Competitors", count),
            other => format!("Total {}: {}", other.title(), count),
        }
    }

    /// Landing-page feature card description
    pub fn feature_description(self) -> &'static str {
        match self {
            Collection::Users => "Manage and view all registered users in the system",
            Collection::Teams => "Create and manage competitive teams",
            Collection::Activities => "Track various fitness activities",
            Collection::Workouts => "Log and monitor your workout sessions",
            Collection::Leaderboard => "View competitive rankings and scores",
        }
    }

    /// Landing-page feature card accent
    pub fn accent(self) -> Tone {
        match self {
            Collection::Users => Tone::Primary,
            Collection::Teams => Tone::Warning,
            Collection::Activities => Tone::Info,
            Collection::Workouts => Tone::Danger,
            Collection::Leaderboard => Tone::Success,
        }
    }

    /// Project normalized items into this collection's table
    pub fn table(self, items: &[Value]) -> Table {
        match self {
            Collection::Users => Table::build::<User>(self, items),
            Collection::Teams => Table::build::<Team>(self, items),
            Collection::Activities => Table::build::<Activity>(self, items),
            Collection::Workouts => Table::build::<Workout>(self, items),
            Collection::Leaderboard => Table::build::<LeaderboardEntry>(self, items),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Returned when a name matches none of the five collections
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown collection '{0}' (expected one of: users, teams, activities, workouts, leaderboard)")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_matches('/');
        Collection::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownCollection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trips_through_from_str() {
        for collection in Collection::ALL {
            assert_eq!(collection.slug().parse::<Collection>(), Ok(collection));
        }
    }

    #[test]
    fn test_from_str_is_lenient() {
        assert_eq!("Teams".parse::<Collection>(), Ok(Collection::Teams));
        assert_eq!("/leaderboard/".parse::<Collection>(), Ok(Collection::Leaderboard));
        assert_eq!(
            "badges".parse::<Collection>(),
            Err(UnknownCollection("badges".to_string()))
        );
    }

    #[test]
    fn test_routes_are_unique_and_rooted() {
        let mut routes: Vec<_> = Collection::ALL.iter().map(|c| c.route()).collect();
        routes.sort();
        routes.dedup();
        assert_eq!(routes.len(), 5);
        assert!(routes.iter().all(|r| r.starts_with('/') && *r != "/"));
    }

    #[test]
    fn test_count_heading() {
        assert_eq!(Collection::Users.count_heading(4), "Total Users: 4");
        assert_eq!(Collection::Leaderboard.count_heading(3), "Top 3 Competitors");
    }

    #[test]
    fn test_loading_label_names_collection() {
        assert_eq!(Collection::Activities.loading_label(), "Loading activities...");
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Collection::Workouts).unwrap();
        assert_eq!(json, "\"workouts\"");
    }
}
