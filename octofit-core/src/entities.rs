//! Display Projections
//!
//! Read-only views of the five API entities. Every field is optional; the
//! projection decides what an absent field looks like in the table.

use serde::Deserialize;

use crate::fields::{first_present, present, text_or, FieldValue};
use crate::table::{Cell, CellStyle, Column, TableRow, Tone};

/// Placeholder for missing names
const DASH: &str = "-";
/// Placeholder for missing descriptions and measurements
const NOT_AVAILABLE: &str = "N/A";
/// Activity and workout type when the API omits it
const GENERAL: &str = "General";

fn id_text(id: &Option<FieldValue>) -> Option<String> {
    present(id).map(ToString::to_string)
}

/// Append a unit to a present measurement (`30 min`), otherwise `N/A`
fn measured(field: &Option<FieldValue>, unit: &str) -> String {
    present(field)
        .map(|v| format!("{} {}", v, unit))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: Option<FieldValue>,
    pub username: Option<FieldValue>,
    pub email: Option<FieldValue>,
    pub first_name: Option<FieldValue>,
    pub last_name: Option<FieldValue>,
}

impl TableRow for User {
    const COLUMNS: &'static [Column] = &[
        Column::left("ID", 10),
        Column::left("Username", 20),
        Column::left("Email", 25),
        Column::left("First Name", 20),
        Column::left("Last Name", 25),
    ];

    fn cells(&self, _index: usize) -> Vec<Cell> {
        let username = present(&self.username)
            .map(|u| format!("@{}", u))
            .unwrap_or_else(|| DASH.to_string());
        let email = match present(&self.email) {
            Some(email) => Cell::new(email.to_string(), CellStyle::Mailto),
            None => Cell::new(DASH, CellStyle::Muted),
        };

        vec![
            Cell::new(text_or(&self.id, DASH), CellStyle::Badge(Tone::Success)),
            Cell::new(username, CellStyle::Strong),
            email,
            Cell::new(text_or(&self.first_name, DASH), CellStyle::Muted),
            Cell::new(text_or(&self.last_name, DASH), CellStyle::Muted),
        ]
    }

    fn id(&self) -> Option<String> {
        id_text(&self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: Option<FieldValue>,
    pub name: Option<FieldValue>,
    pub description: Option<FieldValue>,
    pub members_count: Option<FieldValue>,
}

impl TableRow for Team {
    const COLUMNS: &'static [Column] = &[
        Column::left("ID", 10),
        Column::left("Team Name", 25),
        Column::left("Description", 45),
        Column::left("Members", 20),
    ];

    fn cells(&self, _index: usize) -> Vec<Cell> {
        vec![
            Cell::new(text_or(&self.id, DASH), CellStyle::Badge(Tone::Warning)),
            Cell::new(text_or(&self.name, DASH), CellStyle::Strong),
            Cell::new(text_or(&self.description, NOT_AVAILABLE), CellStyle::Muted),
            Cell::new(text_or(&self.members_count, "0"), CellStyle::Badge(Tone::Secondary)),
        ]
    }

    fn id(&self) -> Option<String> {
        id_text(&self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub id: Option<FieldValue>,
    pub name: Option<FieldValue>,
    pub description: Option<FieldValue>,
    #[serde(rename = "type")]
    pub kind: Option<FieldValue>,
}

impl TableRow for Activity {
    const COLUMNS: &'static [Column] = &[
        Column::left("ID", 10),
        Column::left("Activity Name", 25),
        Column::left("Description", 45),
        Column::left("Type", 20),
    ];

    fn cells(&self, _index: usize) -> Vec<Cell> {
        vec![
            Cell::new(text_or(&self.id, DASH), CellStyle::Badge(Tone::Primary)),
            Cell::new(text_or(&self.name, DASH), CellStyle::Strong),
            Cell::new(text_or(&self.description, NOT_AVAILABLE), CellStyle::Muted),
            Cell::new(text_or(&self.kind, GENERAL), CellStyle::Badge(Tone::Info)),
        ]
    }

    fn id(&self) -> Option<String> {
        id_text(&self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Workout {
    pub id: Option<FieldValue>,
    pub name: Option<FieldValue>,
    #[serde(rename = "type")]
    pub kind: Option<FieldValue>,
    /// Minutes
    pub duration: Option<FieldValue>,
    /// Kilocalories
    pub calories: Option<FieldValue>,
}

impl TableRow for Workout {
    const COLUMNS: &'static [Column] = &[
        Column::left("ID", 10),
        Column::left("Workout Name", 25),
        Column::left("Type", 20),
        Column::left("Duration", 20),
        Column::left("Calories Burned", 25),
    ];

    fn cells(&self, _index: usize) -> Vec<Cell> {
        vec![
            Cell::new(text_or(&self.id, DASH), CellStyle::Badge(Tone::Danger)),
            Cell::new(text_or(&self.name, DASH), CellStyle::Strong),
            Cell::new(text_or(&self.kind, GENERAL), CellStyle::Badge(Tone::Info)),
            Cell::new(measured(&self.duration, "min"), CellStyle::Plain),
            Cell::new(measured(&self.calories, "kcal"), CellStyle::Strong),
        ]
    }

    fn id(&self) -> Option<String> {
        id_text(&self.id)
    }
}

/// Leaderboard row. Upstream serializers disagree on field names, so each
/// displayed value is an alternation resolved by [`first_present`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LeaderboardEntry {
    pub id: Option<FieldValue>,
    pub username: Option<FieldValue>,
    pub user_name: Option<FieldValue>,
    pub name: Option<FieldValue>,
    pub team_name: Option<FieldValue>,
    pub team: Option<FieldValue>,
    pub points: Option<FieldValue>,
    pub score: Option<FieldValue>,
    pub activity_count: Option<FieldValue>,
    pub activities: Option<FieldValue>,
}

impl LeaderboardEntry {
    pub fn display_user(&self) -> String {
        first_present([&self.username, &self.user_name, &self.name])
            .map(ToString::to_string)
            .unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn display_team(&self) -> String {
        first_present([&self.team_name, &self.team])
            .map(ToString::to_string)
            .unwrap_or_else(|| "No Team".to_string())
    }

    pub fn display_points(&self) -> String {
        first_present([&self.points, &self.score])
            .map(ToString::to_string)
            .unwrap_or_else(|| "0".to_string())
    }

    pub fn display_activities(&self) -> String {
        first_present([&self.activity_count, &self.activities])
            .map(ToString::to_string)
            .unwrap_or_else(|| "0".to_string())
    }
}

/// Medal for the podium; 1-based rank
pub fn medal(rank: usize) -> Option<&'static str> {
    match rank {
        1 => Some("🥇"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}

/// Badge tone of a 1-based rank
pub fn rank_tone(rank: usize) -> Tone {
    match rank {
        1 => Tone::Warning,
        2 => Tone::Secondary,
        3 => Tone::Info,
        _ => Tone::Light,
    }
}

impl TableRow for LeaderboardEntry {
    const COLUMNS: &'static [Column] = &[
        Column::center("Rank", 10),
        Column::left("User", 25),
        Column::left("Team", 25),
        Column::center("Points", 20),
        Column::center("Activities", 20),
    ];

    fn cells(&self, index: usize) -> Vec<Cell> {
        // rank follows response order; the API decides the ordering
        let rank = index + 1;
        let rank_text = match medal(rank) {
            Some(medal) => format!("{} {}", medal, rank),
            None => rank.to_string(),
        };

        vec![
            Cell::new(rank_text, CellStyle::Rank(rank_tone(rank))),
            Cell::new(self.display_user(), CellStyle::Strong),
            Cell::new(self.display_team(), CellStyle::Badge(Tone::Primary)),
            Cell::new(self.display_points(), CellStyle::Score),
            Cell::new(self.display_activities(), CellStyle::Badge(Tone::Info)),
        ]
    }

    fn id(&self) -> Option<String> {
        id_text(&self.id)
    }

    fn highlighted(&self, index: usize) -> bool {
        index < 3
    }
}
