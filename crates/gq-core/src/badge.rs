use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::collection::Keyed;
use crate::points::format_points;

/// An achievement record accumulating points up to a maximum, optionally tied
/// to a specific quest.
///
/// Invariant: `0 <= points_earned <= max_points` at all times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    /// Unique identifier.
    pub id: String,
    /// Display name of the badge.
    pub name: String,
    /// What the badge rewards.
    pub description: String,
    /// Points accumulated so far. Never exceeds `max_points`.
    pub points_earned: f64,
    /// The ceiling for `points_earned`.
    pub max_points: f64,
    /// The quest whose completion feeds this badge, if any.
    pub quest_id: Option<String>,
    /// The day the badge was fully earned, once it reaches `max_points`.
    pub date_earned: Option<NaiveDate>,
}

impl Badge {
    /// Create a badge with zero earned points.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        max_points: f64,
        quest_id: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            points_earned: 0.0,
            max_points,
            quest_id,
            date_earned: None,
        }
    }

    /// Add points, clamped at `max_points`. Non-positive amounts are ignored,
    /// so earned points never decrease.
    pub fn add_points(&mut self, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        self.points_earned = (self.points_earned + amount).min(self.max_points);
    }

    /// Whether the badge has reached its maximum.
    pub fn is_maxed(&self) -> bool {
        self.points_earned >= self.max_points
    }

    /// Display line: `{name} - {points} points ({description})`, whole point
    /// values shown without decimals.
    pub fn format_for_display(&self) -> String {
        format!(
            "{} - {} points ({})",
            self.name,
            format_points(self.points_earned),
            self.description
        )
    }
}

impl Keyed for Badge {
    fn key(&self) -> Option<String> {
        if self.id.trim().is_empty() {
            None
        } else {
            Some(self.id.clone())
        }
    }
}
