//! Core data model for Porta.
//!
//! Delivery records shown on the dashboard, the chat transcript, and the
//! view enum the shell routes between.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed delivery, one row in the dashboard history table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub id: String,

    /// Display label, not a real timestamp ("10:30 AM", "Yesterday").
    pub time: String,

    pub carrier: String,
    pub status: DeliveryStatus,
    pub package_id: String,
}

impl DeliveryRecord {
    /// Mints the record for a completed simulation run.
    ///
    /// The package ID carries a slice of the record's UUID so repeated runs
    /// stay distinguishable in the history table.
    pub fn simulated() -> Self {
        let id = Uuid::new_v4();
        let short = id.simple().to_string()[..4].to_uppercase();
        Self {
            id: id.to_string(),
            time: jiff::Zoned::now().strftime("%H:%M").to_string(),
            carrier: "Simulated".to_string(),
            status: DeliveryStatus::Delivered,
            package_id: format!("SIM-{short}"),
        }
    }
}

/// Where a delivery stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Delivered,
    InTransit,
    Cancelled,
}

impl DeliveryStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Delivered => "Delivered",
            Self::InTransit => "In Transit",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Who said a chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One line of the support chat transcript. Append-only, never edited.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Which view the shell is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum View {
    #[default]
    Home,
    Specs,
    Lab,
    Dashboard,
}

impl View {
    /// All views in navigation order.
    pub fn all_ordered() -> &'static [Self] {
        &[Self::Home, Self::Specs, Self::Lab, Self::Dashboard]
    }

    /// Display name for the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Specs => "Hardware",
            Self::Lab => "Lab",
            Self::Dashboard => "Console",
        }
    }

    /// The number key that jumps to this view.
    pub fn number_key(self) -> char {
        match self {
            Self::Home => '1',
            Self::Specs => '2',
            Self::Lab => '3',
            Self::Dashboard => '4',
        }
    }

    pub fn from_number_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::Home),
            '2' => Some(Self::Specs),
            '3' => Some(Self::Lab),
            '4' => Some(Self::Dashboard),
            _ => None,
        }
    }

    /// Next view in Tab order, wrapping.
    pub fn next(self) -> Self {
        match self {
            Self::Home => Self::Specs,
            Self::Specs => Self::Lab,
            Self::Lab => Self::Dashboard,
            Self::Dashboard => Self::Home,
        }
    }

    /// Previous view in Tab order, wrapping.
    pub fn prev(self) -> Self {
        match self {
            Self::Home => Self::Dashboard,
            Self::Specs => Self::Home,
            Self::Lab => Self::Specs,
            Self::Dashboard => Self::Lab,
        }
    }
}
