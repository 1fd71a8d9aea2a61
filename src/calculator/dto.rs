use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const MIN_PEOPLE: i64 = 1;
pub const MAX_PEOPLE: i64 = 50;

/// How much each guest is expected to eat.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HungerLevel {
    Snacky,
    Hungry,
    Starving,
}

impl HungerLevel {
    pub const ALL: [HungerLevel; 3] = [HungerLevel::Snacky, HungerLevel::Hungry, HungerLevel::Starving];

    pub fn as_str(self) -> &'static str {
        match self {
            HungerLevel::Snacky => "snacky",
            HungerLevel::Hungry => "hungry",
            HungerLevel::Starving => "starving",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HungerLevel::Snacky => "Snacky",
            HungerLevel::Hungry => "Hungry",
            HungerLevel::Starving => "Starving",
        }
    }

    /// Base serving per person, in ounces.
    pub fn serving_ounces(self) -> u32 {
        match self {
            HungerLevel::Snacky => 5,
            HungerLevel::Hungry => 7,
            HungerLevel::Starving => 9,
        }
    }

    pub fn serving_hint(self) -> &'static str {
        match self {
            HungerLevel::Snacky => "4-6oz per person",
            HungerLevel::Hungry => "6-8oz per person",
            HungerLevel::Starving => "8-10oz per person",
        }
    }
}

impl std::fmt::Display for HungerLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for POST /api/calculate-lamb, before range checks.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateLambRequest {
    pub people: i64,
    pub hunger_level: HungerLevel,
}

/// A request that passed validation and can be handed to the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationRequest {
    pub people: u32,
    pub hunger_level: HungerLevel,
}

impl TryFrom<CalculateLambRequest> for CalculationRequest {
    type Error = AppError;

    fn try_from(req: CalculateLambRequest) -> Result<Self, Self::Error> {
        if req.people < MIN_PEOPLE {
            return Err(AppError::Validation(format!(
                "people must be at least {}",
                MIN_PEOPLE
            )));
        }
        if req.people > MAX_PEOPLE {
            return Err(AppError::Validation(format!(
                "people must be at most {}",
                MAX_PEOPLE
            )));
        }
        Ok(Self {
            people: req.people as u32,
            hunger_level: req.hunger_level,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LambCut {
    pub name: String,
    pub amount: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub total_weight: String,
    pub total_description: String,
    pub cuts: Vec<LambCut>,
    pub serving_tips: Vec<String>,
}

/// Entry of GET /api/hunger-levels.
#[derive(Debug, Serialize)]
pub struct HungerLevelInfo {
    pub key: HungerLevel,
    pub label: &'static str,
    pub description: &'static str,
    pub ounces: u32,
}

impl From<HungerLevel> for HungerLevelInfo {
    fn from(level: HungerLevel) -> Self {
        Self {
            key: level,
            label: level.label(),
            description: level.serving_hint(),
            ounces: level.serving_ounces(),
        }
    }
}
