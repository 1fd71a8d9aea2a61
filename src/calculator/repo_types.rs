use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculator::dto::HungerLevel;

/// Calculation summary kept by the storage shim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LambCalculation {
    pub id: Uuid,
    pub people: u32,
    pub hunger_level: HungerLevel,
    pub total_weight: String,    // lower bound of the range, decimal text
    pub recommendations: String, // JSON-encoded cuts
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertLambCalculation {
    pub people: u32,
    pub hunger_level: HungerLevel,
    pub total_weight: String,
    pub recommendations: String,
}

impl InsertLambCalculation {
    pub fn with_id(self, id: Uuid) -> LambCalculation {
        LambCalculation {
            id,
            people: self.people,
            hunger_level: self.hunger_level,
            total_weight: self.total_weight,
            recommendations: self.recommendations,
        }
    }
}
