use crate::calculator::dto::{CalculationRequest, CalculationResult, LambCut};
use crate::calculator::repo_types::InsertLambCalculation;

pub const SERVING_TIPS: [&str; 4] = [
    "Allow 30 minutes resting time before serving",
    "Consider sides: roasted vegetables, potatoes",
    "Order 10% extra for leftovers",
    "Use a meat thermometer for perfect doneness",
];

/// Suggested purchase range in whole pounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightRange {
    pub min: i64,
    pub max: i64,
}

impl WeightRange {
    /// Total pounds are rounded up to a tenth before widening by half a pound
    /// each way. The lower bound never drops below 1.
    pub fn for_ounces(total_ounces: u32) -> Self {
        let total_pounds = (total_ounces as f64 / 16.0 * 10.0).ceil() / 10.0;
        let min = ((total_pounds - 0.5).floor() as i64).max(1);
        let max = (total_pounds + 0.5).ceil() as i64;
        Self { min, max }
    }
}

impl std::fmt::Display for WeightRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} lbs", self.min, self.max)
    }
}

pub fn calculate(req: CalculationRequest) -> CalculationResult {
    let total_ounces = req.people * req.hunger_level.serving_ounces();
    let range = WeightRange::for_ounces(total_ounces);

    let noun = if req.people == 1 { "person" } else { "people" };
    let total_description = format!("For {} {} {}", req.people, req.hunger_level, noun);

    CalculationResult {
        total_weight: range.to_string(),
        total_description,
        cuts: recommend_cuts(req.people),
        serving_tips: SERVING_TIPS.iter().map(|t| t.to_string()).collect(),
    }
}

fn cut(name: &str, amount: String, icon: &str) -> LambCut {
    LambCut {
        name: name.to_string(),
        amount,
        icon: icon.to_string(),
    }
}

pub fn recommend_cuts(people: u32) -> Vec<LambCut> {
    match people {
        0..=2 => vec![
            cut(
                "Lamb Chops",
                format!("{}-{} pieces", people * 2, people * 3),
                "utensils",
            ),
            cut("Rack of Lamb", "1 rack (8 ribs)".into(), "drumstick-bite"),
        ],
        3..=6 => vec![
            cut("Leg of Lamb", "1 whole leg (5-7 lbs)".into(), "drumstick-bite"),
            cut("Lamb Shoulder", "1 shoulder roast (3-4 lbs)".into(), "beef"),
            cut("Lamb Chops", format!("{} pieces", people * 2), "utensils"),
        ],
        _ => vec![
            cut(
                "Whole Lamb Leg",
                "1-2 legs (10-14 lbs total)".into(),
                "drumstick-bite",
            ),
            cut("Lamb Shoulder Roast", "2 roasts (6-8 lbs total)".into(), "beef"),
            cut("Lamb Shanks", format!("{} pieces", people), "utensils"),
        ],
    }
}

/// Builds the record persisted for a finished calculation: only the lower
/// bound of the weight range is kept, cuts are stored as JSON.
pub fn summarize(
    req: CalculationRequest,
    result: &CalculationResult,
) -> anyhow::Result<InsertLambCalculation> {
    let lower = result
        .total_weight
        .split('-')
        .next()
        .unwrap_or_default()
        .to_string();
    Ok(InsertLambCalculation {
        people: req.people,
        hunger_level: req.hunger_level,
        total_weight: lower,
        recommendations: serde_json::to_string(&result.cuts)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::dto::HungerLevel;

    fn req(people: u32, hunger_level: HungerLevel) -> CalculationRequest {
        CalculationRequest {
            people,
            hunger_level,
        }
    }

    fn names(cuts: &[LambCut]) -> Vec<&str> {
        cuts.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn single_hungry_guest() {
        let result = calculate(req(1, HungerLevel::Hungry));
        assert_eq!(result.total_weight, "1-1 lbs");
        assert_eq!(result.total_description, "For 1 hungry person");
        assert_eq!(
            result.cuts,
            vec![
                LambCut {
                    name: "Lamb Chops".into(),
                    amount: "2-3 pieces".into(),
                    icon: "utensils".into(),
                },
                LambCut {
                    name: "Rack of Lamb".into(),
                    amount: "1 rack (8 ribs)".into(),
                    icon: "drumstick-bite".into(),
                },
            ]
        );
    }

    #[test]
    fn four_starving_guests() {
        let result = calculate(req(4, HungerLevel::Starving));
        assert_eq!(result.total_weight, "1-3 lbs");
        assert_eq!(result.total_description, "For 4 starving people");
        assert_eq!(
            names(&result.cuts),
            vec!["Leg of Lamb", "Lamb Shoulder", "Lamb Chops"]
        );
        assert_eq!(result.cuts[0].amount, "1 whole leg (5-7 lbs)");
        assert_eq!(result.cuts[1].amount, "1 shoulder roast (3-4 lbs)");
        assert_eq!(result.cuts[2].amount, "8 pieces");
    }

    #[test]
    fn ten_snacky_guests() {
        let result = calculate(req(10, HungerLevel::Snacky));
        // 50oz -> 3.2lb
        assert_eq!(result.total_weight, "2-4 lbs");
        assert_eq!(
            names(&result.cuts),
            vec!["Whole Lamb Leg", "Lamb Shoulder Roast", "Lamb Shanks"]
        );
        assert_eq!(result.cuts[0].amount, "1-2 legs (10-14 lbs total)");
        assert_eq!(result.cuts[1].amount, "2 roasts (6-8 lbs total)");
        assert_eq!(result.cuts[2].amount, "10 pieces");
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(names(&recommend_cuts(2)), vec!["Lamb Chops", "Rack of Lamb"]);
        assert_eq!(recommend_cuts(2)[0].amount, "4-6 pieces");
        assert_eq!(recommend_cuts(3)[0].name, "Leg of Lamb");
        assert_eq!(recommend_cuts(6)[0].name, "Leg of Lamb");
        assert_eq!(recommend_cuts(6)[2].amount, "12 pieces");
        assert_eq!(recommend_cuts(7)[0].name, "Whole Lamb Leg");
        assert_eq!(recommend_cuts(7)[2].amount, "7 pieces");
    }

    #[test]
    fn plural_only_above_one() {
        assert_eq!(
            calculate(req(2, HungerLevel::Hungry)).total_description,
            "For 2 hungry people"
        );
    }

    #[test]
    fn weight_bounds_hold_over_whole_domain() {
        for people in 1..=50 {
            for level in HungerLevel::ALL {
                let range = WeightRange::for_ounces(people * level.serving_ounces());
                assert!(range.min >= 1, "{} {}", people, level);
                assert!(range.max >= range.min, "{} {}", people, level);
                let result = calculate(req(people, level));
                assert_eq!(result.total_weight, range.to_string());
                assert_eq!(result.serving_tips, SERVING_TIPS);
            }
        }
    }

    #[test]
    fn calculation_is_deterministic() {
        let a = serde_json::to_vec(&calculate(req(17, HungerLevel::Starving))).unwrap();
        let b = serde_json::to_vec(&calculate(req(17, HungerLevel::Starving))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn summary_keeps_lower_bound_and_encodes_cuts() {
        let request = req(4, HungerLevel::Starving);
        let result = calculate(request);
        let summary = summarize(request, &result).unwrap();
        assert_eq!(summary.total_weight, "1");
        assert_eq!(summary.people, 4);
        assert_eq!(summary.hunger_level, HungerLevel::Starving);
        let cuts: Vec<LambCut> = serde_json::from_str(&summary.recommendations).unwrap();
        assert_eq!(cuts, result.cuts);
    }

    #[test]
    fn summary_lower_bound_for_large_party() {
        let request = req(50, HungerLevel::Starving);
        let result = calculate(request);
        // 450oz -> 28.2lb
        assert_eq!(result.total_weight, "27-29 lbs");
        assert_eq!(summarize(request, &result).unwrap().total_weight, "27");
    }
}
