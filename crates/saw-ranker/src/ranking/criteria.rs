use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five scoring dimensions of a car listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Criterion {
    #[serde(rename = "Engine_Size", alias = "engine_size")]
    EngineSize,
    #[serde(rename = "Mileage", alias = "mileage")]
    Mileage,
    #[serde(rename = "Doors", alias = "doors")]
    Doors,
    #[serde(rename = "Owner_Count", alias = "owner_count")]
    OwnerCount,
    #[serde(rename = "Price", alias = "price")]
    Price,
}

impl Criterion {
    /// Scoring order. Aggregation sums in this order.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::EngineSize,
            Self::Mileage,
            Self::Doors,
            Self::OwnerCount,
            Self::Price,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::EngineSize => "Engine_Size",
            Self::Mileage => "Mileage",
            Self::Doors => "Doors",
            Self::OwnerCount => "Owner_Count",
            Self::Price => "Price",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EngineSize => "Engine Size",
            Self::Mileage => "Mileage",
            Self::Doors => "Doors",
            Self::OwnerCount => "Owner Count",
            Self::Price => "Price",
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Doors => Polarity::Benefit,
            Self::EngineSize | Self::Mileage | Self::OwnerCount | Self::Price => Polarity::Cost,
        }
    }

    pub const fn default_weight(self) -> f64 {
        match self {
            Self::EngineSize => 2.0,
            Self::Mileage => 2.0,
            Self::Doors => 1.0,
            Self::OwnerCount => 2.0,
            Self::Price => 3.0,
        }
    }

    pub const fn spec(self) -> CriterionSpec {
        CriterionSpec {
            criterion: self,
            polarity: self.polarity(),
            default_weight: self.default_weight(),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Criterion {
    type Err = UnknownCriterion;

    /// Accepts the canonical keys case-insensitively, with `-` or a space in
    /// place of `_`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().replace(['-', ' '], "_");
        Self::ordered()
            .into_iter()
            .find(|criterion| criterion.key().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownCriterion(raw.trim().to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown criterion '{0}' (expected Engine_Size, Mileage, Doors, Owner_Count or Price)")]
pub struct UnknownCriterion(pub String);

/// Whether a larger raw value is better (benefit) or worse (cost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Benefit,
    Cost,
}

impl Polarity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Benefit => "Benefit",
            Self::Cost => "Cost",
        }
    }
}

/// Static definition of a scoring dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriterionSpec {
    pub criterion: Criterion,
    pub polarity: Polarity,
    pub default_weight: f64,
}

impl CriterionSpec {
    /// The fixed car-listing criteria.
    pub const fn standard() -> [Self; 5] {
        [
            Criterion::EngineSize.spec(),
            Criterion::Mileage.spec(),
            Criterion::Doors.spec(),
            Criterion::OwnerCount.spec(),
            Criterion::Price.spec(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_doors_is_a_benefit_criterion() {
        let benefits: Vec<_> = CriterionSpec::standard()
            .into_iter()
            .filter(|spec| spec.polarity == Polarity::Benefit)
            .map(|spec| spec.criterion)
            .collect();
        assert_eq!(benefits, vec![Criterion::Doors]);
    }

    #[test]
    fn default_weights_follow_listing_order() {
        let weights: Vec<f64> = CriterionSpec::standard()
            .iter()
            .map(|spec| spec.default_weight)
            .collect();
        assert_eq!(weights, vec![2.0, 2.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn parses_keys_loosely() {
        assert_eq!("Engine_Size".parse(), Ok(Criterion::EngineSize));
        assert_eq!("owner-count".parse(), Ok(Criterion::OwnerCount));
        assert_eq!(" price ".parse(), Ok(Criterion::Price));
        assert_eq!(
            "colour".parse::<Criterion>(),
            Err(UnknownCriterion("colour".to_string()))
        );
    }

    #[test]
    fn serializes_with_canonical_keys() {
        let json = serde_json::to_string(&Criterion::OwnerCount).expect("serializes");
        assert_eq!(json, "\"Owner_Count\"");
        let parsed: Criterion = serde_json::from_str("\"engine_size\"").expect("alias accepted");
        assert_eq!(parsed, Criterion::EngineSize);
    }
}
