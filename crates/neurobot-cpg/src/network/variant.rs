// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

//! Named network variants: a topology plus a feedback policy

use crate::network::feedback::FeedbackPolicy;
use crate::network::gains::{CpgGains, FeedbackGains};
use crate::network::topology::Topology;
use neurobot_neural::CpgError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Single,
    SingleFeedback,
    Double,
    DoubleFeedback,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Single,
        Variant::SingleFeedback,
        Variant::Double,
        Variant::DoubleFeedback,
    ];

    pub fn topology(self) -> Topology {
        match self {
            Variant::Single | Variant::SingleFeedback => Topology::Single,
            Variant::Double | Variant::DoubleFeedback => Topology::Double,
        }
    }

    pub fn feedback_policy(self, gains: &FeedbackGains) -> FeedbackPolicy {
        match self {
            Variant::Single | Variant::Double => FeedbackPolicy::None,
            Variant::SingleFeedback => FeedbackPolicy::SingleSided {
                gain: gains.single_sided_gain,
            },
            Variant::DoubleFeedback => FeedbackPolicy::DoubleSided {
                gain: gains.double_sided_gain,
            },
        }
    }

    /// Built-in gains for this variant's topology
    pub fn default_gains(self) -> CpgGains {
        match self.topology() {
            Topology::Single => CpgGains::single_default(),
            Topology::Double => CpgGains::double_default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Single => "single",
            Variant::SingleFeedback => "single-feedback",
            Variant::Double => "double",
            Variant::DoubleFeedback => "double-feedback",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = CpgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" | "SingleCPG" => Ok(Variant::Single),
            "single-feedback" | "SingleFeedbackCPG" => Ok(Variant::SingleFeedback),
            "double" | "DoubleCPG" => Ok(Variant::Double),
            "double-feedback" | "DoubleFeedbackCPG" => Ok(Variant::DoubleFeedback),
            other => Err(CpgError::ConfigurationMismatch(format!(
                "unknown variant '{}', expected one of single, single-feedback, double, double-feedback",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
        }
        assert_eq!("DoubleFeedbackCPG".parse::<Variant>(), Ok(Variant::DoubleFeedback));
        assert!("triple".parse::<Variant>().is_err());
    }

    #[test]
    fn test_feedback_selection() {
        let gains = FeedbackGains::default();
        assert_eq!(
            Variant::Single.feedback_policy(&gains),
            FeedbackPolicy::None
        );
        assert_eq!(
            Variant::SingleFeedback.feedback_policy(&gains),
            FeedbackPolicy::SingleSided { gain: 25.0 }
        );
        assert_eq!(
            Variant::DoubleFeedback.feedback_policy(&gains),
            FeedbackPolicy::DoubleSided { gain: 5.0 }
        );
        assert_eq!(Variant::DoubleFeedback.topology(), Topology::Double);
    }
}
