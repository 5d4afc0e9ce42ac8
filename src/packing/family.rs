use std::fmt;
use std::str::FromStr;

use super::types::Monotonicity;
use crate::error::{DobbleError, DobbleResult};

/// Registry entry: radius generator `f(k)` for the k-th circle (k = 1..=N)
/// and the natural order of its output.
#[derive(Debug, Clone, Copy)]
pub struct FamilySpec {
    pub name: &'static str,
    pub generator: fn(usize) -> f64,
    pub monotonicity: Monotonicity,
}

/// Circle-in-circle packing families with tabulated solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackingFamily {
    /// Equal circles.
    Cci,
    /// r_k = k^(-1/5)
    Ccib,
    /// r_k = k^(-1/2)
    Ccic,
    /// r_k = k^(1/2)
    Ccir,
    /// r_k = k^(-2/3)
    Ccis,
}

fn equal(_k: usize) -> f64 {
    1.0
}

fn inverse_fifth_root(k: usize) -> f64 {
    (k as f64).powf(-1.0 / 5.0)
}

fn inverse_sqrt(k: usize) -> f64 {
    (k as f64).powf(-1.0 / 2.0)
}

fn sqrt(k: usize) -> f64 {
    (k as f64).sqrt()
}

fn inverse_two_thirds(k: usize) -> f64 {
    (k as f64).powf(-2.0 / 3.0)
}

static REGISTRY: [FamilySpec; 5] = [
    FamilySpec {
        name: "cci",
        generator: equal,
        monotonicity: Monotonicity::Increasing,
    },
    FamilySpec {
        name: "ccib",
        generator: inverse_fifth_root,
        monotonicity: Monotonicity::Decreasing,
    },
    FamilySpec {
        name: "ccic",
        generator: inverse_sqrt,
        monotonicity: Monotonicity::Decreasing,
    },
    FamilySpec {
        name: "ccir",
        generator: sqrt,
        monotonicity: Monotonicity::Increasing,
    },
    FamilySpec {
        name: "ccis",
        generator: inverse_two_thirds,
        monotonicity: Monotonicity::Decreasing,
    },
];

impl PackingFamily {
    pub const ALL: [PackingFamily; 5] = [
        PackingFamily::Cci,
        PackingFamily::Ccib,
        PackingFamily::Ccic,
        PackingFamily::Ccir,
        PackingFamily::Ccis,
    ];

    pub fn spec(&self) -> &'static FamilySpec {
        let idx = match self {
            PackingFamily::Cci => 0,
            PackingFamily::Ccib => 1,
            PackingFamily::Ccic => 2,
            PackingFamily::Ccir => 3,
            PackingFamily::Ccis => 4,
        };
        &REGISTRY[idx]
    }

    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    pub fn monotonicity(&self) -> Monotonicity {
        self.spec().monotonicity
    }

    /// Unnormalized radius of the k-th circle, `k >= 1`.
    pub fn relative_radius(&self, k: usize) -> f64 {
        (self.spec().generator)(k)
    }

    pub fn from_name(name: &str) -> DobbleResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|family| family.name() == name)
            .ok_or_else(|| DobbleError::UnsupportedFamily(name.to_string()))
    }
}

impl FromStr for PackingFamily {
    type Err = DobbleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for PackingFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_names_round_trip() {
        for family in PackingFamily::ALL {
            assert_eq!(PackingFamily::from_name(family.name()).unwrap(), family);
            assert_eq!(family.to_string().parse::<PackingFamily>().unwrap(), family);
        }
    }

    #[test]
    fn test_unknown_family() {
        let err = PackingFamily::from_name("hexagonal").unwrap_err();
        assert!(matches!(err, DobbleError::UnsupportedFamily(ref n) if n == "hexagonal"));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_generators_match_monotonicity() {
        for family in PackingFamily::ALL {
            let vals: Vec<f64> = (1..=10).map(|k| family.relative_radius(k)).collect();
            let ordered = match family.monotonicity() {
                Monotonicity::Increasing => vals.windows(2).all(|w| w[0] <= w[1]),
                Monotonicity::Decreasing => vals.windows(2).all(|w| w[0] >= w[1]),
            };
            assert!(ordered, "{} is not {:?}", family, family.monotonicity());
        }
    }
}
