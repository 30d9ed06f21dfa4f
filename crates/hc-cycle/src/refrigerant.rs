//! Working fluid definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Refrigerants accepted as the single working fluid of the cycle.
///
/// The composition is pure and fixed once at model construction; run modes
/// never change it between solves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Refrigerant {
    /// R134a (1,1,1,2-tetrafluoroethane), the baseline fluid
    #[default]
    R134a,
    /// R32 (difluoromethane)
    R32,
    /// R290 (propane)
    R290,
    /// R1234yf (2,3,3,3-tetrafluoropropene)
    R1234yf,
    /// R717 (ammonia)
    R717,
    /// R744 (carbon dioxide)
    R744,
}

impl Refrigerant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Refrigerant::R134a => "R134a",
            Refrigerant::R32 => "R32",
            Refrigerant::R290 => "R290",
            Refrigerant::R1234yf => "R1234yf",
            Refrigerant::R717 => "R717",
            Refrigerant::R744 => "R744",
        }
    }
}

impl fmt::Display for Refrigerant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_r134a() {
        assert_eq!(Refrigerant::default(), Refrigerant::R134a);
    }

    #[test]
    fn display_matches_ashrae_name() {
        assert_eq!(Refrigerant::R290.to_string(), "R290");
        assert_eq!(Refrigerant::R1234yf.as_str(), "R1234yf");
    }
}
