//! Jurisdiction codes used to key the reference tables
//!
//! Covers the fifty states plus the District of Columbia. Codes carry no
//! behavior beyond naming and parsing; everything else lives in the tables.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// US state (and DC) postal codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StateCode {
    AL,
    AK,
    AZ,
    AR,
    CA,
    CO,
    CT,
    DE,
    DC,
    FL,
    GA,
    HI,
    ID,
    IL,
    IN,
    IA,
    KS,
    KY,
    LA,
    ME,
    MD,
    MA,
    MI,
    MN,
    MS,
    MO,
    MT,
    NE,
    NV,
    NH,
    NJ,
    NM,
    NY,
    NC,
    ND,
    OH,
    OK,
    OR,
    PA,
    RI,
    SC,
    SD,
    TN,
    TX,
    UT,
    VT,
    VA,
    WA,
    WV,
    WI,
    WY,
}

/// Failure to parse a jurisdiction code or name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown jurisdiction: {0}")]
pub struct ParseError(pub String);

impl StateCode {
    /// Every code, in the order the state selector lists them
    pub const ALL: [StateCode; 51] = [
        StateCode::AL,
        StateCode::AK,
        StateCode::AZ,
        StateCode::AR,
        StateCode::CA,
        StateCode::CO,
        StateCode::CT,
        StateCode::DE,
        StateCode::DC,
        StateCode::FL,
        StateCode::GA,
        StateCode::HI,
        StateCode::ID,
        StateCode::IL,
        StateCode::IN,
        StateCode::IA,
        StateCode::KS,
        StateCode::KY,
        StateCode::LA,
        StateCode::ME,
        StateCode::MD,
        StateCode::MA,
        StateCode::MI,
        StateCode::MN,
        StateCode::MS,
        StateCode::MO,
        StateCode::MT,
        StateCode::NE,
        StateCode::NV,
        StateCode::NH,
        StateCode::NJ,
        StateCode::NM,
        StateCode::NY,
        StateCode::NC,
        StateCode::ND,
        StateCode::OH,
        StateCode::OK,
        StateCode::OR,
        StateCode::PA,
        StateCode::RI,
        StateCode::SC,
        StateCode::SD,
        StateCode::TN,
        StateCode::TX,
        StateCode::UT,
        StateCode::VT,
        StateCode::VA,
        StateCode::WA,
        StateCode::WV,
        StateCode::WI,
        StateCode::WY,
    ];

    /// Get the full state name
    pub fn name(&self) -> &'static str {
        match self {
            StateCode::AL => "Alabama",
            StateCode::AK => "Alaska",
            StateCode::AZ => "Arizona",
            StateCode::AR => "Arkansas",
            StateCode::CA => "California",
            StateCode::CO => "Colorado",
            StateCode::CT => "Connecticut",
            StateCode::DE => "Delaware",
            StateCode::DC => "District of Columbia",
            StateCode::FL => "Florida",
            StateCode::GA => "Georgia",
            StateCode::HI => "Hawaii",
            StateCode::ID => "Idaho",
            StateCode::IL => "Illinois",
            StateCode::IN => "Indiana",
            StateCode::IA => "Iowa",
            StateCode::KS => "Kansas",
            StateCode::KY => "Kentucky",
            StateCode::LA => "Louisiana",
            StateCode::ME => "Maine",
            StateCode::MD => "Maryland",
            StateCode::MA => "Massachusetts",
            StateCode::MI => "Michigan",
            StateCode::MN => "Minnesota",
            StateCode::MS => "Mississippi",
            StateCode::MO => "Missouri",
            StateCode::MT => "Montana",
            StateCode::NE => "Nebraska",
            StateCode::NV => "Nevada",
            StateCode::NH => "New Hampshire",
            StateCode::NJ => "New Jersey",
            StateCode::NM => "New Mexico",
            StateCode::NY => "New York",
            StateCode::NC => "North Carolina",
            StateCode::ND => "North Dakota",
            StateCode::OH => "Ohio",
            StateCode::OK => "Oklahoma",
            StateCode::OR => "Oregon",
            StateCode::PA => "Pennsylvania",
            StateCode::RI => "Rhode Island",
            StateCode::SC => "South Carolina",
            StateCode::SD => "South Dakota",
            StateCode::TN => "Tennessee",
            StateCode::TX => "Texas",
            StateCode::UT => "Utah",
            StateCode::VT => "Vermont",
            StateCode::VA => "Virginia",
            StateCode::WA => "Washington",
            StateCode::WV => "West Virginia",
            StateCode::WI => "Wisconsin",
            StateCode::WY => "Wyoming",
        }
    }

    /// Two-letter postal code
    pub fn code(&self) -> &'static str {
        match self {
            StateCode::AL => "AL",
            StateCode::AK => "AK",
            StateCode::AZ => "AZ",
            StateCode::AR => "AR",
            StateCode::CA => "CA",
            StateCode::CO => "CO",
            StateCode::CT => "CT",
            StateCode::DE => "DE",
            StateCode::DC => "DC",
            StateCode::FL => "FL",
            StateCode::GA => "GA",
            StateCode::HI => "HI",
            StateCode::ID => "ID",
            StateCode::IL => "IL",
            StateCode::IN => "IN",
            StateCode::IA => "IA",
            StateCode::KS => "KS",
            StateCode::KY => "KY",
            StateCode::LA => "LA",
            StateCode::ME => "ME",
            StateCode::MD => "MD",
            StateCode::MA => "MA",
            StateCode::MI => "MI",
            StateCode::MN => "MN",
            StateCode::MS => "MS",
            StateCode::MO => "MO",
            StateCode::MT => "MT",
            StateCode::NE => "NE",
            StateCode::NV => "NV",
            StateCode::NH => "NH",
            StateCode::NJ => "NJ",
            StateCode::NM => "NM",
            StateCode::NY => "NY",
            StateCode::NC => "NC",
            StateCode::ND => "ND",
            StateCode::OH => "OH",
            StateCode::OK => "OK",
            StateCode::OR => "OR",
            StateCode::PA => "PA",
            StateCode::RI => "RI",
            StateCode::SC => "SC",
            StateCode::SD => "SD",
            StateCode::TN => "TN",
            StateCode::TX => "TX",
            StateCode::UT => "UT",
            StateCode::VT => "VT",
            StateCode::VA => "VA",
            StateCode::WA => "WA",
            StateCode::WV => "WV",
            StateCode::WI => "WI",
            StateCode::WY => "WY",
        }
    }

    /// Parse from state code or name (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        let needle = s.trim();
        Self::ALL.iter().copied().find(|state| {
            state.code().eq_ignore_ascii_case(needle) || state.name().eq_ignore_ascii_case(needle)
        })
    }
}

impl std::str::FromStr for StateCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_code(s).ok_or_else(|| ParseError(s.to_string()))
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_parsing() {
        assert_eq!(StateCode::parse_code("FL"), Some(StateCode::FL));
        assert_eq!(StateCode::parse_code("florida"), Some(StateCode::FL));
        assert_eq!(StateCode::parse_code("tx"), Some(StateCode::TX));
        assert_eq!(
            StateCode::parse_code("District of Columbia"),
            Some(StateCode::DC)
        );
        assert_eq!(StateCode::parse_code("PR"), None);
        assert_eq!(StateCode::parse_code(""), None);
    }

    #[test]
    fn test_from_str_reports_input() {
        let err = "Atlantis".parse::<StateCode>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown jurisdiction: Atlantis");
    }

    #[test]
    fn test_codes_round_trip_through_parse() {
        for state in StateCode::ALL {
            assert_eq!(StateCode::parse_code(state.code()), Some(state));
            assert_eq!(StateCode::parse_code(state.name()), Some(state));
        }
    }

    #[test]
    fn test_serde_uses_postal_code() {
        let json = serde_json::to_string(&StateCode::NY).unwrap();
        assert_eq!(json, "\"NY\"");
        let parsed: StateCode = serde_json::from_str("\"WV\"").unwrap();
        assert_eq!(parsed, StateCode::WV);
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(StateCode::NC.to_string(), "NC");
        assert_eq!(StateCode::NC.name(), "North Carolina");
    }
}
