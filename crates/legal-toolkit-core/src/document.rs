//! Document, violation, and claim selectors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The nine document templates the composer knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DocumentType {
    #[default]
    #[serde(rename = "FOIA Request")]
    FoiaRequest,
    #[serde(rename = "State Public Records Request")]
    StatePublicRecordsRequest,
    #[serde(rename = "ID Rights Card")]
    IdRightsCard,
    #[serde(rename = "Cease and Desist Letter")]
    CeaseAndDesistLetter,
    #[serde(rename = "Notice of Claim")]
    NoticeOfClaim,
    #[serde(rename = "Pre-Suit Notice")]
    PreSuitNotice,
    #[serde(rename = "Subpoena Duces Tecum")]
    SubpoenaDucesTecum,
    #[serde(rename = "Discovery Request")]
    DiscoveryRequest,
    #[serde(rename = "Marijuana Law Lookup")]
    MarijuanaLawLookup,
}

impl DocumentType {
    /// Selector order
    pub const ALL: [DocumentType; 9] = [
        DocumentType::FoiaRequest,
        DocumentType::StatePublicRecordsRequest,
        DocumentType::IdRightsCard,
        DocumentType::CeaseAndDesistLetter,
        DocumentType::NoticeOfClaim,
        DocumentType::PreSuitNotice,
        DocumentType::SubpoenaDucesTecum,
        DocumentType::DiscoveryRequest,
        DocumentType::MarijuanaLawLookup,
    ];

    /// Display tag, also the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::FoiaRequest => "FOIA Request",
            DocumentType::StatePublicRecordsRequest => "State Public Records Request",
            DocumentType::IdRightsCard => "ID Rights Card",
            DocumentType::CeaseAndDesistLetter => "Cease and Desist Letter",
            DocumentType::NoticeOfClaim => "Notice of Claim",
            DocumentType::PreSuitNotice => "Pre-Suit Notice",
            DocumentType::SubpoenaDucesTecum => "Subpoena Duces Tecum",
            DocumentType::DiscoveryRequest => "Discovery Request",
            DocumentType::MarijuanaLawLookup => "Marijuana Law Lookup",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selector value outside its enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl std::str::FromStr for DocumentType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|doc| doc.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "document type",
                value: s.to_string(),
            })
    }
}

/// Kind of conduct a demand letter addresses. Stored but not read by any template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationType {
    #[default]
    Harassment,
    IntellectualProperty,
    DebtCollection,
    Trespass,
    Defamation,
    Contract,
    Privacy,
}

impl ViolationType {
    pub const ALL: [ViolationType; 7] = [
        ViolationType::Harassment,
        ViolationType::IntellectualProperty,
        ViolationType::DebtCollection,
        ViolationType::Trespass,
        ViolationType::Defamation,
        ViolationType::Contract,
        ViolationType::Privacy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationType::Harassment => "harassment",
            ViolationType::IntellectualProperty => "intellectual_property",
            ViolationType::DebtCollection => "debt_collection",
            ViolationType::Trespass => "trespass",
            ViolationType::Defamation => "defamation",
            ViolationType::Contract => "contract",
            ViolationType::Privacy => "privacy",
        }
    }
}

impl std::fmt::Display for ViolationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViolationType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "violation type",
                value: s.to_string(),
            })
    }
}

/// Claim category. Stored but not read by any template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    #[default]
    General,
    Government,
    Medical,
}

impl ClaimType {
    pub const ALL: [ClaimType; 3] = [ClaimType::General, ClaimType::Government, ClaimType::Medical];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::General => "general",
            ClaimType::Government => "government",
            ClaimType::Medical => "medical",
        }
    }
}

impl std::fmt::Display for ClaimType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClaimType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "claim type",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_tags_round_trip() {
        for doc in DocumentType::ALL {
            assert_eq!(doc.as_str().parse::<DocumentType>(), Ok(doc));
            let json = serde_json::to_string(&doc).unwrap();
            assert_eq!(json, format!("\"{}\"", doc.as_str()));
        }
    }

    #[test]
    fn test_document_type_parse_is_exact() {
        assert!("foia request".parse::<DocumentType>().is_err());
        assert!("Eviction Notice".parse::<DocumentType>().is_err());
    }

    #[test]
    fn test_selector_defaults() {
        assert_eq!(DocumentType::default(), DocumentType::FoiaRequest);
        assert_eq!(ViolationType::default(), ViolationType::Harassment);
        assert_eq!(ClaimType::default(), ClaimType::General);
    }

    #[test]
    fn test_selector_strings_match_serde() {
        for v in ViolationType::ALL {
            assert_eq!(v.as_str().parse::<ViolationType>(), Ok(v));
            assert_eq!(serde_json::to_string(&v).unwrap(), format!("\"{}\"", v));
        }
        for c in ClaimType::ALL {
            assert_eq!(c.as_str().parse::<ClaimType>(), Ok(c));
            assert_eq!(serde_json::to_string(&c).unwrap(), format!("\"{}\"", c));
        }
    }

    #[test]
    fn test_snake_case_selectors() {
        let v: ViolationType = serde_json::from_str("\"intellectual_property\"").unwrap();
        assert_eq!(v, ViolationType::IntellectualProperty);
        assert_eq!(
            "debt_collection".parse::<ViolationType>(),
            Ok(ViolationType::DebtCollection)
        );
        assert_eq!("medical".parse::<ClaimType>(), Ok(ClaimType::Medical));
        assert_eq!(
            "bogus".parse::<ClaimType>().unwrap_err().to_string(),
            "Unknown claim type: bogus"
        );
    }
}
