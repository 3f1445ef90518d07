//! Document composition
//!
//! Each [`DocumentType`] maps to one fixed template. Empty required slots are
//! filled with a bracketed placeholder; optional lines (jurisdiction, court,
//! case number, signatures, parties) collapse to an empty line instead.
//! Every document ends with a `Date:` line.

use crate::document::DocumentType;
use crate::form::FieldBundle;
use crate::rights_card;
use chrono::NaiveDate;
use legal_datasets::{ReferenceLookup, ReferenceTable};

/// Output for a document tag outside the known set
pub const UNRECOGNIZED_DOCUMENT: &str = "Document type not recognized.";

/// Summary line used when the cannabis table has no entry for the state
pub const NO_STATE_INFORMATION: &str = "No information available for this state.";

/// The date printed at the foot of every document
///
/// Callers own the clock: native code uses [`DateStamp::today`], the browser
/// passes its locale-rendered short date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStamp(String);

impl DateStamp {
    pub fn new(rendered: impl Into<String>) -> Self {
        Self(rendered.into())
    }

    /// US short form, `M/D/YYYY`
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%-m/%-d/%Y").to_string())
    }

    pub fn today() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DateStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// `Label: value`, or an empty string when `value` is empty
fn optional_line(label: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{}: {}", label, value)
    }
}

fn signature_block(name: &str) -> String {
    if name.is_empty() {
        String::new()
    } else {
        format!("Sincerely,\n{}", name)
    }
}

/// Compose a document from the current form state
pub fn compose(
    document_type: DocumentType,
    fields: &FieldBundle,
    lookup: &impl ReferenceLookup,
    date: &DateStamp,
) -> String {
    tracing::debug!(document_type = %document_type, "composing document");

    match document_type {
        DocumentType::FoiaRequest => records_request(
            "FEDERAL FREEDOM OF INFORMATION ACT REQUEST",
            "the Freedom of Information Act",
            fields,
            date,
        ),
        DocumentType::StatePublicRecordsRequest => records_request(
            "STATE PUBLIC RECORDS REQUEST",
            "your state's public records law",
            fields,
            date,
        ),
        DocumentType::IdRightsCard => id_rights_card(fields, date),
        DocumentType::CeaseAndDesistLetter => cease_and_desist(fields, date),
        DocumentType::NoticeOfClaim => notice_of_claim(fields, date),
        DocumentType::PreSuitNotice => pre_suit_notice(fields, date),
        DocumentType::SubpoenaDucesTecum => subpoena_duces_tecum(fields, date),
        DocumentType::DiscoveryRequest => discovery_request(fields, date),
        DocumentType::MarijuanaLawLookup => marijuana_lookup(fields, lookup, date),
    }
}

/// Compose from a display tag such as `"Notice of Claim"`
///
/// Tags outside the nine known types produce [`UNRECOGNIZED_DOCUMENT`].
pub fn compose_tag(
    tag: &str,
    fields: &FieldBundle,
    lookup: &impl ReferenceLookup,
    date: &DateStamp,
) -> String {
    match tag.parse::<DocumentType>() {
        Ok(document_type) => compose(document_type, fields, lookup, date),
        Err(err) => {
            tracing::debug!(%err, "unrecognized document tag");
            UNRECOGNIZED_DOCUMENT.to_string()
        }
    }
}

fn records_request(heading: &str, law: &str, f: &FieldBundle, date: &DateStamp) -> String {
    format!(
        "{heading}

To: {agency}
{jurisdiction}

I request the following records under {law}:

{incident}

Please provide all responsive records in electronic format if possible.

Requester: {requester}
Date: {date}",
        agency = or_placeholder(&f.agency, "[Agency Name]"),
        jurisdiction = optional_line("Jurisdiction", &f.jurisdiction),
        incident = or_placeholder(&f.incident, "[Description of records requested]"),
        requester = or_placeholder(&f.plaintiff_name, "[Your Name]"),
    )
}

fn id_rights_card(f: &FieldBundle, date: &DateStamp) -> String {
    format!(
        "{heading} CARD

{assertions}

{name}

This card asserts my constitutional rights under the Fourth, Fifth, and Sixth Amendments \
to the U.S. Constitution. I do not consent to any searches, and I invoke my right to remain \
silent and my right to legal counsel.

Date: {date}",
        heading = rights_card::HEADING,
        assertions = rights_card::ASSERTIONS.join("\n"),
        name = optional_line("Name", &f.plaintiff_name),
    )
}

fn cease_and_desist(f: &FieldBundle, date: &DateStamp) -> String {
    format!(
        "CEASE AND DESIST LETTER

To: {recipient}
{jurisdiction}

I am writing to demand that you immediately cease and desist from the following conduct:

{incident}

This conduct violates my rights and is causing me damages including:

{damages}.

If you do not immediately stop this conduct, I will pursue all available legal remedies.

{signature}
Date: {date}",
        recipient = or_placeholder(&f.recipient, "[Recipient Name/Organization]"),
        jurisdiction = optional_line("Jurisdiction", &f.jurisdiction),
        incident = or_placeholder(&f.incident, "[Description of harmful conduct]"),
        damages = or_placeholder(&f.damages, "[Description of damages]"),
        signature = signature_block(&f.plaintiff_name),
    )
}

fn notice_of_claim(f: &FieldBundle, date: &DateStamp) -> String {
    format!(
        "NOTICE OF CLAIM

To: {recipient}
{jurisdiction}

I am providing notice of a claim against your entity for:

{incident}

The damages I have suffered include:

{damages}

{claimant}
{against}
Date: {date}",
        recipient = or_placeholder(&f.recipient, "[Government Entity]"),
        jurisdiction = optional_line("Jurisdiction", &f.jurisdiction),
        incident = or_placeholder(&f.incident, "[Description of incident]"),
        damages = or_placeholder(&f.damages, "[Description of damages]"),
        claimant = optional_line("Claimant", &f.plaintiff_name),
        against = optional_line("Against", &f.defendant_name),
    )
}

fn pre_suit_notice(f: &FieldBundle, date: &DateStamp) -> String {
    format!(
        "PRE-SUIT NOTICE

To: {recipient}
{jurisdiction}

Before filing suit, I am providing notice of my intent to pursue legal action for:

{incident}

The damages I have suffered include:

{damages}

I request that this matter be resolved without litigation.

{signature}
Date: {date}",
        recipient = or_placeholder(&f.recipient, "[Recipient Name/Organization]"),
        jurisdiction = optional_line("Jurisdiction", &f.jurisdiction),
        incident = or_placeholder(&f.incident, "[Description of legal issue]"),
        damages = or_placeholder(&f.damages, "[Description of damages]"),
        signature = signature_block(&f.plaintiff_name),
    )
}

fn subpoena_duces_tecum(f: &FieldBundle, date: &DateStamp) -> String {
    format!(
        "SUBPOENA DUCES TECUM

To: {recipient}
{court}
{case}

YOU ARE HEREBY COMMANDED to appear and produce the following documents:

{incident}

Failure to comply with this subpoena may result in legal consequences.

Date: {date}",
        recipient = or_placeholder(&f.recipient, "[Person or Organization]"),
        court = optional_line("Court", &f.court_name),
        case = optional_line("Case Number", &f.case_number),
        incident = or_placeholder(&f.incident, "[List of documents to be produced]"),
    )
}

fn discovery_request(f: &FieldBundle, date: &DateStamp) -> String {
    format!(
        "DISCOVERY REQUEST

To: {recipient}
{court}
{case}

I request the following discovery materials:

{incident}

This request is made pursuant to the applicable rules of civil procedure.

{requesting}
Date: {date}",
        recipient = or_placeholder(&f.recipient, "[Opposing Party or Attorney]"),
        court = optional_line("Court", &f.court_name),
        case = optional_line("Case Number", &f.case_number),
        incident = or_placeholder(&f.incident, "[Description of discovery requested]"),
        requesting = optional_line("Requesting Party", &f.plaintiff_name),
    )
}

fn marijuana_lookup(f: &FieldBundle, lookup: &impl ReferenceLookup, date: &DateStamp) -> String {
    let record = f
        .selected_state
        .and_then(|state| lookup.lookup(ReferenceTable::Cannabis, state));

    let state_name = f.selected_state.map_or("[State]", |state| state.name());
    let summary = match record {
        Some(record) => format!("Summary: {}", record.summary),
        None => NO_STATE_INFORMATION.to_string(),
    };
    let citation = record
        .and_then(|record| record.citation_line())
        .unwrap_or_default();

    format!(
        "CANNABIS/MARIJUANA LAW INFORMATION

State: {state_name}

{summary}

{citation}

Date: {date}"
    )
}
