//! States with laws that commonly trip up public-records auditors and journalists
//!
//! Mostly all-party consent recording statutes, plus police-recording buffers.

use crate::jurisdiction::StateCode;
use crate::record::ReferenceRecord;

pub(super) const ENTRIES: &[(StateCode, ReferenceRecord)] = &[
    (
        StateCode::AZ,
        ReferenceRecord::new(
            "Arizona: Police Recording Buffer",
            "A 2022 law barred recording police within eight feet without permission; it was \
             enjoined by a federal court but expect officers to raise it.",
            "A.R.S. § 13-3732",
            "https://www.azleg.gov/ars/13/03732.htm",
        ),
    ),
    (
        StateCode::CA,
        ReferenceRecord::new(
            "California: All-Party Consent",
            "Recording a confidential communication without the consent of all parties is a \
             crime; public conversations with no expectation of privacy are not covered.",
            "Cal. Penal Code § 632",
            "https://leginfo.legislature.ca.gov/",
        ),
    ),
    (
        StateCode::FL,
        ReferenceRecord::new(
            "Florida: All-Party Consent",
            "Intercepting oral communications without all-party consent is a felony where the \
             speaker has a reasonable expectation of privacy.",
            "Fla. Stat. § 934.03",
            "https://www.flsenate.gov/Laws/Statutes/2023/934.03",
        ),
    ),
    (
        StateCode::IL,
        ReferenceRecord::new(
            "Illinois: All-Party Consent for Private Conversations",
            "Recording a private conversation requires consent of all parties; recording police \
             performing public duties in public is permitted.",
            "720 ILCS 5/14-2",
            "https://www.ilga.gov/legislation/ilcs/ilcs4.asp?ActID=1876&ChapterID=53",
        ),
    ),
    (
        StateCode::MA,
        ReferenceRecord::new(
            "Massachusetts: Secret Recording Prohibited",
            "Secretly recording any oral communication is prohibited regardless of privacy \
             expectation; open recording of police in public is protected.",
            "M.G.L. c. 272, § 99",
            "https://malegislature.gov/Laws/GeneralLaws/PartIV/TitleI/Chapter272/Section99",
        ),
    ),
    (
        StateCode::MD,
        ReferenceRecord::new(
            "Maryland: All-Party Consent",
            "Intercepting a private oral communication requires the consent of all parties.",
            "Md. Code, Cts. & Jud. Proc. § 10-402",
            "https://mgaleg.maryland.gov/",
        ),
    ),
    (
        StateCode::MT,
        ReferenceRecord::new(
            "Montana: All-Party Consent",
            "Recording a conversation without the knowledge of all parties is prohibited, \
             with exceptions for public officials performing official duties.",
            "Mont. Code Ann. § 45-8-213",
            "https://leg.mt.gov/bills/mca/",
        ),
    ),
    (
        StateCode::NH,
        ReferenceRecord::new(
            "New Hampshire: All-Party Consent",
            "Intercepting oral or telecommunications without the consent of all parties is a \
             felony.",
            "RSA 570-A:2",
            "https://www.gencourt.state.nh.us/rsa/html/LVIII/570-A/570-A-2.htm",
        ),
    ),
    (
        StateCode::PA,
        ReferenceRecord::new(
            "Pennsylvania: All-Party Consent",
            "Intercepting oral communications without all-party consent is a felony where the \
             speaker expects privacy.",
            "18 Pa.C.S. § 5703",
            "https://www.legis.state.pa.us/",
        ),
    ),
    (
        StateCode::WA,
        ReferenceRecord::new(
            "Washington: All-Party Consent",
            "Recording private conversations requires the consent of all parties; announcing \
             the recording on the record satisfies consent.",
            "RCW 9.73.030",
            "https://app.leg.wa.gov/rcw/default.aspx?cite=9.73.030",
        ),
    ),
];
