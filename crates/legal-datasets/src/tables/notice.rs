//! Notice-of-claim requirements for suits against government entities

use crate::jurisdiction::StateCode;
use crate::record::ReferenceRecord;

pub(super) const ENTRIES: &[(StateCode, ReferenceRecord)] = &[
    (
        StateCode::AZ,
        ReferenceRecord::new(
            "Arizona: Notice of Claim",
            "A claim against a public entity or employee must be filed within 180 days after \
             the cause of action accrues.",
            "A.R.S. § 12-821.01",
            "https://www.azleg.gov/ars/12/00821-01.htm",
        ),
    ),
    (
        StateCode::CA,
        ReferenceRecord::new(
            "California: Government Claims Act",
            "Claims for death, personal injury, or property damage must be presented within six \
             months; other claims within one year.",
            "Cal. Gov. Code § 911.2",
            "https://leginfo.legislature.ca.gov/",
        ),
    ),
    (
        StateCode::CO,
        ReferenceRecord::new(
            "Colorado: Governmental Immunity Act Notice",
            "Written notice must be filed within 182 days after discovery of the injury.",
            "C.R.S. § 24-10-109",
            "https://leg.colorado.gov/",
        ),
    ),
    (
        StateCode::FL,
        ReferenceRecord::new(
            "Florida: Sovereign Immunity Notice",
            "Written notice must be presented to the agency, and to the Department of \
             Financial Services for state claims, within three years of accrual.",
            "Fla. Stat. § 768.28(6)",
            "https://www.flsenate.gov/Laws/Statutes/2023/768.28",
        ),
    ),
    (
        StateCode::GA,
        ReferenceRecord::new(
            "Georgia: Ante Litem Notice",
            "Claims against municipalities require written notice within six months; claims \
             against the state within twelve months.",
            "O.C.G.A. § 36-33-5; O.C.G.A. § 50-21-26",
            "https://law.justia.com/codes/georgia/title-36/chapter-33/section-36-33-5/",
        ),
    ),
    (
        StateCode::IL,
        ReferenceRecord::new(
            "Illinois: Local Governmental Tort Immunity Act",
            "Civil actions against local entities must be commenced within one year of the \
             injury.",
            "745 ILCS 10/8-101",
            "https://www.ilga.gov/legislation/ilcs/ilcs5.asp?ActID=2047&ChapterID=58",
        ),
    ),
    (
        StateCode::MA,
        ReferenceRecord::new(
            "Massachusetts: Tort Claims Act Presentment",
            "A claim must be presented in writing to the executive officer of the public \
             employer within two years.",
            "M.G.L. c. 258, § 4",
            "https://malegislature.gov/Laws/GeneralLaws/PartIII/TitleIV/Chapter258/Section4",
        ),
    ),
    (
        StateCode::MI,
        ReferenceRecord::new(
            "Michigan: Highway Defect Notice",
            "Notice of an injury caused by a defective highway must be served within 120 days.",
            "MCL 691.1404",
            "https://www.legislature.mi.gov/",
        ),
    ),
    (
        StateCode::MN,
        ReferenceRecord::new(
            "Minnesota: Municipal Tort Claims Notice",
            "Written notice must be given to the municipality within 180 days of the loss.",
            "Minn. Stat. § 466.05",
            "https://www.revisor.mn.gov/statutes/cite/466.05",
        ),
    ),
    (
        StateCode::NJ,
        ReferenceRecord::new(
            "New Jersey: Tort Claims Act Notice",
            "A notice of claim must be filed within 90 days of accrual; suit may follow six \
             months after filing.",
            "N.J.S.A. 59:8-8",
            "https://lis.njleg.state.nj.us/",
        ),
    ),
    (
        StateCode::NY,
        ReferenceRecord::new(
            "New York: Notice of Claim",
            "A notice of claim against a municipality must be served within 90 days after the \
             claim arises.",
            "N.Y. Gen. Mun. Law § 50-e",
            "https://www.nysenate.gov/legislation/laws/GMU/50-E",
        ),
    ),
    (
        StateCode::OR,
        ReferenceRecord::new(
            "Oregon: Tort Claims Notice",
            "Notice must be given within 180 days of the injury, or one year for wrongful \
             death claims.",
            "ORS 30.275",
            "https://oregon.public.law/statutes/ors_30.275",
        ),
    ),
    (
        StateCode::PA,
        ReferenceRecord::new(
            "Pennsylvania: Notice to Government Unit",
            "Written notice must be filed with the government unit within six months of the \
             injury.",
            "42 Pa.C.S. § 5522",
            "https://www.legis.state.pa.us/",
        ),
    ),
    (
        StateCode::TX,
        ReferenceRecord::new(
            "Texas: Tort Claims Act Notice",
            "A governmental unit must receive written notice within six months after the \
             incident, unless a city charter sets a shorter period.",
            "Tex. Civ. Prac. & Rem. Code § 101.101",
            "https://statutes.capitol.texas.gov/Docs/CP/htm/CP.101.htm",
        ),
    ),
    (
        StateCode::UT,
        ReferenceRecord::new(
            "Utah: Governmental Immunity Act Notice",
            "A notice of claim must be filed within one year after the claim arises.",
            "Utah Code § 63G-7-401",
            "https://le.utah.gov/xcode/Title63G/Chapter7/63G-7-S401.html",
        ),
    ),
    (
        StateCode::WA,
        ReferenceRecord::new(
            "Washington: Claim Against Local Government",
            "A tort claim must be presented to the local government at least 60 days before \
             filing suit.",
            "RCW 4.96.020",
            "https://app.leg.wa.gov/rcw/default.aspx?cite=4.96.020",
        ),
    ),
];
