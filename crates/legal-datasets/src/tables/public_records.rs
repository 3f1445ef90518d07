//! State public records (open records / freedom of information) statutes

use crate::jurisdiction::StateCode;
use crate::record::ReferenceRecord;

pub(super) const ENTRIES: &[(StateCode, ReferenceRecord)] = &[
    (
        StateCode::AL,
        ReferenceRecord::new(
            "Alabama Open Records Act",
            "Every citizen may inspect and take a copy of any public writing of the state, \
             except as otherwise expressly provided by statute. No fixed response deadline.",
            "Ala. Code § 36-12-40",
            "https://alison.legislature.state.al.us/code-of-alabama",
        ),
    ),
    (
        StateCode::AZ,
        ReferenceRecord::new(
            "Arizona Public Records Law",
            "Public records must be open to inspection by any person during office hours, and \
             agencies must furnish copies promptly.",
            "A.R.S. § 39-121 et seq.",
            "https://www.azleg.gov/ars/39/00121.htm",
        ),
    ),
    (
        StateCode::CA,
        ReferenceRecord::new(
            "California Public Records Act",
            "Agencies must determine within 10 days whether a request seeks disclosable records, \
             extendable by 14 days in unusual circumstances.",
            "Cal. Gov. Code § 7920.000 et seq.",
            "https://leginfo.legislature.ca.gov/",
        ),
    ),
    (
        StateCode::CO,
        ReferenceRecord::new(
            "Colorado Open Records Act",
            "Records must be made available within three working days, extendable by seven \
             working days when extenuating circumstances exist.",
            "C.R.S. § 24-72-201 et seq.",
            "https://leg.colorado.gov/",
        ),
    ),
    (
        StateCode::CT,
        ReferenceRecord::new(
            "Connecticut Freedom of Information Act",
            "Any person may inspect public records promptly during business hours and receive \
             copies; denials may be appealed to the Freedom of Information Commission.",
            "Conn. Gen. Stat. § 1-200 et seq.",
            "https://portal.ct.gov/foi",
        ),
    ),
    (
        StateCode::DC,
        ReferenceRecord::new(
            "District of Columbia Freedom of Information Act",
            "Public bodies must respond within 15 business days, extendable by 10 business days \
             in unusual circumstances.",
            "D.C. Code § 2-531 et seq.",
            "https://code.dccouncil.gov/us/dc/council/code/sections/2-531",
        ),
    ),
    (
        StateCode::FL,
        ReferenceRecord::new(
            "Florida Public Records Act",
            "Every person may inspect or copy any public record; requests need not be in \
             writing and the requester need not state a purpose.",
            "Fla. Stat. ch. 119",
            "https://www.flsenate.gov/Laws/Statutes/2023/Chapter119",
        ),
    ),
    (
        StateCode::GA,
        ReferenceRecord::new(
            "Georgia Open Records Act",
            "Agencies must produce records or describe their availability within three business \
             days of receiving a request.",
            "O.C.G.A. § 50-18-70 et seq.",
            "https://law.georgia.gov/key-issues/open-government",
        ),
    ),
    (
        StateCode::IL,
        ReferenceRecord::new(
            "Illinois Freedom of Information Act",
            "Public bodies must comply or deny within five business days, extendable by five \
             more business days with written notice.",
            "5 ILCS 140",
            "https://www.ilga.gov/legislation/ilcs/ilcs3.asp?ActID=85&ChapterID=2",
        ),
    ),
    (
        StateCode::KY,
        ReferenceRecord::new(
            "Kentucky Open Records Act",
            "Agencies must respond within five business days; residents of Kentucky may inspect \
             and copy public records.",
            "KRS 61.870 to 61.884",
            "https://apps.legislature.ky.gov/law/statutes/",
        ),
    ),
    (
        StateCode::MA,
        ReferenceRecord::new(
            "Massachusetts Public Records Law",
            "Records access officers must respond within 10 business days; appeals go to the \
             Supervisor of Records.",
            "M.G.L. c. 66, § 10",
            "https://malegislature.gov/Laws/GeneralLaws/PartI/TitleX/Chapter66/Section10",
        ),
    ),
    (
        StateCode::MI,
        ReferenceRecord::new(
            "Michigan Freedom of Information Act",
            "Public bodies must respond within five business days, with one 10-business-day \
             extension available.",
            "MCL 15.231 et seq.",
            "https://www.legislature.mi.gov/",
        ),
    ),
    (
        StateCode::NJ,
        ReferenceRecord::new(
            "New Jersey Open Public Records Act",
            "Custodians must grant or deny access within seven business days; immediate access \
             applies to budgets, bills, and contracts.",
            "N.J.S.A. 47:1A-1 et seq.",
            "https://www.nj.gov/grc/",
        ),
    ),
    (
        StateCode::NY,
        ReferenceRecord::new(
            "New York Freedom of Information Law",
            "Agencies must acknowledge a request within five business days and grant, deny, or \
             give an approximate date for response.",
            "N.Y. Pub. Off. Law §§ 84-90",
            "https://opengovernment.ny.gov/freedom-information-law",
        ),
    ),
    (
        StateCode::OH,
        ReferenceRecord::new(
            "Ohio Public Records Act",
            "Public records must be made available promptly and copies provided within a \
             reasonable period of time.",
            "R.C. 149.43",
            "https://codes.ohio.gov/ohio-revised-code/section-149.43",
        ),
    ),
    (
        StateCode::PA,
        ReferenceRecord::new(
            "Pennsylvania Right-to-Know Law",
            "Agencies must respond within five business days, extendable by 30 calendar days \
             with written notice.",
            "65 P.S. § 67.101 et seq.",
            "https://www.openrecords.pa.gov/",
        ),
    ),
    (
        StateCode::TN,
        ReferenceRecord::new(
            "Tennessee Public Records Act",
            "Records are open to Tennessee citizens; custodians must respond within seven \
             business days if records are not promptly available.",
            "T.C.A. § 10-7-503",
            "https://comptroller.tn.gov/office-functions/open-records-counsel.html",
        ),
    ),
    (
        StateCode::TX,
        ReferenceRecord::new(
            "Texas Public Information Act",
            "Information must be released promptly; a body that wishes to withhold it must ask \
             the Attorney General for a ruling within 10 business days.",
            "Tex. Gov't Code ch. 552",
            "https://statutes.capitol.texas.gov/Docs/GV/htm/GV.552.htm",
        ),
    ),
    (
        StateCode::VA,
        ReferenceRecord::new(
            "Virginia Freedom of Information Act",
            "Public bodies must respond within five working days; the right of access belongs \
             to citizens of the Commonwealth and certain media representatives.",
            "Va. Code § 2.2-3700 et seq.",
            "https://law.lis.virginia.gov/vacode/title2.2/chapter37/",
        ),
    ),
    (
        StateCode::WA,
        ReferenceRecord::new(
            "Washington Public Records Act",
            "Agencies must respond within five business days by providing records, an estimate \
             of time needed, or a denial.",
            "RCW 42.56",
            "https://app.leg.wa.gov/rcw/default.aspx?cite=42.56",
        ),
    ),
    (
        StateCode::WI,
        ReferenceRecord::new(
            "Wisconsin Public Records Law",
            "Authorities must respond as soon as practicable and without delay; requesters need \
             not identify themselves.",
            "Wis. Stat. §§ 19.31-19.39",
            "https://docs.legis.wisconsin.gov/statutes/statutes/19/II/31",
        ),
    ),
];
