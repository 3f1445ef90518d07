//! Stop-and-identify statutes
//!
//! States listed with a statute require a detained person to give their name
//! (and sometimes more) under reasonable suspicion. A few states without such
//! a statute are included so the lookup can say so explicitly.

use crate::jurisdiction::StateCode;
use crate::record::ReferenceRecord;

pub(super) const ENTRIES: &[(StateCode, ReferenceRecord)] = &[
    (
        StateCode::AL,
        ReferenceRecord::new(
            "Alabama: Stop and Identify",
            "Officers may stop a person reasonably suspected of a crime and demand name, \
             address, and an explanation of their actions.",
            "Ala. Code § 15-5-30",
            "https://alison.legislature.state.al.us/code-of-alabama",
        ),
    ),
    (
        StateCode::AZ,
        ReferenceRecord::new(
            "Arizona: Stop and Identify",
            "A person lawfully detained on reasonable suspicion must state their true full name \
             on request.",
            "A.R.S. § 13-2412",
            "https://www.azleg.gov/ars/13/02412.htm",
        ),
    ),
    (
        StateCode::CA,
        ReferenceRecord::new(
            "California: No Stop and Identify Statute",
            "California has no statute requiring a detained pedestrian to identify themselves; \
             drivers must still present a license on a traffic stop.",
            "Cal. Veh. Code § 12951",
            "https://leginfo.legislature.ca.gov/",
        ),
    ),
    (
        StateCode::CO,
        ReferenceRecord::new(
            "Colorado: Stop and Identify",
            "An officer may stop a person reasonably suspected of a crime and require name, \
             address, identification if available, and an explanation of their actions.",
            "C.R.S. § 16-3-103",
            "https://leg.colorado.gov/",
        ),
    ),
    (
        StateCode::DE,
        ReferenceRecord::new(
            "Delaware: Stop and Identify",
            "A person reasonably suspected of a crime may be detained and asked for name, \
             address, business, and destination; refusal may justify further questioning.",
            "11 Del. C. § 1902",
            "https://delcode.delaware.gov/title11/c019/index.html",
        ),
    ),
    (
        StateCode::FL,
        ReferenceRecord::new(
            "Florida: Loitering and Prowling",
            "Identification may be requested when an officer has reason to suspect loitering or \
             prowling; refusing to identify is a factor in that offense.",
            "Fla. Stat. § 856.021",
            "https://www.flsenate.gov/Laws/Statutes/2023/856.021",
        ),
    ),
    (
        StateCode::GA,
        ReferenceRecord::new(
            "Georgia: Loitering or Prowling",
            "Officers may request identification from a person reasonably suspected of loitering \
             or prowling.",
            "O.C.G.A. § 16-11-36",
            "https://law.justia.com/codes/georgia/title-16/chapter-11/",
        ),
    ),
    (
        StateCode::IL,
        ReferenceRecord::new(
            "Illinois: Stop and Identify",
            "An officer may stop a person reasonably suspected of a crime and demand their name, \
             address, and an explanation of their actions.",
            "725 ILCS 5/107-14",
            "https://www.ilga.gov/legislation/ilcs/ilcs4.asp?ActID=1966&ChapterID=54",
        ),
    ),
    (
        StateCode::IN,
        ReferenceRecord::new(
            "Indiana: Identification During Infraction Stops",
            "A person stopped for an infraction or ordinance violation must provide name, \
             address, and date of birth, or a driver's license if in possession.",
            "Ind. Code § 34-28-5-3.5",
            "https://iga.in.gov/laws/",
        ),
    ),
    (
        StateCode::KS,
        ReferenceRecord::new(
            "Kansas: Stop and Identify",
            "An officer may stop a person reasonably suspected of a crime and demand name, \
             address, and an explanation of their actions.",
            "K.S.A. 22-2402",
            "https://www.ksrevisor.org/statutes/chapters/ch22/022_024_0002.html",
        ),
    ),
    (
        StateCode::LA,
        ReferenceRecord::new(
            "Louisiana: Stop and Identify",
            "An officer may stop a person reasonably suspected of a crime and demand name, \
             address, and an explanation of their actions.",
            "La. C.Cr.P. art. 215.1",
            "https://legis.la.gov/",
        ),
    ),
    (
        StateCode::MT,
        ReferenceRecord::new(
            "Montana: Stop and Identify",
            "A person stopped on particularized suspicion may be asked for name, address, and \
             an explanation of their actions.",
            "Mont. Code Ann. § 46-5-401",
            "https://leg.mt.gov/bills/mca/",
        ),
    ),
    (
        StateCode::NE,
        ReferenceRecord::new(
            "Nebraska: Stop and Identify",
            "An officer may stop a person reasonably suspected of a crime and demand name, \
             address, and an explanation of their actions.",
            "Neb. Rev. Stat. § 29-829",
            "https://nebraskalegislature.gov/laws/statutes.php?statute=29-829",
        ),
    ),
    (
        StateCode::NV,
        ReferenceRecord::new(
            "Nevada: Stop and Identify",
            "A person detained on reasonable suspicion must identify themselves but may not be \
             compelled to answer other questions. Upheld in Hiibel v. Sixth Judicial District \
             Court (2004).",
            "NRS 171.123",
            "https://www.leg.state.nv.us/NRS/NRS-171.html",
        ),
    ),
    (
        StateCode::NH,
        ReferenceRecord::new(
            "New Hampshire: Stop and Identify",
            "A peace officer may stop a person abroad whom they reasonably suspect and demand \
             name, address, business abroad, and destination.",
            "RSA 594:2",
            "https://www.gencourt.state.nh.us/rsa/html/LIX/594/594-2.htm",
        ),
    ),
    (
        StateCode::NM,
        ReferenceRecord::new(
            "New Mexico: Concealing Identity",
            "Concealing one's true name or identity with intent to obstruct an officer in the \
             lawful discharge of duties is a misdemeanor.",
            "NMSA § 30-22-3",
            "https://nmonesource.com/nmos/nmsa/en/nav_date.do",
        ),
    ),
    (
        StateCode::NY,
        ReferenceRecord::new(
            "New York: Stop and Identify",
            "Police may demand name, address, and an explanation of conduct from a person \
             reasonably suspected of a crime; there is no penalty for refusal.",
            "N.Y. Crim. Proc. Law § 140.50",
            "https://www.nysenate.gov/legislation/laws/CPL/140.50",
        ),
    ),
    (
        StateCode::ND,
        ReferenceRecord::new(
            "North Dakota: Stop and Identify",
            "A person reasonably suspected of a crime may be required to give their name and \
             explain their actions.",
            "N.D.C.C. § 29-29-21",
            "https://www.ndlegis.gov/cencode/t29c29.pdf",
        ),
    ),
    (
        StateCode::OH,
        ReferenceRecord::new(
            "Ohio: Failure to Disclose Personal Information",
            "When reasonably suspected of a crime or a witness to certain offenses, a person \
             must give name, address, and date of birth on request.",
            "R.C. 2921.29",
            "https://codes.ohio.gov/ohio-revised-code/section-2921.29",
        ),
    ),
    (
        StateCode::RI,
        ReferenceRecord::new(
            "Rhode Island: Stop and Identify",
            "An officer may detain a person reasonably suspected of a crime and demand name, \
             address, business abroad, and destination.",
            "R.I. Gen. Laws § 12-7-1",
            "https://webserver.rilegislature.gov/Statutes/TITLE12/12-7/12-7-1.htm",
        ),
    ),
    (
        StateCode::TX,
        ReferenceRecord::new(
            "Texas: Failure to Identify",
            "Refusing to give name, residence, and date of birth is an offense only after a \
             lawful arrest; giving false information to a detaining officer is also an offense.",
            "Tex. Penal Code § 38.02",
            "https://statutes.capitol.texas.gov/Docs/PE/htm/PE.38.htm",
        ),
    ),
    (
        StateCode::UT,
        ReferenceRecord::new(
            "Utah: Stop and Identify",
            "An officer may stop a person reasonably suspected of a public offense and demand \
             name, address, and an explanation of their actions.",
            "Utah Code § 77-7-15",
            "https://le.utah.gov/xcode/Title77/Chapter7/77-7-S15.html",
        ),
    ),
    (
        StateCode::VT,
        ReferenceRecord::new(
            "Vermont: Identification for Civil Violations",
            "A person must identify themselves to an officer who has probable cause to believe \
             they committed a civil violation.",
            "24 V.S.A. § 1983",
            "https://legislature.vermont.gov/statutes/section/24/061/01983",
        ),
    ),
    (
        StateCode::WI,
        ReferenceRecord::new(
            "Wisconsin: Temporary Questioning",
            "An officer may stop a person reasonably suspected of a crime and demand name, \
             address, and an explanation of their conduct.",
            "Wis. Stat. § 968.24",
            "https://docs.legis.wisconsin.gov/statutes/statutes/968/24",
        ),
    ),
];
