//! Cannabis / marijuana legal status by state

use crate::jurisdiction::StateCode;
use crate::record::ReferenceRecord;

pub(super) const ENTRIES: &[(StateCode, ReferenceRecord)] = &[
    (
        StateCode::AK,
        ReferenceRecord::new(
            "Alaska: Recreational and Medical",
            "Adults 21 and older may possess up to one ounce and grow up to six plants at home.",
            "AS 17.38",
            "https://www.commerce.alaska.gov/web/amco/",
        ),
    ),
    (
        StateCode::AZ,
        ReferenceRecord::new(
            "Arizona: Recreational and Medical",
            "Adults 21 and older may possess up to one ounce, with no more than five grams as \
             concentrate, and grow up to six plants.",
            "A.R.S. § 36-2850 et seq.",
            "https://www.azleg.gov/ars/36/02852.htm",
        ),
    ),
    (
        StateCode::CA,
        ReferenceRecord::new(
            "California: Recreational and Medical",
            "Adults 21 and older may possess up to 28.5 grams of cannabis and eight grams of \
             concentrate, and grow up to six plants.",
            "Cal. Health & Safety Code § 11362.1",
            "https://cannabis.ca.gov/",
        ),
    ),
    (
        StateCode::CO,
        ReferenceRecord::new(
            "Colorado: Recreational and Medical",
            "Adults 21 and older may possess up to two ounces and grow up to six plants.",
            "Colo. Const. art. XVIII, § 16",
            "https://cannabis.colorado.gov/",
        ),
    ),
    (
        StateCode::CT,
        ReferenceRecord::new(
            "Connecticut: Recreational and Medical",
            "Adults 21 and older may possess up to 1.5 ounces on their person and five ounces \
             secured at home or in a locked vehicle.",
            "Conn. Public Act 21-1",
            "https://portal.ct.gov/cannabis",
        ),
    ),
    (
        StateCode::DC,
        ReferenceRecord::new(
            "District of Columbia: Possession Legal, Sales Limited",
            "Adults 21 and older may possess up to two ounces and gift up to one ounce; retail \
             sales outside the medical program are not authorized.",
            "D.C. Code § 48-904.01",
            "https://abca.dc.gov/page/medical-cannabis-program",
        ),
    ),
    (
        StateCode::FL,
        ReferenceRecord::new(
            "Florida: Medical Only",
            "Qualified patients with a physician certification may obtain medical marijuana; \
             recreational possession remains illegal.",
            "Fla. Stat. § 381.986",
            "https://knowthefactsmmj.com/",
        ),
    ),
    (
        StateCode::GA,
        ReferenceRecord::new(
            "Georgia: Low-THC Oil Only",
            "Registered patients may possess up to 20 fluid ounces of low-THC oil; other \
             marijuana possession is illegal.",
            "O.C.G.A. § 16-12-191",
            "https://www.gmcc.ga.gov/",
        ),
    ),
    (
        StateCode::ID,
        ReferenceRecord::new(
            "Idaho: Illegal",
            "Marijuana is illegal for all purposes; possession of three ounces or less is a \
             misdemeanor.",
            "Idaho Code § 37-2732",
            "https://legislature.idaho.gov/statutesrules/idstat/title37/t37ch27/sect37-2732/",
        ),
    ),
    (
        StateCode::IL,
        ReferenceRecord::new(
            "Illinois: Recreational and Medical",
            "Residents 21 and older may possess up to 30 grams of cannabis flower; home growing \
             is limited to medical patients.",
            "410 ILCS 705",
            "https://www.ilga.gov/legislation/ilcs/ilcs3.asp?ActID=3992&ChapterID=35",
        ),
    ),
    (
        StateCode::KS,
        ReferenceRecord::new(
            "Kansas: Illegal",
            "Marijuana is illegal for recreational and medical use; limited CBD products with \
             no THC are permitted.",
            "K.S.A. 21-5706",
            "https://www.ksrevisor.org/statutes/chapters/ch21/021_057_0006.html",
        ),
    ),
    (
        StateCode::MA,
        ReferenceRecord::new(
            "Massachusetts: Recreational and Medical",
            "Adults 21 and older may possess one ounce in public and ten ounces at home, and \
             grow up to six plants.",
            "M.G.L. c. 94G",
            "https://masscannabiscontrol.com/",
        ),
    ),
    (
        StateCode::MD,
        ReferenceRecord::new(
            "Maryland: Recreational and Medical",
            "Adults 21 and older may possess up to 1.5 ounces and grow up to two plants.",
            "Md. Code, Alc. Bev. & Cannabis § 36-1101",
            "https://cannabis.maryland.gov/",
        ),
    ),
    (
        StateCode::ME,
        ReferenceRecord::new(
            "Maine: Recreational and Medical",
            "Adults 21 and older may possess up to 2.5 ounces and grow up to three mature plants.",
            "28-B M.R.S.",
            "https://www.maine.gov/dafs/ocp/",
        ),
    ),
    (
        StateCode::MI,
        ReferenceRecord::new(
            "Michigan: Recreational and Medical",
            "Adults 21 and older may possess up to 2.5 ounces in public and ten ounces at home, \
             and grow up to 12 plants.",
            "MCL 333.27951 et seq.",
            "https://www.michigan.gov/cra",
        ),
    ),
    (
        StateCode::MN,
        ReferenceRecord::new(
            "Minnesota: Recreational and Medical",
            "Adults 21 and older may possess up to two ounces in public and two pounds at home, \
             and grow up to eight plants.",
            "Minn. Stat. ch. 342",
            "https://mn.gov/ocm/",
        ),
    ),
    (
        StateCode::MO,
        ReferenceRecord::new(
            "Missouri: Recreational and Medical",
            "Adults 21 and older may possess up to three ounces; registered cultivators may grow \
             up to six flowering plants.",
            "Mo. Const. art. XIV, § 2",
            "https://cannabis.mo.gov/",
        ),
    ),
    (
        StateCode::NC,
        ReferenceRecord::new(
            "North Carolina: Illegal",
            "Marijuana is illegal for recreational and medical use; possession of half an ounce \
             or less is a class 3 misdemeanor.",
            "N.C.G.S. § 90-95",
            "https://www.ncleg.gov/EnactedLegislation/Statutes/HTML/BySection/Chapter_90/GS_90-95.html",
        ),
    ),
    (
        StateCode::NJ,
        ReferenceRecord::new(
            "New Jersey: Recreational and Medical",
            "Adults 21 and older may possess up to six ounces; home cultivation is not permitted.",
            "N.J.S.A. 24:6I-31 et seq.",
            "https://www.nj.gov/cannabis/",
        ),
    ),
    (
        StateCode::NM,
        ReferenceRecord::new(
            "New Mexico: Recreational and Medical",
            "Adults 21 and older may possess up to two ounces and grow up to six mature plants.",
            "NMSA § 26-2C-1 et seq.",
            "https://www.rld.nm.gov/cannabis/",
        ),
    ),
    (
        StateCode::NV,
        ReferenceRecord::new(
            "Nevada: Recreational and Medical",
            "Adults 21 and older may possess up to 2.5 ounces; home growing is allowed only \
             beyond 25 miles from a dispensary.",
            "NRS ch. 678D",
            "https://ccb.nv.gov/",
        ),
    ),
    (
        StateCode::NY,
        ReferenceRecord::new(
            "New York: Recreational and Medical",
            "Adults 21 and older may possess up to three ounces of cannabis and 24 grams of \
             concentrate.",
            "N.Y. Cannabis Law",
            "https://cannabis.ny.gov/",
        ),
    ),
    (
        StateCode::OH,
        ReferenceRecord::new(
            "Ohio: Recreational and Medical",
            "Adults 21 and older may possess up to 2.5 ounces and grow up to six plants per \
             person.",
            "R.C. ch. 3780",
            "https://com.ohio.gov/divisions-and-programs/cannabis-control",
        ),
    ),
    (
        StateCode::OR,
        ReferenceRecord::new(
            "Oregon: Recreational and Medical",
            "Adults 21 and older may possess one ounce in public and eight ounces at home, and \
             grow up to four plants per household.",
            "ORS ch. 475C",
            "https://www.oregon.gov/olcc/marijuana/",
        ),
    ),
    (
        StateCode::PA,
        ReferenceRecord::new(
            "Pennsylvania: Medical Only",
            "Patients with a qualifying condition may obtain medical marijuana from licensed \
             dispensaries; recreational use is illegal.",
            "35 P.S. § 10231.101 et seq.",
            "https://www.pa.gov/agencies/health/programs/medical-marijuana",
        ),
    ),
    (
        StateCode::TX,
        ReferenceRecord::new(
            "Texas: Low-THC Medical Only",
            "Patients with qualifying conditions may obtain low-THC cannabis through the \
             Compassionate Use Program; other possession is illegal.",
            "Tex. Health & Safety Code ch. 487",
            "https://www.dps.texas.gov/section/compassionate-use-program",
        ),
    ),
    (
        StateCode::VA,
        ReferenceRecord::new(
            "Virginia: Possession Legal, Sales Limited",
            "Adults 21 and older may possess up to one ounce and grow up to four plants; retail \
             sales are limited to the medical program.",
            "Va. Code § 4.1-1100",
            "https://www.cca.virginia.gov/",
        ),
    ),
    (
        StateCode::VT,
        ReferenceRecord::new(
            "Vermont: Recreational and Medical",
            "Adults 21 and older may possess up to one ounce and grow two mature plants.",
            "18 V.S.A. § 4230a",
            "https://ccb.vermont.gov/",
        ),
    ),
    (
        StateCode::WA,
        ReferenceRecord::new(
            "Washington: Recreational and Medical",
            "Adults 21 and older may possess up to one ounce of usable cannabis; home growing \
             is limited to medical patients.",
            "RCW 69.50.4013",
            "https://lcb.wa.gov/",
        ),
    ),
    (
        StateCode::WY,
        ReferenceRecord::new(
            "Wyoming: Illegal",
            "Marijuana is illegal for all purposes; possession of three ounces or less is a \
             misdemeanor.",
            "Wyo. Stat. § 35-7-1031",
            "https://wyoleg.gov/",
        ),
    ),
];
