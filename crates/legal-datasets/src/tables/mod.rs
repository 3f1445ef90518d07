//! Static reference tables
//!
//! Each submodule holds one category as a slice of `(StateCode, ReferenceRecord)`
//! pairs. The slices are indexed into hash maps once, on first access.

mod cannabis;
mod hostile;
mod notice;
mod public_records;
mod stop_and_id;

use crate::jurisdiction::StateCode;
use crate::record::{ReferenceRecord, ReferenceTable};
use lazy_static::lazy_static;
use std::collections::HashMap;

type Table = HashMap<StateCode, ReferenceRecord>;

fn index(entries: &[(StateCode, ReferenceRecord)]) -> Table {
    entries.iter().copied().collect()
}

lazy_static! {
    static ref PUBLIC_RECORDS: Table = index(public_records::ENTRIES);
    static ref STOP_AND_ID: Table = index(stop_and_id::ENTRIES);
    static ref CANNABIS: Table = index(cannabis::ENTRIES);
    static ref HOSTILE_STATES: Table = index(hostile::ENTRIES);
    static ref NOTICE_RULES: Table = index(notice::ENTRIES);
}

pub(crate) fn table(table: ReferenceTable) -> &'static Table {
    match table {
        ReferenceTable::PublicRecords => &PUBLIC_RECORDS,
        ReferenceTable::StopAndId => &STOP_AND_ID,
        ReferenceTable::Cannabis => &CANNABIS,
        ReferenceTable::HostileStates => &HOSTILE_STATES,
        ReferenceTable::NoticeRules => &NOTICE_RULES,
    }
}
