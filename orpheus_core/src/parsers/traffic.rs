use once_cell::sync::Lazy;

use super::{CompiledTable, recover, table};
use crate::error::ExtractError;
use crate::extract::{
    FieldSpec, FieldTable, extract_category, extract_list_by_keyword, extract_tags, mentions_any,
};
use crate::records::{NO_CLOSURES, TrafficConditions, TrafficRecord};

const MAX_CLOSURES: usize = 3;
const MAX_ACCIDENTS: usize = 2;

const FIELDS: &[FieldSpec] = &[FieldSpec::keyword(
    "estimated_delay",
    &["delay", "minutes"],
    "min",
)];

const CONDITIONS: &[(&str, TrafficConditions)] = &[
    ("heavy", TrafficConditions::Heavy),
    ("congestion", TrafficConditions::Heavy),
    ("severe", TrafficConditions::Heavy),
    ("moderate", TrafficConditions::Moderate),
    ("light", TrafficConditions::Light),
    ("minimal", TrafficConditions::Light),
];

const CLOSURE_WORDS: &[&str] = &["closure", "closed", "construction"];
const ROAD_WORDS: &[&str] = &["i-", "interstate", "street", "road"];

/// Highways that are always surfaced when mentioned anywhere in the text.
const HIGHWAY_HINTS: &[(&str, &str)] = &[
    ("i-65", "I-65 - Check for construction delays"),
    ("i-70", "I-70 - Potential restrictions"),
    ("i-465", "I-465 - Monitor conditions"),
];

const HOTSPOTS: &[(&[&str], &str)] = &[
    (&["downtown"], "DOWNTOWN"),
    (&["i-65"], "I-65"),
    (&["i-70"], "I-70"),
    (&["i-465"], "I-465"),
    (&["meridian"], "MERIDIAN"),
    (&["keystone"], "KEYSTONE"),
    (&["college"], "COLLEGE"),
];

static TABLE: CompiledTable = Lazy::new(|| FieldTable::compile(FIELDS));

/// Parse a traffic summary.
#[must_use]
pub fn parse_traffic(text: &str) -> TrafficRecord {
    recover("traffic", try_parse(text))
}

fn try_parse(text: &str) -> Result<TrafficRecord, ExtractError> {
    let fields = table(&TABLE)?;
    Ok(TrafficRecord {
        conditions: extract_category(text, CONDITIONS).unwrap_or_default(),
        closures: closures(text),
        accidents: extract_list_by_keyword(text, &["accident", "crash"], &[], MAX_ACCIDENTS),
        hotspots: hotspots(text),
        estimated_delay: fields.reading("estimated_delay", text)?,
    })
}

fn closures(text: &str) -> Vec<String> {
    let mut closures = extract_list_by_keyword(text, CLOSURE_WORDS, ROAD_WORDS, usize::MAX);
    closures.extend(
        HIGHWAY_HINTS
            .iter()
            .filter(|(token, _)| mentions_any(text, &[*token]))
            .map(|(_, hint)| (*hint).to_string()),
    );
    closures.truncate(MAX_CLOSURES);

    if closures.is_empty() {
        closures.push(NO_CLOSURES.to_string());
    }
    closures
}

fn hotspots(text: &str) -> Vec<String> {
    if !mentions_any(text, &["traffic", "congestion"]) {
        return Vec::new();
    }
    extract_tags(text, HOTSPOTS)
        .into_iter()
        .map(str::to_string)
        .collect()
}
