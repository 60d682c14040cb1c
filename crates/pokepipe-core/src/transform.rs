//! Pure normalization of detail payloads into canonical records.
//!
//! No I/O happens here. The same payload always yields the same record.

use serde::Deserialize;

use crate::domain::{AbilitySlot, CanonicalRecord, RawDetailPayload, StatValue, TypeSlot};
use crate::ports::TransformError;

// ─────────────────────────────────────────────────────────────────────────────
// Payload shape
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct DetailPayload {
    id: i64,
    name: String,
    height: u32,
    weight: u32,
    #[serde(default)]
    base_experience: Option<i64>,
    #[serde(default)]
    sprites: Option<Sprites>,
    #[serde(default)]
    types: Vec<TypeEntry>,
    #[serde(default)]
    abilities: Vec<AbilityEntry>,
    #[serde(default)]
    stats: Vec<StatEntry>,
}

#[derive(Debug, Deserialize)]
struct Sprites {
    #[serde(default)]
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct TypeEntry {
    slot: i64,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct AbilityEntry {
    ability: NamedResource,
    is_hidden: bool,
    slot: i64,
}

#[derive(Debug, Deserialize)]
struct StatEntry {
    base_stat: i64,
    effort: i64,
    stat: NamedResource,
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────────

/// Source heights are in decimetres.
pub fn decimetres_to_cm(height: u32) -> i64 {
    i64::from(height) * 10
}

/// Source weights are in hectograms.
pub fn hectograms_to_kg(weight: u32) -> f64 {
    f64::from(weight) / 10.0
}

/// Body mass index, or `None` when the height is not positive.
#[allow(clippy::cast_precision_loss)]
pub fn compute_bmi(height_cm: i64, weight_kg: f64) -> Option<f64> {
    if height_cm <= 0 {
        return None;
    }
    let metres = height_cm as f64 / 100.0;
    Some(weight_kg / (metres * metres))
}

/// Extract the trailing numeric id from a resource locator.
///
/// `https://pokeapi.co/api/v2/type/12/` yields `12`.
pub fn id_from_locator(locator: &str) -> Result<i64, TransformError> {
    locator
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<i64>().ok())
        .ok_or_else(|| TransformError::InvalidLocator {
            locator: locator.to_string(),
        })
}

// ─────────────────────────────────────────────────────────────────────────────
// Transform
// ─────────────────────────────────────────────────────────────────────────────

/// Map one raw detail payload to a canonical record.
///
/// Association order follows the payload; slots are copied as given.
pub fn transform(payload: &RawDetailPayload) -> Result<CanonicalRecord, TransformError> {
    let detail = DetailPayload::deserialize(payload.as_json()).map_err(|e| {
        TransformError::MalformedPayload {
            message: describe(payload, &e),
        }
    })?;

    let height_cm = decimetres_to_cm(detail.height);
    let weight_kg = hectograms_to_kg(detail.weight);

    let types = detail
        .types
        .into_iter()
        .map(|t| {
            Ok(TypeSlot {
                type_id: id_from_locator(&t.kind.url)?,
                name: t.kind.name,
                slot: t.slot,
            })
        })
        .collect::<Result<Vec<_>, TransformError>>()?;

    let abilities = detail
        .abilities
        .into_iter()
        .map(|a| {
            Ok(AbilitySlot {
                ability_id: id_from_locator(&a.ability.url)?,
                name: a.ability.name,
                is_hidden: a.is_hidden,
                slot: a.slot,
            })
        })
        .collect::<Result<Vec<_>, TransformError>>()?;

    let stats = detail
        .stats
        .into_iter()
        .map(|s| {
            Ok(StatValue {
                stat_id: id_from_locator(&s.stat.url)?,
                name: s.stat.name,
                base_value: s.base_stat,
                effort: s.effort,
            })
        })
        .collect::<Result<Vec<_>, TransformError>>()?;

    Ok(CanonicalRecord {
        id: detail.id,
        name: detail.name,
        base_experience: detail.base_experience,
        height_cm,
        weight_kg,
        bmi: compute_bmi(height_cm, weight_kg),
        sprite_url: detail.sprites.and_then(|s| s.front_default),
        types,
        abilities,
        stats,
    })
}

/// Transform every payload in order, stopping at the first failure.
pub fn transform_batch(payloads: &[RawDetailPayload]) -> Result<Vec<CanonicalRecord>, TransformError> {
    payloads.iter().map(transform).collect()
}

fn describe(payload: &RawDetailPayload, err: &serde_json::Error) -> String {
    match payload.as_json().get("name").and_then(|n| n.as_str()) {
        Some(name) => format!("{name}: {err}"),
        None => err.to_string(),
    }
}
