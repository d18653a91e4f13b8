//! Report file parsing: sectioned text into the station and availability tables.

pub mod interval;

use std::{
    collections::{BTreeMap, HashMap},
    str::FromStr,
};

use derive_more::{Display, From, FromStr};
use itertools::Itertools;

use crate::{prelude::*, report::interval::AvailabilityInterval};

const STATIONS_MARKER: &str = "[Stations]";
const AVAILABILITY_MARKER: &str = "[Charger Availability Reports]";

/// Station identifier. Unique within a report: a repeated id overwrites the
/// earlier entry.
#[derive(Copy, Clone, Debug, Display, Eq, From, FromStr, Ord, PartialEq, PartialOrd)]
pub struct StationId(u64);

/// Charger identifier. Not a stored entity, purely a key into the
/// availability table. Any number of stations may reference the same charger.
#[derive(Copy, Clone, Debug, Display, Eq, From, FromStr, Hash, PartialEq)]
pub struct ChargerId(i64);

/// The parsed input: which chargers each station owns, and what each charger
/// reported. Built once per run and consumed by the uptime calculator.
pub struct Report {
    /// Ascending iteration order doubles as the output order.
    pub stations: BTreeMap<StationId, Vec<ChargerId>>,

    /// Reports accumulate per charger in input order; the calculator sorts
    /// each timeline itself.
    pub availability: HashMap<ChargerId, Vec<AvailabilityInterval>>,
}

impl Report {
    pub fn parse(content: &str) -> Result<Self> {
        let [_preamble, stations, availability] = split_sections(content)?;
        Ok(Self {
            stations: parse_stations(stations)?,
            availability: parse_availability(availability)?,
        })
    }
}

/// Split the raw text on the two literal section markers, in this order.
///
/// Returns the text before `[Stations]` (ignored by the caller), the station
/// section, and the availability section. Absent or out-of-order markers are
/// an error.
fn split_sections(content: &str) -> Result<[&str; 3]> {
    let (preamble, rest) = content
        .split_once(STATIONS_MARKER)
        .with_context(|| format!("missing sections in input file: no `{STATIONS_MARKER}`"))?;
    let (stations, availability) = rest
        .split_once(AVAILABILITY_MARKER)
        .with_context(|| format!("missing sections in input file: no `{AVAILABILITY_MARKER}`"))?;
    Ok([preamble, stations, availability])
}

fn parse_stations(section: &str) -> Result<BTreeMap<StationId, Vec<ChargerId>>> {
    let mut stations = BTreeMap::new();
    for line in section.trim().lines() {
        let tokens = line.split_whitespace().collect_vec();
        let (station_id, charger_ids) = match tokens.as_slice() {
            [station_id, charger_ids @ ..] if !charger_ids.is_empty() => {
                (station_id, charger_ids)
            }
            _ => bail!("invalid station entry: `{line}`"),
        };
        let charger_ids = charger_ids.iter().map(|token| parse_int(token)).try_collect()?;
        stations.insert(parse_int(station_id)?, charger_ids);
    }
    Ok(stations)
}

fn parse_availability(section: &str) -> Result<HashMap<ChargerId, Vec<AvailabilityInterval>>> {
    let reports: Vec<(ChargerId, AvailabilityInterval)> =
        section.trim().lines().map(parse_report_line).try_collect()?;
    Ok(reports.into_iter().into_group_map())
}

fn parse_report_line(line: &str) -> Result<(ChargerId, AvailabilityInterval)> {
    let tokens = line.split_whitespace().collect_vec();
    let [charger_id, start, end, up] = tokens.as_slice() else {
        bail!("invalid availability report entry: `{line}`");
    };
    // Anything other than `true` (case-insensitive) counts as down, never as
    // an error.
    let up = up.eq_ignore_ascii_case("true");
    Ok((parse_int(charger_id)?, AvailabilityInterval::new(parse_int(start)?, parse_int(end)?, up)))
}

fn parse_int<T>(token: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    token.parse().with_context(|| format!("invalid integer `{token}`"))
}
