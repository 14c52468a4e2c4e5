//! Orchestrator: one civil date and place in, one [`PanchangaSnapshot`] out.
//!
//! Place → observer, date → local midnight, then sunrise and sunset, then
//! every engine evaluated at that same sunrise. The first failure aborts.

use chrono::NaiveDate;
use panchanga_ephem::{Body, Ephemeris, Observer, RiseSetDirection};
use panchanga_time::{Instant, parse_civil_date};

use crate::config::PanchangaConfig;
use crate::engines::{
    ahargana, day_duration, elapsed_year, karana_at, masa_at, nakshatra_at, ritu, samvatsara, tithi_at, vaara_at,
    yoga_at,
};
use crate::error::PanchangaError;
use crate::places::{PlaceQuery, PlaceResolver};
use crate::types::PanchangaSnapshot;

/// A civil date string plus where it is observed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanchangaRequest {
    /// `YYYY-MM-DD`, an RFC 3339 date-time, or `DD/MM/YYYY`.
    pub date: String,
    pub place: PlaceQuery,
}

impl PanchangaRequest {
    pub fn new(date: impl Into<String>, place: PlaceQuery) -> Self {
        Self {
            date: date.into(),
            place,
        }
    }
}

/// Full panchanga for a request: resolve the place, parse the date, compute.
pub fn panchanga_for_date(
    ephem: &dyn Ephemeris,
    resolver: &dyn PlaceResolver,
    request: &PanchangaRequest,
    config: &PanchangaConfig,
) -> Result<PanchangaSnapshot, PanchangaError> {
    let observer = request.place.resolve(resolver)?;
    let date = parse_civil_date(&request.date)?;
    panchanga_on(ephem, &observer, date, config)
}

/// Panchanga for a parsed date at a resolved observer.
pub fn panchanga_on(
    ephem: &dyn Ephemeris,
    observer: &Observer,
    date: NaiveDate,
    config: &PanchangaConfig,
) -> Result<PanchangaSnapshot, PanchangaError> {
    let day_start = observer.zone.local_midnight(date);
    let (sunrise, sunset) = sunrise_sunset(ephem, observer, day_start, config.sunrise_window_days)?;
    panchanga_at_sunrise(ephem, observer, date, sunrise, sunset, config)
}

/// Next sunrise and next sunset after `day_start`.
pub fn sunrise_sunset(
    ephem: &dyn Ephemeris,
    observer: &Observer,
    day_start: Instant,
    window_days: f64,
) -> Result<(Instant, Instant), PanchangaError> {
    let sunrise = ephem
        .find_rise_set(Body::Sun, observer, RiseSetDirection::Rise, day_start, window_days)?
        .ok_or(PanchangaError::AstronomicalSearch("sunrise not found in window"))?;
    let sunset = ephem
        .find_rise_set(Body::Sun, observer, RiseSetDirection::Set, day_start, window_days)?
        .ok_or(PanchangaError::AstronomicalSearch("sunset not found in window"))?;
    Ok((sunrise, sunset))
}

/// Evaluate every engine at a known sunrise.
pub fn panchanga_at_sunrise(
    ephem: &dyn Ephemeris,
    observer: &Observer,
    date: NaiveDate,
    sunrise: Instant,
    sunset: Instant,
    config: &PanchangaConfig,
) -> Result<PanchangaSnapshot, PanchangaError> {
    let _span = tracing::debug_span!("panchanga", %date, %sunrise).entered();

    let tithi = tithi_at(ephem, observer, sunrise, config)?;
    let nakshatra = nakshatra_at(ephem, observer, sunrise, &config.ayanamsa)?;
    let yoga = yoga_at(ephem, observer, sunrise, &config.ayanamsa)?;
    let karana = karana_at(ephem, observer, sunrise)?;
    let vaara = vaara_at(sunrise, &observer.zone)?;
    let masa = masa_at(ephem, observer, sunrise, config.new_moon_window_days)?;

    let julian_day = sunrise.jd_ut();
    let ahargana = ahargana(julian_day);
    let elapsed_year = elapsed_year(ahargana, masa.masa);

    Ok(PanchangaSnapshot {
        date,
        observer: *observer,
        julian_day,
        sunrise,
        sunset,
        day_duration: day_duration(sunrise, sunset),
        tithi,
        nakshatra,
        yoga,
        karana,
        vaara,
        masa,
        ritu: ritu(masa.masa),
        ahargana,
        elapsed_year,
        samvatsara: samvatsara(elapsed_year.kali),
    })
}
