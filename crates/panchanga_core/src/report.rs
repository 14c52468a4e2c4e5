//! Named, local-time rendering of a [`PanchangaSnapshot`].

use panchanga_time::{CivilZone, Instant};

use crate::error::PanchangaError;
use crate::names::{Element, NameTable, label, masa_label};
use crate::types::PanchangaSnapshot;

const LOCAL_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S%:z";
const LOCAL_TIME: &str = "%H:%M:%S";

/// One named element with its local end time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElementEntry {
    pub value: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub end: Option<String>,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElapsedYearEntry {
    pub kali: i64,
    pub saka: i64,
}

/// Human-facing panchanga: names instead of indices, times in the observer's zone.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PanchangaReport {
    pub date: String,
    pub tithi: ElementEntry,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub skipped_tithi: Option<ElementEntry>,
    pub nakshatra: ElementEntry,
    pub yoga: ElementEntry,
    pub karana: ElementEntry,
    pub vaara: ElementEntry,
    pub masa: ElementEntry,
    pub ritu: ElementEntry,
    /// Whole days since the Kali epoch.
    pub ahargana: i64,
    pub elapsed_year: ElapsedYearEntry,
    pub samvatsara: ElementEntry,
    pub sunrise: String,
    pub sunset: String,
    pub day_duration: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub warnings: Vec<String>,
}

impl PanchangaReport {
    pub fn new(snapshot: &PanchangaSnapshot, names: &dyn NameTable) -> Result<Self, PanchangaError> {
        let zone = &snapshot.observer.zone;
        let local = |t: Instant| -> Result<String, PanchangaError> {
            Ok(zone.to_local(t)?.format(LOCAL_DATE_TIME).to_string())
        };
        let entry = |element: Element, index: u8, end: Option<Instant>| -> Result<ElementEntry, PanchangaError> {
            Ok(ElementEntry {
                value: label(names, element, u32::from(index)),
                end: end.map(&local).transpose()?,
                description: element.description(),
            })
        };

        let skipped_tithi = match snapshot.tithi.leap {
            Some(leap) => Some(entry(Element::Tithi, leap.index, Some(leap.end))?),
            None => None,
        };

        let mut warnings = Vec::new();
        for (element, warning) in [
            (Element::Tithi, snapshot.tithi.warning),
            (Element::Nakshatra, snapshot.nakshatra.warning),
            (Element::Yoga, snapshot.yoga.warning),
        ] {
            if let Some(w) = warning {
                warnings.push(format!("{element} end time: {w}"));
            }
        }

        Ok(Self {
            date: snapshot.date.format("%Y-%m-%d").to_string(),
            tithi: entry(Element::Tithi, snapshot.tithi.index, Some(snapshot.tithi.end))?,
            skipped_tithi,
            nakshatra: entry(Element::Nakshatra, snapshot.nakshatra.index, Some(snapshot.nakshatra.end))?,
            yoga: entry(Element::Yoga, snapshot.yoga.index, Some(snapshot.yoga.end))?,
            karana: entry(Element::Karana, snapshot.karana.index, None)?,
            vaara: entry(Element::Vaara, snapshot.vaara.index, None)?,
            masa: ElementEntry {
                value: masa_label(names, snapshot.masa.masa, snapshot.masa.is_leap),
                end: Some(local(snapshot.masa.next_new_moon)?),
                description: Element::Masa.description(),
            },
            ritu: entry(Element::Ritu, snapshot.ritu, None)?,
            ahargana: snapshot.ahargana.floor() as i64,
            elapsed_year: ElapsedYearEntry {
                kali: snapshot.elapsed_year.kali,
                saka: snapshot.elapsed_year.saka,
            },
            samvatsara: entry(Element::Samvatsara, snapshot.samvatsara, None)?,
            sunrise: local_time(zone, snapshot.sunrise)?,
            sunset: local_time(zone, snapshot.sunset)?,
            day_duration: snapshot.day_duration.formatted.clone(),
            warnings,
        })
    }
}

fn local_time(zone: &CivilZone, t: Instant) -> Result<String, PanchangaError> {
    Ok(zone.to_local(t)?.format(LOCAL_TIME).to_string())
}

impl std::fmt::Display for PanchangaReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row = |f: &mut std::fmt::Formatter<'_>, name: &str, e: &ElementEntry| match &e.end {
            Some(end) => writeln!(f, "{name:<12} {} (until {end})", e.value),
            None => writeln!(f, "{name:<12} {}", e.value),
        };
        writeln!(f, "Panchanga for {}", self.date)?;
        row(f, "Tithi", &self.tithi)?;
        if let Some(skipped) = &self.skipped_tithi {
            row(f, "  skipped", skipped)?;
        }
        row(f, "Nakshatra", &self.nakshatra)?;
        row(f, "Yoga", &self.yoga)?;
        row(f, "Karana", &self.karana)?;
        row(f, "Vaara", &self.vaara)?;
        row(f, "Masa", &self.masa)?;
        row(f, "Ritu", &self.ritu)?;
        row(f, "Samvatsara", &self.samvatsara)?;
        writeln!(f, "{:<12} {}", "Ahargana", self.ahargana)?;
        writeln!(
            f,
            "{:<12} Kali {}, Saka {}",
            "Elapsed", self.elapsed_year.kali, self.elapsed_year.saka
        )?;
        writeln!(f, "{:<12} {}", "Sunrise", self.sunrise)?;
        writeln!(f, "{:<12} {}", "Sunset", self.sunset)?;
        write!(f, "{:<12} {}", "Day length", self.day_duration)?;
        for w in &self.warnings {
            write!(f, "\nwarning: {w}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanchangaConfig;
    use crate::engines::testing::{LinearEphemeris, observer};
    use crate::names::SanskritNames;
    use crate::panchanga::panchanga_on;
    use chrono::NaiveDate;

    fn snapshot() -> PanchangaSnapshot {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        panchanga_on(
            &LinearEphemeris::new(280.0, 310.0),
            &observer(),
            date,
            &PanchangaConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn renders_names_and_local_times() {
        let snap = snapshot();
        let r = PanchangaReport::new(&snap, &SanskritNames).unwrap();
        assert_eq!(r.date, "2023-01-01");
        assert_eq!(r.vaara.value, "Ravivara");
        assert_eq!(r.sunrise, "06:00:00");
        assert_eq!(r.sunset, "18:00:00");
        assert_eq!(r.day_duration, "12:00:00");
        assert!(r.tithi.end.as_deref().is_some_and(|e| e.ends_with("+05:30")));
        assert_eq!(r.karana.end, None);
        assert_eq!(r.ahargana, snap.ahargana.floor() as i64);
    }

    #[test]
    fn display_lists_every_element() {
        let text = PanchangaReport::new(&snapshot(), &SanskritNames).unwrap().to_string();
        for key in ["Tithi", "Nakshatra", "Yoga", "Karana", "Vaara", "Masa", "Ritu", "Samvatsara", "Sunrise"] {
            assert!(text.contains(key), "missing {key} in\n{text}");
        }
    }
}
