//! Fenêtre hebdomadaire : borne canonique de début et comparaison par
//! jour calendaire. L'appelant fournit toujours le lundi lui-même ; la
//! lib ne déduit jamais le lundi d'une date quelconque.

use crate::planner::EngineError;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

/// Parse une date de début de semaine (le lundi, fourni tel quel par
/// l'appelant). Rejeté avant toute mutation.
pub fn parse_week_start(raw: &str) -> Result<DateTime<Utc>, EngineError> {
    parse_date(raw)
}

/// Parse une date calendaire : RFC3339, sinon `YYYY-MM-DD` (minuit UTC).
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, EngineError> {
    let raw = raw.trim();
    if let Ok(dt) = raw.parse::<DateTime<Utc>>() {
        return Ok(dt);
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| EngineError::InvalidDate(raw.to_owned()))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| EngineError::InvalidDate(raw.to_owned()))?;
    Ok(Utc.from_utc_datetime(&midnight))
}

/// Tronque l'heure : la clé de semaine est un jour calendaire.
pub fn day_start(dt: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&dt.date_naive().and_hms_opt(0, 0, 0).unwrap())
}

/// Fenêtre inclusive de 7 jours : `[j 00:00:00.000, j+6 23:59:59.999]`.
pub fn week_window(start: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let lo = day_start(start);
    let hi = lo + Duration::days(7) - Duration::milliseconds(1);
    (lo, hi)
}

/// Comparaison canonique : deux shifts sont de la même semaine ssi leurs
/// dates de début représentent le même jour calendaire, peu importe le
/// bruit d'heure stocké.
pub fn same_week(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Appartenance à la fenêtre inclusive (requêtes par plage du stockage).
pub fn in_window(stored: DateTime<Utc>, week_start: DateTime<Utc>) -> bool {
    let (lo, hi) = week_window(week_start);
    stored >= lo && stored <= hi
}
