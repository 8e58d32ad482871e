//! Arithmétique des horaires "H.MM am"/"H.MM pm" (heure fractionnaire).

use crate::planner::EngineError;

/// Séparateur littéral entre début et fin d'une plage.
const RANGE_SEPARATOR: &str = " - ";

/// Convertit `"8.00 am"` → `8.0`, `"4.30 pm"` → `16.5`.
///
/// Règles 12h : `12 am` → 0, `12 pm` → 12, sinon +12 l'après-midi.
/// Le résultat est `heure24 + minutes/60` (réel, pas d'arrondi horloge).
pub fn parse_clock(s: &str) -> Result<f64, EngineError> {
    let raw = s.trim();
    let Some((time, period)) = raw.rsplit_once(' ') else {
        return Err(EngineError::Format(format!("missing am/pm marker: {raw}")));
    };
    let half = match period.trim() {
        "am" => Half::Am,
        "pm" => Half::Pm,
        other => {
            return Err(EngineError::Format(format!(
                "unknown period marker {other:?} in {raw}"
            )))
        }
    };
    let Some((hour_raw, minute_raw)) = time.split_once('.') else {
        return Err(EngineError::Format(format!(
            "missing '.' between hour and minutes: {raw}"
        )));
    };
    let hour: u32 = hour_raw
        .trim()
        .parse()
        .map_err(|_| EngineError::Format(format!("non-numeric hour in {raw}")))?;
    let minutes: u32 = minute_raw
        .trim()
        .parse()
        .map_err(|_| EngineError::Format(format!("non-numeric minutes in {raw}")))?;

    let hour24 = match (half, hour) {
        (Half::Am, 12) => 0,
        (Half::Am, h) => h,
        (Half::Pm, 12) => 12,
        (Half::Pm, h) => h + 12,
    };
    Ok(f64::from(hour24) + f64::from(minutes) / 60.0)
}

#[derive(Clone, Copy)]
enum Half {
    Am,
    Pm,
}

/// Coupe une plage `"8.00 am - 4.00 pm"` en (début, fin), trimés.
pub fn split_range(range: &str) -> Result<(&str, &str), EngineError> {
    let Some((start, end)) = range.split_once(RANGE_SEPARATOR) else {
        return Err(EngineError::Format(format!(
            "missing \" - \" separator in range: {range}"
        )));
    };
    Ok((start.trim(), end.trim()))
}

/// Durée en heures fractionnaires = fin − début.
///
/// Une plage nocturne (fin avant début) donne une durée négative,
/// restituée telle quelle : la politique de nuit n'est pas tranchée.
pub fn duration(range: &str) -> Result<f64, EngineError> {
    let (start, end) = split_range(range)?;
    Ok(parse_clock(end)? - parse_clock(start)?)
}
