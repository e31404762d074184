//! City to airport code resolution for flight searches

/// Primary international airport (IATA) for major destinations
const CITY_AIRPORTS: &[(&str, &str)] = &[
    ("amsterdam", "AMS"),
    ("athens", "ATH"),
    ("atlanta", "ATL"),
    ("auckland", "AKL"),
    ("bangkok", "BKK"),
    ("barcelona", "BCN"),
    ("beijing", "PEK"),
    ("berlin", "BER"),
    ("boston", "BOS"),
    ("brussels", "BRU"),
    ("budapest", "BUD"),
    ("buenos aires", "EZE"),
    ("cairo", "CAI"),
    ("cape town", "CPT"),
    ("chicago", "ORD"),
    ("copenhagen", "CPH"),
    ("dallas", "DFW"),
    ("delhi", "DEL"),
    ("denver", "DEN"),
    ("dubai", "DXB"),
    ("dublin", "DUB"),
    ("edinburgh", "EDI"),
    ("frankfurt", "FRA"),
    ("hong kong", "HKG"),
    ("honolulu", "HNL"),
    ("istanbul", "IST"),
    ("johannesburg", "JNB"),
    ("lisbon", "LIS"),
    ("london", "LHR"),
    ("los angeles", "LAX"),
    ("madrid", "MAD"),
    ("melbourne", "MEL"),
    ("mexico city", "MEX"),
    ("miami", "MIA"),
    ("milan", "MXP"),
    ("montreal", "YUL"),
    ("moscow", "SVO"),
    ("mumbai", "BOM"),
    ("munich", "MUC"),
    ("nairobi", "NBO"),
    ("new delhi", "DEL"),
    ("new york", "JFK"),
    ("oslo", "OSL"),
    ("paris", "CDG"),
    ("prague", "PRG"),
    ("reykjavik", "KEF"),
    ("rio de janeiro", "GIG"),
    ("rome", "FCO"),
    ("san francisco", "SFO"),
    ("sao paulo", "GRU"),
    ("seattle", "SEA"),
    ("seoul", "ICN"),
    ("shanghai", "PVG"),
    ("singapore", "SIN"),
    ("stockholm", "ARN"),
    ("sydney", "SYD"),
    ("tokyo", "HND"),
    ("toronto", "YYZ"),
    ("vancouver", "YVR"),
    ("vienna", "VIE"),
    ("warsaw", "WAW"),
    ("washington", "IAD"),
    ("zurich", "ZRH"),
];

/// Resolve a city name (or an IATA code) to an airport code.
///
/// Matching uses the part of the name before the first comma, ignoring
/// case, so "Paris, France" resolves like "Paris". A three-letter
/// upper-case input is taken as an airport code as is.
#[must_use]
pub fn airport_code_for(city: &str) -> Option<String> {
    let city = city.trim();
    if city.len() == 3 && city.chars().all(|c| c.is_ascii_uppercase()) {
        return Some(city.to_string());
    }

    let name = city.split(',').next().unwrap_or_default().trim().to_lowercase();
    CITY_AIRPORTS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, code)| (*code).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("London", Some("LHR"))]
    #[case("new york", Some("JFK"))]
    #[case("Paris, France", Some("CDG"))]
    #[case("  Tokyo  ", Some("HND"))]
    #[case("LAX", Some("LAX"))]
    #[case("Atlantis", None)]
    #[case("", None)]
    fn test_airport_code_for(#[case] city: &str, #[case] expected: Option<&str>) {
        assert_eq!(airport_code_for(city).as_deref(), expected);
    }

    #[test]
    fn test_table_codes_are_iata_shaped() {
        for (city, code) in CITY_AIRPORTS {
            assert_eq!(code.len(), 3, "{city}");
            assert!(code.chars().all(|c| c.is_ascii_uppercase()), "{city}");
            assert_eq!(*city, city.to_lowercase());
        }
    }
}
