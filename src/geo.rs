//! Country-name location matching for the world map.
//!
//! Areas are matched case-insensitively against English short names, then
//! against the long official forms used by FAO/UN statistics. Regional
//! aggregates ("World", "Africa", ...) have no location and stay unmatched.

/// Approximate geographic centre of a country.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

const CENTROIDS: &[(&str, f64, f64)] = &[
    ("afghanistan", 33.9, 67.7),
    ("albania", 41.2, 20.2),
    ("algeria", 28.0, 1.7),
    ("american samoa", -14.3, -170.7),
    ("andorra", 42.5, 1.6),
    ("angola", -11.2, 17.9),
    ("antigua and barbuda", 17.1, -61.8),
    ("argentina", -38.4, -63.6),
    ("armenia", 40.1, 45.0),
    ("aruba", 12.5, -69.97),
    ("australia", -25.3, 133.8),
    ("austria", 47.5, 14.6),
    ("azerbaijan", 40.1, 47.6),
    ("bahamas", 25.0, -77.4),
    ("bahrain", 26.0, 50.6),
    ("bangladesh", 23.7, 90.4),
    ("barbados", 13.2, -59.5),
    ("belarus", 53.7, 28.0),
    ("belgium", 50.5, 4.5),
    ("belize", 17.2, -88.5),
    ("benin", 9.3, 2.3),
    ("bermuda", 32.3, -64.8),
    ("bhutan", 27.5, 90.4),
    ("bolivia", -16.3, -63.6),
    ("bosnia and herzegovina", 43.9, 17.7),
    ("botswana", -22.3, 24.7),
    ("brazil", -14.2, -51.9),
    ("brunei", 4.5, 114.7),
    ("bulgaria", 42.7, 25.5),
    ("burkina faso", 12.2, -1.6),
    ("burundi", -3.4, 29.9),
    ("cabo verde", 16.0, -24.0),
    ("cambodia", 12.6, 105.0),
    ("cameroon", 7.4, 12.4),
    ("canada", 56.1, -106.3),
    ("cayman islands", 19.3, -81.3),
    ("central african republic", 6.6, 20.9),
    ("chad", 15.5, 18.7),
    ("chile", -35.7, -71.5),
    ("china", 35.9, 104.2),
    ("colombia", 4.6, -74.3),
    ("comoros", -11.9, 43.9),
    ("cook islands", -21.2, -159.8),
    ("costa rica", 9.7, -83.8),
    ("croatia", 45.1, 15.2),
    ("cuba", 21.5, -77.8),
    ("curaçao", 12.2, -69.0),
    ("cyprus", 35.1, 33.4),
    ("czechia", 49.8, 15.5),
    ("côte d'ivoire", 7.5, -5.5),
    ("democratic republic of the congo", -4.0, 21.8),
    ("denmark", 56.3, 9.5),
    ("djibouti", 11.8, 42.6),
    ("dominica", 15.4, -61.4),
    ("dominican republic", 18.7, -70.2),
    ("ecuador", -1.8, -78.2),
    ("egypt", 26.8, 30.8),
    ("el salvador", 13.8, -88.9),
    ("equatorial guinea", 1.7, 10.3),
    ("eritrea", 15.2, 39.8),
    ("estonia", 58.6, 25.0),
    ("eswatini", -26.5, 31.5),
    ("ethiopia", 9.1, 40.5),
    ("falkland islands", -51.8, -59.5),
    ("faroe islands", 61.9, -6.9),
    ("fiji", -17.7, 178.1),
    ("finland", 61.9, 25.7),
    ("france", 46.2, 2.2),
    ("french guiana", 4.0, -53.1),
    ("french polynesia", -17.7, -149.4),
    ("gabon", -0.8, 11.6),
    ("gambia", 13.4, -15.3),
    ("georgia", 42.3, 43.4),
    ("germany", 51.2, 10.5),
    ("ghana", 7.9, -1.0),
    ("greece", 39.1, 21.8),
    ("greenland", 71.7, -42.6),
    ("grenada", 12.1, -61.7),
    ("guadeloupe", 16.3, -61.6),
    ("guam", 13.4, 144.8),
    ("guatemala", 15.8, -90.2),
    ("guinea", 9.9, -9.7),
    ("guinea-bissau", 11.8, -15.2),
    ("guyana", 4.9, -58.9),
    ("haiti", 19.0, -72.3),
    ("honduras", 15.2, -86.2),
    ("hong kong", 22.4, 114.1),
    ("hungary", 47.2, 19.5),
    ("iceland", 64.9, -19.0),
    ("india", 20.6, 79.0),
    ("indonesia", -0.8, 113.9),
    ("iran", 32.4, 53.7),
    ("iraq", 33.2, 43.7),
    ("ireland", 53.4, -8.2),
    ("israel", 31.0, 34.9),
    ("italy", 41.9, 12.6),
    ("jamaica", 18.1, -77.3),
    ("japan", 36.2, 138.3),
    ("jordan", 30.6, 36.2),
    ("kazakhstan", 48.0, 66.9),
    ("kenya", -0.02, 37.9),
    ("kiribati", 1.9, -157.4),
    ("kuwait", 29.3, 47.5),
    ("kyrgyzstan", 41.2, 74.8),
    ("laos", 19.9, 102.5),
    ("latvia", 56.9, 24.6),
    ("lebanon", 33.9, 35.9),
    ("lesotho", -29.6, 28.2),
    ("liberia", 6.4, -9.4),
    ("libya", 26.3, 17.2),
    ("liechtenstein", 47.2, 9.6),
    ("lithuania", 55.2, 23.9),
    ("luxembourg", 49.8, 6.1),
    ("macao", 22.2, 113.5),
    ("madagascar", -18.8, 46.9),
    ("malawi", -13.3, 34.3),
    ("malaysia", 4.2, 102.0),
    ("maldives", 3.2, 73.2),
    ("mali", 17.6, -4.0),
    ("malta", 35.9, 14.4),
    ("marshall islands", 7.1, 171.2),
    ("martinique", 14.6, -61.0),
    ("mauritania", 21.0, -10.9),
    ("mauritius", -20.3, 57.6),
    ("mexico", 23.6, -102.6),
    ("micronesia", 7.4, 150.6),
    ("moldova", 47.4, 28.4),
    ("monaco", 43.7, 7.4),
    ("mongolia", 46.9, 103.8),
    ("montenegro", 42.7, 19.4),
    ("montserrat", 16.7, -62.2),
    ("morocco", 31.8, -7.1),
    ("mozambique", -18.7, 35.5),
    ("myanmar", 21.9, 95.9),
    ("namibia", -22.96, 18.5),
    ("nauru", -0.5, 166.9),
    ("nepal", 28.4, 84.1),
    ("netherlands", 52.1, 5.3),
    ("new caledonia", -20.9, 165.6),
    ("new zealand", -40.9, 174.9),
    ("nicaragua", 12.9, -85.2),
    ("niger", 17.6, 8.1),
    ("nigeria", 9.1, 8.7),
    ("niue", -19.1, -169.9),
    ("north korea", 40.3, 127.5),
    ("north macedonia", 41.6, 21.7),
    ("northern mariana islands", 15.1, 145.7),
    ("norway", 60.5, 8.5),
    ("oman", 21.5, 55.9),
    ("pakistan", 30.4, 69.3),
    ("palau", 7.5, 134.6),
    ("palestine", 31.9, 35.2),
    ("panama", 8.5, -80.8),
    ("papua new guinea", -6.3, 143.9),
    ("paraguay", -23.4, -58.4),
    ("peru", -9.2, -75.0),
    ("philippines", 12.9, 121.8),
    ("poland", 51.9, 19.1),
    ("portugal", 39.4, -8.2),
    ("puerto rico", 18.2, -66.6),
    ("qatar", 25.4, 51.2),
    ("republic of the congo", -0.2, 15.8),
    ("romania", 45.9, 25.0),
    ("russia", 61.5, 105.3),
    ("rwanda", -1.9, 29.9),
    ("réunion", -21.1, 55.5),
    ("saint kitts and nevis", 17.4, -62.8),
    ("saint lucia", 13.9, -61.0),
    ("saint vincent and the grenadines", 12.98, -61.3),
    ("samoa", -13.8, -172.1),
    ("san marino", 43.9, 12.5),
    ("sao tome and principe", 0.2, 6.6),
    ("saudi arabia", 23.9, 45.1),
    ("senegal", 14.5, -14.5),
    ("serbia", 44.0, 21.0),
    ("seychelles", -4.7, 55.5),
    ("sierra leone", 8.5, -11.8),
    ("singapore", 1.35, 103.8),
    ("slovakia", 48.7, 19.7),
    ("slovenia", 46.2, 15.0),
    ("solomon islands", -9.6, 160.2),
    ("somalia", 5.2, 46.2),
    ("south africa", -30.6, 22.9),
    ("south korea", 35.9, 127.8),
    ("south sudan", 6.9, 31.3),
    ("spain", 40.5, -3.7),
    ("sri lanka", 7.9, 80.8),
    ("sudan", 12.9, 30.2),
    ("suriname", 3.9, -56.0),
    ("sweden", 60.1, 18.6),
    ("switzerland", 46.8, 8.2),
    ("syria", 34.8, 39.0),
    ("taiwan", 23.7, 121.0),
    ("tajikistan", 38.9, 71.3),
    ("tanzania", -6.4, 34.9),
    ("thailand", 15.9, 101.0),
    ("timor-leste", -8.9, 125.7),
    ("togo", 8.6, 0.8),
    ("tonga", -21.2, -175.2),
    ("trinidad and tobago", 10.7, -61.2),
    ("tunisia", 33.9, 9.5),
    ("turkey", 38.96, 35.2),
    ("turkmenistan", 38.97, 59.6),
    ("tuvalu", -7.1, 177.6),
    ("uganda", 1.4, 32.3),
    ("ukraine", 48.4, 31.2),
    ("united arab emirates", 23.4, 53.8),
    ("united kingdom", 55.4, -3.4),
    ("united states", 37.1, -95.7),
    ("uruguay", -32.5, -55.8),
    ("uzbekistan", 41.4, 64.6),
    ("vanuatu", -15.4, 166.96),
    ("venezuela", 6.4, -66.6),
    ("vietnam", 14.1, 108.3),
    ("western sahara", 24.2, -12.9),
    ("yemen", 15.6, 48.5),
    ("zambia", -13.1, 27.8),
    ("zimbabwe", -19.0, 29.2),
];

/// Long or alternate names → key in `CENTROIDS`.
const ALIASES: &[(&str, &str)] = &[
    ("belgium-luxembourg", "belgium"),
    ("bolivia (plurinational state of)", "bolivia"),
    ("brunei darussalam", "brunei"),
    ("burma", "myanmar"),
    ("cape verde", "cabo verde"),
    ("china, hong kong sar", "hong kong"),
    ("china, macao sar", "macao"),
    ("china, mainland", "china"),
    ("china, taiwan province of", "taiwan"),
    ("congo", "republic of the congo"),
    ("cote d'ivoire", "côte d'ivoire"),
    ("curacao", "curaçao"),
    ("czech republic", "czechia"),
    ("czechoslovakia", "czechia"),
    ("democratic people's republic of korea", "north korea"),
    ("democratic republic of congo", "democratic republic of the congo"),
    ("east timor", "timor-leste"),
    ("ethiopia pdr", "ethiopia"),
    ("falkland islands (malvinas)", "falkland islands"),
    ("iran (islamic republic of)", "iran"),
    ("ivory coast", "côte d'ivoire"),
    ("kyrgyz republic", "kyrgyzstan"),
    ("lao people's democratic republic", "laos"),
    ("macedonia", "north macedonia"),
    ("micronesia (federated states of)", "micronesia"),
    ("netherlands (kingdom of the)", "netherlands"),
    ("occupied palestinian territory", "palestine"),
    ("republic of korea", "south korea"),
    ("republic of moldova", "moldova"),
    ("republic of north macedonia", "north macedonia"),
    ("reunion", "réunion"),
    ("russian federation", "russia"),
    ("sao tome and príncipe", "sao tome and principe"),
    ("serbia and montenegro", "serbia"),
    ("slovak republic", "slovakia"),
    ("state of palestine", "palestine"),
    ("sudan (former)", "sudan"),
    ("swaziland", "eswatini"),
    ("syrian arab republic", "syria"),
    ("the former yugoslav republic of macedonia", "north macedonia"),
    ("the gambia", "gambia"),
    ("türkiye", "turkey"),
    ("united kingdom of great britain and northern ireland", "united kingdom"),
    ("united republic of tanzania", "tanzania"),
    ("united states of america", "united states"),
    ("usa", "united states"),
    ("venezuela (bolivarian republic of)", "venezuela"),
    ("viet nam", "vietnam"),
];

/// Resolve a country name to its map location.
pub fn locate(area: &str) -> Option<Location> {
    let needle = area.trim().to_lowercase();
    let key = ALIASES
        .iter()
        .find(|(alias, _)| *alias == needle)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(needle.as_str());

    CENTROIDS
        .iter()
        .find(|(name, _, _)| *name == key)
        .map(|&(_, lat, lon)| Location { lat, lon })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_short_names_case_insensitively() {
        let loc = locate("Brazil").unwrap();
        assert!(loc.lat < 0.0 && loc.lon < 0.0);
        assert_eq!(locate("  brazil "), Some(loc));
    }

    #[test]
    fn matches_official_long_names() {
        assert_eq!(locate("United States of America"), locate("United States"));
        assert_eq!(locate("Viet Nam"), locate("Vietnam"));
        assert!(locate("Iran (Islamic Republic of)").is_some());
    }

    #[test]
    fn aggregates_are_unmatched() {
        assert_eq!(locate("World"), None);
        assert_eq!(locate("Europe"), None);
        assert_eq!(locate(""), None);
    }

    #[test]
    fn locates_faostat_area_names() {
        let areas = [
            "Bahamas", "Bahrain", "Barbados", "Brazil", "Brunei Darussalam", "Cabo Verde",
            "China, Hong Kong SAR", "China, mainland", "Côte d'Ivoire", "Djibouti", "Dominica",
            "Equatorial Guinea", "Eswatini", "Ethiopia PDR", "Grenada", "Guinea-Bissau",
            "Kiribati", "Maldives", "Marshall Islands", "Micronesia (Federated States of)",
            "Netherlands (Kingdom of the)", "Palestine", "Qatar", "Saint Kitts and Nevis",
            "Saint Lucia", "Saint Vincent and the Grenadines", "Samoa", "Sao Tome and Principe",
            "Seychelles", "Singapore", "Solomon Islands", "Sudan (former)", "Timor-Leste",
            "Tonga", "Türkiye", "United Arab Emirates", "Vanuatu",
        ];
        let unlocated: Vec<&str> = areas.into_iter().filter(|a| locate(a).is_none()).collect();
        assert!(unlocated.is_empty(), "no location for {unlocated:?}");
    }

    #[test]
    fn every_alias_targets_a_centroid() {
        for (alias, canonical) in ALIASES {
            assert!(
                CENTROIDS.iter().any(|(name, _, _)| name == canonical),
                "{alias} → {canonical} has no centroid"
            );
        }
    }
}
