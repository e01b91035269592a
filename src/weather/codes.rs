/// Description used for any code missing from [`WMO_CODES`]
pub const UNKNOWN_CONDITION: &str = "Condición desconocida";

/// WMO weather interpretation codes, as reported in Open-Meteo's `weather_code`
pub const WMO_CODES: [(i64, &str); 20] = [
    (0, "Despejado"),
    (1, "Mayormente despejado"),
    (2, "Parcialmente nublado"),
    (3, "Nublado"),
    (45, "Niebla"),
    (48, "Niebla con escarcha"),
    (51, "Llovizna ligera"),
    (53, "Llovizna moderada"),
    (55, "Llovizna intensa"),
    (61, "Lluvia ligera"),
    (63, "Lluvia moderada"),
    (65, "Lluvia fuerte"),
    (71, "Nevada ligera"),
    (73, "Nevada moderada"),
    (75, "Nevada fuerte"),
    (80, "Chubascos ligeros"),
    (81, "Chubascos moderados"),
    (82, "Chubascos fuertes"),
    (95, "Tormenta eléctrica"),
    (99, "Tormenta con granizo"),
];

/// Human-readable description for a WMO weather code
pub fn describe(code: i64) -> &'static str {
    WMO_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, text)| *text)
        .unwrap_or(UNKNOWN_CONDITION)
}
