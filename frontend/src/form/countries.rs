#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountryCode {
    pub code: &'static str,
    pub label: &'static str,
}

pub const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode { code: "+91", label: "India" },
    CountryCode { code: "+1", label: "United States" },
    CountryCode { code: "+358", label: "Finland" },
    CountryCode { code: "+44", label: "United Kingdom" },
    CountryCode { code: "+61", label: "Australia" },
    CountryCode { code: "+49", label: "Germany" },
    CountryCode { code: "+81", label: "Japan" },
];

/// Countries whose dial code or name contains `query` (case-insensitive).
pub fn search(query: &str) -> Vec<CountryCode> {
    let query = query.trim().to_lowercase();
    COUNTRY_CODES
        .iter()
        .filter(|c| c.code.contains(&query) || c.label.to_lowercase().contains(&query))
        .copied()
        .collect()
}
