//! Nager.Date v3 HTTP client and wire DTOs.

use hc_core::errors::{Error, Result};
use hc_holidays::HolidayRecord;
use hc_time::Date;
use serde::Deserialize;

use crate::source::{Country, HolidaySource};

/// Default API root of the Nager.Date v3 service.
pub const API_BASE: &str = "https://date.nager.at/api/v3";

/// One holiday as serialized by the Nager.Date API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HolidayDto {
    date: String,
    local_name: Option<String>,
    name: String,
    types: Option<Vec<String>>,
}

/// One country as serialized by the Nager.Date API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountryDto {
    country_code: String,
    name: String,
}

/// Blocking HTTP client for the Nager.Date v3 API.
#[derive(Debug, Clone)]
pub struct NagerClient {
    agent: ureq::Agent,
    base_url: String,
}

impl NagerClient {
    /// Create a client against the public [`API_BASE`].
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    /// Create a client against a custom API root (test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        NagerClient {
            agent: ureq::AgentBuilder::new().build(),
            base_url: base_url.into(),
        }
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{path}", self.base_url);
        let response = self.agent.get(&url).call().map_err(|e| match e {
            ureq::Error::Status(status, _) => Error::Transport {
                status,
                message: format!("GET {url} returned status {status}"),
            },
            ureq::Error::Transport(t) => Error::Transport {
                status: 0,
                message: t.to_string(),
            },
        })?;
        response.into_json().map_err(|e| Error::Transport {
            status: 0,
            message: format!("GET {url} returned malformed body: {e}"),
        })
    }
}

impl Default for NagerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HolidaySource for NagerClient {
    fn fetch_holidays(&self, year: u16, country_code: &str) -> Result<Vec<HolidayRecord>> {
        let dtos: Vec<HolidayDto> =
            self.get_json(&format!("PublicHolidays/{year}/{country_code}"))?;
        dtos.into_iter().map(record_from_dto).collect()
    }

    fn fetch_countries(&self) -> Result<Vec<Country>> {
        let dtos: Vec<CountryDto> = self.get_json("AvailableCountries")?;
        Ok(dtos
            .into_iter()
            .map(|c| Country {
                code: c.country_code,
                display_name: c.name,
            })
            .collect())
    }
}

/// Convert a wire DTO into a domain record.
///
/// The DTO's date string must be a valid `YYYY-MM-DD` key; anything else
/// is a data-contract violation and fails fast with a `Format`/`Date`
/// error rather than being skipped.
fn record_from_dto(dto: HolidayDto) -> Result<HolidayRecord> {
    Ok(HolidayRecord {
        date: Date::from_key(&dto.date)?,
        local_name: dto.local_name.unwrap_or_default(),
        name: dto.name,
        types: dto.types.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holiday_dto_deserializes_camel_case() {
        let json = r#"{
            "date": "2024-05-06",
            "localName": "Гергьовден",
            "name": "Saint George's Day",
            "types": ["Public"]
        }"#;
        let dto: HolidayDto = serde_json::from_str(json).unwrap();
        let record = record_from_dto(dto).unwrap();
        assert_eq!(record.date.key(), "2024-05-06");
        assert_eq!(record.local_name, "Гергьовден");
        assert_eq!(record.types, vec!["Public".to_string()]);
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{ "date": "2024-01-01", "name": "New Year's Day" }"#;
        let dto: HolidayDto = serde_json::from_str(json).unwrap();
        let record = record_from_dto(dto).unwrap();
        assert!(record.local_name.is_empty());
        assert!(record.types.is_empty());
    }

    #[test]
    fn malformed_date_fails_fast() {
        let dto = HolidayDto {
            date: "05/06/2024".to_string(),
            local_name: None,
            name: "X".to_string(),
            types: None,
        };
        assert!(matches!(record_from_dto(dto), Err(Error::Format(_))));
    }

    #[test]
    fn country_dto_deserializes() {
        let json = r#"[{ "countryCode": "BG", "name": "Bulgaria" }]"#;
        let dtos: Vec<CountryDto> = serde_json::from_str(json).unwrap();
        assert_eq!(dtos[0].country_code, "BG");
        assert_eq!(dtos[0].name, "Bulgaria");
    }
}
