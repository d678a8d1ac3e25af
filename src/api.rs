use reqwest::Client;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::FetchError;

/// Mock directory endpoint the app talks to unless configured otherwise
pub const DEFAULT_ENDPOINT: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

/// A doctor record after ingestion
///
/// Specialties are already normalized to plain names; nothing downstream
/// needs to know whether the endpoint sent strings or `{ "name": .. }` objects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialties: Vec<String>,
    pub experience: String, // e.g. "13 Years of experience"
    pub fees: String,       // e.g. "₹500"
    pub clinic: Option<Clinic>,
    pub introduction: String,
    pub photo: Option<String>,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Clinic {
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub video_consult: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub in_clinic: bool,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<ClinicAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClinicAddress {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub address_line1: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub locality: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub city: Option<String>,
}

impl ClinicAddress {
    /// Non-empty address parts joined with ", "
    pub fn one_line(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.address_line1, &self.locality, &self.city]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Specialty as sent by the endpoint
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSpecialty {
    Named { name: String },
    Plain(String),
}

impl RawSpecialty {
    fn into_name(self) -> String {
        match self {
            RawSpecialty::Named { name } => name,
            RawSpecialty::Plain(name) => name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawDoctor {
    #[serde(deserialize_with = "deserialize_text")]
    id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    name: String,
    #[serde(default, alias = "specialties", deserialize_with = "deserialize_specialties")]
    specialities: Vec<RawSpecialty>,
    #[serde(default, deserialize_with = "deserialize_text")]
    experience: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    fees: String,
    #[serde(default)]
    clinic: Option<Clinic>,
    #[serde(default, deserialize_with = "deserialize_text")]
    doctor_introduction: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    photo: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_list")]
    languages: Vec<String>,
}

impl From<RawDoctor> for Doctor {
    fn from(raw: RawDoctor) -> Self {
        let specialties = raw
            .specialities
            .into_iter()
            .map(RawSpecialty::into_name)
            .filter(|name| !name.is_empty())
            .collect();

        Doctor {
            id: raw.id,
            name: raw.name,
            specialties,
            experience: raw.experience,
            fees: raw.fees,
            clinic: raw.clinic,
            introduction: raw.doctor_introduction,
            photo: raw.photo.filter(|url| !url.is_empty()),
            languages: raw.languages,
        }
    }
}

/// Capability flags count only when they are exactly `true`
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(matches!(value, Value::Bool(true)))
}

/// Accept strings and numbers as text; anything else becomes empty
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(value).unwrap_or_default())
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(value))
}

/// Keep the list elements that are strings or `{ "name": .. }` objects
fn deserialize_specialties<'de, D>(deserializer: D) -> Result<Vec<RawSpecialty>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| RawSpecialty::deserialize(item).ok())
        .collect())
}

/// Text elements of a list; nulls and other shapes are dropped
fn deserialize_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items.into_iter().filter_map(value_to_text).collect())
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse the endpoint body into normalized records
///
/// The body must be a JSON array. Elements that cannot be read as a doctor
/// (no `id`, not an object) are skipped; the rest still load.
pub fn parse_doctors(body: &[u8]) -> Result<Vec<Doctor>, FetchError> {
    let items: Vec<Value> = serde_json::from_slice(body)?;

    let doctors = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match RawDoctor::deserialize(item) {
            Ok(raw) => Some(Doctor::from(raw)),
            Err(error) => {
                tracing::warn!(index, %error, "skipping malformed doctor record");
                None
            }
        })
        .collect();

    Ok(doctors)
}

/// Client for the read-only doctor directory endpoint
#[derive(Clone)]
pub struct DirectoryClient {
    client: Client,
    endpoint_url: String,
}

impl DirectoryClient {
    pub fn new(endpoint_url: String) -> Self {
        Self {
            client: Client::new(),
            endpoint_url,
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Fetch the full doctor list
    ///
    /// Non-success statuses and unparseable bodies are errors; nothing is retried.
    pub async fn fetch_doctors(&self) -> Result<Vec<Doctor>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint_url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: self.endpoint_url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.endpoint_url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::Body)?;
        let doctors = parse_doctors(&body)?;

        tracing::debug!(count = doctors.len(), url = %self.endpoint_url, "fetched doctor list");
        Ok(doctors)
    }
}
