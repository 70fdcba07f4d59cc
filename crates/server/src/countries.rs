use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use common::types::Message;
use service::country::{Country, CountryFilter};

use crate::{errors::JsonApiError, routes::AppState};

/// Query string of `GET /countries`. Empty values count as absent.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CountriesQuery {
    pub country_starts_with: Option<String>,
    pub city_starts_with: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub country_code: Option<i32>,
}

fn blank_as_none<'de, D>(de: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl From<CountriesQuery> for CountryFilter {
    fn from(q: CountriesQuery) -> Self {
        CountryFilter::new(q.country_code, q.country_starts_with, q.city_starts_with)
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertCountryRequest {
    pub country_code: i32,
    pub country: String,
    pub city: String,
}

/// PATCH body. A `countryCode` field, if sent, is ignored; the path decides.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCountryRequest {
    pub country: String,
    pub city: String,
}

#[utoipa::path(
    get, path = "/countries", tag = "countries",
    params(CountriesQuery),
    responses(
        (status = 200, description = "Matching countries, possibly empty", body = [crate::openapi::CountryDoc]),
        (status = 400, description = "Malformed query")
    )
)]
pub async fn list_countries(
    State(state): State<AppState>,
    q: Result<Query<CountriesQuery>, QueryRejection>,
) -> Result<Json<Vec<Country>>, JsonApiError> {
    let Query(q) = q?;
    let filter = CountryFilter::from(q);
    let list = state.countries.get_countries(&filter).await?;
    info!(count = list.len(), "list countries");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/countries/{country_code}", tag = "countries",
    params(("country_code" = i32, Path, description = "Country calling code")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CountryDoc),
        (status = 404, description = "Not Found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get_country(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Country>, JsonApiError> {
    let Path(country_code) = path?;
    Ok(Json(state.countries.find_by_country_code(country_code).await?))
}

#[utoipa::path(
    get, path = "/countries/id/{id}", tag = "countries",
    params(("id" = i32, Path, description = "Store-assigned id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CountryDoc),
        (status = 404, description = "Not Found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get_country_by_id(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Country>, JsonApiError> {
    let Path(id) = path?;
    Ok(Json(state.countries.find_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/countries", tag = "countries",
    request_body = crate::openapi::InsertCountryRequestDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MessageDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::MessageDoc),
        (status = 409, description = "Duplicated country code", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create_country(
    State(state): State<AppState>,
    body: Result<Json<InsertCountryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Json(input) = body?;
    let created = state.countries.insert(input.country_code, &input.country, &input.city).await?;
    let location = format!("/countries/{}", created.country_code);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(Message::new("country created"))))
}

#[utoipa::path(
    patch, path = "/countries/{country_code}", tag = "countries",
    params(("country_code" = i32, Path, description = "Country calling code")),
    request_body = crate::openapi::UpdateCountryRequestDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MessageDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn update_country(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdateCountryRequest>, JsonRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Path(country_code) = path?;
    let Json(input) = body?;
    state.countries.update(country_code, &input.country, &input.city).await?;
    Ok(Json(Message::new("country updated")))
}

#[utoipa::path(
    delete, path = "/countries/{country_code}", tag = "countries",
    params(("country_code" = i32, Path, description = "Country calling code")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete_country(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Path(country_code) = path?;
    state.countries.delete(country_code).await?;
    Ok(Json(Message::new("country deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_normalizes_blank_prefixes() {
        let q = CountriesQuery { country_starts_with: Some(String::new()), city_starts_with: Some("A".into()), country_code: None };
        let f = CountryFilter::from(q);
        assert_eq!(f.country_starts_with, None);
        assert_eq!(f.city_starts_with.as_deref(), Some("A"));
    }

    #[test]
    fn blank_country_code_counts_as_absent() {
        let q: CountriesQuery = serde_json::from_str(r#"{"countryCode":"","countryStartsWith":"F"}"#).unwrap();
        assert_eq!(q.country_code, None);
        let q: CountriesQuery = serde_json::from_str(r#"{"countryCode":" 33 "}"#).unwrap();
        assert_eq!(q.country_code, Some(33));
        assert!(serde_json::from_str::<CountriesQuery>(r#"{"countryCode":"x"}"#).is_err());
    }

    #[test]
    fn update_body_ignores_country_code() {
        let body: UpdateCountryRequest =
            serde_json::from_str(r#"{"countryCode":99,"country":"Norway","city":"Oslo"}"#).unwrap();
        assert_eq!(body.country, "Norway");
        assert_eq!(body.city, "Oslo");
    }
}
