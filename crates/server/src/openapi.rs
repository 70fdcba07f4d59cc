use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CountryDoc {
    pub id: Option<i32>,
    #[schema(rename = "countryCode")]
    pub country_code: i32,
    pub country: String,
    pub city: String,
}

#[derive(ToSchema)]
pub struct InsertCountryRequestDoc {
    #[schema(rename = "countryCode")]
    pub country_code: i32,
    pub country: String,
    pub city: String,
}

#[derive(ToSchema)]
pub struct UpdateCountryRequestDoc {
    pub country: String,
    pub city: String,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::countries::list_countries,
        crate::countries::get_country,
        crate::countries::get_country_by_id,
        crate::countries::create_country,
        crate::countries::update_country,
        crate::countries::delete_country,
    ),
    components(
        schemas(
            HealthResponse,
            CountryDoc,
            InsertCountryRequestDoc,
            UpdateCountryRequestDoc,
            MessageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "countries")
    )
)]
pub struct ApiDoc;
