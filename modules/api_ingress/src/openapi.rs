use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::openapi::{ComponentsBuilder, InfoBuilder, OpenApi, OpenApiBuilder};
use utoipa::{PartialSchema, ToSchema};

/// Merge per-module documents into one, adding the bearer scheme and the
/// shared problem schemas.
pub fn build_openapi(parts: impl IntoIterator<Item = OpenApi>) -> OpenApi {
    let components = ComponentsBuilder::new()
        .security_scheme(
            "bearer_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        )
        .schema(apikit::Problem::name(), apikit::Problem::schema())
        .schema(
            apikit::problem::ValidationError::name(),
            apikit::problem::ValidationError::schema(),
        )
        .build();

    let mut doc = OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title("Notes API")
                .version(env!("CARGO_PKG_VERSION"))
                .description(Some("Authenticated personal notes"))
                .build(),
        )
        .components(Some(components))
        .build();

    for part in parts {
        doc.merge(part);
    }
    doc
}
