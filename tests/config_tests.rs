//! Integration tests for configuration loading and the endpoint table.

use storefront_catalog::config::{API_KEY_VAR, HOSTNAME_VAR};
use storefront_catalog::{
    AccessToken, ApiVersion, ConfigError, Endpoints, StoreConfig, StoreHost,
};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_builder_round_trip() {
    let config = StoreConfig::builder()
        .host(StoreHost::new("https://my-store.myshopify.com"))
        .access_token(AccessToken::new("shpat-example"))
        .build()
        .unwrap();

    assert_eq!(config.host().as_ref(), "https://my-store.myshopify.com");
    assert_eq!(config.access_token().as_ref(), "shpat-example");
}

#[test]
fn test_builder_reports_the_missing_field() {
    let result = StoreConfig::builder().build();

    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField { field: "host" })
    ));
}

#[test]
fn test_from_env_reads_both_variables() {
    // Env mutation is process-wide; this is the only test that touches
    // these variables.
    std::env::set_var(HOSTNAME_VAR, "https://env-store.myshopify.com");
    std::env::set_var(API_KEY_VAR, "shpat-from-env");

    let config = StoreConfig::from_env();

    assert_eq!(config.host().as_ref(), "https://env-store.myshopify.com");
    assert_eq!(config.access_token().as_ref(), "shpat-from-env");

    std::env::remove_var(HOSTNAME_VAR);
    std::env::remove_var(API_KEY_VAR);

    // Absent variables degrade to empty values, not errors.
    let config = StoreConfig::from_env();
    assert!(config.host().is_empty());
    assert_eq!(config.access_token().as_ref(), "");
}

// ============================================================================
// Endpoint table
// ============================================================================

#[test]
fn test_endpoint_table_shapes() {
    let config = StoreConfig::builder()
        .host(StoreHost::new("https://shop.example.com"))
        .access_token(AccessToken::new("token"))
        .build()
        .unwrap();
    let endpoints = Endpoints::new(&config);

    assert_eq!(
        endpoints.products_all(),
        "https://shop.example.com/admin/api/2023-07/products.json"
    );
    assert_eq!(
        endpoints.product("5"),
        "https://shop.example.com/admin/api/2023-07/products/5.json"
    );
    assert_eq!(
        endpoints.main_products(),
        "https://shop.example.com/admin/api/2023-10/collections/672049463622/products.json"
    );
    assert_eq!(
        endpoints.collections_all(),
        "https://shop.example.com/admin/api/2023-07/smart_collections.json"
    );
    assert_eq!(
        endpoints.collection("5"),
        "https://shop.example.com/admin/api/2023-07/smart_collections/5.json"
    );
    assert_eq!(
        endpoints.collection_products("5"),
        "https://shop.example.com/admin/api/2025-10/collections/5/products.json"
    );
}

#[test]
fn test_version_pins_match_endpoint_paths() {
    use storefront_catalog::endpoints::{
        COLLECTION_PRODUCTS_VERSION, LISTING_VERSION, MAIN_PRODUCTS_VERSION,
    };

    assert_eq!(LISTING_VERSION, ApiVersion::V2023_07);
    assert_eq!(MAIN_PRODUCTS_VERSION, ApiVersion::V2023_10);
    assert_eq!(COLLECTION_PRODUCTS_VERSION, ApiVersion::V2025_10);
}

#[test]
fn test_version_parses_from_path_segment() {
    let version: ApiVersion = "2023-10".parse().unwrap();
    assert_eq!(version, ApiVersion::V2023_10);
    assert_eq!(version.to_string(), "2023-10");
}
