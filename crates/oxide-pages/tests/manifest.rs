//! Tests for loading route manifests from disk.

use std::io::Write;

use oxide_pages::{LegacyRouteRedirectStrategy, RouteError, RouteManifest, RouteTree};

const SITE: &str = r#"{
    "config": { "legacy_routes": "warn", "max_redirects": 4 },
    "routes": [
        { "route": "/", "page": "Index" },
        { "route": "/blog/{...slug?}", "page": "Blog" },
        { "route": "/users/{user-id}/posts/{post}", "page": "Post" }
    ],
    "redirects": [
        { "from": "/articles/(.*)", "to": "/blog/$1" }
    ]
}"#;

fn write_manifest(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn load_manifest_from_file() {
    let file = write_manifest(SITE);
    let manifest = RouteManifest::load(file.path()).unwrap();

    assert_eq!(manifest.config.legacy_routes, LegacyRouteRedirectStrategy::Warn);
    assert_eq!(manifest.config.max_redirects, 4);
    assert_eq!(manifest.routes[1].page, "Blog");
    assert_eq!(manifest.redirects[0].from, "/articles/(.*)");
}

#[test]
fn manifest_tree_matches_direct_registration() {
    let manifest = RouteManifest::from_json(SITE).unwrap();
    let from_manifest = manifest.build().unwrap();

    let mut direct = RouteTree::with_config(manifest.config);
    for entry in &manifest.routes {
        direct.register(&entry.route, entry.page.clone()).unwrap();
    }
    direct.register_redirect("/articles/(.*)", "/blog/$1").unwrap();

    assert_eq!(from_manifest.routes(), direct.routes());
    for path in ["/", "/articles/", "/articles/rust/traits", "/users/1/posts/2"] {
        let expected = direct.resolve(path, true).map(|r| r.data.clone());
        let actual = from_manifest.resolve(path, true).map(|r| r.data.clone());
        assert_eq!(actual, expected, "{path}");
    }
    assert_eq!(
        from_manifest
            .resolve("/users/1/posts/2", true)
            .unwrap()
            .params
            .get("userId"),
        Some("1")
    );
}

#[test]
fn missing_manifest_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("routes.json");
    let err = RouteManifest::load(&path).unwrap_err();

    assert!(matches!(err, RouteError::ManifestRead { .. }));
    assert!(err.to_string().contains("routes.json"));
}

#[test]
fn malformed_manifest_file() {
    let file = write_manifest("{ \"routes\": [ { \"route\": \"/\" } ] }");
    assert!(matches!(
        RouteManifest::load(file.path()),
        Err(RouteError::ManifestParse(_))
    ));
}

#[test]
fn manifest_with_invalid_redirect() {
    let manifest = RouteManifest::from_json(
        r#"{ "redirects": [ { "from": "/a/(", "to": "/b" } ] }"#,
    )
    .unwrap();
    assert!(matches!(
        manifest.build(),
        Err(RouteError::InvalidRedirect(_))
    ));
}
