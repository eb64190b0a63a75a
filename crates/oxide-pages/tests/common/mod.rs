#![allow(dead_code)]

use oxide_pages::{
    LegacyRouteRedirectStrategy, ResolvedRoute, RouteError, RouteTree, RouterConfig,
};

pub fn tree(routes: &[&str]) -> RouteTree<String> {
    tree_with(RouterConfig::default(), routes)
}

pub fn legacy_tree(strategy: LegacyRouteRedirectStrategy, routes: &[&str]) -> RouteTree<String> {
    tree_with(RouterConfig::new().legacy_routes(strategy), routes)
}

/// Registers each route with its own pattern as data.
pub fn tree_with(config: RouterConfig, routes: &[&str]) -> RouteTree<String> {
    let mut tree = RouteTree::with_config(config);
    for route in routes {
        tree.register(route, (*route).to_string())
            .unwrap_or_else(|e| panic!("Failed to register: {route}\nError: {e}"));
    }
    tree
}

pub fn register_err(tree: &mut RouteTree<String>, route: &str) -> RouteError {
    tree.register(route, route.to_string())
        .expect_err(&format!("Expected registration error for: {route}"))
}

pub fn resolve<'a>(tree: &'a RouteTree<String>, path: &str) -> ResolvedRoute<'a, String> {
    tree.resolve(path, true)
        .unwrap_or_else(|| panic!("Expected {path} to resolve"))
}

pub fn params(resolved: &ResolvedRoute<'_, String>) -> Vec<(String, String)> {
    resolved
        .params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}
