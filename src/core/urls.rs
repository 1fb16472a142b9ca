//! Named-route reversal for canonical URLs.
//!
//! Routes are registered as `name -> pattern` pairs where the pattern contains
//! `<param>` placeholders, e.g. `/store/products/<pk>/`. Reversing a route
//! substitutes every placeholder from the supplied parameters.

use crate::errors::{Error, Result};
use std::collections::HashMap;

/// Route name for a single product's detail page
pub const PRODUCT_DETAIL_ROUTE: &str = "store:product-detail";

const PRODUCT_DETAIL_PATTERN: &str = "/store/products/<pk>/";

/// Resolves route names to concrete URL paths.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    routes: HashMap<String, String>,
}

impl Default for UrlResolver {
    fn default() -> Self {
        let mut routes = HashMap::new();
        routes.insert(
            PRODUCT_DETAIL_ROUTE.to_string(),
            PRODUCT_DETAIL_PATTERN.to_string(),
        );
        Self { routes }
    }
}

impl UrlResolver {
    /// Builds a resolver from the default routes, overridden by `overrides`.
    #[must_use]
    pub fn with_routes(overrides: &HashMap<String, String>) -> Self {
        let mut resolver = Self::default();
        for (name, pattern) in overrides {
            resolver.register(name, pattern);
        }
        resolver
    }

    /// Registers or replaces a route pattern.
    pub fn register(&mut self, name: &str, pattern: &str) {
        self.routes.insert(name.to_string(), pattern.to_string());
    }

    /// Reverses `name` into a URL path using `params` for its placeholders.
    ///
    /// # Errors
    /// Returns [`Error::NoReverseMatch`] if the route is unknown, a placeholder
    /// has no matching parameter, or the pattern has an unterminated placeholder.
    pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let no_match = |reason: String| Error::NoReverseMatch {
            route: name.to_string(),
            reason,
        };

        let pattern = self
            .routes
            .get(name)
            .ok_or_else(|| no_match("no route registered under this name".to_string()))?;

        let mut url = String::with_capacity(pattern.len());
        let mut rest = pattern.as_str();

        while let Some(start) = rest.find('<') {
            url.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after
                .find('>')
                .ok_or_else(|| no_match(format!("unterminated placeholder in '{pattern}'")))?;
            let key = &after[..end];
            let value = params
                .iter()
                .find(|(param, _)| *param == key)
                .map(|(_, value)| *value)
                .ok_or_else(|| no_match(format!("missing parameter '{key}'")))?;
            url.push_str(value);
            rest = &after[end + 1..];
        }
        url.push_str(rest);

        Ok(url)
    }
}
