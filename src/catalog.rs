//! Endpoint catalog - the immutable, ordered list of requests the user picks from.
//!
//! Sourced from `$RESTTEST_CATALOG`, then `~/.resttest/endpoints.yaml`, then the
//! built-in list.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::constants::{CATALOG_ENV_VAR, CATALOG_FILE, CONFIG_DIR};
use crate::error::{CatalogError, LaunchError};
use crate::messages::ResolvedRequest;
use crate::models::{EndpointDefinition, HttpMethod};

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([^{}/]+)\}").expect("placeholder regex is valid"))
}

#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    endpoints: Vec<EndpointDefinition>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists and duplicated path parameter names
    pub fn new(endpoints: Vec<EndpointDefinition>) -> Result<Self, CatalogError> {
        if endpoints.is_empty() {
            return Err(CatalogError::Empty);
        }

        for ep in &endpoints {
            if ep.url.trim().is_empty() {
                return Err(CatalogError::Invalid {
                    endpoint: ep.name.clone(),
                    reason: "url is empty".to_string(),
                });
            }
            let mut seen = HashSet::new();
            for name in &ep.path_params {
                if !seen.insert(name.as_str()) {
                    return Err(CatalogError::Invalid {
                        endpoint: ep.name.clone(),
                        reason: format!("path parameter `{}` listed twice", name),
                    });
                }
            }
        }

        Ok(Catalog { endpoints })
    }

    /// The list used when no catalog file is configured
    pub fn builtin() -> Self {
        Catalog {
            endpoints: vec![
                EndpointDefinition::new(
                    "get todo 1",
                    HttpMethod::GET,
                    "https://jsonplaceholder.typicode.com/todos/1",
                ),
                EndpointDefinition::new(
                    "get todo 101",
                    HttpMethod::GET,
                    "https://jsonplaceholder.typicode.com/todos/101",
                ),
                EndpointDefinition::new(
                    "get todo by id",
                    HttpMethod::GET,
                    "https://jsonplaceholder.typicode.com/todos/{id}",
                )
                .with_path_param("id")
                .with_binding("id", "22"),
            ],
        }
    }

    /// Parse a YAML list of endpoint definitions
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let endpoints: Vec<EndpointDefinition> =
            serde_yaml::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(endpoints)
    }

    /// Resolve the catalog source for this process.
    ///
    /// A file named by the environment variable must load. A file at the
    /// default location that fails to load only produces a warning.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CATALOG_ENV_VAR) {
            let path = PathBuf::from(path);
            let catalog = Self::from_file(&path)
                .with_context(|| format!("loading catalog named by {}", CATALOG_ENV_VAR))?;
            tracing::info!(path = %path.display(), endpoints = catalog.len(), "Loaded catalog");
            return Ok(catalog);
        }

        if let Some(path) = default_catalog_path().filter(|p| p.exists()) {
            match Self::from_file(&path) {
                Ok(catalog) => {
                    tracing::info!(path = %path.display(), endpoints = catalog.len(), "Loaded catalog");
                    return Ok(catalog);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring catalog file, using built-in list");
                }
            }
        }

        Ok(Self::builtin())
    }

    pub fn get(&self, index: usize) -> Option<&EndpointDefinition> {
        self.endpoints.get(index)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EndpointDefinition> {
        self.endpoints.iter()
    }
}

/// `~/.resttest/endpoints.yaml`
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CATALOG_FILE))
}

/// Placeholder names in a URL template, in order of appearance
pub fn placeholders(template: &str) -> Vec<&str> {
    placeholder_re()
        .captures_iter(template)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

/// Substitute bound path parameters into the endpoint's URL.
///
/// Fails on the first placeholder without a binding; nothing is sent in that case.
pub fn resolve(endpoint: &EndpointDefinition) -> Result<ResolvedRequest, LaunchError> {
    if let Some(missing) = placeholders(&endpoint.url)
        .into_iter()
        .find(|name| !endpoint.params.contains_key(*name))
    {
        return Err(LaunchError::UnresolvedPathParameter {
            endpoint: endpoint.name.clone(),
            name: missing.to_string(),
        });
    }

    let url = placeholder_re()
        .replace_all(&endpoint.url, |caps: &regex::Captures| {
            endpoint.params[&caps[1]].clone()
        })
        .into_owned();

    Ok(ResolvedRequest {
        method: endpoint.method,
        url,
        query: endpoint
            .query
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        body: endpoint.body.clone().filter(|_| endpoint.method.has_body()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resolve_substitutes_bound_params() {
        let ep = EndpointDefinition::new("todo", HttpMethod::GET, "https://api.test/todos/{id}/items/{item}")
            .with_path_param("id")
            .with_path_param("item")
            .with_binding("id", "7")
            .with_binding("item", "3");
        let resolved = resolve(&ep).unwrap();
        assert_eq!(resolved.url, "https://api.test/todos/7/items/3");
        assert_eq!(resolved.method, HttpMethod::GET);
    }

    #[test]
    fn test_resolve_rejects_unbound_placeholder() {
        let ep = EndpointDefinition::new("todo", HttpMethod::GET, "/todos/{id}").with_path_param("id");
        let err = resolve(&ep).unwrap_err();
        assert_eq!(
            err,
            LaunchError::UnresolvedPathParameter {
                endpoint: "todo".to_string(),
                name: "id".to_string(),
            }
        );
    }

    #[test]
    fn test_hyphenated_placeholder_is_resolved_or_rejected() {
        let ep = EndpointDefinition::new("user", HttpMethod::GET, "https://api.test/users/{user-id}")
            .with_path_param("user-id");
        assert_eq!(
            resolve(&ep).unwrap_err(),
            LaunchError::UnresolvedPathParameter {
                endpoint: "user".to_string(),
                name: "user-id".to_string(),
            }
        );

        let bound = ep.with_binding("user-id", "7");
        assert_eq!(resolve(&bound).unwrap().url, "https://api.test/users/7");
        assert_eq!(placeholders("/a/{user-id}/b/{x.y}"), vec!["user-id", "x.y"]);
    }

    #[test]
    fn test_body_only_sent_for_methods_with_body() {
        let mut get = EndpointDefinition::new("get", HttpMethod::GET, "https://api.test/x");
        get.body = Some("{}".to_string());
        let mut post = get.clone();
        post.method = HttpMethod::POST;

        assert_eq!(resolve(&get).unwrap().body, None);
        assert_eq!(resolve(&post).unwrap().body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_builtin_catalog_resolves() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 3);
        for ep in catalog.iter() {
            assert!(resolve(ep).is_ok(), "{} should resolve", ep.name);
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_duplicate_path_param_rejected() {
        let ep = EndpointDefinition::new("dup", HttpMethod::GET, "/a/{id}")
            .with_path_param("id")
            .with_path_param("id");
        assert!(matches!(Catalog::new(vec![ep]), Err(CatalogError::Invalid { .. })));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
- name: list todos
  method: get
  url: https://api.test/todos
  query:
    _limit: "5"
- name: create todo
  method: POST
  url: https://api.test/users/{{user}}/todos
  path_params: [user]
  params:
    user: "1"
  body: '{{"title":"x"}}'
"#
        )
        .unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let list = catalog.get(0).unwrap();
        assert_eq!(list.method, HttpMethod::GET);
        assert_eq!(list.query.get("_limit").map(String::as_str), Some("5"));

        let create = catalog.get(1).unwrap();
        assert_eq!(create.path_params, vec!["user".to_string()]);
        let resolved = resolve(create).unwrap();
        assert_eq!(resolved.url, "https://api.test/users/1/todos");
        assert_eq!(resolved.body.as_deref(), Some(r#"{"title":"x"}"#));
    }

    #[test]
    fn test_from_file_bad_method() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "- name: x\n  method: PATCH\n  url: /x\n").unwrap();
        assert!(matches!(
            Catalog::from_file(file.path()),
            Err(CatalogError::Parse { .. })
        ));
    }
}
