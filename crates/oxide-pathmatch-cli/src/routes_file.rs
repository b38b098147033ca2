//! Loading route tables from JSON files.
//!
//! A routes file is a JSON array of objects. Each object needs a `route`
//! pattern; every other field is kept as the route's payload:
//!
//! ```json
//! [
//!   {"route": "/", "view": "home"},
//!   {"route": "/users/:id", "view": "profile"},
//!   {"route": "*", "view": "not-found"}
//! ]
//! ```

use std::path::Path;

use oxide_pathmatch::{RoutePattern, Router, RouterError};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{CliError, Result};

/// A route whose payload is the remaining JSON fields.
pub type RouteEntry = RoutePattern<Map<String, Value>>;

/// A route table loaded from a file.
pub type RouteTable = Router<Map<String, Value>>;

/// Keys a match result writes next to the payload.
const RESERVED_FIELDS: [&str; 4] = ["params", "query", "pathname", "path"];

/// Reads and parses a routes file.
pub fn load_routes(path: &Path) -> Result<RouteTable> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_routes(&contents).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    check_payload_fields(&table)?;
    debug!(path = %path.display(), routes = table.len(), "loaded route table");
    Ok(table)
}

/// Parses a route table from JSON text.
pub fn parse_routes(json: &str) -> std::result::Result<RouteTable, serde_json::Error> {
    let entries: Vec<RouteEntry> = serde_json::from_str(json)?;
    Ok(entries.into_iter().collect())
}

/// Rejects payload fields that would collide with match result keys.
pub fn check_payload_fields(table: &RouteTable) -> Result<()> {
    for route in table.routes() {
        if let Some(field) = RESERVED_FIELDS
            .iter()
            .find(|field| route.payload().contains_key(**field))
        {
            return Err(CliError::ReservedField {
                route: route.pattern().to_string(),
                field: (*field).to_string(),
            });
        }
    }
    Ok(())
}

/// Validates every route, collecting all problems instead of stopping at
/// the first.
pub fn check_routes(table: &RouteTable) -> Result<()> {
    let errors: Vec<RouterError> = table
        .routes()
        .iter()
        .filter_map(|route| route.validate().err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CliError::InvalidRoutes(errors))
    }
}

/// Logs every validation problem once and reports whether the table is
/// clean.
pub fn report_check(table: &RouteTable) -> bool {
    match check_routes(table) {
        Ok(()) => true,
        Err(err) => {
            warn!("{err}");
            false
        }
    }
}
