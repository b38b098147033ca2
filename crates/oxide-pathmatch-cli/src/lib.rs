//! Support code for the `pathmatch` command-line tool.

pub mod error;
pub mod routes_file;

pub use error::{CliError, Result};
pub use routes_file::{
    check_payload_fields, check_routes, load_routes, parse_routes, report_check, RouteEntry,
    RouteTable,
};
