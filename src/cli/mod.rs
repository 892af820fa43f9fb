//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; the route table dispatches to the GitHub
//! host and the tree core.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_add_report_json, format_add_report_text, format_contents_json, format_contents_text,
    format_repos_json, format_repos_table,
};
pub use route::RunContext;
