//! Output helpers
//!
//! Envelopes go to stdout as JSON; the one-line provenance summary goes
//! to stderr so the JSON stays pipeable.

use anyhow::Result;
use console::style;
use folio_core::{ContentKind, FetchResult, HomepageBundle, Source};
use serde::Serialize;

/// Prints any serializable value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

/// Prints where one envelope's data came from.
pub fn provenance<T>(kind: ContentKind, result: &FetchResult<T>) {
    let source = match result.source() {
        Source::Primary => style("primary").green(),
        Source::Secondary => style("secondary").yellow(),
        Source::Fallback => style("fallback").red(),
    };
    match result.error() {
        Some(error) => eprintln!("{} {} ({})", style(kind).bold(), source, style(error).dim()),
        None => eprintln!("{} {}", style(kind).bold(), source),
    }
}

/// Prints provenance for each bundle slot.
pub fn bundle_provenance(bundle: &HomepageBundle) {
    provenance(ContentKind::Homepage, &bundle.homepage);
    provenance(ContentKind::ProjectList, &bundle.projects);
    provenance(ContentKind::PostList, &bundle.posts);
}
