/*! Integration tests for tikzplot.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - value: Coercion of host data into typed values
 * - options: Ordered option lists and argument merging
 * - element: The element tree and its serialization
 * - composite: Error bands, violins and the override protocol
 * - escape: Escaping of reserved markup characters
 * - document: Standalone documents and their settings
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("tikzplot=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod composite;
mod document;
mod element;
mod helpers;
mod options;
mod value;
