//! Rendering of fatal errors.

use ghdump_core::cmdutil::is_user_cancellation;
use ghdump_core::ios_eprintln;
use ghdump_core::iostreams::IOStreams;
use tracing::debug;

/// Print a fatal error to stderr with the error marker.
///
/// Only the outermost message is shown; the full cause chain goes to the
/// debug log. Cancellation prints nothing.
pub fn report_error(ios: &IOStreams, err: &anyhow::Error) {
    debug!("{err:#}");
    if is_user_cancellation(err) {
        return;
    }
    let cs = ios.color_scheme();
    ios_eprintln!(ios);
    ios_eprintln!(ios, "{} {}", cs.error_icon(), cs.error(&err.to_string()));
}
