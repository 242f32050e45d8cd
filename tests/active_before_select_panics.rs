//! Registry lifecycle: reading before selection is a programming error
//!
//! Runs in its own process; see select_then_active.rs.

use linc_core::chain::active;

#[test]
#[should_panic(expected = "before selection")]
fn active_without_select_aborts() {
    let _ = active();
}
