//! Registry lifecycle: selecting twice is a programming error
//!
//! Runs in its own process; see select_then_active.rs.

use linc_core::chain::select;

#[test]
#[should_panic(expected = "already selected")]
fn second_select_aborts() {
    select("main").expect("main is a known network");
    // A second selection must abort, even for the same network
    let _ = select("main");
}
