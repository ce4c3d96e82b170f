//! Pure algorithms behind the session board: the per-session statistics
//! reduction, the generic finite-extent windowing primitive (instantiated
//! once per lane for rows and once for the board's columns), and the brush
//! predicate. No I/O happens here.

mod brush;
mod stats;
mod window;

pub use brush::{record_has_error, record_is_active};
pub use stats::aggregate_records;
pub use window::{
    COLUMN_OVERSCAN, LANE_EXTENT, ROW_OVERSCAN, WindowItem, WindowPlan, plan_window,
};
