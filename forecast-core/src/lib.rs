//! forecast-core: Projection and reconciliation logic for recurring budget entries

pub mod model;
pub mod project;
pub mod reconcile;
pub mod step;
pub mod sweep;
pub mod twice_monthly;
pub mod window;

pub use model::{
    FORECAST_MARKER, AUTOGEN_MEMO_PREFIX, ForecastRecord, Frequency, HistoryRecord,
    ScheduledEntry, SplitLine, payee_carries_marker,
};
pub use project::{Projection, SkipReason, SkippedTemplate, project};
pub use reconcile::{ReconcilePlan, Signature, existing_forecasts, reconcile};
pub use step::{CalendarStep, step_for};
pub use sweep::sweep;
pub use twice_monthly::twice_monthly_dates;
pub use window::ProjectionWindow;
