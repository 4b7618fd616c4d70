use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, register_counter, register_gauge};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("reqcount_requests_total", "Total number of requests").unwrap();
    pub static ref PERSIST_ERRORS: Counter = register_counter!(
        "reqcount_persist_errors_total",
        "Total failed timestamp log writes"
    )
    .unwrap();
    pub static ref WINDOW_COUNT: Gauge = register_gauge!(
        "reqcount_requests_in_window",
        "Requests counted in the current window"
    )
    .unwrap();
}
