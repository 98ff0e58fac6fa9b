// Benchmark core: static reference tables, market-band resolution, and
// percentile/status computation. Pure and synchronous — the handlers are
// the only async code in this module.

pub mod calculator;
pub mod handlers;
pub mod models;
pub mod reference;
