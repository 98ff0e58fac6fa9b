// Negotiation pack: raise recommendation, scripted templates, three-year
// projection, and the risk-of-staying heuristic.

pub mod handlers;
pub mod models;
pub mod pack;
pub mod templates;
