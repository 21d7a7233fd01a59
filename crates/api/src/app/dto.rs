use axum::http::StatusCode;
use serde::Deserialize;

use dromed_inventory::{RecordFilter, StockThresholds};

use crate::app::errors;

// -------------------------
// Query DTOs
// -------------------------

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub item: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub location: Option<String>,
}

impl From<FilterQuery> for RecordFilter {
    fn from(q: FilterQuery) -> Self {
        RecordFilter {
            category: q.category,
            supplier: q.supplier,
            location: q.location,
        }
    }
}

/// Raw strings so malformed numbers get a JSON 400 instead of the extractor's plain-text one.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 10;

impl PaginationQuery {
    /// Parsed `(page, per_page)`; zero is left for the pager to reject.
    pub fn parse(&self) -> Result<(usize, usize), axum::response::Response> {
        let parse = |raw: &Option<String>, default: usize| match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(default),
            Some(v) => v.parse::<usize>().map_err(|_| {
                errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_pagination",
                    "Invalid input for page or per_page",
                )
            }),
        };
        Ok((parse(&self.page, DEFAULT_PAGE)?, parse(&self.per_page, DEFAULT_PER_PAGE)?))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ThresholdQuery {
    pub critical_days: Option<String>,
    pub warning_days: Option<String>,
}

impl ThresholdQuery {
    /// `None` when neither bound is given; a single bound keeps the other default.
    pub fn parse(&self, defaults: StockThresholds) -> Result<Option<StockThresholds>, axum::response::Response> {
        if self.critical_days.is_none() && self.warning_days.is_none() {
            return Ok(None);
        }

        let parse = |raw: &Option<String>, name: &str, default: f64| match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(default),
            Some(v) => v.parse::<f64>().map_err(|_| {
                errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_threshold",
                    format!("{name} must be a number"),
                )
            }),
        };

        let critical = parse(&self.critical_days, "critical_days", defaults.critical_days())?;
        let warning = parse(&self.warning_days, "warning_days", defaults.warning_days())?;
        StockThresholds::new(critical, warning)
            .map(Some)
            .map_err(errors::domain_error_to_response)
    }
}
