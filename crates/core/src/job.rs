//! Job listing rules: sort keys, date filters, pagination, and schedule checks.
//!
//! The repository turns a [`JobListQuery`] into SQL; everything here is
//! input checking that can be unit tested without a database.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Page size used when `page` is given without `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Upper bound for a caller-supplied `limit`.
pub const MAX_PAGE_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Column a job listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobSortField {
    Name,
    Customer,
    #[default]
    StartDate,
    EndDate,
    Status,
}

impl JobSortField {
    /// Parse a `sort_by` query value. `None` selects the default (`start_date`).
    ///
    /// The camelCase spellings (`startDate`, `endDate`) are accepted as aliases.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw {
            None => Ok(Self::default()),
            Some("name") => Ok(Self::Name),
            Some("customer") => Ok(Self::Customer),
            Some("start_date" | "startDate") => Ok(Self::StartDate),
            Some("end_date" | "endDate") => Ok(Self::EndDate),
            Some("status" | "status_id") => Ok(Self::Status),
            Some(other) => Err(CoreError::Validation(format!(
                "Invalid sort field '{other}'. Use one of: name, customer, start_date, end_date, status"
            ))),
        }
    }

    /// The `jobs` column this field orders by.
    pub fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Customer => "customer",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::Status => "status_id",
        }
    }
}

/// Direction of a job listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a `sort_order` query value. `None` selects ascending.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        match raw {
            None | Some("asc") => Ok(Self::Asc),
            Some("desc") => Ok(Self::Desc),
            Some(other) => Err(CoreError::Validation(format!(
                "Invalid sort order '{other}'. Use 'asc' or 'desc'"
            ))),
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// A resolved `LIMIT` / `OFFSET` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Resolve 1-based `page` and `limit` query values.
///
/// Returns `None` when neither is given, meaning "all rows".
pub fn resolve_page(page: Option<i64>, limit: Option<i64>) -> Result<Option<Page>, CoreError> {
    if page.is_none() && limit.is_none() {
        return Ok(None);
    }
    let page = page.unwrap_or(1);
    if page < 1 {
        return Err(CoreError::Validation(
            "page must be greater than or equal to 1".to_string(),
        ));
    }
    let limit = clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    Ok(Some(Page {
        limit,
        offset: (page - 1).saturating_mul(limit),
    }))
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// A listing window must be non-empty: `start_after` strictly before `end_before`.
pub fn validate_date_filter(
    start_after: Option<NaiveDate>,
    end_before: Option<NaiveDate>,
) -> Result<(), CoreError> {
    match (start_after, end_before) {
        (Some(after), Some(before)) if after >= before => Err(CoreError::Validation(
            "start_after must be before end_before".to_string(),
        )),
        _ => Ok(()),
    }
}

/// A job may not end before it starts. Equal dates are a one-day job.
pub fn validate_schedule(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<(), CoreError> {
    match (start_date, end_date) {
        (Some(start), Some(end)) if end < start => Err(CoreError::Validation(
            "end_date must not be before start_date".to_string(),
        )),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Exact-match and range filters for a job listing. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub name: Option<String>,
    pub customer: Option<String>,
    pub start_after: Option<NaiveDate>,
    pub end_before: Option<NaiveDate>,
    pub status_id: Option<i16>,
}

/// A fully checked job listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobListQuery {
    pub filter: JobFilter,
    pub sort_by: JobSortField,
    pub sort_order: SortOrder,
    pub page: Option<Page>,
}

impl JobListQuery {
    /// Check and resolve the raw query-string values of a listing request.
    pub fn from_raw(
        filter: JobFilter,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Self, CoreError> {
        validate_date_filter(filter.start_after, filter.end_before)?;
        Ok(Self {
            filter,
            sort_by: JobSortField::parse(sort_by)?,
            sort_order: SortOrder::parse(sort_order)?,
            page: resolve_page(page, limit)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -- sorting -------------------------------------------------------------

    #[test]
    fn sort_field_defaults_to_start_date() {
        assert_eq!(JobSortField::parse(None).unwrap(), JobSortField::StartDate);
    }

    #[test]
    fn sort_field_accepts_camel_case_aliases() {
        assert_eq!(
            JobSortField::parse(Some("endDate")).unwrap(),
            JobSortField::EndDate
        );
        assert_eq!(
            JobSortField::parse(Some("startDate")).unwrap().column(),
            "start_date"
        );
    }

    #[test]
    fn sort_field_rejects_unknown_column() {
        let err = JobSortField::parse(Some("id; DROP TABLE jobs")).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn status_sorts_by_status_id_column() {
        assert_eq!(JobSortField::Status.column(), "status_id");
    }

    #[test]
    fn sort_order_parses_asc_and_desc() {
        assert_eq!(SortOrder::parse(None).unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("desc")).unwrap().as_sql(), "DESC");
        assert!(SortOrder::parse(Some("DESC")).is_err());
    }

    // -- pagination ----------------------------------------------------------

    #[test]
    fn no_page_or_limit_means_all_rows() {
        assert_eq!(resolve_page(None, None).unwrap(), None);
    }

    #[test]
    fn page_without_limit_uses_default_size() {
        let page = resolve_page(Some(3), None).unwrap().unwrap();
        assert_eq!(page.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(page.offset, 2 * DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(resolve_page(None, Some(0)).unwrap().unwrap().limit, 1);
        assert_eq!(
            resolve_page(None, Some(10_000)).unwrap().unwrap().limit,
            MAX_PAGE_LIMIT
        );
    }

    #[test]
    fn page_zero_is_rejected() {
        assert!(resolve_page(Some(0), Some(10)).is_err());
    }

    // -- dates ---------------------------------------------------------------

    #[test]
    fn date_filter_requires_start_before_end() {
        assert!(validate_date_filter(Some(date(2024, 5, 1)), Some(date(2024, 6, 1))).is_ok());
        assert!(validate_date_filter(Some(date(2024, 6, 1)), Some(date(2024, 6, 1))).is_err());
        assert!(validate_date_filter(Some(date(2024, 7, 1)), Some(date(2024, 6, 1))).is_err());
        assert!(validate_date_filter(None, Some(date(2024, 6, 1))).is_ok());
    }

    #[test]
    fn schedule_allows_single_day_jobs() {
        let d = date(2024, 3, 10);
        assert!(validate_schedule(Some(d), Some(d)).is_ok());
        assert!(validate_schedule(Some(d), Some(date(2024, 3, 9))).is_err());
        assert!(validate_schedule(None, Some(d)).is_ok());
    }

    // -- query ---------------------------------------------------------------

    #[test]
    fn from_raw_propagates_every_check() {
        let filter = JobFilter {
            start_after: Some(date(2024, 1, 2)),
            end_before: Some(date(2024, 1, 1)),
            ..JobFilter::default()
        };
        assert!(JobListQuery::from_raw(filter, None, None, None, None).is_err());
        assert!(
            JobListQuery::from_raw(JobFilter::default(), Some("bogus"), None, None, None).is_err()
        );
        assert!(
            JobListQuery::from_raw(JobFilter::default(), None, Some("up"), None, None).is_err()
        );
    }

    #[test]
    fn from_raw_defaults() {
        let query = JobListQuery::from_raw(JobFilter::default(), None, None, None, None).unwrap();
        assert_eq!(query, JobListQuery::default());
    }
}
