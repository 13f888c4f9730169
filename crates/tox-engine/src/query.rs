//! Search, category filter, stable sort, and pagination over records.
//!
//! Stages always run in the same order: search, then category filter, then
//! sort, then pagination. Every stage is total: bad input yields an empty
//! page, never an error.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tox_core::entities::ChemicalRecord;
use tox_core::enums::{Category, DatasetVariant};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// A text field a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Name,
    AlternateName,
    Code,
}

impl TextField {
    fn read(self, record: &ChemicalRecord) -> Option<&str> {
        match self {
            Self::Name => Some(record.name.as_str()),
            Self::AlternateName => record.alternate_name.as_deref(),
            Self::Code => record.code.as_deref(),
        }
    }

    /// Fields searched for a dataset: name and CAS number for pollutants,
    /// name and IUPAC name for LD50 rows.
    #[must_use]
    pub fn defaults_for(dataset: DatasetVariant) -> Vec<Self> {
        match dataset {
            DatasetVariant::Pollutants => vec![Self::Name, Self::Code],
            DatasetVariant::Ld50 => vec![Self::Name, Self::AlternateName],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Value,
    #[serde(rename = "created", alias = "created_at")]
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Category filter; `All` is the "no filter" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter value. `"ALL"` (any case) means no filter.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        Category::from_label(raw).map(Self::Only)
    }

    fn admits(self, record: &ChemicalRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => record.category == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// Case-insensitive substring, matched as given; only the empty string
    /// matches everything.
    pub search: String,
    pub search_fields: Vec<TextField>,
    pub category: CategoryFilter,
    /// `None` keeps input order.
    pub sort_field: Option<SortField>,
    pub sort_order: SortOrder,
    /// 1-based.
    pub page_index: usize,
    pub page_size: usize,
}

impl QueryOptions {
    /// The LD50 table starts sorted by toxicity value, ascending; the
    /// pollutant directory keeps input order.
    #[must_use]
    pub fn for_dataset(dataset: DatasetVariant, page_size: usize) -> Self {
        Self {
            search: String::new(),
            search_fields: TextField::defaults_for(dataset),
            category: CategoryFilter::All,
            sort_field: match dataset {
                DatasetVariant::Pollutants => None,
                DatasetVariant::Ld50 => Some(SortField::Value),
            },
            sort_order: SortOrder::Ascending,
            page_index: 1,
            page_size,
        }
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Matches before pagination.
    pub total: usize,
    pub page_index: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// 1-based inclusive bounds for "Showing a-b of n", or `None` when the
    /// page is empty.
    #[must_use]
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page_index - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }
}

// ---------------------------------------------------------------------------
// query
// ---------------------------------------------------------------------------

/// Run all query stages over `records`.
#[must_use]
pub fn query(records: &[ChemicalRecord], options: &QueryOptions) -> Page<ChemicalRecord> {
    let needle = options.search.to_lowercase();

    let mut matched: Vec<&ChemicalRecord> = records
        .iter()
        .filter(|record| matches_search(record, &needle, &options.search_fields))
        .filter(|record| options.category.admits(record))
        .collect();

    if let Some(field) = options.sort_field {
        // `sort_by` is stable: equal keys keep their filtered order.
        matched.sort_by(|a, b| compare_records(a, b, field, options.sort_order));
    }

    let page_size = options.page_size.max(1);
    let page_index = options.page_index.max(1);
    let total = matched.len();
    let start = (page_index - 1).saturating_mul(page_size);

    let items = matched
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Page {
        items,
        total,
        page_index,
        page_size,
        total_pages: total.div_ceil(page_size),
    }
}

fn matches_search(record: &ChemicalRecord, needle: &str, fields: &[TextField]) -> bool {
    needle.is_empty()
        || fields.iter().any(|field| {
            field
                .read(record)
                .is_some_and(|text| text.to_lowercase().contains(needle))
        })
}

/// Present keys compare by `order`; a missing key sorts after every present
/// one regardless of direction.
fn compare_records(
    a: &ChemicalRecord,
    b: &ChemicalRecord,
    field: SortField,
    order: SortOrder,
) -> Ordering {
    let ordered = |ordering: Ordering| match order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    };
    match field {
        SortField::Name => ordered(a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortField::Value => {
            missing_last(a.toxicity_value, b.toxicity_value, |x, y| ordered(x.total_cmp(&y)))
        }
        SortField::CreatedAt => {
            missing_last(a.created_at, b.created_at, |x, y| ordered(x.cmp(&y)))
        }
    }
}

fn missing_last<K>(a: Option<K>, b: Option<K>, present: impl Fn(K, K) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => present(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// QueryState
// ---------------------------------------------------------------------------

/// Interactive query state for a list view.
///
/// Changing the search term, the category filter, or the sort sends the
/// view back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    options: QueryOptions,
    total_pages: usize,
}

impl QueryState {
    #[must_use]
    pub const fn new(options: QueryOptions) -> Self {
        Self {
            options,
            total_pages: 1,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &QueryOptions {
        &self.options
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.options.search = term.into();
        self.options.page_index = 1;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.options.category = category;
        self.options.page_index = 1;
    }

    pub fn set_sort(&mut self, field: SortField, order: SortOrder) {
        self.options.sort_field = Some(field);
        self.options.sort_order = order;
        self.options.page_index = 1;
    }

    /// Flip the order when `field` is already the sort key, otherwise sort
    /// by `field` ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        let order = if self.options.sort_field == Some(field) {
            self.options.sort_order.flipped()
        } else {
            SortOrder::Ascending
        };
        self.set_sort(field, order);
    }

    /// Move to `page`, clamped into `[1, total_pages]` of the last run.
    pub fn set_page(&mut self, page: usize) {
        self.options.page_index = page.clamp(1, self.total_pages.max(1));
    }

    /// Run the query and remember the page count for [`Self::set_page`].
    pub fn run(&mut self, records: &[ChemicalRecord]) -> Page<ChemicalRecord> {
        let page = query(records, &self.options);
        self.total_pages = page.total_pages;
        page
    }
}
