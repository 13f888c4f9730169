use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Overview statistics and risk distribution.
    Dashboard,
    /// Search, filter, sort, and page through records.
    List(ListArgs),
    /// One record with its observations and adverse outcome pathway.
    Get(GetArgs),
    /// Compare the potency of selected records.
    Compare(CompareArgs),
    /// Write a JSON snapshot or a CSV table.
    Export(ExportArgs),
}

/// Search, filter, and sort flags shared by `list` and `export --csv`.
#[derive(Clone, Debug, Default, Args)]
pub struct QueryArgs {
    /// Case-insensitive substring over the dataset's searchable fields
    #[arg(long)]
    pub search: Option<String>,

    /// Category label, or ALL
    #[arg(long)]
    pub category: Option<String>,

    /// Sort key: name, value, created
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort order: asc, desc
    #[arg(long)]
    pub order: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to general.page_size)
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct GetArgs {
    /// Record id
    pub id: String,

    /// Ask the AI service for a short risk assessment
    #[arg(long)]
    pub summary: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CompareArgs {
    /// Record ids, in display order
    pub ids: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Write the record table as CSV instead of a JSON snapshot
    #[arg(long)]
    pub csv: bool,

    /// With --csv, write the observation table instead of the record table
    #[arg(long, requires = "csv")]
    pub observations: bool,

    #[command(flatten)]
    pub query: QueryArgs,

    /// Output directory (defaults to the current directory)
    #[arg(long)]
    pub out: Option<String>,
}
