//! Turning `--search`/`--category`/`--sort`/`--order` into query options.

use tox_core::enums::DatasetVariant;
use tox_engine::query::{QueryOptions, SortField, SortOrder};

use crate::cli::root_commands::QueryArgs;
use crate::commands::shared::parse::{parse_category, parse_enum};

/// Start from the dataset's defaults and apply the flags that were given.
///
/// `--order` without `--sort` reverses the dataset's default sort; when the
/// dataset has none it is ignored.
pub fn query_options(
    args: &QueryArgs,
    dataset: DatasetVariant,
    page_size: usize,
) -> anyhow::Result<QueryOptions> {
    let mut options = QueryOptions::for_dataset(dataset, page_size);

    if let Some(search) = &args.search {
        options.search.clone_from(search);
    }
    if let Some(raw) = &args.category {
        options.category = parse_category(raw)?;
    }
    if let Some(raw) = &args.order {
        options.sort_order = parse_enum::<SortOrder>(raw, "order")?;
    }
    if let Some(raw) = &args.sort {
        options.sort_field = Some(parse_enum::<SortField>(raw, "sort")?);
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tox_core::enums::DatasetVariant;
    use tox_engine::query::{CategoryFilter, SortField, SortOrder};

    use super::query_options;
    use crate::cli::root_commands::QueryArgs;

    #[test]
    fn defaults_follow_the_dataset() {
        let args = QueryArgs::default();
        let ld50 = query_options(&args, DatasetVariant::Ld50, 20).expect("options");
        assert_eq!(ld50.sort_field, Some(SortField::Value));
        assert_eq!(ld50.sort_order, SortOrder::Ascending);

        let pollutants = query_options(&args, DatasetVariant::Pollutants, 20).expect("options");
        assert_eq!(pollutants.sort_field, None);
        assert_eq!(pollutants.category, CategoryFilter::All);
    }

    #[test]
    fn sort_flag_overrides_the_ld50_default() {
        let args = QueryArgs {
            sort: Some("name".into()),
            order: Some("desc".into()),
            ..QueryArgs::default()
        };
        let options = query_options(&args, DatasetVariant::Ld50, 20).expect("options");
        assert_eq!(options.sort_field, Some(SortField::Name));
        assert_eq!(options.sort_order, SortOrder::Descending);
    }

    #[test]
    fn order_alone_reverses_the_default_sort() {
        let args = QueryArgs {
            order: Some("desc".into()),
            ..QueryArgs::default()
        };
        let options = query_options(&args, DatasetVariant::Ld50, 20).expect("options");
        assert_eq!(options.sort_field, Some(SortField::Value));
        assert_eq!(options.sort_order, SortOrder::Descending);
    }

    #[test]
    fn unknown_values_are_rejected() {
        let bad_sort = QueryArgs {
            sort: Some("potency".into()),
            ..QueryArgs::default()
        };
        assert!(query_options(&bad_sort, DatasetVariant::Ld50, 20).is_err());

        let bad_order = QueryArgs {
            order: Some("sideways".into()),
            ..QueryArgs::default()
        };
        assert!(query_options(&bad_order, DatasetVariant::Pollutants, 20).is_err());
    }
}
