//! View-state flags shared by `render` and `export`

use clap::Args;

use crate::config::AppConfig;
use crate::domain::{Dataset, DomainError, GroupId, GroupState, ViewState};

#[derive(Args, Clone, Debug, Default)]
pub struct ViewArgs {
    /// Document path or http(s) URL (overrides config)
    #[arg(long)]
    pub source: Option<String>,

    /// Scoring metric
    #[arg(long)]
    pub metric: Option<String>,

    /// Sort column key, e.g. `__global___average`, `Retrieval_average` or a task id
    #[arg(long)]
    pub sort: Option<String>,

    /// Free-text model filter
    #[arg(long, default_value = "")]
    pub query: String,

    /// Facet selection as `facet=tag`; tag `none` clears the facet
    #[arg(long = "filter", value_name = "FACET=TAG")]
    pub filters: Vec<String>,

    /// Group to expand (repeatable)
    #[arg(long = "expand", value_name = "GROUP")]
    pub expand: Vec<String>,

    /// Group to close (repeatable)
    #[arg(long = "close", value_name = "GROUP")]
    pub close: Vec<String>,
}

impl ViewArgs {
    pub fn source<'a>(&'a self, config: &'a AppConfig) -> &'a str {
        self.source.as_deref().unwrap_or(&config.leaderboard.source)
    }

    /// Start from the dataset's defaults and apply every flag
    pub fn view_state(&self, dataset: &Dataset, config: &AppConfig) -> Result<ViewState, DomainError> {
        let mut state = dataset.default_view_state().with_query(self.query.clone());

        if let Some(metric) = self.metric.as_ref().or(config.leaderboard.metric.as_ref()) {
            state = state.with_metric(metric.clone());
        }

        if let Some(raw) = &self.sort {
            let column = dataset
                .column(raw)
                .ok_or_else(|| DomainError::validation(format!("Unknown sort column: {}", raw)))?;
            state = state.with_sort(column);
        }

        for raw in &self.filters {
            let (facet, tag) = parse_filter(raw)?;
            if !dataset.document().filters.iter().any(|f| f.name == facet) {
                return Err(DomainError::validation(format!("Unknown filter facet: {}", facet)));
            }
            state.filters.select(facet, tag);
        }

        for raw in &self.expand {
            state.set_group_state(group(dataset, raw)?, GroupState::Expanded);
        }

        for raw in &self.close {
            let id = group(dataset, raw)?;
            if id.is_global() {
                return Err(DomainError::validation("The global group cannot be closed"));
            }
            state.set_group_state(id, GroupState::Closed);
        }

        Ok(state)
    }
}

fn group(dataset: &Dataset, raw: &str) -> Result<GroupId, DomainError> {
    dataset
        .group_id(raw)
        .ok_or_else(|| DomainError::not_found(format!("Unknown task group: {}", raw)))
}

fn parse_filter(raw: &str) -> Result<(&str, &str), DomainError> {
    raw.split_once('=')
        .map(|(facet, tag)| (facet.trim(), tag.trim()))
        .filter(|(facet, _)| !facet.is_empty())
        .ok_or_else(|| DomainError::validation(format!("Expected FACET=TAG, got: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColumnKey, EvalDocument, FilterDef, FilterOption, TaskDef, TaskGroupDef};

    fn dataset() -> Dataset {
        Dataset::new(EvalDocument {
            task_groups: vec![TaskGroupDef::new("Retrieval")],
            tasks: vec![TaskDef::new("NQ").with_group("Retrieval")],
            filters: vec![FilterDef {
                name: "Size".to_string(),
                options: vec![
                    FilterOption::new("none", "All"),
                    FilterOption::new("small", "Small"),
                ],
            }],
            ..Default::default()
        })
    }

    #[test]
    fn test_flags_build_view_state() {
        let args = ViewArgs {
            sort: Some("Retrieval_average".to_string()),
            query: "e5".to_string(),
            filters: vec!["Size=small".to_string()],
            expand: vec!["Retrieval".to_string()],
            ..Default::default()
        };

        let state = args.view_state(&dataset(), &AppConfig::default()).unwrap();

        assert_eq!(state.sort, ColumnKey::group_average(GroupId::declared("Retrieval")));
        assert_eq!(state.query, "e5");
        assert_eq!(state.filters.selected("Size"), Some("small"));
        assert!(state.is_expanded(&GroupId::declared("Retrieval")));
    }

    #[test]
    fn test_config_metric_applies_without_flag() {
        let mut config = AppConfig::default();
        config.leaderboard.metric = Some("accuracy".to_string());

        let state = ViewArgs::default().view_state(&dataset(), &config).unwrap();

        assert_eq!(state.metric.as_deref(), Some("accuracy"));
    }

    #[test]
    fn test_invalid_flags_are_rejected() {
        let config = AppConfig::default();
        let bad = [
            ViewArgs {
                sort: Some("nope".to_string()),
                ..Default::default()
            },
            ViewArgs {
                filters: vec!["Size".to_string()],
                ..Default::default()
            },
            ViewArgs {
                filters: vec!["Color=red".to_string()],
                ..Default::default()
            },
            ViewArgs {
                close: vec!["__global__".to_string()],
                ..Default::default()
            },
            ViewArgs {
                expand: vec!["Missing".to_string()],
                ..Default::default()
            },
        ];

        for args in bad {
            assert!(args.view_state(&dataset(), &config).is_err(), "{:?}", args);
        }
    }

    #[test]
    fn test_source_falls_back_to_config() {
        let config = AppConfig::default();

        assert_eq!(ViewArgs::default().source(&config), "data.json");
        let args = ViewArgs {
            source: Some("https://example.org/data.json".to_string()),
            ..Default::default()
        };
        assert_eq!(args.source(&config), "https://example.org/data.json");
    }
}
