use std::fmt;

pub const PARAM_SORT: &str = "sort";
pub const PARAM_QUERY: &str = "q";

// anything but the exact string "name" falls back to the most-played default
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    Name,
    #[default]
    Minutes,
}

impl SortMode {
    pub fn parse(value: &str) -> Self {
        if value == "name" {
            SortMode::Name
        } else {
            SortMode::Minutes
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            SortMode::Name => "name",
            SortMode::Minutes => "minutes",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub sort: SortMode,
    pub query: String,
}

impl UiState {
    // an empty sort parameter counts as absent
    pub fn from_params(sort: Option<&str>, query: Option<&str>) -> Self {
        let sort = sort
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(SortMode::parse)
            .unwrap_or_default();
        let query = query.unwrap_or_default().to_string();
        Self { sort, query }
    }
}
