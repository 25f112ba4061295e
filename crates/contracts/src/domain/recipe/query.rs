use serde::{Deserialize, Serialize};

/// Query parameters of the list endpoint. All three are optional and
/// independent; `search` and `tag` combine with logical AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeListRequest {
    pub search: Option<String>,
    pub tag: Option<String>,
    pub sort: Option<String>,
}

impl RecipeListRequest {
    pub fn sort_order(&self) -> SortOrder {
        SortOrder::from_param(self.sort.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    TitleAsc,
    TitleDesc,
    /// Most recently created first (the default)
    Newest,
}

impl SortOrder {
    /// Permissive parsing: unrecognized or absent values fall back to
    /// newest-first rather than raising an error.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("asc") => SortOrder::TitleAsc,
            Some("desc") => SortOrder::TitleDesc,
            _ => SortOrder::Newest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_param_parsing() {
        assert_eq!(SortOrder::from_param(Some("asc")), SortOrder::TitleAsc);
        assert_eq!(SortOrder::from_param(Some("desc")), SortOrder::TitleDesc);
        assert_eq!(SortOrder::from_param(None), SortOrder::Newest);
        assert_eq!(SortOrder::from_param(Some("")), SortOrder::Newest);
        assert_eq!(SortOrder::from_param(Some("newest")), SortOrder::Newest);
        assert_eq!(SortOrder::from_param(Some("ASC")), SortOrder::Newest);
    }

    #[test]
    fn test_request_defaults() {
        let req = RecipeListRequest::default();
        assert_eq!(req.sort_order(), SortOrder::Newest);
        assert!(req.search.is_none());
        assert!(req.tag.is_none());
    }
}
