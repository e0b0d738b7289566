/// Internal storefront paths the bridge may redirect to. A closed set:
/// a target is never assembled from token content.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RedirectTarget {
    #[default]
    Store,
}

impl RedirectTarget {
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Store => "/store",
        }
    }
}
