#[derive(Clone)]
pub(crate) enum RestPath {
    UserBalance(String),
    Symbols,
    Orders,
}

impl RestPath {
    pub fn to_path_string(self) -> String {
        match self {
            RestPath::UserBalance(asset) => format!("/api/user/balances/{asset}"),
            RestPath::Symbols => "/api/symbols".into(),
            RestPath::Orders => "/api/orders".into(),
        }
    }
}
