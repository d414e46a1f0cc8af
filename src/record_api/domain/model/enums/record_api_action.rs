#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordApiAction {
    Create,
    Read,
    Update,
    Delete,
}

impl RecordApiAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}
