use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContribError>;

#[derive(Error, Debug)]
pub enum ContribError {
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("No diff available for commit {commit} by {author}")]
    DiffUnavailable { commit: String, author: String },
    #[error("Failed to fetch initial commit stats for {commit}")]
    InitialCommitStats { commit: String },
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Diff tree to tree error: {0}")]
    DiffTreeToTree(#[from] Box<gix::repository::diff_tree_to_tree::Error>),
    #[error("Signature date error: {0}")]
    SignatureDate(#[from] Box<gix::date::parse::Error>),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
}

// gix errors are large; keep them boxed so `Result<T>` stays small.
impl From<gix::object::find::existing::Error> for ContribError {
    fn from(err: gix::object::find::existing::Error) -> Self {
        ContribError::ObjectFind(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for ContribError {
    fn from(err: gix::object::commit::Error) -> Self {
        ContribError::Commit(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for ContribError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        ContribError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for ContribError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        ContribError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for ContribError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        ContribError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for ContribError {
    fn from(err: gix::objs::decode::Error) -> Self {
        ContribError::ObjectDecode(Box::new(err))
    }
}

impl From<gix::repository::diff_tree_to_tree::Error> for ContribError {
    fn from(err: gix::repository::diff_tree_to_tree::Error) -> Self {
        ContribError::DiffTreeToTree(Box::new(err))
    }
}

impl From<gix::discover::Error> for ContribError {
    fn from(err: gix::discover::Error) -> Self {
        ContribError::GitDiscover(Box::new(err))
    }
}

impl From<gix::date::parse::Error> for ContribError {
    fn from(err: gix::date::parse::Error) -> Self {
        ContribError::SignatureDate(Box::new(err))
    }
}
