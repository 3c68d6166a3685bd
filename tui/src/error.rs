pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    UtilsError(#[from] folio_utils::Error),

    #[error("Draw failed: {0}")]
    Draw(std::io::Error),

    #[error("Unknown Theme: {0}")]
    UnknownTheme(String),

    #[error("Reading terminal input failed: {0}")]
    InputReadFailed(std::io::Error),

    #[error("Mpsc Recv Error: {0}")]
    MpscRecvError(Box<std::sync::mpsc::RecvError>),
    #[error("Mpsc Send Error: {0}")]
    MpscSendError(Box<std::sync::mpsc::SendError<crate::AppEvent>>),
}

impl Error {
    pub fn is_connect(&self) -> bool {
        match self {
            Self::UtilsError(error) => error.is_connect(),
            _ => false,
        }
    }
}

impl FmtError for Error {
    fn fmt_err(&self, id: &str) -> String {
        if self.is_connect() {
            format!("Please check your RPC connection - {id}: {self}")
        } else {
            format!("{id}: {self}")
        }
    }
}

impl From<std::sync::mpsc::RecvError> for Error {
    fn from(e: std::sync::mpsc::RecvError) -> Self {
        Error::MpscRecvError(Box::new(e))
    }
}

impl From<std::sync::mpsc::SendError<crate::AppEvent>> for Error {
    fn from(e: std::sync::mpsc::SendError<crate::AppEvent>) -> Self {
        Error::MpscSendError(Box::new(e))
    }
}

pub trait FmtError {
    fn fmt_err(&self, id: &str) -> String;
}
