#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Authentication required")]
    AuthRequired,

    #[error("Text is required")]
    TextRequired,

    #[error("Text exceeds limit of {} characters", crate::MAX_COMMENT_LENGTH)]
    TextTooLong,

    #[error("Comment submission failed")]
    SubmitFailed,
}

/// Answer to a comment submission, as a set of flags
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitCommentResponse {
    pub success: bool,
    pub auth_error: bool,
    pub text_required_error: bool,
    pub text_too_long_error: bool,
    pub submit_error: bool,
}

impl SubmitCommentResponse {
    pub fn from_result(res: Result<(), Error>) -> SubmitCommentResponse {
        let mut resp = SubmitCommentResponse::default();
        match res {
            Ok(()) => resp.success = true,
            Err(Error::AuthRequired) => resp.auth_error = true,
            Err(Error::TextRequired) => resp.text_required_error = true,
            Err(Error::TextTooLong) => resp.text_too_long_error = true,
            Err(Error::SubmitFailed) => resp.submit_error = true,
        }
        resp
    }

    /// The first matching flag wins; a response without `success` is a failure
    pub fn into_result(self) -> Result<(), Error> {
        if self.auth_error {
            Err(Error::AuthRequired)
        } else if self.text_required_error {
            Err(Error::TextRequired)
        } else if self.text_too_long_error {
            Err(Error::TextTooLong)
        } else if self.submit_error || !self.success {
            Err(Error::SubmitFailed)
        } else {
            Ok(())
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoteResponse {
    pub success: bool,
    pub auth_error: bool,
    pub submit_error: bool,
}

impl VoteResponse {
    pub fn from_result(res: Result<(), Error>) -> VoteResponse {
        let mut resp = VoteResponse::default();
        match res {
            Ok(()) => resp.success = true,
            Err(Error::AuthRequired) => resp.auth_error = true,
            Err(_) => resp.submit_error = true,
        }
        resp
    }

    /// Only an authentication failure counts as an error: servers do not
    /// reliably set `success` on votes.
    pub fn into_result(self) -> Result<(), Error> {
        match self.auth_error {
            true => Err(Error::AuthRequired),
            false => Ok(()),
        }
    }
}
