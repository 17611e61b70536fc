use web_sys::FormData;

use crate::api::ApiError;

#[derive(Clone)]
pub enum Msg {
    /// The form was submitted with these field values.
    Submit(FormData),
    /// The upload request finished.
    Settled(Result<(), ApiError>),
}
