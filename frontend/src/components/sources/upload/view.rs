//! View rendering for the upload form.
//!
//! Field constraints (`required`, `accept`) are left to the browser; the API
//! decides what it actually accepts.

use gloo_console::error;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use common::api::{ACCEPTED_CONTENT_TYPE, FIELD_DESCRIPTION, FIELD_FILE, FIELD_TITLE};

use super::messages::Msg;
use super::state::{SourceUploadForm, UploadStatus};

pub fn view(component: &SourceUploadForm, ctx: &Context<SourceUploadForm>) -> Html {
    html! {
        <UploadFormFields
            status={component.status.clone()}
            on_submit={ctx.link().callback(Msg::Submit)}
        />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct UploadFormFieldsProps {
    pub status: UploadStatus,
    /// Receives the form's current field values. The browser's own submission
    /// is always suppressed.
    #[prop_or_default]
    pub on_submit: Callback<FormData>,
}

#[function_component(UploadFormFields)]
pub fn upload_form_fields(props: &UploadFormFieldsProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form: HtmlFormElement = e.target_unchecked_into();
            match FormData::new_with_form(&form) {
                Ok(data) => on_submit.emit(data),
                Err(err) => error!("Could not read the upload form:", err),
            }
        })
    };

    html! {
        <div class="card">
            <h1>{"Add a Source"}</h1>
            <form {onsubmit}>
                <div class="form-group">
                    <label for={FIELD_TITLE}>{"Title"}</label>
                    <input id={FIELD_TITLE} name={FIELD_TITLE} type="text" required={true} placeholder="My PDF" />
                </div>

                <div class="form-group">
                    <label for={FIELD_DESCRIPTION}>{"Description"}</label>
                    <textarea id={FIELD_DESCRIPTION} name={FIELD_DESCRIPTION} rows="4" placeholder="Optional context" />
                </div>

                <div class="form-group">
                    <label for={FIELD_FILE}>{"PDF file"}</label>
                    <input id={FIELD_FILE} name={FIELD_FILE} type="file" accept={ACCEPTED_CONTENT_TYPE} required={true} />
                </div>

                {
                    if let Some(message) = props.status.error() {
                        html! { <div class="meta upload-error" style="color: crimson;">{message.to_string()}</div> }
                    } else {
                        html! {}
                    }
                }

                <button class="button" type="submit" disabled={props.status.is_submitting()}>
                    {props.status.submit_label()}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(status: UploadStatus) -> String {
        ServerRenderer::<UploadFormFields>::with_props(move || UploadFormFieldsProps {
            status,
            on_submit: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn idle_form_has_enabled_default_button() {
        let html = render(UploadStatus::Idle).await;
        assert!(html.contains("Upload PDF"));
        assert!(!html.contains("disabled"));
        assert!(!html.contains("upload-error"));
    }

    #[tokio::test]
    async fn submitting_disables_button_and_shows_progress_label() {
        let html = render(UploadStatus::Submitting).await;
        assert!(html.contains("Uploading…"));
        assert!(html.contains("disabled"));
        assert!(!html.contains("Upload PDF"));
    }

    #[tokio::test]
    async fn error_is_displayed_verbatim() {
        let html = render(UploadStatus::Error("title too long".to_string())).await;
        assert!(html.contains("upload-error"));
        assert!(html.contains(">title too long<"));
        assert!(html.contains("Upload PDF"));
        assert!(!html.contains("disabled"));
    }

    #[tokio::test]
    async fn fields_carry_browser_constraints() {
        let html = render(UploadStatus::Idle).await;
        assert!(html.contains(r#"name="title""#));
        assert!(html.contains(r#"name="description""#));
        assert!(html.contains(r#"name="file""#));
        assert!(html.contains(r#"accept="application/pdf""#));
        assert_eq!(html.matches(r#"required="required""#).count(), 2);
    }
}
