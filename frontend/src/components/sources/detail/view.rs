use yew::prelude::*;

use common::model::source::Source;
use common::routes::Route;

use crate::components::helpers::format_timestamp;

#[derive(Properties, PartialEq, Clone)]
pub struct SourceDetailCardProps {
    pub source: Source,
}

/// Title, description and stored-file metadata of one source. Read-only.
#[function_component(SourceDetailCard)]
pub fn source_detail_card(props: &SourceDetailCardProps) -> Html {
    let source = &props.source;

    html! {
        <div class="card">
            <div class="meta">
                <a href={Route::Sources.path()}>{"← Back to sources"}</a>
            </div>
            <h1>{source.title.clone()}</h1>
            {
                if let Some(description) = source.description() {
                    html! { <p>{description.to_string()}</p> }
                } else {
                    html! {}
                }
            }
            <div class="meta">
                <div>{format!("Original file: {}", source.original_file_name)}</div>
                <div>{format!("MIME type: {}", source.content_type)}</div>
                <div>{format!("Stored at: {}", source.file_path)}</div>
                <div>{format!("Uploaded: {}", format_timestamp(&source.created_at))}</div>
                <div>{format!("Owner: {}", source.owner_label())}</div>
            </div>
        </div>
    }
}
