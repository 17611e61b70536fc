use yew::prelude::*;

use common::model::source::Source;

use crate::components::helpers::format_timestamp;

pub const EMPTY_STATE_MESSAGE: &str = "No sources uploaded yet.";

#[derive(Properties, PartialEq, Clone)]
pub struct SourceEntriesProps {
    pub sources: Vec<Source>,
}

/// One card per source in the given order, or the empty-state card.
#[function_component(SourceEntries)]
pub fn source_entries(props: &SourceEntriesProps) -> Html {
    if props.sources.is_empty() {
        return html! { <div class="card empty-state">{EMPTY_STATE_MESSAGE}</div> };
    }

    props.sources.iter().map(source_card).collect::<Html>()
}

fn source_card(source: &Source) -> Html {
    let meta = format!(
        "{} · {} · {}",
        source.original_file_name,
        source.size_label(),
        format_timestamp(&source.created_at)
    );

    html! {
        <div key={source.id.clone()} class="card source-entry">
            <h3>
                <a href={source.detail_route().path()}>{source.title.clone()}</a>
            </h3>
            <p class="meta">{meta}</p>
            {
                if let Some(description) = source.description() {
                    html! { <p>{description.to_string()}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    fn source(id: &str, title: &str, file_size: u64) -> Source {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "description": null,
            "owner_user_id": null,
            "original_file_name": format!("{}.pdf", id),
            "content_type": "application/pdf",
            "file_path": format!("/app/storage/uploads/{}.pdf", id),
            "file_size": file_size,
            "created_at": "2025-02-11T09:30:00Z",
            "updated_at": "2025-02-11T09:30:00Z"
        }))
        .unwrap()
    }

    async fn render(sources: Vec<Source>) -> String {
        ServerRenderer::<SourceEntries>::with_props(move || SourceEntriesProps { sources })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn empty_collection_renders_empty_state_only() {
        let html = render(Vec::new()).await;
        assert!(html.contains(EMPTY_STATE_MESSAGE));
        assert!(!html.contains("source-entry"));
        assert!(!html.contains("href="));
    }

    #[tokio::test]
    async fn renders_one_linked_entry_per_source() {
        let html = render(vec![
            source("a1", "Genetics", 2048),
            source("b2", "Ecology", 1536),
            source("c3", "Anatomy", 0),
        ])
        .await;

        assert_eq!(html.matches("source-entry").count(), 3);
        assert!(html.contains(r#"href="/sources/a1""#));
        assert!(html.contains(r#"href="/sources/b2""#));
        assert!(html.contains(r#"href="/sources/c3""#));
        assert!(!html.contains(EMPTY_STATE_MESSAGE));
    }

    #[tokio::test]
    async fn entry_meta_shows_file_name_and_size() {
        let html = render(vec![source("a1", "Genetics", 1536)]).await;
        assert!(html.contains("a1.pdf · 1.5 KB · 2025-02-11T09:30:00Z"));
    }

    #[tokio::test]
    async fn description_is_rendered_when_present() {
        let mut with_description = source("a1", "Genetics", 1024);
        with_description.description = Some("Mendel and beyond".to_string());
        let html = render(vec![with_description, source("b2", "Ecology", 1024)]).await;
        assert_eq!(html.matches("Mendel and beyond").count(), 1);
    }
}
