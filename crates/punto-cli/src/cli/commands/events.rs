//! Event command handlers.

use anyhow::{Result, bail};
use comfy_table::{ContentArrangement, Table};
use punto_core::EventStore;
use punto_core::disclosure::SourcesDisclosure;
use punto_core::model::Event;

const TABLE_WIDTH: u16 = 100;

pub fn list(store: &EventStore) {
    if store.is_empty() {
        println!("No events found.");
        return;
    }
    let mut table = Table::new();
    table.set_width(TABLE_WIDTH);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Título", "Fuentes", "Narrativas"]);
    for event in store.events() {
        table.add_row(vec![
            event.id.clone(),
            event.title.clone(),
            event.source_count().to_string(),
            event.narrative_count().to_string(),
        ]);
    }
    println!("{table}");
}

pub fn show(store: &EventStore, id: &str) -> Result<()> {
    let Some(event) = store.find(id) else {
        bail!("Event '{id}' not found");
    };
    println!("{}", render_event(event));
    Ok(())
}

fn render_event(event: &Event) -> String {
    let mut out = Vec::new();
    out.push(event.title.clone());
    out.push(event.coverage_caption());
    out.push(format!("Imagen: {}", event.image_or_placeholder()));
    out.push(String::new());
    out.push(event.summary.clone());

    if event.narratives.is_empty() {
        out.push(String::new());
        out.push("Todavía no hay narrativas para esta noticia.".to_string());
    }
    for (index, narrative) in event.narratives.iter().enumerate() {
        out.push(String::new());
        out.push(format!("[{}] {}", index + 1, narrative.title));
        if !narrative.summary.is_empty() {
            out.push(format!("    {}", narrative.summary));
        }
        if let Some(disclosure) = SourcesDisclosure::for_narrative(event, index) {
            out.push(format!("    {}", disclosure.description(event)));
            for source in disclosure.sources(event) {
                out.push(format!("      - {}", source.outlet_name));
            }
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use punto_core::model::{Narrative, Source};

    use super::*;

    #[test]
    fn test_render_event_lists_narratives_with_sources() {
        let event = Event::new("1", "Acuerdo", "Se firmó").with_narratives(vec![
            Narrative::new("Oficial", "Celebran")
                .with_sources(vec![Source::new("Télam", ""), Source::new("Página 12", "")]),
            Narrative::new("Oposición", ""),
        ]);
        let text = render_event(&event);
        assert!(text.contains("[1] Oficial"));
        assert!(text.contains("2 medios cubriendo esta narrativa"));
        assert!(text.contains("      - Página 12"));
        assert!(text.contains("[2] Oposición"));
        assert!(text.contains("0 medios cubriendo esta narrativa"));
    }

    #[test]
    fn test_render_event_without_narratives() {
        let event = Event::new("1", "Acuerdo", "Se firmó");
        let text = render_event(&event);
        assert!(text.contains("Todavía no hay narrativas"));
        assert!(text.contains("/placeholder.svg"));
    }
}
