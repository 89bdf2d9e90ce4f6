//! Sources disclosure: the outlets backing one narrative.

use crate::model::{Event, Narrative, Source};

/// Caption under each outlet row.
pub const OUTLET_CAPTION: &str = "Medio de comunicación";

/// An open disclosure, scoped to one narrative of the attached event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcesDisclosure {
    pub narrative_index: usize,
}

impl SourcesDisclosure {
    /// Opens a disclosure if `event` has a narrative at `narrative_index`.
    pub fn for_narrative(event: &Event, narrative_index: usize) -> Option<Self> {
        event
            .narrative(narrative_index)
            .map(|_| Self { narrative_index })
    }

    pub fn narrative<'a>(&self, event: &'a Event) -> Option<&'a Narrative> {
        event.narrative(self.narrative_index)
    }

    pub fn sources<'a>(&self, event: &'a Event) -> &'a [Source] {
        self.narrative(event)
            .map_or(&[], |narrative| narrative.sources.as_slice())
    }

    pub fn title(&self, event: &Event) -> String {
        let narrative = self.narrative(event).map_or("", |n| n.title.as_str());
        format!("Fuentes - {narrative}")
    }

    pub fn description(&self, event: &Event) -> String {
        describe_count(self.sources(event).len())
    }
}

fn describe_count(count: usize) -> String {
    if count == 1 {
        "1 medio cubriendo esta narrativa".to_string()
    } else {
        format!("{count} medios cubriendo esta narrativa")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> Event {
        Event::new("1", "Economía", "Suben los precios").with_narratives(vec![
            Narrative::new("Oficial", "Baja la inflación")
                .with_sources(vec![Source::new("Télam", ""), Source::new("Página 12", "")]),
            Narrative::new("Oposición", "El ajuste lo pagan los jubilados")
                .with_sources(vec![Source::new("Clarín", "")]),
            Narrative::new("Mercados", "Calma cambiaria"),
        ])
    }

    #[test]
    fn test_disclosure_lists_narrative_sources() {
        let event = event();
        let disclosure = SourcesDisclosure::for_narrative(&event, 0).unwrap();
        assert_eq!(disclosure.title(&event), "Fuentes - Oficial");
        assert_eq!(disclosure.description(&event), "2 medios cubriendo esta narrativa");
        let names: Vec<&str> = disclosure
            .sources(&event)
            .iter()
            .map(|s| s.outlet_name.as_str())
            .collect();
        assert_eq!(names, ["Télam", "Página 12"]);
    }

    #[test]
    fn test_singular_and_empty_descriptions() {
        let event = event();
        let one = SourcesDisclosure::for_narrative(&event, 1).unwrap();
        assert_eq!(one.description(&event), "1 medio cubriendo esta narrativa");
        let none = SourcesDisclosure::for_narrative(&event, 2).unwrap();
        assert!(none.sources(&event).is_empty());
        assert_eq!(none.description(&event), "0 medios cubriendo esta narrativa");
    }

    #[test]
    fn test_missing_narrative_is_not_disclosed() {
        let event = event();
        assert!(SourcesDisclosure::for_narrative(&event, 3).is_none());
    }
}
