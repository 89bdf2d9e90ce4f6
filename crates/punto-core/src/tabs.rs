//! Top-level view selector.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Tab {
    #[default]
    Feed,
    Search,
    Discover,
    Account,
}

impl Tab {
    /// Navbar order.
    pub const ALL: [Tab; 4] = [Tab::Feed, Tab::Search, Tab::Discover, Tab::Account];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Feed => "Inicio",
            Tab::Search => "Buscar",
            Tab::Discover => "Descubrir",
            Tab::Account => "Cuenta",
        }
    }

    /// Tab bound to a digit key, `'1'` through `'4'`.
    pub fn from_shortcut(key: char) -> Option<Tab> {
        let index = key.to_digit(10)?.checked_sub(1)?;
        Tab::ALL.get(index as usize).copied()
    }

    pub fn shortcut(self) -> char {
        match self {
            Tab::Feed => '1',
            Tab::Search => '2',
            Tab::Discover => '3',
            Tab::Account => '4',
        }
    }

    /// Heading and body for tabs that only show a placeholder.
    pub fn placeholder(self) -> Option<(&'static str, &'static str)> {
        match self {
            Tab::Discover => Some((
                "Descubrir",
                "Explorá categorías y temas de interés. Próximamente disponible.",
            )),
            Tab::Account => Some((
                "Tu cuenta",
                "Iniciá sesión para guardar tus preferencias. Próximamente disponible.",
            )),
            Tab::Feed | Tab::Search => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TabRouter {
    active: Tab,
}

impl TabRouter {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) {
        if tab != self.active {
            tracing::debug!(from = ?self.active, to = ?tab, "tab change");
        }
        self.active = tab;
    }
}
