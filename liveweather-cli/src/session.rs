/// Per-session presentation state, owned by the interactive loop.
#[derive(Debug, Default)]
pub struct Session {
    splash_shown: bool,
    prev_country: Option<String>,
    prev_city: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly once per session.
    pub fn take_splash(&mut self) -> bool {
        !std::mem::replace(&mut self.splash_shown, true)
    }

    /// Record the current selection and return how many of country/city
    /// changed since the previous one. The first selection never counts.
    pub fn record_selection(&mut self, country: &str, city: &str) -> usize {
        let changed = |prev: &Option<String>, now: &str| prev.as_deref().is_some_and(|p| p != now);

        let count = usize::from(changed(&self.prev_country, country))
            + usize::from(changed(&self.prev_city, city));

        self.prev_country = Some(country.to_string());
        self.prev_city = Some(city.to_string());
        count
    }

    pub fn previous(&self) -> Option<(&str, &str)> {
        Some((self.prev_country.as_deref()?, self.prev_city.as_deref()?))
    }
}
