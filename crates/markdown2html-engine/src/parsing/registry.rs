/// A named, priority-ordered table of rules.
///
/// Iteration runs from highest to lowest priority. Entries with equal
/// priority keep their registration order. Registering a name that already
/// exists replaces the old entry, which is how extensions supersede
/// built-in rules.
pub struct Registry<T> {
    entries: Vec<Entry<T>>,
}

struct Entry<T> {
    name: String,
    priority: u32,
    item: T,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, priority: u32, item: T) {
        let name = name.into();
        if self.deregister(&name).is_some() {
            log::debug!("replacing rule `{name}` at priority {priority}");
        }

        let idx = self
            .entries
            .iter()
            .position(|e| e.priority < priority)
            .unwrap_or(self.entries.len());
        self.entries.insert(
            idx,
            Entry {
                name,
                priority,
                item,
            },
        );
    }

    /// Removes the entry registered under `name`, returning it.
    pub fn deregister(&mut self, name: &str) -> Option<T> {
        let idx = self.entries.iter().position(|e| e.name == name)?;
        Some(self.entries.remove(idx).item)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.item)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn priority(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.priority)
    }

    /// Rules in priority order, paired with their names.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|e| (e.name.as_str(), &e.item))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
