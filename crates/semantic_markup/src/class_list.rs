use std::fmt;

/// Ordered, de-duplicated list of CSS class words.
///
/// Strings containing whitespace are split, so `add("ui dropdown")` records
/// `ui` and `dropdown` as separate words. The first occurrence of a word
/// fixes its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    words: Vec<String>,
}

impl ClassList {
    /// Empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every whitespace-separated word in `classes`.
    pub fn add(mut self, classes: &str) -> Self {
        self.push(classes);
        self
    }

    /// Adds `classes` only when `condition` holds.
    pub fn add_if(self, condition: bool, classes: &str) -> Self {
        if condition {
            self.add(classes)
        } else {
            self
        }
    }

    /// Adds `classes` when present.
    pub fn add_opt(self, classes: Option<&str>) -> Self {
        match classes {
            Some(classes) => self.add(classes),
            None => self,
        }
    }

    /// Appends every word of another list, keeping first-occurrence order.
    pub fn extend(mut self, other: &ClassList) -> Self {
        for word in &other.words {
            self.push(word);
        }
        self
    }

    /// In-place variant of [`ClassList::add`].
    pub fn push(&mut self, classes: &str) {
        for word in classes.split_whitespace() {
            if !self.contains(word) {
                self.words.push(word.to_string());
            }
        }
    }

    /// Whether `word` is part of the list.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|existing| existing == word)
    }

    /// Whether every word of `classes` is part of the list.
    pub fn contains_all(&self, classes: &str) -> bool {
        classes.split_whitespace().all(|word| self.contains(word))
    }

    /// True when no class has been added.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Class words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        Self::new().add(classes)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn splits_whitespace_and_deduplicates() {
        let classes = ClassList::new()
            .add("ui dropdown")
            .add("  active   visible ")
            .add("dropdown");
        assert_eq!(classes.to_string(), "ui dropdown active visible");
    }

    #[test]
    fn conditional_and_optional_words() {
        let classes = ClassList::from("menu")
            .add_if(false, "visible")
            .add_if(true, "hidden")
            .add_opt(None)
            .add_opt(Some("transition"));
        assert_eq!(classes.to_string(), "menu hidden transition");
        assert!(classes.contains_all("transition menu"));
        assert!(!classes.contains("visible"));
    }

    #[test]
    fn extend_keeps_first_occurrence_order() {
        let extra = ClassList::from("fluid ui");
        let classes = ClassList::from("ui selection dropdown").extend(&extra);
        assert_eq!(classes.to_string(), "ui selection dropdown fluid");
        assert!(ClassList::new().is_empty());
    }
}
