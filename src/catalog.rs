//! The category catalog: named buckets of choice strings.
//!
//! Categories keep insertion order and allow duplicate entries. The catalog is
//! owned by [`crate::app::App`] and seeded at construction; there is no
//! persistence, mutations live for the process lifetime only.

/// Display text shown before the first spin and after a reset.
pub const PROMPT_LABEL: &str = "Press [s] to spin!";

/// A named bucket of choice strings.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    choices: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            name: name.into(),
            choices,
        }
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }
}

/// Ordered collection of categories.
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self { categories: vec![] }
    }

    /// Create a catalog seeded with the built-in word lists.
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        for (name, words) in seed_lists() {
            catalog.categories.push(Category::new(
                name,
                words.iter().map(|w| w.to_string()).collect(),
            ));
        }
        catalog
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Choices for a category, empty when the category is unknown.
    pub fn choices(&self, name: &str) -> &[String] {
        self.get(name).map(|c| c.choices.as_slice()).unwrap_or(&[])
    }

    /// Append a choice to a category's list.
    ///
    /// Empty text is silently rejected. Duplicates are allowed. Unknown
    /// categories are ignored.
    pub fn add_choice(&mut self, name: &str, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(category) = self.categories.iter_mut().find(|c| c.name == name) {
            category.choices.push(text.to_string());
        }
    }

    /// Remove every entry exactly equal to `text` from a category's list.
    ///
    /// No-op when the text is absent or the category is unknown.
    pub fn remove_choice(&mut self, name: &str, text: &str) {
        if let Some(category) = self.categories.iter_mut().find(|c| c.name == name) {
            category.choices.retain(|c| c != text);
        }
    }

    /// Insert a category, replacing the choice list of an existing one with
    /// the same name. New names append after the existing categories.
    pub fn insert_category(&mut self, name: &str, choices: Vec<String>) {
        if let Some(existing) = self.categories.iter_mut().find(|c| c.name == name) {
            existing.choices = choices;
        } else {
            self.categories.push(Category::new(name, choices));
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Built-in categories and their word lists.
fn seed_lists() -> Vec<(&'static str, &'static [&'static str])> {
    vec![
        (
            "General",
            &[
                "Go for it",
                "Wait and see",
                "Not right now",
                "Absolutely yes",
                "Definitely no",
                "Do it today",
                "Try next week",
                "Perfect timing",
                "Need more time",
                "Act immediately",
                "Take action",
                "Gather more info",
                "Ask for advice",
                "Trust your gut",
                "Sleep on it",
                "Worth the risk",
                "Play it safe",
                "Take the chance",
                "Be cautious",
                "Bold move needed",
                "Plan ahead",
                "Start small",
                "Go all in",
                "Test first",
                "Step by step",
                "New approach",
                "Stay the course",
                "Change direction",
                "Keep it simple",
                "Think bigger",
                "Perfect moment",
                "Wait for better timing",
                "Strike while hot",
                "Pause and reflect",
                "Time to move",
                "Follow your heart",
                "Use logic",
                "Ask an expert",
                "Research more",
                "Trust yourself",
                "Great outcome likely",
                "Consider alternatives",
                "Promising results",
                "Better options exist",
                "Good potential",
            ][..],
        ),
        (
            "Food",
            &[
                "Italian",
                "Japanese",
                "Chinese",
                "Mexican",
                "Thai",
                "Indian",
                "French",
                "Korean",
                "Mediterranean",
                "Vietnamese",
                "American",
                "Greek",
                "Spanish",
                "Brazilian",
                "Pizza",
                "Sushi",
                "Burger",
                "Pasta",
                "Tacos",
                "Curry",
                "Salad",
                "Steak",
                "Sandwich",
                "Ramen",
                "BBQ",
                "Seafood",
                "Dim Sum",
                "Brunch",
                "Vegetarian",
                "Vegan",
                "Gluten-free",
                "Fast food",
                "Fine dining",
                "Street food",
                "Buffet",
                "Home cooking",
                "Food truck",
                "Cafe",
                "Bakery",
            ][..],
        ),
        (
            "Sport",
            &[
                "Football",
                "Basketball",
                "Baseball",
                "Soccer",
                "Volleyball",
                "Hockey",
                "Rugby",
                "Tennis",
                "Golf",
                "Swimming",
                "Running",
                "Cycling",
                "Boxing",
                "Yoga",
                "Martial Arts",
                "Rock Climbing",
                "Skiing",
                "Surfing",
                "Skateboarding",
                "Gym workout",
                "HIIT",
                "Pilates",
                "CrossFit",
                "Weight training",
                "Cardio",
                "Dance",
                "Stretching",
                "Walking",
                "Jogging",
                "Home workout",
            ][..],
        ),
        (
            "Place",
            &[
                "Beach",
                "Mountain",
                "Forest",
                "Lake",
                "Park",
                "Garden",
                "Island",
                "Waterfall",
                "City center",
                "Museum",
                "Art gallery",
                "Shopping mall",
                "Cafe",
                "Restaurant",
                "Movie theater",
                "Concert hall",
                "Library",
                "Bookstore",
                "Hotel",
                "Resort",
                "Camping",
                "Road trip",
                "Historical site",
                "Theme park",
                "National park",
                "Tourist spot",
                "Local market",
                "Hidden gem",
                "Indoor activity",
                "Outdoor adventure",
                "Cultural visit",
                "Relaxation spot",
                "Entertainment venue",
                "Educational place",
                "Scenic viewpoint",
            ][..],
        ),
        (
            "Color",
            &[
                "Red",
                "Blue",
                "Green",
                "Yellow",
                "Purple",
                "Orange",
                "Pink",
                "Brown",
                "Black",
                "White",
                "Gray",
                "Gold",
                "Silver",
                "Navy blue",
                "Forest green",
                "Sky blue",
                "Mint green",
                "Hot pink",
                "Coral",
                "Turquoise",
                "Lavender",
                "Maroon",
                "Teal",
                "Violet",
                "Indigo",
                "Blue & white",
                "Black & gold",
                "Red & black",
                "Purple & gold",
                "Green & brown",
                "Pink & gray",
                "Orange & blue",
                "Yellow & gray",
            ][..],
        ),
        (
            "Mood",
            &[
                "Read a book",
                "Watch a movie",
                "Listen to music",
                "Take a walk",
                "Meditate",
                "Call a friend",
                "Try something new",
                "Take a nap",
                "Exercise",
                "Draw or paint",
                "Comedy show",
                "Action movie",
                "Drama series",
                "Documentary",
                "Music playlist",
                "Podcast",
                "Video games",
                "Social media",
                "Photo album",
                "Creative project",
                "Bath time",
                "Massage",
                "Yoga session",
                "Deep breathing",
                "Garden visit",
                "Coffee break",
                "Tea time",
                "Nature sounds",
                "Mindfulness",
                "Stretching",
            ][..],
        ),
        // Single placeholder entry, meant to be replaced by the user.
        ("Custom", &["Add more new choice"][..]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_categories() {
        let catalog = Catalog::seeded();
        assert_eq!(
            catalog.names(),
            vec!["General", "Food", "Sport", "Place", "Color", "Mood", "Custom"]
        );
        assert!(!catalog.choices("Food").is_empty());
        assert_eq!(catalog.choices("Custom"), ["Add more new choice"]);
    }

    #[test]
    fn test_add_choice_appends_last() {
        let mut catalog = Catalog::seeded();
        catalog.add_choice("Custom", "Tea");
        assert_eq!(catalog.choices("Custom").last().unwrap(), "Tea");
    }

    #[test]
    fn test_add_empty_choice_is_rejected() {
        let mut catalog = Catalog::seeded();
        let before = catalog.choices("Food").len();
        catalog.add_choice("Food", "");
        assert_eq!(catalog.choices("Food").len(), before);
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let mut catalog = Catalog::seeded();
        catalog.add_choice("Custom", "Tea");
        catalog.add_choice("Custom", "Tea");
        let teas = catalog
            .choices("Custom")
            .iter()
            .filter(|c| *c == "Tea")
            .count();
        assert_eq!(teas, 2);
    }

    #[test]
    fn test_remove_choice_removes_all_matches() {
        let mut catalog = Catalog::new();
        catalog.insert_category(
            "Pets",
            vec!["X".to_string(), "Y".to_string(), "X".to_string()],
        );
        catalog.remove_choice("Pets", "X");
        assert_eq!(catalog.choices("Pets"), ["Y"]);
    }

    #[test]
    fn test_remove_absent_choice_is_noop() {
        let mut catalog = Catalog::seeded();
        let before = catalog.choices("Sport").to_vec();
        catalog.remove_choice("Sport", "Chess boxing");
        assert_eq!(catalog.choices("Sport"), before);
    }

    #[test]
    fn test_insert_category_replaces_existing() {
        let mut catalog = Catalog::seeded();
        let count = catalog.len();
        catalog.insert_category("Custom", vec!["Tea".to_string(), "Coffee".to_string()]);
        assert_eq!(catalog.len(), count);
        assert_eq!(catalog.choices("Custom"), ["Tea", "Coffee"]);

        catalog.insert_category("Movies", vec!["Alien".to_string()]);
        assert_eq!(catalog.len(), count + 1);
        assert_eq!(catalog.names().last().unwrap(), &"Movies");
    }

    #[test]
    fn test_unknown_category_mutation_is_noop() {
        let mut catalog = Catalog::seeded();
        catalog.add_choice("Nope", "X");
        catalog.remove_choice("Nope", "X");
        assert!(catalog.choices("Nope").is_empty());
    }
}
