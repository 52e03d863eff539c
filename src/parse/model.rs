/// Dietary classification of a meal, as far as the source encodes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diet {
    Pork,
    Beef,
    Vegetarian,
    Vegan,
}

/// One dish on offer. A `price` of `None` means the source published no
/// price for the row, which usually marks an informational entry rather
/// than an orderable dish; it is not the same as a price of zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub diet: Option<Diet>,
    pub name: String,
    /// Price in cents for the second published tier.
    pub price: Option<u32>,
}

/// One serving counter and its meals for the day, in on-page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub name: String,
    pub meals: Vec<Meal>,
}
