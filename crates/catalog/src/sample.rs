//! Bundled sample catalog: the campus dining halls and their surplus.

use domain::{Coordinates, DietaryFlags, Item, Money, Venue};

const VEGETARIAN: DietaryFlags = DietaryFlags {
    vegetarian: true,
    vegan: false,
    gluten_free: false,
    halal: false,
};

const PLAIN: DietaryFlags = DietaryFlags {
    vegetarian: false,
    vegan: false,
    gluten_free: false,
    halal: false,
};

/// The bundled sample venues.
///
/// Each call builds a fresh list with newly generated IDs, which is why
/// favorites reference venues by name rather than by ID.
pub fn venues() -> Vec<Venue> {
    vec![
        Venue::new(
            "1920 Commons",
            "Large central dining hall with a wide variety of classic and rotating options right by the Quad.",
            Coordinates {
                latitude: 39.952284,
                longitude: -75.195497,
            },
            vec![
                Item::new("Late Night Pizza Slices", 12, Money::from_cents(350), VEGETARIAN),
                Item::new(
                    "Grilled Chicken Bowls",
                    6,
                    Money::from_cents(650),
                    DietaryFlags {
                        halal: true,
                        ..PLAIN
                    },
                ),
            ],
            "1920Commons",
        ),
        Venue::new(
            "Hill House",
            "Cozy residential dining hall popular for breakfast and comfort food.",
            Coordinates {
                latitude: 39.955019,
                longitude: -75.193946,
            },
            vec![
                Item::new("Veggie Pasta Bar", 10, Money::from_cents(450), VEGETARIAN),
                Item::new(
                    "Gluten-Free Brownies",
                    8,
                    Money::from_cents(300),
                    DietaryFlags {
                        vegetarian: true,
                        gluten_free: true,
                        ..PLAIN
                    },
                ),
            ],
            "HillHouse",
        ),
        Venue::new(
            "English House",
            "Fresh, modern dining hall on the east side of campus with lots of salad and grill options.",
            Coordinates {
                latitude: 39.952980,
                longitude: -75.199210,
            },
            vec![
                Item::new("Grain Bowls", 9, Money::from_cents(500), VEGETARIAN),
                Item::new("Roasted Chicken", 7, Money::from_cents(700), PLAIN),
            ],
            "EnglishHouse",
        ),
        Venue::new(
            "Lauder College House",
            "Scenic dining hall along the river with plenty of natural light and global cuisine stations.",
            Coordinates {
                latitude: 39.952627,
                longitude: -75.201540,
            },
            vec![
                Item::new("Stir-Fry Bar", 11, Money::from_cents(550), VEGETARIAN),
                Item::new(
                    "Tandoori Chicken",
                    5,
                    Money::from_cents(800),
                    DietaryFlags {
                        halal: true,
                        ..PLAIN
                    },
                ),
            ],
            "LauderCollegeHouse",
        ),
        Venue::new(
            "Falk Kosher Dining",
            "Certified kosher dining hall with rotating hot entrees and salads.",
            Coordinates {
                latitude: 39.954470,
                longitude: -75.200510,
            },
            vec![
                Item::new(
                    "Falafel & Hummus Plates",
                    10,
                    Money::from_cents(400),
                    DietaryFlags {
                        vegetarian: true,
                        vegan: true,
                        ..PLAIN
                    },
                ),
                Item::new("Kosher Chicken Cutlets", 6, Money::from_cents(900), PLAIN),
            ],
            "FalkKosherDining",
        ),
    ]
}
