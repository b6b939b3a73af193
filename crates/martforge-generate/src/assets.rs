//! Static pools consumed by the entity generators.
//!
//! Names, cities and carriers model a Moroccan retail business; the city
//! weight vector favors the major metropolitan areas with a flat long tail.

pub const FIRST_NAMES: &[&str] = &[
    "Ahmed", "Mohamed", "Fatima", "Khadija", "Hassan", "Youssef", "Aicha", "Zineb", "Omar",
    "Salma", "Karim", "Laila", "Mehdi", "Sara", "Rachid", "Samira", "Bilal", "Nadia",
];

pub const LAST_NAMES: &[&str] = &[
    "Alami", "Benjelloun", "El Fassi", "Tazi", "Berrada", "Filali", "Idrissi", "Kettani",
    "Lahlou", "Mekouar", "Sefrioui", "Tounsi", "Yacoubi", "Zniber",
];

pub const CITIES: &[&str] = &[
    "Casablanca", "Rabat", "Marrakech", "Fes", "Tangier", "Agadir", "Meknes", "Oujda",
    "Kenitra", "Tetouan", "Sale", "El Jadida", "Nador", "Mohammedia",
];

/// One weight per entry in [`CITIES`].
pub const CITY_WEIGHTS: &[f64] = &[
    0.30, 0.15, 0.10, 0.08, 0.07, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03, 0.03,
];

/// Administrative region of each city in [`CITIES`].
pub const CITY_REGIONS: &[(&str, &str)] = &[
    ("Casablanca", "Casablanca-Settat"),
    ("Mohammedia", "Casablanca-Settat"),
    ("El Jadida", "Casablanca-Settat"),
    ("Rabat", "Rabat-Sale-Kenitra"),
    ("Sale", "Rabat-Sale-Kenitra"),
    ("Kenitra", "Rabat-Sale-Kenitra"),
    ("Marrakech", "Marrakech-Safi"),
    ("Agadir", "Souss-Massa"),
    ("Tangier", "Tanger-Tetouan-Al Hoceima"),
    ("Tetouan", "Tanger-Tetouan-Al Hoceima"),
    ("Fes", "Fes-Meknes"),
    ("Meknes", "Fes-Meknes"),
    ("Oujda", "L'Oriental"),
    ("Nador", "L'Oriental"),
];

/// Region lookup for a city; unknown cities fall back to `Other`.
pub fn region_for_city(city: &str) -> &'static str {
    CITY_REGIONS
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, region)| *region)
        .unwrap_or("Other")
}

pub const BRANDS: &[&str] = &[
    "Apple", "Samsung", "Sony", "Nike", "Adidas", "Zara", "H&M", "Philips", "Bosch", "L'Oreal",
    "Dior", "Generic",
];

/// A product category with its subcategory -> item-name groups.
pub struct CatalogGroup {
    pub category: &'static str,
    pub subcategories: &'static [(&'static str, &'static [&'static str])],
}

pub const CATALOG: &[CatalogGroup] = &[
    CatalogGroup {
        category: "Electronics",
        subcategories: &[
            (
                "Smartphones",
                &["iPhone 14", "Galaxy S23", "Redmi Note 12", "P60"],
            ),
            (
                "Computers",
                &["MacBook Pro", "XPS 13", "Pavilion", "ThinkPad"],
            ),
            (
                "Accessories",
                &["AirPods Pro", "Wireless Mouse", "Gaming Keyboard", "HD Webcam"],
            ),
        ],
    },
    CatalogGroup {
        category: "Fashion",
        subcategories: &[
            ("Menswear", &["Shirt", "Trousers", "Jacket", "T-shirt"]),
            ("Womenswear", &["Dress", "Skirt", "Blouse", "Pants"]),
            ("Shoes", &["Sneakers", "Pumps", "Sandals", "Boots"]),
        ],
    },
    CatalogGroup {
        category: "Home",
        subcategories: &[
            ("Kitchen", &["Coffee Maker", "Blender", "Frying Pan", "Knife Set"]),
            ("Decor", &["Lamp", "Photo Frame", "Vase", "Cushion"]),
            ("Appliances", &["Vacuum Cleaner", "Iron", "Fan"]),
        ],
    },
    CatalogGroup {
        category: "Beauty",
        subcategories: &[
            ("Fragrance", &["Eau de Toilette", "Eau de Parfum", "Deodorant"]),
            ("Skincare", &["Face Cream", "Serum", "Mask", "Scrub"]),
            ("Makeup", &["Lipstick", "Mascara", "Foundation"]),
        ],
    },
    CatalogGroup {
        category: "Sports",
        subcategories: &[
            ("Fitness", &["Yoga Mat", "Dumbbells", "Resistance Bands"]),
            ("Sportswear", &["Leggings", "Sports Bra", "Shorts"]),
            ("Equipment", &["Ball", "Racket", "Water Bottle"]),
        ],
    },
    CatalogGroup {
        category: "Books",
        subcategories: &[
            ("Novels", &["Thriller", "Romance", "Science Fiction"]),
            ("Educational", &["Self-Help Book", "Textbook"]),
            ("Comics", &["Manga", "Comics", "Graphic Novel"]),
        ],
    },
];
