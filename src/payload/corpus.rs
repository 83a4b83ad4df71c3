//! Word lists the fake record generator draws from.

pub const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Beatrice", "Carlos", "Chloe", "Dmitri", "Elena", "Farah", "George", "Hana",
    "Ivan", "Jasmine", "Kofi", "Lena", "Mateo", "Nadia", "Oscar", "Priya", "Quinn", "Rosa",
    "Samir", "Tessa", "Umar", "Vera", "Wesley", "Ximena", "Yusuf", "Zoe",
];

pub const LAST_NAMES: &[&str] = &[
    "Abbott", "Becker", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Hoffman", "Ito",
    "Jensen", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Petrov", "Quintero",
    "Rossi", "Schmidt", "Tanaka", "Ulrich", "Varga", "Walker", "Yamada", "Zimmerman",
];

pub const STREET_NAMES: &[&str] = &[
    "Maple", "Oak", "Cedar", "Pine", "Elm", "Willow", "Birch", "Lakeview", "Hillcrest", "Sunset",
    "River", "Meadow", "Park", "Highland", "Church", "Mill",
];

pub const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Boulevard", "Drive", "Court", "Way", "Place", "Terrace",
];

pub const CITIES: &[&str] = &[
    "Springfield", "Riverside", "Fairview", "Madison", "Georgetown", "Arlington", "Salem",
    "Franklin", "Clinton", "Greenville", "Bristol", "Dayton", "Ashland", "Milton",
];

pub const STATES: &[&str] = &[
    "AL", "AZ", "CA", "CO", "FL", "GA", "IL", "MA", "MI", "MN", "NC", "NY", "OH", "OR", "PA",
    "TX", "VA", "WA", "WI",
];

pub const ANIMALS: &[&str] = &[
    "aardvark", "badger", "capybara", "dolphin", "elephant", "ferret", "giraffe", "hedgehog",
    "ibis", "jaguar", "koala", "lemur", "meerkat", "narwhal", "otter", "penguin", "quokka",
    "raccoon", "salamander", "tapir", "urchin", "vulture", "walrus", "yak", "zebra",
];

pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 Edg/124.0.0.0",
    "Opera/9.80 (Windows NT 6.1; U; en) Presto/2.12.388 Version/12.16",
];

pub const CAR_MAKES: &[(&str, &[&str])] = &[
    ("Toyota", &["Corolla", "Camry", "RAV4", "Prius"]),
    ("Ford", &["Focus", "Mustang", "F-150", "Escape"]),
    ("Honda", &["Civic", "Accord", "CR-V", "Fit"]),
    ("Volkswagen", &["Golf", "Passat", "Tiguan", "Polo"]),
    ("Subaru", &["Impreza", "Outback", "Forester"]),
    ("Volvo", &["XC60", "V70", "S60"]),
    ("Tesla", &["Model 3", "Model S", "Model Y"]),
];

pub const CAR_TYPES: &[&str] = &[
    "Sedan", "Hatchback", "SUV", "Pickup truck", "Station wagon", "Coupe", "Convertible",
];

pub const FUEL_TYPES: &[&str] = &["Gasoline", "Diesel", "Electric", "Hybrid"];

pub const URL_WORDS: &[&str] = &[
    "acme", "globex", "initech", "umbrella", "hooli", "vandelay", "wonka", "stark", "tyrell",
    "cyberdyne", "soylent", "massive",
];

pub const URL_TLDS: &[&str] = &["com", "net", "org", "io", "biz", "info"];

pub const URL_PATHS: &[&str] = &[
    "about", "products", "blog", "support", "pricing", "careers", "docs", "contact",
];
