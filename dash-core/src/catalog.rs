//! Static region → city reference table and the selection helpers built on it.

/// Pseudo-region that stands for every city in the catalog.
pub const ALL_CITIES_LABEL: &str = "All Cities";

/// Cities preselected when nothing else is chosen.
pub const DEFAULT_CITIES: &[&str] = &[
    "Sydney",
    "Tokyo",
    "Ho Chi Minh",
    "New York",
    "Paris",
    "London",
    "Dubai",
];

/// How many defaults are preselected from a region's list.
pub const DEFAULT_SELECTION_LEN: usize = 3;

/// Offered auto-refresh intervals, in seconds.
pub const REFRESH_OPTIONS: &[(&str, u64)] = &[
    ("30 seconds", 30),
    ("1 minute", 60),
    ("2 minutes", 120),
    ("5 minutes", 300),
];

pub const DEFAULT_REFRESH_SECS: u64 = 60;

/// Region label and its cities, in display order.
pub const REGIONS: &[(&str, &[&str])] = &[
    (
        "🇻🇳 Vietnam",
        &[
            "Hanoi", "Ho Chi Minh", "Da Nang", "Hai Phong", "Can Tho", "Nha Trang", "Hue",
            "Vung Tau",
        ],
    ),
    (
        "🇯🇵 Japan",
        &[
            "Tokyo", "Osaka", "Kyoto", "Yokohama", "Nagoya", "Sapporo", "Fukuoka", "Kobe",
            "Hiroshima", "Sendai",
        ],
    ),
    (
        "🇰🇷 South Korea",
        &[
            "Seoul", "Busan", "Incheon", "Daegu", "Daejeon", "Gwangju", "Ulsan", "Suwon",
        ],
    ),
    (
        "🇨🇳 China",
        &[
            "Beijing", "Shanghai", "Guangzhou", "Shenzhen", "Chengdu", "Hangzhou", "Wuhan",
            "Xi'an", "Chongqing", "Tianjin", "Nanjing", "Suzhou", "Hong Kong", "Macau",
        ],
    ),
    (
        "🇹🇭 Thailand",
        &[
            "Bangkok", "Chiang Mai", "Phuket", "Pattaya", "Krabi", "Hua Hin", "Khon Kaen",
        ],
    ),
    (
        "🇸🇬 Singapore",
        &[
            "Singapore",
        ],
    ),
    (
        "🇲🇾 Malaysia",
        &[
            "Kuala Lumpur", "George Town", "Johor Bahru", "Ipoh", "Malacca", "Kota Kinabalu",
            "Langkawi",
        ],
    ),
    (
        "🇮🇩 Indonesia",
        &[
            "Jakarta", "Surabaya", "Bandung", "Medan", "Bali", "Yogyakarta", "Semarang",
        ],
    ),
    (
        "🇵🇭 Philippines",
        &[
            "Manila", "Quezon City", "Davao", "Cebu City", "Makati", "Pasig",
        ],
    ),
    (
        "🇮🇳 India",
        &[
            "Mumbai", "Delhi", "Bangalore", "Hyderabad", "Chennai", "Kolkata", "Pune",
            "Ahmedabad", "Jaipur", "Lucknow", "Kochi", "Goa",
        ],
    ),
    (
        "🇦🇪 UAE",
        &[
            "Dubai", "Abu Dhabi", "Sharjah", "Ajman", "Ras Al Khaimah",
        ],
    ),
    (
        "🇸🇦 Saudi Arabia",
        &[
            "Riyadh", "Jeddah", "Mecca", "Medina", "Dammam",
        ],
    ),
    (
        "🇹🇷 Turkey",
        &[
            "Istanbul", "Ankara", "Izmir", "Antalya", "Bursa", "Adana",
        ],
    ),
    (
        "🇮🇱 Israel",
        &[
            "Jerusalem", "Tel Aviv", "Haifa", "Beersheba",
        ],
    ),
    (
        "🇺🇸 United States",
        &[
            "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
            "San Antonio", "San Diego", "Dallas", "San Jose", "Austin", "Jacksonville",
            "San Francisco", "Seattle", "Denver", "Washington", "Boston", "Nashville",
            "Las Vegas", "Portland", "Miami", "Atlanta", "Orlando", "New Orleans", "Honolulu",
        ],
    ),
    (
        "🇨🇦 Canada",
        &[
            "Toronto", "Montreal", "Vancouver", "Calgary", "Edmonton", "Ottawa", "Winnipeg",
            "Quebec City",
        ],
    ),
    (
        "🇲🇽 Mexico",
        &[
            "Mexico City", "Guadalajara", "Monterrey", "Puebla", "Tijuana", "Cancun", "Merida",
        ],
    ),
    (
        "🇧🇷 Brazil",
        &[
            "São Paulo", "Rio de Janeiro", "Brasília", "Salvador", "Fortaleza", "Belo Horizonte",
            "Manaus", "Curitiba", "Recife", "Porto Alegre",
        ],
    ),
    (
        "🇦🇷 Argentina",
        &[
            "Buenos Aires", "Córdoba", "Rosario", "Mendoza", "La Plata", "Mar del Plata",
        ],
    ),
    (
        "🇨🇱 Chile",
        &[
            "Santiago", "Valparaíso", "Concepción", "La Serena", "Viña del Mar",
        ],
    ),
    (
        "🇨🇴 Colombia",
        &[
            "Bogotá", "Medellín", "Cali", "Barranquilla", "Cartagena",
        ],
    ),
    (
        "🇵🇪 Peru",
        &[
            "Lima", "Arequipa", "Cusco", "Trujillo",
        ],
    ),
    (
        "🇬🇧 United Kingdom",
        &[
            "London", "Manchester", "Birmingham", "Glasgow", "Liverpool", "Edinburgh", "Leeds",
            "Bristol", "Newcastle", "Sheffield", "Belfast", "Cardiff",
        ],
    ),
    (
        "🇫🇷 France",
        &[
            "Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Nantes", "Strasbourg",
            "Montpellier", "Bordeaux", "Lille", "Cannes", "Monaco",
        ],
    ),
    (
        "🇩🇪 Germany",
        &[
            "Berlin", "Munich", "Hamburg", "Frankfurt", "Cologne", "Stuttgart", "Düsseldorf",
            "Dortmund", "Leipzig", "Dresden", "Nuremberg",
        ],
    ),
    (
        "🇮🇹 Italy",
        &[
            "Rome", "Milan", "Naples", "Turin", "Palermo", "Genoa", "Bologna", "Florence",
            "Venice", "Verona", "Pisa",
        ],
    ),
    (
        "🇪🇸 Spain",
        &[
            "Madrid", "Barcelona", "Valencia", "Seville", "Zaragoza", "Málaga", "Bilbao",
            "Granada", "Alicante", "Córdoba", "Ibiza", "Mallorca",
        ],
    ),
    (
        "🇳🇱 Netherlands",
        &[
            "Amsterdam", "Rotterdam", "The Hague", "Utrecht", "Eindhoven", "Groningen",
        ],
    ),
    (
        "🇧🇪 Belgium",
        &[
            "Brussels", "Antwerp", "Ghent", "Bruges", "Liège",
        ],
    ),
    (
        "🇨🇭 Switzerland",
        &[
            "Zurich", "Geneva", "Basel", "Lausanne", "Bern", "Lucerne",
        ],
    ),
    (
        "🇦🇹 Austria",
        &[
            "Vienna", "Salzburg", "Innsbruck", "Graz",
        ],
    ),
    (
        "🇵🇱 Poland",
        &[
            "Warsaw", "Kraków", "Wrocław", "Poznań", "Gdańsk",
        ],
    ),
    (
        "🇨🇿 Czech Republic",
        &[
            "Prague", "Brno", "Ostrava", "Plzeň",
        ],
    ),
    (
        "🇭🇺 Hungary",
        &[
            "Budapest", "Debrecen", "Szeged",
        ],
    ),
    (
        "🇷🇺 Russia",
        &[
            "Moscow", "Saint Petersburg", "Novosibirsk", "Yekaterinburg", "Kazan", "Sochi",
        ],
    ),
    (
        "🇺🇦 Ukraine",
        &[
            "Kyiv", "Kharkiv", "Odesa", "Lviv", "Dnipro",
        ],
    ),
    (
        "🇸🇪 Sweden",
        &[
            "Stockholm", "Gothenburg", "Malmö", "Uppsala",
        ],
    ),
    (
        "🇳🇴 Norway",
        &[
            "Oslo", "Bergen", "Trondheim", "Stavanger",
        ],
    ),
    (
        "🇩🇰 Denmark",
        &[
            "Copenhagen", "Aarhus", "Odense",
        ],
    ),
    (
        "🇫🇮 Finland",
        &[
            "Helsinki", "Espoo", "Tampere", "Turku",
        ],
    ),
    (
        "🇮🇪 Ireland",
        &[
            "Dublin", "Cork", "Galway", "Limerick",
        ],
    ),
    (
        "🇵🇹 Portugal",
        &[
            "Lisbon", "Porto", "Faro", "Braga", "Coimbra",
        ],
    ),
    (
        "🇬🇷 Greece",
        &[
            "Athens", "Thessaloniki", "Patras", "Heraklion", "Santorini", "Mykonos",
        ],
    ),
    (
        "🇪🇬 Egypt",
        &[
            "Cairo", "Alexandria", "Giza", "Luxor", "Aswan", "Sharm El Sheikh",
        ],
    ),
    (
        "🇿🇦 South Africa",
        &[
            "Johannesburg", "Cape Town", "Durban", "Pretoria", "Port Elizabeth",
        ],
    ),
    (
        "🇳🇬 Nigeria",
        &[
            "Lagos", "Abuja", "Kano", "Ibadan", "Port Harcourt",
        ],
    ),
    (
        "🇰🇪 Kenya",
        &[
            "Nairobi", "Mombasa", "Kisumu", "Nakuru",
        ],
    ),
    (
        "🇲🇦 Morocco",
        &[
            "Casablanca", "Rabat", "Marrakech", "Fez", "Tangier",
        ],
    ),
    (
        "🇹🇳 Tunisia",
        &[
            "Tunis", "Sfax", "Sousse",
        ],
    ),
    (
        "🇦🇺 Australia",
        &[
            "Sydney", "Melbourne", "Brisbane", "Perth", "Adelaide", "Gold Coast", "Canberra",
            "Newcastle", "Hobart", "Darwin",
        ],
    ),
    (
        "🇳🇿 New Zealand",
        &[
            "Auckland", "Wellington", "Christchurch", "Hamilton", "Dunedin", "Queenstown",
        ],
    ),
];

/// Continental groups for quick selection, keyed by the flags of their regions.
pub const REGION_GROUPS: &[(&str, &[&str])] = &[
    (
        "🌏 Asia & Middle East",
        &[
            "🇻🇳", "🇯🇵", "🇰🇷", "🇨🇳", "🇹🇭", "🇸🇬", "🇲🇾", "🇮🇩", "🇵🇭", "🇮🇳", "🇦🇪", "🇸🇦", "🇹🇷", "🇮🇱",
        ],
    ),
    ("🌎 Americas", &["🇺🇸", "🇨🇦", "🇲🇽", "🇧🇷", "🇦🇷", "🇨🇱", "🇨🇴", "🇵🇪"]),
    (
        "🌍 Europe",
        &[
            "🇬🇧", "🇫🇷", "🇩🇪", "🇮🇹", "🇪🇸", "🇳🇱", "🇧🇪", "🇨🇭", "🇦🇹", "🇵🇱", "🇨🇿", "🇭🇺", "🇷🇺", "🇺🇦",
            "🇸🇪", "🇳🇴", "🇩🇰", "🇫🇮", "🇮🇪", "🇵🇹", "🇬🇷",
        ],
    ),
    ("🌍 Africa", &["🇪🇬", "🇿🇦", "🇳🇬", "🇰🇪", "🇲🇦", "🇹🇳"]),
    ("🌏 Oceania", &["🇦🇺", "🇳🇿"]),
];

pub fn region_labels() -> impl Iterator<Item = &'static str> {
    REGIONS.iter().map(|(label, _)| *label)
}

pub fn cities_in(region: &str) -> Option<&'static [&'static str]> {
    REGIONS
        .iter()
        .find(|(label, _)| *label == region)
        .map(|(_, cities)| *cities)
}

/// Every city in region-then-city order. Names listed under more than one
/// region appear once per region.
pub fn all_cities() -> Vec<&'static str> {
    REGIONS
        .iter()
        .flat_map(|(_, cities)| cities.iter().copied())
        .collect()
}

/// Regions belonging to a continental group, in catalog order.
pub fn regions_in_group(group: &str) -> Vec<&'static str> {
    let Some((_, flags)) = REGION_GROUPS.iter().find(|(name, _)| *name == group) else {
        return Vec::new();
    };
    region_labels()
        .filter(|label| flags.iter().any(|flag| label.contains(*flag)))
        .collect()
}

/// Cities offered for a region, with [`ALL_CITIES_LABEL`] meaning the whole catalog.
pub fn available_cities(region: &str) -> Option<Vec<&'static str>> {
    if region == ALL_CITIES_LABEL {
        return Some(all_cities());
    }
    cities_in(region).map(<[&str]>::to_vec)
}

/// Case-insensitive lookup of a region by label, or by its name without the flag.
pub fn find_region(query: &str) -> Option<&'static str> {
    let query = query.trim();
    if query.eq_ignore_ascii_case(ALL_CITIES_LABEL) {
        return Some(ALL_CITIES_LABEL);
    }
    region_labels().find(|label| {
        label.eq_ignore_ascii_case(query)
            || label
                .split_once(' ')
                .is_some_and(|(_, name)| name.eq_ignore_ascii_case(query))
    })
}

/// The first few [`DEFAULT_CITIES`] that the given list offers.
pub fn default_selection(available: &[&str]) -> Vec<String> {
    DEFAULT_CITIES
        .iter()
        .filter(|city| available.contains(*city))
        .take(DEFAULT_SELECTION_LEN)
        .map(|city| city.to_string())
        .collect()
}

/// Appends a free-form city unless it is blank or already selected.
pub fn add_custom_city(selection: &mut Vec<String>, custom: &str) -> bool {
    let city = custom.trim();
    if city.is_empty() || selection.iter().any(|c| c == city) {
        return false;
    }
    selection.push(city.to_string());
    true
}

pub fn refresh_label(secs: u64) -> Option<&'static str> {
    REFRESH_OPTIONS
        .iter()
        .find(|(_, s)| *s == secs)
        .map(|(label, _)| *label)
}
