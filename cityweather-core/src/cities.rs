//! Static city reference list and the autocomplete filter over it.

/// Every city the search box knows about, in display order.
pub const CITIES: &[&str] = &[
    "Islamabad",
    "Lahore",
    "Karachi",
    "Multan",
    "Rawalpindi",
    "Peshawar",
    "Quetta",
    "Faisalabad",
    "Bahawalpur",
    "Sialkot",
    "Gujranwala",
    "Sukkur",
    "Hyderabad",
    "Sargodha",
    "Dera Ghazi Khan",
    "Abbottabad",
    "Kabul",
    "Dhaka",
    "Colombo",
    "Kathmandu",
    "Yangon",
    "Manila",
    "Hanoi",
    "Kuala Lumpur",
    "Jakarta",
    "Singapore",
    "Tashkent",
    "Bishkek",
    "Bangkok",
    "Beijing",
    "Tokyo",
    "Seoul",
    "Mumbai",
    "Delhi",
    "Chennai",
    "Bangalore",
    "Shanghai",
    "Addis Ababa",
    "Auckland",
    "Berlin",
    "Bogotá",
    "Brisbane",
    "Buenos Aires",
    "Cairo",
    "Chicago",
    "London",
    "Los Angeles",
    "Madrid",
    "Melbourne",
    "Mexico City",
    "Nairobi",
    "New York City",
    "Paris",
    "Rome",
    "Santiago",
    "São Paulo",
    "Sydney",
    "Toronto",
    "Vihari",
    "Wellington",
];

/// Shortlist shown while the query is empty.
pub const POPULAR_CITIES: &[&str] = &[
    "Islamabad",
    "Lahore",
    "Karachi",
    "London",
    "New York City",
];

/// Filter result as the search box should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityMatches {
    Suggestions(Vec<&'static str>),
    NotFound,
}

impl CityMatches {
    pub fn for_query(query: &str) -> Self {
        let found = filter_cities(query);
        if found.is_empty() {
            CityMatches::NotFound
        } else {
            CityMatches::Suggestions(found)
        }
    }

    pub fn as_slice(&self) -> &[&'static str] {
        match self {
            CityMatches::Suggestions(cities) => cities,
            CityMatches::NotFound => &[],
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CityMatches::NotFound)
    }
}

/// Filter the built-in city list for `query`.
pub fn filter_cities(query: &str) -> Vec<&'static str> {
    filter_in(CITIES, POPULAR_CITIES, query)
}

/// An empty query yields `popular` unchanged. Otherwise every entry of
/// `reference` containing `query` case-insensitively, in reference order.
pub fn filter_in<'a>(reference: &[&'a str], popular: &[&'a str], query: &str) -> Vec<&'a str> {
    if query.is_empty() {
        return popular.to_vec();
    }

    let needle = query.to_lowercase();
    reference
        .iter()
        .copied()
        .filter(|city| city.to_lowercase().contains(&needle))
        .collect()
}
