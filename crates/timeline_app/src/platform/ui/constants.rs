/// Resources fetched by the binary, in fetch order.
pub const ENDPOINTS: [&str; 3] = [
    "https://api.myjson.com/bins/2qjdn",
    "https://api.myjson.com/bins/3zjqz",
    "https://api.myjson.com/bins/29e3f",
];

/// Named output slots for the aggregate counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterSlot {
    TotalTweets,
    TotalPhotos,
    TotalFavourites,
}

impl CounterSlot {
    pub const ALL: [CounterSlot; 3] = [
        CounterSlot::TotalTweets,
        CounterSlot::TotalPhotos,
        CounterSlot::TotalFavourites,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CounterSlot::TotalTweets => "Tweets",
            CounterSlot::TotalPhotos => "Photos",
            CounterSlot::TotalFavourites => "Favourites",
        }
    }
}
