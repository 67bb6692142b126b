//! Static seed dataset
//!
//! The hand-curated iconic works ship as JSON embedded at compile time; the
//! remainder is generated from the tables below.

use artdealer_common::{Error, Result};

use crate::domain::entities::NewArtwork;

/// Upper bound on the assembled dataset
pub const MAX_SEED_ARTWORKS: usize = 1000;

const ICONIC_ARTWORKS_JSON: &str = include_str!("../../data/iconic_artworks.json");

const CONTEMPORARY_ARTISTS: &[&str] = &[
    "Kaws",
    "Banksy",
    "Takashi Murakami",
    "Damien Hirst",
    "Kerry James Marshall",
    "Kara Walker",
    "Ai Weiwei",
    "Olafur Eliasson",
    "Anselm Kiefer",
    "Gerhard Richter",
    "David Hockney",
    "Kehinde Wiley",
    "Yinka Shonibare",
    "Shirin Neshat",
    "Zhang Huan",
];

const CONTEMPORARY_PERIODS: &[&str] = &[
    "Contemporary",
    "Neo-Expressionism",
    "Conceptual Art",
    "Installation Art",
    "Digital Art",
    "Video Art",
    "Performance Art",
    "Street Art",
    "Post-Internet Art",
];

const CONTEMPORARY_MEDIUMS: &[&str] = &[
    "Mixed media",
    "Digital art",
    "Video installation",
    "Acrylic on canvas",
    "Oil on canvas",
    "Photography",
    "Sculpture",
    "Performance documentation",
    "LED installation",
    "Neon and glass",
    "Bronze sculpture",
    "Aluminum",
];

const CONTEMPORARY_MUSEUMS: &[&str] = &[
    "Tate Modern, London",
    "Museum of Modern Art, New York",
    "Centre Pompidou, Paris",
    "Guggenheim Museum, New York",
    "Whitney Museum, New York",
    "Broad Museum, Los Angeles",
    "Stedelijk Museum, Amsterdam",
    "Moderna Museet, Stockholm",
    "National Gallery of Canada, Ottawa",
    "Art Institute of Chicago",
    "Smithsonian American Art Museum",
    "Museum of Contemporary Art, Los Angeles",
];

const CONTEMPORARY_COUNT: usize = 200;

/// (title, artist, period, date)
const CLASSICAL_SCULPTURES: &[(&str, &str, &str, &str)] = &[
    ("Apollo Belvedere", "Leochares (attributed)", "Ancient Greek", "330-320 BCE"),
    ("The Thinker", "Auguste Rodin", "Modern", "1904"),
    ("The Gates of Hell", "Auguste Rodin", "Modern", "1880-1917"),
    ("The Burghers of Calais", "Auguste Rodin", "Modern", "1884-1895"),
    ("Liberty Enlightening the World", "Frédéric Auguste Bartholdi", "Modern", "1886"),
    ("Christ the Redeemer", "Paul Landowski", "Art Deco", "1931"),
    ("Mount Rushmore", "Gutzon Borglum", "Modern", "1927-1941"),
    ("The Motherland Calls", "Yevgeny Vuchetich", "Soviet Art", "1967"),
    ("Cloud Gate", "Anish Kapoor", "Contemporary", "2004"),
    ("Angel of the North", "Antony Gormley", "Contemporary", "1998"),
];

/// (series title, artist, number of works)
const SERIES: &[(&str, &str, usize)] = &[
    ("Water Lilies", "Claude Monet", 20),
    ("Haystacks", "Claude Monet", 15),
    ("Poplars", "Claude Monet", 12),
    ("Campbell's Soup Cans", "Andy Warhol", 32),
    ("Marilyn Monroe", "Andy Warhol", 10),
    ("Sunflowers", "Vincent van Gogh", 12),
    ("Self-Portraits", "Rembrandt van Rijn", 25),
    ("Rothko Chapel Paintings", "Mark Rothko", 14),
    ("Composition", "Piet Mondrian", 30),
];

/// (title, artist, period, region)
const REGIONAL_TRADITIONS: &[(&str, &str, &str, &str)] = &[
    ("Senufo Mask", "Senufo craftsman", "Traditional African", "Ivory Coast"),
    ("Ashanti Kente Cloth", "Ashanti weaver", "Traditional African", "Ghana"),
    ("Maasai Beadwork", "Maasai artisan", "Traditional African", "Kenya/Tanzania"),
    ("Ethiopian Coptic Cross", "Ethiopian metalworker", "Medieval African", "Ethiopia"),
    ("Ndebele House Painting", "Ndebele women", "Traditional African", "South Africa"),
    ("Talavera Pottery", "Pueblan potter", "Colonial Mexican", "Mexico"),
    ("Andean Textile", "Quechua weaver", "Pre-Columbian", "Peru"),
    ("Oaxacan Alebrijes", "Zapotec carver", "Folk Art", "Mexico"),
    ("Brazilian Carnival Costume", "Carnival artist", "Contemporary Folk", "Brazil"),
    ("Day of the Dead Altar", "Mexican family", "Folk Tradition", "Mexico"),
    ("Korean Celadon Vase", "Goryeo potter", "Medieval Korean", "Korea"),
    ("Thai Buddha Image", "Ayutthaya sculptor", "Classical Thai", "Thailand"),
    ("Vietnamese Lacquerware", "Vietnamese artisan", "Traditional Vietnamese", "Vietnam"),
    ("Indonesian Batik", "Javanese artist", "Traditional Indonesian", "Indonesia"),
    ("Philippine Santos", "Filipino carver", "Colonial Philippine", "Philippines"),
    ("Persian Miniature", "Safavid painter", "Persian Classical", "Iran"),
    ("Turkish Iznik Tile", "Ottoman ceramist", "Ottoman", "Turkey"),
    ("Moroccan Zellige", "Moroccan craftsman", "Islamic Art", "Morocco"),
    ("Lebanese Blown Glass", "Phoenician glassmaker", "Ancient", "Lebanon"),
    ("Egyptian Papyrus", "Ancient scribe", "Ancient Egyptian", "Egypt"),
];

/// (title, architect, period, location)
const ARCHITECTURE: &[(&str, &str, &str, &str)] = &[
    ("Parthenon", "Ictinus and Callicrates", "Ancient Greek", "Athens, Greece"),
    ("Colosseum", "Roman architects", "Roman Empire", "Rome, Italy"),
    ("Hagia Sophia", "Anthemius and Isidorus", "Byzantine", "Istanbul, Turkey"),
    ("Notre-Dame de Paris", "Medieval builders", "Gothic", "Paris, France"),
    ("Sagrada Família", "Antoni Gaudí", "Modernist", "Barcelona, Spain"),
    ("Sydney Opera House", "Jørn Utzon", "Modern", "Sydney, Australia"),
    ("Guggenheim Bilbao", "Frank Gehry", "Deconstructivist", "Bilbao, Spain"),
    ("Burj Khalifa", "Adrian Smith", "Contemporary", "Dubai, UAE"),
    ("Fallingwater", "Frank Lloyd Wright", "Modern", "Pennsylvania, USA"),
    ("Villa Savoye", "Le Corbusier", "Modernist", "Poissy, France"),
];

fn record(
    title: impl Into<String>,
    artist: &str,
    date: &str,
    period: &str,
    medium: &str,
    museum: impl Into<String>,
    description: String,
) -> NewArtwork {
    NewArtwork {
        title: title.into(),
        artist: artist.to_string(),
        date: Some(date.to_string()),
        period: Some(period.to_string()),
        medium: Some(medium.to_string()),
        dimensions: None,
        description: Some(description),
        museum: Some(museum.into()),
        image_url: None,
    }
}

/// Hand-curated works, parsed from the embedded JSON
pub fn iconic_artworks() -> Result<Vec<NewArtwork>> {
    serde_json::from_str(ICONIC_ARTWORKS_JSON)
        .map_err(|e| Error::Internal(format!("Invalid iconic artwork data: {}", e)))
}

fn classical_sculptures() -> impl Iterator<Item = NewArtwork> {
    CLASSICAL_SCULPTURES
        .iter()
        .map(|(title, artist, period, date)| {
            record(
                *title,
                artist,
                date,
                period,
                "Sculpture",
                "Various locations",
                format!("Famous {} sculpture by {}", period.to_lowercase(), artist),
            )
        })
}

fn series_works() -> impl Iterator<Item = NewArtwork> {
    SERIES.iter().flat_map(|(base, artist, count)| {
        (1..=*count).map(move |i| {
            record(
                format!("{} #{}", base, i),
                artist,
                "1890-1950",
                "Modern",
                "Oil on canvas",
                "Various museums worldwide",
                format!("Part of the famous {} series by {}", base, artist),
            )
        })
    })
}

fn contemporary_works() -> impl Iterator<Item = NewArtwork> {
    (0..CONTEMPORARY_COUNT).map(|i| {
        let artist = CONTEMPORARY_ARTISTS[i % CONTEMPORARY_ARTISTS.len()];
        let period = CONTEMPORARY_PERIODS[i % CONTEMPORARY_PERIODS.len()];
        record(
            format!("Untitled #{}", i + 1),
            artist,
            "2000-2025",
            period,
            CONTEMPORARY_MEDIUMS[i % CONTEMPORARY_MEDIUMS.len()],
            CONTEMPORARY_MUSEUMS[i % CONTEMPORARY_MUSEUMS.len()],
            format!("Contemporary {} work by {}", period.to_lowercase(), artist),
        )
    })
}

fn regional_traditions() -> impl Iterator<Item = NewArtwork> {
    REGIONAL_TRADITIONS
        .iter()
        .map(|(title, artist, period, region)| {
            record(
                *title,
                artist,
                "Various periods",
                period,
                "Traditional materials",
                format!("Regional museum in {}", region),
                format!(
                    "Traditional art from {} representing {} culture",
                    region,
                    period.to_lowercase()
                ),
            )
        })
}

fn architectural_works() -> impl Iterator<Item = NewArtwork> {
    ARCHITECTURE
        .iter()
        .map(|(title, architect, period, location)| {
            record(
                *title,
                architect,
                "Various periods",
                period,
                "Architecture",
                *location,
                format!(
                    "Iconic {} architecture designed by {}",
                    period.to_lowercase(),
                    architect
                ),
            )
        })
}

/// Generated works appended after the iconic list
pub fn generate_more_artworks() -> Vec<NewArtwork> {
    classical_sculptures()
        .chain(series_works())
        .chain(contemporary_works())
        .chain(regional_traditions())
        .chain(architectural_works())
        .collect()
}

/// The full seed dataset: iconic works first, capped at `MAX_SEED_ARTWORKS`
pub fn all_artworks() -> Result<Vec<NewArtwork>> {
    let mut artworks = iconic_artworks()?;
    artworks.extend(generate_more_artworks());
    artworks.truncate(MAX_SEED_ARTWORKS);
    Ok(artworks)
}
