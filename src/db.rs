//! Database pool construction and the default tour catalog used by the
//! startup seed and the admin reseed endpoint.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::errors::Result;
use crate::models::{ItineraryDay, NewTour, TourStatus};

pub async fn connect(database_url: &str) -> Result<PgPool> {
  let pool = PgPoolOptions::new()
    .max_connections(10)
    .connect(database_url)
    .await?;
  Ok(pool)
}

fn day(label: &str, detail: &str) -> ItineraryDay {
  ItineraryDay {
    label: label.to_string(),
    detail: detail.to_string(),
  }
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

/// The catalog a fresh deployment starts with. Adapted from the operator's
/// real lineup so an empty database still renders a sellable site.
pub fn default_tours() -> Vec<NewTour> {
  vec![
    NewTour {
      slug: None,
      title: "7 Days Kenya Safari".to_string(),
      location: "Kenya - Amboseli, Lake Nakuru, Maasai Mara".to_string(),
      duration: "7 Days / 6 Nights".to_string(),
      price: 1800.0,
      overview: Some(
        "Embark on a thrilling 7-day safari adventure across Kenya, exploring Amboseli \
         National Park famous for its large elephant population and Mt. Kilimanjaro views, \
         Lake Nakuru known for pink flamingos, and the world-famous Maasai Mara with the \
         great migration."
          .to_string(),
      ),
      highlights: strings(&[
        "Mt. Kilimanjaro views from Amboseli",
        "Pink flamingo lake viewing",
        "Great Migration in Maasai Mara",
        "Big Five wildlife viewing",
        "Game drives and cultural visits",
      ]),
      inclusions: strings(&[
        "Park entrance fees",
        "Accommodation (full board)",
        "English-speaking driver guides",
        "All meals per itinerary",
        "Game drives in 4WD safari vehicle",
        "Airport pickups and transfers",
      ]),
      exclusions: strings(&[
        "International flights",
        "Travel insurance",
        "Personal items and laundry",
        "Tips and beverages",
        "Activities outside itinerary",
      ]),
      itinerary: vec![
        day("Day 1", "Arrival in Nairobi - National Museum and Snake Park visit"),
        day("Day 2", "Nairobi to Amboseli National Park with game drives"),
        day("Day 3", "Amboseli to Lake Elementaita and Lake Nakuru"),
        day("Day 4", "Lake Nakuru to Maasai Mara with afternoon game drive"),
        day("Day 5", "Full-day Maasai Mara game drives"),
        day("Day 6", "Maasai Mara to Nairobi"),
        day("Day 7", "Departure"),
      ],
      image_url: "https://images.example.com/tours/7-days-kenya-safari.jpg".to_string(),
      gallery: vec![],
      status: TourStatus::Published,
      featured: true,
    },
    NewTour {
      slug: None,
      title: "8 Days Kenya Safari Experience".to_string(),
      location: "Kenya - Olpejeta, Lake Nakuru, Lake Naivasha, Maasai Mara".to_string(),
      duration: "8 Days / 7 Nights".to_string(),
      price: 2500.0,
      overview: Some(
        "The ideal 8-day Kenya safari to see the best that Kenya has to offer. Experience \
         the spectacular Olpejeta Conservancy, visit Lake Naivasha and Crescent Island, \
         the bird-watchers paradise of Lake Nakuru, and the world-famous Maasai Mara."
          .to_string(),
      ),
      highlights: strings(&[
        "White rhinos at Olpejeta Conservancy",
        "Night game drives",
        "Pink flamingos at Lake Nakuru",
        "Hell's Gate and Olkaria geothermal area",
        "Crescent Island boat cruise",
        "Maasai cultural experience",
      ]),
      inclusions: strings(&[
        "Park entrance fees",
        "Accommodation (full board)",
        "English-speaking driver guides",
        "Night game drive",
        "Airport transfers",
        "Custom 4WD safari van with pop-up roof",
        "Maasai village visit",
      ]),
      exclusions: strings(&[
        "International flights",
        "Travel insurance",
        "Hot air balloon safari (optional)",
        "Personal items",
        "Tips and beverages",
      ]),
      itinerary: vec![
        day("Day 1", "Arrival - Transfer to Olpejeta Conservancy (Night game drive)"),
        day("Day 2", "Transfer to Lake Nakuru - Evening lake view game drive"),
        day("Day 3", "Morning game drive - Afternoon bicycle experience"),
        day("Day 4", "Hell's Gate and Olkaria - Afternoon Crescent Island boat cruise"),
        day("Day 5", "Transfer to Maasai Mara"),
        day("Day 6", "Full-day Maasai Mara game drives"),
        day("Day 7", "Maasai Mara and cultural experience"),
        day("Day 8", "Return to Nairobi"),
      ],
      image_url: "https://images.example.com/tours/8-days-kenya-safari.jpg".to_string(),
      gallery: vec![],
      status: TourStatus::Published,
      featured: true,
    },
    NewTour {
      slug: None,
      title: "Lake Nakuru Full-Day Tour".to_string(),
      location: "Kenya - Lake Nakuru National Park".to_string(),
      duration: "1 Day".to_string(),
      price: 180.0,
      overview: Some(
        "Discover the beautiful Lake Nakuru National Park, famous for its thousands of \
         pink flamingos and abundant wildlife. Game drives, photography, boat rides, and \
         the magical Crescent Island Game Sanctuary."
          .to_string(),
      ),
      highlights: strings(&[
        "Millions of pink flamingos",
        "Rothschild giraffes",
        "Over 450 bird species",
        "Crescent Island wildlife sanctuary",
        "Boat ride on the lake",
      ]),
      inclusions: strings(&[
        "Transport",
        "Park entrance fees",
        "Boat ride",
        "Crescent Island visit",
        "All taxes",
      ]),
      exclusions: strings(&["Lunch", "Photography permits", "Personal items", "Drinks and beverages"]),
      itinerary: vec![
        day("Morning", "Early breakfast, 3.5-hour drive from Nairobi to Lake Nakuru"),
        day("Mid-morning", "Game viewing drive with bird watching"),
        day("Afternoon", "Boat cruise to Crescent Island sanctuary"),
        day("Evening", "Photography at Great Rift Valley viewpoint, return to Nairobi"),
      ],
      image_url: "https://images.example.com/tours/lake-nakuru-day-tour.jpg".to_string(),
      gallery: vec![],
      status: TourStatus::Published,
      featured: false,
    },
  ]
}
