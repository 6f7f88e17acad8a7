//! Embedded event list. Replaced at startup by `EVENTS_FILE` when set.

use std::collections::HashMap;

use crate::types::Event;

fn flags(pairs: &[(&str, bool)]) -> HashMap<String, bool> {
  pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn event(
  id: u32,
  title: &str,
  url: &str,
  category: &str,
  description: &str,
  attrs: &[(&str, bool)],
) -> Event {
  Event {
    id,
    title: title.to_string(),
    url: url.to_string(),
    category: category.to_string(),
    description: description.to_string(),
    attributes: flags(attrs),
  }
}

/// The advertised NYE lineup.
pub fn builtin_events() -> Vec<Event> {
  vec![
    event(
      1,
      "Family NYE at Dallas BBQ",
      "https://nycnewyears.com/new-years-eve-at-dallas-bbq/",
      "Family Friendly",
      "Family-friendly NYE celebration",
      &[
        ("isFamily", true),
        ("hasBallDrop", false),
        ("isRooftop", false),
        ("isCruise", false),
        ("hasAlcohol", true),
        ("hasNonAlcohol", true),
      ],
    ),
    event(
      2,
      "Circle Line NYE Fireworks Cruise",
      "https://nycnewyears.com/circle-line-fireworks-cruise/",
      "Cruise",
      "Midnight fireworks from the Hudson with a full dinner buffet",
      &[
        ("isFamily", false),
        ("hasBallDrop", false),
        ("isRooftop", false),
        ("isCruise", true),
        ("hasAlcohol", true),
        ("hasNonAlcohol", true),
      ],
    ),
    event(
      3,
      "Skylark Rooftop Countdown",
      "https://nycnewyears.com/skylark-rooftop-countdown/",
      "Rooftop",
      "Open bar and skyline views from the 30th floor",
      &[
        ("isFamily", false),
        ("hasBallDrop", false),
        ("isRooftop", true),
        ("isCruise", false),
        ("hasAlcohol", true),
        ("hasNonAlcohol", false),
      ],
    ),
    event(
      4,
      "Times Square Ball Drop Viewing Party",
      "https://nycnewyears.com/times-square-ball-drop-viewing/",
      "Times Square",
      "Indoor viewing party with a direct line of sight to the ball",
      &[
        ("isFamily", false),
        ("hasBallDrop", true),
        ("isRooftop", false),
        ("isCruise", false),
        ("hasAlcohol", true),
        ("hasNonAlcohol", true),
      ],
    ),
    event(
      5,
      "Hornblower Infinity NYE Dinner Cruise",
      "https://nycnewyears.com/hornblower-infinity-nye/",
      "Cruise",
      "Three-deck yacht with dinner seatings and a midnight toast",
      &[
        ("isFamily", false),
        ("hasBallDrop", false),
        ("isRooftop", false),
        ("isCruise", true),
        ("hasAlcohol", true),
        ("hasNonAlcohol", false),
      ],
    ),
    event(
      6,
      "Early Countdown Family Celebration",
      "https://nycnewyears.com/early-countdown-family-celebration/",
      "Family Friendly",
      "Confetti drop at 9pm so the kids make it to midnight somewhere else",
      &[
        ("isFamily", true),
        ("hasBallDrop", true),
        ("isRooftop", false),
        ("isCruise", false),
        ("hasAlcohol", false),
        ("hasNonAlcohol", true),
      ],
    ),
  ]
}
