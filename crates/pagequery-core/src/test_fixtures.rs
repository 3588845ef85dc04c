#![allow(unreachable_pub, dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use pagequery_derive::{FieldEnum, Record};

///
/// Status
///

#[derive(Clone, Copy, Debug, Eq, FieldEnum, PartialEq)]
pub enum Status {
    Draft,
    Active,
    Archived,
}

///
/// Tag
///

#[derive(Clone, Debug, Record)]
pub struct Tag {
    pub name: String,
    pub weight: u32,
}

///
/// Address
///

#[derive(Clone, Debug, Default, Record)]
pub struct Address {
    pub city: String,
}

///
/// Book
///

#[derive(Clone, Debug, Record)]
pub struct Book {
    pub title: String,
    pub tags: Vec<Tag>,
}

///
/// Author
///

#[derive(Clone, Debug, Default, Record)]
pub struct Author {
    pub name: String,
    pub address: Address,
    pub books: Vec<Book>,
}

///
/// Post
///

#[derive(Clone, Debug, Record)]
#[query(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub published_on: Option<NaiveDate>,
    pub score: f64,
    pub pinned: bool,
    pub tags: Vec<Tag>,
    pub labels: Vec<String>,
    pub author: Author,
    #[query(skip)]
    pub revision: u32,
    secret: String,
}

impl Post {
    /// Post created at noon UTC on the given day of September 2022.
    pub fn new(id: u64, title: &str, status: Status, day: u32) -> Self {
        Self {
            id,
            title: title.to_string(),
            status,
            created_at: at_noon(2022, 9, day),
            published_on: None,
            score: 0.0,
            pinned: false,
            tags: Vec::new(),
            labels: Vec::new(),
            author: Author::default(),
            revision: 0,
            secret: String::new(),
        }
    }

    pub fn with_tags(mut self, tags: &[(&str, u32)]) -> Self {
        self.tags = tags
            .iter()
            .map(|(name, weight)| Tag {
                name: (*name).to_string(),
                weight: *weight,
            })
            .collect();
        self
    }

    pub fn with_labels(mut self, labels: &[&str]) -> Self {
        self.labels = labels.iter().map(|label| (*label).to_string()).collect();
        self
    }

    pub fn with_author(mut self, name: &str, city: &str) -> Self {
        self.author = Author {
            name: name.to_string(),
            address: Address {
                city: city.to_string(),
            },
            books: Vec::new(),
        };
        self
    }

    pub const fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub const fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    pub fn published(mut self, year: i32, month: u32, day: u32) -> Self {
        self.published_on = NaiveDate::from_ymd_opt(year, month, day);
        self
    }
}

pub fn at_noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Five posts with distinct ids, titles, statuses and days.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post::new(1, "Release notes", Status::Active, 20)
            .with_tags(&[("important", 3), ("release", 1)])
            .with_labels(&["news"])
            .with_author("Ada", "London")
            .with_score(4.5)
            .pinned()
            .published(2022, 9, 20),
        Post::new(2, "Testing guide", Status::Draft, 21)
            .with_tags(&[("howto", 2)])
            .with_labels(&["docs", "Testing"])
            .with_author("Grace", "Arlington")
            .with_score(3.0),
        Post::new(3, "Test plan", Status::Active, 22)
            .with_tags(&[("Important", 1)])
            .with_author("Ada", "London")
            .with_score(2.0),
        Post::new(4, "Roadmap", Status::Archived, 21)
            .with_labels(&["news", "plans"])
            .with_author("Linus", "Portland")
            .with_score(5.0)
            .published(2022, 9, 25),
        Post::new(5, "Changelog", Status::Active, 23)
            .with_tags(&[("release", 4)])
            .with_author("Grace", "Arlington")
            .with_score(1.5),
    ]
}
