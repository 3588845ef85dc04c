#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use pagequery::{FieldEnum, Record};

///
/// Stage
///

#[derive(Clone, Copy, Debug, Eq, FieldEnum, PartialEq)]
pub enum Stage {
    Backlog,
    Active,
    Done,
}

///
/// Label
///

#[derive(Clone, Debug, Record)]
pub struct Label {
    pub name: String,
}

///
/// Owner
///

#[derive(Clone, Debug, Record)]
pub struct Owner {
    pub login: String,
    pub teams: Vec<Team>,
}

///
/// Team
///

#[derive(Clone, Debug, Record)]
pub struct Team {
    pub name: String,
}

///
/// Ticket
///

#[derive(Clone, Debug, Record)]
#[query(rename_all = "camelCase")]
pub struct Ticket {
    pub id: u32,
    pub title: String,
    pub status: Stage,
    pub created_at: DateTime<Utc>,
    pub due_on: Option<NaiveDate>,
    pub labels: Vec<Label>,
    pub owner: Owner,
    #[query(rename = "points")]
    pub story_points: i32,
}

pub fn ticket(id: u32, title: &str, status: Stage, day: u32) -> Ticket {
    Ticket {
        id,
        title: title.to_string(),
        status,
        created_at: Utc
            .with_ymd_and_hms(2022, 9, day, 9, 0, 0)
            .single()
            .expect("valid timestamp"),
        due_on: None,
        labels: Vec::new(),
        owner: Owner {
            login: "nobody".to_string(),
            teams: Vec::new(),
        },
        story_points: 1,
    }
}

pub fn labelled(mut ticket: Ticket, labels: &[&str]) -> Ticket {
    ticket.labels = labels
        .iter()
        .map(|name| Label {
            name: (*name).to_string(),
        })
        .collect();
    ticket
}

pub fn owned(mut ticket: Ticket, login: &str, teams: &[&str]) -> Ticket {
    ticket.owner = Owner {
        login: login.to_string(),
        teams: teams
            .iter()
            .map(|name| Team {
                name: (*name).to_string(),
            })
            .collect(),
    };
    ticket
}

/// Twelve tickets, ids 1..=12, one per day from September 1st.
pub fn twelve() -> Vec<Ticket> {
    (1..=12)
        .map(|id| ticket(id, &format!("Ticket {id}"), Stage::Active, id))
        .collect()
}

/// Small mixed board used by filter and sort tests.
pub fn board() -> Vec<Ticket> {
    vec![
        owned(
            labelled(ticket(1, "Write test plan", Stage::Active, 21), &["important"]),
            "ada",
            &["core"],
        ),
        owned(
            labelled(ticket(2, "Fix flaky TEST", Stage::Backlog, 20), &["bug", "Important"]),
            "grace",
            &["infra"],
        ),
        owned(ticket(3, "Release", Stage::Active, 22), "ada", &["core", "infra"]),
        owned(
            labelled(ticket(4, "Docs", Stage::Done, 21), &["docs"]),
            "linus",
            &[],
        ),
        owned(ticket(5, "Triage", Stage::Active, 21), "grace", &["infra"]),
    ]
}
