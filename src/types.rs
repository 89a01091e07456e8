use serde::{Deserialize, Serialize};

/// A full multi-week training plan assigned to a client.
/// Immutable for the session; the routine view never writes into it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub name: String,
    pub phase: String,
    pub load: String,
    pub weeks: Vec<Week>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub week_number: u32,
    pub days: Vec<Day>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub day_number: u32,
    pub focus: String,
    pub exercises: Vec<Exercise>,
}

/// All four fields are display strings ("3-4", "AMRAP", "90 s"...);
/// nothing numeric is enforced on them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub rest: String,
}

impl Exercise {
    pub fn new(name: &str, sets: &str, reps: &str, rest: &str) -> Self {
        Self {
            name: name.to_string(),
            sets: sets.to_string(),
            reps: reps.to_string(),
            rest: rest.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Unix seconds; shown as "miembro desde" on the profile page.
    pub member_since: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    pub access_token: String,
    pub user: AuthUser,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AppView {
    Home,
    About,
    Trainers,
    Plans,
    Training(String),
    Login,
    Register,
    Profile,
    Routine,
}
