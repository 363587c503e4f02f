use serde_derive::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};
use thiserror::Error;

#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum RosterError {
    #[error("activity {0:?} not found")]
    UnknownActivity(String),
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("{email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: String },
}

/// Activity directory keyed by activity name. `max_participants` is
/// advisory and never enforced against the roster.
#[derive(Clone, Debug)]
pub struct ActivityMap {
    inner: Arc<Mutex<BTreeMap<String, Activity>>>,
}

impl ActivityMap {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(activities)),
        }
    }

    /// The fixed sample directory every instance starts with. Nothing
    /// creates or deletes activities at runtime.
    pub fn seeded() -> Self {
        let seed = [
            (
                "Chess Club",
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"][..],
            ),
            (
                "Programming Class",
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"][..],
            ),
            (
                "Gym Class",
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"][..],
            ),
            (
                "Soccer Team",
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"][..],
            ),
            (
                "Basketball Team",
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"][..],
            ),
            (
                "Art Club",
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu", "harper@mergington.edu"][..],
            ),
            (
                "Drama Club",
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"][..],
            ),
            (
                "Math Club",
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"][..],
            ),
            (
                "Debate Team",
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"][..],
            ),
        ];

        let activities = seed
            .into_iter()
            .map(|(name, description, schedule, max_participants, participants)| {
                (
                    name.to_owned(),
                    Activity {
                        description: description.to_owned(),
                        schedule: schedule.to_owned(),
                        max_participants,
                        participants: participants.iter().map(|email| (*email).to_owned()).collect(),
                    },
                )
            })
            .collect();

        Self::new(activities)
    }

    pub fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.lock().clone()
    }

    pub fn sign_up(&self, activity: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.lock();
        let entry = activities
            .get_mut(activity)
            .ok_or_else(|| RosterError::UnknownActivity(activity.to_owned()))?;

        if entry.participants.iter().any(|p| p == email) {
            return Err(RosterError::AlreadySignedUp {
                activity: activity.to_owned(),
                email: email.to_owned(),
            });
        }

        entry.participants.push(email.to_owned());
        Ok(())
    }

    pub fn unregister(&self, activity: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.lock();
        let entry = activities
            .get_mut(activity)
            .ok_or_else(|| RosterError::UnknownActivity(activity.to_owned()))?;

        let position = entry.participants.iter().position(|p| p == email).ok_or_else(|| {
            RosterError::NotSignedUp {
                activity: activity.to_owned(),
                email: email.to_owned(),
            }
        })?;

        entry.participants.remove(position);
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, Activity>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_directory_is_complete() {
        let activities = ActivityMap::seeded().snapshot();

        assert_eq!(activities.len(), 9);

        let chess = &activities["Chess Club"];
        assert_eq!(
            chess.description,
            "Learn strategies and compete in chess tournaments"
        );
        assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }

    #[test]
    fn sign_up_appends_to_roster() {
        let activities = ActivityMap::seeded();

        activities
            .sign_up("Chess Club", "new@mergington.edu")
            .expect("Failed to sign up");

        let chess = &activities.snapshot()["Chess Club"];
        assert_eq!(
            chess.participants,
            vec![
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "new@mergington.edu"
            ]
        );
    }

    #[test]
    fn duplicate_sign_up_is_rejected() {
        let activities = ActivityMap::seeded();

        let err = activities
            .sign_up("Chess Club", "michael@mergington.edu")
            .expect_err("Duplicate signup must fail");

        assert_eq!(
            err,
            RosterError::AlreadySignedUp {
                activity: "Chess Club".to_owned(),
                email: "michael@mergington.edu".to_owned(),
            }
        );

        let chess = &activities.snapshot()["Chess Club"];
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }

    #[test]
    fn sign_up_for_unknown_activity_is_rejected() {
        let activities = ActivityMap::seeded();

        let err = activities
            .sign_up("Knitting Circle", "new@mergington.edu")
            .expect_err("Unknown activity must fail");

        assert_eq!(err, RosterError::UnknownActivity("Knitting Circle".to_owned()));
    }

    #[test]
    fn unregister_removes_exactly_one_entry() {
        let activities = ActivityMap::seeded();

        activities
            .unregister("Chess Club", "michael@mergington.edu")
            .expect("Failed to unregister");

        let chess = &activities.snapshot()["Chess Club"];
        assert_eq!(chess.participants, vec!["daniel@mergington.edu"]);
    }

    #[test]
    fn unregister_of_absent_email_is_rejected() {
        let activities = ActivityMap::seeded();

        let err = activities
            .unregister("Chess Club", "ghost@mergington.edu")
            .expect_err("Absent email must fail");

        assert_eq!(
            err,
            RosterError::NotSignedUp {
                activity: "Chess Club".to_owned(),
                email: "ghost@mergington.edu".to_owned(),
            }
        );

        let chess = &activities.snapshot()["Chess Club"];
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }

    #[test]
    fn max_participants_is_not_enforced() {
        let activities = ActivityMap::new(BTreeMap::from([(
            "Tiny Club".to_owned(),
            Activity {
                description: "A club with one seat".to_owned(),
                schedule: "Mondays".to_owned(),
                max_participants: 1,
                participants: vec!["first@mergington.edu".to_owned()],
            },
        )]));

        activities
            .sign_up("Tiny Club", "second@mergington.edu")
            .expect("Advisory capacity must not block signup");

        assert_eq!(activities.snapshot()["Tiny Club"].participants.len(), 2);
    }
}
